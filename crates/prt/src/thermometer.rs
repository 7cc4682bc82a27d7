use crate::{
    CallendarVanDusen, CoefficientSet, ConversionError, SensorSpec, SolverConfig, inverse,
};

/// A resolved sensor ready to convert in both directions.
///
/// The sensor spec is resolved once when the thermometer is built, so a
/// `Thermometer` is the cheapest way to convert many values for one sensor.
///
/// # Example
///
/// ```
/// use prt::{SensorType, Thermometer};
///
/// let pt1000 = Thermometer::new(SensorType::Pt1000);
/// let r = pt1000.resistance(25.0).unwrap();
/// let t = pt1000.temperature(r).unwrap();
/// assert!((t - 25.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thermometer {
    model: CallendarVanDusen,
    config: SolverConfig,
}

impl Thermometer {
    /// Creates a thermometer with the default solver configuration.
    #[must_use]
    pub fn new(sensor: impl Into<SensorSpec>) -> Self {
        Self {
            model: CallendarVanDusen::new(sensor.into().resolve()),
            config: SolverConfig::default(),
        }
    }

    /// Replaces the solver configuration used below 0 °C.
    #[must_use]
    pub fn with_config(self, config: SolverConfig) -> Self {
        Self { config, ..self }
    }

    #[must_use]
    pub fn coefficients(&self) -> &CoefficientSet {
        self.model.coefficients()
    }

    #[must_use]
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Returns the resistance in ohms at `temperature` in °C.
    ///
    /// # Errors
    ///
    /// Returns [`ConversionError::OutOfRange`] outside −200 °C..=850 °C.
    pub fn resistance(&self, temperature: f64) -> Result<f64, ConversionError> {
        self.model.resistance(temperature)
    }

    /// Returns the temperature in °C for `resistance` in ohms.
    ///
    /// # Errors
    ///
    /// Returns [`ConversionError::InvalidResistance`] for non-positive input,
    /// [`ConversionError::ResistanceOutOfRange`] outside the sensor's span,
    /// and [`ConversionError::Convergence`] if the iterative branch does not
    /// meet its tolerance.
    pub fn temperature(&self, resistance: f64) -> Result<f64, ConversionError> {
        inverse::temperature(&self.model, resistance, &self.config)
    }

    /// Converts a slice of temperatures, failing on the first invalid one.
    ///
    /// # Errors
    ///
    /// Same as [`Thermometer::resistance`].
    pub fn resistances(&self, temperatures: &[f64]) -> Result<Vec<f64>, ConversionError> {
        temperatures.iter().map(|&t| self.resistance(t)).collect()
    }

    /// Converts a slice of resistances, failing on the first invalid one.
    ///
    /// # Errors
    ///
    /// Same as [`Thermometer::temperature`].
    pub fn temperatures(&self, resistances: &[f64]) -> Result<Vec<f64>, ConversionError> {
        resistances.iter().map(|&r| self.temperature(r)).collect()
    }
}

/// Converts a temperature in °C to a resistance in ohms.
///
/// # Errors
///
/// Returns [`ConversionError::OutOfRange`] outside −200 °C..=850 °C.
pub fn temperature_to_resistance(
    temperature: f64,
    sensor: impl Into<SensorSpec>,
) -> Result<f64, ConversionError> {
    Thermometer::new(sensor).resistance(temperature)
}

/// Converts a resistance in ohms to a temperature in °C.
///
/// Below `R0` the result satisfies `|R(t) − resistance| <= 1e-9 Ω` and is
/// found in at most 100 iterations; see [`SolverConfig`].
///
/// # Errors
///
/// See [`Thermometer::temperature`].
pub fn resistance_to_temperature(
    resistance: f64,
    sensor: impl Into<SensorSpec>,
) -> Result<f64, ConversionError> {
    Thermometer::new(sensor).temperature(resistance)
}

/// Like [`resistance_to_temperature`] with a custom solver configuration.
///
/// # Errors
///
/// See [`Thermometer::temperature`].
pub fn resistance_to_temperature_with(
    resistance: f64,
    sensor: impl Into<SensorSpec>,
    config: &SolverConfig,
) -> Result<f64, ConversionError> {
    Thermometer::new(sensor)
        .with_config(*config)
        .temperature(resistance)
}

/// Short alias for [`temperature_to_resistance`].
///
/// # Errors
///
/// See [`temperature_to_resistance`].
pub fn t2r(temperature: f64, sensor: impl Into<SensorSpec>) -> Result<f64, ConversionError> {
    temperature_to_resistance(temperature, sensor)
}

/// Short alias for [`resistance_to_temperature`].
///
/// # Errors
///
/// See [`resistance_to_temperature`].
pub fn r2t(resistance: f64, sensor: impl Into<SensorSpec>) -> Result<f64, ConversionError> {
    resistance_to_temperature(resistance, sensor)
}
