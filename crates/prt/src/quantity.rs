//! Unit-typed conversions using [`uom`] quantities.
//!
//! These wrap the plain `f64` API (°C and Ω) so callers that already carry
//! `uom` quantities never have to unpack units by hand.
//!
//! ```
//! use prt::{SensorType, quantity};
//! use uom::si::{
//!     electrical_resistance::ohm, f64::ThermodynamicTemperature,
//!     thermodynamic_temperature::degree_celsius,
//! };
//!
//! let t = ThermodynamicTemperature::new::<degree_celsius>(100.0);
//! let r = quantity::resistance_at(t, SensorType::Pt100).unwrap();
//! assert!((r.get::<ohm>() - 138.5055).abs() < 1e-6);
//! ```

use uom::si::{
    electrical_resistance::ohm,
    f64::{ElectricalResistance, ThermodynamicTemperature},
    thermodynamic_temperature::degree_celsius,
};

use crate::{ConversionError, SensorSpec, Thermometer};

/// Returns the sensor resistance at `temperature`.
///
/// # Errors
///
/// See [`Thermometer::resistance`].
pub fn resistance_at(
    temperature: ThermodynamicTemperature,
    sensor: impl Into<SensorSpec>,
) -> Result<ElectricalResistance, ConversionError> {
    let ohms = Thermometer::new(sensor).resistance(temperature.get::<degree_celsius>())?;
    Ok(ElectricalResistance::new::<ohm>(ohms))
}

/// Returns the temperature at which the sensor reads `resistance`.
///
/// # Errors
///
/// See [`Thermometer::temperature`].
pub fn temperature_at(
    resistance: ElectricalResistance,
    sensor: impl Into<SensorSpec>,
) -> Result<ThermodynamicTemperature, ConversionError> {
    let celsius = Thermometer::new(sensor).temperature(resistance.get::<ohm>())?;
    Ok(ThermodynamicTemperature::new::<degree_celsius>(celsius))
}
