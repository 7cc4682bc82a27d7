use std::{fmt, str::FromStr};

use crate::{CoefficientSet, ConversionError};

/// Standard platinum sensor families, named by their resistance at 0 °C.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "UPPERCASE")
)]
pub enum SensorType {
    Pt100,
    Pt200,
    Pt500,
    Pt1000,
}

impl SensorType {
    /// Every recognized family, in order of increasing `R0`.
    pub const ALL: [SensorType; 4] = [Self::Pt100, Self::Pt200, Self::Pt500, Self::Pt1000];

    /// Returns the nominal resistance at 0 °C in ohms.
    #[must_use]
    pub const fn nominal_resistance(self) -> f64 {
        match self {
            Self::Pt100 => 100.0,
            Self::Pt200 => 200.0,
            Self::Pt500 => 500.0,
            Self::Pt1000 => 1000.0,
        }
    }

    /// Returns the IEC 60751 coefficient set for this family.
    #[must_use]
    pub const fn coefficients(self) -> CoefficientSet {
        CoefficientSet::standard(self.nominal_resistance())
    }
}

impl fmt::Display for SensorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Pt100 => "PT100",
            Self::Pt200 => "PT200",
            Self::Pt500 => "PT500",
            Self::Pt1000 => "PT1000",
        };
        f.write_str(name)
    }
}

/// Parses names like `"PT100"`, `"pt1000"` or `"Pt-500"`.
impl FromStr for SensorType {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        let digits = name
            .strip_prefix("pt")
            .map(|rest| rest.strip_prefix('-').unwrap_or(rest));

        match digits {
            Some("100") => Ok(Self::Pt100),
            Some("200") => Ok(Self::Pt200),
            Some("500") => Ok(Self::Pt500),
            Some("1000") => Ok(Self::Pt1000),
            _ => Err(ConversionError::UnsupportedSensorType {
                name: s.trim().to_owned(),
            }),
        }
    }
}

/// Either a named sensor family or a caller-supplied coefficient set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SensorSpec {
    Named(SensorType),
    Custom(CoefficientSet),
}

impl SensorSpec {
    /// Builds a custom spec from raw Callendar-Van Dusen coefficients.
    ///
    /// # Errors
    ///
    /// Returns [`ConversionError::InvalidCoefficients`] if the values fail
    /// [`CoefficientSet::new`] validation.
    pub fn custom(a: f64, b: f64, c: f64, r0: f64) -> Result<Self, ConversionError> {
        Ok(Self::Custom(CoefficientSet::new(a, b, c, r0)?))
    }

    /// Returns the coefficient set this spec stands for.
    #[must_use]
    pub fn resolve(&self) -> CoefficientSet {
        match self {
            Self::Named(sensor) => sensor.coefficients(),
            Self::Custom(coefficients) => *coefficients,
        }
    }
}

impl From<SensorType> for SensorSpec {
    fn from(sensor: SensorType) -> Self {
        Self::Named(sensor)
    }
}

impl From<CoefficientSet> for SensorSpec {
    fn from(coefficients: CoefficientSet) -> Self {
        Self::Custom(coefficients)
    }
}

impl TryFrom<&str> for SensorSpec {
    type Error = ConversionError;

    fn try_from(name: &str) -> Result<Self, Self::Error> {
        name.parse::<SensorType>().map(Self::Named)
    }
}

/// Looks up the IEC 60751 coefficient set for a sensor identifier.
///
/// # Errors
///
/// Returns [`ConversionError::UnsupportedSensorType`] if the identifier is
/// not a recognized platinum family.
pub fn resolve(sensor_type: &str) -> Result<CoefficientSet, ConversionError> {
    sensor_type.parse::<SensorType>().map(SensorType::coefficients)
}
