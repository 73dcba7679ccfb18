use std::fmt;
use std::error::Error;

///
/// Reasons a stroke style can be rejected
///
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ConfigurationError {
    /// Strokes must be at least one pixel thick
    NonPositiveThickness(i32),

    /// A colour cycle must contain at least one colour
    EmptyPalette
}

///
/// Errors from the hatch renderer
///
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum HatchError {
    /// The requested configuration was rejected (the previous configuration is still in effect)
    InvalidConfiguration(ConfigurationError),

    /// The hatch lines at these indexes had coordinates that can't be drawn and were skipped (all the other lines were drawn)
    InvalidGeometry(Vec<usize>)
}

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigurationError::NonPositiveThickness(thickness) => write!(f, "stroke thickness must be positive (was {})", thickness),
            ConfigurationError::EmptyPalette                    => write!(f, "colour cycle contains no colours")
        }
    }
}

impl fmt::Display for HatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HatchError::InvalidConfiguration(reason)    => write!(f, "invalid configuration: {}", reason),
            HatchError::InvalidGeometry(skipped)        => write!(f, "skipped {} hatch line(s) with out of range coordinates: {:?}", skipped.len(), skipped)
        }
    }
}

impl Error for ConfigurationError { }
impl Error for HatchError { }

impl From<ConfigurationError> for HatchError {
    fn from(reason: ConfigurationError) -> HatchError {
        HatchError::InvalidConfiguration(reason)
    }
}
