use std::fmt;
use std::str::FromStr;

const UNITS_IMPERIAL: &str = "imperial";
const UNITS_METRIC: &str = "metric";
const UNITS_STANDARD: &str = "standard";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TemperatureUnits {
    Imperial,
    #[default]
    Metric,
    Standard,
}

impl fmt::Display for TemperatureUnits {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_query_value())
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct UnrecognizedUnits(String);

impl fmt::Display for UnrecognizedUnits {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "unrecognized temperature units `{}` (expected one of {}, {}, {})",
            self.0, UNITS_METRIC, UNITS_IMPERIAL, UNITS_STANDARD
        )
    }
}

impl std::error::Error for UnrecognizedUnits {}

impl FromStr for TemperatureUnits {
    type Err = UnrecognizedUnits;

    fn from_str(s: &str) -> Result<TemperatureUnits, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            UNITS_IMPERIAL => Ok(TemperatureUnits::Imperial),
            UNITS_METRIC => Ok(TemperatureUnits::Metric),
            UNITS_STANDARD => Ok(TemperatureUnits::Standard),
            _ => Err(UnrecognizedUnits(s.to_owned())),
        }
    }
}

impl TemperatureUnits {
    /// Value of the `units` query parameter.
    pub fn as_query_value(&self) -> &'static str {
        match self {
            Self::Imperial => UNITS_IMPERIAL,
            Self::Metric => UNITS_METRIC,
            Self::Standard => UNITS_STANDARD,
        }
    }

    pub fn as_char(&self) -> char {
        match self {
            Self::Imperial => 'F',
            Self::Metric => 'C',
            Self::Standard => 'K',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_units() {
        assert_eq!("metric".parse(), Ok(TemperatureUnits::Metric));
        assert_eq!("Imperial".parse(), Ok(TemperatureUnits::Imperial));
        assert_eq!(" standard ".parse(), Ok(TemperatureUnits::Standard));
        assert!("kelvin".parse::<TemperatureUnits>().is_err());
    }

    #[test]
    fn test_default_is_metric() {
        let units = TemperatureUnits::default();
        assert_eq!(units.to_string(), "metric");
        assert_eq!(units.as_char(), 'C');
    }
}
