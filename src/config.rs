//! Run configuration shared by the parsers, service and report

use chrono_tz::Tz;

use crate::types::*;

/// Timezone the original statements are issued in (UTC+7)
pub const DEFAULT_TIMEZONE: Tz = chrono_tz::Asia::Jakarta;

/// Currency prefix printed in front of amounts
pub const DEFAULT_CURRENCY_PREFIX: &str = "Rp.";

/// Accepted date-time layouts, tried in order
pub const DEFAULT_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%d/%m/%Y %H:%M:%S",
    "%d/%m/%Y %H:%M",
    "%d-%m-%Y %H:%M:%S",
    "%d-%m-%Y %H:%M",
];

/// Accepted date-only layouts, tried after the date-time layouts
pub const DEFAULT_DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d-%m-%Y", "%d/%m/%Y"];

/// Configuration for a reconciliation run
#[derive(Debug, Clone, PartialEq)]
pub struct ReconConfig {
    /// Timezone used to interpret naive timestamps and CLI dates
    pub timezone: Tz,
    /// Date-time layouts (chrono `strftime` syntax)
    pub datetime_formats: Vec<String>,
    /// Date-only layouts; a match means local midnight
    pub date_formats: Vec<String>,
    /// Prefix for amounts in reports
    pub currency_prefix: String,
}

impl Default for ReconConfig {
    fn default() -> Self {
        Self {
            timezone: DEFAULT_TIMEZONE,
            datetime_formats: DEFAULT_DATETIME_FORMATS.iter().map(|f| f.to_string()).collect(),
            date_formats: DEFAULT_DATE_FORMATS.iter().map(|f| f.to_string()).collect(),
            currency_prefix: DEFAULT_CURRENCY_PREFIX.to_string(),
        }
    }
}

impl ReconConfig {
    /// Default configuration with the timezone replaced
    pub fn with_timezone(timezone: Tz) -> Self {
        Self {
            timezone,
            ..Self::default()
        }
    }

    /// Default configuration with an IANA timezone name such as `Asia/Jakarta`
    pub fn with_timezone_name(name: &str) -> ReconResult<Self> {
        let timezone: Tz = name
            .trim()
            .parse()
            .map_err(|e| ReconError::Config(format!("unknown timezone '{name}': {e}")))?;
        Ok(Self::with_timezone(timezone))
    }

    /// Replace the currency prefix
    pub fn currency_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.currency_prefix = prefix.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ReconConfig::default();
        assert_eq!(config.timezone, chrono_tz::Asia::Jakarta);
        assert_eq!(config.datetime_formats.len(), 6);
        assert_eq!(config.date_formats.len(), 3);
        assert_eq!(config.currency_prefix, "Rp.");
    }

    #[test]
    fn test_timezone_by_name() {
        let config = ReconConfig::with_timezone_name("Asia/Singapore").unwrap();
        assert_eq!(config.timezone, chrono_tz::Asia::Singapore);

        let err = ReconConfig::with_timezone_name("Mars/Olympus").unwrap_err();
        assert!(matches!(err, ReconError::Config(_)));
    }

    #[test]
    fn test_currency_prefix_override() {
        let config = ReconConfig::default().currency_prefix("USD");
        assert_eq!(config.currency_prefix, "USD");
    }
}
