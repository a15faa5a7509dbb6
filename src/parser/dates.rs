//! Multi-format date parsing in a configured timezone

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeZone};

use crate::config::ReconConfig;
use crate::parser::{ParseError, ParseResult};

/// Parse a date or date-time string and place it in the configured timezone
///
/// Date-time layouts are tried before date-only layouts; a date-only value
/// becomes local midnight.
pub fn parse_date(value: &str, config: &ReconConfig) -> ParseResult<DateTime<FixedOffset>> {
    let value = value.trim();
    let naive = parse_naive(value, config)
        .ok_or_else(|| ParseError::UnsupportedDate(value.to_string()))?;

    config
        .timezone
        .from_local_datetime(&naive)
        .earliest()
        .map(|local| local.fixed_offset())
        .ok_or_else(|| ParseError::NonexistentLocalTime(value.to_string()))
}

fn parse_naive(value: &str, config: &ReconConfig) -> Option<NaiveDateTime> {
    let datetime = config
        .datetime_formats
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok());

    datetime.or_else(|| {
        config
            .date_formats
            .iter()
            .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
            .and_then(|date| date.and_hms_opt(0, 0, 0))
    })
}
