//! Inclusive reconciliation window

use chrono::{DateTime, FixedOffset, NaiveDate, TimeZone};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::types::*;

/// Closed `[start, end]` window used to filter records before matching
///
/// Deserialization goes through [`DateRange::new`], so a reversed range is
/// rejected there too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawDateRange")]
pub struct DateRange {
    start: DateTime<FixedOffset>,
    end: DateTime<FixedOffset>,
}

#[derive(Deserialize)]
struct RawDateRange {
    start: DateTime<FixedOffset>,
    #[serde(default)]
    end: Option<DateTime<FixedOffset>>,
}

impl TryFrom<RawDateRange> for DateRange {
    type Error = ReconError;

    fn try_from(raw: RawDateRange) -> Result<Self, Self::Error> {
        Self::new(raw.start, raw.end)
    }
}

impl DateRange {
    /// Build a range from explicit instants
    ///
    /// A missing `end` becomes 23:59:59 of the start's local day. Fails with
    /// [`ReconError::InvalidRange`] when `start` is strictly after `end`.
    pub fn new(
        start: DateTime<FixedOffset>,
        end: Option<DateTime<FixedOffset>>,
    ) -> ReconResult<Self> {
        let end = match end {
            Some(end) => end,
            None => end_of_day(start.date_naive(), *start.offset())?,
        };

        if start > end {
            return Err(ReconError::InvalidRange { start, end });
        }

        Ok(Self { start, end })
    }

    /// Build a range from calendar days interpreted in `tz`
    ///
    /// The range runs from local midnight of `start_day` to 23:59:59 of
    /// `end_day` (or of `start_day` when no end day is given).
    pub fn for_days(
        start_day: NaiveDate,
        end_day: Option<NaiveDate>,
        tz: Tz,
    ) -> ReconResult<Self> {
        let start = start_day
            .and_hms_opt(0, 0, 0)
            .and_then(|local| tz.from_local_datetime(&local).earliest())
            .map(|instant| instant.fixed_offset())
            .ok_or_else(|| {
                ReconError::Config(format!("{start_day} has no local midnight in {tz}"))
            })?;

        let end = match end_day {
            Some(day) => Some(localize_end_of_day(day, tz)?),
            None => None,
        };

        Self::new(start, end)
    }

    /// First included instant
    pub fn start(&self) -> DateTime<FixedOffset> {
        self.start
    }

    /// Last included instant
    pub fn end(&self) -> DateTime<FixedOffset> {
        self.end
    }

    /// Whether `instant` falls inside the range, both boundaries included
    pub fn contains(&self, instant: &DateTime<FixedOffset>) -> bool {
        *instant >= self.start && *instant <= self.end
    }
}

fn end_of_day(day: NaiveDate, offset: FixedOffset) -> ReconResult<DateTime<FixedOffset>> {
    day.and_hms_opt(23, 59, 59)
        .and_then(|local| offset.from_local_datetime(&local).single())
        .ok_or_else(|| ReconError::Config(format!("cannot compute end of day for {day}")))
}

fn localize_end_of_day(day: NaiveDate, tz: Tz) -> ReconResult<DateTime<FixedOffset>> {
    day.and_hms_opt(23, 59, 59)
        .and_then(|local| tz.from_local_datetime(&local).latest())
        .map(|instant| instant.fixed_offset())
        .ok_or_else(|| ReconError::Config(format!("{day} has no local 23:59:59 in {tz}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    fn wib() -> FixedOffset {
        FixedOffset::east_opt(7 * 3600).unwrap()
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_missing_end_defaults_to_end_of_start_day() {
        let start = wib().with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap();
        let range = DateRange::new(start, None).unwrap();

        assert_eq!(
            range.end(),
            wib().with_ymd_and_hms(2024, 1, 15, 23, 59, 59).unwrap()
        );
        assert_eq!(range.end().offset(), start.offset());
    }

    #[test]
    fn test_start_after_end_is_rejected() {
        let start = wib().with_ymd_and_hms(2024, 12, 31, 0, 0, 0).unwrap();
        let end = wib().with_ymd_and_hms(2024, 1, 1, 23, 59, 59).unwrap();

        let err = DateRange::new(start, Some(end)).unwrap_err();
        assert!(matches!(err, ReconError::InvalidRange { .. }));
    }

    #[test]
    fn test_equal_start_and_end_is_allowed() {
        let instant = wib().with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        let range = DateRange::new(instant, Some(instant)).unwrap();
        assert!(range.contains(&instant));
    }

    #[test]
    fn test_contains_is_inclusive() {
        let range = DateRange::for_days(
            day(2024, 1, 1),
            Some(day(2024, 1, 31)),
            chrono_tz::Asia::Jakarta,
        )
        .unwrap();

        let first = wib().with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let last = wib().with_ymd_and_hms(2024, 1, 31, 23, 59, 59).unwrap();
        let before = wib().with_ymd_and_hms(2023, 12, 31, 23, 59, 59).unwrap();
        let after = wib().with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap();

        assert!(range.contains(&first));
        assert!(range.contains(&last));
        assert!(!range.contains(&before));
        assert!(!range.contains(&after));
    }

    #[test]
    fn test_for_days_uses_timezone_offset() {
        let range = DateRange::for_days(day(2024, 1, 15), None, chrono_tz::Asia::Jakarta).unwrap();

        assert_eq!(range.start().offset().local_minus_utc(), 7 * 3600);
        assert_eq!(range.start().hour(), 0);
        assert_eq!(range.end().hour(), 23);
        assert_eq!(range.end().date_naive(), day(2024, 1, 15));
    }

    #[test]
    fn test_for_days_rejects_reversed_days() {
        let err = DateRange::for_days(
            day(2024, 12, 31),
            Some(day(2024, 1, 1)),
            chrono_tz::Asia::Jakarta,
        )
        .unwrap_err();
        assert!(matches!(err, ReconError::InvalidRange { .. }));
    }

    #[test]
    fn test_deserialize_validates_order() {
        let reversed = serde_json::json!({
            "start": "2024-12-31T00:00:00+07:00",
            "end": "2024-01-01T00:00:00+07:00",
        });
        let err = serde_json::from_value::<DateRange>(reversed).unwrap_err();
        assert!(err.to_string().contains("Invalid range"));

        let ordered = serde_json::json!({
            "start": "2024-01-01T00:00:00+07:00",
            "end": "2024-12-31T23:59:59+07:00",
        });
        let range: DateRange = serde_json::from_value(ordered).unwrap();
        assert_eq!(range.end().date_naive(), day(2024, 12, 31));
    }

    #[test]
    fn test_deserialize_without_end_covers_start_day() {
        let range: DateRange =
            serde_json::from_str(r#"{"start":"2024-01-15T00:00:00+07:00"}"#).unwrap();
        assert_eq!(
            range.end(),
            wib().with_ymd_and_hms(2024, 1, 15, 23, 59, 59).unwrap()
        );
    }

    #[test]
    fn test_serialized_range_round_trips() {
        let range = DateRange::for_days(day(2024, 1, 1), None, chrono_tz::Asia::Jakarta).unwrap();
        let json = serde_json::to_string(&range).unwrap();
        assert_eq!(serde_json::from_str::<DateRange>(&json).unwrap(), range);
    }
}
