//! Opening-hours evaluation for station schedule strings.
//!
//! Station schedules come from the ministry feed as loosely formatted
//! human-readable strings like `"L-D: 24H"`, `"L-V: 08:00-20:00"` or
//! `"S: 09:00-14:00"`. The day letters are Spanish: L = lunes (Monday),
//! V = viernes (Friday), S = sábado (Saturday), D = domingo (Sunday).
//!
//! Evaluation is a pure function of the schedule string and an [`Instant`]
//! supplied by the caller, so handlers can evaluate against simulated times
//! and tests never depend on the wall clock.

use chrono::{DateTime, Datelike, Timelike};
use thiserror::Error;

/// Marker the feed uses for stations that never close.
const ALWAYS_OPEN: &str = "L-D: 24H";

/// A point in time reduced to what schedule strings can express:
/// day of week (0 = Sunday .. 6 = Saturday) and whole hour of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instant {
    pub day_of_week: u8,
    pub hour: u8,
}

impl Instant {
    /// Build an instant from a timezone-aware datetime.
    pub fn from_datetime<Tz: chrono::TimeZone>(dt: &DateTime<Tz>) -> Self {
        Self {
            day_of_week: dt.weekday().num_days_from_sunday() as u8,
            hour: dt.hour() as u8,
        }
    }
}

/// Raised when a schedule string does not follow the expected
/// `"<days>: <start>-<end>"` shape. Carries the offending string so
/// malformed upstream data shows up in logs.
#[derive(Debug, Clone, Error)]
#[error("unparseable schedule {raw:?}: {reason}")]
pub struct ScheduleParseError {
    pub raw: String,
    pub reason: String,
}

impl ScheduleParseError {
    fn new(raw: &str, reason: impl Into<String>) -> Self {
        Self {
            raw: raw.to_string(),
            reason: reason.into(),
        }
    }
}

/// Which days of the week a schedule entry covers.
///
/// Day specs are matched by substring containment in a fixed priority
/// order, so a spec that could satisfy several clauses resolves
/// deterministically: L-D, then L-V, then S, then D.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DaySpec {
    /// `L-D`: every day of the week.
    EveryDay,
    /// `L-V`: Monday through Friday.
    Weekdays,
    /// `S`: Saturday only.
    Saturday,
    /// `D`: Sunday only.
    Sunday,
}

impl DaySpec {
    fn matches(self, day_of_week: u8) -> bool {
        match self {
            DaySpec::EveryDay => true,
            DaySpec::Weekdays => (1..=5).contains(&day_of_week),
            DaySpec::Saturday => day_of_week == 6,
            DaySpec::Sunday => day_of_week == 0,
        }
    }

    fn parse(days: &str) -> Option<Self> {
        // Exact L-D first, then containment checks in priority order.
        if days == "L-D" {
            Some(DaySpec::EveryDay)
        } else if days.contains("L-V") {
            Some(DaySpec::Weekdays)
        } else if days.contains('S') {
            Some(DaySpec::Saturday)
        } else if days.contains('D') {
            Some(DaySpec::Sunday)
        } else {
            None
        }
    }
}

/// A parsed schedule entry: the days it applies to and a half-open hour
/// range. Minutes in the feed (`"08:30"`) are truncated to the hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpeningHours {
    /// The literal 24-hours-every-day marker.
    Always,
    Range {
        days: Option<DaySpec>,
        open_hour: u8,
        close_hour: u8,
    },
}

impl OpeningHours {
    pub fn parse(raw: &str) -> Result<Self, ScheduleParseError> {
        if raw == ALWAYS_OPEN {
            return Ok(OpeningHours::Always);
        }

        let (days, hours) = raw
            .split_once(':')
            .ok_or_else(|| ScheduleParseError::new(raw, "missing ':' day/hour separator"))?;
        let days = days.trim();
        let hours = hours.trim();

        let (start, end) = hours
            .split_once('-')
            .ok_or_else(|| ScheduleParseError::new(raw, "missing '-' in hour range"))?;
        let open_hour = parse_hour(raw, start)?;
        let close_hour = parse_hour(raw, end)?;

        // An unrecognized day spec is not a parse failure: the entry is
        // well-formed, it just never matches (closed on every day).
        Ok(OpeningHours::Range {
            days: DaySpec::parse(days),
            open_hour,
            close_hour,
        })
    }

    /// Whether the schedule covers the given instant. Start hour is
    /// inclusive, closing hour exclusive.
    pub fn contains(&self, at: Instant) -> bool {
        match *self {
            OpeningHours::Always => true,
            OpeningHours::Range {
                days,
                open_hour,
                close_hour,
            } => {
                days.is_some_and(|d| d.matches(at.day_of_week))
                    && at.hour >= open_hour
                    && at.hour < close_hour
            }
        }
    }
}

/// Extract the hour component from a token like `"08:00"` or `"20"`.
/// Only the part before any further `:` is honored; minutes are dropped.
fn parse_hour(raw: &str, token: &str) -> Result<u8, ScheduleParseError> {
    let hour_part = token.split(':').next().unwrap_or("").trim();
    let hour: u8 = hour_part
        .parse()
        .map_err(|_| ScheduleParseError::new(raw, format!("non-numeric hour {hour_part:?}")))?;
    if hour > 23 {
        return Err(ScheduleParseError::new(
            raw,
            format!("hour {hour} out of range 0..=23"),
        ));
    }
    Ok(hour)
}

/// Parse and evaluate a schedule string in one step.
pub fn is_open(raw: &str, at: Instant) -> Result<bool, ScheduleParseError> {
    Ok(OpeningHours::parse(raw)?.contains(at))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use chrono_tz::Europe::Madrid;

    fn at(day_of_week: u8, hour: u8) -> Instant {
        Instant { day_of_week, hour }
    }

    #[test]
    fn always_open_marker_matches_any_instant() {
        for dow in 0..7 {
            for hour in [0, 3, 12, 23] {
                assert!(is_open("L-D: 24H", at(dow, hour)).unwrap());
            }
        }
    }

    #[test]
    fn every_day_range_checks_hours_only() {
        // Monday-Sunday 06:00-22:00
        assert!(is_open("L-D: 06:00-22:00", at(0, 6)).unwrap());
        assert!(is_open("L-D: 06:00-22:00", at(6, 21)).unwrap());
        assert!(!is_open("L-D: 06:00-22:00", at(3, 5)).unwrap());
        assert!(!is_open("L-D: 06:00-22:00", at(3, 22)).unwrap());
    }

    #[test]
    fn weekday_range_open_midweek_morning() {
        assert!(is_open("L-V: 08:00-20:00", at(3, 10)).unwrap());
    }

    #[test]
    fn weekday_range_closed_at_closing_hour() {
        // Half-open interval: the closing hour itself is closed.
        assert!(!is_open("L-V: 08:00-20:00", at(3, 20)).unwrap());
    }

    #[test]
    fn weekday_range_closed_on_sunday() {
        assert!(!is_open("L-V: 08:00-20:00", at(0, 10)).unwrap());
    }

    #[test]
    fn saturday_range_boundaries() {
        assert!(is_open("S: 09:00-14:00", at(6, 9)).unwrap());
        assert!(is_open("S: 09:00-14:00", at(6, 13)).unwrap());
        assert!(!is_open("S: 09:00-14:00", at(6, 14)).unwrap());
        // Same hours on a Friday: closed.
        assert!(!is_open("S: 09:00-14:00", at(5, 10)).unwrap());
    }

    #[test]
    fn sunday_range() {
        assert!(is_open("D: 10:00-13:00", at(0, 12)).unwrap());
        assert!(!is_open("D: 10:00-13:00", at(1, 12)).unwrap());
    }

    #[test]
    fn minutes_are_truncated_including_closing_time() {
        // "...-20:30" closes at hour 20, not 20:30.
        assert!(!is_open("L-V: 08:30-20:30", at(2, 20)).unwrap());
        assert!(is_open("L-V: 08:30-20:30", at(2, 8)).unwrap());
    }

    #[test]
    fn day_spec_priority_weekdays_before_saturday() {
        // "L-V" contains neither S nor D, but a combined spec like
        // "L-V y S" must resolve to the weekday clause first.
        let parsed = OpeningHours::parse("L-V y S: 07:00-22:00").unwrap();
        assert!(parsed.contains(at(2, 10)));
        assert!(!parsed.contains(at(6, 10)));
    }

    #[test]
    fn unknown_day_spec_is_well_formed_but_never_open() {
        let parsed = OpeningHours::parse("X: 08:00-20:00").unwrap();
        for dow in 0..7 {
            assert!(!parsed.contains(at(dow, 10)));
        }
    }

    #[test]
    fn garbage_fails_with_parse_error() {
        let err = is_open("garbage", at(1, 9)).unwrap_err();
        assert_eq!(err.raw, "garbage");
        assert!(err.reason.contains("separator"));
    }

    #[test]
    fn missing_hour_range_separator_fails() {
        let err = is_open("L-V: 0800 2000", at(1, 9)).unwrap_err();
        assert!(err.reason.contains('-'));
    }

    #[test]
    fn non_numeric_hour_fails() {
        let err = is_open("L-V: ab:00-20:00", at(1, 9)).unwrap_err();
        assert!(err.reason.contains("non-numeric"));
    }

    #[test]
    fn out_of_range_hour_fails() {
        let err = is_open("L-V: 08:00-24:00", at(1, 9)).unwrap_err();
        assert!(err.reason.contains("out of range"));
    }

    #[test]
    fn evaluation_is_idempotent() {
        let instant = at(4, 11);
        let first = is_open("L-V: 08:00-20:00", instant).unwrap();
        for _ in 0..10 {
            assert_eq!(is_open("L-V: 08:00-20:00", instant).unwrap(), first);
        }
    }

    #[test]
    fn instant_from_datetime_maps_weekday_and_hour() {
        // 2026-08-23 is a Sunday.
        let dt = Madrid.with_ymd_and_hms(2026, 8, 23, 15, 45, 0).unwrap();
        let instant = Instant::from_datetime(&dt);
        assert_eq!(instant.day_of_week, 0);
        assert_eq!(instant.hour, 15);

        let dt = Madrid.with_ymd_and_hms(2026, 8, 29, 9, 0, 0).unwrap();
        assert_eq!(Instant::from_datetime(&dt).day_of_week, 6);
    }

    #[test]
    fn parse_error_display_includes_raw_string() {
        let err = ScheduleParseError {
            raw: "??".into(),
            reason: "missing ':' day/hour separator".into(),
        };
        assert!(err.to_string().contains("\"??\""));
    }
}
