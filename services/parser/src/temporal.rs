//! Date, date-time and duration strings as they appear in sheet exports.
//!
//! Every input is classified into exactly one shape by trying the matchers in
//! a fixed order. The shape yields both the sort value and the display string,
//! so formatting always agrees with parsing.
//!
//! Date matchers, first match wins:
//!
//! | # | Shape           | Example                              |
//! |---|-----------------|--------------------------------------|
//! | 1 | `StructuredDate`| `Date(2020,8,11)`, `Date(2020,8,11,10,30)` |
//! | 2 | `IsoDateTime`   | `2020-12-01T11:00:43Z`, `2024-01-15 10:30` |
//! | 3 | `SlashDateTime` | `2024/01/15 10:30`                   |
//! | 4 | `IsoDate`       | `2024-01-15`                         |
//! | 5 | `SlashDate`     | `2024/01/15`                         |
//!
//! Anything else is `Unparsed`: it sorts at the epoch and displays unchanged.
//! Naive date-times are taken as UTC.

use chrono::{DateTime, Days, Months, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Sort value of anything that is not a recognizable date.
pub const EPOCH_MIN: i64 = 0;

/// Display string for empty values.
pub const EMPTY_DISPLAY: &str = "-";

static STRUCTURED_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Date\((\d+),(\d+),(\d+)(?:,(\d+),(\d+)(?:,(\d+))?)?\)").expect("Invalid regex")
});
static SLASH_DATE_TIME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d{4})/(\d{1,2})/(\d{1,2})\s+(\d{1,2}):(\d{2})(?::(\d{2}))?")
        .expect("Invalid regex")
});
static ISO_DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{4})-(\d{2})-(\d{2})").expect("Invalid regex"));
static SLASH_DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{4})/(\d{1,2})/(\d{1,2})").expect("Invalid regex"));

static CLOCK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+):(\d+):(\d+)").expect("Invalid regex"));
static MIN_SEC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+):(\d+)").expect("Invalid regex"));
static SERIAL_TIME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Date\(1899,11,30,(\d+),(\d+),(\d+)\)").expect("Invalid regex")
});
static SECONDS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+$").expect("Invalid regex"));

const ISO_NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

const ISO_OFFSET_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%:z",
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M%:z",
    "%Y-%m-%dT%H:%M%z",
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M%:z",
    "%Y-%m-%d %H:%M%z",
];

// =============================================================================
// DATES
// =============================================================================

/// Fields of a structured `Date(...)` value, exactly as written.
/// The month is zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StructuredFields {
    pub year: i32,
    pub month0: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl StructuredFields {
    /// Calendar instant, with out-of-range months and days rolling over into
    /// the next unit the way spreadsheet date constructors do.
    pub fn instant(&self) -> Option<NaiveDateTime> {
        let date = NaiveDate::from_ymd_opt(self.year, 1, 1)?
            .checked_add_months(Months::new(self.month0))?
            .checked_add_days(Days::new(u64::from(self.day)))?
            .checked_sub_days(Days::new(1))?;
        let seconds = i64::from(self.hour) * 3600 + i64::from(self.minute) * 60 + i64::from(self.second);
        date.and_time(NaiveTime::MIN)
            .checked_add_signed(TimeDelta::try_seconds(seconds)?)
    }
}

/// Classified date or date-time string.
#[derive(Debug, Clone, PartialEq)]
pub enum DateShape {
    StructuredDate(StructuredFields),
    /// Wall clock as written plus the instant in epoch milliseconds.
    IsoDateTime { wall: NaiveDateTime, millis: i64 },
    SlashDateTime(NaiveDateTime),
    IsoDate(NaiveDate),
    SlashDate(NaiveDate),
    Unparsed(String),
}

/// Classify a date string. Never fails; unrecognized input is `Unparsed`.
pub fn parse_date(input: &str) -> DateShape {
    let s = input.trim();

    if let Some(shape) = match_structured(s) {
        return shape;
    }
    if s.contains('T') || s.contains(' ') {
        if let Some(shape) = match_iso_date_time(s) {
            return shape;
        }
    }
    if let Some(shape) = match_slash_date_time(s) {
        return shape;
    }
    if let Some(date) = ISO_DATE_RE.captures(s).and_then(|caps| ymd(&caps)) {
        return DateShape::IsoDate(date);
    }
    if let Some(date) = SLASH_DATE_RE.captures(s).and_then(|caps| ymd(&caps)) {
        return DateShape::SlashDate(date);
    }

    DateShape::Unparsed(input.to_string())
}

fn capture_u32(caps: &Captures<'_>, idx: usize) -> Option<u32> {
    caps.get(idx).map(|m| m.as_str().parse().ok()).unwrap_or(Some(0))
}

fn ymd(caps: &Captures<'_>) -> Option<NaiveDate> {
    let year: i32 = caps.get(1)?.as_str().parse().ok()?;
    let month: u32 = caps.get(2)?.as_str().parse().ok()?;
    let day: u32 = caps.get(3)?.as_str().parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

fn match_structured(s: &str) -> Option<DateShape> {
    let caps = STRUCTURED_RE.captures(s)?;
    let fields = StructuredFields {
        year: caps.get(1)?.as_str().parse().ok()?,
        month0: capture_u32(&caps, 2)?,
        day: capture_u32(&caps, 3)?,
        hour: capture_u32(&caps, 4)?,
        minute: capture_u32(&caps, 5)?,
        second: capture_u32(&caps, 6)?,
    };
    Some(DateShape::StructuredDate(fields))
}

fn match_iso_date_time(s: &str) -> Option<DateShape> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(DateShape::IsoDateTime {
            wall: dt.naive_local(),
            millis: dt.timestamp_millis(),
        });
    }
    for format in ISO_OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(s, format) {
            return Some(DateShape::IsoDateTime {
                wall: dt.naive_local(),
                millis: dt.timestamp_millis(),
            });
        }
    }

    let naive = s.strip_suffix('Z').unwrap_or(s);
    ISO_NAIVE_FORMATS.iter().find_map(|format| {
        NaiveDateTime::parse_from_str(naive, format)
            .ok()
            .map(|wall| DateShape::IsoDateTime {
                wall,
                millis: wall.and_utc().timestamp_millis(),
            })
    })
}

fn match_slash_date_time(s: &str) -> Option<DateShape> {
    let caps = SLASH_DATE_TIME_RE.captures(s)?;
    let date = ymd(&caps)?;
    let time = NaiveTime::from_hms_opt(
        capture_u32(&caps, 4)?,
        capture_u32(&caps, 5)?,
        capture_u32(&caps, 6)?,
    )?;
    Some(DateShape::SlashDateTime(date.and_time(time)))
}

impl DateShape {
    pub fn is_parsed(&self) -> bool {
        !matches!(self, DateShape::Unparsed(_))
    }

    /// Epoch milliseconds, or [`EPOCH_MIN`] when the input was not a date.
    pub fn sort_value(&self) -> i64 {
        match self {
            DateShape::StructuredDate(fields) => fields
                .instant()
                .map(|dt| dt.and_utc().timestamp_millis())
                .unwrap_or(EPOCH_MIN),
            DateShape::IsoDateTime { millis, .. } => *millis,
            DateShape::SlashDateTime(dt) => dt.and_utc().timestamp_millis(),
            DateShape::IsoDate(date) | DateShape::SlashDate(date) => {
                date.and_time(NaiveTime::MIN).and_utc().timestamp_millis()
            }
            DateShape::Unparsed(_) => EPOCH_MIN,
        }
    }

    /// `yyyy/mm/dd`, or the original text when unparsed.
    pub fn format_date(&self) -> String {
        match self {
            DateShape::StructuredDate(f) => {
                format!("{:04}/{:02}/{:02}", f.year, f.month0 + 1, f.day)
            }
            DateShape::IsoDateTime { wall, .. } | DateShape::SlashDateTime(wall) => {
                wall.format("%Y/%m/%d").to_string()
            }
            DateShape::IsoDate(date) | DateShape::SlashDate(date) => {
                date.format("%Y/%m/%d").to_string()
            }
            DateShape::Unparsed(original) => unparsed_display(original),
        }
    }

    /// `yyyy/mm/dd hh:mm`, or the original text when unparsed.
    /// Date-only shapes show midnight.
    pub fn format_date_time(&self) -> String {
        match self {
            DateShape::StructuredDate(f) => format!(
                "{:04}/{:02}/{:02} {:02}:{:02}",
                f.year,
                f.month0 + 1,
                f.day,
                f.hour,
                f.minute
            ),
            DateShape::IsoDateTime { wall, .. } | DateShape::SlashDateTime(wall) => {
                wall.format("%Y/%m/%d %H:%M").to_string()
            }
            DateShape::IsoDate(date) | DateShape::SlashDate(date) => {
                date.format("%Y/%m/%d 00:00").to_string()
            }
            DateShape::Unparsed(original) => unparsed_display(original),
        }
    }
}

fn unparsed_display(original: &str) -> String {
    let trimmed = original.trim();
    if trimmed.is_empty() || trimmed == EMPTY_DISPLAY {
        EMPTY_DISPLAY.to_string()
    } else {
        original.to_string()
    }
}

/// Sort value of a date string.
pub fn date_sort_value(input: &str) -> i64 {
    parse_date(input).sort_value()
}

/// Display a date string as `yyyy/mm/dd`.
pub fn format_date(input: &str) -> String {
    parse_date(input).format_date()
}

/// Display a date-time string as `yyyy/mm/dd hh:mm`.
pub fn format_date_time(input: &str) -> String {
    parse_date(input).format_date_time()
}

// =============================================================================
// DURATIONS
// =============================================================================

/// Classified duration string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DurationShape {
    /// `hh:mm:ss`
    Clock { hours: u64, minutes: u64, seconds: u64 },
    /// `mm:ss`
    MinutesSeconds { minutes: u64, seconds: u64 },
    /// `Date(1899,11,30,h,m,s)`: a time-of-day serial, date part discarded.
    SerialTime { hours: u64, minutes: u64, seconds: u64 },
    /// Bare integer seconds.
    Seconds(u64),
    Unparsed(String),
}

fn capture_u64(caps: &Captures<'_>, idx: usize) -> Option<u64> {
    caps.get(idx)?.as_str().parse().ok()
}

/// Classify a duration string. Never fails; unrecognized input is `Unparsed`.
pub fn parse_duration(input: &str) -> DurationShape {
    let s = input.trim();

    if let Some(caps) = CLOCK_RE.captures(s) {
        if let (Some(hours), Some(minutes), Some(seconds)) =
            (capture_u64(&caps, 1), capture_u64(&caps, 2), capture_u64(&caps, 3))
        {
            return DurationShape::Clock {
                hours,
                minutes,
                seconds,
            };
        }
    }
    if let Some(caps) = MIN_SEC_RE.captures(s) {
        if let (Some(minutes), Some(seconds)) = (capture_u64(&caps, 1), capture_u64(&caps, 2)) {
            return DurationShape::MinutesSeconds { minutes, seconds };
        }
    }
    if let Some(caps) = SERIAL_TIME_RE.captures(s) {
        if let (Some(hours), Some(minutes), Some(seconds)) =
            (capture_u64(&caps, 1), capture_u64(&caps, 2), capture_u64(&caps, 3))
        {
            return DurationShape::SerialTime {
                hours,
                minutes,
                seconds,
            };
        }
    }
    if SECONDS_RE.is_match(s) {
        if let Ok(total) = s.parse() {
            return DurationShape::Seconds(total);
        }
    }

    DurationShape::Unparsed(input.to_string())
}

fn hms_seconds(hours: u64, minutes: u64, seconds: u64) -> u64 {
    hours
        .saturating_mul(3600)
        .saturating_add(minutes.saturating_mul(60))
        .saturating_add(seconds)
}

impl DurationShape {
    /// Total seconds; zero when unparsed.
    pub fn total_seconds(&self) -> u64 {
        match self {
            DurationShape::Clock {
                hours,
                minutes,
                seconds,
            }
            | DurationShape::SerialTime {
                hours,
                minutes,
                seconds,
            } => hms_seconds(*hours, *minutes, *seconds),
            DurationShape::MinutesSeconds { minutes, seconds } => hms_seconds(0, *minutes, *seconds),
            DurationShape::Seconds(total) => *total,
            DurationShape::Unparsed(_) => 0,
        }
    }

    /// Zero-padded `hh:mm:ss`, or the original text when unparsed.
    pub fn format(&self) -> String {
        match self {
            DurationShape::Unparsed(original) => unparsed_display(original),
            parsed => format_seconds(parsed.total_seconds()),
        }
    }
}

/// `hh:mm:ss` for a number of seconds. Hours grow past two digits as needed.
pub fn format_seconds(total: u64) -> String {
    format!(
        "{:02}:{:02}:{:02}",
        total / 3600,
        (total % 3600) / 60,
        total % 60
    )
}

/// Sort value of a duration string in seconds.
pub fn parse_duration_seconds(input: &str) -> u64 {
    parse_duration(input).total_seconds()
}

/// Display a duration string as `hh:mm:ss`.
pub fn format_duration(input: &str) -> String {
    parse_duration(input).format()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn millis(y: i32, m: u32, d: u32, h: u32, mi: u32) -> i64 {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, mi, 0)
            .unwrap()
            .and_utc()
            .timestamp_millis()
    }

    fn is_yyyy_mm_dd(s: &str) -> bool {
        let b = s.as_bytes();
        b.len() == 10
            && b[4] == b'/'
            && b[7] == b'/'
            && b.iter()
                .enumerate()
                .all(|(i, c)| i == 4 || i == 7 || c.is_ascii_digit())
    }

    // -------------------------------------------------------------------------
    // MATCHER PRIORITY TESTS
    // -------------------------------------------------------------------------

    #[test]
    fn test_structured_date() {
        let shape = parse_date("Date(2020,8,11)");
        assert!(matches!(shape, DateShape::StructuredDate(_)));
        assert_eq!(shape.sort_value(), millis(2020, 9, 11, 0, 0));
        assert_eq!(shape.format_date(), "2020/09/11");
    }

    #[test]
    fn test_structured_date_time() {
        let shape = parse_date("Date(2020,8,11,10,30)");
        assert_eq!(shape.sort_value(), millis(2020, 9, 11, 10, 30));
        assert_eq!(shape.format_date_time(), "2020/09/11 10:30");
    }

    #[test]
    fn test_structured_month_zero_is_january() {
        assert_eq!(format_date("Date(2024,0,5)"), "2024/01/05");
        assert_eq!(date_sort_value("Date(2024,0,5)"), millis(2024, 1, 5, 0, 0));
    }

    #[test]
    fn test_structured_overflow_rolls_over() {
        // Month 12 of 2023 is January 2024; day 0 is the last day of the previous month.
        assert_eq!(date_sort_value("Date(2023,12,1)"), millis(2024, 1, 1, 0, 0));
        assert_eq!(date_sort_value("Date(2024,1,0)"), millis(2024, 1, 31, 0, 0));
    }

    #[test]
    fn test_iso_date_time_utc() {
        let shape = parse_date("2020-12-01T11:00:43Z");
        assert!(matches!(shape, DateShape::IsoDateTime { .. }));
        assert_eq!(shape.format_date_time(), "2020/12/01 11:00");
        assert_eq!(shape.format_date(), "2020/12/01");
    }

    #[test]
    fn test_iso_date_time_offset_keeps_wall_clock() {
        let shape = parse_date("2024-01-15T09:00:00+09:00");
        assert_eq!(shape.format_date_time(), "2024/01/15 09:00");
        assert_eq!(shape.sort_value(), millis(2024, 1, 15, 0, 0));
    }

    #[test]
    fn test_iso_offset_without_seconds_or_colon() {
        for input in [
            "2024-01-15T10:30+09:00",
            "2024-01-15T10:30:00+0900",
            "2024-01-15T10:30+0900",
            "2024-01-15 10:30+09:00",
        ] {
            let shape = parse_date(input);
            assert!(matches!(shape, DateShape::IsoDateTime { .. }), "{}", input);
            assert_eq!(shape.format_date_time(), "2024/01/15 10:30", "{}", input);
            assert_eq!(shape.sort_value(), millis(2024, 1, 15, 1, 30), "{}", input);
        }
    }

    #[test]
    fn test_iso_with_space() {
        let shape = parse_date("2024-01-15 10:30");
        assert!(matches!(shape, DateShape::IsoDateTime { .. }));
        assert_eq!(shape.sort_value(), millis(2024, 1, 15, 10, 30));
    }

    #[test]
    fn test_iso_fractional_seconds() {
        assert_eq!(
            date_sort_value("2024-01-15T10:30:00.250"),
            millis(2024, 1, 15, 10, 30) + 250
        );
    }

    #[test]
    fn test_slash_date_time() {
        let shape = parse_date("2024/01/15 10:30");
        assert!(matches!(shape, DateShape::SlashDateTime(_)));
        assert_eq!(shape.sort_value(), millis(2024, 1, 15, 10, 30));
        assert_eq!(shape.format_date_time(), "2024/01/15 10:30");
    }

    #[test]
    fn test_slash_date_time_with_seconds() {
        let shape = parse_date("2024/01/15 10:30:59");
        assert_eq!(shape.sort_value(), millis(2024, 1, 15, 10, 30) + 59_000);
        assert_eq!(shape.format_date_time(), "2024/01/15 10:30");
    }

    #[test]
    fn test_iso_date() {
        let shape = parse_date("2024-01-15");
        assert_eq!(shape, DateShape::IsoDate(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()));
        assert_eq!(shape.format_date(), "2024/01/15");
        assert_eq!(shape.format_date_time(), "2024/01/15 00:00");
    }

    #[test]
    fn test_slash_date() {
        let shape = parse_date("2024/01/15");
        assert!(matches!(shape, DateShape::SlashDate(_)));
        assert_eq!(shape.sort_value(), millis(2024, 1, 15, 0, 0));
    }

    #[test]
    fn test_slash_date_single_digit_parts() {
        assert_eq!(format_date("2020/9/1"), "2020/09/01");
    }

    #[test]
    fn test_structured_beats_other_shapes() {
        // Contains a space, but the structured matcher runs first.
        let shape = parse_date("Date(2020,8,11) 2021-01-01");
        assert!(matches!(shape, DateShape::StructuredDate(_)));
    }

    // -------------------------------------------------------------------------
    // DEGRADATION TESTS
    // -------------------------------------------------------------------------

    #[test]
    fn test_not_a_date() {
        let shape = parse_date("not-a-date");
        assert_eq!(shape.sort_value(), EPOCH_MIN);
        assert_eq!(shape.format_date(), "not-a-date");
        assert_eq!(shape.format_date_time(), "not-a-date");
    }

    #[test]
    fn test_invalid_calendar_values_unparsed() {
        assert_eq!(date_sort_value("2024-13-45"), EPOCH_MIN);
        assert_eq!(format_date("2024-13-45"), "2024-13-45");
    }

    #[test]
    fn test_empty_displays_dash() {
        assert_eq!(format_date(""), "-");
        assert_eq!(format_date("-"), "-");
        assert_eq!(date_sort_value(""), EPOCH_MIN);
    }

    #[test]
    fn test_text_with_space_unparsed() {
        assert_eq!(parse_date("next week"), DateShape::Unparsed("next week".to_string()));
    }

    // -------------------------------------------------------------------------
    // FORMAT STABILITY TESTS
    // -------------------------------------------------------------------------

    const DATE_SHAPES: &[&str] = &[
        "Date(2020,8,11)",
        "Date(2020,8,11,10,30)",
        "2020-12-01T11:00:43Z",
        "2024-01-15 10:30",
        "2024/01/15 10:30",
        "2024-01-15",
        "2024/01/15",
    ];

    #[test]
    fn test_format_date_pattern_for_all_shapes() {
        for input in DATE_SHAPES {
            let formatted = format_date(input);
            assert!(is_yyyy_mm_dd(&formatted), "{} -> {}", input, formatted);
        }
    }

    #[test]
    fn test_format_date_is_stable() {
        for input in DATE_SHAPES {
            let once = format_date(input);
            assert_eq!(format_date(&once), once, "unstable for {}", input);
        }
    }

    #[test]
    fn test_format_date_time_is_stable() {
        for input in DATE_SHAPES {
            let once = format_date_time(input);
            assert_eq!(format_date_time(&once), once, "unstable for {}", input);
        }
    }

    #[test]
    fn test_display_keeps_sort_day() {
        for input in DATE_SHAPES {
            let day_start = date_sort_value(&format_date(input));
            let value = date_sort_value(input);
            assert!(
                day_start <= value && value < day_start + 86_400_000,
                "display day differs for {}",
                input
            );
        }
    }

    // -------------------------------------------------------------------------
    // DURATION TESTS
    // -------------------------------------------------------------------------

    #[test]
    fn test_duration_clock() {
        assert_eq!(parse_duration_seconds("01:02:03"), 3723);
        assert_eq!(format_duration("1:02:03"), "01:02:03");
    }

    #[test]
    fn test_duration_minutes_seconds() {
        let shape = parse_duration("6:59");
        assert_eq!(shape, DurationShape::MinutesSeconds { minutes: 6, seconds: 59 });
        assert_eq!(shape.total_seconds(), 419);
        assert_eq!(shape.format(), "00:06:59");
    }

    #[test]
    fn test_duration_serial_time() {
        let shape = parse_duration("Date(1899,11,30,0,6,59)");
        assert!(matches!(shape, DurationShape::SerialTime { .. }));
        assert_eq!(shape.total_seconds(), 419);
        assert_eq!(shape.format(), "00:06:59");
    }

    #[test]
    fn test_duration_bare_seconds() {
        assert_eq!(parse_duration_seconds("3725"), 3725);
        assert_eq!(format_duration("3725"), "01:02:05");
    }

    #[test]
    fn test_duration_minutes_overflow_normalized() {
        assert_eq!(format_duration("65:30"), "01:05:30");
    }

    #[test]
    fn test_duration_past_one_day() {
        assert_eq!(parse_duration_seconds("25:30:00"), 91_800);
        assert_eq!(format_duration("25:30:00"), "25:30:00");
    }

    #[test]
    fn test_duration_long_hours() {
        assert_eq!(format_seconds(360_000), "100:00:00");
    }

    #[test]
    fn test_duration_unparsed() {
        let shape = parse_duration("about ten minutes");
        assert_eq!(shape.total_seconds(), 0);
        assert_eq!(shape.format(), "about ten minutes");
        assert_eq!(format_duration(""), "-");
    }

    #[test]
    fn test_duration_round_trip_property() {
        let inputs = [
            "00:00:00",
            "01:02:03",
            "9:59:59",
            "123:45:06",
            "6:59",
            "65:30",
            "Date(1899,11,30,0,6,59)",
            "Date(1899,11,30,2,0,1)",
            "0",
            "59",
            "86400",
        ];
        for input in inputs {
            let seconds = parse_duration_seconds(input);
            assert_eq!(
                parse_duration_seconds(&format_seconds(seconds)),
                seconds,
                "round trip failed for {}",
                input
            );
        }
    }
}
