//! Calendar utilities behind the time and date intents
//!
//! Time lookup uses a fixed table of UTC offsets, so no daylight-saving
//! awareness. That approximation is deliberate and the table is the single
//! place to add locations.

use chrono::{DateTime, Datelike, Duration, Local, NaiveDate, Timelike, Utc, Weekday};

/// Location name to UTC offset in hours. `None` means the machine-local
/// clock rather than an offset from UTC.
const UTC_OFFSETS: &[(&str, Option<f64>)] = &[
    ("local", None),
    ("london", Some(0.0)),
    ("sydney", Some(11.0)),
    ("new york", Some(-5.0)),
    ("nairobi", Some(3.0)),
    ("tokyo", Some(9.0)),
    ("delhi", Some(5.5)),
];

/// Look up a location's offset (case-insensitive)
pub fn lookup_offset(location: &str) -> Option<Option<f64>> {
    let needle = location.trim().to_lowercase();
    UTC_OFFSETS
        .iter()
        .find(|(name, _)| *name == needle)
        .map(|(_, offset)| *offset)
}

/// Format as H:MM, hour unpadded and minute always two digits
fn clock_string<T: Timelike>(t: &T) -> String {
    format!("{}:{:02}", t.hour(), t.minute())
}

/// Clock string at a fractional-hour offset from a UTC instant
pub fn clock_with_offset(now_utc: DateTime<Utc>, hours: f64) -> String {
    let shifted = now_utc + Duration::minutes((hours * 60.0) as i64);
    clock_string(&shifted)
}

/// Current clock time for a named location
pub fn time_in(location: &str) -> String {
    match lookup_offset(location) {
        Some(None) => clock_string(&Local::now()),
        Some(Some(hours)) => clock_with_offset(Utc::now(), hours),
        None => format!("I don't know what time it is in {}", location),
    }
}

/// Parse weekday name to chrono::Weekday
pub fn parse_weekday(s: &str) -> Option<Weekday> {
    match s.to_lowercase().as_str() {
        "monday" | "mon" => Some(Weekday::Mon),
        "tuesday" | "tue" | "tues" => Some(Weekday::Tue),
        "wednesday" | "wed" => Some(Weekday::Wed),
        "thursday" | "thu" | "thurs" => Some(Weekday::Thu),
        "friday" | "fri" => Some(Weekday::Fri),
        "saturday" | "sat" => Some(Weekday::Sat),
        "sunday" | "sun" => Some(Weekday::Sun),
        _ => None,
    }
}

/// Date of the target weekday in the week containing `today`, counting
/// weeks Sunday-first. The offset is signed and not normalized forward,
/// so a day already past resolves to earlier in the current week.
pub fn date_for_weekday(today: NaiveDate, target: Weekday) -> NaiveDate {
    let offset = target.num_days_from_sunday() as i64
        - today.weekday().num_days_from_sunday() as i64;
    today + Duration::days(offset)
}

/// Format a date as M/D/YYYY without zero padding
pub fn format_short_date(date: NaiveDate) -> String {
    date.format("%-m/%-d/%Y").to_string()
}

/// Date string for a named weekday relative to today
pub fn date_for(day_name: &str) -> String {
    match parse_weekday(day_name.trim()) {
        Some(target) => format_short_date(date_for_weekday(Local::now().date_naive(), target)),
        None => "I can only determine dates for today or named days of the week.".to_string(),
    }
}

/// Input formats accepted by [`day_of`], tried in order
const DATE_FORMATS: &[&str] = &["%m/%d/%Y", "%Y-%m-%d", "%m-%d-%Y"];

/// Parse a calendar date from common formats
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    let trimmed = text.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
}

/// Weekday name for a date string, or a format hint when unparseable
pub fn day_of(date_text: &str) -> String {
    match parse_date(date_text) {
        Some(date) => date.format("%A").to_string(),
        None => "Enter a date in MM/DD/YYYY format.".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_lookup_offset_case_insensitive() {
        assert_eq!(lookup_offset("Tokyo"), Some(Some(9.0)));
        assert_eq!(lookup_offset("DELHI"), Some(Some(5.5)));
        assert_eq!(lookup_offset("new york"), Some(Some(-5.0)));
        assert_eq!(lookup_offset("New York"), Some(Some(-5.0)));
        assert_eq!(lookup_offset("local"), Some(None));
        assert_eq!(lookup_offset("atlantis"), None);
    }

    #[test]
    fn test_clock_with_offset_formats_unpadded_hour() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 9, 5, 0).unwrap();
        assert_eq!(clock_with_offset(now, 0.0), "9:05");
    }

    #[test]
    fn test_clock_with_offset_half_hour() {
        // Delhi is UTC+5.5, so 00:45 UTC becomes 6:15
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 45, 0).unwrap();
        assert_eq!(clock_with_offset(now, 5.5), "6:15");
    }

    #[test]
    fn test_clock_with_offset_negative_crosses_midnight() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 3, 0, 0).unwrap();
        assert_eq!(clock_with_offset(now, -5.0), "22:00");
    }

    #[test]
    fn test_time_in_all_known_locations_match_clock_shape() {
        for (name, _) in UTC_OFFSETS {
            let result = time_in(name);
            let (hour, minute) = result
                .split_once(':')
                .unwrap_or_else(|| panic!("no colon in {:?} for {}", result, name));
            assert!(
                !hour.is_empty() && hour.len() <= 2 && hour.chars().all(|c| c.is_ascii_digit()),
                "bad hour in {:?} for {}",
                result,
                name
            );
            assert!(
                minute.len() == 2 && minute.chars().all(|c| c.is_ascii_digit()),
                "bad minute in {:?} for {}",
                result,
                name
            );
        }
    }

    #[test]
    fn test_time_in_unknown_location_echoes_input() {
        assert_eq!(
            time_in("unknown-place"),
            "I don't know what time it is in unknown-place"
        );
        // Input is echoed verbatim, not lowercased
        assert_eq!(
            time_in("Unknown-Place"),
            "I don't know what time it is in Unknown-Place"
        );
    }

    #[test]
    fn test_date_for_weekday_signed_offset() {
        // 2024-01-03 is a Wednesday; Monday resolves two days back
        let wednesday = NaiveDate::from_ymd_opt(2024, 1, 3).unwrap();
        assert_eq!(
            date_for_weekday(wednesday, Weekday::Mon),
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
        );
        // Saturday is three days ahead
        assert_eq!(
            date_for_weekday(wednesday, Weekday::Sat),
            NaiveDate::from_ymd_opt(2024, 1, 6).unwrap()
        );
        // Same weekday resolves to today
        assert_eq!(date_for_weekday(wednesday, Weekday::Wed), wednesday);
    }

    #[test]
    fn test_date_for_weekday_sunday_is_week_start() {
        // 2024-01-07 is a Sunday; every other day of that week is ahead
        let sunday = NaiveDate::from_ymd_opt(2024, 1, 7).unwrap();
        assert_eq!(
            date_for_weekday(sunday, Weekday::Sat),
            NaiveDate::from_ymd_opt(2024, 1, 13).unwrap()
        );
    }

    #[test]
    fn test_format_short_date_unpadded() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 3).unwrap();
        assert_eq!(format_short_date(date), "1/3/2024");

        let date = NaiveDate::from_ymd_opt(2024, 12, 25).unwrap();
        assert_eq!(format_short_date(date), "12/25/2024");
    }

    #[test]
    fn test_date_for_weekday_name() {
        let result = date_for("Monday");
        // A date came back, not the fallback sentence
        assert!(result.contains('/'), "unexpected: {}", result);
        let expected =
            format_short_date(date_for_weekday(Local::now().date_naive(), Weekday::Mon));
        assert_eq!(result, expected);
    }

    #[test]
    fn test_date_for_unparseable_day() {
        assert_eq!(
            date_for("nonsense"),
            "I can only determine dates for today or named days of the week."
        );
    }

    #[test]
    fn test_parse_weekday_case_insensitive() {
        assert_eq!(parse_weekday("Monday"), Some(Weekday::Mon));
        assert_eq!(parse_weekday("FRIDAY"), Some(Weekday::Fri));
        assert_eq!(parse_weekday("sun"), Some(Weekday::Sun));
        assert_eq!(parse_weekday("someday"), None);
    }

    #[test]
    fn test_day_of_valid_date() {
        assert_eq!(day_of("12/25/2024"), "Wednesday");
        assert_eq!(day_of("1/1/2024"), "Monday");
        // ISO input is accepted too
        assert_eq!(day_of("2024-12-25"), "Wednesday");
    }

    #[test]
    fn test_day_of_invalid_date() {
        assert_eq!(day_of("13/45/2024"), "Enter a date in MM/DD/YYYY format.");
        assert_eq!(day_of("not a date"), "Enter a date in MM/DD/YYYY format.");
    }
}
