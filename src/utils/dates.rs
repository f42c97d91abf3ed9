//! Date and duration formatting for content payloads.
//!
//! The content API sends calendar dates as `YYYY-MM-DD`; list records carry
//! full RFC 3339 timestamps. Both are accepted everywhere a date is parsed.
//! Blank or unparseable input formats to `None`.

use chrono::{DateTime, Datelike, Local, NaiveDate};

/// Parse a calendar date or an RFC 3339 timestamp.
///
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(value)
                .ok()
                .map(|date_time| date_time.naive_utc().date())
        })
}

/// `1999-03-31` as `31st Mar 1999`.
///
pub fn format_short_month_date(value: Option<&str>) -> Option<String> {
    let date = parse_date(value?)?;
    Some(format!(
        "{}{} {}",
        date.day(),
        ordinal_suffix(date.day()),
        date.format("%b %Y")
    ))
}

/// `1999-03-31` as `31/03/1999`.
///
pub fn format_short_date(value: Option<&str>) -> Option<String> {
    parse_date(value?).map(|date| date.format("%d/%m/%Y").to_string())
}

pub fn format_year(value: Option<&str>) -> Option<String> {
    parse_date(value?).map(|date| date.year().to_string())
}

/// Age in whole years at `today`, or at the day of death.
///
pub fn format_age_at(birthday: Option<&str>, deathday: Option<&str>, today: NaiveDate) -> Option<u32> {
    let birthday = parse_date(birthday?)?;
    let end = deathday.and_then(parse_date).unwrap_or(today);
    if end < birthday {
        return None;
    }
    let mut years = end.year() - birthday.year();
    if (end.month(), end.day()) < (birthday.month(), birthday.day()) {
        years -= 1;
    }
    u32::try_from(years).ok()
}

pub fn format_age(birthday: Option<&str>, deathday: Option<&str>) -> Option<u32> {
    format_age_at(birthday, deathday, Local::now().naive_local().date())
}

/// Minutes as `2h 16m`, `45m` or `2h`.
///
pub fn format_runtime(runtime: Option<u32>) -> Option<String> {
    let runtime = runtime.filter(|minutes| *minutes > 0)?;
    let hours = runtime / 60;
    let minutes = runtime % 60;
    Some(match (hours, minutes) {
        (0, m) => format!("{}m", m),
        (h, 0) => format!("{}h", h),
        (h, m) => format!("{}h {}m", h, m),
    })
}

fn ordinal_suffix(day: u32) -> &'static str {
    match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_month_date() {
        assert_eq!(
            format_short_month_date(Some("1999-03-31")),
            Some("31st Mar 1999".to_string())
        );
        assert_eq!(
            format_short_month_date(Some("2011-04-12")),
            Some("12th Apr 2011".to_string())
        );
        assert_eq!(
            format_short_month_date(Some("2008-07-22")),
            Some("22nd Jul 2008".to_string())
        );
        assert_eq!(format_short_month_date(Some("")), None);
        assert_eq!(format_short_month_date(None), None);
        assert_eq!(format_short_month_date(Some("soon")), None);
    }

    #[test]
    fn short_date_accepts_timestamps() {
        assert_eq!(
            format_short_date(Some("2022-01-05T10:30:00.000Z")),
            Some("05/01/2022".to_string())
        );
        assert_eq!(format_year(Some("1972-03-14")), Some("1972".to_string()));
    }

    #[test]
    fn age() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        assert_eq!(format_age_at(Some("1964-09-02"), None, today), Some(59));
        assert_eq!(format_age_at(Some("1964-06-01"), None, today), Some(60));
        assert_eq!(
            format_age_at(Some("1926-06-01"), Some("1962-08-04"), today),
            Some(36)
        );
        assert_eq!(format_age_at(None, None, today), None);
    }

    #[test]
    fn runtime() {
        assert_eq!(format_runtime(Some(136)), Some("2h 16m".to_string()));
        assert_eq!(format_runtime(Some(45)), Some("45m".to_string()));
        assert_eq!(format_runtime(Some(120)), Some("2h".to_string()));
        assert_eq!(format_runtime(Some(60)), Some("1h".to_string()));
        assert_eq!(format_runtime(Some(0)), None);
        assert_eq!(format_runtime(None), None);
    }
}
