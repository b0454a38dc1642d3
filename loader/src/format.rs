use crate::LoaderError;
use chrono::{DateTime, Locale, NaiveDate, NaiveDateTime, TimeZone, Utc};

/// `HH:MM:SS`, every field zero-padded. Hours are not wrapped.
pub fn format_duration(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let seconds = seconds % 60;

    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

/// Renders a publication date as `d MMM yy` in Brazilian Portuguese, e.g. `8 jan 21`.
///
/// Accepts RFC 3339, `YYYY-MM-DD HH:MM:SS` and bare `YYYY-MM-DD`. Offsets are
/// dropped; the date is shown as the publisher wrote it.
pub fn format_published_at(raw: &str) -> Result<String, LoaderError> {
    let published_at = parse_published_at(raw).ok_or_else(|| LoaderError::Date(raw.to_owned()))?;

    Ok(Utc
        .from_utc_datetime(&published_at)
        .format_localized("%-d %b %y", Locale::pt_BR)
        .to_string())
}

fn parse_published_at(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();

    DateTime::parse_from_rfc3339(raw)
        .map(|date| date.naive_local())
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S"))
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn durations() {
        assert_eq!(format_duration(0), "00:00:00");
        assert_eq!(format_duration(59), "00:00:59");
        assert_eq!(format_duration(3601), "01:00:01");
        assert_eq!(format_duration(3725), "01:02:05");
        assert_eq!(format_duration(3981), "01:06:21");
        assert_eq!(format_duration(100 * 3600), "100:00:00");
    }

    #[test]
    fn published_dates() {
        assert_eq!(format_published_at("2021-01-08 16:40:01").unwrap(), "8 jan 21");
        assert_eq!(format_published_at("2021-01-22").unwrap(), "22 jan 21");
        assert_eq!(
            format_published_at("2021-01-08T23:30:00-03:00").unwrap(),
            "8 jan 21"
        );
    }

    #[test]
    fn bad_dates() {
        assert!(matches!(
            format_published_at("yesterday"),
            Err(LoaderError::Date(raw)) if raw == "yesterday"
        ));
        assert!(format_published_at("2021-02-30").is_err());
    }
}
