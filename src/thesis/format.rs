//! Display formatting for report figures.
//!
//! Every formatter takes an optional value and renders a missing one as `"N/A"`,
//! so a sparse document never breaks a layout.

use chrono::{DateTime, NaiveDateTime, Utc};

pub const MISSING: &str = "N/A";

/// `1_234_000_000.0` -> `"$1.2B"`
pub fn format_billions(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("${}B", to_fixed(v / 1_000_000_000.0, 1)),
        None => MISSING.to_string(),
    }
}

/// Ratio to percentage: `0.153` -> `"15.3%"`
pub fn format_percentage(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{}%", to_fixed(v * 100.0, 1)),
        None => MISSING.to_string(),
    }
}

/// Earnings per share: `1.5` -> `"$1.50"`
pub fn format_eps(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("${}", to_fixed(v, 2)),
        None => MISSING.to_string(),
    }
}

/// Fixed-point text with `digits` decimals.
///
/// `format!` breaks exact ties toward the even digit (`1.125` -> `1.12`). Report
/// figures round ties away from zero instead (`1.125` -> `1.13`). Only values whose
/// binary representation is an exact tie are affected: `1.005` is stored as
/// `1.00499...` and still gives `1.00`.
pub fn to_fixed(value: f64, digits: usize) -> String {
    let rounded = format!("{:.*}", digits, value);
    if !value.is_finite() || !is_exact_tie(value.abs(), digits) {
        return rounded;
    }
    let half = 0.5 / 10f64.powi(digits as i32);
    let magnitude = format!("{:.*}", digits, value.abs() + half);
    if value.is_sign_negative() {
        format!("-{}", magnitude)
    } else {
        magnitude
    }
}

/// Whether the exact decimal expansion of `value` ends in a single `5` right
/// after `digits` decimals.
fn is_exact_tie(value: f64, digits: usize) -> bool {
    // Every finite f64 has at most 1074 fractional decimal digits.
    let exact = format!("{:.1074}", value);
    let fraction = match exact.split_once('.') {
        Some((_, fraction)) => fraction,
        None => return false,
    };
    match fraction.as_bytes().get(digits..) {
        Some([b'5', rest @ ..]) => rest.iter().all(|&b| b == b'0'),
        _ => false,
    }
}

/// A score against a fixed scale: `(Some(4.5), "6.0")` -> `"4.5/6.0"`
pub fn format_score(value: Option<f64>, scale: &str) -> String {
    match value {
        Some(v) => format!("{}/{}", format_number(v), scale),
        None => MISSING.to_string(),
    }
}

/// Whole numbers without a fractional part, everything else in shortest form.
fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

/// Splits an analysis period such as `"Q2 2025"` into quarter and year.
///
/// Only the first two space separated parts are used; missing parts are empty.
pub fn split_period(period: &str) -> (String, String) {
    let mut parts = period.split(' ');
    let quarter = parts.next().unwrap_or_default().to_string();
    let year = parts.next().unwrap_or_default().to_string();
    (quarter, year)
}

/// The overall mood a sentiment label expresses, used to pick a badge style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Positive,
    Negative,
    Neutral,
    Default,
}

impl Tone {
    /// Case-insensitive. `strong` counts as positive for succession readiness.
    pub fn from_label(label: Option<&str>) -> Self {
        match label.map(|l| l.to_lowercase()).as_deref() {
            Some("positive") | Some("bullish") | Some("strong") => Tone::Positive,
            Some("negative") | Some("bearish") => Tone::Negative,
            Some("neutral") => Tone::Neutral,
            _ => Tone::Default,
        }
    }

    pub fn style_name(&self) -> &'static str {
        match self {
            Tone::Positive => "tone-positive",
            Tone::Negative => "tone-negative",
            Tone::Neutral => "tone-neutral",
            Tone::Default => "tone-default",
        }
    }
}

/// Parses an analysis timestamp. Upstream writes naive ISO timestamps
/// (`2025-06-01T14:30:00.123456`), which are read as UTC; RFC 3339 is accepted too.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

/// `"3 days ago"` style age of a timestamp relative to `now`.
pub fn format_age(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let duration = now.signed_duration_since(timestamp);
    let formatter = timeago::Formatter::new();
    formatter.convert(duration.to_std().unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn billions() {
        assert_eq!(format_billions(Some(95_359_000_000.0)), "$95.4B");
        assert_eq!(format_billions(Some(0.0)), "$0.0B");
        assert_eq!(format_billions(Some(-2_500_000_000.0)), "$-2.5B");
        assert_eq!(format_billions(None), "N/A");
        assert_eq!(format_billions(Some(2_250_000_000.0)), "$2.3B");
    }

    #[test]
    fn percentage() {
        assert_eq!(format_percentage(Some(0.153)), "15.3%");
        assert_eq!(format_percentage(Some(1.0)), "100.0%");
        assert_eq!(format_percentage(Some(-0.042)), "-4.2%");
        assert_eq!(format_percentage(None), "N/A");
    }

    #[test]
    fn eps() {
        assert_eq!(format_eps(Some(1.5)), "$1.50");
        assert_eq!(format_eps(Some(6.4321)), "$6.43");
        assert_eq!(format_eps(None), "N/A");
        assert_eq!(format_eps(Some(1.125)), "$1.13");
    }

    #[test]
    fn fixed_point_ties_round_away_from_zero() {
        assert_eq!(to_fixed(1.125, 2), "1.13");
        assert_eq!(to_fixed(2.25, 1), "2.3");
        assert_eq!(to_fixed(0.5, 0), "1");
        assert_eq!(to_fixed(-2.25, 1), "-2.3");
        assert_eq!(format_percentage(Some(0.5)), "50.0%");
    }

    #[test]
    fn fixed_point_non_ties_round_to_nearest() {
        // 1.005 and 2.675 sit just below the tie in binary.
        assert_eq!(to_fixed(1.005, 2), "1.00");
        assert_eq!(to_fixed(2.675, 2), "2.67");
        assert_eq!(to_fixed(2.35, 1), "2.4");
        assert_eq!(to_fixed(1.126, 2), "1.13");
        assert_eq!(to_fixed(1.124, 2), "1.12");
        assert_eq!(to_fixed(3.0, 2), "3.00");
    }

    #[test]
    fn scores() {
        assert_eq!(format_score(Some(4.5), "6.0"), "4.5/6.0");
        assert_eq!(format_score(Some(8.0), "10"), "8/10");
        assert_eq!(format_score(None, "10"), "N/A");
    }

    #[test]
    fn periods() {
        assert_eq!(split_period("Q2 2025"), ("Q2".into(), "2025".into()));
        assert_eq!(split_period("Q2"), ("Q2".into(), "".into()));
        assert_eq!(split_period(""), ("".into(), "".into()));
        assert_eq!(split_period("FY 2024 annual"), ("FY".into(), "2024".into()));
    }

    #[test]
    fn tones() {
        assert_eq!(Tone::from_label(Some("Bullish")), Tone::Positive);
        assert_eq!(Tone::from_label(Some("POSITIVE")), Tone::Positive);
        assert_eq!(Tone::from_label(Some("Strong")), Tone::Positive);
        assert_eq!(Tone::from_label(Some("bearish")), Tone::Negative);
        assert_eq!(Tone::from_label(Some("Negative")), Tone::Negative);
        assert_eq!(Tone::from_label(Some("Neutral")), Tone::Neutral);
        assert_eq!(Tone::from_label(Some("Mixed")), Tone::Default);
        assert_eq!(Tone::from_label(None), Tone::Default);
        assert_eq!(Tone::Negative.style_name(), "tone-negative");
    }

    #[test]
    fn timestamps() {
        let naive = parse_timestamp("2025-06-01T14:30:00.123456").unwrap();
        let expected = Utc.with_ymd_and_hms(2025, 6, 1, 14, 30, 0).unwrap();
        assert_eq!(naive, expected + Duration::microseconds(123_456));

        let plain = parse_timestamp("2025-06-01T14:30:00").unwrap();
        assert_eq!(plain, Utc.with_ymd_and_hms(2025, 6, 1, 14, 30, 0).unwrap());

        let offset = parse_timestamp("2025-06-01T16:30:00+02:00").unwrap();
        assert_eq!(offset, plain);

        assert!(parse_timestamp("yesterday").is_none());
    }

    #[test]
    fn ages() {
        let now = Utc.with_ymd_and_hms(2025, 6, 4, 12, 0, 0).unwrap();
        assert_eq!(format_age(now - Duration::days(3), now), "3 days ago");
        // Timestamps from the future clamp to zero instead of failing.
        assert_eq!(format_age(now + Duration::hours(1), now), format_age(now, now));
    }
}
