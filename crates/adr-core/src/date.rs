//! Rendering record dates with the configured `date_format`.
//!
//! Patterns are strftime (`%Y/%m/%d`). A pattern with no `%` in it is read as
//! a reference-time layout built from the fixed instant
//! `Mon Jan 2 15:04:05 MST 2006` (so `2006/01/02` means year/month/day) and
//! translated to strftime first. Layout tokens with no strftime equivalent
//! (the `Z07:00` family) are rejected rather than printed as literal text.

use crate::error::{AdrError, Result};
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local, TimeZone};
use std::fmt::Write as _;

/// Layout tokens chrono cannot express (`Z` for UTC, offset otherwise).
const UNSUPPORTED_TOKENS: &[&str] = &["Z07:00", "Z0700", "Z07"];

/// Reference-layout tokens and their strftime equivalents. Longer tokens come
/// first so `2006` wins over `2`, `002` over `02` and `January` over `Jan`.
const LAYOUT_TOKENS: &[(&str, &str)] = &[
    ("January", "%B"),
    ("Monday", "%A"),
    (".000000000", "%.9f"),
    (".000000", "%.6f"),
    (".000", "%.3f"),
    ("-07:00", "%:z"),
    ("-0700", "%z"),
    ("2006", "%Y"),
    ("002", "%j"),
    ("Jan", "%b"),
    ("Mon", "%a"),
    ("MST", "%Z"),
    ("_2", "%e"),
    ("01", "%m"),
    ("02", "%d"),
    ("03", "%I"),
    ("04", "%M"),
    ("05", "%S"),
    ("06", "%y"),
    ("15", "%H"),
    ("PM", "%p"),
    ("pm", "%P"),
    ("1", "%-m"),
    ("2", "%-d"),
    ("3", "%-I"),
    ("4", "%-M"),
    ("5", "%-S"),
];

/// Normalize a configured pattern to strftime.
pub fn to_strftime(pattern: &str) -> Result<String> {
    if pattern.contains('%') {
        return Ok(pattern.to_string());
    }

    let mut out = String::with_capacity(pattern.len() * 2);
    let mut rest = pattern;
    'outer: while !rest.is_empty() {
        if UNSUPPORTED_TOKENS.iter().any(|t| rest.starts_with(t)) {
            return Err(AdrError::InvalidDateFormat(pattern.to_string()));
        }
        for (token, strftime) in LAYOUT_TOKENS {
            if let Some(tail) = rest.strip_prefix(token) {
                out.push_str(strftime);
                rest = tail;
                continue 'outer;
            }
        }
        let mut chars = rest.chars();
        if let Some(c) = chars.next() {
            out.push(c);
        }
        rest = chars.as_str();
    }
    Ok(out)
}

/// Format `when` with the configured pattern.
pub fn format<Tz>(when: &DateTime<Tz>, pattern: &str) -> Result<String>
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let strftime = to_strftime(pattern)?;
    if StrftimeItems::new(&strftime).any(|item| matches!(item, Item::Error)) {
        return Err(AdrError::InvalidDateFormat(pattern.to_string()));
    }

    let mut out = String::new();
    write!(out, "{}", when.format_with_items(StrftimeItems::new(&strftime)))
        .map_err(|_| AdrError::InvalidDateFormat(pattern.to_string()))?;
    Ok(out)
}

/// Today's date in local time, formatted with the configured pattern.
pub fn today(pattern: &str) -> Result<String> {
    format(&Local::now(), pattern)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 7, 14, 5, 9).unwrap()
    }

    #[test]
    fn strftime_passthrough() {
        assert_eq!(format(&sample(), "%Y/%m/%d").unwrap(), "2024/03/07");
        assert_eq!(format(&sample(), "%Y-%m-%d").unwrap(), "2024-03-07");
    }

    #[test]
    fn reference_layout_translated() {
        assert_eq!(to_strftime("2006/01/02").unwrap(), "%Y/%m/%d");
        assert_eq!(format(&sample(), "2006/01/02").unwrap(), "2024/03/07");
        assert_eq!(format(&sample(), "02.01.2006").unwrap(), "07.03.2024");
        assert_eq!(format(&sample(), "Jan 2, 2006").unwrap(), "Mar 7, 2024");
        assert_eq!(format(&sample(), "2006-01-02 15:04").unwrap(), "2024-03-07 14:05");
    }

    #[test]
    fn literal_text_survives_translation() {
        assert_eq!(to_strftime("on 2006/01/02").unwrap(), "on %Y/%m/%d");
    }

    #[test]
    fn day_of_year_and_fractional_seconds() {
        assert_eq!(to_strftime("2006.002").unwrap(), "%Y.%j");
        assert_eq!(format(&sample(), "2006.002").unwrap(), "2024.067");
        assert_eq!(format(&sample(), "15:04:05.000").unwrap(), "14:05:09.000");
    }

    #[test]
    fn utc_zone_layout_is_rejected() {
        for pattern in ["2006-01-02T15:04:05Z07:00", "15:04 Z0700"] {
            let err = format(&sample(), pattern).unwrap_err();
            assert!(matches!(err, AdrError::InvalidDateFormat(_)));
        }
    }

    #[test]
    fn invalid_strftime_is_an_error() {
        let err = format(&sample(), "%Q").unwrap_err();
        assert!(matches!(err, AdrError::InvalidDateFormat(_)));
    }

    #[test]
    fn today_uses_default_pattern() {
        let s = today("%Y/%m/%d").unwrap();
        assert_eq!(s.len(), 10);
        assert_eq!(s.matches('/').count(), 2);
    }
}
