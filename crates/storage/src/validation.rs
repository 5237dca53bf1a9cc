//! Shape checks for caller supplied identifiers.
//!
//! Everything here is pure and runs before any store access.

use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;

/// Wire format of a calendar date, both in paths and in stored rows.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

lazy_static! {
    // Three ASCII digits, up to three Cyrillic letters, then an optional
    // "-N" or single trailing digit.
    static ref GROUP_NAME: Regex =
        Regex::new(r"^[0-9]{3}[а-яА-Я]{0,3}(?:-[0-9]|[0-9])?$").expect("group name pattern");
}

/// Whether `name` is a well formed group name, e.g. `301`, `301а`, `301-2`.
pub fn is_valid_group_name(name: &str) -> bool {
    GROUP_NAME.is_match(name)
}

/// Whether `text` is exactly a `YYYY-MM-DD` calendar date that exists.
pub fn is_valid_date(text: &str) -> bool {
    parse_date(text).is_some()
}

/// Parses a strict `YYYY-MM-DD` date.
///
/// chrono accepts unpadded fields and years of any width, so the layout is
/// checked byte by byte first.
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    let bytes = text.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return None;
    }
    let digits_ok = bytes
        .iter()
        .enumerate()
        .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
    if !digits_ok {
        return None;
    }

    NaiveDate::parse_from_str(text, DATE_FORMAT).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_name_accepts_documented_shapes() {
        for name in ["301", "301а", "301-2", "3012", "301абв", "301АБ-1", "999Я9"] {
            assert!(is_valid_group_name(name), "expected {name:?} to be valid");
        }
    }

    #[test]
    fn test_group_name_rejects_malformed() {
        for name in [
            "", "ab1", "30", "3010-1", "301абвг", "301a", "301-", "301-12", "301 ", " 301",
            "301а-2x", "301\n",
        ] {
            assert!(!is_valid_group_name(name), "expected {name:?} to be invalid");
        }
    }

    #[test]
    fn test_group_name_digits_are_ascii_only() {
        // Arabic-Indic digits are Unicode \d but not group name digits
        assert!(!is_valid_group_name("٣٠١"));
    }

    #[test]
    fn test_date_leap_years() {
        assert!(is_valid_date("2024-02-29"));
        assert!(!is_valid_date("2023-02-29"));
        assert!(!is_valid_date("2021-02-30"));
    }

    #[test]
    fn test_date_rejects_bad_layout() {
        for text in [
            "2024-13-01",
            "24-01-01",
            "2024/01/01",
            "2024-1-01",
            "2024-01-1",
            "2024-01-01T00:00:00Z",
            "2024-01-01 ",
            "+2024-01-01",
            "",
        ] {
            assert!(!is_valid_date(text), "expected {text:?} to be invalid");
        }
    }

    #[test]
    fn test_parse_date_returns_calendar_date() {
        assert_eq!(
            parse_date("2024-09-01"),
            NaiveDate::from_ymd_opt(2024, 9, 1)
        );
    }
}
