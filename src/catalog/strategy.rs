//! Shared derivation toolkit.
//!
//! Every folder and name rule a descriptor applies is composed from these
//! helpers. They are pure functions of the designation and fail with
//! [`CatalogError::MalformedDesignation`] when the text does not have the shape
//! a rule assumes; nothing here guesses a fallback bucket.

use crate::common::{CatalogError, Result};

/// Declination / galactic latitude sign markers.
pub const SIGNS: &[char] = &['+', '-'];

/// `len` characters starting at character `start`.
pub fn slice(text: &str, start: usize, len: usize) -> Result<String> {
    let window: String = text.chars().skip(start).take(len).collect();
    if window.chars().count() < len {
        return Err(CatalogError::malformed(
            text,
            format!("expected at least {} characters", start + len),
        ));
    }
    Ok(window)
}

/// First `len` characters.
pub fn prefix(text: &str, len: usize) -> Result<String> {
    slice(text, 0, len)
}

/// Ensure the text is a non-empty run of ASCII digits.
pub fn digits(text: &str) -> Result<&str> {
    if text.is_empty() || !text.chars().all(|c| c.is_ascii_digit()) {
        return Err(CatalogError::malformed(text, "expected only digits"));
    }
    Ok(text)
}

fn parse_run(text: &str, run: &str) -> Result<u64> {
    if run.is_empty() {
        return Err(CatalogError::malformed(text, "no numeric part"));
    }
    run.parse::<u64>()
        .map_err(|e| CatalogError::malformed(text, format!("numeric part out of range: {}", e)))
}

/// Integer formed by the digits at the start of the text.
pub fn leading_integer(text: &str) -> Result<u64> {
    let end = text
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map(|(i, _)| i)
        .unwrap_or(text.len());
    parse_run(text, &text[..end])
}

/// Integer formed by the digits at the end of the text.
pub fn trailing_integer(text: &str) -> Result<u64> {
    let start = text
        .char_indices()
        .rev()
        .find(|(_, c)| !c.is_ascii_digit())
        .map(|(i, c)| i + c.len_utf8())
        .unwrap_or(0);
    parse_run(text, &text[start..])
}

/// Text following the leading digit run.
pub fn after_leading_digits(text: &str) -> &str {
    text.trim_start_matches(|c: char| c.is_ascii_digit())
}

/// Bin of 100 a sequence number falls into. Truncating division: 99 -> "0",
/// 1234 -> "1200".
pub fn century_bucket(n: u64) -> String {
    ((n / 100) * 100).to_string()
}

/// Bin of 10 a sequence number falls into.
pub fn decade_bucket(n: u64) -> String {
    ((n / 10) * 10).to_string()
}

pub fn leading_century(text: &str) -> Result<String> {
    leading_integer(text).map(century_bucket)
}

pub fn trailing_century(text: &str) -> Result<String> {
    trailing_integer(text).map(century_bucket)
}

/// Character index of the first marker.
pub fn find_marker(text: &str, markers: &[char]) -> Result<usize> {
    text.chars().position(|c| markers.contains(&c)).ok_or_else(|| {
        CatalogError::malformed(text, format!("no marker among {:?}", markers))
    })
}

/// `width` characters starting `skip` characters after the first marker
/// (`skip == 0` includes the marker itself).
pub fn marker_window(text: &str, markers: &[char], skip: usize, width: usize) -> Result<String> {
    let at = find_marker(text, markers)?;
    slice(text, at + skip, width)
}

/// Everything after the first marker.
pub fn after_marker<'a>(text: &'a str, markers: &[char]) -> Result<&'a str> {
    split_at_marker(text, markers).map(|(_, rest)| rest)
}

/// Text before and after the first marker; the marker itself is dropped.
pub fn split_at_marker<'a>(text: &'a str, markers: &[char]) -> Result<(&'a str, &'a str)> {
    let (at, marker) = text
        .char_indices()
        .find(|(_, c)| markers.contains(c))
        .ok_or_else(|| CatalogError::malformed(text, format!("no marker among {:?}", markers)))?;
    Ok((&text[..at], &text[at + marker.len_utf8()..]))
}

/// Bucket for mixed alphanumeric catalogs: a leading digit selects the
/// century bucket of the leading number, anything else is its own bucket.
pub fn first_char_branch(text: &str) -> Result<String> {
    match text.chars().next() {
        Some(c) if c.is_ascii_digit() => leading_century(text),
        Some(c) => Ok(c.to_string()),
        None => Err(CatalogError::malformed(text, "empty designation")),
    }
}

/// Zero-pad a number below 1000 to three digits; larger numbers are left alone.
pub fn pad_to_three(n: u64) -> String {
    if n < 10 {
        format!("00{}", n)
    } else if n < 100 {
        format!("0{}", n)
    } else {
        n.to_string()
    }
}

/// Drop a literal prefix if present, otherwise return the token verbatim.
pub fn strip_literal_prefix<'a>(token: &'a str, literal: &str) -> &'a str {
    token.strip_prefix(literal).map(str::trim_start).unwrap_or(token)
}

/// Drop a literal prefix the designation must carry.
pub fn strip_required_prefix<'a>(text: &'a str, literal: &str) -> Result<&'a str> {
    text.strip_prefix(literal)
        .ok_or_else(|| CatalogError::malformed(text, format!("expected prefix '{}'", literal)))
}

pub fn substitute(text: &str, pairs: &[(char, char)]) -> String {
    text.chars()
        .map(|c| {
            pairs
                .iter()
                .find(|(from, _)| *from == c)
                .map(|(_, to)| *to)
                .unwrap_or(c)
        })
        .collect()
}

/// Path-segment-safe form of a name.
pub fn file_safe(text: &str) -> String {
    substitute(
        text,
        &[
            (' ', '_'),
            (':', '-'),
            ('/', '_'),
            ('\\', '_'),
            ('*', '_'),
            ('?', '_'),
            ('"', '_'),
            ('<', '_'),
            ('>', '_'),
            ('|', '_'),
        ],
    )
}

/// [`file_safe`] form of a name that must stay a single directory level.
/// Empty, `.` and `..` segments are rejected.
pub fn safe_segment(text: &str) -> Result<String> {
    let segment = file_safe(text);
    if segment.is_empty() || segment == "." || segment == ".." {
        return Err(CatalogError::malformed(
            text,
            format!("'{}' is not a usable path segment", segment),
        ));
    }
    Ok(segment)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_century_bucket_truncates() {
        assert_eq!(century_bucket(1234), "1200");
        assert_eq!(century_bucket(99), "0");
        assert_eq!(century_bucket(100), "100");
        assert_eq!(century_bucket(0), "0");
        assert_eq!(decade_bucket(4774), "4770");
    }

    #[test]
    fn test_leading_and_trailing_integers() {
        assert_eq!(leading_integer("273.1").unwrap(), 273);
        assert_eq!(leading_integer("5194A").unwrap(), 5194);
        assert_eq!(trailing_integer("MisV1234").unwrap(), 1234);
        assert_eq!(trailing_integer("+12 0345").unwrap(), 345);
        assert!(leading_integer("A12").is_err());
        assert!(trailing_integer("12A").is_err());
        assert!(leading_integer("").is_err());
    }

    #[test]
    fn test_leading_century_rejects_non_numeric() {
        let err = leading_century("abc").unwrap_err();
        assert!(matches!(err, CatalogError::MalformedDesignation { .. }));
    }

    #[test]
    fn test_marker_window_includes_sign() {
        assert_eq!(marker_window("J123456+001234", SIGNS, 0, 3).unwrap(), "+00");
        assert_eq!(marker_window("J123456+001234", SIGNS, 0, 2).unwrap(), "+0");
        assert_eq!(marker_window("1234.5-1234", SIGNS, 1, 2).unwrap(), "12");
        assert!(marker_window("J1234560012", SIGNS, 0, 3).is_err());
        assert!(marker_window("J123456+0", SIGNS, 0, 3).is_err());
    }

    #[test]
    fn test_split_at_marker() {
        assert_eq!(split_at_marker("AB 01", &[' ']).unwrap(), ("AB", "01"));
        assert_eq!(after_marker("H199-00123", &['-']).unwrap(), "00123");
        assert!(split_at_marker("AB01", &[' ']).is_err());
    }

    #[test]
    fn test_first_char_branch() {
        assert_eq!(first_char_branch("1500").unwrap(), "1500");
        assert_eq!(first_char_branch("342").unwrap(), "300");
        assert_eq!(first_char_branch("SS").unwrap(), "S");
        assert!(first_char_branch("").is_err());
    }

    #[test]
    fn test_pad_to_three_width_bands() {
        assert_eq!(pad_to_three(7), "007");
        assert_eq!(pad_to_three(42), "042");
        assert_eq!(pad_to_three(137), "137");
        assert_eq!(pad_to_three(1234), "1234");
    }

    #[test]
    fn test_prefix_stripping() {
        assert_eq!(strip_literal_prefix("IBVS1234", "IBVS"), "1234");
        assert_eq!(strip_literal_prefix("IBVS 4321", "IBVS"), "4321");
        assert_eq!(strip_literal_prefix("5678", "IBVS"), "5678");
        assert_eq!(strip_required_prefix("J1234", "J").unwrap(), "1234");
        assert!(strip_required_prefix("1234", "J").is_err());
    }

    #[test]
    fn test_slice_and_file_safe() {
        assert_eq!(slice("J123456+12", 1, 2).unwrap(), "12");
        assert!(prefix("AB", 3).is_err());
        assert_eq!(digits("0900").unwrap(), "0900");
        assert!(digits("09a0").is_err());
        assert_eq!(file_safe("SS Cyg"), "SS_Cyg");
        assert_eq!(file_safe("12:34/5"), "12-34_5");
        assert_eq!(file_safe("a\\b*c?\"<d>|"), "a_b_c___d__");
    }

    #[test]
    fn test_safe_segment_rejects_relative_components() {
        assert_eq!(safe_segment("SS Cyg").unwrap(), "SS_Cyg");
        assert_eq!(safe_segment("..\\x").unwrap(), ".._x");
        for bad in ["", ".", ".."] {
            assert!(matches!(
                safe_segment(bad),
                Err(CatalogError::MalformedDesignation { .. })
            ));
        }
    }
}
