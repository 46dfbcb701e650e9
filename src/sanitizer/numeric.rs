//! Numeric-string classification shared by the integer and float sanitizers.
//!
//! The check is weak: every `.` is stripped and the remainder
//! must be ASCII digits. `"3.1.4"` therefore counts as numeric while `"-5"`,
//! `"1e3"` and `" 7"` do not.

/// Whether `s` looks numeric under the dot-stripping rule
pub fn is_weak_numeric(s: &str) -> bool {
    let mut digits = 0;

    for c in s.chars() {
        match c {
            '.' => continue,
            '0'..='9' => digits += 1,
            _ => return false,
        }
    }

    digits > 0
}

/// Leading `digits[.digits]` portion of `s`
fn numeric_prefix(s: &str) -> &str {
    let bytes = s.as_bytes();
    let mut end = 0;

    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }

    if end < bytes.len() && bytes[end] == b'.' {
        end += 1;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
    }

    &s[..end]
}

/// Integer value of the leading digits, saturating at `i64::MAX`
pub fn leading_int(s: &str) -> i64 {
    let prefix = numeric_prefix(s);
    let whole = prefix.split('.').next().unwrap_or_default();

    if whole.is_empty() {
        return 0;
    }

    whole.parse::<i64>().unwrap_or(i64::MAX)
}

/// Float value of the leading `digits[.digits]` portion
pub fn leading_float(s: &str) -> f64 {
    numeric_prefix(s).parse::<f64>().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weak_numeric_accepts_digits_and_dots() {
        assert!(is_weak_numeric("314"));
        assert!(is_weak_numeric("3.14"));
        assert!(is_weak_numeric("3.1.4"));
        assert!(is_weak_numeric(".5"));
    }

    #[test]
    fn test_weak_numeric_rejects_everything_else() {
        assert!(!is_weak_numeric(""));
        assert!(!is_weak_numeric("."));
        assert!(!is_weak_numeric("-5"));
        assert!(!is_weak_numeric("1e3"));
        assert!(!is_weak_numeric(" 7"));
        assert!(!is_weak_numeric("abc"));
        assert!(!is_weak_numeric("٣"));
    }

    #[test]
    fn test_leading_int_truncates() {
        assert_eq!(leading_int("42"), 42);
        assert_eq!(leading_int("3.14"), 3);
        assert_eq!(leading_int("3.1.4"), 3);
        assert_eq!(leading_int(".5"), 0);
        assert_eq!(leading_int("99999999999999999999"), i64::MAX);
    }

    #[test]
    fn test_leading_float_keeps_fraction() {
        assert_eq!(leading_float("3.14"), 3.14);
        assert_eq!(leading_float("3.1.4"), 3.1);
        assert_eq!(leading_float(".5"), 0.5);
        assert_eq!(leading_float("42"), 42.0);
    }
}
