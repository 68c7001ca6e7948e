//! Per-field numeric bounds checking
//!
//! Only the leading integer of each comma item is checked, so `5-70` passes
//! on 5 while `70-5` fails on 70. Items that do not start with a number
//! (`*`, `*/5`, `L`) are skipped.

use crate::error::{DescriptionError, Result};
use crate::types::{CanonicalExpression, FieldKind};

/// Validates numeric literals against each field's bounds
#[derive(Debug, Clone, Copy)]
pub struct RangeValidator {
    day_of_week_start_index_zero: bool,
    month_start_index_zero: bool,
}

impl RangeValidator {
    /// Create a validator that reports bounds in the caller's index base
    pub fn new(day_of_week_start_index_zero: bool, month_start_index_zero: bool) -> Self {
        Self {
            day_of_week_start_index_zero,
            month_start_index_zero,
        }
    }

    /// Check every bounded field of a canonical expression, failing on the
    /// first out-of-range literal
    pub fn validate(&self, expr: &CanonicalExpression) -> Result<()> {
        for kind in FieldKind::ALL {
            self.validate_field(kind, expr.field(kind))?;
        }
        Ok(())
    }

    /// Check one canonical field
    pub fn validate_field(&self, kind: FieldKind, field: &str) -> Result<()> {
        let Some((min, max)) = kind.bounds() else {
            return Ok(());
        };

        for item in field.split(',') {
            let Some(value) = leading_int(item) else {
                continue;
            };
            if value < min || value > max {
                let offset = self.display_offset(kind);
                return Err(DescriptionError::Range {
                    field: kind,
                    value: value.saturating_add(offset),
                    bounds: (min + offset, max + offset),
                });
            }
        }
        Ok(())
    }

    /// Difference between the caller's numbering and canonical numbering
    fn display_offset(&self, kind: FieldKind) -> i64 {
        match kind {
            FieldKind::Month if self.month_start_index_zero => -1,
            FieldKind::DayOfWeek if !self.day_of_week_start_index_zero => 1,
            _ => 0,
        }
    }
}

impl Default for RangeValidator {
    fn default() -> Self {
        Self::new(true, false)
    }
}

/// Parse the leading integer of `s`, skipping leading whitespace and
/// accepting an optional sign
///
/// Digit runs too large for `i64` saturate to `i64::MAX` (or its negation),
/// so they still fail any bounds check.
pub(crate) fn leading_int(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    let value = digits[..end].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -value } else { value })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(kind: FieldKind, field: &str) -> Result<()> {
        RangeValidator::default().validate_field(kind, field)
    }

    #[test]
    fn test_leading_int() {
        assert_eq!(leading_int("5"), Some(5));
        assert_eq!(leading_int("5-70"), Some(5));
        assert_eq!(leading_int("3#2"), Some(3));
        assert_eq!(leading_int(" 12"), Some(12));
        assert_eq!(leading_int("-4"), Some(-4));
        assert_eq!(leading_int("*/5"), None);
        assert_eq!(leading_int("L"), None);
        assert_eq!(leading_int(""), None);
    }

    #[test]
    fn test_leading_int_saturates() {
        assert_eq!(leading_int("99999999999999999999"), Some(i64::MAX));
        assert_eq!(leading_int("-99999999999999999999"), Some(-i64::MAX));
        assert_eq!(leading_int("9223372036854775807"), Some(i64::MAX));
        assert_eq!(leading_int("99999999999999999999-3"), Some(i64::MAX));
    }

    #[test]
    fn test_rejects_oversized_literals() {
        assert!(check(FieldKind::Minutes, "99999999999999999999").is_err());
        assert!(check(FieldKind::DayOfMonth, "1,99999999999999999999").is_err());
        assert!(check(FieldKind::Hours, "-99999999999999999999").is_err());
        assert_eq!(
            RangeValidator::new(false, false)
                .validate_field(FieldKind::DayOfWeek, "99999999999999999999")
                .unwrap_err(),
            DescriptionError::Range {
                field: FieldKind::DayOfWeek,
                value: i64::MAX,
                bounds: (1, 7),
            }
        );
    }

    #[test]
    fn test_rejects_out_of_range() {
        assert!(check(FieldKind::Minutes, "60").is_err());
        assert!(check(FieldKind::Hours, "24").is_err());
        assert!(check(FieldKind::DayOfMonth, "0").is_err());
        assert!(check(FieldKind::DayOfMonth, "32").is_err());
        assert!(check(FieldKind::Month, "13").is_err());
        assert!(check(FieldKind::DayOfWeek, "7").is_err());
        assert!(check(FieldKind::Seconds, "60").is_err());
    }

    #[test]
    fn test_accepts_boundaries() {
        assert!(check(FieldKind::Seconds, "59").is_ok());
        assert!(check(FieldKind::Minutes, "59").is_ok());
        assert!(check(FieldKind::Hours, "23").is_ok());
        assert!(check(FieldKind::DayOfMonth, "31").is_ok());
        assert!(check(FieldKind::Month, "12").is_ok());
        assert!(check(FieldKind::DayOfWeek, "6").is_ok());
        assert!(check(FieldKind::Hours, "0").is_ok());
    }

    #[test]
    fn test_skips_non_numeric_items() {
        assert!(check(FieldKind::Minutes, "*").is_ok());
        assert!(check(FieldKind::Minutes, "*/90").is_ok());
        assert!(check(FieldKind::DayOfMonth, "L").is_ok());
        assert!(check(FieldKind::DayOfMonth, "LW").is_ok());
        assert!(check(FieldKind::Minutes, "").is_ok());
    }

    #[test]
    fn test_checks_only_leading_integer() {
        assert!(check(FieldKind::Minutes, "5-70").is_ok());
        assert!(check(FieldKind::Minutes, "70-5").is_err());
        assert!(check(FieldKind::Minutes, "1,2,61").is_err());
    }

    #[test]
    fn test_year_is_unbounded() {
        assert!(check(FieldKind::Year, "99999").is_ok());
    }

    #[test]
    fn test_first_error_reports_field_and_value() {
        let err = check(FieldKind::Hours, "1,25,30").unwrap_err();
        assert_eq!(
            err,
            DescriptionError::Range {
                field: FieldKind::Hours,
                value: 25,
                bounds: (0, 23),
            }
        );
    }

    #[test]
    fn test_reports_in_callers_index_base() {
        let validator = RangeValidator::new(false, true);

        let err = validator.validate_field(FieldKind::Month, "13").unwrap_err();
        assert_eq!(err.to_string(), "month part must be >= 0 and <= 11 (got 12)");

        let err = validator.validate_field(FieldKind::DayOfWeek, "7").unwrap_err();
        assert_eq!(
            err.to_string(),
            "day-of-week part must be >= 1 and <= 7 (got 8)"
        );
    }
}
