//! Field normalization
//!
//! Rewrites tokenized fields into canonical form before validation. Rules run
//! in a fixed order; several depend on rewrites made by earlier ones (day
//! names are substituted only after day-of-week digits have been re-based).

use crate::error::{DescriptionError, Result};
use crate::types::FieldKind;
use regex::{Captures, Regex};
use std::sync::OnceLock;

const SECONDS: usize = 0;
const MINUTES: usize = 1;
const HOURS: usize = 2;
const DAY_OF_MONTH: usize = 3;
const MONTH: usize = 4;
const DAY_OF_WEEK: usize = 5;
const YEAR: usize = 6;

const NEAREST_WEEKDAY_MESSAGE: &str = "The 'W' character can be specified only when the day-of-month is a single day, not a range or list of days.";

fn dow_digit_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(^\d)|([^#/\s]\d)").unwrap())
}

fn month_digit_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(^\d{1,2})|([^#/\s]\d{1,2})").unwrap())
}

fn day_name_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)SUN|MON|TUE|WED|THU|FRI|SAT").unwrap())
}

fn month_name_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)JAN|FEB|MAR|APR|MAY|JUN|JUL|AUG|SEP|OCT|NOV|DEC").unwrap())
}

const DAY_NAMES: [&str; 7] = ["SUN", "MON", "TUE", "WED", "THU", "FRI", "SAT"];
const MONTH_NAMES: [&str; 12] = [
    "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
];

/// Rewrites raw fields into canonical form
#[derive(Debug, Clone, Copy)]
pub struct FieldNormalizer {
    day_of_week_start_index_zero: bool,
    month_start_index_zero: bool,
}

impl FieldNormalizer {
    pub fn new(day_of_week_start_index_zero: bool, month_start_index_zero: bool) -> Self {
        Self {
            day_of_week_start_index_zero,
            month_start_index_zero,
        }
    }

    /// Normalize all seven fields in place
    pub fn normalize(&self, parts: &mut [String; 7]) -> Result<()> {
        for i in [DAY_OF_MONTH, DAY_OF_WEEK, HOURS] {
            parts[i] = parts[i].replacen('?', "*", 1);
        }

        for i in [SECONDS, MINUTES, HOURS] {
            replace_step_start(&mut parts[i], "0/");
        }
        for i in [DAY_OF_MONTH, MONTH, YEAR] {
            replace_step_start(&mut parts[i], "1/");
        }

        parts[DAY_OF_WEEK] = self.rebase_day_of_week(&parts[DAY_OF_WEEK]);
        if parts[DAY_OF_WEEK] == "L" {
            parts[DAY_OF_WEEK] = "6".to_string();
        }

        let dom = &parts[DAY_OF_MONTH];
        if dom.contains('W') && (dom.contains(',') || dom.contains('-')) {
            return Err(DescriptionError::InvalidShorthandPlacement(
                NEAREST_WEEKDAY_MESSAGE.to_string(),
            ));
        }

        parts[DAY_OF_WEEK] = replace_names(day_name_regex(), &DAY_NAMES, 0, &parts[DAY_OF_WEEK]);

        if self.month_start_index_zero {
            parts[MONTH] = rebase_month(&parts[MONTH]);
        }
        parts[MONTH] = replace_names(month_name_regex(), &MONTH_NAMES, 1, &parts[MONTH]);

        if parts[SECONDS] == "0" {
            parts[SECONDS].clear();
        }

        // Heuristic: a single hour alongside wildcard minutes or seconds is
        // described as a one-hour range.
        if !contains_any(&parts[HOURS], &['*', '-', ',', '/'])
            && (contains_any(&parts[MINUTES], &['*', '/'])
                || contains_any(&parts[SECONDS], &['*', '/']))
        {
            let hour = parts[HOURS].clone();
            parts[HOURS] = format!("{}-{}", hour, hour);
        }

        for (i, part) in parts.iter_mut().enumerate() {
            normalize_list(part);
            if part == "*/1" {
                *part = "*".to_string();
            }
            complete_step_range(FieldKind::ALL[i], part);
        }

        Ok(())
    }

    fn rebase_day_of_week(&self, field: &str) -> String {
        let zero_based = self.day_of_week_start_index_zero;
        dow_digit_regex()
            .replace_all(field, |caps: &Captures| {
                let token = &caps[0];
                let digits = remove_first_non_digit(token);
                let adjusted = if zero_based {
                    if digits == "7" {
                        "0".to_string()
                    } else {
                        digits.clone()
                    }
                } else {
                    digits
                        .parse::<i64>()
                        .map(|d| (d - 1).to_string())
                        .unwrap_or_else(|_| digits.clone())
                };
                token.replacen(&digits, &adjusted, 1)
            })
            .into_owned()
    }
}

impl Default for FieldNormalizer {
    fn default() -> Self {
        Self::new(true, false)
    }
}

fn rebase_month(field: &str) -> String {
    month_digit_regex()
        .replace_all(field, |caps: &Captures| {
            let token = &caps[0];
            let digits = remove_first_non_digit(token);
            match digits.parse::<i64>() {
                Ok(d) => token.replacen(&digits, &d.saturating_add(1).to_string(), 1),
                Err(_) => token.to_string(),
            }
        })
        .into_owned()
}

fn replace_names(re: &Regex, names: &[&str], first: usize, field: &str) -> String {
    re.replace_all(field, |caps: &Captures| {
        let matched = caps[0].to_ascii_uppercase();
        names
            .iter()
            .position(|n| *n == matched)
            .map(|i| (i + first).to_string())
            .unwrap_or(matched)
    })
    .into_owned()
}

/// Drop the first non-digit character of a regex match
fn remove_first_non_digit(token: &str) -> String {
    match token.char_indices().find(|(_, c)| !c.is_ascii_digit()) {
        Some((i, c)) => {
            let mut out = String::with_capacity(token.len());
            out.push_str(&token[..i]);
            out.push_str(&token[i + c.len_utf8()..]);
            out
        }
        None => token.to_string(),
    }
}

fn replace_step_start(part: &mut String, start: &str) {
    if let Some(rest) = part.strip_prefix(start) {
        *part = format!("*/{}", rest);
    }
}

fn normalize_list(part: &mut String) {
    if !part.contains(',') {
        return;
    }
    let joined = part
        .split(',')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(",");
    *part = if joined.is_empty() {
        "*".to_string()
    } else {
        joined
    };
}

/// Turn `a/n` into `a-<max>/n` for fields with a known upper bound
fn complete_step_range(kind: FieldKind, part: &mut String) {
    if !part.contains('/') || part.starts_with('*') || part.contains('-') || part.contains(',') {
        return;
    }
    let through = match kind {
        FieldKind::Month => "12",
        FieldKind::DayOfWeek => "6",
        FieldKind::Year => "9999",
        _ => return,
    };
    let mut pieces = part.split('/');
    let start = pieces.next().unwrap_or_default();
    let step = pieces.next().unwrap_or_default();
    *part = format!("{}-{}/{}", start, through, step);
}

pub(crate) fn contains_any(s: &str, chars: &[char]) -> bool {
    s.chars().any(|c| chars.contains(&c))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(parts: [&str; 7]) -> [String; 7] {
        parts.map(String::from)
    }

    fn normalized(parts: [&str; 7]) -> [String; 7] {
        let mut parts = fields(parts);
        FieldNormalizer::default().normalize(&mut parts).unwrap();
        parts
    }

    #[test]
    fn test_question_mark_becomes_wildcard() {
        let parts = normalized(["", "0", "12", "?", "*", "MON", ""]);
        assert_eq!(parts[DAY_OF_MONTH], "*");
        assert_eq!(parts[DAY_OF_WEEK], "1");
    }

    #[test]
    fn test_zero_and_one_step_starts() {
        let parts = normalized(["0/10", "0/5", "0/2", "1/3", "1/2", "*", "1/4"]);
        assert_eq!(parts[SECONDS], "*/10");
        assert_eq!(parts[MINUTES], "*/5");
        assert_eq!(parts[HOURS], "*/2");
        assert_eq!(parts[DAY_OF_MONTH], "*/3");
        assert_eq!(parts[MONTH], "*/2");
        assert_eq!(parts[YEAR], "*/4");
    }

    #[test]
    fn test_day_of_week_seven_is_sunday() {
        let parts = normalized(["", "0", "0", "*", "*", "7", ""]);
        assert_eq!(parts[DAY_OF_WEEK], "0");
    }

    #[test]
    fn test_day_of_week_one_based() {
        let mut parts = fields(["", "0", "0", "*", "*", "2-6", ""]);
        FieldNormalizer::new(false, false)
            .normalize(&mut parts)
            .unwrap();
        assert_eq!(parts[DAY_OF_WEEK], "1-5");

        let mut parts = fields(["", "0", "0", "*", "*", "2#3", ""]);
        FieldNormalizer::new(false, false)
            .normalize(&mut parts)
            .unwrap();
        assert_eq!(parts[DAY_OF_WEEK], "1#3");
    }

    #[test]
    fn test_day_of_week_names_and_last() {
        assert_eq!(normalized(["", "0", "0", "*", "*", "mon-fri", ""])[DAY_OF_WEEK], "1-5");
        assert_eq!(normalized(["", "0", "0", "*", "*", "L", ""])[DAY_OF_WEEK], "6");
        assert_eq!(normalized(["", "0", "0", "*", "*", "5L", ""])[DAY_OF_WEEK], "5L");
    }

    #[test]
    fn test_month_names_and_zero_index() {
        assert_eq!(normalized(["", "0", "0", "1", "JAN-Mar", "*", ""])[MONTH], "1-3");

        let mut parts = fields(["", "0", "0", "1", "0-11", "*", ""]);
        FieldNormalizer::new(true, true).normalize(&mut parts).unwrap();
        assert_eq!(parts[MONTH], "1-12");
    }

    #[test]
    fn test_nearest_weekday_rejects_list_or_range() {
        let mut parts = fields(["", "0", "0", "1W,15", "*", "*", ""]);
        let err = FieldNormalizer::default()
            .normalize(&mut parts)
            .unwrap_err();
        assert!(matches!(err, DescriptionError::InvalidShorthandPlacement(_)));

        let mut parts = fields(["", "0", "0", "1-5W", "*", "*", ""]);
        assert!(FieldNormalizer::default().normalize(&mut parts).is_err());
    }

    #[test]
    fn test_zero_seconds_collapses() {
        assert_eq!(normalized(["0", "30", "3", "*", "*", "*", ""])[SECONDS], "");
    }

    #[test]
    fn test_single_hour_with_wildcard_minutes_becomes_range() {
        assert_eq!(normalized(["", "*", "5", "*", "*", "*", ""])[HOURS], "5-5");
        assert_eq!(normalized(["*/10", "30", "5", "*", "*", "*", ""])[HOURS], "5-5");
        assert_eq!(normalized(["", "30", "5", "*", "*", "*", ""])[HOURS], "5");
        assert_eq!(normalized(["", "*", "5,6", "*", "*", "*", ""])[HOURS], "5,6");
    }

    #[test]
    fn test_list_cleanup_and_every_one() {
        let parts = normalized(["", "1,,2,", "*/1", "*", "*", "*", ""]);
        assert_eq!(parts[MINUTES], "1,2");
        assert_eq!(parts[HOURS], "*");
    }

    #[test]
    fn test_step_range_completion() {
        let parts = normalized(["", "0", "0", "*", "3/2", "2/2", "2020/5"]);
        assert_eq!(parts[MONTH], "3-12/2");
        assert_eq!(parts[DAY_OF_WEEK], "2-6/2");
        assert_eq!(parts[YEAR], "2020-9999/5");

        let parts = normalized(["", "5/15", "0", "*", "*", "*", ""]);
        assert_eq!(parts[MINUTES], "5/15");
    }

    #[test]
    fn test_normalizing_canonical_fields_is_idempotent() {
        let once = normalized(["", "*/5", "9-17", "L-2", "1-3", "1#2", "2024"]);
        let mut twice = once.clone();
        FieldNormalizer::default().normalize(&mut twice).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_remove_first_non_digit() {
        assert_eq!(remove_first_non_digit("-5"), "5");
        assert_eq!(remove_first_non_digit("12"), "12");
        assert_eq!(remove_first_non_digit("L5"), "5");
    }
}
