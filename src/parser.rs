//! Expression parser
//!
//! Turns a raw cron string into a validated [`CanonicalExpression`]:
//! alias expansion, tokenization, arity resolution, normalization, then
//! character and range validation. The first error wins.

use crate::error::{DescriptionError, Result};
use crate::normalize::FieldNormalizer;
use crate::range::RangeValidator;
use crate::types::{CanonicalExpression, DescriptionOptions, FieldKind};

/// `@`-aliases and the five-field expressions they stand for
pub const ALIASES: [(&str, &str); 7] = [
    ("@yearly", "0 0 1 1 *"),
    ("@annually", "0 0 1 1 *"),
    ("@monthly", "0 0 1 * *"),
    ("@weekly", "0 0 * * 0"),
    ("@daily", "0 0 * * *"),
    ("@midnight", "0 0 * * *"),
    ("@hourly", "0 * * * *"),
];

/// How the tokens of an expression map onto the seven canonical fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// minutes .. day-of-week
    Five,
    /// seconds .. day-of-week
    SixWithSeconds,
    /// minutes .. year
    SixWithYear,
    /// seconds .. year
    Seven,
}

impl Arity {
    /// Decide the arity of a token list
    ///
    /// Six tokens are ambiguous. They are read as minutes..year when the
    /// last token ends in four digits or the day-of-month or day-of-week
    /// token is `?`; otherwise as seconds..day-of-week. This is a heuristic:
    /// a seconds-first expression whose day-of-week ends in four digits is
    /// misread.
    pub fn detect(tokens: &[String]) -> Result<Self> {
        match tokens.len() {
            n if n < 5 => Err(DescriptionError::TooFewFields { count: n }),
            5 => Ok(Arity::Five),
            6 => {
                if ends_with_year(&tokens[5]) || tokens[4] == "?" || tokens[2] == "?" {
                    Ok(Arity::SixWithYear)
                } else {
                    Ok(Arity::SixWithSeconds)
                }
            }
            7 => Ok(Arity::Seven),
            n => Err(DescriptionError::TooManyFields { count: n }),
        }
    }

    /// Place tokens into the seven canonical slots
    ///
    /// `tokens` must have the length this arity was detected from.
    fn expand(self, tokens: Vec<String>) -> [String; 7] {
        let mut fields: [String; 7] = Default::default();
        let offset = match self {
            Arity::Five | Arity::SixWithYear => 1,
            Arity::SixWithSeconds | Arity::Seven => 0,
        };
        for (i, token) in tokens.into_iter().enumerate().take(7 - offset) {
            fields[i + offset] = token;
        }
        fields
    }
}

fn ends_with_year(token: &str) -> bool {
    let bytes = token.as_bytes();
    bytes.len() >= 4 && bytes[bytes.len() - 4..].iter().all(u8::is_ascii_digit)
}

/// Parses raw cron strings into canonical form
#[derive(Debug, Clone, Copy)]
pub struct ExpressionParser {
    day_of_week_start_index_zero: bool,
    month_start_index_zero: bool,
}

impl ExpressionParser {
    pub fn new(day_of_week_start_index_zero: bool, month_start_index_zero: bool) -> Self {
        Self {
            day_of_week_start_index_zero,
            month_start_index_zero,
        }
    }

    /// Parser configured with the index bases of `options`
    pub fn from_options(options: &DescriptionOptions) -> Self {
        Self::new(
            options.day_of_week_start_index_zero,
            options.month_start_index_zero,
        )
    }

    /// Parse, normalize and validate an expression
    pub fn parse(&self, expression: &str) -> Result<CanonicalExpression> {
        let trimmed = expression.trim();
        if trimmed.is_empty() {
            return Err(DescriptionError::EmptyExpression);
        }

        let source = if trimmed.starts_with('@') {
            expand_alias(trimmed)?
        } else {
            trimmed
        };

        let tokens: Vec<String> = source.split_whitespace().map(sort_list).collect();
        let arity = Arity::detect(&tokens)?;
        let mut fields = arity.expand(tokens);

        FieldNormalizer::new(self.day_of_week_start_index_zero, self.month_start_index_zero)
            .normalize(&mut fields)?;

        for kind in FieldKind::ALL {
            check_characters(kind, &fields[kind.index()])?;
        }

        let canonical = CanonicalExpression::from_fields(fields);
        RangeValidator::new(self.day_of_week_start_index_zero, self.month_start_index_zero)
            .validate(&canonical)?;

        tracing::debug!(
            expression,
            ?arity,
            fields = ?canonical.fields(),
            "Parsed cron expression"
        );
        Ok(canonical)
    }
}

impl Default for ExpressionParser {
    fn default() -> Self {
        Self::new(true, false)
    }
}

fn expand_alias(alias: &str) -> Result<&'static str> {
    ALIASES
        .iter()
        .find(|(name, _)| *name == alias)
        .map(|(_, expr)| *expr)
        .ok_or_else(|| DescriptionError::UnknownAlias(alias.to_string()))
}

enum ListItem<'a> {
    Number(u64),
    Text(&'a str),
}

/// Sort the numeric items of a comma list and drop numeric duplicates
///
/// Non-numeric items (ranges, steps, names) keep their positions; numbers
/// are sorted among the positions numbers occupy.
fn sort_list(token: &str) -> String {
    if !token.contains(',') {
        return token.to_string();
    }

    let items: Vec<ListItem<'_>> = token
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| match s.parse::<u64>() {
            Ok(n) if s.bytes().all(|b| b.is_ascii_digit()) => ListItem::Number(n),
            _ => ListItem::Text(s),
        })
        .collect();

    if items.is_empty() {
        return "*".to_string();
    }

    let mut numbers: Vec<u64> = items
        .iter()
        .filter_map(|item| match item {
            ListItem::Number(n) => Some(*n),
            ListItem::Text(_) => None,
        })
        .collect();
    numbers.sort_unstable();
    numbers.dedup();

    let mut numbers = numbers.into_iter();
    items
        .iter()
        .filter_map(|item| match item {
            ListItem::Number(_) => numbers.next().map(|n| n.to_string()),
            ListItem::Text(s) => Some(s.to_string()),
        })
        .collect::<Vec<_>>()
        .join(",")
}

fn allowed_extra(kind: FieldKind) -> &'static [char] {
    match kind {
        FieldKind::DayOfMonth => &['L', 'W'],
        FieldKind::DayOfWeek => &['L', '#'],
        _ => &[],
    }
}

/// Reject characters outside the field's whitelist, reporting each run of
/// offending characters
fn check_characters(kind: FieldKind, field: &str) -> Result<()> {
    let extra = allowed_extra(kind);
    let allowed =
        |c: char| c.is_ascii_digit() || matches!(c, ',' | '-' | '*' | '/') || extra.contains(&c);

    let mut runs: Vec<String> = Vec::new();
    let mut current = String::new();
    for c in field.chars() {
        if allowed(c) {
            if !current.is_empty() {
                runs.push(std::mem::take(&mut current));
            }
        } else {
            current.push(c);
        }
    }
    if !current.is_empty() {
        runs.push(current);
    }

    if runs.is_empty() {
        Ok(())
    } else {
        Err(DescriptionError::InvalidCharacter {
            field: kind,
            chars: runs.join(","),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(expr: &str) -> Result<CanonicalExpression> {
        ExpressionParser::default().parse(expr)
    }

    fn tokens(s: &str) -> Vec<String> {
        s.split_whitespace().map(String::from).collect()
    }

    #[test]
    fn test_five_fields_have_empty_seconds_and_year() {
        let expr = parse("*/5 * * * *").unwrap();
        assert_eq!(expr.seconds(), "");
        assert_eq!(expr.minutes(), "*/5");
        assert_eq!(expr.year(), "");
    }

    #[test]
    fn test_seven_fields_pass_through() {
        let expr = parse("30 15 10 * * ? 2025").unwrap();
        assert_eq!(expr.seconds(), "30");
        assert_eq!(expr.minutes(), "15");
        assert_eq!(expr.hours(), "10");
        assert_eq!(expr.day_of_week(), "*");
        assert_eq!(expr.year(), "2025");
    }

    #[test]
    fn test_arity_detection() {
        assert_eq!(Arity::detect(&tokens("* * * * *")).unwrap(), Arity::Five);
        assert_eq!(
            Arity::detect(&tokens("0 * * * * *")).unwrap(),
            Arity::SixWithSeconds
        );
        assert_eq!(
            Arity::detect(&tokens("0 12 * * * 2030")).unwrap(),
            Arity::SixWithYear
        );
        assert_eq!(
            Arity::detect(&tokens("0 12 ? * MON *")).unwrap(),
            Arity::SixWithYear
        );
        assert_eq!(
            Arity::detect(&tokens("0 12 * * ? *")).unwrap(),
            Arity::SixWithYear
        );
        assert_eq!(Arity::detect(&tokens("* * * * * * *")).unwrap(), Arity::Seven);
    }

    #[test]
    fn test_arity_errors() {
        assert_eq!(
            Arity::detect(&tokens("* * *")).unwrap_err(),
            DescriptionError::TooFewFields { count: 3 }
        );
        assert_eq!(
            Arity::detect(&tokens("* * * * * * * *")).unwrap_err(),
            DescriptionError::TooManyFields { count: 8 }
        );
    }

    #[test]
    fn test_six_fields_with_year() {
        let expr = parse("0 12 * * * 2030").unwrap();
        assert_eq!(expr.seconds(), "");
        assert_eq!(expr.minutes(), "0");
        assert_eq!(expr.year(), "2030");
    }

    #[test]
    fn test_empty_expression() {
        assert_eq!(parse("").unwrap_err(), DescriptionError::EmptyExpression);
        assert_eq!(parse("   ").unwrap_err(), DescriptionError::EmptyExpression);
    }

    #[test]
    fn test_aliases() {
        assert_eq!(parse("@yearly").unwrap(), parse("0 0 1 1 *").unwrap());
        assert_eq!(parse("@hourly").unwrap(), parse("0 * * * *").unwrap());
        assert_eq!(parse(" @weekly ").unwrap(), parse("0 0 * * 0").unwrap());
        assert_eq!(
            parse("@fortnightly").unwrap_err(),
            DescriptionError::UnknownAlias("@fortnightly".to_string())
        );
    }

    #[test]
    fn test_list_sorting() {
        assert_eq!(sort_list("5,1,3"), "1,3,5");
        assert_eq!(sort_list("5,1,5,05"), "1,5");
        assert_eq!(sort_list("10,1-3,2"), "2,1-3,10");
        assert_eq!(sort_list(",,"), "*");
        assert_eq!(sort_list("MON"), "MON");
    }

    #[test]
    fn test_sorted_list_in_canonical_form() {
        let expr = parse("5,1,3 * * * *").unwrap();
        assert_eq!(expr.minutes(), "1,3,5");
    }

    #[test]
    fn test_invalid_characters() {
        let err = parse("* * * * X").unwrap_err();
        assert_eq!(
            err,
            DescriptionError::InvalidCharacter {
                field: FieldKind::DayOfWeek,
                chars: "X".to_string(),
            }
        );

        let expr = parse("0 0 1W * *").unwrap();
        assert_eq!(expr.day_of_month(), "1W");

        let err = parse("0 0 * * * 1Q2Z3").unwrap_err();
        assert_eq!(
            err,
            DescriptionError::InvalidCharacter {
                field: FieldKind::DayOfWeek,
                chars: "Q,Z".to_string(),
            }
        );
    }

    #[test]
    fn test_invalid_character_runs() {
        let err = check_characters(FieldKind::Minutes, "1ab,2c").unwrap_err();
        assert_eq!(
            err,
            DescriptionError::InvalidCharacter {
                field: FieldKind::Minutes,
                chars: "ab,c".to_string(),
            }
        );
        assert!(check_characters(FieldKind::Minutes, "L").is_err());
        assert!(check_characters(FieldKind::DayOfMonth, "LW").is_ok());
        assert!(check_characters(FieldKind::DayOfWeek, "5#2").is_ok());
    }

    #[test]
    fn test_range_errors_surface() {
        assert!(matches!(
            parse("60 * * * *").unwrap_err(),
            DescriptionError::Range { field: FieldKind::Minutes, value: 60, .. }
        ));
        assert!(matches!(
            parse("0 24 * * *").unwrap_err(),
            DescriptionError::Range { field: FieldKind::Hours, .. }
        ));
    }

    #[test]
    fn test_day_of_week_seven_is_accepted_as_sunday() {
        let expr = parse("0 0 * * 7").unwrap();
        assert_eq!(expr.day_of_week(), "0");
    }

    #[test]
    fn test_one_based_day_of_week() {
        let expr = ExpressionParser::new(false, false).parse("0 0 * * 2").unwrap();
        assert_eq!(expr.day_of_week(), "1");

        let err = ExpressionParser::new(false, false)
            .parse("0 0 * * 8")
            .unwrap_err();
        assert_eq!(err.to_string(), "day-of-week part must be >= 1 and <= 7 (got 8)");
    }

    #[test]
    fn test_nearest_weekday_with_range_fails() {
        assert!(matches!(
            parse("0 0 1-5W * *").unwrap_err(),
            DescriptionError::InvalidShorthandPlacement(_)
        ));
    }
}
