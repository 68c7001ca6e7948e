//! Core types for the cron description pipeline
//!
//! Options and configuration use camelCase JSON serialization so embedding
//! applications can load them from the same settings documents they persist.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The seven semantic fields of a canonical cron expression, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldKind {
    Seconds,
    Minutes,
    Hours,
    DayOfMonth,
    Month,
    DayOfWeek,
    Year,
}

impl FieldKind {
    /// All fields in canonical order
    pub const ALL: [FieldKind; 7] = [
        FieldKind::Seconds,
        FieldKind::Minutes,
        FieldKind::Hours,
        FieldKind::DayOfMonth,
        FieldKind::Month,
        FieldKind::DayOfWeek,
        FieldKind::Year,
    ];

    /// Position of this field in a canonical expression
    pub fn index(self) -> usize {
        match self {
            FieldKind::Seconds => 0,
            FieldKind::Minutes => 1,
            FieldKind::Hours => 2,
            FieldKind::DayOfMonth => 3,
            FieldKind::Month => 4,
            FieldKind::DayOfWeek => 5,
            FieldKind::Year => 6,
        }
    }

    /// Inclusive numeric bounds of the field in canonical (normalized) form
    ///
    /// Year is unbounded.
    pub fn bounds(self) -> Option<(i64, i64)> {
        match self {
            FieldKind::Seconds | FieldKind::Minutes => Some((0, 59)),
            FieldKind::Hours => Some((0, 23)),
            FieldKind::DayOfMonth => Some((1, 31)),
            FieldKind::Month => Some((1, 12)),
            FieldKind::DayOfWeek => Some((0, 6)),
            FieldKind::Year => None,
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKind::Seconds => write!(f, "seconds"),
            FieldKind::Minutes => write!(f, "minutes"),
            FieldKind::Hours => write!(f, "hours"),
            FieldKind::DayOfMonth => write!(f, "day-of-month"),
            FieldKind::Month => write!(f, "month"),
            FieldKind::DayOfWeek => write!(f, "day-of-week"),
            FieldKind::Year => write!(f, "year"),
        }
    }
}

/// Which end of an `a-b` range a value is rendered for
///
/// Locales use this to pick a grammatical form (e.g. genitive for the
/// start of a Russian weekday range).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangePosition {
    Start,
    End,
}

/// A validated cron expression in canonical seven-field form
///
/// Fields are, in order: seconds, minutes, hours, day-of-month, month,
/// day-of-week, year. An empty field means "not specified".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CanonicalExpression {
    fields: [String; 7],
}

impl CanonicalExpression {
    pub(crate) fn from_fields(fields: [String; 7]) -> Self {
        Self { fields }
    }

    /// Get a field by kind
    pub fn field(&self, kind: FieldKind) -> &str {
        &self.fields[kind.index()]
    }

    /// All seven fields in canonical order
    pub fn fields(&self) -> &[String; 7] {
        &self.fields
    }

    pub fn seconds(&self) -> &str {
        self.field(FieldKind::Seconds)
    }

    pub fn minutes(&self) -> &str {
        self.field(FieldKind::Minutes)
    }

    pub fn hours(&self) -> &str {
        self.field(FieldKind::Hours)
    }

    pub fn day_of_month(&self) -> &str {
        self.field(FieldKind::DayOfMonth)
    }

    pub fn month(&self) -> &str {
        self.field(FieldKind::Month)
    }

    pub fn day_of_week(&self) -> &str {
        self.field(FieldKind::DayOfWeek)
    }

    pub fn year(&self) -> &str {
        self.field(FieldKind::Year)
    }
}

/// Per-call options for describing an expression
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DescriptionOptions {
    /// Return an error instead of the locale's error sentence on bad input
    pub throw_on_parse_error: bool,

    /// Keep phrases such as "every minute" that are implied by other parts
    pub verbose: bool,

    /// Day-of-week numbering starts at 0 (Sunday); otherwise 1 is Sunday
    pub day_of_week_start_index_zero: bool,

    /// Month numbering starts at 0 (January); otherwise 1 is January
    pub month_start_index_zero: bool,

    /// Force 24-hour (`true`) or 12-hour (`false`) clock; `None` uses the
    /// locale default
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_24_hour_time_format: Option<bool>,

    /// Locale identifier (e.g. "en", "pt_BR"); `None` uses the catalog default
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
}

impl Default for DescriptionOptions {
    fn default() -> Self {
        Self {
            throw_on_parse_error: true,
            verbose: false,
            day_of_week_start_index_zero: true,
            month_start_index_zero: false,
            use_24_hour_time_format: None,
            locale: None,
        }
    }
}

impl DescriptionOptions {
    /// Set the output locale
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    /// Enable or disable verbose output
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Force the 24-hour (or 12-hour) clock
    pub fn with_24_hour_time_format(mut self, use_24_hour: bool) -> Self {
        self.use_24_hour_time_format = Some(use_24_hour);
        self
    }

    /// Return errors (`true`) or the locale's error sentence (`false`)
    pub fn with_throw_on_parse_error(mut self, throw: bool) -> Self {
        self.throw_on_parse_error = throw;
        self
    }

    /// Choose whether day-of-week numbering starts at 0
    pub fn with_day_of_week_start_index_zero(mut self, zero: bool) -> Self {
        self.day_of_week_start_index_zero = zero;
        self
    }

    /// Choose whether month numbering starts at 0
    pub fn with_month_start_index_zero(mut self, zero: bool) -> Self {
        self.month_start_index_zero = zero;
        self
    }
}

/// Catalog configuration supplied by the embedding application
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogConfig {
    /// Locale used when a call does not name one
    #[serde(default = "default_locale")]
    pub default_locale: String,

    /// Restrict the catalog to these bundled locales (all when absent)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locales: Option<Vec<String>>,
}

fn default_locale() -> String {
    "en".to_string()
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            default_locale: default_locale(),
            locales: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_kind_order() {
        for (i, kind) in FieldKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
        }
    }

    #[test]
    fn test_field_kind_display() {
        assert_eq!(FieldKind::DayOfMonth.to_string(), "day-of-month");
        assert_eq!(FieldKind::DayOfWeek.to_string(), "day-of-week");
        assert_eq!(FieldKind::Seconds.to_string(), "seconds");
    }

    #[test]
    fn test_options_default() {
        let opts = DescriptionOptions::default();
        assert!(opts.throw_on_parse_error);
        assert!(!opts.verbose);
        assert!(opts.day_of_week_start_index_zero);
        assert!(!opts.month_start_index_zero);
        assert_eq!(opts.use_24_hour_time_format, None);
        assert_eq!(opts.locale, None);
    }

    #[test]
    fn test_options_builder() {
        let opts = DescriptionOptions::default()
            .with_locale("fr")
            .with_verbose(true)
            .with_24_hour_time_format(true)
            .with_throw_on_parse_error(false);

        assert_eq!(opts.locale.as_deref(), Some("fr"));
        assert!(opts.verbose);
        assert_eq!(opts.use_24_hour_time_format, Some(true));
        assert!(!opts.throw_on_parse_error);
    }

    #[test]
    fn test_options_from_partial_json() {
        let opts: DescriptionOptions =
            serde_json::from_str(r#"{"verbose": true, "locale": "de"}"#).unwrap();
        assert!(opts.verbose);
        assert!(opts.throw_on_parse_error);
        assert_eq!(opts.locale.as_deref(), Some("de"));
    }

    #[test]
    fn test_options_serialization_is_camel_case() {
        let json = serde_json::to_string(&DescriptionOptions::default()).unwrap();
        assert!(json.contains("\"throwOnParseError\":true"));
        assert!(json.contains("\"dayOfWeekStartIndexZero\":true"));
        assert!(!json.contains("locale"));
    }

    #[test]
    fn test_catalog_config_defaults() {
        let config: CatalogConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.default_locale, "en");
        assert!(config.locales.is_none());

        let config: CatalogConfig =
            serde_json::from_str(r#"{"defaultLocale": "ru", "locales": ["en", "ru"]}"#).unwrap();
        assert_eq!(config.default_locale, "ru");
        assert_eq!(config.locales.unwrap(), vec!["en", "ru"]);
    }
}
