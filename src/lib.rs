//! # a3s-cron-describe
//!
//! Localized, human-readable descriptions of cron expressions.
//!
//! ## Overview
//!
//! `a3s-cron-describe` turns 5-, 6- and 7-field cron expressions into
//! sentences such as "At 12:00 AM, on day 1 of the month, only in January".
//! Expressions are parsed into a canonical seven-field form, validated, and
//! rendered with one of 37 bundled locales.
//!
//! ## Quick Start
//!
//! ```rust
//! use a3s_cron_describe::{describe, DescriptionOptions};
//!
//! # fn example() -> a3s_cron_describe::Result<()> {
//! let text = describe("*/5 * * * *", &DescriptionOptions::default())?;
//! assert_eq!(text, "Every 5 minutes");
//!
//! let german = describe("0 9 * * 1-5", &DescriptionOptions::default().with_locale("de"))?;
//! println!("{}", german);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Architecture
//!
//! - **ExpressionParser**: tokenizes, normalizes and validates an expression
//! - **ExpressionDescriptor**: composes the sentence for one locale
//! - **Locale** trait: every phrase a language supplies
//! - **LocaleCatalog**: registered locales with fallback resolution

pub mod catalog;
pub mod cli;
pub mod descriptor;
pub mod error;
pub mod locale;
pub mod normalize;
pub mod parser;
pub mod range;
pub mod segment;
pub mod template;
pub mod types;

// Re-export core types
pub use catalog::{init, shared, LocaleCatalog};
pub use descriptor::{ExpressionDescriptor, TimeFormatter};
pub use error::{DescriptionError, Result};
pub use locale::Locale;
pub use parser::{Arity, ExpressionParser};
pub use template::Template;
pub use types::{CanonicalExpression, CatalogConfig, DescriptionOptions, FieldKind, RangePosition};

/// Describe an expression with the process-wide catalog (see [`init`])
pub fn describe(expression: &str, options: &DescriptionOptions) -> Result<String> {
    shared().describe(expression, options)
}
