//! Command-line interface

use crate::catalog::LocaleCatalog;
use crate::error::Result;
use crate::types::{CatalogConfig, DescriptionOptions};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// A3S Cron Describe - Human-readable cron expressions
#[derive(Debug, Parser)]
#[command(name = "a3s-cron-describe", version, about)]
pub struct Cli {
    /// JSON catalog configuration (default locale, enabled locales)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Describe a cron expression
    Describe(DescribeArgs),

    /// List available locales
    Locales,
}

#[derive(Debug, Args)]
pub struct DescribeArgs {
    /// Cron expression, e.g. "*/5 * * * *" or "@daily"
    pub expression: String,

    /// Output locale (e.g. "en", "de", "pt_BR")
    #[arg(long, short)]
    pub locale: Option<String>,

    /// Keep phrases implied by other parts of the description
    #[arg(long)]
    pub verbose: bool,

    /// Use the 24-hour clock
    #[arg(long = "24h", conflicts_with = "twelve_hour")]
    pub twenty_four_hour: bool,

    /// Use the 12-hour clock
    #[arg(long = "12h")]
    pub twelve_hour: bool,

    /// Day-of-week numbering starts at 1 (Sunday)
    #[arg(long)]
    pub dow_one_based: bool,

    /// Month numbering starts at 0 (January)
    #[arg(long)]
    pub month_zero_based: bool,

    /// Print the locale's error sentence instead of failing
    #[arg(long)]
    pub no_throw: bool,

    /// Print a JSON object instead of plain text
    #[arg(long)]
    pub json: bool,
}

impl DescribeArgs {
    pub fn options(&self) -> DescriptionOptions {
        let mut options = DescriptionOptions::default()
            .with_verbose(self.verbose)
            .with_throw_on_parse_error(!self.no_throw)
            .with_day_of_week_start_index_zero(!self.dow_one_based)
            .with_month_start_index_zero(self.month_zero_based);
        if self.twenty_four_hour {
            options = options.with_24_hour_time_format(true);
        } else if self.twelve_hour {
            options = options.with_24_hour_time_format(false);
        }
        if let Some(locale) = &self.locale {
            options = options.with_locale(locale.clone());
        }
        options
    }
}

#[derive(Debug, Serialize)]
struct DescribeOutput<'a> {
    expression: &'a str,
    locale: &'a str,
    description: String,
}

/// Build the catalog from an optional configuration file
pub fn load_catalog(path: Option<&Path>) -> anyhow::Result<LocaleCatalog> {
    let Some(path) = path else {
        return Ok(LocaleCatalog::bundled());
    };
    let raw = std::fs::read_to_string(path)?;
    let config: CatalogConfig = serde_json::from_str(&raw)?;
    tracing::debug!(path = %path.display(), ?config, "Loaded catalog configuration");
    Ok(LocaleCatalog::from_config(&config)?)
}

/// Render the `describe` command output
pub fn describe(catalog: &LocaleCatalog, args: &DescribeArgs) -> Result<String> {
    let options = args.options();
    let description = catalog.describe(&args.expression, &options)?;
    if !args.json {
        return Ok(description);
    }

    let locale = catalog.resolve(options.locale.as_deref())?;
    let output = DescribeOutput {
        expression: &args.expression,
        locale: locale.id(),
        description,
    };
    Ok(serde_json::to_string_pretty(&output).unwrap_or_default())
}

/// Render the `locales` command output
pub fn locales(catalog: &LocaleCatalog) -> String {
    catalog
        .ids()
        .map(|id| {
            if id == catalog.default_locale() {
                format!("{} (default)", id)
            } else {
                id.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    fn describe_args(cli: Cli) -> DescribeArgs {
        match cli.command {
            Commands::Describe(args) => args,
            Commands::Locales => panic!("expected describe"),
        }
    }

    #[test]
    fn test_describe_defaults() {
        let args = describe_args(parse(&["a3s-cron-describe", "describe", "* * * * *"]));
        assert_eq!(args.options(), DescriptionOptions::default());
    }

    #[test]
    fn test_describe_flags_map_to_options() {
        let args = describe_args(parse(&[
            "a3s-cron-describe",
            "describe",
            "0 0 * * 1",
            "--locale",
            "ru",
            "--verbose",
            "--24h",
            "--dow-one-based",
            "--month-zero-based",
            "--no-throw",
        ]));
        let options = args.options();
        assert_eq!(options.locale.as_deref(), Some("ru"));
        assert!(options.verbose);
        assert_eq!(options.use_24_hour_time_format, Some(true));
        assert!(!options.day_of_week_start_index_zero);
        assert!(options.month_start_index_zero);
        assert!(!options.throw_on_parse_error);
    }

    #[test]
    fn test_clock_flags_conflict() {
        let result = Cli::try_parse_from(["a3s-cron-describe", "describe", "* * * * *", "--24h", "--12h"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_describe_json_output() {
        let catalog = LocaleCatalog::bundled();
        let args = describe_args(parse(&["a3s-cron-describe", "describe", "@hourly", "--json"]));
        let output = describe(&catalog, &args).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["expression"], "@hourly");
        assert_eq!(value["locale"], "en");
        assert_eq!(value["description"], "Every hour");
    }

    #[test]
    fn test_locales_marks_default() {
        let catalog = LocaleCatalog::bundled();
        let listing = locales(&catalog);
        assert_eq!(listing.lines().next(), Some("en (default)"));
        assert!(listing.lines().any(|l| l == "zh_CN"));
    }

    #[test]
    fn test_load_catalog_without_config() {
        let catalog = load_catalog(None).unwrap();
        assert_eq!(catalog.len(), 37);
    }
}
