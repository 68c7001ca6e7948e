//! Description integration tests
//!
//! End-to-end tests through the public API: parsing, normalization,
//! validation, composition and locale resolution.

use a3s_cron_describe::{
    describe, CatalogConfig, DescriptionError, DescriptionOptions, ExpressionParser, FieldKind,
    LocaleCatalog,
};
use pretty_assertions::assert_eq;

fn en(expression: &str) -> String {
    describe(expression, &DescriptionOptions::default()).unwrap()
}

fn in_locale(expression: &str, locale: &str) -> String {
    describe(expression, &DescriptionOptions::default().with_locale(locale)).unwrap()
}

// ─── Time of Day ─────────────────────────────────────────────────

#[test]
fn test_every_minute_and_second() {
    assert_eq!(en("* * * * *"), "Every minute");
    assert_eq!(en("* * * * * *"), "Every second");
    assert_eq!(en("*/1 * * * *"), "Every minute");
}

#[test]
fn test_fixed_times() {
    assert_eq!(en("30 11 * * *"), "At 11:30 AM");
    assert_eq!(en("0 23 * * *"), "At 11:00 PM");
    assert_eq!(en("0 0 * * *"), "At 12:00 AM");
    assert_eq!(en("10 30 14 * * *"), "At 02:30:10 PM");
}

#[test]
fn test_every_n_minutes_and_hours() {
    assert_eq!(en("*/5 * * * *"), "Every 5 minutes");
    assert_eq!(en("0/5 * * * *"), "Every 5 minutes");
    assert_eq!(
        en("0 */2 * * *"),
        "At 0 minutes past the hour, every 2 hours"
    );
}

#[test]
fn test_every_n_seconds() {
    assert_eq!(en("*/10 * * * * *"), "Every 10 seconds");
}

#[test]
fn test_minute_range_within_hour() {
    assert_eq!(
        en("0-10 11 * * *"),
        "Every minute between 11:00 AM and 11:10 AM"
    );
}

#[test]
fn test_single_hour_becomes_range() {
    assert_eq!(
        en("* 14 * * *"),
        "Every minute, between 02:00 PM and 02:59 PM"
    );
}

#[test]
fn test_hour_list() {
    assert_eq!(en("0 8,12 * * *"), "At 08:00 AM and 12:00 PM");
}

// ─── Days, Months, Years ─────────────────────────────────────────

#[test]
fn test_aliases() {
    assert_eq!(en("@yearly"), en("0 0 1 1 *"));
    assert_eq!(en("@annually"), en("@yearly"));
    assert_eq!(en("@daily"), "At 12:00 AM");
    assert_eq!(en("@midnight"), "At 12:00 AM");
    assert_eq!(en("@hourly"), "Every hour");
    assert_eq!(en("@weekly"), "At 12:00 AM, only on Sunday");
    assert_eq!(en("@monthly"), "At 12:00 AM, on day 1 of the month");
}

#[test]
fn test_day_names_and_numbers_agree() {
    assert_eq!(en("0 9 * * MON-FRI"), en("0 9 * * 1-5"));
    assert_eq!(en("0 9 * * sun"), en("0 9 * * 0"));
    assert_eq!(en("0 9 * * 7"), en("0 9 * * 0"));
}

#[test]
fn test_question_mark_is_wildcard() {
    assert_eq!(en("0 9 ? * 1"), "At 09:00 AM, only on Monday");
}

#[test]
fn test_weekday_list() {
    assert_eq!(
        en("0 9 * * 1,3,5"),
        "At 09:00 AM, only on Monday, Wednesday, and Friday"
    );
}

#[test]
fn test_nth_and_last_weekday() {
    assert_eq!(
        en("0 0 * * 3#2"),
        "At 12:00 AM, on the second Wednesday of the month"
    );
    assert_eq!(
        en("0 0 * * 6L"),
        "At 12:00 AM, on the last Saturday of the month"
    );
}

#[test]
fn test_days_of_month() {
    assert_eq!(
        en("0 0 1-15 * *"),
        "At 12:00 AM, between day 1 and 15 of the month"
    );
    assert_eq!(en("0 0 */3 * *"), "At 12:00 AM, every 3 days");
    assert_eq!(en("0 0 L * *"), "At 12:00 AM, on the last day of the month");
}

#[test]
fn test_months() {
    assert_eq!(en("0 0 1 6 *"), "At 12:00 AM, on day 1 of the month, only in June");
    assert_eq!(
        en("0 0 1 1,7 *"),
        "At 12:00 AM, on day 1 of the month, only in January and July"
    );
}

#[test]
fn test_years() {
    assert_eq!(
        en("0 0 0 1 1 * 2030"),
        "At 12:00 AM, on day 1 of the month, only in January, only in 2030"
    );
    assert_eq!(
        en("0 0 0 1 1 * 2030-2035"),
        "At 12:00 AM, on day 1 of the month, only in January, 2030 through 2035"
    );
}

#[test]
fn test_list_order_is_normalized() {
    assert_eq!(en("5,1,3 * * * *"), en("1,3,5 * * * *"));
    assert_eq!(en("1,1,3 * * * *"), en("1,3 * * * *"));
}

// ─── Options ─────────────────────────────────────────────────────

#[test]
fn test_24_hour_override() {
    let opts = DescriptionOptions::default().with_24_hour_time_format(true);
    assert_eq!(describe("0 15 * * *", &opts).unwrap(), "At 15:00");

    let opts = DescriptionOptions::default()
        .with_locale("de")
        .with_24_hour_time_format(false);
    assert_eq!(describe("0 15 * * *", &opts).unwrap(), "Um 03:00 PM");
}

#[test]
fn test_one_based_day_of_week() {
    let opts = DescriptionOptions::default().with_day_of_week_start_index_zero(false);
    assert_eq!(describe("0 9 * * 2", &opts).unwrap(), "At 09:00 AM, only on Monday");
    assert!(matches!(
        describe("0 9 * * 0", &opts),
        Err(DescriptionError::Range { field: FieldKind::DayOfWeek, .. })
    ));
}

#[test]
fn test_zero_based_month() {
    let opts = DescriptionOptions::default().with_month_start_index_zero(true);
    assert_eq!(
        describe("0 0 1 0 *", &opts).unwrap(),
        "At 12:00 AM, on day 1 of the month, only in January"
    );
}

#[test]
fn test_verbose() {
    let opts = DescriptionOptions::default().with_verbose(true);
    assert_eq!(
        describe("* * * * *", &opts).unwrap(),
        "Every minute, every hour, every day"
    );
}

// ─── Errors ──────────────────────────────────────────────────────

#[test]
fn test_parse_errors() {
    let opts = DescriptionOptions::default();
    assert_eq!(describe("", &opts), Err(DescriptionError::EmptyExpression));
    assert_eq!(
        describe("* * * *", &opts),
        Err(DescriptionError::TooFewFields { count: 4 })
    );
    assert_eq!(
        describe("* * * * * * * *", &opts),
        Err(DescriptionError::TooManyFields { count: 8 })
    );
    assert_eq!(
        describe("@often", &opts),
        Err(DescriptionError::UnknownAlias("@often".to_string()))
    );
    assert!(matches!(
        describe("0 0 1-5W * *", &opts),
        Err(DescriptionError::InvalidShorthandPlacement(_))
    ));
    assert!(matches!(
        describe("61 * * * *", &opts),
        Err(DescriptionError::Range { field: FieldKind::Minutes, value: 61, .. })
    ));
}

#[test]
fn test_oversized_literals_are_range_errors() {
    let opts = DescriptionOptions::default();
    assert!(matches!(
        describe("99999999999999999999 12 * * *", &opts),
        Err(DescriptionError::Range { field: FieldKind::Minutes, value: i64::MAX, .. })
    ));
    assert!(matches!(
        describe("0 12 99999999999999999999 * *", &opts),
        Err(DescriptionError::Range { field: FieldKind::DayOfMonth, .. })
    ));
    assert!(matches!(
        describe("0 12 * 99999999999999999999 *", &opts.clone().with_month_start_index_zero(true)),
        Err(DescriptionError::Range { field: FieldKind::Month, .. })
    ));
}

#[test]
fn test_extreme_steps_do_not_panic() {
    let catalog = LocaleCatalog::bundled();
    for locale in catalog.ids() {
        for throw in [true, false] {
            let opts = DescriptionOptions::default()
                .with_locale(locale)
                .with_throw_on_parse_error(throw);
            for expression in [
                "*/-9223372036854775808 * * * *",
                "*/9223372036854775807 * * * *",
                "0 0 */99999999999999999999 * *",
            ] {
                assert!(
                    catalog.describe(expression, &opts).is_ok(),
                    "{} / {}",
                    locale,
                    expression
                );
            }
        }
    }
}

#[test]
fn test_error_messages() {
    let err = describe("0 25 * * *", &DescriptionOptions::default()).unwrap_err();
    assert_eq!(err.to_string(), "hours part must be >= 0 and <= 23 (got 25)");

    let err = describe("* *", &DescriptionOptions::default()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Expression has only 2 parts. At least 5 parts are required."
    );
}

#[test]
fn test_error_sentence_when_not_throwing() {
    let opts = DescriptionOptions::default()
        .with_locale("de")
        .with_throw_on_parse_error(false);
    let text = describe("not a cron", &opts).unwrap();
    let catalog = LocaleCatalog::bundled();
    assert_eq!(text, catalog.get("de").unwrap().error_occurred());
}

#[test]
fn test_parser_is_usable_directly() {
    let expr = ExpressionParser::default().parse("*/15 9-17 * * MON-FRI").unwrap();
    assert_eq!(expr.seconds(), "");
    assert_eq!(expr.minutes(), "*/15");
    assert_eq!(expr.hours(), "9-17");
    assert_eq!(expr.day_of_week(), "1-5");
    assert_eq!(expr.year(), "");
}

// ─── Locales ─────────────────────────────────────────────────────

#[test]
fn test_german() {
    assert_eq!(in_locale("*/5 * * * *", "de"), "Alle 5 Minuten");
    assert_eq!(
        in_locale("0 0 1 1 *", "de"),
        "Um 00:00, an Tag 1 des Monats, nur im Januar"
    );
}

#[test]
fn test_simplified_chinese() {
    assert_eq!(
        in_locale("0 0 1 1 *", "zh_CN"),
        "在上午 12:00, 限每月 1 号, 仅于一月份"
    );
}

#[test]
fn test_russian() {
    assert_eq!(in_locale("*/3 * * * *", "ru"), "Каждые 3 минуты");
    assert_eq!(
        in_locale("0 9 * * 1-5", "ru"),
        "В 09:00, с понедельника по пятницу"
    );
}

#[test]
fn test_unknown_locale_falls_back_to_english() {
    assert_eq!(in_locale("*/5 * * * *", "xx"), "Every 5 minutes");
}

#[test]
fn test_every_locale_describes_common_expressions() {
    let catalog = LocaleCatalog::bundled();
    assert_eq!(catalog.len(), 37);
    let expressions = [
        "* * * * *",
        "* * * * * *",
        "*/5 * * * *",
        "*/1 * * * *",
        "0 9 * * 1-5",
        "0 23 ? * MON-FRI",
        "30 22 * * 0",
        "0 0 1 1 *",
        "0 0 2,3 * *",
        "0 0 1-5 * *",
        "0 0 L * *",
        "0 0 LW * *",
        "0 0 L-3 * *",
        "0 0 1W * *",
        "0 0 15W * *",
        "0 0 * * 5#3",
        "0 0 * * 0#2",
        "0 0 * * 2L",
        "0 0 * * 6L",
        "15,45 * * * * *",
        "25 30 * * * *",
        "5-25 * * * * *",
        "45 * * * *",
        "0 8,12,17 * * *",
        "0-10 11 * * *",
        "0 */2 * * *",
        "10-30/5 8-18 1,15 1-6 * 2030",
        "5/15 * * JAN,MAR *",
        "0 0 1 */2 *",
        "0 0 1 3-9 *",
        "0 0 0 1 1 * 2030-2035",
        "0 0 0 1 1 * */4",
        "@weekly",
    ];
    for locale in catalog.ids() {
        for verbose in [false, true] {
            let opts = DescriptionOptions::default()
                .with_locale(locale)
                .with_verbose(verbose);
            for expression in expressions {
                let text = catalog.describe(expression, &opts).unwrap();
                assert!(!text.is_empty(), "{} / {}", locale, expression);
                assert!(!text.contains("%s"), "{} / {}: {}", locale, expression, text);
            }
        }
    }
}

#[test]
fn test_bulgarian() {
    assert_eq!(
        in_locale("0 0 1 * *", "bg"),
        "В 00:00, на 1-во число от месеца"
    );
    assert_eq!(
        in_locale("0 0 1-22 * *", "bg"),
        "В 00:00, от 1-во до 22-ро число на месеца"
    );
}

#[test]
fn test_european_portuguese_ordinals() {
    let sunday = in_locale("0 0 * * 0#2", "pt_PT");
    let monday = in_locale("0 0 * * 1#2", "pt_PT");
    assert!(sunday.contains("segundo domingo"), "{}", sunday);
    assert!(monday.contains("segunda segunda-feira"), "{}", monday);
}

#[test]
fn test_configured_catalog() {
    let config = CatalogConfig {
        default_locale: "es".to_string(),
        locales: Some(vec!["es".to_string(), "en".to_string()]),
    };
    let catalog = LocaleCatalog::from_config(&config).unwrap();
    let spanish = catalog
        .describe("*/5 * * * *", &DescriptionOptions::default())
        .unwrap();
    let english = catalog
        .describe("*/5 * * * *", &DescriptionOptions::default().with_locale("en"))
        .unwrap();
    assert_eq!(english, "Every 5 minutes");
    assert_ne!(spanish, english);
}
