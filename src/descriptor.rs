//! Expression descriptor
//!
//! Composes the full sentence: time of day, day of month, day of week,
//! month and year, in that order. Each part brings its own leading
//! punctuation. Non-verbose output then drops phrases implied by the rest
//! of the sentence, and the first character is capitalized.

use crate::error::Result;
use crate::locale::Locale;
use crate::normalize::contains_any;
use crate::parser::ExpressionParser;
use crate::range::leading_int;
use crate::segment::{FieldPhrases, SegmentDescriber};
use crate::template::Template;
use crate::types::{CanonicalExpression, DescriptionOptions, RangePosition};
use regex::Regex;
use std::sync::OnceLock;

const SPECIAL_CHARACTERS: [char; 4] = ['/', '-', ',', '*'];

fn nearest_weekday_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(\d{1,2}W)|(W\d{1,2})").unwrap())
}

fn days_before_last_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"L-(\d{1,2})").unwrap())
}

/// Formats clock times for one locale and hour convention
#[derive(Debug, Clone, Copy)]
pub struct TimeFormatter {
    use_24_hour: bool,
    period_before_time: bool,
    am: &'static str,
    pm: &'static str,
}

impl TimeFormatter {
    pub fn new(locale: &dyn Locale, use_24_hour: bool) -> Self {
        Self {
            use_24_hour,
            period_before_time: locale.set_period_before_time(),
            am: locale.am(),
            pm: locale.pm(),
        }
    }

    /// Format `hour:minute[:second]`
    ///
    /// Minutes of 60 or more roll into the next hour and hours of 24 or more
    /// into the next day. An empty `second` omits the seconds.
    pub fn format(&self, hour: &str, minute: &str, second: &str) -> String {
        let mut hour = leading_int(hour).unwrap_or(0);
        let mut minute = leading_int(minute).unwrap_or(0);
        if minute >= 60 {
            minute -= 60;
            hour = hour.saturating_add(1);
        } else if minute < 0 {
            minute += 60;
            hour = hour.saturating_sub(1);
        }
        if hour >= 24 {
            hour -= 24;
        } else if hour < 0 {
            hour += 24;
        }

        let mut period = "";
        if !self.use_24_hour {
            period = if hour >= 12 { self.pm } else { self.am };
            if hour > 12 {
                hour -= 12;
            }
            if hour == 0 {
                hour = 12;
            }
        }

        let seconds = if second.is_empty() {
            String::new()
        } else {
            format!(":{:0>2}", second)
        };
        let time = format!("{:02}:{:02}{}", hour, minute, seconds);

        match (period.is_empty(), self.period_before_time) {
            (true, _) => time,
            (false, true) => format!("{} {}", period, time),
            (false, false) => format!("{} {}", time, period),
        }
    }
}

/// Describes cron expressions in one locale
pub struct ExpressionDescriptor<'a> {
    locale: &'a dyn Locale,
    options: &'a DescriptionOptions,
    time: TimeFormatter,
}

impl<'a> ExpressionDescriptor<'a> {
    pub fn new(locale: &'a dyn Locale, options: &'a DescriptionOptions) -> Self {
        let use_24_hour = options
            .use_24_hour_time_format
            .unwrap_or_else(|| locale.use_24_hour_time_format_by_default());
        Self {
            locale,
            options,
            time: TimeFormatter::new(locale, use_24_hour),
        }
    }

    /// Parse and describe an expression
    ///
    /// With `throw_on_parse_error` off, parse errors become the locale's
    /// error sentence.
    pub fn describe(&self, expression: &str) -> Result<String> {
        let parsed = ExpressionParser::from_options(self.options).parse(expression);
        match parsed {
            Ok(canonical) => Ok(self.describe_canonical(&canonical)),
            Err(err) if !self.options.throw_on_parse_error => {
                tracing::debug!(
                    expression,
                    locale = self.locale.id(),
                    error = %err,
                    "Cron expression could not be described"
                );
                Ok(self.locale.error_occurred().to_string())
            }
            Err(err) => Err(err),
        }
    }

    /// Describe an already parsed expression
    pub fn describe_canonical(&self, expr: &CanonicalExpression) -> String {
        let mut description = self.time_of_day(expr);
        description.push_str(&self.day_of_month(expr));
        description.push_str(&self.day_of_week(expr));
        description.push_str(&self.month(expr));
        description.push_str(&self.year(expr));

        if !self.options.verbose {
            description = self.make_concise(description);
        }
        capitalize_first(&description)
    }

    fn segments(&self) -> SegmentDescriber<'a> {
        SegmentDescriber::new(self.locale)
    }

    fn time_of_day(&self, expr: &CanonicalExpression) -> String {
        let seconds = expr.seconds();
        let minutes = expr.minutes();
        let hours = expr.hours();

        if !contains_any(seconds, &SPECIAL_CHARACTERS)
            && !contains_any(minutes, &SPECIAL_CHARACTERS)
            && !contains_any(hours, &SPECIAL_CHARACTERS)
        {
            return format!(
                "{}{}",
                self.locale.at_space(),
                self.time.format(hours, minutes, seconds)
            );
        }

        if seconds.is_empty()
            && minutes.contains('-')
            && !minutes.contains(',')
            && !minutes.contains('/')
            && !contains_any(hours, &SPECIAL_CHARACTERS)
        {
            let mut bounds = minutes.split('-');
            let from = bounds.next().unwrap_or_default();
            let to = bounds.next().unwrap_or_default();
            return self.locale.every_minute_between().fill([
                &self.time.format(hours, from, ""),
                &self.time.format(hours, to, ""),
            ]);
        }

        if seconds.is_empty()
            && hours.contains(',')
            && !hours.contains('-')
            && !hours.contains('/')
            && !contains_any(minutes, &SPECIAL_CHARACTERS)
        {
            let hour_list: Vec<&str> = hours.split(',').collect();
            let mut description = self.locale.at().to_string();
            for (i, hour) in hour_list.iter().enumerate() {
                description.push(' ');
                description.push_str(&self.time.format(hour, minutes, ""));
                if i + 2 < hour_list.len() {
                    description.push(',');
                }
                if i + 2 == hour_list.len() {
                    description.push_str(self.locale.space_and());
                }
            }
            return description;
        }

        let segments = self.segments();
        let seconds_desc = segments.describe(
            seconds,
            &SecondsPhrases {
                locale: self.locale,
            },
        );
        let minutes_desc = segments.describe(
            minutes,
            &MinutesPhrases {
                locale: self.locale,
                seconds,
                hours,
            },
        );
        let hours_desc = segments.describe(
            hours,
            &HoursPhrases {
                locale: self.locale,
                time: &self.time,
                minutes,
            },
        );

        let mut description = seconds_desc;
        if !description.is_empty() && !minutes_desc.is_empty() {
            description.push_str(", ");
        }
        description.push_str(&minutes_desc);
        if minutes_desc == hours_desc {
            return description;
        }
        if !description.is_empty() && !hours_desc.is_empty() {
            description.push_str(", ");
        }
        description.push_str(&hours_desc);
        description
    }

    fn day_of_month(&self, expr: &CanonicalExpression) -> String {
        let field = expr.day_of_month();
        match field {
            "L" => return self.locale.comma_on_the_last_day_of_the_month().to_string(),
            "WL" | "LW" => {
                return self
                    .locale
                    .comma_on_the_last_weekday_of_the_month()
                    .to_string()
            }
            _ => {}
        }

        if let Some(m) = nearest_weekday_regex().find(field) {
            let day = leading_int(&m.as_str().replace('W', "")).unwrap_or(0);
            let day_text = if day == 1 {
                self.locale.first_weekday().to_string()
            } else {
                self.locale
                    .weekday_nearest_day()
                    .fill([&day.to_string()])
            };
            return self.locale.comma_on_the_of_the_month().fill([&day_text]);
        }

        if let Some(caps) = days_before_last_regex().captures(field) {
            let offset = &caps[1];
            return self
                .locale
                .comma_days_before_the_last_day_of_the_month(offset)
                .fill([offset]);
        }

        if field == "*" && expr.day_of_week() != "*" {
            return String::new();
        }

        self.segments().describe(
            field,
            &DayOfMonthPhrases {
                locale: self.locale,
            },
        )
    }

    fn day_of_week(&self, expr: &CanonicalExpression) -> String {
        let field = expr.day_of_week();
        if field == "*" {
            return String::new();
        }
        self.segments().describe(
            field,
            &DayOfWeekPhrases {
                locale: self.locale,
                day_of_month_constrained: expr.day_of_month() != "*",
            },
        )
    }

    fn month(&self, expr: &CanonicalExpression) -> String {
        self.segments().describe(
            expr.month(),
            &MonthPhrases {
                locale: self.locale,
            },
        )
    }

    fn year(&self, expr: &CanonicalExpression) -> String {
        self.segments().describe(
            expr.year(),
            &YearPhrases {
                locale: self.locale,
            },
        )
    }

    /// Drop phrases implied by the rest of the sentence
    fn make_concise(&self, description: String) -> String {
        let mut description = description
            .replace(&format!(", {}", self.locale.every_minute()), "")
            .replace(&format!(", {}", self.locale.every_hour()), "")
            .replace(self.locale.comma_every_day(), "");

        if let Some(stripped) = description
            .strip_suffix(", ")
            .or_else(|| description.strip_suffix(','))
        {
            description = stripped.to_string();
        }

        for (from, to) in self.locale.concise_replacements() {
            description = description.replace(from, to);
        }
        description
    }
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

struct SecondsPhrases<'a> {
    locale: &'a dyn Locale,
}

impl FieldPhrases for SecondsPhrases<'_> {
    fn every(&self) -> &str {
        self.locale.every_second()
    }

    fn item(&self, value: &str, _position: Option<RangePosition>) -> String {
        value.to_string()
    }

    fn increment(&self, step: &str) -> Template<1> {
        self.locale.every_n_seconds(step)
    }

    fn range(&self, _range: &str) -> Template<2> {
        self.locale.seconds_through_past_the_minute()
    }

    fn value(&self, expression: &str) -> Template<1> {
        if expression == "0" {
            return Template::EMPTY;
        }
        match leading_int(expression) {
            Some(n) if n < 20 => self.locale.at_seconds_past_the_minute(expression),
            _ => self
                .locale
                .at_seconds_past_the_minute_gt20()
                .unwrap_or_else(|| self.locale.at_seconds_past_the_minute(expression)),
        }
    }
}

struct MinutesPhrases<'a> {
    locale: &'a dyn Locale,
    seconds: &'a str,
    hours: &'a str,
}

impl FieldPhrases for MinutesPhrases<'_> {
    fn every(&self) -> &str {
        self.locale.every_minute()
    }

    fn item(&self, value: &str, _position: Option<RangePosition>) -> String {
        value.to_string()
    }

    fn increment(&self, step: &str) -> Template<1> {
        self.locale.every_n_minutes(step)
    }

    fn range(&self, _range: &str) -> Template<2> {
        self.locale.minutes_through_past_the_hour()
    }

    fn value(&self, expression: &str) -> Template<1> {
        if expression == "0" && !self.hours.contains('/') && self.seconds.is_empty() {
            return Template::fixed(self.locale.every_hour());
        }
        match leading_int(expression) {
            Some(n) if n < 20 => self.locale.at_minutes_past_the_hour(expression),
            _ => self
                .locale
                .at_minutes_past_the_hour_gt20()
                .unwrap_or_else(|| self.locale.at_minutes_past_the_hour(expression)),
        }
    }
}

struct HoursPhrases<'a> {
    locale: &'a dyn Locale,
    time: &'a TimeFormatter,
    minutes: &'a str,
}

impl FieldPhrases for HoursPhrases<'_> {
    fn every(&self) -> &str {
        self.locale.every_hour()
    }

    /// The end of an hour range is shown at :59 unless the schedule only
    /// fires on the hour
    fn item(&self, value: &str, position: Option<RangePosition>) -> String {
        if position == Some(RangePosition::End) && self.minutes != "0" {
            self.time.format(value, "59", "")
        } else {
            self.time.format(value, "0", "")
        }
    }

    fn increment(&self, step: &str) -> Template<1> {
        self.locale.every_n_hours(step)
    }

    fn range(&self, _range: &str) -> Template<2> {
        self.locale.between()
    }

    fn value(&self, _expression: &str) -> Template<1> {
        self.locale.at_time()
    }
}

struct DayOfMonthPhrases<'a> {
    locale: &'a dyn Locale,
}

impl FieldPhrases for DayOfMonthPhrases<'_> {
    fn every(&self) -> &str {
        self.locale.comma_every_day()
    }

    fn item(&self, value: &str, _position: Option<RangePosition>) -> String {
        if value == "L" {
            return self.locale.last_day().to_string();
        }
        match self.locale.day_number() {
            Some(template) => template.fill([value]),
            None => value.to_string(),
        }
    }

    fn increment(&self, step: &str) -> Template<1> {
        if step == "1" {
            Template::fixed(self.locale.comma_every_day())
        } else {
            self.locale.comma_every_n_days(step)
        }
    }

    fn range(&self, range: &str) -> Template<2> {
        self.locale.comma_between_days_of_the_month(range)
    }

    fn value(&self, expression: &str) -> Template<1> {
        self.locale.comma_on_day_of_the_month(expression)
    }
}

struct DayOfWeekPhrases<'a> {
    locale: &'a dyn Locale,
    day_of_month_constrained: bool,
}

impl FieldPhrases for DayOfWeekPhrases<'_> {
    fn every(&self) -> &str {
        self.locale.comma_every_day()
    }

    fn item(&self, value: &str, position: Option<RangePosition>) -> String {
        let (day, nth) = match value.split_once('#') {
            Some((day, nth)) => (day.to_string(), Some(nth)),
            None => (value.replacen('L', "", 1), None),
        };

        let names = self
            .locale
            .days_of_the_week_in_case(position)
            .unwrap_or_else(|| self.locale.days_of_the_week());
        let name = leading_int(&day)
            .and_then(|i| usize::try_from(i).ok())
            .and_then(|i| names.get(i).copied())
            .unwrap_or(day.as_str())
            .to_string();

        let ordinal = nth
            .and_then(leading_int)
            .filter(|n| (1..=5).contains(n))
            .map(|n| self.locale.ordinals(&day)[(n - 1) as usize]);
        match ordinal {
            Some(ordinal) => format!("{} {}", ordinal, name),
            None => name,
        }
    }

    fn increment(&self, step: &str) -> Template<1> {
        if leading_int(step) == Some(1) {
            Template::EMPTY
        } else {
            self.locale.comma_every_n_days_of_the_week(step)
        }
    }

    fn range(&self, range: &str) -> Template<2> {
        let start = range.split('-').next().unwrap_or_default();
        if self.day_of_month_constrained {
            self.locale.comma_and_through(start)
        } else {
            self.locale.comma_through(start)
        }
    }

    fn value(&self, expression: &str) -> Template<1> {
        if let Some((day, nth)) = expression.split_once('#') {
            let lead = self.locale.comma_on_the(nth, day).trim();
            return self.locale.space_of_the_month().with_prefix(lead);
        }
        if expression.contains('L') {
            return self
                .locale
                .comma_on_the_last_of_the_month(&expression.replacen('L', "", 1));
        }
        if self.day_of_month_constrained {
            self.locale.comma_and_on()
        } else {
            self.locale.comma_only_on(expression)
        }
    }
}

struct MonthPhrases<'a> {
    locale: &'a dyn Locale,
}

impl FieldPhrases for MonthPhrases<'_> {
    fn every(&self) -> &str {
        ""
    }

    fn item(&self, value: &str, position: Option<RangePosition>) -> String {
        let names = position
            .and_then(|p| self.locale.months_of_the_year_in_case(p))
            .unwrap_or_else(|| self.locale.months_of_the_year());
        leading_int(value)
            .and_then(|n| n.checked_sub(1))
            .and_then(|n| usize::try_from(n).ok())
            .and_then(|i| names.get(i).copied())
            .unwrap_or(value)
            .to_string()
    }

    fn increment(&self, step: &str) -> Template<1> {
        if leading_int(step) == Some(1) {
            Template::EMPTY
        } else {
            self.locale.comma_every_n_months(step)
        }
    }

    // Weekday-driven prepositions do not apply to month ranges, so the
    // generic phrase gets no start value.
    fn range(&self, _range: &str) -> Template<2> {
        self.locale
            .comma_month_through()
            .unwrap_or_else(|| self.locale.comma_through(""))
    }

    fn value(&self, _expression: &str) -> Template<1> {
        self.locale
            .comma_only_in_month()
            .unwrap_or_else(|| self.locale.comma_only_in())
    }
}

struct YearPhrases<'a> {
    locale: &'a dyn Locale,
}

impl FieldPhrases for YearPhrases<'_> {
    fn every(&self) -> &str {
        ""
    }

    /// Two-digit years are read as 19xx
    fn item(&self, value: &str, _position: Option<RangePosition>) -> String {
        if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
            return value.to_string();
        }
        match value.parse::<u64>() {
            Ok(year) if year < 100 => (year + 1900).to_string(),
            Ok(year) => year.to_string(),
            Err(_) => value.to_string(),
        }
    }

    fn increment(&self, step: &str) -> Template<1> {
        self.locale.comma_every_n_years(step)
    }

    fn range(&self, _range: &str) -> Template<2> {
        self.locale
            .comma_year_through()
            .unwrap_or_else(|| self.locale.comma_through(""))
    }

    fn value(&self, _expression: &str) -> Template<1> {
        self.locale
            .comma_only_in_year()
            .unwrap_or_else(|| self.locale.comma_only_in())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::{English, Russian};
    use pretty_assertions::assert_eq;

    fn describe_with(expression: &str, options: &DescriptionOptions) -> String {
        ExpressionDescriptor::new(&English, options)
            .describe(expression)
            .unwrap()
    }

    fn describe(expression: &str) -> String {
        describe_with(expression, &DescriptionOptions::default())
    }

    #[test]
    fn test_time_formatter_12_hour() {
        let time = TimeFormatter::new(&English, false);
        assert_eq!(time.format("0", "0", ""), "12:00 AM");
        assert_eq!(time.format("12", "5", ""), "12:05 PM");
        assert_eq!(time.format("15", "30", "7"), "03:30:07 PM");
        assert_eq!(time.format("23", "60", ""), "12:00 AM");
    }

    #[test]
    fn test_time_formatter_24_hour() {
        let time = TimeFormatter::new(&English, true);
        assert_eq!(time.format("3", "30", ""), "03:30");
        assert_eq!(time.format("17", "59", "30"), "17:59:30");
    }

    #[test]
    fn test_time_formatter_period_before_time() {
        let time = TimeFormatter::new(&crate::locale::Korean, false);
        assert_eq!(time.format("14", "0", ""), "오후 02:00");
    }

    #[test]
    fn test_yearly() {
        assert_eq!(
            describe("0 0 1 1 *"),
            "At 12:00 AM, on day 1 of the month, only in January"
        );
    }

    #[test]
    fn test_every_five_minutes() {
        assert_eq!(describe("*/5 * * * *"), "Every 5 minutes");
    }

    #[test]
    fn test_fixed_time() {
        assert_eq!(describe("30 3 * * *"), "At 03:30 AM");
        let opts = DescriptionOptions::default().with_24_hour_time_format(true);
        assert_eq!(describe_with("30 3 * * *", &opts), "At 03:30");
    }

    #[test]
    fn test_fixed_time_with_seconds() {
        assert_eq!(describe("15 30 3 * * *"), "At 03:30:15 AM");
    }

    #[test]
    fn test_every_minute() {
        assert_eq!(describe("* * * * *"), "Every minute");
    }

    #[test]
    fn test_every_second() {
        assert_eq!(describe("* * * * * *"), "Every second");
    }

    #[test]
    fn test_nth_weekday() {
        assert_eq!(
            describe("0 0 * * 1#1"),
            "At 12:00 AM, on the first Monday of the month"
        );
    }

    #[test]
    fn test_last_weekday_of_month() {
        assert_eq!(
            describe("0 0 * * 5L"),
            "At 12:00 AM, on the last Friday of the month"
        );
    }

    #[test]
    fn test_hour_range_end_at_59() {
        assert_eq!(
            describe("* 5 * * *"),
            "Every minute, between 05:00 AM and 05:59 AM"
        );
        assert_eq!(
            describe("*/10 9-17 * * *"),
            "Every 10 minutes, between 09:00 AM and 05:59 PM"
        );
        assert_eq!(
            describe("0 9-17 * * *"),
            "Every hour, between 09:00 AM and 05:00 PM"
        );
    }

    #[test]
    fn test_every_minute_between() {
        assert_eq!(
            describe("0-10 11 * * *"),
            "Every minute between 11:00 AM and 11:10 AM"
        );
    }

    #[test]
    fn test_hour_list() {
        assert_eq!(
            describe("30 6,12,18 * * *"),
            "At 06:30 AM, 12:30 PM and 06:30 PM"
        );
    }

    #[test]
    fn test_weekday_range() {
        assert_eq!(
            describe("0 9 * * 1-5"),
            "At 09:00 AM, Monday through Friday"
        );
    }

    #[test]
    fn test_day_of_month_with_weekdays() {
        assert_eq!(
            describe("0 12 1 * 1"),
            "At 12:00 PM, on day 1 of the month, and on Monday"
        );
    }

    #[test]
    fn test_day_of_month_shorthand() {
        assert_eq!(
            describe("0 0 L * *"),
            "At 12:00 AM, on the last day of the month"
        );
        assert_eq!(
            describe("0 0 LW * *"),
            "At 12:00 AM, on the last weekday of the month"
        );
        assert_eq!(
            describe("0 0 15W * *"),
            "At 12:00 AM, on the weekday nearest day 15 of the month"
        );
        assert_eq!(
            describe("0 0 1W * *"),
            "At 12:00 AM, on the first weekday of the month"
        );
        assert_eq!(
            describe("0 0 L-3 * *"),
            "At 12:00 AM, 3 days before the last day of the month"
        );
    }

    #[test]
    fn test_month_range_and_year() {
        assert_eq!(
            describe("0 0 1 JAN-MAR * 2030"),
            "At 12:00 AM, on day 1 of the month, January through March, only in 2030"
        );
    }

    #[test]
    fn test_step_with_start() {
        assert_eq!(
            describe("5/15 * * * *"),
            "Every 15 minutes, starting at 5 minutes past the hour"
        );
    }

    #[test]
    fn test_minute_list() {
        assert_eq!(
            describe("0,15,30,45 * * * *"),
            "At 0, 15, 30, and 45 minutes past the hour"
        );
    }

    #[test]
    fn test_verbose_keeps_implied_phrases() {
        let opts = DescriptionOptions::default().with_verbose(true);
        assert_eq!(
            describe_with("*/5 * * * *", &opts),
            "Every 5 minutes, every hour, every day"
        );
        assert_eq!(
            describe_with("30 * 5 * * *", &opts),
            "At 30 seconds past the minute, every minute, between 05:00 AM and 05:59 AM, every day"
        );
        assert_eq!(
            describe("30 * 5 * * *"),
            "At 30 seconds past the minute, between 05:00 AM and 05:59 AM"
        );
    }

    #[test]
    fn test_errors_become_sentence_when_not_throwing() {
        let opts = DescriptionOptions::default().with_throw_on_parse_error(false);
        assert_eq!(describe_with("* * *", &opts), English.error_occurred());

        let opts = DescriptionOptions::default();
        assert!(ExpressionDescriptor::new(&English, &opts)
            .describe("* * *")
            .is_err());
    }

    #[test]
    fn test_russian_weekday_range_cases() {
        let opts = DescriptionOptions::default();
        let description = ExpressionDescriptor::new(&Russian, &opts)
            .describe("0 9 * * 1-5")
            .unwrap();
        assert_eq!(description, "В 09:00, с понедельника по пятницу");
    }

    #[test]
    fn test_capitalize_first() {
        assert_eq!(capitalize_first("every minute"), "Every minute");
        assert_eq!(capitalize_first("àb"), "Àb");
        assert_eq!(capitalize_first(""), "");
    }
}
