use super::Locale;
use crate::template::Template;

/// English (default locale)
#[derive(Debug, Clone, Copy, Default)]
pub struct English;

impl Locale for English {
    fn id(&self) -> &'static str {
        "en"
    }

    fn use_24_hour_time_format_by_default(&self) -> bool {
        false
    }

    fn error_occurred(&self) -> &'static str {
        "An error occurred when generating the expression description. Check the cron expression syntax."
    }

    fn at_space(&self) -> &'static str {
        "At "
    }

    fn at(&self) -> &'static str {
        "At"
    }

    fn space_and(&self) -> &'static str {
        " and"
    }

    fn every_second(&self) -> &'static str {
        "every second"
    }

    fn every_minute(&self) -> &'static str {
        "every minute"
    }

    fn every_hour(&self) -> &'static str {
        "every hour"
    }

    fn every_minute_between(&self) -> Template<2> {
        const { Template::new("Every minute between %s and %s") }
    }

    fn every_n_seconds(&self, _n: &str) -> Template<1> {
        const { Template::new("every %s seconds") }
    }

    fn seconds_through_past_the_minute(&self) -> Template<2> {
        const { Template::new("seconds %s through %s past the minute") }
    }

    fn at_seconds_past_the_minute(&self, _n: &str) -> Template<1> {
        const { Template::new("at %s seconds past the minute") }
    }

    fn every_n_minutes(&self, _n: &str) -> Template<1> {
        const { Template::new("every %s minutes") }
    }

    fn minutes_through_past_the_hour(&self) -> Template<2> {
        const { Template::new("minutes %s through %s past the hour") }
    }

    fn at_minutes_past_the_hour(&self, _n: &str) -> Template<1> {
        const { Template::new("at %s minutes past the hour") }
    }

    fn every_n_hours(&self, _n: &str) -> Template<1> {
        const { Template::new("every %s hours") }
    }

    fn between(&self) -> Template<2> {
        const { Template::new("between %s and %s") }
    }

    fn at_time(&self) -> Template<1> {
        const { Template::new("at %s") }
    }

    fn comma_every_day(&self) -> &'static str {
        ", every day"
    }

    fn comma_every_n_days_of_the_week(&self, _n: &str) -> Template<1> {
        const { Template::new(", every %s days of the week") }
    }

    fn comma_through(&self, _start: &str) -> Template<2> {
        const { Template::new(", %s through %s") }
    }

    fn comma_and_through(&self, _start: &str) -> Template<2> {
        const { Template::new(", %s through %s") }
    }

    fn ordinals(&self, _day_of_week: &str) -> [&'static str; 5] {
        ["first", "second", "third", "fourth", "fifth"]
    }

    fn comma_on_the(&self, _nth: &str, _day_of_week: &str) -> &'static str {
        ", on the "
    }

    fn space_of_the_month(&self) -> Template<1> {
        const { Template::new(" %s of the month") }
    }

    fn last_day(&self) -> &'static str {
        "the last day"
    }

    fn comma_on_the_last_of_the_month(&self, _day_of_week: &str) -> Template<1> {
        const { Template::new(", on the last %s of the month") }
    }

    fn comma_only_on(&self, _day_of_week: &str) -> Template<1> {
        const { Template::new(", only on %s") }
    }

    fn comma_and_on(&self) -> Template<1> {
        const { Template::new(", and on %s") }
    }

    fn comma_every_n_months(&self, _n: &str) -> Template<1> {
        const { Template::new(", every %s months") }
    }

    fn comma_only_in(&self) -> Template<1> {
        const { Template::new(", only in %s") }
    }

    fn comma_on_the_last_day_of_the_month(&self) -> &'static str {
        ", on the last day of the month"
    }

    fn comma_on_the_last_weekday_of_the_month(&self) -> &'static str {
        ", on the last weekday of the month"
    }

    fn comma_days_before_the_last_day_of_the_month(&self, _n: &str) -> Template<1> {
        const { Template::new(", %s days before the last day of the month") }
    }

    fn first_weekday(&self) -> &'static str {
        "first weekday"
    }

    fn weekday_nearest_day(&self) -> Template<1> {
        const { Template::new("weekday nearest day %s") }
    }

    fn comma_on_the_of_the_month(&self) -> Template<1> {
        const { Template::new(", on the %s of the month") }
    }

    fn comma_every_n_days(&self, _n: &str) -> Template<1> {
        const { Template::new(", every %s days") }
    }

    fn comma_between_days_of_the_month(&self, _range: &str) -> Template<2> {
        const { Template::new(", between day %s and %s of the month") }
    }

    fn comma_on_day_of_the_month(&self, _day: &str) -> Template<1> {
        const { Template::new(", on day %s of the month") }
    }

    fn comma_every_n_years(&self, _n: &str) -> Template<1> {
        const { Template::new(", every %s years") }
    }

    fn comma_starting(&self) -> Template<1> {
        const { Template::new(", starting %s") }
    }

    fn days_of_the_week(&self) -> [&'static str; 7] {
        [
            "Sunday",
            "Monday",
            "Tuesday",
            "Wednesday",
            "Thursday",
            "Friday",
            "Saturday",
        ]
    }

    fn months_of_the_year(&self) -> [&'static str; 12] {
        [
            "January",
            "February",
            "March",
            "April",
            "May",
            "June",
            "July",
            "August",
            "September",
            "October",
            "November",
            "December",
        ]
    }
}
