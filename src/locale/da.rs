use super::Locale;
use crate::template::Template;

/// Danish
#[derive(Debug, Clone, Copy, Default)]
pub struct Danish;

impl Locale for Danish {
    fn id(&self) -> &'static str {
        "da"
    }

    fn use_24_hour_time_format_by_default(&self) -> bool {
        true
    }

    fn error_occurred(&self) -> &'static str {
        "Der opstod en fejl ved generering af udtryksbeskrivelsen. Tjek cron-ekspressionssyntaxen."
    }

    fn at_space(&self) -> &'static str {
        "kl "
    }

    fn at(&self) -> &'static str {
        "kl"
    }

    fn space_and(&self) -> &'static str {
        " og"
    }

    fn every_second(&self) -> &'static str {
        "hvert sekund"
    }

    fn every_minute(&self) -> &'static str {
        "hvert minut"
    }

    fn every_hour(&self) -> &'static str {
        "hver time"
    }

    fn every_minute_between(&self) -> Template<2> {
        const { Template::new("hvert minut mellem %s og %s") }
    }

    fn every_n_seconds(&self, _n: &str) -> Template<1> {
        const { Template::new("hvert %s. sekund") }
    }

    fn seconds_through_past_the_minute(&self) -> Template<2> {
        const { Template::new("sekunderne fra %s til og med %s hvert minut") }
    }

    fn at_seconds_past_the_minute(&self, _n: &str) -> Template<1> {
        const { Template::new("%s sekunder efter minutskift") }
    }

    fn every_n_minutes(&self, _n: &str) -> Template<1> {
        const { Template::new("hvert %s. minut") }
    }

    fn minutes_through_past_the_hour(&self) -> Template<2> {
        const { Template::new("minutterne fra %s til og med %s hver time") }
    }

    fn at_minutes_past_the_hour(&self, _n: &str) -> Template<1> {
        const { Template::new("%s minutter efter timeskift") }
    }

    fn every_n_hours(&self, _n: &str) -> Template<1> {
        const { Template::new("hver %s. time") }
    }

    fn between(&self) -> Template<2> {
        const { Template::new("mellem %s og %s") }
    }

    fn at_time(&self) -> Template<1> {
        const { Template::new("kl %s") }
    }

    fn comma_every_day(&self) -> &'static str {
        ", hver dag"
    }

    fn comma_every_n_days_of_the_week(&self, _n: &str) -> Template<1> {
        const { Template::new(", hver %s. ugedag") }
    }

    fn comma_through(&self, _start: &str) -> Template<2> {
        const { Template::new(", %s til og med %s") }
    }

    fn comma_and_through(&self, _start: &str) -> Template<2> {
        const { Template::new(", og %s til og med %s") }
    }

    fn ordinals(&self, _day_of_week: &str) -> [&'static str; 5] {
        ["første", "anden", "tredje", "fjerde", "femte"]
    }

    fn comma_on_the(&self, _nth: &str, _day_of_week: &str) -> &'static str {
        ", på den "
    }

    fn space_of_the_month(&self) -> Template<1> {
        const { Template::new(" %s i måneden") }
    }

    fn last_day(&self) -> &'static str {
        "sidste dag"
    }

    fn comma_on_the_last_of_the_month(&self, _day_of_week: &str) -> Template<1> {
        const { Template::new(", på den sidste %s i måneden") }
    }

    fn comma_only_on(&self, _day_of_week: &str) -> Template<1> {
        const { Template::new(", på enhver %s") }
    }

    fn comma_and_on(&self) -> Template<1> {
        const { Template::new(", og på %s") }
    }

    fn comma_every_n_months(&self, _n: &str) -> Template<1> {
        const { Template::new(", hver %s. måned") }
    }

    fn comma_only_in(&self) -> Template<1> {
        const { Template::new(", kun i %s") }
    }

    fn comma_on_the_last_day_of_the_month(&self) -> &'static str {
        ", på den sidste dag i måneden"
    }

    fn comma_on_the_last_weekday_of_the_month(&self) -> &'static str {
        ", på den sidste hverdag i måneden"
    }

    fn comma_days_before_the_last_day_of_the_month(&self, _n: &str) -> Template<1> {
        const { Template::new(", %s dage før den sidste dag i måneden") }
    }

    fn first_weekday(&self) -> &'static str {
        "første hverdag"
    }

    fn weekday_nearest_day(&self) -> Template<1> {
        const { Template::new("hverdag nærmest dag %s") }
    }

    fn comma_on_the_of_the_month(&self) -> Template<1> {
        const { Template::new(", på den %s i måneden") }
    }

    fn comma_every_n_days(&self, _n: &str) -> Template<1> {
        const { Template::new(", hver %s. dag") }
    }

    fn comma_between_days_of_the_month(&self, _range: &str) -> Template<2> {
        const { Template::new(", mellem dag %s og %s i måneden") }
    }

    fn comma_on_day_of_the_month(&self, _day: &str) -> Template<1> {
        const { Template::new(", på dag %s i måneden") }
    }

    fn comma_every_n_years(&self, _n: &str) -> Template<1> {
        const { Template::new(", hvert %s. år") }
    }

    fn comma_starting(&self) -> Template<1> {
        const { Template::new(", startende %s") }
    }

    fn days_of_the_week(&self) -> [&'static str; 7] {
        [
            "søndag",
            "mandag",
            "tirsdag",
            "onsdag",
            "torsdag",
            "fredag",
            "lørdag",
        ]
    }

    fn months_of_the_year(&self) -> [&'static str; 12] {
        [
            "januar",
            "februar",
            "marts",
            "april",
            "maj",
            "juni",
            "juli",
            "august",
            "september",
            "oktober",
            "november",
            "december",
        ]
    }
}
