use super::Locale;
use crate::template::Template;

/// Swedish
#[derive(Debug, Clone, Copy, Default)]
pub struct Swedish;

impl Locale for Swedish {
    fn id(&self) -> &'static str {
        "sv"
    }

    fn use_24_hour_time_format_by_default(&self) -> bool {
        true
    }

    fn error_occurred(&self) -> &'static str {
        "Ett fel inträffade vid generering av uttryckets beskrivning. Kontrollera cron-uttryckets syntax."
    }

    fn at_space(&self) -> &'static str {
        "Kl "
    }

    fn at(&self) -> &'static str {
        "Kl"
    }

    fn space_and(&self) -> &'static str {
        " och"
    }

    fn every_second(&self) -> &'static str {
        "varje sekund"
    }

    fn every_minute(&self) -> &'static str {
        "varje minut"
    }

    fn every_hour(&self) -> &'static str {
        "varje timme"
    }

    fn every_minute_between(&self) -> Template<2> {
        const { Template::new("Varje minut mellan %s och %s") }
    }

    fn every_n_seconds(&self, _n: &str) -> Template<1> {
        const { Template::new("varje %s sekund") }
    }

    fn seconds_through_past_the_minute(&self) -> Template<2> {
        const { Template::new("sekunderna från %s till och med %s efter minuten") }
    }

    fn at_seconds_past_the_minute(&self, _n: &str) -> Template<1> {
        const { Template::new("på %s sekunder efter minuten") }
    }

    fn every_n_minutes(&self, _n: &str) -> Template<1> {
        const { Template::new("var %s minut") }
    }

    fn minutes_through_past_the_hour(&self) -> Template<2> {
        const { Template::new("minuterna från %s till och med %s efter timmen") }
    }

    fn at_minutes_past_the_hour(&self, _n: &str) -> Template<1> {
        const { Template::new("på %s minuten efter timmen") }
    }

    fn every_n_hours(&self, _n: &str) -> Template<1> {
        const { Template::new("var %s timme") }
    }

    fn between(&self) -> Template<2> {
        const { Template::new("mellan %s och %s") }
    }

    fn at_time(&self) -> Template<1> {
        const { Template::new("kl %s") }
    }

    fn comma_every_day(&self) -> &'static str {
        ", varje dag"
    }

    fn comma_every_n_days_of_the_week(&self, _n: &str) -> Template<1> {
        const { Template::new(", var %s dag i veckan") }
    }

    fn comma_through(&self, _start: &str) -> Template<2> {
        const { Template::new(", %s till %s") }
    }

    fn comma_and_through(&self, _start: &str) -> Template<2> {
        const { Template::new(", och %s till %s") }
    }

    fn ordinals(&self, _day_of_week: &str) -> [&'static str; 5] {
        ["första", "andra", "tredje", "fjärde", "femte"]
    }

    fn comma_on_the(&self, _nth: &str, _day_of_week: &str) -> &'static str {
        ", den "
    }

    fn space_of_the_month(&self) -> Template<1> {
        const { Template::new(" %sen av månaden") }
    }

    fn last_day(&self) -> &'static str {
        "den sista dagen"
    }

    fn comma_on_the_last_of_the_month(&self, _day_of_week: &str) -> Template<1> {
        const { Template::new(", på sista %s av månaden") }
    }

    fn comma_only_on(&self, _day_of_week: &str) -> Template<1> {
        const { Template::new(", varje %s") }
    }

    fn comma_and_on(&self) -> Template<1> {
        const { Template::new(", och på %s") }
    }

    fn comma_every_n_months(&self, _n: &str) -> Template<1> {
        const { Template::new(", var %s månad") }
    }

    fn comma_only_in(&self) -> Template<1> {
        const { Template::new(", bara på %s") }
    }

    fn comma_on_the_last_day_of_the_month(&self) -> &'static str {
        ", på sista dagen av månaden"
    }

    fn comma_on_the_last_weekday_of_the_month(&self) -> &'static str {
        ", på sista veckodag av månaden"
    }

    fn comma_days_before_the_last_day_of_the_month(&self, _n: &str) -> Template<1> {
        const { Template::new(", %s dagar före den sista dagen i månaden") }
    }

    fn first_weekday(&self) -> &'static str {
        "första veckodag"
    }

    fn weekday_nearest_day(&self) -> Template<1> {
        const { Template::new("veckodagen närmast dag %s") }
    }

    fn comma_on_the_of_the_month(&self) -> Template<1> {
        const { Template::new(", på den %s av månaden") }
    }

    fn comma_every_n_days(&self, _n: &str) -> Template<1> {
        const { Template::new(", var %s dag") }
    }

    fn comma_between_days_of_the_month(&self, _range: &str) -> Template<2> {
        const { Template::new(", mellan dag %s och %s av månaden") }
    }

    fn comma_on_day_of_the_month(&self, _day: &str) -> Template<1> {
        const { Template::new(", på dag %s av månaden") }
    }

    fn comma_every_n_years(&self, _n: &str) -> Template<1> {
        const { Template::new(", var %s år") }
    }

    fn comma_starting(&self) -> Template<1> {
        const { Template::new(", startar %s") }
    }

    fn days_of_the_week(&self) -> [&'static str; 7] {
        ["söndag", "måndag", "tisdag", "onsdag", "torsdag", "fredag", "lördag"]
    }

    fn months_of_the_year(&self) -> [&'static str; 12] {
        [
            "januari",
            "februari",
            "mars",
            "april",
            "maj",
            "juni",
            "juli",
            "augusti",
            "september",
            "oktober",
            "november",
            "december",
        ]
    }
}
