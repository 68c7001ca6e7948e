use super::Locale;
use crate::template::Template;

/// Norwegian Bokmål
#[derive(Debug, Clone, Copy, Default)]
pub struct NorwegianBokmal;

impl Locale for NorwegianBokmal {
    fn id(&self) -> &'static str {
        "nb"
    }

    fn use_24_hour_time_format_by_default(&self) -> bool {
        true
    }

    fn error_occurred(&self) -> &'static str {
        "En feil inntraff ved generering av uttrykksbeskrivelse. Sjekk cron syntaks."
    }

    fn at_space(&self) -> &'static str {
        "Kl."
    }

    fn at(&self) -> &'static str {
        "Kl."
    }

    fn space_and(&self) -> &'static str {
        " og"
    }

    fn every_second(&self) -> &'static str {
        "hvert sekund"
    }

    fn every_minute(&self) -> &'static str {
        "hvert minutt"
    }

    fn every_hour(&self) -> &'static str {
        "hver time"
    }

    fn every_minute_between(&self) -> Template<2> {
        const { Template::new("Hvert minutt mellom %s og %s") }
    }

    fn every_n_seconds(&self, _n: &str) -> Template<1> {
        const { Template::new("hvert %s sekund") }
    }

    fn seconds_through_past_the_minute(&self) -> Template<2> {
        const { Template::new("sekundene fra %s til og med %s etter minuttet") }
    }

    fn at_seconds_past_the_minute(&self, _n: &str) -> Template<1> {
        const { Template::new("på %s sekunder etter minuttet") }
    }

    fn every_n_minutes(&self, _n: &str) -> Template<1> {
        const { Template::new("hvert %s minutt") }
    }

    fn minutes_through_past_the_hour(&self) -> Template<2> {
        const { Template::new("minuttene fra %s til og med %s etter timen") }
    }

    fn at_minutes_past_the_hour(&self, _n: &str) -> Template<1> {
        const { Template::new("på %s minutter etter timen") }
    }

    fn every_n_hours(&self, _n: &str) -> Template<1> {
        const { Template::new("hver %s time") }
    }

    fn between(&self) -> Template<2> {
        const { Template::new("mellom %s og %s") }
    }

    fn at_time(&self) -> Template<1> {
        const { Template::new("på %s") }
    }

    fn comma_every_day(&self) -> &'static str {
        ", hver dag"
    }

    fn comma_every_n_days_of_the_week(&self, _n: &str) -> Template<1> {
        const { Template::new(", hver %s ukedag") }
    }

    fn comma_through(&self, _start: &str) -> Template<2> {
        const { Template::new(", %s til og med %s") }
    }

    fn comma_and_through(&self, _start: &str) -> Template<2> {
        const { Template::new(", og %s til og med %s") }
    }

    fn ordinals(&self, _day_of_week: &str) -> [&'static str; 5] {
        ["første", "andre", "tredje", "fjerde", "femte"]
    }

    fn comma_on_the(&self, _nth: &str, _day_of_week: &str) -> &'static str {
        ", på "
    }

    fn space_of_the_month(&self) -> Template<1> {
        const { Template::new(" %s i måneden") }
    }

    fn last_day(&self) -> &'static str {
        "den siste dagen"
    }

    fn comma_on_the_last_of_the_month(&self, _day_of_week: &str) -> Template<1> {
        const { Template::new(", på den siste %s av måneden") }
    }

    fn comma_only_on(&self, _day_of_week: &str) -> Template<1> {
        const { Template::new(", på %s") }
    }

    fn comma_and_on(&self) -> Template<1> {
        const { Template::new(", og på %s") }
    }

    fn comma_every_n_months(&self, _n: &str) -> Template<1> {
        const { Template::new(", hver %s måned") }
    }

    fn comma_only_in(&self) -> Template<1> {
        const { Template::new(", bare i %s") }
    }

    fn comma_on_the_last_day_of_the_month(&self) -> &'static str {
        ", på den siste dagen i måneden"
    }

    fn comma_on_the_last_weekday_of_the_month(&self) -> &'static str {
        ", den siste ukedagen i måneden"
    }

    fn comma_days_before_the_last_day_of_the_month(&self, _n: &str) -> Template<1> {
        const { Template::new(", %s dager før den siste dagen i måneden") }
    }

    fn first_weekday(&self) -> &'static str {
        "første ukedag"
    }

    fn weekday_nearest_day(&self) -> Template<1> {
        const { Template::new("ukedag nærmest dag %s") }
    }

    fn comma_on_the_of_the_month(&self) -> Template<1> {
        const { Template::new(", på den %s av måneden") }
    }

    fn comma_every_n_days(&self, _n: &str) -> Template<1> {
        const { Template::new(", hver %s dag") }
    }

    fn comma_between_days_of_the_month(&self, _range: &str) -> Template<2> {
        const { Template::new(", mellom dag %s og %s av måneden") }
    }

    fn comma_on_day_of_the_month(&self, _day: &str) -> Template<1> {
        const { Template::new(", på dag %s av måneden") }
    }

    fn comma_every_n_years(&self, _n: &str) -> Template<1> {
        const { Template::new(", hvert %s år") }
    }

    fn comma_starting(&self) -> Template<1> {
        const { Template::new(", starter %s") }
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
            "mars",
            "april",
            "mai",
            "juni",
            "juli",
            "august",
            "september",
            "oktober",
            "november",
            "desember",
        ]
    }
}
