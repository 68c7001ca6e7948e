use super::Locale;
use crate::template::Template;

/// Slovak
#[derive(Debug, Clone, Copy, Default)]
pub struct Slovak;

impl Locale for Slovak {
    fn id(&self) -> &'static str {
        "sk"
    }

    fn use_24_hour_time_format_by_default(&self) -> bool {
        true
    }

    fn error_occurred(&self) -> &'static str {
        "Pri vytváraní popisu došlo k chybe. Skontrolujte prosím správnosť syntaxe cronu."
    }

    fn at_space(&self) -> &'static str {
        "V "
    }

    fn at(&self) -> &'static str {
        "V"
    }

    fn space_and(&self) -> &'static str {
        " a"
    }

    fn every_second(&self) -> &'static str {
        "každú sekundu"
    }

    fn every_minute(&self) -> &'static str {
        "každú minútu"
    }

    fn every_hour(&self) -> &'static str {
        "každú hodinu"
    }

    fn every_minute_between(&self) -> Template<2> {
        const { Template::new("Každú minútu medzi %s a %s") }
    }

    fn every_n_seconds(&self, _n: &str) -> Template<1> {
        const { Template::new("každých %s sekúnd") }
    }

    fn seconds_through_past_the_minute(&self) -> Template<2> {
        const { Template::new("sekundy od %s do %s") }
    }

    fn at_seconds_past_the_minute(&self, _n: &str) -> Template<1> {
        const { Template::new("v %s sekúnd") }
    }

    fn every_n_minutes(&self, _n: &str) -> Template<1> {
        const { Template::new("každých %s minút") }
    }

    fn minutes_through_past_the_hour(&self) -> Template<2> {
        const { Template::new("minúty od %s do %s") }
    }

    fn at_minutes_past_the_hour(&self, _n: &str) -> Template<1> {
        const { Template::new("v %s minút") }
    }

    fn every_n_hours(&self, _n: &str) -> Template<1> {
        const { Template::new("každých %s hodín") }
    }

    fn between(&self) -> Template<2> {
        const { Template::new("medzi %s a %s") }
    }

    fn at_time(&self) -> Template<1> {
        const { Template::new("v %s") }
    }

    fn comma_every_day(&self) -> &'static str {
        ", každý deň"
    }

    fn comma_every_n_days_of_the_week(&self, _n: &str) -> Template<1> {
        const { Template::new(", každých %s dní v týždni") }
    }

    fn comma_through(&self, _start: &str) -> Template<2> {
        const { Template::new(", od %s do %s") }
    }

    fn comma_and_through(&self, _start: &str) -> Template<2> {
        const { Template::new(", a od %s do %s") }
    }

    fn ordinals(&self, _day_of_week: &str) -> [&'static str; 5] {
        ["prvý", "druhý", "tretí", "štvrtý", "piaty"]
    }

    fn comma_on_the(&self, _nth: &str, _day_of_week: &str) -> &'static str {
        ", "
    }

    fn space_of_the_month(&self) -> Template<1> {
        const { Template::new(" %s v mesiaci") }
    }

    fn last_day(&self) -> &'static str {
        "posledný deň"
    }

    fn comma_on_the_last_of_the_month(&self, _day_of_week: &str) -> Template<1> {
        const { Template::new(", posledný %s v mesiaci") }
    }

    fn comma_only_on(&self, _day_of_week: &str) -> Template<1> {
        const { Template::new(", iba v %s") }
    }

    fn comma_and_on(&self) -> Template<1> {
        const { Template::new(", a v %s") }
    }

    fn comma_every_n_months(&self, _n: &str) -> Template<1> {
        const { Template::new(", každých %s mesiacov") }
    }

    fn comma_only_in(&self) -> Template<1> {
        const { Template::new(", iba v %s") }
    }

    fn comma_on_the_last_day_of_the_month(&self) -> &'static str {
        ", posledný deň v mesiaci"
    }

    fn comma_on_the_last_weekday_of_the_month(&self) -> &'static str {
        ", posledný pracovný deň v mesiaci"
    }

    fn comma_days_before_the_last_day_of_the_month(&self, _n: &str) -> Template<1> {
        const { Template::new(", %s dní pred posledným dňom v mesiaci") }
    }

    fn first_weekday(&self) -> &'static str {
        "prvý pracovný deň"
    }

    fn weekday_nearest_day(&self) -> Template<1> {
        const { Template::new("pracovný deň najbližšie %s. dňu") }
    }

    fn comma_on_the_of_the_month(&self) -> Template<1> {
        const { Template::new(", v %s v mesiaci") }
    }

    fn comma_every_n_days(&self, _n: &str) -> Template<1> {
        const { Template::new(", každých %s dní") }
    }

    fn comma_between_days_of_the_month(&self, _range: &str) -> Template<2> {
        const { Template::new(", medzi dňami %s a %s v mesiaci") }
    }

    fn comma_on_day_of_the_month(&self, _day: &str) -> Template<1> {
        const { Template::new(", %s. deň v mesiaci") }
    }

    fn comma_every_n_years(&self, _n: &str) -> Template<1> {
        const { Template::new(", každých %s rokov") }
    }

    fn comma_starting(&self) -> Template<1> {
        const { Template::new(", začínajúcich %s") }
    }

    fn days_of_the_week(&self) -> [&'static str; 7] {
        [
            "Nedeľa",
            "Pondelok",
            "Utorok",
            "Streda",
            "Štvrtok",
            "Piatok",
            "Sobota",
        ]
    }

    fn months_of_the_year(&self) -> [&'static str; 12] {
        [
            "Január",
            "Február",
            "Marec",
            "Apríl",
            "Máj",
            "Jún",
            "Júl",
            "August",
            "September",
            "Október",
            "November",
            "December",
        ]
    }
}
