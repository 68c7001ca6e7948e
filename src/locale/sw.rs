use super::Locale;
use crate::template::Template;

/// Swahili
#[derive(Debug, Clone, Copy, Default)]
pub struct Swahili;

impl Locale for Swahili {
    fn id(&self) -> &'static str {
        "sw"
    }

    fn use_24_hour_time_format_by_default(&self) -> bool {
        true
    }

    fn error_occurred(&self) -> &'static str {
        "Kuna tatizo wakati wa kutunga msemo. Angalia cron expression syntax."
    }

    fn at_space(&self) -> &'static str {
        "Kwa "
    }

    fn at(&self) -> &'static str {
        "Kwa"
    }

    fn space_and(&self) -> &'static str {
        " na"
    }

    fn every_second(&self) -> &'static str {
        "kila sekunde"
    }

    fn every_minute(&self) -> &'static str {
        "kila dakika"
    }

    fn every_hour(&self) -> &'static str {
        "kila saa"
    }

    fn every_minute_between(&self) -> Template<2> {
        const { Template::new("Kila dakika kwanzia %s hadi %s") }
    }

    fn every_n_seconds(&self, _n: &str) -> Template<1> {
        const { Template::new("kila sekunde %s") }
    }

    fn seconds_through_past_the_minute(&self) -> Template<2> {
        const { Template::new("sekunde ya %s hadi %s baada ya dakika") }
    }

    fn at_seconds_past_the_minute(&self, _n: &str) -> Template<1> {
        const { Template::new("sekunde %s baada ya dakika") }
    }

    fn every_n_minutes(&self, _n: &str) -> Template<1> {
        const { Template::new("kila dakika %s") }
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
        const { Template::new("kati ya %s na %s") }
    }

    fn at_time(&self) -> Template<1> {
        const { Template::new("kwenye %s") }
    }

    fn comma_every_day(&self) -> &'static str {
        ", kila siku"
    }

    fn comma_every_n_days_of_the_week(&self, _n: &str) -> Template<1> {
        const { Template::new(", kila siku %s ya wiki") }
    }

    fn comma_through(&self, _start: &str) -> Template<2> {
        const { Template::new(", %s hadi %s") }
    }

    fn comma_and_through(&self, _start: &str) -> Template<2> {
        const { Template::new(", na %s hadi %s") }
    }

    fn ordinals(&self, _day_of_week: &str) -> [&'static str; 5] {
        ["ya kwanza", "ya pili", "ya tatu", "ya nne", "ya tano"]
    }

    fn comma_on_the(&self, _nth: &str, _day_of_week: &str) -> &'static str {
        ", kwenye "
    }

    fn space_of_the_month(&self) -> Template<1> {
        const { Template::new(" siku %s ya mwezi") }
    }

    fn last_day(&self) -> &'static str {
        "siku ya mwisho"
    }

    fn comma_on_the_last_of_the_month(&self, _day_of_week: &str) -> Template<1> {
        const { Template::new(", siku ya %s ya mwezi") }
    }

    fn comma_only_on(&self, _day_of_week: &str) -> Template<1> {
        const { Template::new(", kwa %s tu") }
    }

    fn comma_and_on(&self) -> Template<1> {
        const { Template::new(", na pia %s") }
    }

    fn comma_every_n_months(&self, _n: &str) -> Template<1> {
        const { Template::new(", kila mwezi wa %s") }
    }

    fn comma_only_in(&self) -> Template<1> {
        const { Template::new(", kwa %s tu") }
    }

    fn comma_on_the_last_day_of_the_month(&self) -> &'static str {
        ", siku ya mwisho wa mwezi"
    }

    fn comma_on_the_last_weekday_of_the_month(&self) -> &'static str {
        ", wikendi ya mwisho wa mwezi"
    }

    fn comma_days_before_the_last_day_of_the_month(&self, _n: &str) -> Template<1> {
        const { Template::new(", siku ya %s kabla ya siku ya mwisho wa mwezi") }
    }

    fn first_weekday(&self) -> &'static str {
        "siku za kazi ya kwanza"
    }

    fn weekday_nearest_day(&self) -> Template<1> {
        const { Template::new("siku ya kazi karibu na siku ya %s") }
    }

    fn comma_on_the_of_the_month(&self) -> Template<1> {
        const { Template::new(", siku ya %s ya mwezi") }
    }

    fn comma_every_n_days(&self, _n: &str) -> Template<1> {
        const { Template::new(", kila siku %s") }
    }

    fn comma_between_days_of_the_month(&self, _range: &str) -> Template<2> {
        const { Template::new(", kati ya siku %s na %s ya mwezi") }
    }

    fn comma_on_day_of_the_month(&self, _day: &str) -> Template<1> {
        const { Template::new(", siku ya %s ya mwezi") }
    }

    fn comma_every_n_years(&self, _n: &str) -> Template<1> {
        const { Template::new(", kila miaka %s") }
    }

    fn comma_starting(&self) -> Template<1> {
        const { Template::new(", kwanzia %s") }
    }

    fn days_of_the_week(&self) -> [&'static str; 7] {
        [
            "Jumapili",
            "Jumatatu",
            "Jumanne",
            "Jumatano",
            "Alhamisi",
            "Ijumaa",
            "Jumamosi",
        ]
    }

    fn months_of_the_year(&self) -> [&'static str; 12] {
        [
            "Januari",
            "Februari",
            "Machi",
            "Aprili",
            "Mei",
            "Juni",
            "Julai",
            "Agosti",
            "Septemba",
            "Oktoba",
            "Novemba",
            "Desemba",
        ]
    }
}
