use super::Locale;
use crate::template::Template;

/// Polish
#[derive(Debug, Clone, Copy, Default)]
pub struct Polish;

impl Locale for Polish {
    fn id(&self) -> &'static str {
        "pl"
    }

    fn use_24_hour_time_format_by_default(&self) -> bool {
        true
    }

    fn error_occurred(&self) -> &'static str {
        "Wystąpił błąd podczas generowania opisu wyrażenia cron. Sprawdź składnię wyrażenia cron."
    }

    fn at_space(&self) -> &'static str {
        "O "
    }

    fn at(&self) -> &'static str {
        "O"
    }

    fn space_and(&self) -> &'static str {
        " i"
    }

    fn every_second(&self) -> &'static str {
        "co sekundę"
    }

    fn every_minute(&self) -> &'static str {
        "co minutę"
    }

    fn every_hour(&self) -> &'static str {
        "co godzinę"
    }

    fn every_minute_between(&self) -> Template<2> {
        const { Template::new("Co minutę od %s do %s") }
    }

    fn every_n_seconds(&self, _n: &str) -> Template<1> {
        const { Template::new("co %s sekund") }
    }

    fn seconds_through_past_the_minute(&self) -> Template<2> {
        const { Template::new("sekundy od %s do %s") }
    }

    fn at_seconds_past_the_minute(&self, _n: &str) -> Template<1> {
        const { Template::new("w %s sekundzie") }
    }

    fn every_n_minutes(&self, _n: &str) -> Template<1> {
        const { Template::new("co %s minut") }
    }

    fn minutes_through_past_the_hour(&self) -> Template<2> {
        const { Template::new("minuty od %s do %s") }
    }

    fn at_minutes_past_the_hour(&self, _n: &str) -> Template<1> {
        const { Template::new("w %s minucie") }
    }

    fn every_n_hours(&self, _n: &str) -> Template<1> {
        const { Template::new("co %s godzin") }
    }

    fn between(&self) -> Template<2> {
        const { Template::new("od %s do %s") }
    }

    fn at_time(&self) -> Template<1> {
        const { Template::new("o %s") }
    }

    fn comma_every_day(&self) -> &'static str {
        ", co dzień"
    }

    fn comma_every_n_days_of_the_week(&self, _n: &str) -> Template<1> {
        const { Template::new(", co %s dni tygodnia") }
    }

    fn comma_through(&self, _start: &str) -> Template<2> {
        const { Template::new(", od %s do %s") }
    }

    fn comma_and_through(&self, _start: &str) -> Template<2> {
        const { Template::new(", i od %s do %s") }
    }

    fn ordinals(&self, _day_of_week: &str) -> [&'static str; 5] {
        ["pierwszy", "drugi", "trzeci", "czwarty", "piąty"]
    }

    fn comma_on_the(&self, _nth: &str, _day_of_week: &str) -> &'static str {
        ", "
    }

    fn space_of_the_month(&self) -> Template<1> {
        const { Template::new(" %s miesiąca") }
    }

    fn last_day(&self) -> &'static str {
        "ostatni dzień"
    }

    fn comma_on_the_last_of_the_month(&self, _day_of_week: &str) -> Template<1> {
        const { Template::new(", ostatni %s miesiąca") }
    }

    fn comma_only_on(&self, _day_of_week: &str) -> Template<1> {
        const { Template::new(", tylko %s") }
    }

    fn comma_and_on(&self) -> Template<1> {
        const { Template::new(", i %s") }
    }

    fn comma_every_n_months(&self, _n: &str) -> Template<1> {
        const { Template::new(", co %s miesięcy") }
    }

    fn comma_only_in(&self) -> Template<1> {
        const { Template::new(", tylko %s") }
    }

    fn comma_on_the_last_day_of_the_month(&self) -> &'static str {
        ", ostatni dzień miesiąca"
    }

    fn comma_on_the_last_weekday_of_the_month(&self) -> &'static str {
        ", ostatni dzień roboczy miesiąca"
    }

    fn comma_days_before_the_last_day_of_the_month(&self, _n: &str) -> Template<1> {
        const { Template::new(", %s dni przed ostatnim dniem miesiąca") }
    }

    fn first_weekday(&self) -> &'static str {
        "pierwszy dzień roboczy"
    }

    fn weekday_nearest_day(&self) -> Template<1> {
        const { Template::new("dzień roboczy najbliższy %s-ego dnia") }
    }

    fn comma_on_the_of_the_month(&self) -> Template<1> {
        const { Template::new(", %s miesiąca") }
    }

    fn comma_every_n_days(&self, _n: &str) -> Template<1> {
        const { Template::new(", co %s dni") }
    }

    fn comma_between_days_of_the_month(&self, _range: &str) -> Template<2> {
        const { Template::new(", od %s-ego do %s-ego dnia miesiąca") }
    }

    fn comma_on_day_of_the_month(&self, _day: &str) -> Template<1> {
        const { Template::new(", %s-ego dnia miesiąca") }
    }

    fn comma_every_n_years(&self, _n: &str) -> Template<1> {
        const { Template::new(", co %s lat") }
    }

    fn comma_starting(&self) -> Template<1> {
        const { Template::new(", startowy %s") }
    }

    fn days_of_the_week(&self) -> [&'static str; 7] {
        [
            "niedziela",
            "poniedziałek",
            "wtorek",
            "środa",
            "czwartek",
            "piątek",
            "sobota",
        ]
    }

    fn months_of_the_year(&self) -> [&'static str; 12] {
        [
            "styczeń",
            "luty",
            "marzec",
            "kwiecień",
            "maj",
            "czerwiec",
            "lipiec",
            "sierpień",
            "wrzesień",
            "październik",
            "listopad",
            "grudzień",
        ]
    }
}
