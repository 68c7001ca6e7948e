use super::Locale;
use crate::template::Template;

/// German
#[derive(Debug, Clone, Copy, Default)]
pub struct German;

impl Locale for German {
    fn id(&self) -> &'static str {
        "de"
    }

    fn use_24_hour_time_format_by_default(&self) -> bool {
        true
    }

    fn error_occurred(&self) -> &'static str {
        "Beim Generieren der Ausdrucksbeschreibung ist ein Fehler aufgetreten. Überprüfen Sie die Syntax des Cron-Ausdrucks."
    }

    fn at_space(&self) -> &'static str {
        "Um "
    }

    fn at(&self) -> &'static str {
        "Um"
    }

    fn space_and(&self) -> &'static str {
        " und"
    }

    fn every_second(&self) -> &'static str {
        "Jede Sekunde"
    }

    fn every_minute(&self) -> &'static str {
        "jede Minute"
    }

    fn every_hour(&self) -> &'static str {
        "jede Stunde"
    }

    fn every_minute_between(&self) -> Template<2> {
        const { Template::new("Jede Minute zwischen %s und %s") }
    }

    fn every_n_seconds(&self, _n: &str) -> Template<1> {
        const { Template::new("alle %s Sekunden") }
    }

    fn seconds_through_past_the_minute(&self) -> Template<2> {
        const { Template::new("Sekunden %s bis %s") }
    }

    fn at_seconds_past_the_minute(&self, _n: &str) -> Template<1> {
        const { Template::new("bei Sekunde %s") }
    }

    fn every_n_minutes(&self, _n: &str) -> Template<1> {
        const { Template::new("alle %s Minuten") }
    }

    fn minutes_through_past_the_hour(&self) -> Template<2> {
        const { Template::new("Minuten %s bis %s") }
    }

    fn at_minutes_past_the_hour(&self, _n: &str) -> Template<1> {
        const { Template::new("bei Minute %s") }
    }

    fn every_n_hours(&self, _n: &str) -> Template<1> {
        const { Template::new("alle %s Stunden") }
    }

    fn between(&self) -> Template<2> {
        const { Template::new("zwischen %s und %s") }
    }

    fn at_time(&self) -> Template<1> {
        const { Template::new("um %s") }
    }

    fn comma_every_day(&self) -> &'static str {
        ", jeden Tag"
    }

    fn comma_every_n_days_of_the_week(&self, _n: &str) -> Template<1> {
        const { Template::new(", alle %s Tage der Woche") }
    }

    fn comma_through(&self, _start: &str) -> Template<2> {
        const { Template::new(", %s bis %s") }
    }

    fn comma_and_through(&self, _start: &str) -> Template<2> {
        const { Template::new(", und %s bis %s") }
    }

    fn ordinals(&self, _day_of_week: &str) -> [&'static str; 5] {
        ["ersten", "zweiten", "dritten", "vierten", "fünften"]
    }

    fn comma_on_the(&self, _nth: &str, _day_of_week: &str) -> &'static str {
        ", am "
    }

    fn space_of_the_month(&self) -> Template<1> {
        const { Template::new(" %s des Monats") }
    }

    fn last_day(&self) -> &'static str {
        "der letzte Tag"
    }

    fn comma_on_the_last_of_the_month(&self, _day_of_week: &str) -> Template<1> {
        const { Template::new(", am letzten %s des Monats") }
    }

    fn comma_only_on(&self, _day_of_week: &str) -> Template<1> {
        const { Template::new(", nur jeden %s") }
    }

    fn comma_and_on(&self) -> Template<1> {
        const { Template::new(", und jeden %s") }
    }

    fn comma_every_n_months(&self, _n: &str) -> Template<1> {
        const { Template::new(", alle %s Monate") }
    }

    fn comma_only_in(&self) -> Template<1> {
        const { Template::new(", nur im %s") }
    }

    fn comma_on_the_last_day_of_the_month(&self) -> &'static str {
        ", am letzten Tag des Monats"
    }

    fn comma_on_the_last_weekday_of_the_month(&self) -> &'static str {
        ", am letzten Werktag des Monats"
    }

    fn comma_days_before_the_last_day_of_the_month(&self, _n: &str) -> Template<1> {
        const { Template::new(", %s tage vor dem letzten Tag des Monats") }
    }

    fn first_weekday(&self) -> &'static str {
        "ersten Werktag"
    }

    fn weekday_nearest_day(&self) -> Template<1> {
        const { Template::new("Werktag am nächsten zum %s Tag") }
    }

    fn comma_on_the_of_the_month(&self) -> Template<1> {
        const { Template::new(", am %s des Monats") }
    }

    fn comma_every_n_days(&self, _n: &str) -> Template<1> {
        const { Template::new(", alle %s Tage") }
    }

    fn comma_between_days_of_the_month(&self, _range: &str) -> Template<2> {
        const { Template::new(", zwischen Tag %s und %s des Monats") }
    }

    fn comma_on_day_of_the_month(&self, _day: &str) -> Template<1> {
        const { Template::new(", an Tag %s des Monats") }
    }

    fn comma_every_n_years(&self, _n: &str) -> Template<1> {
        const { Template::new(", alle %s Jahre") }
    }

    fn comma_starting(&self) -> Template<1> {
        const { Template::new(", beginnend %s") }
    }

    fn days_of_the_week(&self) -> [&'static str; 7] {
        [
            "Sonntag",
            "Montag",
            "Dienstag",
            "Mittwoch",
            "Donnerstag",
            "Freitag",
            "Samstag",
        ]
    }

    fn months_of_the_year(&self) -> [&'static str; 12] {
        [
            "Januar",
            "Februar",
            "März",
            "April",
            "Mai",
            "Juni",
            "Juli",
            "August",
            "September",
            "Oktober",
            "November",
            "Dezember",
        ]
    }
}
