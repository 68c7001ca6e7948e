use super::Locale;
use crate::template::Template;

/// Dutch
#[derive(Debug, Clone, Copy, Default)]
pub struct Dutch;

impl Locale for Dutch {
    fn id(&self) -> &'static str {
        "nl"
    }

    fn use_24_hour_time_format_by_default(&self) -> bool {
        true
    }

    fn error_occurred(&self) -> &'static str {
        "Er is een fout opgetreden bij het vertalen van de gegevens. Controleer de gegevens."
    }

    fn at_space(&self) -> &'static str {
        "Om "
    }

    fn at(&self) -> &'static str {
        "Om"
    }

    fn space_and(&self) -> &'static str {
        " en"
    }

    fn every_second(&self) -> &'static str {
        "elke seconde"
    }

    fn every_minute(&self) -> &'static str {
        "elke minuut"
    }

    fn every_hour(&self) -> &'static str {
        "elk uur"
    }

    fn every_minute_between(&self) -> Template<2> {
        const { Template::new("Elke minuut tussen %s en %s") }
    }

    fn every_n_seconds(&self, _n: &str) -> Template<1> {
        const { Template::new("elke %s seconden") }
    }

    fn seconds_through_past_the_minute(&self) -> Template<2> {
        const { Template::new("seconden %s t/m %s na de minuut") }
    }

    fn at_seconds_past_the_minute(&self, _n: &str) -> Template<1> {
        const { Template::new("op %s seconden na de minuut") }
    }

    fn every_n_minutes(&self, _n: &str) -> Template<1> {
        const { Template::new("elke %s minuten") }
    }

    fn minutes_through_past_the_hour(&self) -> Template<2> {
        const { Template::new("minuut %s t/m %s na het uur") }
    }

    fn at_minutes_past_the_hour(&self, _n: &str) -> Template<1> {
        const { Template::new("op %s minuten na het uur") }
    }

    fn every_n_hours(&self, _n: &str) -> Template<1> {
        const { Template::new("elke %s uur") }
    }

    fn between(&self) -> Template<2> {
        const { Template::new("tussen %s en %s") }
    }

    fn at_time(&self) -> Template<1> {
        const { Template::new("om %s") }
    }

    fn comma_every_day(&self) -> &'static str {
        ", elke dag"
    }

    fn comma_every_n_days_of_the_week(&self, _n: &str) -> Template<1> {
        const { Template::new(", elke %s dagen van de week") }
    }

    fn comma_through(&self, _start: &str) -> Template<2> {
        const { Template::new(", %s t/m %s") }
    }

    fn comma_and_through(&self, _start: &str) -> Template<2> {
        const { Template::new(", en %s t/m %s") }
    }

    fn ordinals(&self, _day_of_week: &str) -> [&'static str; 5] {
        ["eerste", "tweede", "derde", "vierde", "vijfde"]
    }

    fn comma_on_the(&self, _nth: &str, _day_of_week: &str) -> &'static str {
        ", op de "
    }

    fn space_of_the_month(&self) -> Template<1> {
        const { Template::new(" %s van de maand") }
    }

    fn last_day(&self) -> &'static str {
        "de laatste dag"
    }

    fn comma_on_the_last_of_the_month(&self, _day_of_week: &str) -> Template<1> {
        const { Template::new(", op de laatste %s van de maand") }
    }

    fn comma_only_on(&self, _day_of_week: &str) -> Template<1> {
        const { Template::new(", alleen op %s") }
    }

    fn comma_and_on(&self) -> Template<1> {
        const { Template::new(", en op %s") }
    }

    fn comma_every_n_months(&self, _n: &str) -> Template<1> {
        const { Template::new(", elke %s maanden") }
    }

    fn comma_only_in(&self) -> Template<1> {
        const { Template::new(", alleen in %s") }
    }

    fn comma_on_the_last_day_of_the_month(&self) -> &'static str {
        ", op de laatste dag van de maand"
    }

    fn comma_on_the_last_weekday_of_the_month(&self) -> &'static str {
        ", op de laatste werkdag van de maand"
    }

    fn comma_days_before_the_last_day_of_the_month(&self, _n: &str) -> Template<1> {
        const { Template::new(", %s dagen vóór de laatste dag van de maand") }
    }

    fn first_weekday(&self) -> &'static str {
        "eerste werkdag"
    }

    fn weekday_nearest_day(&self) -> Template<1> {
        const { Template::new("werkdag dichtst bij dag %s") }
    }

    fn comma_on_the_of_the_month(&self) -> Template<1> {
        const { Template::new(", op de %s van de maand") }
    }

    fn comma_every_n_days(&self, _n: &str) -> Template<1> {
        const { Template::new(", elke %s dagen") }
    }

    fn comma_between_days_of_the_month(&self, _range: &str) -> Template<2> {
        const { Template::new(", tussen dag %s en %s van de maand") }
    }

    fn comma_on_day_of_the_month(&self, _day: &str) -> Template<1> {
        const { Template::new(", op dag %s van de maand") }
    }

    fn comma_every_n_years(&self, _n: &str) -> Template<1> {
        const { Template::new(", elke %s jaren") }
    }

    fn comma_starting(&self) -> Template<1> {
        const { Template::new(", beginnend %s") }
    }

    fn days_of_the_week(&self) -> [&'static str; 7] {
        [
            "zondag",
            "maandag",
            "dinsdag",
            "woensdag",
            "donderdag",
            "vrijdag",
            "zaterdag",
        ]
    }

    fn months_of_the_year(&self) -> [&'static str; 12] {
        [
            "januari",
            "februari",
            "maart",
            "april",
            "mei",
            "juni",
            "juli",
            "augustus",
            "september",
            "oktober",
            "november",
            "december",
        ]
    }
}
