use super::Locale;
use crate::template::Template;

/// Afrikaans
#[derive(Debug, Clone, Copy, Default)]
pub struct Afrikaans;

impl Locale for Afrikaans {
    fn id(&self) -> &'static str {
        "af"
    }

    fn use_24_hour_time_format_by_default(&self) -> bool {
        true
    }

    fn error_occurred(&self) -> &'static str {
        "Daar was 'n fout om die tydsuitdrukking the genereer. Raadpleeg asb die uitdrukking formaat."
    }

    fn at_space(&self) -> &'static str {
        "Teen "
    }

    fn at(&self) -> &'static str {
        "Teen"
    }

    fn space_and(&self) -> &'static str {
        " en"
    }

    fn every_second(&self) -> &'static str {
        "elke sekonde"
    }

    fn every_minute(&self) -> &'static str {
        "elke minuut"
    }

    fn every_hour(&self) -> &'static str {
        "elke uur"
    }

    fn every_minute_between(&self) -> Template<2> {
        const { Template::new("Elke minuut tussen %s en %s") }
    }

    fn every_n_seconds(&self, _n: &str) -> Template<1> {
        const { Template::new("elke %s sekonde") }
    }

    fn seconds_through_past_the_minute(&self) -> Template<2> {
        const { Template::new("sekonde %s deur na %s na die minuut") }
    }

    fn at_seconds_past_the_minute(&self, _n: &str) -> Template<1> {
        const { Template::new("teen %s sekondes na die minuut") }
    }

    fn every_n_minutes(&self, _n: &str) -> Template<1> {
        const { Template::new("elke %s minute") }
    }

    fn minutes_through_past_the_hour(&self) -> Template<2> {
        const { Template::new("minute %s deur na %s na die uur") }
    }

    fn at_minutes_past_the_hour(&self, _n: &str) -> Template<1> {
        const { Template::new("teen %s minute na die uur") }
    }

    fn every_n_hours(&self, _n: &str) -> Template<1> {
        const { Template::new("elke %s ure") }
    }

    fn between(&self) -> Template<2> {
        const { Template::new("tussen %s en %s") }
    }

    fn at_time(&self) -> Template<1> {
        const { Template::new("teen %s") }
    }

    fn comma_every_day(&self) -> &'static str {
        ", elke dag"
    }

    fn comma_every_n_days_of_the_week(&self, _n: &str) -> Template<1> {
        const { Template::new(", elke %s dae van die week") }
    }

    fn comma_through(&self, _start: &str) -> Template<2> {
        const { Template::new(", %s deur na %s") }
    }

    fn comma_and_through(&self, _start: &str) -> Template<2> {
        const { Template::new(", en %s deur na %s") }
    }

    fn ordinals(&self, _day_of_week: &str) -> [&'static str; 5] {
        ["eerste", "tweede", "derde", "vierde", "vyfde"]
    }

    fn comma_on_the(&self, _nth: &str, _day_of_week: &str) -> &'static str {
        ", op die "
    }

    fn space_of_the_month(&self) -> Template<1> {
        const { Template::new(" %s van die maand") }
    }

    fn last_day(&self) -> &'static str {
        "die laaste dag"
    }

    fn comma_on_the_last_of_the_month(&self, _day_of_week: &str) -> Template<1> {
        const { Template::new(", op die laaste %s van die maand") }
    }

    fn comma_only_on(&self, _day_of_week: &str) -> Template<1> {
        const { Template::new(", net op %s") }
    }

    fn comma_and_on(&self) -> Template<1> {
        const { Template::new(", en op %s") }
    }

    fn comma_every_n_months(&self, _n: &str) -> Template<1> {
        const { Template::new(", elke %s maande") }
    }

    fn comma_only_in(&self) -> Template<1> {
        const { Template::new(", net in %s") }
    }

    fn comma_on_the_last_day_of_the_month(&self) -> &'static str {
        ", op die laaste dag van die maand"
    }

    fn comma_on_the_last_weekday_of_the_month(&self) -> &'static str {
        ", op die laaste weeksdag van die maand"
    }

    fn comma_days_before_the_last_day_of_the_month(&self, _n: &str) -> Template<1> {
        const { Template::new(", %s dae voor die laaste dag van die maand") }
    }

    fn first_weekday(&self) -> &'static str {
        "eerste weeksdag"
    }

    fn weekday_nearest_day(&self) -> Template<1> {
        const { Template::new("weeksdag naaste aan dag %s") }
    }

    fn comma_on_the_of_the_month(&self) -> Template<1> {
        const { Template::new(", op die %s van die maande") }
    }

    fn comma_every_n_days(&self, _n: &str) -> Template<1> {
        const { Template::new(", elke %s dae") }
    }

    fn comma_between_days_of_the_month(&self, _range: &str) -> Template<2> {
        const { Template::new(", tussen dag %s en %s van die maand") }
    }

    fn comma_on_day_of_the_month(&self, _day: &str) -> Template<1> {
        const { Template::new(", op dag %s van die maand") }
    }

    fn comma_every_n_years(&self, _n: &str) -> Template<1> {
        const { Template::new(", elke %s jare") }
    }

    fn comma_year_through(&self) -> Option<Template<2>> {
        Some(const { Template::new(", jaar %s na %s") })
    }

    fn comma_starting(&self) -> Template<1> {
        const { Template::new(", beginnende %s") }
    }

    fn days_of_the_week(&self) -> [&'static str; 7] {
        [
            "Sondag",
            "Maandag",
            "Dinsdag",
            "Woensdag",
            "Donderdag",
            "Vrydag",
            "Saterdag",
        ]
    }

    fn months_of_the_year(&self) -> [&'static str; 12] {
        [
            "Januarie",
            "Februarie",
            "Maart",
            "April",
            "Mei",
            "Junie",
            "Julie",
            "Augustus",
            "September",
            "Oktober",
            "November",
            "Desember",
        ]
    }
}
