use super::Locale;
use crate::template::Template;

/// Slovenian
#[derive(Debug, Clone, Copy, Default)]
pub struct Slovenian;

impl Locale for Slovenian {
    fn id(&self) -> &'static str {
        "sl"
    }

    fn use_24_hour_time_format_by_default(&self) -> bool {
        true
    }

    fn error_occurred(&self) -> &'static str {
        "Pri generiranju opisa izraza je prišlo do napake. Preverite sintakso izraza cron."
    }

    fn at_space(&self) -> &'static str {
        "Ob "
    }

    fn at(&self) -> &'static str {
        "Ob"
    }

    fn space_and(&self) -> &'static str {
        " in"
    }

    fn every_second(&self) -> &'static str {
        "vsako sekundo"
    }

    fn every_minute(&self) -> &'static str {
        "vsako minuto"
    }

    fn every_hour(&self) -> &'static str {
        "vsako uro"
    }

    fn every_minute_between(&self) -> Template<2> {
        const { Template::new("Vsako minuto od %s do %s") }
    }

    fn every_n_seconds(&self, _n: &str) -> Template<1> {
        const { Template::new("vsakih %s sekund") }
    }

    fn seconds_through_past_the_minute(&self) -> Template<2> {
        const { Template::new("sekunde od %s do %s") }
    }

    fn at_seconds_past_the_minute(&self, _n: &str) -> Template<1> {
        const { Template::new("ob %s.") }
    }

    fn every_n_minutes(&self, _n: &str) -> Template<1> {
        const { Template::new("vsakih %s minut") }
    }

    fn minutes_through_past_the_hour(&self) -> Template<2> {
        const { Template::new("minute od %s do %s") }
    }

    fn at_minutes_past_the_hour(&self, _n: &str) -> Template<1> {
        const { Template::new("ob %s.") }
    }

    fn every_n_hours(&self, _n: &str) -> Template<1> {
        const { Template::new("vsakih %s ur") }
    }

    fn between(&self) -> Template<2> {
        const { Template::new("od %s do %s") }
    }

    fn at_time(&self) -> Template<1> {
        const { Template::new("ob %s") }
    }

    fn comma_every_day(&self) -> &'static str {
        ", vsak dan"
    }

    fn comma_every_n_days_of_the_week(&self, _n: &str) -> Template<1> {
        const { Template::new(", vsakih %s dni v tednu") }
    }

    fn comma_through(&self, _start: &str) -> Template<2> {
        const { Template::new(", od %s do %s") }
    }

    fn comma_and_through(&self, _start: &str) -> Template<2> {
        const { Template::new(", in od %s do %s") }
    }

    fn ordinals(&self, _day_of_week: &str) -> [&'static str; 5] {
        ["prvi", "drugi", "tretji", "četrti", "peti"]
    }

    fn comma_on_the(&self, _nth: &str, _day_of_week: &str) -> &'static str {
        ", "
    }

    fn space_of_the_month(&self) -> Template<1> {
        const { Template::new(" %s v mesecu") }
    }

    fn last_day(&self) -> &'static str {
        "zadnjič"
    }

    fn comma_on_the_last_of_the_month(&self, _day_of_week: &str) -> Template<1> {
        const { Template::new(", zadnji %s v mesecu") }
    }

    fn comma_only_on(&self, _day_of_week: &str) -> Template<1> {
        const { Template::new(", samo v %s") }
    }

    fn comma_and_on(&self) -> Template<1> {
        const { Template::new("in naprej %s") }
    }

    fn comma_every_n_months(&self, _n: &str) -> Template<1> {
        const { Template::new(", vsakih %s mesecev") }
    }

    fn comma_only_in(&self) -> Template<1> {
        const { Template::new(", samo v %s") }
    }

    fn comma_on_the_last_day_of_the_month(&self) -> &'static str {
        ", zadnji %s v mesecu"
    }

    fn comma_on_the_last_weekday_of_the_month(&self) -> &'static str {
        ", zadnji delovni dan v mesecu"
    }

    fn comma_days_before_the_last_day_of_the_month(&self, _n: &str) -> Template<1> {
        const { Template::new(", %s dni pred koncem meseca") }
    }

    fn first_weekday(&self) -> &'static str {
        "prvi delovni dan"
    }

    fn weekday_nearest_day(&self) -> Template<1> {
        const { Template::new("delovni dan, najbližji %s. dnevu") }
    }

    fn comma_on_the_of_the_month(&self) -> Template<1> {
        const { Template::new(", %s v mesecu") }
    }

    fn comma_every_n_days(&self, _n: &str) -> Template<1> {
        const { Template::new(", vsakih %s dni") }
    }

    fn comma_between_days_of_the_month(&self, _range: &str) -> Template<2> {
        const { Template::new(", od %s. do %s. dne v mesecu") }
    }

    fn comma_on_day_of_the_month(&self, _day: &str) -> Template<1> {
        const { Template::new(", %s. dan v mesecu") }
    }

    fn comma_every_n_years(&self, _n: &str) -> Template<1> {
        const { Template::new(", vsakih %s let") }
    }

    fn comma_starting(&self) -> Template<1> {
        const { Template::new(", začenši %s") }
    }

    fn days_of_the_week(&self) -> [&'static str; 7] {
        [
            "Nedelja",
            "Ponedeljek",
            "Torek",
            "Sreda",
            "Četrtek",
            "Petek",
            "Sobota",
        ]
    }

    fn months_of_the_year(&self) -> [&'static str; 12] {
        [
            "januar",
            "februar",
            "marec",
            "april",
            "maj",
            "junij",
            "julij",
            "avgust",
            "september",
            "oktober",
            "november",
            "december",
        ]
    }
}
