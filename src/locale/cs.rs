use super::Locale;
use crate::template::Template;

/// Czech
#[derive(Debug, Clone, Copy, Default)]
pub struct Czech;

impl Locale for Czech {
    fn id(&self) -> &'static str {
        "cs"
    }

    fn use_24_hour_time_format_by_default(&self) -> bool {
        true
    }

    fn error_occurred(&self) -> &'static str {
        "Při vytváření popisu došlo k chybě. Zkontrolujte prosím správnost syntaxe cronu."
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
        "každou sekundu"
    }

    fn every_minute(&self) -> &'static str {
        "každou minutu"
    }

    fn every_hour(&self) -> &'static str {
        "každou hodinu"
    }

    fn every_minute_between(&self) -> Template<2> {
        const { Template::new("Každou minutu mezi %s a %s") }
    }

    fn every_n_seconds(&self, _n: &str) -> Template<1> {
        const { Template::new("každých %s sekund") }
    }

    fn seconds_through_past_the_minute(&self) -> Template<2> {
        const { Template::new("sekundy od %s do %s") }
    }

    fn at_seconds_past_the_minute(&self, _n: &str) -> Template<1> {
        const { Template::new("v %s sekund") }
    }

    fn every_n_minutes(&self, _n: &str) -> Template<1> {
        const { Template::new("každých %s minut") }
    }

    fn minutes_through_past_the_hour(&self) -> Template<2> {
        const { Template::new("minuty od %s do %s") }
    }

    fn at_minutes_past_the_hour(&self, _n: &str) -> Template<1> {
        const { Template::new("v %s minut") }
    }

    fn every_n_hours(&self, _n: &str) -> Template<1> {
        const { Template::new("každých %s hodin") }
    }

    fn between(&self) -> Template<2> {
        const { Template::new("mezi %s a %s") }
    }

    fn at_time(&self) -> Template<1> {
        const { Template::new("v %s") }
    }

    fn comma_every_day(&self) -> &'static str {
        ", každý den"
    }

    fn comma_every_n_days_of_the_week(&self, _n: &str) -> Template<1> {
        const { Template::new(", každých %s dní v týdnu") }
    }

    fn comma_through(&self, _start: &str) -> Template<2> {
        const { Template::new(", od %s do %s") }
    }

    fn comma_and_through(&self, _start: &str) -> Template<2> {
        const { Template::new(", a od %s do %s") }
    }

    fn ordinals(&self, _day_of_week: &str) -> [&'static str; 5] {
        ["první", "druhý", "třetí", "čtvrtý", "pátý"]
    }

    fn comma_on_the(&self, _nth: &str, _day_of_week: &str) -> &'static str {
        ", "
    }

    fn space_of_the_month(&self) -> Template<1> {
        const { Template::new(" %s v měsíci") }
    }

    fn last_day(&self) -> &'static str {
        "poslední den"
    }

    fn comma_on_the_last_of_the_month(&self, _day_of_week: &str) -> Template<1> {
        const { Template::new(", poslední %s v měsíci") }
    }

    fn comma_only_on(&self, _day_of_week: &str) -> Template<1> {
        const { Template::new(", pouze v %s") }
    }

    fn comma_and_on(&self) -> Template<1> {
        const { Template::new(", a v %s") }
    }

    fn comma_every_n_months(&self, _n: &str) -> Template<1> {
        const { Template::new(", každých %s měsíců") }
    }

    fn comma_only_in(&self) -> Template<1> {
        const { Template::new(", pouze v %s") }
    }

    fn comma_on_the_last_day_of_the_month(&self) -> &'static str {
        ", poslední den v měsíci"
    }

    fn comma_on_the_last_weekday_of_the_month(&self) -> &'static str {
        ", poslední pracovní den v měsíci"
    }

    fn comma_days_before_the_last_day_of_the_month(&self, _n: &str) -> Template<1> {
        const { Template::new(", %s dní před posledním dnem v měsíci") }
    }

    fn first_weekday(&self) -> &'static str {
        "první pracovní den"
    }

    fn weekday_nearest_day(&self) -> Template<1> {
        const { Template::new("pracovní den nejblíže %s. dni") }
    }

    fn comma_on_the_of_the_month(&self) -> Template<1> {
        const { Template::new(", v %s v měsíci") }
    }

    fn comma_every_n_days(&self, _n: &str) -> Template<1> {
        const { Template::new(", každých %s dnů") }
    }

    fn comma_between_days_of_the_month(&self, _range: &str) -> Template<2> {
        const { Template::new(", mezi dny %s a %s v měsíci") }
    }

    fn comma_on_day_of_the_month(&self, _day: &str) -> Template<1> {
        const { Template::new(", %s. den v měsíci") }
    }

    fn comma_every_n_years(&self, _n: &str) -> Template<1> {
        const { Template::new(", každých %s roků") }
    }

    fn comma_starting(&self) -> Template<1> {
        const { Template::new(", začínající %s") }
    }

    fn days_of_the_week(&self) -> [&'static str; 7] {
        ["Neděle", "Pondělí", "Úterý", "Středa", "Čtvrtek", "Pátek", "Sobota"]
    }

    fn months_of_the_year(&self) -> [&'static str; 12] {
        [
            "Leden",
            "Únor",
            "Březen",
            "Duben",
            "Květen",
            "Červen",
            "Červenec",
            "Srpen",
            "Září",
            "Říjen",
            "Listopad",
            "Prosinec",
        ]
    }
}
