use super::Locale;
use crate::template::Template;

/// Catalan
#[derive(Debug, Clone, Copy, Default)]
pub struct Catalan;

impl Locale for Catalan {
    fn id(&self) -> &'static str {
        "ca"
    }

    fn use_24_hour_time_format_by_default(&self) -> bool {
        true
    }

    fn error_occurred(&self) -> &'static str {
        "S'ha produït un error mentres es generava la descripció de l'expressió. Revisi la sintaxi de la expressió de cron."
    }

    fn at_space(&self) -> &'static str {
        "A les "
    }

    fn at(&self) -> &'static str {
        "A les"
    }

    fn space_and(&self) -> &'static str {
        " i"
    }

    fn every_second(&self) -> &'static str {
        "cada segon"
    }

    fn every_minute(&self) -> &'static str {
        "cada minut"
    }

    fn every_hour(&self) -> &'static str {
        "cada hora"
    }

    fn every_minute_between(&self) -> Template<2> {
        const { Template::new("cada minut entre les %s i les %s") }
    }

    fn every_n_seconds(&self, _n: &str) -> Template<1> {
        const { Template::new("cada %s segons") }
    }

    fn seconds_through_past_the_minute(&self) -> Template<2> {
        const { Template::new("En els segons %s al %s de cada minut") }
    }

    fn at_seconds_past_the_minute(&self, _n: &str) -> Template<1> {
        const { Template::new("als %s segonds del minut") }
    }

    fn every_n_minutes(&self, _n: &str) -> Template<1> {
        const { Template::new("cada %s minuts") }
    }

    fn minutes_through_past_the_hour(&self) -> Template<2> {
        const { Template::new("del minut %s al %s passada l'hora") }
    }

    fn at_minutes_past_the_hour(&self, _n: &str) -> Template<1> {
        const { Template::new("als %s minuts de l'hora") }
    }

    fn every_n_hours(&self, _n: &str) -> Template<1> {
        const { Template::new("cada %s hores") }
    }

    fn between(&self) -> Template<2> {
        const { Template::new("entre les %s i les %s") }
    }

    fn at_time(&self) -> Template<1> {
        const { Template::new("a les %s") }
    }

    fn comma_every_day(&self) -> &'static str {
        ", cada dia"
    }

    fn comma_every_n_days_of_the_week(&self, _n: &str) -> Template<1> {
        const { Template::new(", cada %s dies de la setmana") }
    }

    fn comma_through(&self, _start: &str) -> Template<2> {
        const { Template::new(", de %s a %s") }
    }

    fn comma_and_through(&self, _start: &str) -> Template<2> {
        const { Template::new(", i de %s a %s") }
    }

    fn ordinals(&self, _day_of_week: &str) -> [&'static str; 5] {
        ["primer", "segon", "tercer", "quart", "cinquè"]
    }

    fn comma_on_the(&self, _nth: &str, _day_of_week: &str) -> &'static str {
        ", en el "
    }

    fn space_of_the_month(&self) -> Template<1> {
        const { Template::new(" %s del mes") }
    }

    fn last_day(&self) -> &'static str {
        "l'últim dia"
    }

    fn comma_on_the_last_of_the_month(&self, _day_of_week: &str) -> Template<1> {
        const { Template::new(", en l'últim %s del mes") }
    }

    fn comma_only_on(&self, _day_of_week: &str) -> Template<1> {
        const { Template::new(", només el %s") }
    }

    fn comma_and_on(&self) -> Template<1> {
        const { Template::new(", i el %s") }
    }

    fn comma_every_n_months(&self, _n: &str) -> Template<1> {
        const { Template::new(", cada %s mesos") }
    }

    fn comma_only_in(&self) -> Template<1> {
        const { Template::new(", sólo en %s") }
    }

    fn comma_on_the_last_day_of_the_month(&self) -> &'static str {
        ", en l'últim dia del mes"
    }

    fn comma_on_the_last_weekday_of_the_month(&self) -> &'static str {
        ", en l'últim dia de la setmana del mes"
    }

    fn comma_days_before_the_last_day_of_the_month(&self, _n: &str) -> Template<1> {
        const { Template::new(", %s dies abans de l'últim dia del mes") }
    }

    fn first_weekday(&self) -> &'static str {
        "primer dia de la setmana"
    }

    fn weekday_nearest_day(&self) -> Template<1> {
        const { Template::new("dia de la setmana més proper al %s") }
    }

    fn comma_on_the_of_the_month(&self) -> Template<1> {
        const { Template::new(", en el %s del mes") }
    }

    fn comma_every_n_days(&self, _n: &str) -> Template<1> {
        const { Template::new(", cada %s dies") }
    }

    fn comma_between_days_of_the_month(&self, _range: &str) -> Template<2> {
        const { Template::new(", entre els dies %s i %s del mes") }
    }

    fn comma_on_day_of_the_month(&self, _day: &str) -> Template<1> {
        const { Template::new(", el dia %s del mes") }
    }

    fn comma_every_n_years(&self, _n: &str) -> Template<1> {
        const { Template::new(", cada %s anys") }
    }

    fn comma_starting(&self) -> Template<1> {
        const { Template::new(", començant %s") }
    }

    fn days_of_the_week(&self) -> [&'static str; 7] {
        [
            "diumenge",
            "dilluns",
            "dimarts",
            "dimecres",
            "dijous",
            "divendres",
            "dissabte",
        ]
    }

    fn months_of_the_year(&self) -> [&'static str; 12] {
        [
            "gener",
            "febrer",
            "març",
            "abril",
            "maig",
            "juny",
            "juliol",
            "agost",
            "setembre",
            "octubre",
            "novembre",
            "desembre",
        ]
    }
}
