use super::Locale;
use crate::template::Template;

/// Spanish
#[derive(Debug, Clone, Copy, Default)]
pub struct Spanish;

impl Locale for Spanish {
    fn id(&self) -> &'static str {
        "es"
    }

    fn use_24_hour_time_format_by_default(&self) -> bool {
        true
    }

    fn error_occurred(&self) -> &'static str {
        "Ocurrió un error mientras se generaba la descripción de la expresión. Revise la sintaxis de la expresión de cron."
    }

    fn at_space(&self) -> &'static str {
        "A las "
    }

    fn at(&self) -> &'static str {
        "A las"
    }

    fn space_and(&self) -> &'static str {
        " y"
    }

    fn every_second(&self) -> &'static str {
        "cada segundo"
    }

    fn every_minute(&self) -> &'static str {
        "cada minuto"
    }

    fn every_hour(&self) -> &'static str {
        "cada hora"
    }

    fn every_minute_between(&self) -> Template<2> {
        const { Template::new("cada minuto entre las %s y las %s") }
    }

    fn every_n_seconds(&self, _n: &str) -> Template<1> {
        const { Template::new("cada %s segundos") }
    }

    fn seconds_through_past_the_minute(&self) -> Template<2> {
        const { Template::new("En los segundos %s al %s de cada minuto") }
    }

    fn at_seconds_past_the_minute(&self, _n: &str) -> Template<1> {
        const { Template::new("a los %s segundos del minuto") }
    }

    fn every_n_minutes(&self, _n: &str) -> Template<1> {
        const { Template::new("cada %s minutos") }
    }

    fn minutes_through_past_the_hour(&self) -> Template<2> {
        const { Template::new("del minuto %s al %s pasada la hora") }
    }

    fn at_minutes_past_the_hour(&self, _n: &str) -> Template<1> {
        const { Template::new("a los %s minutos de la hora") }
    }

    fn every_n_hours(&self, _n: &str) -> Template<1> {
        const { Template::new("cada %s horas") }
    }

    fn between(&self) -> Template<2> {
        const { Template::new("entre las %s y las %s") }
    }

    fn at_time(&self) -> Template<1> {
        const { Template::new("a las %s") }
    }

    fn comma_every_day(&self) -> &'static str {
        ", cada día"
    }

    fn comma_every_n_days_of_the_week(&self, _n: &str) -> Template<1> {
        const { Template::new(", cada %s días de la semana") }
    }

    fn comma_through(&self, _start: &str) -> Template<2> {
        const { Template::new(", de %s a %s") }
    }

    fn comma_and_through(&self, _start: &str) -> Template<2> {
        const { Template::new(", y de %s a %s") }
    }

    fn ordinals(&self, _day_of_week: &str) -> [&'static str; 5] {
        ["primero", "segundo", "tercer", "cuarto", "quinto"]
    }

    fn comma_on_the(&self, _nth: &str, _day_of_week: &str) -> &'static str {
        ", en el "
    }

    fn space_of_the_month(&self) -> Template<1> {
        const { Template::new(" %s del mes") }
    }

    fn last_day(&self) -> &'static str {
        "el último día"
    }

    fn comma_on_the_last_of_the_month(&self, _day_of_week: &str) -> Template<1> {
        const { Template::new(", en el último %s del mes") }
    }

    fn comma_only_on(&self, _day_of_week: &str) -> Template<1> {
        const { Template::new(", sólo el %s") }
    }

    fn comma_and_on(&self) -> Template<1> {
        const { Template::new(", y el %s") }
    }

    fn comma_every_n_months(&self, _n: &str) -> Template<1> {
        const { Template::new(", cada %s meses") }
    }

    fn comma_only_in(&self) -> Template<1> {
        const { Template::new(", sólo en %s") }
    }

    fn comma_on_the_last_day_of_the_month(&self) -> &'static str {
        ", en el último día del mes"
    }

    fn comma_on_the_last_weekday_of_the_month(&self) -> &'static str {
        ", en el último día de la semana del mes"
    }

    fn comma_days_before_the_last_day_of_the_month(&self, _n: &str) -> Template<1> {
        const { Template::new(", %s días antes del último día del mes") }
    }

    fn first_weekday(&self) -> &'static str {
        "primer día de la semana"
    }

    fn weekday_nearest_day(&self) -> Template<1> {
        const { Template::new("día de la semana más próximo al %s") }
    }

    fn comma_on_the_of_the_month(&self) -> Template<1> {
        const { Template::new(", en el %s del mes") }
    }

    fn comma_every_n_days(&self, _n: &str) -> Template<1> {
        const { Template::new(", cada %s días") }
    }

    fn comma_between_days_of_the_month(&self, _range: &str) -> Template<2> {
        const { Template::new(", entre los días %s y %s del mes") }
    }

    fn comma_on_day_of_the_month(&self, _day: &str) -> Template<1> {
        const { Template::new(", el día %s del mes") }
    }

    fn comma_every_n_years(&self, _n: &str) -> Template<1> {
        const { Template::new(", cada %s años") }
    }

    fn comma_starting(&self) -> Template<1> {
        const { Template::new(", comenzando %s") }
    }

    fn days_of_the_week(&self) -> [&'static str; 7] {
        [
            "domingo",
            "lunes",
            "martes",
            "miércoles",
            "jueves",
            "viernes",
            "sábado",
        ]
    }

    fn months_of_the_year(&self) -> [&'static str; 12] {
        [
            "enero",
            "febrero",
            "marzo",
            "abril",
            "mayo",
            "junio",
            "julio",
            "agosto",
            "septiembre",
            "octubre",
            "noviembre",
            "diciembre",
        ]
    }
}
