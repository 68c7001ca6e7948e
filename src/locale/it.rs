use super::Locale;
use crate::template::Template;

/// Italian
#[derive(Debug, Clone, Copy, Default)]
pub struct Italian;

impl Locale for Italian {
    fn id(&self) -> &'static str {
        "it"
    }

    fn use_24_hour_time_format_by_default(&self) -> bool {
        true
    }

    fn error_occurred(&self) -> &'static str {
        "È verificato un errore durante la generazione la descrizione espressione. Controllare la sintassi delle espressioni cron."
    }

    fn at_space(&self) -> &'static str {
        "Alle "
    }

    fn at(&self) -> &'static str {
        "Alle"
    }

    fn space_and(&self) -> &'static str {
        " e"
    }

    fn every_second(&self) -> &'static str {
        "ogni secondo"
    }

    fn every_minute(&self) -> &'static str {
        "ogni minuto"
    }

    fn every_hour(&self) -> &'static str {
        "ogni ora"
    }

    fn every_minute_between(&self) -> Template<2> {
        const { Template::new("Ogni minuto tra le %s e le %s") }
    }

    fn every_n_seconds(&self, _n: &str) -> Template<1> {
        const { Template::new("ogni %s secondi") }
    }

    fn seconds_through_past_the_minute(&self) -> Template<2> {
        const { Template::new("secondi %s al %s oltre il minuto") }
    }

    fn at_seconds_past_the_minute(&self, _n: &str) -> Template<1> {
        const { Template::new("al %s secondo passato il minuto") }
    }

    fn every_n_minutes(&self, _n: &str) -> Template<1> {
        const { Template::new("ogni %s minuti") }
    }

    fn minutes_through_past_the_hour(&self) -> Template<2> {
        const { Template::new("minuti %s al %s dopo l'ora") }
    }

    fn at_minutes_past_the_hour(&self, _n: &str) -> Template<1> {
        const { Template::new("al %s minuto passata l'ora") }
    }

    fn every_n_hours(&self, _n: &str) -> Template<1> {
        const { Template::new("ogni %s ore") }
    }

    fn between(&self) -> Template<2> {
        const { Template::new("tra le %s e le %s") }
    }

    fn at_time(&self) -> Template<1> {
        const { Template::new("alle %s") }
    }

    fn comma_every_day(&self) -> &'static str {
        ", ogni giorno"
    }

    fn comma_every_n_days_of_the_week(&self, _n: &str) -> Template<1> {
        const { Template::new(", ogni %s giorni della settimana") }
    }

    fn comma_through(&self, _start: &str) -> Template<2> {
        const { Template::new(", %s al %s") }
    }

    fn comma_and_through(&self, _start: &str) -> Template<2> {
        const { Template::new(", e %s al %s") }
    }

    fn ordinals(&self, _day_of_week: &str) -> [&'static str; 5] {
        ["primo", "secondo", "terzo", "quarto", "quinto"]
    }

    fn comma_on_the(&self, _nth: &str, _day_of_week: &str) -> &'static str {
        ", il "
    }

    fn space_of_the_month(&self) -> Template<1> {
        const { Template::new(" %s del mese") }
    }

    fn last_day(&self) -> &'static str {
        "l'ultimo giorno"
    }

    fn comma_on_the_last_of_the_month(&self, _day_of_week: &str) -> Template<1> {
        const { Template::new(", l'ultimo %s del mese") }
    }

    fn comma_only_on(&self, _day_of_week: &str) -> Template<1> {
        const { Template::new(", solo il %s") }
    }

    fn comma_and_on(&self) -> Template<1> {
        const { Template::new(", e il %s") }
    }

    fn comma_every_n_months(&self, _n: &str) -> Template<1> {
        const { Template::new(", ogni %s mesi") }
    }

    fn comma_only_in(&self) -> Template<1> {
        const { Template::new(", solo in %s") }
    }

    fn comma_on_the_last_day_of_the_month(&self) -> &'static str {
        ", l'ultimo giorno del mese"
    }

    fn comma_on_the_last_weekday_of_the_month(&self) -> &'static str {
        ", nell'ultima settimana del mese"
    }

    fn comma_days_before_the_last_day_of_the_month(&self, _n: &str) -> Template<1> {
        const { Template::new(", %s giorni prima dell'ultimo giorno del mese") }
    }

    fn first_weekday(&self) -> &'static str {
        "primo giorno della settimana"
    }

    fn weekday_nearest_day(&self) -> Template<1> {
        const { Template::new("giorno della settimana più vicino al %s") }
    }

    fn comma_on_the_of_the_month(&self) -> Template<1> {
        const { Template::new(", il %s del mese") }
    }

    fn comma_every_n_days(&self, _n: &str) -> Template<1> {
        const { Template::new(", ogni %s giorni") }
    }

    fn comma_between_days_of_the_month(&self, _range: &str) -> Template<2> {
        const { Template::new(", tra il giorno %s e %s del mese") }
    }

    fn comma_on_day_of_the_month(&self, _day: &str) -> Template<1> {
        const { Template::new(", il giorno %s del mese") }
    }

    fn comma_every_n_years(&self, _n: &str) -> Template<1> {
        const { Template::new(", ogni %s anni") }
    }

    fn comma_starting(&self) -> Template<1> {
        const { Template::new(", a partire %s") }
    }

    fn days_of_the_week(&self) -> [&'static str; 7] {
        [
            "domenica",
            "lunedì",
            "martedì",
            "mercoledì",
            "giovedì",
            "venerdì",
            "sabato",
        ]
    }

    fn months_of_the_year(&self) -> [&'static str; 12] {
        [
            "gennaio",
            "febbraio",
            "marzo",
            "aprile",
            "maggio",
            "giugno",
            "luglio",
            "agosto",
            "settembre",
            "ottobre",
            "novembre",
            "dicembre",
        ]
    }
}
