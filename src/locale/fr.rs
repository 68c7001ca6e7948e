use super::Locale;
use crate::template::Template;

/// French
#[derive(Debug, Clone, Copy, Default)]
pub struct French;

impl Locale for French {
    fn id(&self) -> &'static str {
        "fr"
    }

    fn use_24_hour_time_format_by_default(&self) -> bool {
        true
    }

    fn error_occurred(&self) -> &'static str {
        "Une erreur est survenue en générant la description de l'expression cron. Vérifiez sa syntaxe."
    }

    fn at_space(&self) -> &'static str {
        "À "
    }

    fn at(&self) -> &'static str {
        "À"
    }

    fn space_and(&self) -> &'static str {
        " et"
    }

    fn every_second(&self) -> &'static str {
        "toutes les secondes"
    }

    fn every_minute(&self) -> &'static str {
        "toutes les minutes"
    }

    fn every_hour(&self) -> &'static str {
        "toutes les heures"
    }

    fn every_minute_between(&self) -> Template<2> {
        const { Template::new("Toutes les minutes entre %s et %s") }
    }

    fn every_n_seconds(&self, _n: &str) -> Template<1> {
        const { Template::new("toutes les %s secondes") }
    }

    fn seconds_through_past_the_minute(&self) -> Template<2> {
        const { Template::new("les secondes entre %s et %s après la minute") }
    }

    fn at_seconds_past_the_minute(&self, _n: &str) -> Template<1> {
        const { Template::new("%s secondes après la minute") }
    }

    fn every_n_minutes(&self, _n: &str) -> Template<1> {
        const { Template::new("toutes les %s minutes") }
    }

    fn minutes_through_past_the_hour(&self) -> Template<2> {
        const { Template::new("les minutes entre %s et %s après l'heure") }
    }

    fn at_minutes_past_the_hour(&self, _n: &str) -> Template<1> {
        const { Template::new("%s minutes après l'heure") }
    }

    fn every_n_hours(&self, _n: &str) -> Template<1> {
        const { Template::new("toutes les %s heures") }
    }

    fn between(&self) -> Template<2> {
        const { Template::new("de %s à %s") }
    }

    fn at_time(&self) -> Template<1> {
        const { Template::new("%s") }
    }

    fn comma_every_day(&self) -> &'static str {
        ", tous les jours"
    }

    fn comma_every_n_days_of_the_week(&self, _n: &str) -> Template<1> {
        const { Template::new(", tous les %s jours de la semaine") }
    }

    fn comma_through(&self, _start: &str) -> Template<2> {
        const { Template::new(", de %s à %s") }
    }

    fn comma_and_through(&self, _start: &str) -> Template<2> {
        const { Template::new(", et de %s à %s") }
    }

    fn ordinals(&self, _day_of_week: &str) -> [&'static str; 5] {
        ["premier", "second", "troisième", "quatrième", "cinquième"]
    }

    fn comma_on_the(&self, _nth: &str, _day_of_week: &str) -> &'static str {
        ", le "
    }

    fn space_of_the_month(&self) -> Template<1> {
        const { Template::new(" %s du mois") }
    }

    fn last_day(&self) -> &'static str {
        "le dernier jour"
    }

    fn comma_on_the_last_of_the_month(&self, _day_of_week: &str) -> Template<1> {
        const { Template::new(", le dernier %s du mois") }
    }

    fn comma_only_on(&self, _day_of_week: &str) -> Template<1> {
        const { Template::new(", uniquement le %s") }
    }

    fn comma_and_on(&self) -> Template<1> {
        const { Template::new(", et %s") }
    }

    fn comma_every_n_months(&self, _n: &str) -> Template<1> {
        const { Template::new(", tous les %s mois") }
    }

    fn comma_only_in(&self) -> Template<1> {
        const { Template::new(", uniquement en %s") }
    }

    fn comma_on_the_last_day_of_the_month(&self) -> &'static str {
        ", le dernier jour du mois"
    }

    fn comma_on_the_last_weekday_of_the_month(&self) -> &'static str {
        ", le dernier jour ouvrable du mois"
    }

    fn comma_days_before_the_last_day_of_the_month(&self, _n: &str) -> Template<1> {
        const { Template::new(", %s jours avant le dernier jour du mois") }
    }

    fn first_weekday(&self) -> &'static str {
        "premier jour ouvrable"
    }

    fn weekday_nearest_day(&self) -> Template<1> {
        const { Template::new("jour ouvrable le plus proche du %s") }
    }

    fn comma_on_the_of_the_month(&self) -> Template<1> {
        const { Template::new(", le %s du mois") }
    }

    fn comma_every_n_days(&self, _n: &str) -> Template<1> {
        const { Template::new(", tous les %s jours") }
    }

    fn comma_between_days_of_the_month(&self, _range: &str) -> Template<2> {
        const { Template::new(", du %s au %s du mois") }
    }

    fn comma_on_day_of_the_month(&self, _day: &str) -> Template<1> {
        const { Template::new(", le %s du mois") }
    }

    fn comma_every_n_years(&self, _n: &str) -> Template<1> {
        const { Template::new(", tous les %s ans") }
    }

    fn comma_starting(&self) -> Template<1> {
        const { Template::new(", à partir de %s") }
    }

    fn days_of_the_week(&self) -> [&'static str; 7] {
        [
            "dimanche",
            "lundi",
            "mardi",
            "mercredi",
            "jeudi",
            "vendredi",
            "samedi",
        ]
    }

    fn months_of_the_year(&self) -> [&'static str; 12] {
        [
            "janvier",
            "février",
            "mars",
            "avril",
            "mai",
            "juin",
            "juillet",
            "août",
            "septembre",
            "octobre",
            "novembre",
            "décembre",
        ]
    }

    fn concise_replacements(&self) -> &'static [(&'static str, &'static str)] {
        &[("de le", "du")]
    }
}
