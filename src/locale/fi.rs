use super::Locale;
use crate::template::Template;

/// Finnish
#[derive(Debug, Clone, Copy, Default)]
pub struct Finnish;

impl Locale for Finnish {
    fn id(&self) -> &'static str {
        "fi"
    }

    fn use_24_hour_time_format_by_default(&self) -> bool {
        true
    }

    fn error_occurred(&self) -> &'static str {
        "Virhe kuvauksen generoinnissa. Tarkista cron-syntaksi."
    }

    fn at_space(&self) -> &'static str {
        "Klo "
    }

    fn at(&self) -> &'static str {
        "Klo"
    }

    fn space_and(&self) -> &'static str {
        " ja"
    }

    fn every_second(&self) -> &'static str {
        "joka sekunti"
    }

    fn every_minute(&self) -> &'static str {
        "joka minuutti"
    }

    fn every_hour(&self) -> &'static str {
        "joka tunti"
    }

    fn every_minute_between(&self) -> Template<2> {
        const { Template::new("joka minuutti %s - %s välillä") }
    }

    fn every_n_seconds(&self, _n: &str) -> Template<1> {
        const { Template::new("joka %s. sekunti") }
    }

    fn seconds_through_past_the_minute(&self) -> Template<2> {
        const { Template::new("joka minuutti sekunttien %s - %s välillä") }
    }

    fn at_seconds_past_the_minute(&self, _n: &str) -> Template<1> {
        const { Template::new("%s sekunnnin jälkeen") }
    }

    fn every_n_minutes(&self, _n: &str) -> Template<1> {
        const { Template::new("joka %s. minuutti") }
    }

    fn minutes_through_past_the_hour(&self) -> Template<2> {
        const { Template::new("joka tunti minuuttien %s - %s välillä") }
    }

    fn at_minutes_past_the_hour(&self, _n: &str) -> Template<1> {
        const { Template::new("%s minuuttia yli") }
    }

    fn at_minutes_past_the_hour_gt20(&self) -> Option<Template<1>> {
        Some(const { Template::new("%s minuuttia yli") })
    }

    fn every_n_hours(&self, _n: &str) -> Template<1> {
        const { Template::new("joka %s. tunti") }
    }

    fn between(&self) -> Template<2> {
        const { Template::new("%s - %s välillä") }
    }

    fn at_time(&self) -> Template<1> {
        const { Template::new("klo %s") }
    }

    fn comma_every_day(&self) -> &'static str {
        ", joka päivä"
    }

    fn comma_every_n_days_of_the_week(&self, _n: &str) -> Template<1> {
        const { Template::new(", joka %s. viikonpäivä") }
    }

    fn comma_through(&self, _start: &str) -> Template<2> {
        const { Template::new(", %s - %s") }
    }

    fn comma_and_through(&self, _start: &str) -> Template<2> {
        const { Template::new(", %s - %s") }
    }

    fn ordinals(&self, _day_of_week: &str) -> [&'static str; 5] {
        ["ensimmäinen", "toinen", "kolmas", "neljäs", "viides"]
    }

    fn comma_on_the(&self, _nth: &str, _day_of_week: &str) -> &'static str {
        ","
    }

    fn space_of_the_month(&self) -> Template<1> {
        const { Template::new(" %s kuukaudessa") }
    }

    fn last_day(&self) -> &'static str {
        "viimeinen päivä"
    }

    fn comma_on_the_last_of_the_month(&self, _day_of_week: &str) -> Template<1> {
        const { Template::new(", kuukauden viimeinen %s") }
    }

    fn comma_only_on(&self, _day_of_week: &str) -> Template<1> {
        const { Template::new(", vain %s") }
    }

    fn comma_and_on(&self) -> Template<1> {
        const { Template::new(", ja edelleen %s") }
    }

    fn comma_every_n_months(&self, _n: &str) -> Template<1> {
        const { Template::new(", joka %s. kuukausi") }
    }

    fn comma_only_in(&self) -> Template<1> {
        const { Template::new(", vain %s") }
    }

    fn comma_on_the_last_day_of_the_month(&self) -> &'static str {
        ", kuukauden viimeisenä päivänä"
    }

    fn comma_on_the_last_weekday_of_the_month(&self) -> &'static str {
        ", kuukauden viimeisenä viikonpäivänä"
    }

    fn comma_days_before_the_last_day_of_the_month(&self, _n: &str) -> Template<1> {
        const { Template::new(", %s päivää ennen kuukauden viimeistä päivää") }
    }

    fn first_weekday(&self) -> &'static str {
        "ensimmäinen viikonpäivä"
    }

    fn weekday_nearest_day(&self) -> Template<1> {
        const { Template::new("viikonpäivä lähintä %s päivää") }
    }

    fn comma_on_the_of_the_month(&self) -> Template<1> {
        const { Template::new(", kuukauden %s") }
    }

    fn comma_every_n_days(&self, _n: &str) -> Template<1> {
        const { Template::new(", joka %s. päivä") }
    }

    fn comma_between_days_of_the_month(&self, _range: &str) -> Template<2> {
        const { Template::new(", kuukauden päivien %s ja %s välillä") }
    }

    fn comma_on_day_of_the_month(&self, _day: &str) -> Template<1> {
        const { Template::new(", kuukauden %s päivä") }
    }

    fn comma_every_n_years(&self, _n: &str) -> Template<1> {
        const { Template::new(", joka %s. vuosi") }
    }

    fn comma_starting(&self) -> Template<1> {
        const { Template::new(", alkaen %s") }
    }

    fn days_of_the_week(&self) -> [&'static str; 7] {
        [
            "sunnuntai",
            "maanantai",
            "tiistai",
            "keskiviikko",
            "torstai",
            "perjantai",
            "lauantai",
        ]
    }

    fn months_of_the_year(&self) -> [&'static str; 12] {
        [
            "tammikuu",
            "helmikuu",
            "maaliskuu",
            "huhtikuu",
            "toukokuu",
            "kesäkuu",
            "heinäkuu",
            "elokuu",
            "syyskuu",
            "lokakuu",
            "marraskuu",
            "joulukuu",
        ]
    }
}
