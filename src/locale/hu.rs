use super::Locale;
use crate::template::Template;

/// Hungarian
#[derive(Debug, Clone, Copy, Default)]
pub struct Hungarian;

impl Locale for Hungarian {
    fn id(&self) -> &'static str {
        "hu"
    }

    fn use_24_hour_time_format_by_default(&self) -> bool {
        true
    }

    fn error_occurred(&self) -> &'static str {
        "Hiba történt a kifejezésleírás generálásakor. Ellenőrizze a cron kifejezés szintaxisát."
    }

    fn at_space(&self) -> &'static str {
        "Ekkor: "
    }

    fn at(&self) -> &'static str {
        "Ekkor:"
    }

    fn space_and(&self) -> &'static str {
        " és"
    }

    fn every_second(&self) -> &'static str {
        "minden másodpercben"
    }

    fn every_minute(&self) -> &'static str {
        "minden percben"
    }

    fn every_hour(&self) -> &'static str {
        "minden órában"
    }

    fn every_minute_between(&self) -> Template<2> {
        const { Template::new("percenként %s és %s között") }
    }

    fn every_n_seconds(&self, _n: &str) -> Template<1> {
        const { Template::new("%s másodpercenként") }
    }

    fn seconds_through_past_the_minute(&self) -> Template<2> {
        const { Template::new("%s. másodpercben %s perc után") }
    }

    fn at_seconds_past_the_minute(&self, _n: &str) -> Template<1> {
        const { Template::new("%s. másodpercben") }
    }

    fn every_n_minutes(&self, _n: &str) -> Template<1> {
        const { Template::new("minden %s. percben") }
    }

    fn minutes_through_past_the_hour(&self) -> Template<2> {
        const { Template::new("%s. percben %s óra után") }
    }

    fn at_minutes_past_the_hour(&self, _n: &str) -> Template<1> {
        const { Template::new("%s. percben") }
    }

    fn every_n_hours(&self, _n: &str) -> Template<1> {
        const { Template::new("minden %s órában") }
    }

    fn between(&self) -> Template<2> {
        const { Template::new("%s és %s között") }
    }

    fn at_time(&self) -> Template<1> {
        const { Template::new("ekkor %s") }
    }

    fn comma_every_day(&self) -> &'static str {
        ", minden nap"
    }

    fn comma_every_n_days_of_the_week(&self, _n: &str) -> Template<1> {
        const { Template::new(", a hét minden %s napján") }
    }

    fn comma_through(&self, _start: &str) -> Template<2> {
        const { Template::new(", %s - %s") }
    }

    fn comma_and_through(&self, _start: &str) -> Template<2> {
        const { Template::new(", és %s - %s") }
    }

    fn ordinals(&self, _day_of_week: &str) -> [&'static str; 5] {
        ["első", "második", "harmadik", "negyedik", "ötödik"]
    }

    fn comma_on_the(&self, _nth: &str, _day_of_week: &str) -> &'static str {
        ", "
    }

    fn space_of_the_month(&self) -> Template<1> {
        const { Template::new(" %s a hónapban") }
    }

    fn last_day(&self) -> &'static str {
        "az utolsó nap"
    }

    fn comma_on_the_last_of_the_month(&self, _day_of_week: &str) -> Template<1> {
        const { Template::new(", a hónap utolsó %s") }
    }

    fn comma_only_on(&self, _day_of_week: &str) -> Template<1> {
        const { Template::new(", csak ekkor: %s") }
    }

    fn comma_and_on(&self) -> Template<1> {
        const { Template::new(", és %s") }
    }

    fn comma_every_n_months(&self, _n: &str) -> Template<1> {
        const { Template::new(", minden %s hónapban") }
    }

    fn comma_only_in(&self) -> Template<1> {
        const { Template::new(", csak ekkor: %s") }
    }

    fn comma_on_the_last_day_of_the_month(&self) -> &'static str {
        ", a hónap utolsó napján"
    }

    fn comma_on_the_last_weekday_of_the_month(&self) -> &'static str {
        ", a hónap utolsó hétköznapján"
    }

    fn comma_days_before_the_last_day_of_the_month(&self, _n: &str) -> Template<1> {
        const { Template::new(", %s nappal a hónap utolsó napja előtt") }
    }

    fn first_weekday(&self) -> &'static str {
        "első hétköznap"
    }

    fn weekday_nearest_day(&self) -> Template<1> {
        const { Template::new("hétköznap legközelebbi nap %s") }
    }

    fn comma_on_the_of_the_month(&self) -> Template<1> {
        const { Template::new(", a hónap %s") }
    }

    fn comma_every_n_days(&self, _n: &str) -> Template<1> {
        const { Template::new(", %s naponként") }
    }

    fn comma_between_days_of_the_month(&self, _range: &str) -> Template<2> {
        const { Template::new(", a hónap %s és %s napja között") }
    }

    fn comma_on_day_of_the_month(&self, _day: &str) -> Template<1> {
        const { Template::new(", a hónap %s napján") }
    }

    fn comma_every_n_years(&self, _n: &str) -> Template<1> {
        const { Template::new(", %s évente") }
    }

    fn comma_starting(&self) -> Template<1> {
        const { Template::new(", %s kezdettel") }
    }

    fn days_of_the_week(&self) -> [&'static str; 7] {
        [
            "vasárnap",
            "hétfő",
            "kedd",
            "szerda",
            "csütörtök",
            "péntek",
            "szombat",
        ]
    }

    fn months_of_the_year(&self) -> [&'static str; 12] {
        [
            "január",
            "február",
            "március",
            "április",
            "május",
            "június",
            "július",
            "augusztus",
            "szeptember",
            "október",
            "november",
            "december",
        ]
    }
}
