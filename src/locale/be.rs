use super::Locale;
use crate::template::Template;

/// Belarusian
#[derive(Debug, Clone, Copy, Default)]
pub struct Belarusian;

impl Locale for Belarusian {
    fn id(&self) -> &'static str {
        "be"
    }

    fn use_24_hour_time_format_by_default(&self) -> bool {
        false
    }

    fn error_occurred(&self) -> &'static str {
        "Адбылася памылка падчас генерацыі апісання выразы. Праверце сінтаксіс крон-выразы."
    }

    fn at_space(&self) -> &'static str {
        "У "
    }

    fn at(&self) -> &'static str {
        "У"
    }

    fn space_and(&self) -> &'static str {
        " і"
    }

    fn every_second(&self) -> &'static str {
        "кожную секунду"
    }

    fn every_minute(&self) -> &'static str {
        "кожную хвіліну"
    }

    fn every_hour(&self) -> &'static str {
        "кожную гадзіну"
    }

    fn every_minute_between(&self) -> Template<2> {
        const { Template::new("Кожную хвіліну з %s да %s") }
    }

    fn every_n_seconds(&self, _n: &str) -> Template<1> {
        const { Template::new("кожныя %s секунд") }
    }

    fn seconds_through_past_the_minute(&self) -> Template<2> {
        const { Template::new("секунды з %s па %s") }
    }

    fn at_seconds_past_the_minute(&self, _n: &str) -> Template<1> {
        const { Template::new("у %s секунд") }
    }

    fn every_n_minutes(&self, _n: &str) -> Template<1> {
        const { Template::new("кожныя %s хвілін") }
    }

    fn minutes_through_past_the_hour(&self) -> Template<2> {
        const { Template::new("хвіліны з %s па %s") }
    }

    fn at_minutes_past_the_hour(&self, _n: &str) -> Template<1> {
        const { Template::new("у %s хвілін") }
    }

    fn every_n_hours(&self, _n: &str) -> Template<1> {
        const { Template::new("кожныя %s гадзін") }
    }

    fn between(&self) -> Template<2> {
        const { Template::new("з %s па %s") }
    }

    fn at_time(&self) -> Template<1> {
        const { Template::new("у %s") }
    }

    fn comma_every_day(&self) -> &'static str {
        ", кожны дзень"
    }

    fn comma_every_n_days_of_the_week(&self, _n: &str) -> Template<1> {
        const { Template::new(", кожныя %s дзён тыдня") }
    }

    fn comma_through(&self, _start: &str) -> Template<2> {
        const { Template::new(", %s па %s") }
    }

    fn comma_and_through(&self, _start: &str) -> Template<2> {
        const { Template::new(", і %s па %s") }
    }

    fn ordinals(&self, _day_of_week: &str) -> [&'static str; 5] {
        ["першы", "другі", "трэці", "чацвёрты", "пяты"]
    }

    fn comma_on_the(&self, _nth: &str, _day_of_week: &str) -> &'static str {
        ", у "
    }

    fn space_of_the_month(&self) -> Template<1> {
        const { Template::new(" %s месяца") }
    }

    fn last_day(&self) -> &'static str {
        "апошні дзень"
    }

    fn comma_on_the_last_of_the_month(&self, _day_of_week: &str) -> Template<1> {
        const { Template::new(", у апошні %s месяца") }
    }

    fn comma_only_on(&self, _day_of_week: &str) -> Template<1> {
        const { Template::new(", толькі ў %s") }
    }

    fn comma_and_on(&self) -> Template<1> {
        const { Template::new(", і ў %s") }
    }

    fn comma_every_n_months(&self, _n: &str) -> Template<1> {
        const { Template::new(", кожныя %s месяцаў") }
    }

    fn comma_only_in(&self) -> Template<1> {
        const { Template::new(", толькі ў %s") }
    }

    fn comma_on_the_last_day_of_the_month(&self) -> &'static str {
        ", у апошні дзень месяца"
    }

    fn comma_on_the_last_weekday_of_the_month(&self) -> &'static str {
        ", у апошні будні дзень месяца"
    }

    fn comma_days_before_the_last_day_of_the_month(&self, _n: &str) -> Template<1> {
        const { Template::new(", %s дзён да апошняга дня месяца") }
    }

    fn first_weekday(&self) -> &'static str {
        "першы будны дзень"
    }

    fn weekday_nearest_day(&self) -> Template<1> {
        const { Template::new("найбліжэйшы будны дзень да %s") }
    }

    fn comma_on_the_of_the_month(&self) -> Template<1> {
        const { Template::new(", у %s месяцы") }
    }

    fn comma_every_n_days(&self, _n: &str) -> Template<1> {
        const { Template::new(", кожныя %s дзён") }
    }

    fn comma_between_days_of_the_month(&self, _range: &str) -> Template<2> {
        const { Template::new(", з %s па %s лік месяца") }
    }

    fn comma_on_day_of_the_month(&self, _day: &str) -> Template<1> {
        const { Template::new(", у %s лік месяца") }
    }

    fn comma_every_n_years(&self, _n: &str) -> Template<1> {
        const { Template::new(", кожныя %s гадоў") }
    }

    fn comma_starting(&self) -> Template<1> {
        const { Template::new(", пачатак %s") }
    }

    fn days_of_the_week(&self) -> [&'static str; 7] {
        [
            "нядзеля",
            "панядзелак",
            "аўторак",
            "серада",
            "чацвер",
            "пятніца",
            "субота",
        ]
    }

    fn months_of_the_year(&self) -> [&'static str; 12] {
        [
            "студзень",
            "люты",
            "сакавік",
            "красавік",
            "травень",
            "чэрвень",
            "ліпень",
            "жнівень",
            "верасень",
            "кастрычнік",
            "лістапад",
            "снежань",
        ]
    }
}
