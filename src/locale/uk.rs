use super::Locale;
use crate::template::Template;

/// Ukrainian
#[derive(Debug, Clone, Copy, Default)]
pub struct Ukrainian;

impl Locale for Ukrainian {
    fn id(&self) -> &'static str {
        "uk"
    }

    fn use_24_hour_time_format_by_default(&self) -> bool {
        true
    }

    fn error_occurred(&self) -> &'static str {
        "ВІдбулася помилка підчас генерації опису. Перевірта правильність написання cron виразу."
    }

    fn at_space(&self) -> &'static str {
        "О "
    }

    fn at(&self) -> &'static str {
        "О"
    }

    fn space_and(&self) -> &'static str {
        " та"
    }

    fn every_second(&self) -> &'static str {
        "Щосекунди"
    }

    fn every_minute(&self) -> &'static str {
        "щохвилини"
    }

    fn every_hour(&self) -> &'static str {
        "щогодини"
    }

    fn every_minute_between(&self) -> Template<2> {
        const { Template::new("Щохвилини між %s та %s") }
    }

    fn every_n_seconds(&self, _n: &str) -> Template<1> {
        const { Template::new("кожні %s секунд") }
    }

    fn seconds_through_past_the_minute(&self) -> Template<2> {
        const { Template::new("з %s по %s секунду") }
    }

    fn at_seconds_past_the_minute(&self, _n: &str) -> Template<1> {
        const { Template::new("о %s секунді") }
    }

    fn every_n_minutes(&self, _n: &str) -> Template<1> {
        const { Template::new("кожні %s хвилин") }
    }

    fn minutes_through_past_the_hour(&self) -> Template<2> {
        const { Template::new("з %s по %s хвилину") }
    }

    fn at_minutes_past_the_hour(&self, _n: &str) -> Template<1> {
        const { Template::new("о %s хвилині") }
    }

    fn every_n_hours(&self, _n: &str) -> Template<1> {
        const { Template::new("кожні %s годин") }
    }

    fn between(&self) -> Template<2> {
        const { Template::new("між %s та %s") }
    }

    fn at_time(&self) -> Template<1> {
        const { Template::new("о %s") }
    }

    fn comma_every_day(&self) -> &'static str {
        ", щоденно"
    }

    fn comma_every_n_days_of_the_week(&self, _n: &str) -> Template<1> {
        const { Template::new(", кожен %s день тижня") }
    }

    fn comma_through(&self, _start: &str) -> Template<2> {
        const { Template::new(", %s по %s") }
    }

    fn comma_and_through(&self, _start: &str) -> Template<2> {
        const { Template::new(", та %s по %s") }
    }

    fn ordinals(&self, _day_of_week: &str) -> [&'static str; 5] {
        ["перший", "другий", "третій", "четвертий", "п'ятий"]
    }

    fn comma_on_the(&self, _nth: &str, _day_of_week: &str) -> &'static str {
        ", в "
    }

    fn space_of_the_month(&self) -> Template<1> {
        const { Template::new(" %s місяця") }
    }

    fn last_day(&self) -> &'static str {
        "останній день"
    }

    fn comma_on_the_last_of_the_month(&self, _day_of_week: &str) -> Template<1> {
        const { Template::new(", в останній %s місяця") }
    }

    fn comma_only_on(&self, _day_of_week: &str) -> Template<1> {
        const { Template::new(", тільки в %s") }
    }

    fn comma_and_on(&self) -> Template<1> {
        const { Template::new(", і в %s") }
    }

    fn comma_every_n_months(&self, _n: &str) -> Template<1> {
        const { Template::new(", кожен %s місяць") }
    }

    fn comma_only_in(&self) -> Template<1> {
        const { Template::new(", тільки в %s") }
    }

    fn comma_on_the_last_day_of_the_month(&self) -> &'static str {
        ", в останній день місяця"
    }

    fn comma_on_the_last_weekday_of_the_month(&self) -> &'static str {
        ", в останній будень місяця"
    }

    fn comma_days_before_the_last_day_of_the_month(&self, _n: &str) -> Template<1> {
        const { Template::new(", %s днів до останнього дня місяця") }
    }

    fn first_weekday(&self) -> &'static str {
        "перший будень"
    }

    fn weekday_nearest_day(&self) -> Template<1> {
        const { Template::new("будень найближчий до %s дня") }
    }

    fn comma_on_the_of_the_month(&self) -> Template<1> {
        const { Template::new(", в %s місяця") }
    }

    fn comma_every_n_days(&self, _n: &str) -> Template<1> {
        const { Template::new(", кожен %s день") }
    }

    fn comma_between_days_of_the_month(&self, _range: &str) -> Template<2> {
        const { Template::new(", між %s та %s днями місяця") }
    }

    fn comma_on_day_of_the_month(&self, _day: &str) -> Template<1> {
        const { Template::new(", на %s день місяця") }
    }

    fn comma_every_n_years(&self, _n: &str) -> Template<1> {
        const { Template::new(", кожні %s роки") }
    }

    fn comma_starting(&self) -> Template<1> {
        const { Template::new(", початок %s") }
    }

    fn days_of_the_week(&self) -> [&'static str; 7] {
        [
            "неділя",
            "понеділок",
            "вівторок",
            "середа",
            "четвер",
            "п'ятниця",
            "субота",
        ]
    }

    fn months_of_the_year(&self) -> [&'static str; 12] {
        [
            "січень",
            "лютий",
            "березень",
            "квітень",
            "травень",
            "червень",
            "липень",
            "серпень",
            "вересень",
            "жовтень",
            "листопад",
            "грудень",
        ]
    }
}
