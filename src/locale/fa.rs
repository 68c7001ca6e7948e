use super::Locale;
use crate::template::Template;

/// Persian
#[derive(Debug, Clone, Copy, Default)]
pub struct Persian;

impl Locale for Persian {
    fn id(&self) -> &'static str {
        "fa"
    }

    fn use_24_hour_time_format_by_default(&self) -> bool {
        true
    }

    fn error_occurred(&self) -> &'static str {
        "خطایی در نمایش توضیحات این وظیفه رخ داد. لطفا ساختار آن را بررسی کنید."
    }

    fn at_space(&self) -> &'static str {
        "در "
    }

    fn at(&self) -> &'static str {
        "در"
    }

    fn space_and(&self) -> &'static str {
        " و"
    }

    fn every_second(&self) -> &'static str {
        "هر ثانیه"
    }

    fn every_minute(&self) -> &'static str {
        "هر دقیقه"
    }

    fn every_hour(&self) -> &'static str {
        "هر ساعت"
    }

    fn every_minute_between(&self) -> Template<2> {
        const { Template::new("هر دقیقه بین %s و %s") }
    }

    fn every_n_seconds(&self, _n: &str) -> Template<1> {
        const { Template::new("هر %s ثانیه") }
    }

    fn seconds_through_past_the_minute(&self) -> Template<2> {
        const { Template::new("ثانیه %s تا %s دقیقه گذشته") }
    }

    fn at_seconds_past_the_minute(&self, _n: &str) -> Template<1> {
        const { Template::new("در %s قانیه از دقیقه گذشته") }
    }

    fn every_n_minutes(&self, _n: &str) -> Template<1> {
        const { Template::new("هر %s دقیقه") }
    }

    fn minutes_through_past_the_hour(&self) -> Template<2> {
        const { Template::new("دقیقه %s تا %s ساعت گذشته") }
    }

    fn at_minutes_past_the_hour(&self, _n: &str) -> Template<1> {
        const { Template::new("در %s دقیقه پس از ساعت") }
    }

    fn every_n_hours(&self, _n: &str) -> Template<1> {
        const { Template::new("هر %s ساعت") }
    }

    fn between(&self) -> Template<2> {
        const { Template::new("بین %s و %s") }
    }

    fn at_time(&self) -> Template<1> {
        const { Template::new("در %s") }
    }

    fn comma_every_day(&self) -> &'static str {
        ", هر روز"
    }

    fn comma_every_n_days_of_the_week(&self, _n: &str) -> Template<1> {
        const { Template::new(", هر %s روز از هفته") }
    }

    fn comma_through(&self, _start: &str) -> Template<2> {
        const { Template::new(", %s تا %s") }
    }

    fn comma_and_through(&self, _start: &str) -> Template<2> {
        const { Template::new(", و %s تا %s") }
    }

    fn ordinals(&self, _day_of_week: &str) -> [&'static str; 5] {
        ["اول", "دوم", "سوم", "چهارم", "پنجم"]
    }

    fn comma_on_the(&self, _nth: &str, _day_of_week: &str) -> &'static str {
        ", در "
    }

    fn space_of_the_month(&self) -> Template<1> {
        const { Template::new(" %s ماه") }
    }

    fn last_day(&self) -> &'static str {
        "آخرین روز"
    }

    fn comma_on_the_last_of_the_month(&self, _day_of_week: &str) -> Template<1> {
        const { Template::new(", در %s ماه") }
    }

    fn comma_only_on(&self, _day_of_week: &str) -> Template<1> {
        const { Template::new(", فقط در %s") }
    }

    fn comma_and_on(&self) -> Template<1> {
        const { Template::new(", و در %s") }
    }

    fn comma_every_n_months(&self, _n: &str) -> Template<1> {
        const { Template::new(", هر %s ماه") }
    }

    fn comma_only_in(&self) -> Template<1> {
        const { Template::new(", فقط در %s") }
    }

    fn comma_on_the_last_day_of_the_month(&self) -> &'static str {
        ", در آخرین روز ماه"
    }

    fn comma_on_the_last_weekday_of_the_month(&self) -> &'static str {
        ", در آخرین روز ماه"
    }

    fn comma_days_before_the_last_day_of_the_month(&self, _n: &str) -> Template<1> {
        const { Template::new(", %s روز قبل از آخرین روز ماه") }
    }

    fn first_weekday(&self) -> &'static str {
        "اولین روز"
    }

    fn weekday_nearest_day(&self) -> Template<1> {
        const { Template::new("روز نزدیک به روز %s") }
    }

    fn comma_on_the_of_the_month(&self) -> Template<1> {
        const { Template::new(", در %s ماه") }
    }

    fn comma_every_n_days(&self, _n: &str) -> Template<1> {
        const { Template::new(", هر %s روز") }
    }

    fn comma_between_days_of_the_month(&self, _range: &str) -> Template<2> {
        const { Template::new(", بین روز %s و %s ماه") }
    }

    fn comma_on_day_of_the_month(&self, _day: &str) -> Template<1> {
        const { Template::new(", در %s ماه") }
    }

    fn comma_every_n_years(&self, _n: &str) -> Template<1> {
        const { Template::new(", هر %s سال") }
    }

    fn comma_starting(&self) -> Template<1> {
        const { Template::new(", آغاز %s") }
    }

    fn days_of_the_week(&self) -> [&'static str; 7] {
        [
            "یک\u{200c}شنبه",
            "دوشنبه",
            "سه\u{200c}شنبه",
            "چهارشنبه",
            "پنج\u{200c}شنبه",
            "جمعه",
            "شنبه",
        ]
    }

    fn months_of_the_year(&self) -> [&'static str; 12] {
        [
            "ژانویه",
            "فوریه",
            "مارس",
            "آپریل",
            "مه",
            "ژوئن",
            "ژوئیه",
            "آگوست",
            "سپتامبر",
            "اکتبر",
            "نوامبر",
            "دسامبر",
        ]
    }
}
