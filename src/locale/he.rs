use super::Locale;
use crate::template::Template;

/// Hebrew
#[derive(Debug, Clone, Copy, Default)]
pub struct Hebrew;

impl Locale for Hebrew {
    fn id(&self) -> &'static str {
        "he"
    }

    fn use_24_hour_time_format_by_default(&self) -> bool {
        true
    }

    fn error_occurred(&self) -> &'static str {
        "אירעה שגיאה בעת יצירת תיאור הביטוי. בדוק את תחביר הביטוי cron."
    }

    fn at_space(&self) -> &'static str {
        "ב "
    }

    fn at(&self) -> &'static str {
        "ב"
    }

    fn space_and(&self) -> &'static str {
        " ו"
    }

    fn every_second(&self) -> &'static str {
        "כל שניה"
    }

    fn every_minute(&self) -> &'static str {
        "כל דקה"
    }

    fn every_hour(&self) -> &'static str {
        "כל שעה"
    }

    fn every_minute_between(&self) -> Template<2> {
        const { Template::new("כל דקה %s עד %s") }
    }

    fn every_n_seconds(&self, _n: &str) -> Template<1> {
        const { Template::new("כל %s שניות") }
    }

    fn seconds_through_past_the_minute(&self) -> Template<2> {
        const { Template::new("%s עד %s שניות של הדקה") }
    }

    fn at_seconds_past_the_minute(&self, _n: &str) -> Template<1> {
        const { Template::new("ב %s שניות של הדקה") }
    }

    fn every_n_minutes(&self, _n: &str) -> Template<1> {
        const { Template::new("כל %s דקות") }
    }

    fn minutes_through_past_the_hour(&self) -> Template<2> {
        const { Template::new("%s עד %s דקות של השעה") }
    }

    fn at_minutes_past_the_hour(&self, _n: &str) -> Template<1> {
        const { Template::new("ב %s דקות של השעה") }
    }

    fn every_n_hours(&self, _n: &str) -> Template<1> {
        const { Template::new("כל %s שעות") }
    }

    fn between(&self) -> Template<2> {
        const { Template::new("%s עד %s") }
    }

    fn at_time(&self) -> Template<1> {
        const { Template::new("ב %s") }
    }

    fn comma_every_day(&self) -> &'static str {
        ", כל יום"
    }

    fn comma_every_n_days_of_the_week(&self, _n: &str) -> Template<1> {
        const { Template::new(", כל %s ימים בשבוע") }
    }

    fn comma_through(&self, _start: &str) -> Template<2> {
        const { Template::new(", %s עד %s") }
    }

    fn comma_and_through(&self, _start: &str) -> Template<2> {
        const { Template::new(", ו %s עד %s") }
    }

    fn ordinals(&self, _day_of_week: &str) -> [&'static str; 5] {
        ["ראשון", "שני", "שלישי", "רביעי", "חמישי"]
    }

    fn comma_on_the(&self, _nth: &str, _day_of_week: &str) -> &'static str {
        ", ב "
    }

    fn space_of_the_month(&self) -> Template<1> {
        const { Template::new(" %s של החודש") }
    }

    fn last_day(&self) -> &'static str {
        "היום האחרון"
    }

    fn comma_on_the_last_of_the_month(&self, _day_of_week: &str) -> Template<1> {
        const { Template::new(", רק ב %s של החודש") }
    }

    fn comma_only_on(&self, _day_of_week: &str) -> Template<1> {
        const { Template::new(", רק ב %s") }
    }

    fn comma_and_on(&self) -> Template<1> {
        const { Template::new(", וב %s") }
    }

    fn comma_every_n_months(&self, _n: &str) -> Template<1> {
        const { Template::new(", כל %s חודשים") }
    }

    fn comma_only_in(&self) -> Template<1> {
        const { Template::new(", רק ב %s") }
    }

    fn comma_on_the_last_day_of_the_month(&self) -> &'static str {
        ", ביום האחרון של החודש"
    }

    fn comma_on_the_last_weekday_of_the_month(&self) -> &'static str {
        ", ביום החול האחרון של החודש"
    }

    fn comma_days_before_the_last_day_of_the_month(&self, _n: &str) -> Template<1> {
        const { Template::new(", %s ימים לפני היום האחרון בחודש") }
    }

    fn first_weekday(&self) -> &'static str {
        "יום החול הראשון"
    }

    fn weekday_nearest_day(&self) -> Template<1> {
        const { Template::new("יום החול הראשון הקרוב אל %s") }
    }

    fn comma_on_the_of_the_month(&self) -> Template<1> {
        const { Template::new(", ביום ה%s של החודש") }
    }

    fn comma_every_n_days(&self, _n: &str) -> Template<1> {
        const { Template::new(", כל %s ימים") }
    }

    fn comma_between_days_of_the_month(&self, _range: &str) -> Template<2> {
        const { Template::new(", בין היום ה%s וה%s של החודש") }
    }

    fn comma_on_day_of_the_month(&self, _day: &str) -> Template<1> {
        const { Template::new(", ביום ה%s של החודש") }
    }

    fn comma_every_n_years(&self, _n: &str) -> Template<1> {
        const { Template::new(", כל %s שנים") }
    }

    fn comma_starting(&self) -> Template<1> {
        const { Template::new(", החל מ %s") }
    }

    fn days_of_the_week(&self) -> [&'static str; 7] {
        [
            "יום ראשון",
            "יום שני",
            "יום שלישי",
            "יום רביעי",
            "יום חמישי",
            "יום שישי",
            "יום שבת",
        ]
    }

    fn months_of_the_year(&self) -> [&'static str; 12] {
        [
            "ינואר",
            "פברואר",
            "מרץ",
            "אפריל",
            "מאי",
            "יוני",
            "יולי",
            "אוגוסט",
            "ספטמבר",
            "אוקטובר",
            "נובמבר",
            "דצמבר",
        ]
    }
}
