use super::Locale;
use crate::template::Template;

/// Arabic
#[derive(Debug, Clone, Copy, Default)]
pub struct Arabic;

impl Locale for Arabic {
    fn id(&self) -> &'static str {
        "ar"
    }

    fn use_24_hour_time_format_by_default(&self) -> bool {
        true
    }

    fn error_occurred(&self) -> &'static str {
        "حدث خطأ في إنشاء وصف المصطلح٠ تأكد من تركيب مصطلح الكرون"
    }

    fn at_space(&self) -> &'static str {
        " "
    }

    fn at(&self) -> &'static str {
        ""
    }

    fn space_and(&self) -> &'static str {
        " و"
    }

    fn every_second(&self) -> &'static str {
        "كل ثانية"
    }

    fn every_minute(&self) -> &'static str {
        "كل دقيقة"
    }

    fn every_hour(&self) -> &'static str {
        "كل ساعة"
    }

    fn every_minute_between(&self) -> Template<2> {
        const { Template::new("كل دقيقة بين %s و %s") }
    }

    fn every_n_seconds(&self, _n: &str) -> Template<1> {
        const { Template::new("كل %s ثواني") }
    }

    fn seconds_through_past_the_minute(&self) -> Template<2> {
        const { Template::new("الثواني %s حتى %s من بداية الدقيقة") }
    }

    fn at_seconds_past_the_minute(&self, _n: &str) -> Template<1> {
        const { Template::new("الثانية %s من بداية الدقيقة") }
    }

    fn every_n_minutes(&self, _n: &str) -> Template<1> {
        const { Template::new("كل %s دقائق") }
    }

    fn minutes_through_past_the_hour(&self) -> Template<2> {
        const { Template::new("الدقائق %s حتى %s من بداية الساعة") }
    }

    fn at_minutes_past_the_hour(&self, _n: &str) -> Template<1> {
        const { Template::new("الدقيقة %s من بداية الساعة") }
    }

    fn every_n_hours(&self, _n: &str) -> Template<1> {
        const { Template::new("كل %s ساعات") }
    }

    fn between(&self) -> Template<2> {
        const { Template::new("بين %s و %s") }
    }

    fn at_time(&self) -> Template<1> {
        const { Template::new("%s") }
    }

    fn comma_every_day(&self) -> &'static str {
        "، كل يوم"
    }

    fn comma_every_n_days_of_the_week(&self, _n: &str) -> Template<1> {
        const { Template::new("، كل %s من أيام الأسبوع") }
    }

    fn comma_through(&self, _start: &str) -> Template<2> {
        const { Template::new("، %s حتى %s") }
    }

    fn comma_and_through(&self, _start: &str) -> Template<2> {
        const { Template::new("، و %s حتى %s") }
    }

    fn ordinals(&self, _day_of_week: &str) -> [&'static str; 5] {
        ["أول", "ثاني", "ثالث", "رابع", "خامس"]
    }

    fn comma_on_the(&self, _nth: &str, _day_of_week: &str) -> &'static str {
        "، في ال"
    }

    fn space_of_the_month(&self) -> Template<1> {
        const { Template::new(" %s من الشهر") }
    }

    fn last_day(&self) -> &'static str {
        "اليوم الأخير"
    }

    fn comma_on_the_last_of_the_month(&self, _day_of_week: &str) -> Template<1> {
        const { Template::new("، في اخر %s من الشهر") }
    }

    fn comma_only_on(&self, _day_of_week: &str) -> Template<1> {
        const { Template::new("، %s فقط") }
    }

    fn comma_and_on(&self) -> Template<1> {
        const { Template::new("، وفي %s") }
    }

    fn comma_every_n_months(&self, _n: &str) -> Template<1> {
        const { Template::new("، كل %s أشهر") }
    }

    fn comma_only_in(&self) -> Template<1> {
        const { Template::new("، %s فقط") }
    }

    fn comma_on_the_last_day_of_the_month(&self) -> &'static str {
        "، في اخر يوم من الشهر"
    }

    fn comma_on_the_last_weekday_of_the_month(&self) -> &'static str {
        "، في اخر يوم أسبوع من الشهر"
    }

    fn comma_days_before_the_last_day_of_the_month(&self, _n: &str) -> Template<1> {
        const { Template::new("، %s أيام قبل اخر يوم من الشهر") }
    }

    fn first_weekday(&self) -> &'static str {
        "اول ايام الأسبوع"
    }

    fn weekday_nearest_day(&self) -> Template<1> {
        const { Template::new("يوم الأسبوع الأقرب ليوم %s") }
    }

    fn comma_on_the_of_the_month(&self) -> Template<1> {
        const { Template::new("، في %s من الشهر") }
    }

    fn comma_every_n_days(&self, _n: &str) -> Template<1> {
        const { Template::new("، كل %s أيام") }
    }

    fn comma_between_days_of_the_month(&self, _range: &str) -> Template<2> {
        const { Template::new("، بين يوم %s و %s من الشهر") }
    }

    fn comma_on_day_of_the_month(&self, _day: &str) -> Template<1> {
        const { Template::new("، في اليوم %s من الشهر") }
    }

    fn comma_every_n_years(&self, _n: &str) -> Template<1> {
        const { Template::new("، كل %s سنوات") }
    }

    fn comma_starting(&self) -> Template<1> {
        const { Template::new("، بداية من %s") }
    }

    fn days_of_the_week(&self) -> [&'static str; 7] {
        [
            "الأحد",
            "الإثنين",
            "الثلاثاء",
            "الأربعاء",
            "الخميس",
            "الجمعة",
            "السبت",
        ]
    }

    fn months_of_the_year(&self) -> [&'static str; 12] {
        [
            "يناير",
            "فبراير",
            "مارس",
            "ابريل",
            "مايو",
            "يونيو",
            "يوليو",
            "أغسطس",
            "سبتمبر",
            "أكتوبر",
            "نوفمبر",
            "ديسمبر",
        ]
    }
}
