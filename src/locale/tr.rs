use super::Locale;
use crate::template::Template;

/// Turkish
#[derive(Debug, Clone, Copy, Default)]
pub struct Turkish;

impl Locale for Turkish {
    fn id(&self) -> &'static str {
        "tr"
    }

    fn use_24_hour_time_format_by_default(&self) -> bool {
        true
    }

    fn error_occurred(&self) -> &'static str {
        "İfade açıklamasını oluştururken bir hata oluştu. Cron ifadesini gözden geçirin."
    }

    fn at_space(&self) -> &'static str {
        "Saat "
    }

    fn at(&self) -> &'static str {
        "Saat"
    }

    fn space_and(&self) -> &'static str {
        " ve"
    }

    fn every_second(&self) -> &'static str {
        "her saniye"
    }

    fn every_minute(&self) -> &'static str {
        "her dakika"
    }

    fn every_hour(&self) -> &'static str {
        "her saat"
    }

    fn every_minute_between(&self) -> Template<2> {
        const { Template::new("Saat %s ve %s arasındaki her dakika") }
    }

    fn every_n_seconds(&self, _n: &str) -> Template<1> {
        const { Template::new("her %s saniyede bir") }
    }

    fn seconds_through_past_the_minute(&self) -> Template<2> {
        const { Template::new("dakikaların %s. ve %s. saniyeleri arası") }
    }

    fn at_seconds_past_the_minute(&self, _n: &str) -> Template<1> {
        const { Template::new("dakikaların %s. saniyesinde") }
    }

    fn every_n_minutes(&self, _n: &str) -> Template<1> {
        const { Template::new("her %s dakikada bir") }
    }

    fn minutes_through_past_the_hour(&self) -> Template<2> {
        const { Template::new("saatlerin %s. ve %s. dakikaları arası") }
    }

    fn at_minutes_past_the_hour(&self, _n: &str) -> Template<1> {
        const { Template::new("saatlerin %s. dakikasında") }
    }

    fn every_n_hours(&self, _n: &str) -> Template<1> {
        const { Template::new("her %s saatte") }
    }

    fn between(&self) -> Template<2> {
        const { Template::new("%s ile %s arasında") }
    }

    fn at_time(&self) -> Template<1> {
        const { Template::new("saat %s") }
    }

    fn comma_every_day(&self) -> &'static str {
        ", her gün"
    }

    fn comma_every_n_days_of_the_week(&self, _n: &str) -> Template<1> {
        const { Template::new(", ayın her %s günü") }
    }

    fn comma_through(&self, _start: &str) -> Template<2> {
        const { Template::new(", %s ile %s arasında") }
    }

    fn comma_and_through(&self, _start: &str) -> Template<2> {
        const { Template::new(", ve %s ile %s arasında") }
    }

    fn ordinals(&self, _day_of_week: &str) -> [&'static str; 5] {
        ["ilk", "ikinci", "üçüncü", "dördüncü", "beşinci"]
    }

    fn comma_on_the(&self, _nth: &str, _day_of_week: &str) -> &'static str {
        ", ayın "
    }

    fn space_of_the_month(&self) -> Template<1> {
        const { Template::new(" %s günü") }
    }

    fn last_day(&self) -> &'static str {
        "son gün"
    }

    fn comma_on_the_last_of_the_month(&self, _day_of_week: &str) -> Template<1> {
        const { Template::new(", ayın son %s günü") }
    }

    fn comma_only_on(&self, _day_of_week: &str) -> Template<1> {
        const { Template::new(", sadece %s günü") }
    }

    fn comma_and_on(&self) -> Template<1> {
        const { Template::new(", ve %s") }
    }

    fn comma_every_n_months(&self, _n: &str) -> Template<1> {
        const { Template::new(", %s ayda bir") }
    }

    fn comma_only_in(&self) -> Template<1> {
        const { Template::new(", sadece %s için") }
    }

    fn comma_on_the_last_day_of_the_month(&self) -> &'static str {
        ", ayın son günü"
    }

    fn comma_on_the_last_weekday_of_the_month(&self) -> &'static str {
        ", ayın son iş günü"
    }

    fn comma_days_before_the_last_day_of_the_month(&self, _n: &str) -> Template<1> {
        const { Template::new(", %s ayın son gününden önceki günler") }
    }

    fn first_weekday(&self) -> &'static str {
        "ilk iş günü"
    }

    fn weekday_nearest_day(&self) -> Template<1> {
        const { Template::new("%s. günü sonrasındaki ilk iş günü") }
    }

    fn comma_on_the_of_the_month(&self) -> Template<1> {
        const { Template::new(", ayın %s") }
    }

    fn comma_every_n_days(&self, _n: &str) -> Template<1> {
        const { Template::new(", %s günde bir") }
    }

    fn comma_between_days_of_the_month(&self, _range: &str) -> Template<2> {
        const { Template::new(", ayın %s. ve %s. günleri arası") }
    }

    fn comma_on_day_of_the_month(&self, _day: &str) -> Template<1> {
        const { Template::new(", ayın %s. günü") }
    }

    fn comma_every_n_years(&self, _n: &str) -> Template<1> {
        const { Template::new(", %s yılda bir") }
    }

    fn comma_starting(&self) -> Template<1> {
        const { Template::new(", başlangıç %s") }
    }

    fn days_of_the_week(&self) -> [&'static str; 7] {
        [
            "Pazar",
            "Pazartesi",
            "Salı",
            "Çarşamba",
            "Perşembe",
            "Cuma",
            "Cumartesi",
        ]
    }

    fn months_of_the_year(&self) -> [&'static str; 12] {
        [
            "Ocak",
            "Şubat",
            "Mart",
            "Nisan",
            "Mayıs",
            "Haziran",
            "Temmuz",
            "Ağustos",
            "Eylül",
            "Ekim",
            "Kasım",
            "Aralık",
        ]
    }
}
