use super::Locale;
use crate::template::Template;

/// Indonesian
#[derive(Debug, Clone, Copy, Default)]
pub struct Indonesian;

impl Locale for Indonesian {
    fn id(&self) -> &'static str {
        "id"
    }

    fn use_24_hour_time_format_by_default(&self) -> bool {
        true
    }

    fn error_occurred(&self) -> &'static str {
        "Terjadi kesalahan saat membuat deskripsi ekspresi. Periksa sintaks ekspresi cron."
    }

    fn at_space(&self) -> &'static str {
        "Pada "
    }

    fn at(&self) -> &'static str {
        "Pada"
    }

    fn space_and(&self) -> &'static str {
        " dan"
    }

    fn every_second(&self) -> &'static str {
        "setiap detik"
    }

    fn every_minute(&self) -> &'static str {
        "setiap menit"
    }

    fn every_hour(&self) -> &'static str {
        "setiap jam"
    }

    fn every_minute_between(&self) -> Template<2> {
        const { Template::new("Setiap menit diantara %s dan %s") }
    }

    fn every_n_seconds(&self, _n: &str) -> Template<1> {
        const { Template::new("setiap %s detik") }
    }

    fn seconds_through_past_the_minute(&self) -> Template<2> {
        const { Template::new("detik ke %s sampai %s melewati menit") }
    }

    fn at_seconds_past_the_minute(&self, _n: &str) -> Template<1> {
        const { Template::new("pada %s detik lewat satu menit") }
    }

    fn every_n_minutes(&self, _n: &str) -> Template<1> {
        const { Template::new("setiap %s menit") }
    }

    fn minutes_through_past_the_hour(&self) -> Template<2> {
        const { Template::new("menit ke %s sampai %s melewati jam") }
    }

    fn at_minutes_past_the_hour(&self, _n: &str) -> Template<1> {
        const { Template::new("pada %s menit melewati jam") }
    }

    fn every_n_hours(&self, _n: &str) -> Template<1> {
        const { Template::new("setiap %s jam") }
    }

    fn between(&self) -> Template<2> {
        const { Template::new("diantara %s dan %s") }
    }

    fn at_time(&self) -> Template<1> {
        const { Template::new("pada %s") }
    }

    fn comma_every_day(&self) -> &'static str {
        ", setiap hari"
    }

    fn comma_every_n_days_of_the_week(&self, _n: &str) -> Template<1> {
        const { Template::new(", setiap hari %s  dalam seminggu") }
    }

    fn comma_through(&self, _start: &str) -> Template<2> {
        const { Template::new(", %s sampai %s") }
    }

    fn comma_and_through(&self, _start: &str) -> Template<2> {
        const { Template::new(", dan %s sampai %s") }
    }

    fn ordinals(&self, _day_of_week: &str) -> [&'static str; 5] {
        ["pertama", "kedua", "ketiga", "keempat", "kelima"]
    }

    fn comma_on_the(&self, _nth: &str, _day_of_week: &str) -> &'static str {
        ", di "
    }

    fn space_of_the_month(&self) -> Template<1> {
        const { Template::new(" %s pada bulan") }
    }

    fn last_day(&self) -> &'static str {
        "hari terakhir"
    }

    fn comma_on_the_last_of_the_month(&self, _day_of_week: &str) -> Template<1> {
        const { Template::new(", pada %s terakhir bulan ini") }
    }

    fn comma_only_on(&self, _day_of_week: &str) -> Template<1> {
        const { Template::new(", hanya pada %s") }
    }

    fn comma_and_on(&self) -> Template<1> {
        const { Template::new(", dan pada %s") }
    }

    fn comma_every_n_months(&self, _n: &str) -> Template<1> {
        const { Template::new(", setiap bulan %s ") }
    }

    fn comma_only_in(&self) -> Template<1> {
        const { Template::new(", hanya pada %s") }
    }

    fn comma_on_the_last_day_of_the_month(&self) -> &'static str {
        ", pada hari terakhir bulan ini"
    }

    fn comma_on_the_last_weekday_of_the_month(&self) -> &'static str {
        ", pada hari kerja terakhir setiap bulan"
    }

    fn comma_days_before_the_last_day_of_the_month(&self, _n: &str) -> Template<1> {
        const { Template::new(", %s hari sebelum hari terakhir setiap bulan") }
    }

    fn first_weekday(&self) -> &'static str {
        "hari kerja pertama"
    }

    fn weekday_nearest_day(&self) -> Template<1> {
        const { Template::new("hari kerja terdekat %s") }
    }

    fn comma_on_the_of_the_month(&self) -> Template<1> {
        const { Template::new(", pada %s bulan ini") }
    }

    fn comma_every_n_days(&self, _n: &str) -> Template<1> {
        const { Template::new(", setiap %s hari") }
    }

    fn comma_between_days_of_the_month(&self, _range: &str) -> Template<2> {
        const { Template::new(", antara hari %s dan %s dalam sebulan") }
    }

    fn comma_on_day_of_the_month(&self, _day: &str) -> Template<1> {
        const { Template::new(", pada hari %s dalam sebulan") }
    }

    fn comma_every_n_years(&self, _n: &str) -> Template<1> {
        const { Template::new(", setiap %s tahun") }
    }

    fn comma_starting(&self) -> Template<1> {
        const { Template::new(", mulai pada %s") }
    }

    fn days_of_the_week(&self) -> [&'static str; 7] {
        ["Minggu", "Senin", "Selasa", "Rabu", "Kamis", "Jumat", "Sabtu"]
    }

    fn months_of_the_year(&self) -> [&'static str; 12] {
        [
            "Januari",
            "Februari",
            "Maret",
            "April",
            "Mei",
            "Juni",
            "Juli",
            "Agustus",
            "September",
            "Oktober",
            "November",
            "Desember",
        ]
    }
}
