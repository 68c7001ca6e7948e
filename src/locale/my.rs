use super::Locale;
use crate::template::Template;

/// Malay
#[derive(Debug, Clone, Copy, Default)]
pub struct Malay;

impl Locale for Malay {
    fn id(&self) -> &'static str {
        "my"
    }

    fn use_24_hour_time_format_by_default(&self) -> bool {
        false
    }

    fn error_occurred(&self) -> &'static str {
        "Terdapat ralat semasa menjana penerangan ungkapan. Sila periksa sintaks ungkapan cron."
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
        "setiap saat"
    }

    fn every_minute(&self) -> &'static str {
        "setiap minit"
    }

    fn every_hour(&self) -> &'static str {
        "setiap jam"
    }

    fn every_minute_between(&self) -> Template<2> {
        const { Template::new("Setiap minit antara %s dan %s") }
    }

    fn every_n_seconds(&self, _n: &str) -> Template<1> {
        const { Template::new("setiap %s saat") }
    }

    fn seconds_through_past_the_minute(&self) -> Template<2> {
        const { Template::new("saat ke %s hingga %s selepas minit") }
    }

    fn at_seconds_past_the_minute(&self, _n: &str) -> Template<1> {
        const { Template::new("pada %s saat selepas minit") }
    }

    fn every_n_minutes(&self, _n: &str) -> Template<1> {
        const { Template::new("setiap %s minit") }
    }

    fn minutes_through_past_the_hour(&self) -> Template<2> {
        const { Template::new("minit ke %s hingga %s selepas jam") }
    }

    fn at_minutes_past_the_hour(&self, _n: &str) -> Template<1> {
        const { Template::new("pada %s minit selepas jam") }
    }

    fn every_n_hours(&self, _n: &str) -> Template<1> {
        const { Template::new("setiap %s jam") }
    }

    fn between(&self) -> Template<2> {
        const { Template::new("antara %s dan %s") }
    }

    fn at_time(&self) -> Template<1> {
        const { Template::new("pada %s") }
    }

    fn comma_every_day(&self) -> &'static str {
        ", setiap hari"
    }

    fn comma_every_n_days_of_the_week(&self, _n: &str) -> Template<1> {
        const { Template::new(", setiap %s hari dalam minggu") }
    }

    fn comma_through(&self, _start: &str) -> Template<2> {
        const { Template::new(", %s hingga %s") }
    }

    fn comma_and_through(&self, _start: &str) -> Template<2> {
        const { Template::new(", dan %s hingga %s") }
    }

    fn ordinals(&self, _day_of_week: &str) -> [&'static str; 5] {
        ["pertama", "kedua", "ketiga", "keempat", "kelima"]
    }

    fn comma_on_the(&self, _nth: &str, _day_of_week: &str) -> &'static str {
        ", pada "
    }

    fn space_of_the_month(&self) -> Template<1> {
        const { Template::new(" %s pada bulan") }
    }

    fn last_day(&self) -> &'static str {
        "hari terakhir"
    }

    fn comma_on_the_last_of_the_month(&self, _day_of_week: &str) -> Template<1> {
        const { Template::new(", pada %s terakhir bulan") }
    }

    fn comma_only_on(&self, _day_of_week: &str) -> Template<1> {
        const { Template::new(", hanya pada %s") }
    }

    fn comma_and_on(&self) -> Template<1> {
        const { Template::new(", dan pada %s") }
    }

    fn comma_every_n_months(&self, _n: &str) -> Template<1> {
        const { Template::new(", setiap bulan %s") }
    }

    fn comma_only_in(&self) -> Template<1> {
        const { Template::new(", hanya pada %s") }
    }

    fn comma_on_the_last_day_of_the_month(&self) -> &'static str {
        ", pada hari terakhir bulan"
    }

    fn comma_on_the_last_weekday_of_the_month(&self) -> &'static str {
        ", pada minggu terakhir bulan"
    }

    fn comma_days_before_the_last_day_of_the_month(&self, _n: &str) -> Template<1> {
        const { Template::new(", %s hari sebelum hari terakhir bulan") }
    }

    fn first_weekday(&self) -> &'static str {
        "hari pertama minggu bekerja"
    }

    fn weekday_nearest_day(&self) -> Template<1> {
        const { Template::new("hari bekerja yang terdekat dengan %s") }
    }

    fn comma_on_the_of_the_month(&self) -> Template<1> {
        const { Template::new(", pada %s bulan") }
    }

    fn comma_every_n_days(&self, _n: &str) -> Template<1> {
        const { Template::new(", setiap %s hari") }
    }

    fn comma_between_days_of_the_month(&self, _range: &str) -> Template<2> {
        const { Template::new(", antara hari %s dan %s dalam bulan") }
    }

    fn comma_on_day_of_the_month(&self, _day: &str) -> Template<1> {
        const { Template::new(", pada hari %s dalam bulan") }
    }

    fn comma_every_n_years(&self, _n: &str) -> Template<1> {
        const { Template::new(", setiap %s tahun") }
    }

    fn comma_starting(&self) -> Template<1> {
        const { Template::new(", bermula %s") }
    }

    fn days_of_the_week(&self) -> [&'static str; 7] {
        ["Ahad", "Isnin", "Selasa", "Rabu", "Khamis", "Jumaat", "Sabtu"]
    }

    fn months_of_the_year(&self) -> [&'static str; 12] {
        [
            "Januari",
            "Februari",
            "Mac",
            "April",
            "Mei",
            "Jun",
            "Julai",
            "Ogos",
            "September",
            "Oktober",
            "November",
            "Disember",
        ]
    }
}
