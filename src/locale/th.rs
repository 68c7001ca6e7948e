use super::Locale;
use crate::template::Template;

/// Thai
#[derive(Debug, Clone, Copy, Default)]
pub struct Thai;

impl Locale for Thai {
    fn id(&self) -> &'static str {
        "th"
    }

    fn use_24_hour_time_format_by_default(&self) -> bool {
        false
    }

    fn error_occurred(&self) -> &'static str {
        "เกิดข้อผิดพลาดขณะสร้างคำอธิบายนิพจน์ ตรวจสอบไวยากรณ์นิพจน์ครอน"
    }

    fn at_space(&self) -> &'static str {
        "เมื่อ "
    }

    fn at(&self) -> &'static str {
        "เมื่อ"
    }

    fn space_and(&self) -> &'static str {
        " และ"
    }

    fn every_second(&self) -> &'static str {
        "ทุกๆ วินาที"
    }

    fn every_minute(&self) -> &'static str {
        "ทุกๆ นาที"
    }

    fn every_hour(&self) -> &'static str {
        "ทุกๆ ชั่วโมง"
    }

    fn every_minute_between(&self) -> Template<2> {
        const { Template::new("ทุกๆ นาที %s และ %s") }
    }

    fn every_n_seconds(&self, _n: &str) -> Template<1> {
        const { Template::new("ทุกๆ %s วินาที") }
    }

    fn seconds_through_past_the_minute(&self) -> Template<2> {
        const { Template::new("วินาที %s ถึง %s นาทีที่ผ่านมา") }
    }

    fn at_seconds_past_the_minute(&self, _n: &str) -> Template<1> {
        const { Template::new("เมื่อ %s วินาที นาทีที่ผ่านมา") }
    }

    fn every_n_minutes(&self, _n: &str) -> Template<1> {
        const { Template::new("ทุกๆ %s นาที") }
    }

    fn minutes_through_past_the_hour(&self) -> Template<2> {
        const { Template::new("นาที %s ถึง %s ชั่วโมงที่ผ่านมา") }
    }

    fn at_minutes_past_the_hour(&self, _n: &str) -> Template<1> {
        const { Template::new("เมื่อ %s นาที ชั่วโมงที่ผ่านมา") }
    }

    fn every_n_hours(&self, _n: &str) -> Template<1> {
        const { Template::new("ทุกๆ %s ชั่วโมง") }
    }

    fn between(&self) -> Template<2> {
        const { Template::new("ระหว่าง %s ถึง %s") }
    }

    fn at_time(&self) -> Template<1> {
        const { Template::new("เมื่อ %s") }
    }

    fn comma_every_day(&self) -> &'static str {
        ", ทุกๆ วัน"
    }

    fn comma_every_n_days_of_the_week(&self, _n: &str) -> Template<1> {
        const { Template::new(", ทุกๆ %s วันของสัปดาห์") }
    }

    fn comma_through(&self, _start: &str) -> Template<2> {
        const { Template::new(", %s ถึง %s") }
    }

    fn comma_and_through(&self, _start: &str) -> Template<2> {
        const { Template::new(", %s ถึง %s") }
    }

    fn ordinals(&self, _day_of_week: &str) -> [&'static str; 5] {
        ["แรก", "ที่สอง", "ที่สาม", "ที่สี่", "ที่ห้า"]
    }

    fn comma_on_the(&self, _nth: &str, _day_of_week: &str) -> &'static str {
        ", ในวัน "
    }

    fn space_of_the_month(&self) -> Template<1> {
        const { Template::new(" %s ของเดือน") }
    }

    fn last_day(&self) -> &'static str {
        "วันสุดท้าย"
    }

    fn comma_on_the_last_of_the_month(&self, _day_of_week: &str) -> Template<1> {
        const { Template::new(", ณ สุดท้าย %s ของเดือน") }
    }

    fn comma_only_on(&self, _day_of_week: &str) -> Template<1> {
        const { Template::new(", เท่านั้น %s") }
    }

    fn comma_and_on(&self) -> Template<1> {
        const { Template::new(", และใน %s") }
    }

    fn comma_every_n_months(&self, _n: &str) -> Template<1> {
        const { Template::new(", ทุกๆ %s เดือน") }
    }

    fn comma_only_in(&self) -> Template<1> {
        const { Template::new(", เท่านั้น %s") }
    }

    fn comma_on_the_last_day_of_the_month(&self) -> &'static str {
        ", ในวันสิ้นเดือน"
    }

    fn comma_on_the_last_weekday_of_the_month(&self) -> &'static str {
        ", ในวันธรรมดาสุดท้ายของเดือน"
    }

    fn comma_days_before_the_last_day_of_the_month(&self, _n: &str) -> Template<1> {
        const { Template::new(", %s วันก่อนวันสุดท้ายของเดือน") }
    }

    fn first_weekday(&self) -> &'static str {
        "วันธรรมดาวันแรก"
    }

    fn weekday_nearest_day(&self) -> Template<1> {
        const { Template::new("วันธรรมดาที่ใกล้ที่สุด %s") }
    }

    fn comma_on_the_of_the_month(&self) -> Template<1> {
        const { Template::new(", ในวัน %s ของเดือน") }
    }

    fn comma_every_n_days(&self, _n: &str) -> Template<1> {
        const { Template::new(", ทุกๆ %s วัน") }
    }

    fn comma_between_days_of_the_month(&self, _range: &str) -> Template<2> {
        const { Template::new(", ระหว่างวัน %s และ %s ของเดือน") }
    }

    fn comma_on_day_of_the_month(&self, _day: &str) -> Template<1> {
        const { Template::new(", ในวัน %s ของเดือน") }
    }

    fn comma_every_n_years(&self, _n: &str) -> Template<1> {
        const { Template::new(", ทุกๆ %s ปี") }
    }

    fn comma_starting(&self) -> Template<1> {
        const { Template::new(", เริ่ม %s") }
    }

    fn days_of_the_week(&self) -> [&'static str; 7] {
        [
            "วันอาทิตย์",
            "วันจันทร์",
            "วันอังคาร",
            "วันพุธ",
            "วันพฤหัสบดี",
            "วันศุกร์",
            "วันเสาร์",
        ]
    }

    fn months_of_the_year(&self) -> [&'static str; 12] {
        [
            "มกราคม",
            "กุมภาพันธ์",
            "มีนาคม",
            "เมษายน",
            "พฤษภาคม",
            "มิถุนายน",
            "กรกฎาคม",
            "สิงหาคม",
            "กันยายน",
            "ตุลาคม",
            "พฤศจิกายน",
            "ธันวาคม",
        ]
    }
}
