use super::Locale;
use crate::template::Template;

/// Vietnamese
#[derive(Debug, Clone, Copy, Default)]
pub struct Vietnamese;

impl Locale for Vietnamese {
    fn id(&self) -> &'static str {
        "vi"
    }

    fn use_24_hour_time_format_by_default(&self) -> bool {
        true
    }

    fn error_occurred(&self) -> &'static str {
        "Đã xảy ra lỗi khi tạo mô tả biểu thức. Vui lòng kiểm tra cú pháp biểu thức cron."
    }

    fn at_space(&self) -> &'static str {
        "Vào "
    }

    fn at(&self) -> &'static str {
        "Vào"
    }

    fn space_and(&self) -> &'static str {
        " và"
    }

    fn every_second(&self) -> &'static str {
        "mỗi giây"
    }

    fn every_minute(&self) -> &'static str {
        "mỗi phút"
    }

    fn every_hour(&self) -> &'static str {
        "mỗi giờ"
    }

    fn every_minute_between(&self) -> Template<2> {
        const { Template::new("Mỗi phút giữa %s and %s") }
    }

    fn every_n_seconds(&self, _n: &str) -> Template<1> {
        const { Template::new("mỗi %s giây") }
    }

    fn seconds_through_past_the_minute(&self) -> Template<2> {
        const { Template::new("giây thứ %s qua phút thứ %s") }
    }

    fn at_seconds_past_the_minute(&self, _n: &str) -> Template<1> {
        const { Template::new("tại giây thứ %s của mỗi phút") }
    }

    fn every_n_minutes(&self, _n: &str) -> Template<1> {
        const { Template::new("mỗi %s phút") }
    }

    fn minutes_through_past_the_hour(&self) -> Template<2> {
        const { Template::new("phút thứ %s qua %s tiếng") }
    }

    fn at_minutes_past_the_hour(&self, _n: &str) -> Template<1> {
        const { Template::new("vào %s phút của mỗi tiếng") }
    }

    fn every_n_hours(&self, _n: &str) -> Template<1> {
        const { Template::new("mỗi %s tiếng") }
    }

    fn between(&self) -> Template<2> {
        const { Template::new("giữa %s và %s") }
    }

    fn at_time(&self) -> Template<1> {
        const { Template::new("vào %s") }
    }

    fn comma_every_day(&self) -> &'static str {
        ", mỗi ngày"
    }

    fn comma_every_n_days_of_the_week(&self, _n: &str) -> Template<1> {
        const { Template::new(", mỗi %s ngày trong tuần") }
    }

    fn comma_through(&self, _start: &str) -> Template<2> {
        const { Template::new(", %s đến %s") }
    }

    fn comma_and_through(&self, _start: &str) -> Template<2> {
        const { Template::new(", %s đến %s") }
    }

    fn ordinals(&self, _day_of_week: &str) -> [&'static str; 5] {
        ["đầu tiên", "thứ 2", "thứ 3", "thứ 4", "thứ 5"]
    }

    fn comma_on_the(&self, _nth: &str, _day_of_week: &str) -> &'static str {
        ", trên "
    }

    fn space_of_the_month(&self) -> Template<1> {
        const { Template::new(" %s của tháng") }
    }

    fn last_day(&self) -> &'static str {
        "ngày cuối cùng"
    }

    fn comma_on_the_last_of_the_month(&self, _day_of_week: &str) -> Template<1> {
        const { Template::new(", vào ngày %s cuối cùng của tháng") }
    }

    fn comma_only_on(&self, _day_of_week: &str) -> Template<1> {
        const { Template::new(", chỉ trên %s") }
    }

    fn comma_and_on(&self) -> Template<1> {
        const { Template::new(", và hơn %s") }
    }

    fn comma_every_n_months(&self, _n: &str) -> Template<1> {
        const { Template::new(", mỗi ngày %s tháng") }
    }

    fn comma_only_in(&self) -> Template<1> {
        const { Template::new(", chỉ trong %s") }
    }

    fn comma_on_the_last_day_of_the_month(&self) -> &'static str {
        ", vào ngày cuối cùng của tháng"
    }

    fn comma_on_the_last_weekday_of_the_month(&self) -> &'static str {
        ", vào ngày cuối tuần của tháng"
    }

    fn comma_days_before_the_last_day_of_the_month(&self, _n: &str) -> Template<1> {
        const { Template::new(", %s ngày trước ngày cuối cùng của tháng") }
    }

    fn first_weekday(&self) -> &'static str {
        "ngày đầu tuần"
    }

    fn weekday_nearest_day(&self) -> Template<1> {
        const { Template::new("ngày trong tuần ngày gần nhất %s") }
    }

    fn comma_on_the_of_the_month(&self) -> Template<1> {
        const { Template::new(", vào ngày %s của tháng") }
    }

    fn comma_every_n_days(&self, _n: &str) -> Template<1> {
        const { Template::new(", mỗi %s ngày") }
    }

    fn comma_between_days_of_the_month(&self, _range: &str) -> Template<2> {
        const { Template::new(", giữa ngày %s và %s trong tháng") }
    }

    fn comma_on_day_of_the_month(&self, _day: &str) -> Template<1> {
        const { Template::new(", vào %s ngày trong tháng") }
    }

    fn comma_every_n_years(&self, _n: &str) -> Template<1> {
        const { Template::new(", mỗi %s năm") }
    }

    fn comma_starting(&self) -> Template<1> {
        const { Template::new(", bắt đầu %s") }
    }

    fn days_of_the_week(&self) -> [&'static str; 7] {
        ["Chủ nhật", "Thứ 2", "Thứ 3", "Thứ 4", "Thứ 5", "Thứ 6", "Thứ 7"]
    }

    fn months_of_the_year(&self) -> [&'static str; 12] {
        [
            "Tháng 1",
            "Tháng 2",
            "Tháng 3",
            "Tháng 4",
            "Tháng 5",
            "Tháng 6",
            "Tháng 7",
            "Tháng 8",
            "Tháng 9",
            "Tháng 10",
            "Tháng 11",
            "Tháng 12",
        ]
    }
}
