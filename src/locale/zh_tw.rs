use super::Locale;
use crate::template::Template;

/// Traditional Chinese
#[derive(Debug, Clone, Copy, Default)]
pub struct TraditionalChinese;

impl Locale for TraditionalChinese {
    fn id(&self) -> &'static str {
        "zh_TW"
    }

    fn use_24_hour_time_format_by_default(&self) -> bool {
        true
    }

    fn error_occurred(&self) -> &'static str {
        "產生表達式描述時發生了錯誤，請檢查 cron 表達式語法。"
    }

    fn at_space(&self) -> &'static str {
        "在 "
    }

    fn at(&self) -> &'static str {
        "在"
    }

    fn space_and(&self) -> &'static str {
        " 和"
    }

    fn every_second(&self) -> &'static str {
        "每秒"
    }

    fn every_minute(&self) -> &'static str {
        "每分鐘"
    }

    fn every_hour(&self) -> &'static str {
        "每小時"
    }

    fn every_minute_between(&self) -> Template<2> {
        const { Template::new("在 %s 和 %s 之間的每分鐘") }
    }

    fn every_n_seconds(&self, _n: &str) -> Template<1> {
        const { Template::new("每 %s 秒") }
    }

    fn seconds_through_past_the_minute(&self) -> Template<2> {
        const { Template::new("在一分鐘後的 %s 到 %s 秒") }
    }

    fn at_seconds_past_the_minute(&self, _n: &str) -> Template<1> {
        const { Template::new("在一分鐘後的 %s 秒") }
    }

    fn every_n_minutes(&self, _n: &str) -> Template<1> {
        const { Template::new("每 %s 分鐘") }
    }

    fn minutes_through_past_the_hour(&self) -> Template<2> {
        const { Template::new("在整點後的 %s 到 %s 分鐘") }
    }

    fn at_minutes_past_the_hour(&self, _n: &str) -> Template<1> {
        const { Template::new("在整點後的 %s 分") }
    }

    fn every_n_hours(&self, _n: &str) -> Template<1> {
        const { Template::new("每 %s 小時") }
    }

    fn between(&self) -> Template<2> {
        const { Template::new("在 %s 和 %s 之間") }
    }

    fn at_time(&self) -> Template<1> {
        const { Template::new("在 %s") }
    }

    fn comma_every_day(&self) -> &'static str {
        ", 每天"
    }

    fn comma_every_n_days_of_the_week(&self, _n: &str) -> Template<1> {
        const { Template::new(", 每週的每 %s 天") }
    }

    fn comma_through(&self, _start: &str) -> Template<2> {
        const { Template::new(", %s 到 %s") }
    }

    fn comma_and_through(&self, _start: &str) -> Template<2> {
        const { Template::new(", 和 %s 到 %s") }
    }

    fn ordinals(&self, _day_of_week: &str) -> [&'static str; 5] {
        ["第一個", "第二個", "第三個", "第四個", "第五個"]
    }

    fn comma_on_the(&self, _nth: &str, _day_of_week: &str) -> &'static str {
        ", 在每月 "
    }

    fn space_of_the_month(&self) -> Template<1> {
        const { Template::new("%s ") }
    }

    fn last_day(&self) -> &'static str {
        "最後一天"
    }

    fn comma_on_the_last_of_the_month(&self, _day_of_week: &str) -> Template<1> {
        const { Template::new(", 每月的最後一個 %s ") }
    }

    fn comma_only_on(&self, _day_of_week: &str) -> Template<1> {
        const { Template::new(", 僅在 %s") }
    }

    fn comma_and_on(&self) -> Template<1> {
        const { Template::new(", 或 %s") }
    }

    fn comma_every_n_months(&self, _n: &str) -> Template<1> {
        const { Template::new(", 每 %s 月") }
    }

    fn comma_only_in(&self) -> Template<1> {
        const { Template::new(", 僅在 %s") }
    }

    fn comma_only_in_month(&self) -> Option<Template<1>> {
        Some(const { Template::new(", 僅在 %s") })
    }

    fn comma_on_the_last_day_of_the_month(&self) -> &'static str {
        ", 每月的最後一天"
    }

    fn comma_on_the_last_weekday_of_the_month(&self) -> &'static str {
        ", 每月的最後一個工作日"
    }

    fn comma_days_before_the_last_day_of_the_month(&self, _n: &str) -> Template<1> {
        const { Template::new(", %s 這個月的最後一天的前幾天") }
    }

    fn first_weekday(&self) -> &'static str {
        "第一個工作日"
    }

    fn weekday_nearest_day(&self) -> Template<1> {
        const { Template::new("最接近 %s 號的工作日") }
    }

    fn comma_on_the_of_the_month(&self) -> Template<1> {
        const { Template::new(", 每月的 %s ") }
    }

    fn comma_every_n_days(&self, _n: &str) -> Template<1> {
        const { Template::new(", 每 %s 天") }
    }

    fn comma_between_days_of_the_month(&self, _range: &str) -> Template<2> {
        const { Template::new(", 在每月的 %s 和 %s 之間") }
    }

    fn comma_on_day_of_the_month(&self, _day: &str) -> Template<1> {
        const { Template::new(", 每月的 %s") }
    }

    fn day_number(&self) -> Option<Template<1>> {
        Some(const { Template::new(" %s 號") })
    }

    fn comma_every_n_years(&self, _n: &str) -> Template<1> {
        const { Template::new(", 每 %s 年") }
    }

    fn comma_only_in_year(&self) -> Option<Template<1>> {
        Some(const { Template::new(", 僅在 %s 年") })
    }

    fn comma_year_through(&self) -> Option<Template<2>> {
        Some(const { Template::new(", 從 %s 年至 %s 年") })
    }

    fn comma_starting(&self) -> Template<1> {
        const { Template::new(", %s 開始") }
    }

    fn days_of_the_week(&self) -> [&'static str; 7] {
        ["星期日", "星期一", "星期二", "星期三", "星期四", "星期五", "星期六"]
    }

    fn months_of_the_year(&self) -> [&'static str; 12] {
        [
            "一月",
            "二月",
            "三月",
            "四月",
            "五月",
            "六月",
            "七月",
            "八月",
            "九月",
            "十月",
            "十一月",
            "十二月",
        ]
    }
}
