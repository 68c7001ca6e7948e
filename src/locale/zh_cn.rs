use super::Locale;
use crate::template::Template;

/// Simplified Chinese
#[derive(Debug, Clone, Copy, Default)]
pub struct SimplifiedChinese;

impl Locale for SimplifiedChinese {
    fn id(&self) -> &'static str {
        "zh_CN"
    }

    fn use_24_hour_time_format_by_default(&self) -> bool {
        false
    }

    fn set_period_before_time(&self) -> bool {
        true
    }

    fn am(&self) -> &'static str {
        "上午"
    }

    fn pm(&self) -> &'static str {
        "下午"
    }

    fn error_occurred(&self) -> &'static str {
        "生成表达式描述时发生了错误，请检查cron表达式语法。"
    }

    fn at_space(&self) -> &'static str {
        "在"
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
        "每分钟"
    }

    fn every_hour(&self) -> &'static str {
        "每小时"
    }

    fn every_minute_between(&self) -> Template<2> {
        const { Template::new("在 %s 至 %s 之间的每分钟") }
    }

    fn every_n_seconds(&self, _n: &str) -> Template<1> {
        const { Template::new("每隔 %s 秒") }
    }

    fn seconds_through_past_the_minute(&self) -> Template<2> {
        const { Template::new("在一分钟后的第 %s 到 %s 秒") }
    }

    fn at_seconds_past_the_minute(&self, _n: &str) -> Template<1> {
        const { Template::new("在一分钟后的第 %s 秒") }
    }

    fn every_n_minutes(&self, _n: &str) -> Template<1> {
        const { Template::new("每隔 %s 分钟") }
    }

    fn minutes_through_past_the_hour(&self) -> Template<2> {
        const { Template::new("在整点后的第 %s 到 %s 分钟") }
    }

    fn at_minutes_past_the_hour(&self, _n: &str) -> Template<1> {
        const { Template::new("在整点后的第 %s 分钟") }
    }

    fn every_n_hours(&self, _n: &str) -> Template<1> {
        const { Template::new("每隔 %s 小时") }
    }

    fn between(&self) -> Template<2> {
        const { Template::new("在 %s 和 %s 之间") }
    }

    fn at_time(&self) -> Template<1> {
        const { Template::new("在%s") }
    }

    fn comma_every_day(&self) -> &'static str {
        ", 每天"
    }

    fn comma_every_n_days_of_the_week(&self, _n: &str) -> Template<1> {
        const { Template::new(", 每周的每 %s 天") }
    }

    fn comma_through(&self, _start: &str) -> Template<2> {
        const { Template::new(", %s至%s") }
    }

    fn comma_and_through(&self, _start: &str) -> Template<2> {
        const { Template::new(", 和%s至%s") }
    }

    fn ordinals(&self, _day_of_week: &str) -> [&'static str; 5] {
        ["第一个", "第二个", "第三个", "第四个", "第五个"]
    }

    fn comma_on_the(&self, _nth: &str, _day_of_week: &str) -> &'static str {
        ", 限每月的"
    }

    fn space_of_the_month(&self) -> Template<1> {
        const { Template::new("%s") }
    }

    fn last_day(&self) -> &'static str {
        "本月最后一天"
    }

    fn comma_on_the_last_of_the_month(&self, _day_of_week: &str) -> Template<1> {
        const { Template::new(", 限每月的最后一个%s") }
    }

    fn comma_only_on(&self, _day_of_week: &str) -> Template<1> {
        const { Template::new(", 仅%s") }
    }

    fn comma_and_on(&self) -> Template<1> {
        const { Template::new(", 或者为%s") }
    }

    fn comma_every_n_months(&self, _n: &str) -> Template<1> {
        const { Template::new(", 每隔 %s 个月") }
    }

    fn comma_only_in(&self) -> Template<1> {
        const { Template::new(", 仅限%s") }
    }

    fn comma_only_in_month(&self) -> Option<Template<1>> {
        Some(const { Template::new(", 仅于%s份") })
    }

    fn comma_on_the_last_day_of_the_month(&self) -> &'static str {
        ", 限每月的最后一天"
    }

    fn comma_on_the_last_weekday_of_the_month(&self) -> &'static str {
        ", 限每月的最后一个工作日"
    }

    fn comma_days_before_the_last_day_of_the_month(&self, _n: &str) -> Template<1> {
        const { Template::new(", 限每月最后%s天") }
    }

    fn first_weekday(&self) -> &'static str {
        "第一个工作日"
    }

    fn weekday_nearest_day(&self) -> Template<1> {
        const { Template::new("最接近 %s 号的工作日") }
    }

    fn comma_on_the_of_the_month(&self) -> Template<1> {
        const { Template::new(", 限每月的%s") }
    }

    fn comma_every_n_days(&self, _n: &str) -> Template<1> {
        const { Template::new(", 每隔 %s 天") }
    }

    fn comma_between_days_of_the_month(&self, _range: &str) -> Template<2> {
        const { Template::new(", 限每月的 %s 至 %s 之间") }
    }

    fn comma_on_day_of_the_month(&self, _day: &str) -> Template<1> {
        const { Template::new(", 限每月%s") }
    }

    fn day_number(&self) -> Option<Template<1>> {
        Some(const { Template::new(" %s 号") })
    }

    fn comma_every_n_years(&self, _n: &str) -> Template<1> {
        const { Template::new(", 每隔 %s 年") }
    }

    fn comma_only_in_year(&self) -> Option<Template<1>> {
        Some(const { Template::new(", 仅于 %s 年") })
    }

    fn comma_year_through(&self) -> Option<Template<2>> {
        Some(const { Template::new(", 从%s年至%s年") })
    }

    fn comma_starting(&self) -> Template<1> {
        const { Template::new(", %s开始") }
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
