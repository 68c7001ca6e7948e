use super::Locale;
use crate::template::Template;

/// Japanese
#[derive(Debug, Clone, Copy, Default)]
pub struct Japanese;

impl Locale for Japanese {
    fn id(&self) -> &'static str {
        "ja"
    }

    fn use_24_hour_time_format_by_default(&self) -> bool {
        true
    }

    fn error_occurred(&self) -> &'static str {
        "式の記述を生成する際にエラーが発生しました。Cron 式の構文を確認してください。"
    }

    fn at_space(&self) -> &'static str {
        "次において実施"
    }

    fn at(&self) -> &'static str {
        "次において実施"
    }

    fn space_and(&self) -> &'static str {
        "と"
    }

    fn every_second(&self) -> &'static str {
        "毎秒"
    }

    fn every_minute(&self) -> &'static str {
        "毎分"
    }

    fn every_hour(&self) -> &'static str {
        "毎時"
    }

    fn every_minute_between(&self) -> Template<2> {
        const { Template::new("%s から %s まで毎分") }
    }

    fn every_n_seconds(&self, _n: &str) -> Template<1> {
        const { Template::new("%s 秒ごと") }
    }

    fn seconds_through_past_the_minute(&self) -> Template<2> {
        const { Template::new("毎分 %s 秒から %s 秒まで") }
    }

    fn at_seconds_past_the_minute(&self, _n: &str) -> Template<1> {
        const { Template::new("毎分 %s 秒過ぎ") }
    }

    fn every_n_minutes(&self, _n: &str) -> Template<1> {
        const { Template::new("%s 分ごと") }
    }

    fn minutes_through_past_the_hour(&self) -> Template<2> {
        const { Template::new("毎時 %s 分から %s 分まで") }
    }

    fn at_minutes_past_the_hour(&self, _n: &str) -> Template<1> {
        const { Template::new("毎時 %s 分過ぎ") }
    }

    fn every_n_hours(&self, _n: &str) -> Template<1> {
        const { Template::new("%s 時間ごと") }
    }

    fn between(&self) -> Template<2> {
        const { Template::new("%s と %s の間") }
    }

    fn at_time(&self) -> Template<1> {
        const { Template::new("次において実施 %s") }
    }

    fn comma_every_day(&self) -> &'static str {
        "、毎日"
    }

    fn comma_every_n_days_of_the_week(&self, _n: &str) -> Template<1> {
        const { Template::new("、週のうち %s 日ごと") }
    }

    fn comma_through(&self, _start: &str) -> Template<2> {
        const { Template::new("、%s から %s まで") }
    }

    fn comma_and_through(&self, _start: &str) -> Template<2> {
        const { Template::new("、%s から %s まで") }
    }

    fn ordinals(&self, _day_of_week: &str) -> [&'static str; 5] {
        ["1 番目", "2 番目", "3 番目", "4 番目", "5 番目"]
    }

    fn comma_on_the(&self, _nth: &str, _day_of_week: &str) -> &'static str {
        "次に"
    }

    fn space_of_the_month(&self) -> Template<1> {
        const { Template::new("月のうち %s") }
    }

    fn last_day(&self) -> &'static str {
        "最終日"
    }

    fn comma_on_the_last_of_the_month(&self, _day_of_week: &str) -> Template<1> {
        const { Template::new("月の最後の %s に") }
    }

    fn comma_only_on(&self, _day_of_week: &str) -> Template<1> {
        const { Template::new("%s にのみ") }
    }

    fn comma_and_on(&self) -> Template<1> {
        const { Template::new("、〜と %s") }
    }

    fn comma_every_n_months(&self, _n: &str) -> Template<1> {
        const { Template::new("、%s か月ごと") }
    }

    fn comma_only_in(&self) -> Template<1> {
        const { Template::new("%s でのみ") }
    }

    fn comma_on_the_last_day_of_the_month(&self) -> &'static str {
        "次の最終日に"
    }

    fn comma_on_the_last_weekday_of_the_month(&self) -> &'static str {
        "月の最後の平日に"
    }

    fn comma_days_before_the_last_day_of_the_month(&self, _n: &str) -> Template<1> {
        const { Template::new("月の最終日の %s 日前") }
    }

    fn first_weekday(&self) -> &'static str {
        "最初の平日"
    }

    fn weekday_nearest_day(&self) -> Template<1> {
        const { Template::new("%s 日の直近の平日") }
    }

    fn comma_on_the_of_the_month(&self) -> Template<1> {
        const { Template::new("月の %s に") }
    }

    fn comma_every_n_days(&self, _n: &str) -> Template<1> {
        const { Template::new("、%s 日ごと") }
    }

    fn comma_between_days_of_the_month(&self, _range: &str) -> Template<2> {
        const { Template::new("、月の %s 日から %s 日の間") }
    }

    fn comma_on_day_of_the_month(&self, _day: &str) -> Template<1> {
        const { Template::new("、月の %s 日目") }
    }

    fn comma_every_n_years(&self, _n: &str) -> Template<1> {
        const { Template::new("、%s 年ごと") }
    }

    fn comma_starting(&self) -> Template<1> {
        const { Template::new("、%s に開始") }
    }

    fn days_of_the_week(&self) -> [&'static str; 7] {
        ["日曜日", "月曜日", "火曜日", "水曜日", "木曜日", "金曜日", "土曜日"]
    }

    fn months_of_the_year(&self) -> [&'static str; 12] {
        [
            "1月",
            "2月",
            "3月",
            "4月",
            "5月",
            "6月",
            "7月",
            "8月",
            "9月",
            "10月",
            "11月",
            "12月",
        ]
    }
}
