use super::Locale;
use crate::template::Template;

/// Korean
#[derive(Debug, Clone, Copy, Default)]
pub struct Korean;

impl Locale for Korean {
    fn id(&self) -> &'static str {
        "ko"
    }

    fn use_24_hour_time_format_by_default(&self) -> bool {
        false
    }

    fn set_period_before_time(&self) -> bool {
        true
    }

    fn am(&self) -> &'static str {
        "오전"
    }

    fn pm(&self) -> &'static str {
        "오후"
    }

    fn error_occurred(&self) -> &'static str {
        "표현식 설명을 생성하는 중 오류가 발생했습니다. cron 표현식 구문을 확인하십시오."
    }

    fn at_space(&self) -> &'static str {
        "시간 "
    }

    fn at(&self) -> &'static str {
        "시간"
    }

    fn space_and(&self) -> &'static str {
        " 및"
    }

    fn every_second(&self) -> &'static str {
        "1초마다"
    }

    fn every_minute(&self) -> &'static str {
        "1분마다"
    }

    fn every_hour(&self) -> &'static str {
        "1시간마다"
    }

    fn every_minute_between(&self) -> Template<2> {
        const { Template::new("%s 및 %s 사이에 매 분") }
    }

    fn every_n_seconds(&self, _n: &str) -> Template<1> {
        const { Template::new("%s초마다") }
    }

    fn seconds_through_past_the_minute(&self) -> Template<2> {
        const { Template::new("정분 후 %s초에서 %s초까지") }
    }

    fn at_seconds_past_the_minute(&self, _n: &str) -> Template<1> {
        const { Template::new("정분 후 %s초에서") }
    }

    fn every_n_minutes(&self, _n: &str) -> Template<1> {
        const { Template::new("%s분마다") }
    }

    fn minutes_through_past_the_hour(&self) -> Template<2> {
        const { Template::new("정시 후 %s분에서 %s분까지") }
    }

    fn at_minutes_past_the_hour(&self, _n: &str) -> Template<1> {
        const { Template::new("정시 후 %s분에서") }
    }

    fn every_n_hours(&self, _n: &str) -> Template<1> {
        const { Template::new("%s시간마다") }
    }

    fn between(&self) -> Template<2> {
        const { Template::new("%s에서 %s 사이") }
    }

    fn at_time(&self) -> Template<1> {
        const { Template::new("%s에서") }
    }

    fn comma_every_day(&self) -> &'static str {
        ", 매일"
    }

    fn comma_every_n_days_of_the_week(&self, _n: &str) -> Template<1> {
        const { Template::new(", 주 중 %s일마다") }
    }

    fn comma_through(&self, _start: &str) -> Template<2> {
        const { Template::new(", %s에서 %s까지") }
    }

    fn comma_and_through(&self, _start: &str) -> Template<2> {
        const { Template::new(", 및 %s에서 %s까지") }
    }

    fn ordinals(&self, _day_of_week: &str) -> [&'static str; 5] {
        ["첫 번째", "두 번째", "세 번째", "네 번째", "다섯 번째"]
    }

    fn comma_on_the(&self, _nth: &str, _day_of_week: &str) -> &'static str {
        ", 해당 "
    }

    fn space_of_the_month(&self) -> Template<1> {
        const { Template::new(" 해당 월의 %s") }
    }

    fn last_day(&self) -> &'static str {
        "마지막 날"
    }

    fn comma_on_the_last_of_the_month(&self, _day_of_week: &str) -> Template<1> {
        const { Template::new(", 해당 월의 마지막 %s") }
    }

    fn comma_only_on(&self, _day_of_week: &str) -> Template<1> {
        const { Template::new(", %s에만") }
    }

    fn comma_and_on(&self) -> Template<1> {
        const { Template::new(", 및 %s에") }
    }

    fn comma_every_n_months(&self, _n: &str) -> Template<1> {
        const { Template::new(", %s개월마다") }
    }

    fn comma_only_in(&self) -> Template<1> {
        const { Template::new(", %s에만") }
    }

    fn comma_on_the_last_day_of_the_month(&self) -> &'static str {
        ", 해당 월의 마지막 날에"
    }

    fn comma_on_the_last_weekday_of_the_month(&self) -> &'static str {
        ", 해당 월의 마지막 평일에"
    }

    fn comma_days_before_the_last_day_of_the_month(&self, _n: &str) -> Template<1> {
        const { Template::new(", 해당 월의 마지막 날 %s일 전") }
    }

    fn first_weekday(&self) -> &'static str {
        "첫 번째 평일"
    }

    fn weekday_nearest_day(&self) -> Template<1> {
        const { Template::new("%s일과 가장 가까운 평일") }
    }

    fn comma_on_the_of_the_month(&self) -> Template<1> {
        const { Template::new(", 해당 월의 %s에") }
    }

    fn comma_every_n_days(&self, _n: &str) -> Template<1> {
        const { Template::new(", %s일마다") }
    }

    fn comma_between_days_of_the_month(&self, _range: &str) -> Template<2> {
        const { Template::new(", 해당 월의 %s일에서 %s일까지") }
    }

    fn comma_on_day_of_the_month(&self, _day: &str) -> Template<1> {
        const { Template::new(", 해당 월의 %s일에") }
    }

    fn comma_every_n_years(&self, _n: &str) -> Template<1> {
        const { Template::new(", %s년마다") }
    }

    fn comma_starting(&self) -> Template<1> {
        const { Template::new(", %s부터") }
    }

    fn days_of_the_week(&self) -> [&'static str; 7] {
        ["일요일", "월요일", "화요일", "수요일", "목요일", "금요일", "토요일"]
    }

    fn months_of_the_year(&self) -> [&'static str; 12] {
        [
            "1월",
            "2월",
            "3월",
            "4월",
            "5월",
            "6월",
            "7월",
            "8월",
            "9월",
            "10월",
            "11월",
            "12월",
        ]
    }
}
