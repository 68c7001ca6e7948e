use super::Locale;
use crate::template::Template;
use crate::types::RangePosition;

/// Russian
///
/// Numeric phrases agree with the plural class of their number, nth-weekday
/// ordinals with the gender of the weekday, and weekday/month names take
/// the genitive at the start of a range.
#[derive(Debug, Clone, Copy, Default)]
pub struct Russian;

/// Plural class of a number: 0 for "1", 1 for "2-4", 2 for everything else
fn plural_class(n: &str) -> usize {
    let Ok(value) = n.trim().parse::<i64>() else {
        return 2;
    };
    let value = value.unsigned_abs();
    if (5..20).contains(&(value % 100)) {
        return 2;
    }
    match value % 10 {
        1 => 0,
        2..=4 => 1,
        _ => 2,
    }
}

/// Pick the form agreeing with the plural class of `n`; each form is
/// checked against the template arity at compile time
macro_rules! by_number {
    ($n:expr, [$one:literal, $few:literal, $many:literal $(,)?] $(,)?) => {
        match plural_class($n) {
            0 => const { Template::new($one) },
            1 => const { Template::new($few) },
            _ => const { Template::new($many) },
        }
    };
}

/// Grammatical gender of a weekday: 0 neuter, 1 masculine, 2 feminine
fn weekday_gender(day_of_week: &str) -> usize {
    match day_of_week.trim().parse::<i64>() {
        Ok(0) => 0,
        Ok(1) | Ok(2) | Ok(4) => 1,
        _ => 2,
    }
}

fn starts_with_any(s: &str, chars: &[char]) -> bool {
    s.chars().next().is_some_and(|c| chars.contains(&c))
}

impl Locale for Russian {
    fn id(&self) -> &'static str {
        "ru"
    }

    fn use_24_hour_time_format_by_default(&self) -> bool {
        true
    }

    fn error_occurred(&self) -> &'static str {
        "Произошла ошибка во время генерации описания выражения. Проверьте синтаксис крон-выражения."
    }

    fn at_space(&self) -> &'static str {
        "В "
    }

    fn at(&self) -> &'static str {
        "В"
    }

    fn space_and(&self) -> &'static str {
        " и"
    }

    fn every_second(&self) -> &'static str {
        "каждую секунду"
    }

    fn every_minute(&self) -> &'static str {
        "каждую минуту"
    }

    fn every_hour(&self) -> &'static str {
        "каждый час"
    }

    fn every_minute_between(&self) -> Template<2> {
        const { Template::new("Каждую минуту с %s по %s") }
    }

    fn every_n_seconds(&self, n: &str) -> Template<1> {
        by_number!(
            n,
            ["каждую %s секунду", "каждые %s секунды", "каждые %s секунд"],
        )
    }

    fn seconds_through_past_the_minute(&self) -> Template<2> {
        const { Template::new("секунды с %s по %s") }
    }

    fn at_seconds_past_the_minute(&self, n: &str) -> Template<1> {
        by_number!(n, ["в %s секунду", "в %s секунды", "в %s секунд"])
    }

    fn every_n_minutes(&self, n: &str) -> Template<1> {
        by_number!(
            n,
            ["каждую %s минуту", "каждые %s минуты", "каждые %s минут"],
        )
    }

    fn minutes_through_past_the_hour(&self) -> Template<2> {
        const { Template::new("минуты с %s по %s") }
    }

    fn at_minutes_past_the_hour(&self, n: &str) -> Template<1> {
        by_number!(n, ["в %s минуту", "в %s минуты", "в %s минут"])
    }

    fn every_n_hours(&self, n: &str) -> Template<1> {
        by_number!(n, ["каждый %s час", "каждые %s часа", "каждые %s часов"])
    }

    fn between(&self) -> Template<2> {
        const { Template::new("с %s по %s") }
    }

    fn at_time(&self) -> Template<1> {
        const { Template::new("в %s") }
    }

    fn comma_every_day(&self) -> &'static str {
        ", каждый день"
    }

    fn comma_every_n_days_of_the_week(&self, n: &str) -> Template<1> {
        by_number!(n, ["", ", каждые %s дня недели", ", каждые %s дней недели"])
    }

    fn comma_through(&self, start: &str) -> Template<2> {
        if starts_with_any(start, &['2', '3']) {
            const { Template::new(", со %s по %s") }
        } else {
            const { Template::new(", с %s по %s") }
        }
    }

    fn comma_and_through(&self, start: &str) -> Template<2> {
        if starts_with_any(start, &['2', '3']) {
            const { Template::new(" и со %s по %s") }
        } else {
            const { Template::new(" и с %s по %s") }
        }
    }

    fn ordinals(&self, day_of_week: &str) -> [&'static str; 5] {
        const FORMS: [[&str; 5]; 3] = [
            ["первое", "второе", "третье", "четвертое", "пятое"],
            ["первый", "второй", "третий", "четвертый", "пятый"],
            ["первую", "вторую", "третью", "четвертую", "пятую"],
        ];
        FORMS[weekday_gender(day_of_week)]
    }

    fn comma_on_the(&self, nth: &str, _day_of_week: &str) -> &'static str {
        if nth == "2" {
            ", во "
        } else {
            ", в "
        }
    }

    fn space_of_the_month(&self) -> Template<1> {
        const { Template::new(" %s месяца") }
    }

    fn last_day(&self) -> &'static str {
        "последний день"
    }

    fn comma_on_the_last_of_the_month(&self, day_of_week: &str) -> Template<1> {
        match weekday_gender(day_of_week) {
            0 => const { Template::new(", в последнее %s месяца") },
            1 => const { Template::new(", в последний %s месяца") },
            _ => const { Template::new(", в последнюю %s месяца") },
        }
    }

    fn comma_only_on(&self, day_of_week: &str) -> Template<1> {
        if day_of_week.starts_with('2') {
            const { Template::new(", только во %s") }
        } else {
            const { Template::new(", только в %s") }
        }
    }

    fn comma_and_on(&self) -> Template<1> {
        const { Template::new(", и %s") }
    }

    fn comma_every_n_months(&self, n: &str) -> Template<1> {
        by_number!(n, ["", " каждые %s месяца", " каждые %s месяцев"])
    }

    fn comma_only_in(&self) -> Template<1> {
        const { Template::new(", только в %s") }
    }

    fn comma_only_in_month(&self) -> Option<Template<1>> {
        Some(const { Template::new(", только %s") })
    }

    fn comma_on_the_last_day_of_the_month(&self) -> &'static str {
        ", в последний день месяца"
    }

    fn comma_on_the_last_weekday_of_the_month(&self) -> &'static str {
        ", в последний будний день месяца"
    }

    fn comma_days_before_the_last_day_of_the_month(&self, n: &str) -> Template<1> {
        by_number!(
            n,
            [
                ", за %s день до конца месяца",
                ", за %s дня до конца месяца",
                ", за %s дней до конца месяца",
            ],
        )
    }

    fn first_weekday(&self) -> &'static str {
        "первый будний день"
    }

    fn weekday_nearest_day(&self) -> Template<1> {
        const { Template::new("ближайший будний день к %s числу") }
    }

    fn comma_on_the_of_the_month(&self) -> Template<1> {
        const { Template::new(", в %s месяца") }
    }

    fn comma_every_n_days(&self, n: &str) -> Template<1> {
        by_number!(n, [", каждый %s день", ", каждые %s дня", ", каждые %s дней"])
    }

    fn comma_between_days_of_the_month(&self, range: &str) -> Template<2> {
        let start = range.split('-').next().unwrap_or_default();
        if start == "2" {
            const { Template::new(", со %s по %s число месяца") }
        } else {
            const { Template::new(", с %s по %s число месяца") }
        }
    }

    fn comma_on_day_of_the_month(&self, day: &str) -> Template<1> {
        if day.starts_with('2') {
            const { Template::new(", во %s число месяца") }
        } else {
            const { Template::new(", в %s число месяца") }
        }
    }

    fn comma_every_n_years(&self, n: &str) -> Template<1> {
        by_number!(n, [", каждый %s год", ", каждые %s года", ", каждые %s лет"])
    }

    fn comma_starting(&self) -> Template<1> {
        const { Template::new(", начало %s") }
    }

    fn days_of_the_week(&self) -> [&'static str; 7] {
        [
            "воскресенье",
            "понедельник",
            "вторник",
            "среда",
            "четверг",
            "пятница",
            "суббота",
        ]
    }

    fn days_of_the_week_in_case(
        &self,
        position: Option<RangePosition>,
    ) -> Option<[&'static str; 7]> {
        Some(match position {
            Some(RangePosition::Start) => [
                "воскресенья",
                "понедельника",
                "вторника",
                "среды",
                "четверга",
                "пятницы",
                "субботы",
            ],
            _ => [
                "воскресенье",
                "понедельник",
                "вторник",
                "среду",
                "четверг",
                "пятницу",
                "субботу",
            ],
        })
    }

    fn months_of_the_year(&self) -> [&'static str; 12] {
        [
            "январь",
            "февраль",
            "март",
            "апрель",
            "май",
            "июнь",
            "июль",
            "август",
            "сентябрь",
            "октябрь",
            "ноябрь",
            "декабрь",
        ]
    }

    fn months_of_the_year_in_case(&self, position: RangePosition) -> Option<[&'static str; 12]> {
        Some(match position {
            RangePosition::Start => [
                "января",
                "февраля",
                "марта",
                "апреля",
                "мая",
                "июня",
                "июля",
                "августа",
                "сентября",
                "октября",
                "ноября",
                "декабря",
            ],
            RangePosition::End => self.months_of_the_year(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plural_class() {
        assert_eq!(plural_class("1"), 0);
        assert_eq!(plural_class("21"), 0);
        assert_eq!(plural_class("2"), 1);
        assert_eq!(plural_class("34"), 1);
        assert_eq!(plural_class("5"), 2);
        assert_eq!(plural_class("11"), 2);
        assert_eq!(plural_class("14"), 2);
        assert_eq!(plural_class("20"), 2);
        assert_eq!(plural_class("x"), 2);
        assert_eq!(plural_class("-3"), 1);
    }

    #[test]
    fn test_plural_class_of_extreme_values() {
        assert_eq!(plural_class("-9223372036854775808"), 2);
        assert_eq!(plural_class("9223372036854775807"), 2);
        assert_eq!(plural_class("-9223372036854775801"), 0);
    }

    #[test]
    fn test_numeric_phrases_agree() {
        let ru = Russian;
        assert_eq!(ru.every_n_minutes("1").fill(["1"]), "каждую 1 минуту");
        assert_eq!(ru.every_n_minutes("3").fill(["3"]), "каждые 3 минуты");
        assert_eq!(ru.every_n_minutes("15").fill(["15"]), "каждые 15 минут");
        assert!(ru.comma_every_n_days_of_the_week("1").is_empty());
    }

    #[test]
    fn test_weekday_gender() {
        let ru = Russian;
        assert_eq!(ru.ordinals("0")[0], "первое");
        assert_eq!(ru.ordinals("1")[0], "первый");
        assert_eq!(ru.ordinals("3")[1], "вторую");
        assert_eq!(
            ru.comma_on_the_last_of_the_month("5").as_str(),
            ", в последнюю %s месяца"
        );
    }

    #[test]
    fn test_range_prepositions() {
        let ru = Russian;
        assert_eq!(ru.comma_through("2").as_str(), ", со %s по %s");
        assert_eq!(ru.comma_through("1").as_str(), ", с %s по %s");
        assert_eq!(ru.comma_and_through("3").as_str(), " и со %s по %s");
        assert_eq!(
            ru.comma_between_days_of_the_month("2-10").as_str(),
            ", со %s по %s число месяца"
        );
        assert_eq!(
            ru.comma_between_days_of_the_month("20-25").as_str(),
            ", с %s по %s число месяца"
        );
    }
}
