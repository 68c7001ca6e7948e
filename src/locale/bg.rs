use super::Locale;
use crate::template::Template;

/// Bulgarian
///
/// Ordinal numbers carry a suffix chosen by their last digit, counted
/// phrases switch between singular and plural, and nth-weekday phrases
/// agree with the gender of the weekday.
#[derive(Debug, Clone, Copy, Default)]
pub struct Bulgarian;

/// Suffix class of an ordinal number: 0 for "-в", 1 for "-р", 2 for "-т"
fn number_ending(n: &str) -> usize {
    let value = n.trim().parse::<i64>().unwrap_or(1);
    let digit = if value < 10 || (value > 20 && value % 10 != 0) {
        value % 10
    } else {
        3
    };
    (digit.clamp(1, 3) - 1) as usize
}

/// 0 for a single item, 1 for several
fn plural_class(n: &str) -> usize {
    match n.trim().parse::<i64>() {
        Ok(value) if value < 2 => 0,
        _ => 1,
    }
}

/// Grammatical gender of a weekday: 0 masculine, 1 feminine
fn weekday_gender(day_of_week: &str) -> usize {
    const GENDERS: [usize; 7] = [1, 0, 0, 1, 0, 0, 1];
    day_of_week
        .trim()
        .parse::<usize>()
        .ok()
        .and_then(|day| GENDERS.get(day).copied())
        .unwrap_or(0)
}

const AT_SECOND: [Template<1>; 3] = [
    Template::new("%s-ва секунда"),
    Template::new("%s-ра секунда"),
    Template::new("%s-та секунда"),
];

const AT_MINUTE: [Template<1>; 3] = [
    Template::new("%s-ва минута"),
    Template::new("%s-ра минута"),
    Template::new("%s-та минута"),
];

const ON_DAY: [Template<1>; 3] = [
    Template::new(", на %s-во число от месеца"),
    Template::new(", на %s-ро число от месеца"),
    Template::new(", на %s-то число от месеца"),
];

const BETWEEN_DAYS: [[Template<2>; 3]; 3] = [
    [
        Template::new(", от %s-во до %s-во число на месеца"),
        Template::new(", от %s-во до %s-ро число на месеца"),
        Template::new(", от %s-во до %s-то число на месеца"),
    ],
    [
        Template::new(", от %s-ро до %s-во число на месеца"),
        Template::new(", от %s-ро до %s-ро число на месеца"),
        Template::new(", от %s-ро до %s-то число на месеца"),
    ],
    [
        Template::new(", от %s-то до %s-во число на месеца"),
        Template::new(", от %s-то до %s-ро число на месеца"),
        Template::new(", от %s-то до %s-то число на месеца"),
    ],
];

impl Locale for Bulgarian {
    fn id(&self) -> &'static str {
        "bg"
    }

    fn use_24_hour_time_format_by_default(&self) -> bool {
        true
    }

    fn error_occurred(&self) -> &'static str {
        "Възникна грешка при генериране на описанието на израза. Проверете синтаксиса на cron израза."
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
        "всяка секунда"
    }

    fn every_minute(&self) -> &'static str {
        "всяка минута"
    }

    fn every_hour(&self) -> &'static str {
        "всеки час"
    }

    fn every_minute_between(&self) -> Template<2> {
        const { Template::new("Всяка минута от %s до %s") }
    }

    fn every_n_seconds(&self, _n: &str) -> Template<1> {
        const { Template::new("всеки %s секунди") }
    }

    fn seconds_through_past_the_minute(&self) -> Template<2> {
        const { Template::new("секунди от %s до %s") }
    }

    fn at_seconds_past_the_minute(&self, n: &str) -> Template<1> {
        AT_SECOND[number_ending(n)].clone()
    }

    fn every_n_minutes(&self, _n: &str) -> Template<1> {
        const { Template::new("всеки %s минути") }
    }

    fn minutes_through_past_the_hour(&self) -> Template<2> {
        const { Template::new("минути от %s до %s") }
    }

    fn at_minutes_past_the_hour(&self, n: &str) -> Template<1> {
        AT_MINUTE[number_ending(n)].clone()
    }

    fn every_n_hours(&self, _n: &str) -> Template<1> {
        const { Template::new("всеки %s часа") }
    }

    fn between(&self) -> Template<2> {
        const { Template::new("от %s до %s") }
    }

    fn at_time(&self) -> Template<1> {
        const { Template::new("в %s") }
    }

    fn comma_every_day(&self) -> &'static str {
        ", всеки ден"
    }

    fn comma_every_n_days_of_the_week(&self, n: &str) -> Template<1> {
        match plural_class(n) {
            0 => const { Template::new(", всеки %s ден от седмицата") },
            _ => const { Template::new(", всеки %s дена от седмицата") },
        }
    }

    fn comma_through(&self, _start: &str) -> Template<2> {
        const { Template::new(", от %s до %s") }
    }

    fn comma_and_through(&self, _start: &str) -> Template<2> {
        const { Template::new(" и от %s до %s") }
    }

    fn ordinals(&self, day_of_week: &str) -> [&'static str; 5] {
        const FORMS: [[&str; 5]; 2] = [
            ["първият", "вторият", "третият", "четвъртият", "петият"],
            ["първата", "втората", "третата", "четвъртата", "петата"],
        ];
        FORMS[weekday_gender(day_of_week)]
    }

    fn comma_on_the(&self, _nth: &str, _day_of_week: &str) -> &'static str {
        ", "
    }

    fn space_of_the_month(&self) -> Template<1> {
        const { Template::new(" %s на месеца") }
    }

    fn last_day(&self) -> &'static str {
        "последният ден"
    }

    fn comma_on_the_last_of_the_month(&self, day_of_week: &str) -> Template<1> {
        match weekday_gender(day_of_week) {
            0 => const { Template::new(", в последният %s от месеца") },
            _ => const { Template::new(", в последната %s от месеца") },
        }
    }

    fn comma_only_on(&self, _day_of_week: &str) -> Template<1> {
        const { Template::new(", %s") }
    }

    fn comma_and_on(&self) -> Template<1> {
        const { Template::new(" и %s") }
    }

    fn comma_every_n_months(&self, _n: &str) -> Template<1> {
        const { Template::new(" всеки %s месеца") }
    }

    fn comma_only_in(&self) -> Template<1> {
        const { Template::new(", в %s") }
    }

    fn comma_only_in_month(&self) -> Option<Template<1>> {
        Some(const { Template::new(", %s") })
    }

    fn comma_on_the_last_day_of_the_month(&self) -> &'static str {
        ", в последният ден на месеца"
    }

    fn comma_on_the_last_weekday_of_the_month(&self) -> &'static str {
        ", в последния делничен ден от месеца"
    }

    fn comma_days_before_the_last_day_of_the_month(&self, n: &str) -> Template<1> {
        match plural_class(n) {
            0 => const { Template::new(", %s ден преди края на месеца") },
            _ => const { Template::new(", %s дена преди края на месеца") },
        }
    }

    fn first_weekday(&self) -> &'static str {
        "първият делничен ден"
    }

    fn weekday_nearest_day(&self) -> Template<1> {
        const { Template::new("най-близкият делничен ден до %s число") }
    }

    fn comma_on_the_of_the_month(&self) -> Template<1> {
        const { Template::new(", на %s число от месеца") }
    }

    fn comma_every_n_days(&self, n: &str) -> Template<1> {
        match plural_class(n) {
            0 => const { Template::new(", всеки %s ден") },
            _ => const { Template::new(", всеки %s дена") },
        }
    }

    fn comma_between_days_of_the_month(&self, range: &str) -> Template<2> {
        let mut ends = range.split('-');
        let start = number_ending(ends.next().unwrap_or_default());
        let end = number_ending(ends.next().unwrap_or_default());
        BETWEEN_DAYS[start][end].clone()
    }

    fn comma_on_day_of_the_month(&self, day: &str) -> Template<1> {
        ON_DAY[number_ending(day)].clone()
    }

    fn comma_every_n_years(&self, n: &str) -> Template<1> {
        match plural_class(n) {
            0 => const { Template::new(", всяка %s година") },
            _ => const { Template::new(", всеки %s години") },
        }
    }

    fn comma_starting(&self) -> Template<1> {
        const { Template::new(", започвайки %s") }
    }

    fn days_of_the_week(&self) -> [&'static str; 7] {
        [
            "неделя",
            "понеделник",
            "вторник",
            "сряда",
            "четвъртък",
            "петък",
            "събота",
        ]
    }

    fn months_of_the_year(&self) -> [&'static str; 12] {
        [
            "януари",
            "февруари",
            "март",
            "април",
            "май",
            "юни",
            "юли",
            "август",
            "септевмври",
            "октомври",
            "ноември",
            "декември",
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_ending() {
        assert_eq!(number_ending("1"), 0);
        assert_eq!(number_ending("2"), 1);
        assert_eq!(number_ending("5"), 2);
        assert_eq!(number_ending("12"), 2);
        assert_eq!(number_ending("20"), 2);
        assert_eq!(number_ending("21"), 0);
        assert_eq!(number_ending("22"), 1);
        assert_eq!(number_ending("30"), 2);
        assert_eq!(number_ending("-9223372036854775808"), 0);
    }

    #[test]
    fn test_day_phrases_take_number_endings() {
        let bg = Bulgarian;
        assert_eq!(bg.comma_on_day_of_the_month("1").fill(["1"]), ", на 1-во число от месеца");
        assert_eq!(bg.comma_on_day_of_the_month("15").fill(["15"]), ", на 15-то число от месеца");
        assert_eq!(
            bg.comma_between_days_of_the_month("1-22").fill(["1", "22"]),
            ", от 1-во до 22-ро число на месеца"
        );
        assert_eq!(bg.at_minutes_past_the_hour("2").fill(["2"]), "2-ра минута");
    }

    #[test]
    fn test_counted_phrases_agree() {
        let bg = Bulgarian;
        assert_eq!(bg.comma_every_n_days("1").as_str(), ", всеки %s ден");
        assert_eq!(bg.comma_every_n_days("3").as_str(), ", всеки %s дена");
        assert_eq!(bg.comma_every_n_years("5").as_str(), ", всеки %s години");
    }

    #[test]
    fn test_weekday_gender() {
        let bg = Bulgarian;
        assert_eq!(bg.ordinals("1")[0], "първият");
        assert_eq!(bg.ordinals("3")[1], "втората");
        assert_eq!(bg.ordinals("0")[2], "третата");
        assert_eq!(
            bg.comma_on_the_last_of_the_month("6").as_str(),
            ", в последната %s от месеца"
        );
    }
}
