use super::Locale;
use crate::template::Template;

/// Brazilian Portuguese
///
/// Ordinals and the nth-weekday lead-in are masculine for Saturday and
/// Sunday and feminine for the "-feira" weekdays.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrazilianPortuguese;

fn is_masculine_day(day_of_week: &str) -> bool {
    matches!(day_of_week, "6" | "0")
}

fn is_range(s: &str) -> bool {
    s.as_bytes().get(1) == Some(&b'-')
}

impl Locale for BrazilianPortuguese {
    fn id(&self) -> &'static str {
        "pt_BR"
    }

    fn use_24_hour_time_format_by_default(&self) -> bool {
        true
    }

    fn error_occurred(&self) -> &'static str {
        "Ocorreu um erro ao gerar a descrição da expressão Cron."
    }

    fn at_space(&self) -> &'static str {
        "às "
    }

    fn at(&self) -> &'static str {
        "às"
    }

    fn space_and(&self) -> &'static str {
        " e"
    }

    fn every_second(&self) -> &'static str {
        "a cada segundo"
    }

    fn every_minute(&self) -> &'static str {
        "a cada minuto"
    }

    fn every_hour(&self) -> &'static str {
        "a cada hora"
    }

    fn every_minute_between(&self) -> Template<2> {
        const { Template::new("a cada minuto entre %s e %s") }
    }

    fn every_n_seconds(&self, _n: &str) -> Template<1> {
        const { Template::new("a cada %s segundos") }
    }

    fn seconds_through_past_the_minute(&self) -> Template<2> {
        const { Template::new("No segundo %s até %s de cada minuto") }
    }

    fn at_seconds_past_the_minute(&self, _n: &str) -> Template<1> {
        const { Template::new("aos %s segundos do minuto") }
    }

    fn every_n_minutes(&self, _n: &str) -> Template<1> {
        const { Template::new("a cada %s minutos") }
    }

    fn minutes_through_past_the_hour(&self) -> Template<2> {
        const { Template::new("do minuto %s até %s de cada hora") }
    }

    fn at_minutes_past_the_hour(&self, _n: &str) -> Template<1> {
        const { Template::new("aos %s minutos da hora") }
    }

    fn every_n_hours(&self, _n: &str) -> Template<1> {
        const { Template::new("a cada %s horas") }
    }

    fn between(&self) -> Template<2> {
        const { Template::new("entre %s e %s") }
    }

    fn at_time(&self) -> Template<1> {
        const { Template::new("Às %s") }
    }

    fn comma_every_day(&self) -> &'static str {
        ", a cada dia"
    }

    fn comma_every_n_days_of_the_week(&self, _n: &str) -> Template<1> {
        const { Template::new(", a cada %s dias de semana") }
    }

    fn comma_through(&self, _start: &str) -> Template<2> {
        const { Template::new(", de %s a %s") }
    }

    fn comma_and_through(&self, _start: &str) -> Template<2> {
        const { Template::new(", e de %s a %s") }
    }

    fn ordinals(&self, day_of_week: &str) -> [&'static str; 5] {
        if is_masculine_day(day_of_week) {
            ["primeiro", "segundo", "terceiro", "quarto", "quinto"]
        } else {
            ["primeira", "segunda", "terceira", "quarta", "quinta"]
        }
    }

    fn comma_on_the(&self, _nth: &str, day_of_week: &str) -> &'static str {
        if is_masculine_day(day_of_week) {
            ", no"
        } else {
            ", na "
        }
    }

    fn space_of_the_month(&self) -> Template<1> {
        const { Template::new(" %s do mês") }
    }

    fn last_day(&self) -> &'static str {
        "o último dia"
    }

    fn comma_on_the_last_of_the_month(&self, _day_of_week: &str) -> Template<1> {
        const { Template::new(", na última %s do mês") }
    }

    fn comma_only_on(&self, day_of_week: &str) -> Template<1> {
        if is_range(day_of_week) {
            const { Template::new(", somente %s") }
        } else {
            const { Template::new(", somente de %s") }
        }
    }

    fn comma_and_on(&self) -> Template<1> {
        const { Template::new(", e de %s") }
    }

    fn comma_every_n_months(&self, _n: &str) -> Template<1> {
        const { Template::new(", a cada %s meses") }
    }

    fn comma_only_in(&self) -> Template<1> {
        const { Template::new(", somente em %s") }
    }

    fn comma_on_the_last_day_of_the_month(&self) -> &'static str {
        ", no último dia do mês"
    }

    fn comma_on_the_last_weekday_of_the_month(&self) -> &'static str {
        ", no último dia da semana do mês"
    }

    fn comma_days_before_the_last_day_of_the_month(&self, _n: &str) -> Template<1> {
        const { Template::new(", %s dias antes do último dia do mês") }
    }

    fn first_weekday(&self) -> &'static str {
        "primeiro dia da semana"
    }

    fn weekday_nearest_day(&self) -> Template<1> {
        const { Template::new("dia da semana mais próximo do dia %s") }
    }

    fn comma_on_the_of_the_month(&self) -> Template<1> {
        const { Template::new(", no %s do mês") }
    }

    fn comma_every_n_days(&self, _n: &str) -> Template<1> {
        const { Template::new(", a cada %s dias") }
    }

    fn comma_between_days_of_the_month(&self, _range: &str) -> Template<2> {
        const { Template::new(", entre os dias %s e %s do mês") }
    }

    fn comma_on_day_of_the_month(&self, _day: &str) -> Template<1> {
        const { Template::new(", no dia %s do mês") }
    }

    fn comma_every_n_years(&self, _n: &str) -> Template<1> {
        const { Template::new(", a cada %s anos") }
    }

    fn comma_starting(&self) -> Template<1> {
        const { Template::new(", iniciando %s") }
    }

    fn days_of_the_week(&self) -> [&'static str; 7] {
        [
            "domingo",
            "segunda-feira",
            "terça-feira",
            "quarta-feira",
            "quinta-feira",
            "sexta-feira",
            "sábado",
        ]
    }

    fn months_of_the_year(&self) -> [&'static str; 12] {
        [
            "janeiro",
            "fevereiro",
            "março",
            "abril",
            "maio",
            "junho",
            "julho",
            "agosto",
            "setembro",
            "outubro",
            "novembro",
            "dezembro",
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordinals_agree_with_weekday() {
        let pt = BrazilianPortuguese;
        assert_eq!(pt.ordinals("0")[0], "primeiro");
        assert_eq!(pt.ordinals("6")[2], "terceiro");
        assert_eq!(pt.ordinals("1")[0], "primeira");
        assert_eq!(pt.comma_on_the("1", "0"), ", no");
        assert_eq!(pt.comma_on_the("1", "3"), ", na ");
    }

    #[test]
    fn test_only_on_range() {
        let pt = BrazilianPortuguese;
        assert_eq!(pt.comma_only_on("1-5,6").as_str(), ", somente %s");
        assert_eq!(pt.comma_only_on("1").as_str(), ", somente de %s");
    }
}
