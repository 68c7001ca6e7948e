use super::Locale;
use crate::template::Template;

/// Romanian
#[derive(Debug, Clone, Copy, Default)]
pub struct Romanian;

impl Locale for Romanian {
    fn id(&self) -> &'static str {
        "ro"
    }

    fn use_24_hour_time_format_by_default(&self) -> bool {
        true
    }

    fn error_occurred(&self) -> &'static str {
        "Eroare la generarea descrierii. Verificați sintaxa."
    }

    fn at_space(&self) -> &'static str {
        "La "
    }

    fn at(&self) -> &'static str {
        "La"
    }

    fn space_and(&self) -> &'static str {
        " și"
    }

    fn every_second(&self) -> &'static str {
        "în fiecare secundă"
    }

    fn every_minute(&self) -> &'static str {
        "în fiecare minut"
    }

    fn every_hour(&self) -> &'static str {
        "în fiecare oră"
    }

    fn every_minute_between(&self) -> Template<2> {
        const { Template::new("În fiecare minut între %s și %s") }
    }

    fn every_n_seconds(&self, _n: &str) -> Template<1> {
        const { Template::new("la fiecare %s secunde") }
    }

    fn seconds_through_past_the_minute(&self) -> Template<2> {
        const { Template::new("între secunda %s și secunda %s") }
    }

    fn at_seconds_past_the_minute(&self, _n: &str) -> Template<1> {
        const { Template::new("la și %s secunde") }
    }

    fn at_seconds_past_the_minute_gt20(&self) -> Option<Template<1>> {
        Some(const { Template::new("la și %s de secunde") })
    }

    fn every_n_minutes(&self, _n: &str) -> Template<1> {
        const { Template::new("la fiecare %s minute") }
    }

    fn minutes_through_past_the_hour(&self) -> Template<2> {
        const { Template::new("între minutele %s și %s") }
    }

    fn at_minutes_past_the_hour(&self, _n: &str) -> Template<1> {
        const { Template::new("la și %s minute") }
    }

    fn at_minutes_past_the_hour_gt20(&self) -> Option<Template<1>> {
        Some(const { Template::new("la și %s de minute") })
    }

    fn every_n_hours(&self, _n: &str) -> Template<1> {
        const { Template::new("la fiecare %s ore") }
    }

    fn between(&self) -> Template<2> {
        const { Template::new("între %s și %s") }
    }

    fn at_time(&self) -> Template<1> {
        const { Template::new("la %s") }
    }

    fn comma_every_day(&self) -> &'static str {
        ", în fiecare zi"
    }

    fn comma_every_n_days_of_the_week(&self, _n: &str) -> Template<1> {
        const { Template::new(", la fiecare a %s-a zi a săptămânii") }
    }

    fn comma_through(&self, _start: &str) -> Template<2> {
        const { Template::new(", de %s până %s") }
    }

    fn comma_and_through(&self, _start: &str) -> Template<2> {
        const { Template::new(", și de %s până %s") }
    }

    fn ordinals(&self, _day_of_week: &str) -> [&'static str; 5] {
        ["prima", "a doua", "a treia", "a patra", "a cincea"]
    }

    fn comma_on_the(&self, _nth: &str, _day_of_week: &str) -> &'static str {
        ", în "
    }

    fn space_of_the_month(&self) -> Template<1> {
        const { Template::new(" %s a lunii") }
    }

    fn last_day(&self) -> &'static str {
        "ultima zi"
    }

    fn comma_on_the_last_of_the_month(&self, _day_of_week: &str) -> Template<1> {
        const { Template::new(", în ultima %s a lunii") }
    }

    fn comma_only_on(&self, _day_of_week: &str) -> Template<1> {
        const { Template::new(", doar %s") }
    }

    fn comma_and_on(&self) -> Template<1> {
        const { Template::new(", și %s") }
    }

    fn comma_every_n_months(&self, _n: &str) -> Template<1> {
        const { Template::new(", la fiecare %s luni") }
    }

    fn comma_only_in(&self) -> Template<1> {
        const { Template::new(", doar în %s") }
    }

    fn comma_month_through(&self) -> Option<Template<2>> {
        Some(const { Template::new(", din %s până în %s") })
    }

    fn comma_on_the_last_day_of_the_month(&self) -> &'static str {
        ", în ultima zi a lunii"
    }

    fn comma_on_the_last_weekday_of_the_month(&self) -> &'static str {
        ", în ultima zi lucrătoare a lunii"
    }

    fn comma_days_before_the_last_day_of_the_month(&self, _n: &str) -> Template<1> {
        const { Template::new(", %s zile înainte de ultima zi a lunii") }
    }

    fn first_weekday(&self) -> &'static str {
        "prima zi a săptămânii"
    }

    fn weekday_nearest_day(&self) -> Template<1> {
        const { Template::new("cea mai apropiată zi a săptămânii de ziua %s") }
    }

    fn comma_on_the_of_the_month(&self) -> Template<1> {
        const { Template::new(", în %s a lunii") }
    }

    fn comma_every_n_days(&self, _n: &str) -> Template<1> {
        const { Template::new(", la fiecare %s zile") }
    }

    fn comma_between_days_of_the_month(&self, _range: &str) -> Template<2> {
        const { Template::new(", între zilele %s și %s ale lunii") }
    }

    fn comma_on_day_of_the_month(&self, _day: &str) -> Template<1> {
        const { Template::new(", în ziua %s a lunii") }
    }

    fn comma_every_n_years(&self, _n: &str) -> Template<1> {
        const { Template::new(", o dată la %s ani") }
    }

    fn comma_year_through(&self) -> Option<Template<2>> {
        Some(const { Template::new(", din %s până în %s") })
    }

    fn comma_starting(&self) -> Template<1> {
        const { Template::new(", pornire %s") }
    }

    fn days_of_the_week(&self) -> [&'static str; 7] {
        ["duminică", "luni", "marți", "miercuri", "joi", "vineri", "sâmbătă"]
    }

    fn months_of_the_year(&self) -> [&'static str; 12] {
        [
            "ianuarie",
            "februarie",
            "martie",
            "aprilie",
            "mai",
            "iunie",
            "iulie",
            "august",
            "septembrie",
            "octombrie",
            "noiembrie",
            "decembrie",
        ]
    }
}
