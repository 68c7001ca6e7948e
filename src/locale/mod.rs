//! Locale trait and bundled locales
//!
//! A locale supplies every phrase the descriptor composes. Required methods
//! return literal phrases or [`Template`]s; methods returning `Option` are
//! overrides the descriptor falls back from when a locale has no special
//! wording. Several phrases take the value they will be filled with so a
//! locale can pick a plural class, gender or case.

mod af;
mod ar;
mod be;
mod bg;
mod ca;
mod cs;
mod da;
mod de;
mod en;
mod es;
mod fa;
mod fi;
mod fr;
mod he;
mod hu;
mod id;
mod it;
mod ja;
mod ko;
mod my;
mod nb;
mod nl;
mod pl;
mod pt_br;
mod pt_pt;
mod ro;
mod ru;
mod sk;
mod sl;
mod sv;
mod sw;
mod th;
mod tr;
mod uk;
mod vi;
mod zh_cn;
mod zh_tw;

pub use af::Afrikaans;
pub use ar::Arabic;
pub use be::Belarusian;
pub use bg::Bulgarian;
pub use ca::Catalan;
pub use cs::Czech;
pub use da::Danish;
pub use de::German;
pub use en::English;
pub use es::Spanish;
pub use fa::Persian;
pub use fi::Finnish;
pub use fr::French;
pub use he::Hebrew;
pub use hu::Hungarian;
pub use id::Indonesian;
pub use it::Italian;
pub use ja::Japanese;
pub use ko::Korean;
pub use my::Malay;
pub use nb::NorwegianBokmal;
pub use nl::Dutch;
pub use pl::Polish;
pub use pt_br::BrazilianPortuguese;
pub use pt_pt::EuropeanPortuguese;
pub use ro::Romanian;
pub use ru::Russian;
pub use sk::Slovak;
pub use sl::Slovenian;
pub use sv::Swedish;
pub use sw::Swahili;
pub use th::Thai;
pub use tr::Turkish;
pub use uk::Ukrainian;
pub use vi::Vietnamese;
pub use zh_cn::SimplifiedChinese;
pub use zh_tw::TraditionalChinese;

use crate::template::Template;
use crate::types::RangePosition;
use std::sync::Arc;

/// Phrase source for one output language
///
/// Arguments named `n` are the raw numeric text that will be substituted
/// into the returned template. Day-of-week arguments are canonical
/// (0 = Sunday).
pub trait Locale: Send + Sync {
    /// Catalog identifier, e.g. "en" or "pt_BR"
    fn id(&self) -> &'static str;

    fn use_24_hour_time_format_by_default(&self) -> bool;

    /// Put the AM/PM marker before the time instead of after it
    fn set_period_before_time(&self) -> bool {
        false
    }

    fn am(&self) -> &'static str {
        "AM"
    }

    fn pm(&self) -> &'static str {
        "PM"
    }

    /// Sentence returned instead of an error when errors are suppressed
    fn error_occurred(&self) -> &'static str;

    fn at_space(&self) -> &'static str;
    fn at(&self) -> &'static str;
    fn space_and(&self) -> &'static str;

    fn every_second(&self) -> &'static str;
    fn every_minute(&self) -> &'static str;
    fn every_hour(&self) -> &'static str;
    fn every_minute_between(&self) -> Template<2>;

    fn every_n_seconds(&self, n: &str) -> Template<1>;
    fn seconds_through_past_the_minute(&self) -> Template<2>;
    fn at_seconds_past_the_minute(&self, n: &str) -> Template<1>;
    /// Wording for seconds 20 and above
    fn at_seconds_past_the_minute_gt20(&self) -> Option<Template<1>> {
        None
    }

    fn every_n_minutes(&self, n: &str) -> Template<1>;
    fn minutes_through_past_the_hour(&self) -> Template<2>;
    fn at_minutes_past_the_hour(&self, n: &str) -> Template<1>;
    /// Wording for minutes 20 and above
    fn at_minutes_past_the_hour_gt20(&self) -> Option<Template<1>> {
        None
    }

    fn every_n_hours(&self, n: &str) -> Template<1>;
    fn between(&self) -> Template<2>;
    fn at_time(&self) -> Template<1>;

    fn comma_every_day(&self) -> &'static str;
    fn comma_every_n_days_of_the_week(&self, n: &str) -> Template<1>;

    /// Generic range phrase; `start` is the raw range start
    fn comma_through(&self, start: &str) -> Template<2>;
    /// Range phrase used when it follows another day constraint
    fn comma_and_through(&self, start: &str) -> Template<2>;

    /// Ordinals "first" through "fifth", agreeing with `day_of_week`
    fn ordinals(&self, day_of_week: &str) -> [&'static str; 5];
    /// Lead-in for an nth-weekday phrase; trimmed before use
    fn comma_on_the(&self, nth: &str, day_of_week: &str) -> &'static str;
    fn space_of_the_month(&self) -> Template<1>;

    fn last_day(&self) -> &'static str;
    fn comma_on_the_last_of_the_month(&self, day_of_week: &str) -> Template<1>;
    fn comma_only_on(&self, day_of_week: &str) -> Template<1>;
    fn comma_and_on(&self) -> Template<1>;

    fn comma_every_n_months(&self, n: &str) -> Template<1>;
    fn comma_only_in(&self) -> Template<1>;
    fn comma_only_in_month(&self) -> Option<Template<1>> {
        None
    }
    fn comma_month_through(&self) -> Option<Template<2>> {
        None
    }

    fn comma_on_the_last_day_of_the_month(&self) -> &'static str;
    fn comma_on_the_last_weekday_of_the_month(&self) -> &'static str;
    fn comma_days_before_the_last_day_of_the_month(&self, n: &str) -> Template<1>;
    fn first_weekday(&self) -> &'static str;
    fn weekday_nearest_day(&self) -> Template<1>;
    fn comma_on_the_of_the_month(&self) -> Template<1>;
    fn comma_every_n_days(&self, n: &str) -> Template<1>;
    /// Day-of-month range phrase; `range` is the full `a-b` text
    fn comma_between_days_of_the_month(&self, range: &str) -> Template<2>;
    fn comma_on_day_of_the_month(&self, day: &str) -> Template<1>;
    /// Decoration for a bare day-of-month number
    fn day_number(&self) -> Option<Template<1>> {
        None
    }

    fn comma_every_n_years(&self, n: &str) -> Template<1>;
    fn comma_only_in_year(&self) -> Option<Template<1>> {
        None
    }
    fn comma_year_through(&self) -> Option<Template<2>> {
        None
    }

    fn comma_starting(&self) -> Template<1>;

    fn days_of_the_week(&self) -> [&'static str; 7];
    /// Weekday names inflected for their position in a range
    fn days_of_the_week_in_case(&self, _position: Option<RangePosition>) -> Option<[&'static str; 7]> {
        None
    }

    fn months_of_the_year(&self) -> [&'static str; 12];
    /// Month names inflected for their position in a range
    fn months_of_the_year_in_case(&self, _position: RangePosition) -> Option<[&'static str; 12]> {
        None
    }

    /// Literal substitutions applied to non-verbose output
    fn concise_replacements(&self) -> &'static [(&'static str, &'static str)] {
        &[]
    }
}

/// Every bundled locale, in registration order
pub fn bundled() -> Vec<Arc<dyn Locale>> {
    vec![
        Arc::new(English),
        Arc::new(Danish),
        Arc::new(German),
        Arc::new(Spanish),
        Arc::new(French),
        Arc::new(Italian),
        Arc::new(Indonesian),
        Arc::new(Korean),
        Arc::new(Dutch),
        Arc::new(NorwegianBokmal),
        Arc::new(Swedish),
        Arc::new(Polish),
        Arc::new(BrazilianPortuguese),
        Arc::new(EuropeanPortuguese),
        Arc::new(Romanian),
        Arc::new(Russian),
        Arc::new(Turkish),
        Arc::new(Ukrainian),
        Arc::new(SimplifiedChinese),
        Arc::new(TraditionalChinese),
        Arc::new(Japanese),
        Arc::new(Hebrew),
        Arc::new(Czech),
        Arc::new(Slovak),
        Arc::new(Finnish),
        Arc::new(Slovenian),
        Arc::new(Swahili),
        Arc::new(Persian),
        Arc::new(Catalan),
        Arc::new(Belarusian),
        Arc::new(Hungarian),
        Arc::new(Afrikaans),
        Arc::new(Thai),
        Arc::new(Arabic),
        Arc::new(Vietnamese),
        Arc::new(Malay),
        Arc::new(Bulgarian),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_ids_are_unique() {
        let locales = bundled();
        let mut ids: Vec<_> = locales.iter().map(|l| l.id()).collect();
        assert_eq!(ids[0], "en");
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), locales.len());
    }

    #[test]
    fn test_every_locale_builds_all_templates() {
        for locale in bundled() {
            let _ = locale.every_minute_between();
            let _ = locale.every_n_seconds("5");
            let _ = locale.seconds_through_past_the_minute();
            let _ = locale.at_seconds_past_the_minute("5");
            let _ = locale.every_n_minutes("5");
            let _ = locale.minutes_through_past_the_hour();
            let _ = locale.at_minutes_past_the_hour("5");
            let _ = locale.every_n_hours("5");
            let _ = locale.between();
            let _ = locale.at_time();
            let _ = locale.comma_every_n_days_of_the_week("2");
            let _ = locale.comma_through("1");
            let _ = locale.comma_and_through("1");
            let _ = locale.space_of_the_month();
            let _ = locale.comma_on_the_last_of_the_month("5");
            let _ = locale.comma_only_on("1");
            let _ = locale.comma_and_on();
            let _ = locale.comma_every_n_months("2");
            let _ = locale.comma_only_in();
            let _ = locale.comma_days_before_the_last_day_of_the_month("3");
            let _ = locale.weekday_nearest_day();
            let _ = locale.comma_on_the_of_the_month();
            let _ = locale.comma_every_n_days("2");
            let _ = locale.comma_between_days_of_the_month("1-5");
            let _ = locale.comma_on_day_of_the_month("1");
            let _ = locale.comma_every_n_years("2");
            let _ = locale.comma_starting();
            assert!(!locale.error_occurred().is_empty(), "{}", locale.id());
            assert_eq!(locale.days_of_the_week().len(), 7);
            assert_eq!(locale.months_of_the_year().len(), 12);
        }
    }

    #[test]
    fn test_bundled_locale_count() {
        let ids: Vec<_> = bundled().iter().map(|l| l.id()).collect();
        assert_eq!(ids.len(), 37);
        for id in ["da", "pt_PT", "bg", "fa", "my", "zh_TW"] {
            assert!(ids.contains(&id), "{}", id);
        }
    }

    #[test]
    fn test_phrases_standing_in_for_templates_have_no_placeholders() {
        for locale in bundled() {
            assert!(!locale.every_hour().contains("%s"), "{}", locale.id());
            assert!(!locale.comma_every_day().contains("%s"), "{}", locale.id());
            assert!(!locale.every_minute().contains("%s"), "{}", locale.id());
        }
    }

    #[test]
    fn test_value_taking_phrases_accept_any_number() {
        for locale in bundled() {
            for n in ["0", "1", "22", "x", "", "-9223372036854775808", "9223372036854775807"] {
                let _ = locale.every_n_seconds(n);
                let _ = locale.at_minutes_past_the_hour(n);
                let _ = locale.comma_every_n_days(n);
                let _ = locale.comma_between_days_of_the_month(n);
                let _ = locale.comma_on_day_of_the_month(n);
                let _ = locale.ordinals(n);
                let _ = locale.comma_on_the_last_of_the_month(n);
            }
        }
    }
}
