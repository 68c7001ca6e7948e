//! Generic rendering of one cron field
//!
//! A field is either empty, `*`, a single value, a comma list, a step
//! (`a/n`, `a-b/n`) or a range (`a-b`). [`SegmentDescriber`] picks the shape
//! and asks a [`FieldPhrases`] implementation for the words. Lists recurse
//! into their segments and steps into their start, each strictly shorter
//! than the input.

use crate::locale::Locale;
use crate::template::Template;
use crate::types::RangePosition;

/// Field-specific wording plugged into the segment describer
pub trait FieldPhrases {
    /// Phrase for `*`
    fn every(&self) -> &str;

    /// Render one value; `position` is set when it is a range bound
    fn item(&self, value: &str, position: Option<RangePosition>) -> String;

    /// Phrase for a step of `step`
    fn increment(&self, step: &str) -> Template<1>;

    /// Phrase for the full range text `range` (`a-b`)
    fn range(&self, range: &str) -> Template<2>;

    /// Phrase wrapping a single value or a list of values
    fn value(&self, expression: &str) -> Template<1>;
}

/// Which range phrase to use
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RangeStyle {
    /// The field's own range phrase
    Field,
    /// The locale's generic "a through b" phrase, for ranges inside lists
    Plain,
}

/// Renders fields into phrases for one locale
pub struct SegmentDescriber<'a> {
    locale: &'a dyn Locale,
}

impl<'a> SegmentDescriber<'a> {
    pub fn new(locale: &'a dyn Locale) -> Self {
        Self { locale }
    }

    /// Describe one canonical field
    pub fn describe(&self, expression: &str, phrases: &dyn FieldPhrases) -> String {
        self.describe_with(expression, phrases, RangeStyle::Field)
    }

    fn describe_with(
        &self,
        expression: &str,
        phrases: &dyn FieldPhrases,
        style: RangeStyle,
    ) -> String {
        if expression.is_empty() {
            return String::new();
        }
        if expression == "*" {
            return phrases.every().to_string();
        }

        let has_step = expression.contains('/');
        let has_range = expression.contains('-');
        let has_list = expression.contains(',');

        if has_list {
            self.describe_list(expression, phrases, style, has_step)
        } else if has_step {
            self.describe_step(expression, phrases, style)
        } else if has_range {
            self.describe_range(expression, phrases, style)
        } else {
            phrases
                .value(expression)
                .fill([&phrases.item(expression, None)])
        }
    }

    fn describe_list(
        &self,
        expression: &str,
        phrases: &dyn FieldPhrases,
        style: RangeStyle,
        has_step: bool,
    ) -> String {
        let segments: Vec<&str> = expression.split(',').collect();
        let count = segments.len();
        let mut content = String::new();

        for (i, segment) in segments.iter().enumerate() {
            if i > 0 && count > 2 {
                content.push(',');
                if i < count - 1 {
                    content.push(' ');
                }
            }
            if i > 0 && (i == count - 1 || count == 2) {
                content.push_str(self.locale.space_and());
                content.push(' ');
            }

            if segment.contains('/') || segment.contains('-') {
                if segment.contains('-') && !segment.contains('/') {
                    let described = self.describe_with(segment, phrases, RangeStyle::Plain);
                    content.push_str(&described.replacen(", ", "", 1));
                } else {
                    content.push_str(&self.describe_with(segment, phrases, style));
                }
            } else if !has_step {
                content.push_str(&phrases.item(segment, None));
            } else {
                content.push_str(&self.describe_with(segment, phrases, style));
            }
        }

        if has_step {
            content
        } else {
            phrases.value(expression).fill([&content])
        }
    }

    fn describe_step(
        &self,
        expression: &str,
        phrases: &dyn FieldPhrases,
        style: RangeStyle,
    ) -> String {
        let mut parts = expression.split('/');
        let start = parts.next().unwrap_or_default();
        let step = parts.next().unwrap_or_default();

        let mut description = phrases.increment(step).fill([step]);
        if start.contains('-') {
            let range = self.describe_range(start, phrases, style);
            if !range.starts_with(", ") {
                description.push_str(", ");
            }
            description.push_str(&range);
        } else if !start.contains('*') {
            let item = phrases
                .value(start)
                .fill([&phrases.item(start, None)])
                .replacen(", ", "", 1);
            description.push_str(&self.locale.comma_starting().fill([&item]));
        }
        description
    }

    fn describe_range(&self, range: &str, phrases: &dyn FieldPhrases, style: RangeStyle) -> String {
        let mut bounds = range.split('-');
        let start = bounds.next().unwrap_or_default();
        let end = bounds.next().unwrap_or_default();

        let first = phrases.item(start, Some(RangePosition::Start));
        let second = phrases.item(end, Some(RangePosition::End));
        let template = match style {
            RangeStyle::Field => phrases.range(range),
            RangeStyle::Plain => self.locale.comma_through(start),
        };
        template.fill([&first, &second])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::English;

    /// Minimal phrases that make the rendered shape easy to read
    struct Plain;

    impl FieldPhrases for Plain {
        fn every(&self) -> &str {
            "every unit"
        }

        fn item(&self, value: &str, position: Option<RangePosition>) -> String {
            match position {
                Some(RangePosition::Start) => format!("<{}", value),
                Some(RangePosition::End) => format!("{}>", value),
                None => value.to_string(),
            }
        }

        fn increment(&self, _step: &str) -> Template<1> {
            Template::new("every %s units")
        }

        fn range(&self, _range: &str) -> Template<2> {
            Template::new("units %s to %s")
        }

        fn value(&self, _expression: &str) -> Template<1> {
            Template::new("at %s")
        }
    }

    fn describe(expression: &str) -> String {
        SegmentDescriber::new(&English).describe(expression, &Plain)
    }

    #[test]
    fn test_empty_and_every() {
        assert_eq!(describe(""), "");
        assert_eq!(describe("*"), "every unit");
    }

    #[test]
    fn test_single_value() {
        assert_eq!(describe("5"), "at 5");
    }

    #[test]
    fn test_range_marks_bounds() {
        assert_eq!(describe("1-5"), "units <1 to 5>");
    }

    #[test]
    fn test_lists() {
        assert_eq!(describe("1,2"), "at 1 and 2");
        assert_eq!(describe("1,2,3"), "at 1, 2, and 3");
    }

    #[test]
    fn test_list_with_plain_range() {
        assert_eq!(describe("1,3-5"), "at 1 and <3 through 5>");
    }

    #[test]
    fn test_steps() {
        assert_eq!(describe("*/5"), "every 5 units");
        assert_eq!(describe("10-30/5"), "every 5 units, units <10 to 30>");
        assert_eq!(describe("7/5"), "every 5 units, starting at 7");
    }

    #[test]
    fn test_list_of_steps() {
        assert_eq!(describe("*/5,*/7"), "every 5 units and every 7 units");
    }
}
