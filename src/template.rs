//! Typed phrase templates
//!
//! A `Template<N>` is a locale phrase with exactly `N` `%s` placeholders,
//! checked when the template is constructed. Locales build their templates
//! in `const` items or inline `const { .. }` blocks so a phrase with the
//! wrong number of placeholders fails the build. Filling substitutes arguments
//! left to right in a single pass over the template text, so placeholder-like
//! text inside an argument is never substituted again.

use std::borrow::Cow;
use std::fmt;

const PLACEHOLDER: &str = "%s";

/// A phrase with `N` positional `%s` placeholders
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template<const N: usize> {
    text: Cow<'static, str>,
}

impl<const N: usize> Template<N> {
    /// Template that renders nothing
    pub const EMPTY: Self = Self {
        text: Cow::Borrowed(""),
    };

    /// Create a template, panicking when the placeholder count does not
    /// match `N`
    ///
    /// Evaluated in a `const` item or `const { .. }` block the panic is a
    /// compile error; called at runtime it panics on first use.
    ///
    /// The empty string is accepted for any `N` and renders nothing.
    pub const fn new(text: &'static str) -> Self {
        assert!(
            text.is_empty() || count_placeholders(text) == N,
            "template placeholder count does not match its arity"
        );
        Self {
            text: Cow::Borrowed(text),
        }
    }

    /// A template with no placeholders that ignores its arguments
    ///
    /// Used where a locale phrase stands in for a parameterized one, such as
    /// "every hour" in place of "at %s minutes past the hour".
    pub const fn fixed(text: &'static str) -> Self {
        assert!(
            count_placeholders(text) == 0,
            "fixed template must not contain placeholders"
        );
        Self {
            text: Cow::Borrowed(text),
        }
    }

    /// Substitute `args` into the placeholders, left to right
    pub fn fill(&self, args: [&str; N]) -> String {
        let extra: usize = args.iter().map(|a| a.len()).sum();
        let mut out = String::with_capacity(self.text.len() + extra);
        let mut rest: &str = &self.text;
        let mut args = args.iter();

        while let Some(pos) = rest.find(PLACEHOLDER) {
            out.push_str(&rest[..pos]);
            match args.next() {
                Some(arg) => out.push_str(arg),
                None => out.push_str(PLACEHOLDER),
            }
            rest = &rest[pos + PLACEHOLDER.len()..];
        }
        out.push_str(rest);
        out
    }

    /// Prepend literal text (which must not contain placeholders)
    pub fn with_prefix(&self, prefix: &str) -> Self {
        debug_assert!(!prefix.contains(PLACEHOLDER));
        Self {
            text: Cow::Owned(format!("{}{}", prefix, self.text)),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl<const N: usize> fmt::Display for Template<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

const fn count_placeholders(text: &str) -> usize {
    let bytes = text.as_bytes();
    let mut count = 0;
    let mut i = 0;
    while i + 1 < bytes.len() {
        if bytes[i] == b'%' && bytes[i + 1] == b's' {
            count += 1;
            i += 2;
        } else {
            i += 1;
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_in_order() {
        let t: Template<2> = Template::new("between %s and %s");
        assert_eq!(t.fill(["05:00 AM", "05:59 AM"]), "between 05:00 AM and 05:59 AM");
    }

    #[test]
    fn test_fill_does_not_rescan_arguments() {
        let t: Template<2> = Template::new("%s / %s");
        assert_eq!(t.fill(["%s", "x"]), "%s / x");
    }

    #[test]
    fn test_fixed_ignores_arguments() {
        let t: Template<1> = Template::fixed("every hour");
        assert_eq!(t.fill(["30"]), "every hour");
    }

    #[test]
    fn test_empty() {
        assert!(Template::<1>::EMPTY.is_empty());
        assert_eq!(Template::<1>::EMPTY.fill(["5"]), "");
        assert_eq!(Template::<2>::new(""), Template::EMPTY);
    }

    #[test]
    fn test_with_prefix() {
        let t: Template<1> = Template::new(" %s of the month");
        let t = t.with_prefix(", on the");
        assert_eq!(t.fill(["first Monday"]), ", on the first Monday of the month");
        assert_eq!(t.as_str(), ", on the %s of the month");
    }

    #[test]
    fn test_count_placeholders() {
        assert_eq!(count_placeholders(""), 0);
        assert_eq!(count_placeholders("%s"), 1);
        assert_eq!(count_placeholders("%s%s"), 2);
        assert_eq!(count_placeholders("100% sure"), 0);
    }

    #[test]
    fn test_const_construction() {
        const AT: Template<1> = Template::new("at %s");
        const TABLE: [Template<2>; 2] = [Template::new("%s-%s"), Template::new("")];
        assert_eq!(AT.fill(["noon"]), "at noon");
        assert_eq!(TABLE[0].fill(["1", "2"]), "1-2");
        assert!(TABLE[1].is_empty());
        let inline: Template<1> = const { Template::new("every %s") };
        assert_eq!(inline.fill(["day"]), "every day");
    }

    #[test]
    #[should_panic]
    fn test_new_rejects_wrong_arity() {
        let _ = Template::<2>::new("only %s");
    }
}
