//! Placeholder rewriting and escaping between Android and Apple text syntax.
//!
//! Rewrites are table-driven: each table is an ordered list of rules applied
//! left to right, once per call. Every rule pattern also matches `%%` so that
//! an escaped percent sign is skipped over and never starts a placeholder.

use std::borrow::Cow;

use lazy_static::lazy_static;
use regex::{Captures, Regex};

/// One pattern → replacement step.
pub struct Rewrite {
    pub pattern: Regex,
    pub replace: fn(&Captures) -> String,
}

impl Rewrite {
    fn apply<'t>(&self, input: &'t str) -> Cow<'t, str> {
        self.pattern.replace_all(input, |caps: &Captures| {
            if &caps[0] == "%%" {
                "%%".to_string()
            } else {
                (self.replace)(caps)
            }
        })
    }
}

fn object_specifier(caps: &Captures) -> String {
    format!("%{}@", caps.get(1).map_or("", |m| m.as_str()))
}

fn plain_decimal(caps: &Captures) -> String {
    format!("%{}d", caps.get(1).map_or("", |m| m.as_str()))
}

fn unnumbered_decimal(_caps: &Captures) -> String {
    "%d".to_string()
}

lazy_static! {
    /// Android → Apple placeholder rules for `.strings` values.
    ///
    /// - `%s`, `%1$s` → `%@`, `%1$@`
    /// - `%,d`, `%1$,d` → `%d`, `%1$d` (grouping flag is locale-driven on Apple)
    pub static ref APPLE_RULES: Vec<Rewrite> = vec![
        Rewrite {
            pattern: Regex::new(r"%%|%(\d+\$)?s").unwrap(),
            replace: object_specifier,
        },
        Rewrite {
            pattern: Regex::new(r"%%|%(\d+\$)?,d").unwrap(),
            replace: plain_decimal,
        },
    ];

    /// Extra rules for plural values: the stringsdict supplies the number
    /// itself, so positional decimals collapse to `%d`.
    pub static ref PLURAL_RULES: Vec<Rewrite> = vec![Rewrite {
        pattern: Regex::new(r"%%|%\d+\$,?d").unwrap(),
        replace: unnumbered_decimal,
    }];

    static ref QUOTE_OR_ESCAPE: Regex = Regex::new(r#"\\.|""#).unwrap();
}

/// Applies every rule of `rules` in order.
pub fn apply_rules(input: &str, rules: &[Rewrite]) -> String {
    rules
        .iter()
        .fold(input.to_string(), |text, rule| rule.apply(&text).into_owned())
}

/// Converts Android-style format specifiers to Apple style.
///
/// ```rust
/// use resbridge::placeholder::to_apple_placeholders;
/// assert_eq!(to_apple_placeholders("Hi %s, %1$s"), "Hi %@, %1$@");
/// assert_eq!(to_apple_placeholders("%1$,d items"), "%1$d items");
/// ```
pub fn to_apple_placeholders(input: &str) -> String {
    apply_rules(input, &APPLE_RULES)
}

/// Collapses positional decimal specifiers (`%1$d`, `%2$,d`) to `%d`.
pub fn collapse_plural_decimals(input: &str) -> String {
    apply_rules(input, &PLURAL_RULES)
}

/// Escapes double quotes for a `.strings` literal.
///
/// Quotes that the Android source already escaped (`\"`) are left as they are.
pub fn escape_strings_literal(input: &str) -> String {
    QUOTE_OR_ESCAPE
        .replace_all(input, |caps: &Captures| {
            if &caps[0] == "\"" {
                "\\\"".to_string()
            } else {
                caps[0].to_string()
            }
        })
        .into_owned()
}

/// Quotes a CSV field, doubling any embedded quotes.
pub fn csv_quote(input: &str) -> String {
    format!("\"{}\"", input.replace('"', "\"\""))
}

/// Escapes the characters that would break XML element content.
pub fn escape_xml_text(input: &str) -> String {
    quick_xml::escape::partial_escape(input).into_owned()
}
