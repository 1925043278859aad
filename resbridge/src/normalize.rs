//! Turning raw resource text into output-ready values: `@string/` reference
//! resolution, placeholder rewriting and per-format escaping.

use std::collections::HashSet;

use lazy_static::lazy_static;
use regex::Regex;
use tracing::warn;

use crate::{
    placeholder::{
        collapse_plural_decimals, csv_quote, escape_strings_literal, to_apple_placeholders,
    },
    table::LocaleTable,
};

lazy_static! {
    static ref STRING_REFERENCE: Regex = Regex::new(r"^@string/(.+)$").unwrap();
}

/// Follows `@string/key` references through `locale`'s fallback chain.
///
/// Only a value that consists entirely of one reference is followed. Returns
/// `None` when a reference cannot be resolved or loops back on itself.
pub fn resolve_references<'a>(
    table: &'a LocaleTable,
    locale: &str,
    text: &'a str,
) -> Option<&'a str> {
    let mut current = text;
    let mut seen = HashSet::new();

    while let Some(caps) = STRING_REFERENCE.captures(current) {
        let key = caps.get(1).map_or("", |m| m.as_str());
        if !seen.insert(key) {
            warn!(locale, key, "circular @string reference");
            return None;
        }
        match table.resolve_string(locale, key) {
            Some(next) => current = next,
            None => {
                warn!(locale, key, "unresolved @string reference");
                return None;
            }
        }
    }
    Some(current)
}

/// Prepares a value for an Apple `.strings` literal.
///
/// ```rust
/// use resbridge::{LocaleTable, normalize::to_apple_format};
/// let table = LocaleTable::default();
/// assert_eq!(to_apple_format(&table, "Base", r#"Say "%s""#), r#"Say \"%@\""#);
/// ```
pub fn to_apple_format(table: &LocaleTable, locale: &str, text: &str) -> String {
    let resolved = resolve_references(table, locale, text).unwrap_or_default();
    escape_strings_literal(&to_apple_placeholders(resolved))
}

/// Prepares a plural item value: like [`to_apple_format`], with positional
/// decimals collapsed to `%d`.
pub fn to_apple_plural_format(table: &LocaleTable, locale: &str, text: &str) -> String {
    collapse_plural_decimals(&to_apple_format(table, locale, text))
}

/// Prepares a value for a CSV cell: resolved, quoted, no placeholder changes.
pub fn to_csv_format(table: &LocaleTable, locale: &str, text: &str) -> String {
    csv_quote(resolve_references(table, locale, text).unwrap_or_default())
}
