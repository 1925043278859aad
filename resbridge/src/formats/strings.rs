//! Apple `.strings` output: `Localizable.strings` for plain strings and
//! `LocalizableArray.strings` for string arrays.

use std::io::Write;

use crate::{
    error::Error,
    formats::UTF8_BOM,
    normalize::to_apple_format,
    table::LocaleTable,
    traits::Emitter,
};

/// A `Localizable.strings` file for one locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Format {
    pub locale: String,
    /// Key-value pairs, sorted by key.
    pub pairs: Vec<Pair>,
}

impl Format {
    /// Resolves every known string key for `locale`, skipping keys that have
    /// no value anywhere in its fallback chain.
    pub fn from_table(table: &LocaleTable, locale: &str) -> Self {
        let pairs = table
            .keys()
            .strings
            .iter()
            .filter_map(|key| {
                let raw = table.resolve_string(locale, key)?;
                Some(Pair {
                    key: key.clone(),
                    value: to_apple_format(table, locale, raw),
                })
            })
            .collect();
        Format {
            locale: locale.to_string(),
            pairs,
        }
    }
}

impl Emitter for Format {
    fn to_writer<W: Write>(&self, mut writer: W) -> Result<(), Error> {
        writer.write_all(UTF8_BOM)?;
        for pair in &self.pairs {
            writeln!(writer, "{}", pair)?;
        }
        Ok(())
    }
}

/// A single `"key" = "value";` line. The value is already escaped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pair {
    pub key: String,
    pub value: String,
}

impl std::fmt::Display for Pair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "\"{}\" = \"{}\";", self.key, self.value)
    }
}

/// A `LocalizableArray.strings` file for one locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayFormat {
    pub locale: String,
    pub arrays: Vec<ArrayPair>,
}

impl ArrayFormat {
    pub fn from_table(table: &LocaleTable, locale: &str) -> Self {
        let arrays = table
            .keys()
            .arrays
            .iter()
            .filter_map(|key| {
                let items = table.resolve_array(locale, key)?;
                Some(ArrayPair {
                    key: key.clone(),
                    values: items
                        .iter()
                        .map(|item| to_apple_format(table, locale, item))
                        .collect(),
                })
            })
            .collect();
        ArrayFormat {
            locale: locale.to_string(),
            arrays,
        }
    }
}

impl Emitter for ArrayFormat {
    fn to_writer<W: Write>(&self, mut writer: W) -> Result<(), Error> {
        writer.write_all(UTF8_BOM)?;
        for array in &self.arrays {
            writeln!(writer, "{}", array)?;
        }
        Ok(())
    }
}

/// `"key" = ( "a", "b", );` spread over one line per element, in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayPair {
    pub key: String,
    pub values: Vec<String>,
}

impl std::fmt::Display for ArrayPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "\"{}\" = (", self.key)?;
        for value in &self.values {
            writeln!(f, "    \"{}\",", value)?;
        }
        writeln!(f, ");")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ValueBucket;

    fn table() -> LocaleTable {
        let mut base = ValueBucket::default();
        base.strings.insert("greeting".into(), "Hi %s".into());
        base.strings.insert("app".into(), "Acme".into());
        base.strings.insert("title".into(), "@string/app".into());
        base.arrays.insert(
            "letters".into(),
            vec!["c".into(), "a".into(), "b".into()],
        );

        let mut fr = ValueBucket::default();
        fr.strings.insert("greeting".into(), "Salut %s".into());
        fr.strings.insert("quote".into(), r#"Il a dit "oui""#.into());

        LocaleTable::builder()
            .add_locale("Base", base)
            .add_locale("fr", fr)
            .build()
    }

    fn render(emitter: &impl Emitter) -> String {
        let bytes = emitter.to_bytes().unwrap();
        assert!(bytes.starts_with(UTF8_BOM));
        String::from_utf8(bytes[UTF8_BOM.len()..].to_vec()).unwrap()
    }

    #[test]
    fn test_strings_sorted_with_fallback() {
        let out = render(&Format::from_table(&table(), "fr"));
        assert_eq!(
            out,
            concat!(
                "\"app\" = \"Acme\";\n",
                "\"greeting\" = \"Salut %@\";\n",
                "\"quote\" = \"Il a dit \\\"oui\\\"\";\n",
                "\"title\" = \"Acme\";\n",
            )
        );
    }

    #[test]
    fn test_strings_skip_unresolvable_keys() {
        let format = Format::from_table(&table(), "Base");
        let keys: Vec<_> = format.pairs.iter().map(|p| p.key.as_str()).collect();
        assert_eq!(keys, ["app", "greeting", "title"]);
    }

    #[test]
    fn test_array_keeps_source_order() {
        let out = render(&ArrayFormat::from_table(&table(), "fr"));
        assert_eq!(
            out,
            "\"letters\" = (\n    \"c\",\n    \"a\",\n    \"b\",\n);\n\n"
        );
    }

    #[test]
    fn test_pair_display() {
        let pair = Pair {
            key: "k".into(),
            value: "v".into(),
        };
        assert_eq!(pair.to_string(), "\"k\" = \"v\";");
    }
}
