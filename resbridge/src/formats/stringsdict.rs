//! Apple `.stringsdict` output for Android `<plurals>`.
//!
//! Each plural key becomes a dictionary whose format key is `%#@x@`, with a
//! single `x` variable of plural rule type over a `d` value.

use std::io::Write;

use indoc::{indoc, writedoc};

use crate::{
    error::Error,
    formats::UTF8_BOM,
    normalize::to_apple_plural_format,
    placeholder::escape_xml_text,
    table::LocaleTable,
    traits::Emitter,
    types::PluralItem,
};

const PLIST_HEADER: &str = indoc! {r#"
    <plist version="1.0">
    <dict>

"#};

const PLIST_FOOTER: &str = indoc! {r#"
    </dict>
    </plist>
"#};

/// A `Localizable.stringsdict` file for one locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Format {
    pub locale: String,
    pub entries: Vec<PluralEntry>,
}

/// One plural key with its items, values already converted to Apple syntax.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluralEntry {
    pub key: String,
    pub items: Vec<PluralItem>,
}

impl Format {
    pub fn from_table(table: &LocaleTable, locale: &str) -> Self {
        let entries = table
            .keys()
            .plurals
            .iter()
            .filter_map(|key| {
                let items = table.resolve_plural(locale, key)?;
                Some(PluralEntry {
                    key: key.clone(),
                    items: items
                        .iter()
                        .map(|item| {
                            PluralItem::new(
                                item.quantity.clone(),
                                to_apple_plural_format(table, locale, &item.text),
                            )
                        })
                        .collect(),
                })
            })
            .collect();
        Format {
            locale: locale.to_string(),
            entries,
        }
    }
}

impl Emitter for Format {
    fn to_writer<W: Write>(&self, mut writer: W) -> Result<(), Error> {
        writer.write_all(UTF8_BOM)?;
        writer.write_all(PLIST_HEADER.as_bytes())?;
        for entry in &self.entries {
            write!(writer, "{}", entry)?;
        }
        writer.write_all(PLIST_FOOTER.as_bytes())?;
        Ok(())
    }
}

impl std::fmt::Display for PluralEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writedoc!(
            f,
            r#"
                <key>{}</key>
                <dict>
                    <key>NSStringLocalizedFormatKey</key>
                    <string>%#@x@</string>
                    <key>x</key>
                    <dict>
                        <key>NSStringFormatSpecTypeKey</key>
                        <string>NSStringPluralRuleType</string>
                        <key>NSStringFormatValueTypeKey</key>
                        <string>d</string>
            "#,
            escape_xml_text(&self.key)
        )?;
        for item in &self.items {
            writeln!(f, "        <key>{}</key>", escape_xml_text(&item.quantity))?;
            writeln!(f, "        <string>{}</string>", escape_xml_text(&item.text))?;
        }
        write!(f, "    </dict>\n</dict>\n\n")
    }
}
