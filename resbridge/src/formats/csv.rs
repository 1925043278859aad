//! CSV translation report: one column per locale, one row per string, array
//! element and plural quantity.
//!
//! Cells are quoted by [`to_csv_format`] before they reach the `csv` writer,
//! which is configured never to quote on its own. A missing value stays an
//! empty, unquoted field.

use std::{collections::BTreeSet, io::Write};

use csv::{QuoteStyle, Terminator, WriterBuilder};

use crate::{
    error::Error,
    formats::UTF8_BOM,
    locale::pinned_order,
    normalize::to_csv_format,
    table::LocaleTable,
    traits::Emitter,
    types::QUANTITY_ORDER,
};

/// Header column naming the row.
pub const ID_COLUMN: &str = "ID";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Report {
    pub fn from_table(table: &LocaleTable) -> Self {
        let locales = table.report_locales();

        let mut header = Vec::with_capacity(locales.len() + 1);
        header.push(ID_COLUMN.to_string());
        header.extend(locales.iter().map(|l| l.to_string()));

        let mut rows = Vec::new();
        let keys = table.keys();

        for key in &keys.strings {
            let mut row = vec![key.clone()];
            row.extend(locales.iter().map(|&locale| {
                table
                    .resolve_string(locale, key)
                    .map(|text| to_csv_format(table, locale, text))
                    .unwrap_or_default()
            }));
            rows.push(row);
        }

        for key in &keys.arrays {
            let max_len = locales
                .iter()
                .filter_map(|&locale| table.resolve_array(locale, key))
                .map(<[String]>::len)
                .max()
                .unwrap_or(0);

            for index in 0..max_len {
                let mut row = vec![format!("{}.{}", key, index + 1)];
                row.extend(locales.iter().map(|&locale| {
                    table
                        .resolve_array(locale, key)
                        .and_then(|items| items.get(index))
                        .map(|text| to_csv_format(table, locale, text))
                        .unwrap_or_default()
                }));
                rows.push(row);
            }
        }

        for key in &keys.plurals {
            let quantities: BTreeSet<&str> = locales
                .iter()
                .filter_map(|&locale| table.resolve_plural(locale, key))
                .flatten()
                .map(|item| item.quantity.as_str())
                .collect();

            for quantity in pinned_order(quantities, &QUANTITY_ORDER) {
                let mut row = vec![format!("{}.{}", key, quantity)];
                row.extend(locales.iter().map(|&locale| {
                    table
                        .resolve_plural(locale, key)
                        .and_then(|items| items.iter().find(|item| item.quantity == quantity))
                        .map(|item| to_csv_format(table, locale, &item.text))
                        .unwrap_or_default()
                }));
                rows.push(row);
            }
        }

        Report { header, rows }
    }
}

impl Emitter for Report {
    fn to_writer<W: Write>(&self, mut writer: W) -> Result<(), Error> {
        writer.write_all(UTF8_BOM)?;
        let mut wtr = WriterBuilder::new()
            .quote_style(QuoteStyle::Never)
            .terminator(Terminator::Any(b'\n'))
            .from_writer(writer);
        wtr.write_record(&self.header)?;
        for row in &self.rows {
            wtr.write_record(row)?;
        }
        wtr.flush()?;
        Ok(())
    }
}
