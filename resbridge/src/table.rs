//! The locale table: every locale's values plus the global key sets, and the
//! fallback resolver that reads it.
//!
//! A table is assembled once through [`TableBuilder`] and is read-only
//! afterwards, so emitters may share it across threads.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{
    formats::AndroidStringsFormat,
    locale::{LocaleDir, fallback_chain, report_order},
    types::{BucketKind, KeySets, PluralItem, Value, ValueBucket},
};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleTable {
    locales: BTreeMap<String, ValueBucket>,
    keys: KeySets,
}

impl LocaleTable {
    pub fn builder() -> TableBuilder {
        TableBuilder::new()
    }

    /// Locale identifiers in ascending order.
    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.locales.keys().map(String::as_str)
    }

    /// Locale identifiers in report column order (`Base`, `en`, then the rest).
    pub fn report_locales(&self) -> Vec<&str> {
        report_order(self.locales())
    }

    pub fn get(&self, locale: &str) -> Option<&ValueBucket> {
        self.locales.get(locale)
    }

    pub fn contains(&self, locale: &str) -> bool {
        self.locales.contains_key(locale)
    }

    /// Keys seen in any locale.
    pub fn keys(&self) -> &KeySets {
        &self.keys
    }

    pub fn len(&self) -> usize {
        self.locales.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locales.is_empty()
    }

    /// Looks `key` up in `locale`, then each more general locale, ending in
    /// `Base`. Returns the first definition found.
    pub fn resolve(&self, locale: &str, kind: BucketKind, key: &str) -> Option<Value<'_>> {
        match kind {
            BucketKind::Strings => self.resolve_string(locale, key).map(Value::Text),
            BucketKind::Arrays => self.resolve_array(locale, key).map(Value::Array),
            BucketKind::Plurals => self.resolve_plural(locale, key).map(Value::Plural),
        }
    }

    pub fn resolve_string(&self, locale: &str, key: &str) -> Option<&str> {
        self.resolve_with(locale, |bucket| bucket.strings.get(key).map(String::as_str))
    }

    pub fn resolve_array(&self, locale: &str, key: &str) -> Option<&[String]> {
        self.resolve_with(locale, |bucket| bucket.arrays.get(key).map(Vec::as_slice))
    }

    pub fn resolve_plural(&self, locale: &str, key: &str) -> Option<&[PluralItem]> {
        self.resolve_with(locale, |bucket| bucket.plurals.get(key).map(Vec::as_slice))
    }

    fn resolve_with<'a, T: ?Sized>(
        &'a self,
        locale: &str,
        pick: impl Fn(&'a ValueBucket) -> Option<&'a T>,
    ) -> Option<&'a T> {
        fallback_chain(locale).find_map(|candidate| self.locales.get(candidate).and_then(&pick))
    }
}

/// Accumulates locale directories into a [`LocaleTable`].
///
/// # Example
///
/// ```rust
/// use resbridge::{LocaleTable, ValueBucket};
///
/// let mut base = ValueBucket::default();
/// base.strings.insert("greeting".into(), "Hi".into());
///
/// let table = LocaleTable::builder().add_locale("Base", base).build();
/// assert_eq!(table.resolve_string("fr-CA", "greeting"), Some("Hi"));
/// ```
#[derive(Debug, Default)]
pub struct TableBuilder {
    table: LocaleTable,
}

impl TableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `locale` already holds values.
    pub fn contains(&self, locale: &str) -> bool {
        self.table.contains(locale)
    }

    /// Registers the values of one locale.
    ///
    /// Empty buckets are not registered. A locale that is already registered
    /// keeps its first definition and `bucket` is dropped.
    pub fn add_locale(mut self, locale: &str, bucket: ValueBucket) -> Self {
        if bucket.is_empty() {
            debug!(locale, "no translatable values, locale not registered");
            return self;
        }
        if self.contains(locale) {
            warn!(locale, "locale already registered, skipping duplicate definition");
            return self;
        }
        self.table.keys.record(&bucket);
        self.table.locales.insert(locale.to_string(), bucket);
        self
    }

    /// Registers a `values*` directory from its name and parsed documents.
    ///
    /// Documents are merged in the order given, later ones overriding keys of
    /// earlier ones. Names that are not value directories are ignored.
    pub fn add_directory<I>(self, dir_name: &str, documents: I) -> Self
    where
        I: IntoIterator<Item = AndroidStringsFormat>,
    {
        let Some(dir) = LocaleDir::parse(dir_name) else {
            debug!(dir = dir_name, "not a values directory");
            return self;
        };
        let mut bucket = ValueBucket::default();
        for document in documents {
            bucket.extend(ValueBucket::from(document));
        }
        self.add_locale(&dir.locale, bucket)
    }

    pub fn build(self) -> LocaleTable {
        self.table
    }
}
