//! Core types for resbridge.
//! The Android parser decodes into these; the Apple and CSV emitters read them.

use std::{
    collections::{BTreeMap, BTreeSet},
    fmt::Display,
};

use serde::{Deserialize, Serialize};

/// Locale that every fallback chain ends in. Holds the `values/` directory.
pub const BASE_LOCALE: &str = "Base";

/// Canonical ordering of plural quantity tags.
pub const QUANTITY_ORDER: [&str; 6] = ["zero", "one", "two", "few", "many", "other"];

/// The three kinds of resources a locale can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BucketKind {
    Strings,
    Arrays,
    Plurals,
}

impl BucketKind {
    pub const ALL: [BucketKind; 3] = [
        BucketKind::Strings,
        BucketKind::Arrays,
        BucketKind::Plurals,
    ];
}

impl Display for BucketKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BucketKind::Strings => write!(f, "string"),
            BucketKind::Arrays => write!(f, "string-array"),
            BucketKind::Plurals => write!(f, "plurals"),
        }
    }
}

/// One `<item quantity="...">` of a `<plurals>` element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluralItem {
    /// Plural category label (`one`, `other`, ...). Kept free-form.
    pub quantity: String,
    pub text: String,
}

impl PluralItem {
    pub fn new(quantity: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            quantity: quantity.into(),
            text: text.into(),
        }
    }
}

/// All values defined by a single locale.
///
/// Top-level keys are kept sorted; array elements and plural items keep the
/// order they had in the source document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueBucket {
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    #[serde(default)]
    pub strings: BTreeMap<String, String>,

    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    #[serde(default)]
    pub arrays: BTreeMap<String, Vec<String>>,

    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    #[serde(default)]
    pub plurals: BTreeMap<String, Vec<PluralItem>>,
}

impl ValueBucket {
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty() && self.arrays.is_empty() && self.plurals.is_empty()
    }

    /// Number of keys across all three kinds.
    pub fn len(&self) -> usize {
        self.strings.len() + self.arrays.len() + self.plurals.len()
    }

    pub fn contains_key(&self, kind: BucketKind, key: &str) -> bool {
        match kind {
            BucketKind::Strings => self.strings.contains_key(key),
            BucketKind::Arrays => self.arrays.contains_key(key),
            BucketKind::Plurals => self.plurals.contains_key(key),
        }
    }

    /// Merges `other` into `self`. Keys defined in `other` replace existing ones.
    pub fn extend(&mut self, other: ValueBucket) {
        self.strings.extend(other.strings);
        self.arrays.extend(other.arrays);
        self.plurals.extend(other.plurals);
    }
}

/// Every key seen in any locale, per kind.
///
/// Emitters iterate these sets rather than a single locale's own keys, so a
/// partially translated locale still gets rows for keys it inherits.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeySets {
    pub strings: BTreeSet<String>,
    pub arrays: BTreeSet<String>,
    pub plurals: BTreeSet<String>,
}

impl KeySets {
    pub fn record(&mut self, bucket: &ValueBucket) {
        self.strings.extend(bucket.strings.keys().cloned());
        self.arrays.extend(bucket.arrays.keys().cloned());
        self.plurals.extend(bucket.plurals.keys().cloned());
    }

    pub fn get(&self, kind: BucketKind) -> &BTreeSet<String> {
        match kind {
            BucketKind::Strings => &self.strings,
            BucketKind::Arrays => &self.arrays,
            BucketKind::Plurals => &self.plurals,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty() && self.arrays.is_empty() && self.plurals.is_empty()
    }
}

/// A value found by a fallback lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Value<'a> {
    Text(&'a str),
    Array(&'a [String]),
    Plural(&'a [PluralItem]),
}

impl Value<'_> {
    pub fn kind(&self) -> BucketKind {
        match self {
            Value::Text(_) => BucketKind::Strings,
            Value::Array(_) => BucketKind::Arrays,
            Value::Plural(_) => BucketKind::Plurals,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bucket_with_string(key: &str, value: &str) -> ValueBucket {
        let mut bucket = ValueBucket::default();
        bucket.strings.insert(key.to_string(), value.to_string());
        bucket
    }

    #[test]
    fn test_empty_bucket() {
        let bucket = ValueBucket::default();
        assert!(bucket.is_empty());
        assert_eq!(bucket.len(), 0);
    }

    #[test]
    fn test_extend_later_definition_wins() {
        let mut bucket = bucket_with_string("title", "Old");
        bucket
            .arrays
            .insert("days".to_string(), vec!["Mon".to_string()]);
        bucket.extend(bucket_with_string("title", "New"));
        assert_eq!(bucket.strings["title"], "New");
        assert_eq!(bucket.arrays["days"], vec!["Mon".to_string()]);
        assert_eq!(bucket.len(), 2);
    }

    #[test]
    fn test_key_sets_union() {
        let mut keys = KeySets::default();
        keys.record(&bucket_with_string("b", "1"));
        keys.record(&bucket_with_string("a", "2"));
        keys.record(&bucket_with_string("b", "3"));
        let collected: Vec<_> = keys.get(BucketKind::Strings).iter().cloned().collect();
        assert_eq!(collected, vec!["a".to_string(), "b".to_string()]);
        assert!(keys.get(BucketKind::Plurals).is_empty());
    }

    #[test]
    fn test_contains_key_by_kind() {
        let bucket = bucket_with_string("hello", "Hello");
        assert!(bucket.contains_key(BucketKind::Strings, "hello"));
        assert!(!bucket.contains_key(BucketKind::Arrays, "hello"));
    }

    #[test]
    fn test_bucket_kind_display() {
        assert_eq!(BucketKind::Strings.to_string(), "string");
        assert_eq!(BucketKind::Arrays.to_string(), "string-array");
        assert_eq!(BucketKind::Plurals.to_string(), "plurals");
    }
}
