#![forbid(unsafe_code)]
//! Android string resources to Apple localization files.
//!
//! Reads every `values*/*.xml` directory of an Android `res/` tree into a
//! single [`LocaleTable`], then writes one `<locale>.lproj/` directory per
//! locale plus a CSV report of all translations side by side.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use resbridge::Codec;
//!
//! let codec = Codec::read_dir("app/src/main/res")?;
//! codec.write_resources("ios/Resources")?;
//! codec.write_report("translations.csv")?;
//! # Ok::<(), resbridge::Error>(())
//! ```
//!
//! # Outputs
//!
//! - **`Localizable.strings`**: `<string>` resources
//! - **`LocalizableArray.strings`**: `<string-array>` resources
//! - **`Localizable.stringsdict`**: `<plurals>` resources
//! - **CSV report**: one column per locale, `Base` and `en` first
//!
//! Values missing from a locale are taken from the nearest more general
//! locale (`pt-BR` → `pt` → `Base`).

pub mod codec;
pub mod error;
pub mod formats;
pub mod locale;
pub mod normalize;
pub mod placeholder;
pub mod table;
pub mod traits;
pub mod types;

// Re-export most used types for easy consumption
pub use crate::{
    codec::Codec,
    error::Error,
    locale::{LocaleDir, fallback_chain},
    table::{LocaleTable, TableBuilder},
    types::{BASE_LOCALE, BucketKind, KeySets, PluralItem, Value, ValueBucket},
};
