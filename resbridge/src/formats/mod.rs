//! All supported resource file formats for resbridge.
//!
//! Android `values*/*.xml` files are the only input; the Apple files and the
//! CSV report are the outputs.

pub mod android_strings;
pub mod csv;
pub mod strings;
pub mod stringsdict;

use std::fmt::{Display, Formatter};

// Reexporting the formats for easier access
pub use android_strings::Format as AndroidStringsFormat;
pub use csv::Report;
pub use strings::{ArrayFormat as ArrayStringsFormat, Format as StringsFormat};
pub use stringsdict::Format as StringsDictFormat;

use crate::types::BucketKind;

/// Byte-order mark written at the start of every output file.
pub const UTF8_BOM: &[u8] = b"\xef\xbb\xbf";

/// The files written into each `<locale>.lproj` directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppleFile {
    /// `Localizable.strings`
    Strings,
    /// `LocalizableArray.strings`
    ArrayStrings,
    /// `Localizable.stringsdict`
    StringsDict,
}

impl AppleFile {
    pub const ALL: [AppleFile; 3] = [
        AppleFile::Strings,
        AppleFile::ArrayStrings,
        AppleFile::StringsDict,
    ];

    pub fn file_name(&self) -> &'static str {
        match self {
            AppleFile::Strings => "Localizable.strings",
            AppleFile::ArrayStrings => "LocalizableArray.strings",
            AppleFile::StringsDict => "Localizable.stringsdict",
        }
    }

    /// The kind of resource this file carries.
    pub fn bucket_kind(&self) -> BucketKind {
        match self {
            AppleFile::Strings => BucketKind::Strings,
            AppleFile::ArrayStrings => BucketKind::Arrays,
            AppleFile::StringsDict => BucketKind::Plurals,
        }
    }
}

impl Display for AppleFile {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.file_name())
    }
}

/// Directory name holding one locale's Apple resources, e.g. `fr.lproj`.
pub fn lproj_dir_name(locale: &str) -> String {
    format!("{}.lproj", locale)
}
