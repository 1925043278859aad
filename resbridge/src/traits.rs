//! Traits for reading source resources and emitting target files.

use std::{
    fs::{self, File},
    io::{BufRead, BufReader, BufWriter, Cursor, Write},
    path::Path,
};

use encoding_rs::UTF_8;
use encoding_rs_io::DecodeReaderBytesBuilder;

use crate::error::Error;

/// A trait for parsing one localization source file.
///
/// # Example
///
/// ```rust,no_run
/// use resbridge::traits::Parser;
/// let doc = resbridge::formats::AndroidStringsFormat::read_from("values/strings.xml")?;
/// println!("{} strings", doc.strings.len());
/// Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub trait Parser {
    /// Parse from any reader.
    fn from_reader<R: BufRead>(reader: R) -> Result<Self, Error>
    where
        Self: Sized;

    /// Parse from file path.
    ///
    /// The file is decoded BOM-aware: a UTF-8 or UTF-16 byte-order mark picks
    /// the encoding, anything else is read as UTF-8.
    fn read_from<P: AsRef<Path>>(path: P) -> Result<Self, Error>
    where
        Self: Sized,
    {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| Error::in_file(path, e))?;
        let decoder = DecodeReaderBytesBuilder::new()
            .encoding(Some(UTF_8))
            .bom_override(true)
            .strip_bom(true)
            .build(file);
        Self::from_reader(BufReader::new(decoder)).map_err(|e| Error::in_file(path, e))
    }

    /// Parse from a string.
    fn from_str(s: &str) -> Result<Self, Error>
    where
        Self: Sized,
    {
        Self::from_reader(Cursor::new(s))
    }

    /// Parse from bytes.
    fn from_bytes(bytes: &[u8]) -> Result<Self, Error>
    where
        Self: Sized,
    {
        Self::from_reader(Cursor::new(bytes))
    }
}

/// A trait for rendering one output file.
///
/// Writing to a path always replaces the previous file; output is never
/// appended to.
pub trait Emitter {
    /// Write to any writer (file, memory, etc.).
    fn to_writer<W: Write>(&self, writer: W) -> Result<(), Error>;

    /// Write to file path, removing whatever was there before.
    fn write_to<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        let path = path.as_ref();
        if path.exists() {
            fs::remove_file(path).map_err(|e| Error::in_file(path, e))?;
        }
        let file = File::create(path).map_err(|e| Error::in_file(path, e))?;
        let mut writer = BufWriter::new(file);
        self.to_writer(&mut writer)
            .map_err(|e| Error::in_file(path, e))?;
        writer.flush().map_err(|e| Error::in_file(path, e))
    }

    /// Render into an in-memory buffer.
    fn to_bytes(&self) -> Result<Vec<u8>, Error> {
        let mut out = Vec::new();
        self.to_writer(&mut out)?;
        Ok(out)
    }
}
