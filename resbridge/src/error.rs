//! All error types for the resbridge crate.
//!
//! These are returned from every fallible operation (parsing, loading, emission).
//! Lookup misses are not errors: resolvers return `Option` instead.

use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("XML parse error: {0}")]
    XmlParse(#[from] quick_xml::Error),

    #[error("XML attribute error: {0}")]
    XmlAttr(#[from] quick_xml::events::attributes::AttrError),

    #[error("invalid resource: {0}")]
    InvalidResource(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("{}: {source}", path.display())]
    InFile {
        path: PathBuf,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Attaches the file that was being read or written when `source` occurred.
    pub fn in_file(path: impl AsRef<Path>, source: impl Into<Error>) -> Self {
        Error::InFile {
            path: path.as_ref().to_path_buf(),
            source: Box::new(source.into()),
        }
    }

    /// Creates a new invalid resource error.
    pub fn invalid_resource(message: impl Into<String>) -> Self {
        Error::InvalidResource(message.into())
    }
}
