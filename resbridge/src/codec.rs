//! This module provides the `Codec` struct: it loads an Android resource
//! tree into a [`LocaleTable`] and writes that table out as Apple
//! `.lproj` resources, a CSV report, or a JSON dump.
//!
//! Loading is sequential. Once loaded the table is never modified, so the
//! per-locale resource files are rendered in parallel.
use std::{
    fs,
    path::{Path, PathBuf},
};

use glob::Pattern;
use lazy_static::lazy_static;
use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::{
    error::Error,
    formats::{
        AndroidStringsFormat, AppleFile, ArrayStringsFormat, Report, StringsDictFormat,
        StringsFormat, lproj_dir_name,
    },
    locale::LocaleDir,
    table::LocaleTable,
    traits::{Emitter, Parser},
};

lazy_static! {
    static ref VALUES_DIR: Pattern = Pattern::new("values*").unwrap();
    static ref XML_FILE: Pattern = Pattern::new("*.xml").unwrap();
}

/// Holds a fully loaded locale table and writes it out in the supported
/// output formats.
#[derive(Debug, Clone, Default)]
pub struct Codec {
    table: LocaleTable,
}

impl Codec {
    /// Wraps an already built table.
    pub fn new(table: LocaleTable) -> Self {
        Codec { table }
    }

    pub fn table(&self) -> &LocaleTable {
        &self.table
    }

    /// Loads every `values*` directory below `src`.
    ///
    /// Directories are handled in name order, with `values-zh-rHK` after the
    /// others; a directory whose locale is already loaded is skipped without
    /// being parsed. XML files within a directory are read in name order.
    ///
    /// # Errors
    ///
    /// Fails on the first unreadable directory or malformed XML file.
    pub fn read_dir<P: AsRef<Path>>(src: P) -> Result<Self, Error> {
        let src = src.as_ref();
        let mut dirs: Vec<(LocaleDir, PathBuf)> = list_dir(src)?
            .into_iter()
            .filter(|(name, path)| VALUES_DIR.matches(name) && path.is_dir())
            .filter_map(|(name, path)| LocaleDir::parse(&name).map(|dir| (dir, path)))
            .collect();
        dirs.sort_by(|(a, _), (b, _)| a.cmp(b));

        let mut builder = LocaleTable::builder();
        for (dir, path) in dirs {
            if builder.contains(&dir.locale) {
                warn!(
                    dir = %dir.dir_name,
                    locale = %dir.locale,
                    "locale already loaded, skipping directory"
                );
                continue;
            }

            let mut documents = Vec::new();
            for (name, file) in list_dir(&path)? {
                if !XML_FILE.matches(&name) || !file.is_file() {
                    continue;
                }
                info!(path = %file.display(), "xml");
                documents.push(AndroidStringsFormat::read_from(&file)?);
            }
            debug!(
                dir = %dir.dir_name,
                locale = %dir.locale,
                files = documents.len(),
                "directory parsed"
            );
            builder = builder.add_directory(&dir.dir_name, documents);
        }

        let table = builder.build();
        info!(
            locales = table.len(),
            strings = table.keys().strings.len(),
            arrays = table.keys().arrays.len(),
            plurals = table.keys().plurals.len(),
            "resources loaded"
        );
        Ok(Codec { table })
    }

    /// Writes `<dest>/<locale>.lproj/` for every loaded locale.
    ///
    /// A file kind is written only when some locale defines a key of that
    /// kind. Existing files are replaced.
    pub fn write_resources<P: AsRef<Path>>(&self, dest: P) -> Result<(), Error> {
        let dest = dest.as_ref();
        let locales: Vec<&str> = self.table.locales().collect();
        locales
            .par_iter()
            .try_for_each(|locale| self.write_locale(dest, locale))
    }

    /// Writes the resource files of a single locale.
    pub fn write_locale(&self, dest: &Path, locale: &str) -> Result<(), Error> {
        let locale_dir = dest.join(lproj_dir_name(locale));
        fs::create_dir_all(&locale_dir).map_err(|e| Error::in_file(&locale_dir, e))?;

        for file in AppleFile::ALL {
            if self.table.keys().get(file.bucket_kind()).is_empty() {
                continue;
            }
            let path = locale_dir.join(file.file_name());
            match file {
                AppleFile::Strings => {
                    StringsFormat::from_table(&self.table, locale).write_to(&path)?
                }
                AppleFile::ArrayStrings => {
                    ArrayStringsFormat::from_table(&self.table, locale).write_to(&path)?
                }
                AppleFile::StringsDict => {
                    StringsDictFormat::from_table(&self.table, locale).write_to(&path)?
                }
            }
        }
        info!(locale, path = %locale_dir.display(), "locale written");
        Ok(())
    }

    /// Writes the CSV report covering every locale.
    pub fn write_report<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| Error::in_file(parent, e))?;
        }
        let report = Report::from_table(&self.table);
        report.write_to(path)?;
        info!(path = %path.display(), rows = report.rows.len(), "report written");
        Ok(())
    }

    /// Dumps the locale table to a JSON file.
    pub fn cache_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| Error::in_file(parent, e))?;
        }
        let writer = fs::File::create(path).map_err(|e| Error::in_file(path, e))?;
        serde_json::to_writer_pretty(writer, &self.table).map_err(|e| Error::in_file(path, e))?;
        Ok(())
    }

    /// Loads a table previously written by [`Codec::cache_to_file`].
    pub fn load_from_cache<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref();
        let reader = fs::File::open(path).map_err(|e| Error::in_file(path, e))?;
        let table = serde_json::from_reader(std::io::BufReader::new(reader))
            .map_err(|e| Error::in_file(path, e))?;
        Ok(Codec { table })
    }
}

/// Lists `(file name, path)` pairs of a directory, sorted by name. Entries
/// whose names are not valid UTF-8 are skipped.
fn list_dir(dir: &Path) -> Result<Vec<(String, PathBuf)>, Error> {
    let mut entries = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| Error::in_file(dir, e))? {
        let entry = entry.map_err(|e| Error::in_file(dir, e))?;
        match entry.file_name().into_string() {
            Ok(name) => entries.push((name, entry.path())),
            Err(name) => warn!(?name, "skipping non UTF-8 file name"),
        }
    }
    entries.sort();
    Ok(entries)
}
