//! Layered configuration.
//!
//! Highest precedence first: command-line flags, environment variables (both
//! handled by clap), the TOML config file, then defaults. Relative paths are
//! resolved against the current directory, except those in the config file,
//! which are resolved against the file's own directory.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use tracing::debug;

use crate::{
    args::Arguments,
    validation::{validate_destination_dir, validate_output_file, validate_source_dir},
};

pub const CONFIG_FILE_NAME: &str = "resbridge.toml";

/// Contents of a `resbridge.toml` file.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub source: Option<PathBuf>,
    pub destination: Option<PathBuf>,
    pub report: Option<PathBuf>,
}

impl FileConfig {
    /// Reads a config file and makes its paths absolute against the file's
    /// directory.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: FileConfig = toml::from_str(&text)
            .with_context(|| format!("Invalid config file {}", path.display()))?;

        let base = path.parent().unwrap_or_else(|| Path::new(""));
        Ok(config.relative_to(base))
    }

    /// Loads `explicit` if given, else `resbridge.toml` in `cwd` if present.
    pub fn discover(explicit: Option<&Path>, cwd: &Path) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(&cwd.join(path)),
            None => {
                let default = cwd.join(CONFIG_FILE_NAME);
                if default.is_file() {
                    debug!(path = %default.display(), "using config file");
                    Self::load(&default)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    fn relative_to(self, base: &Path) -> Self {
        FileConfig {
            source: self.source.map(|p| base.join(p)),
            destination: self.destination.map(|p| base.join(p)),
            report: self.report.map(|p| base.join(p)),
        }
    }
}

/// Fully resolved run settings. All paths are absolute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub source: PathBuf,
    pub destination: Option<PathBuf>,
    pub report: Option<PathBuf>,
    pub dump: Option<PathBuf>,
}

impl Settings {
    /// Combines arguments with the config file and validates the result.
    pub fn resolve(args: &Arguments, file: FileConfig, cwd: &Path) -> Result<Self> {
        let absolute = |p: PathBuf| cwd.join(p);

        let Some(source) = args.source.clone().or(file.source).map(absolute) else {
            bail!(
                "No source directory given (use --in, RESBRIDGE_IN or `source` in {})",
                CONFIG_FILE_NAME
            );
        };
        let destination = args.destination.clone().or(file.destination).map(absolute);
        let report = args.report.clone().or(file.report).map(absolute);
        let dump = args.dump.clone().map(absolute);

        if destination.is_none() && report.is_none() {
            bail!(
                "Nothing to do: give an output directory (--out) and/or a report file (--report)"
            );
        }

        validate_source_dir(&source).map_err(anyhow::Error::msg)?;
        if let Some(destination) = &destination {
            validate_destination_dir(destination).map_err(anyhow::Error::msg)?;
        }
        if let Some(report) = &report {
            validate_output_file("--report", report).map_err(anyhow::Error::msg)?;
        }
        if let Some(dump) = &dump {
            validate_output_file("--dump", dump).map_err(anyhow::Error::msg)?;
        }

        Ok(Settings {
            source,
            destination,
            report,
            dump,
        })
    }
}
