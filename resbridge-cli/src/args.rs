//! Command-line arguments.
//!
//! Every path can also come from the environment or from a `resbridge.toml`
//! file; see [`crate::config`] for how the layers combine.

use std::path::PathBuf;

use clap::{ArgAction, Parser};

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    /// Android `res/` directory holding the `values*` directories
    #[arg(long = "in", value_name = "DIR", env = "RESBRIDGE_IN")]
    pub source: Option<PathBuf>,

    /// Directory receiving one `<locale>.lproj/` per locale
    #[arg(long = "out", value_name = "DIR", env = "RESBRIDGE_OUT")]
    pub destination: Option<PathBuf>,

    /// CSV report of all translations
    #[arg(long, value_name = "FILE", env = "RESBRIDGE_REPORT")]
    pub report: Option<PathBuf>,

    /// Also write the loaded locale table as JSON
    #[arg(long, value_name = "FILE")]
    pub dump: Option<PathBuf>,

    /// TOML config file (defaults to `./resbridge.toml` when present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// More output; repeat for trace level
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Only print warnings and errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Arguments {
    /// Log level used when `RUST_LOG` is not set.
    pub fn log_level(&self) -> &'static str {
        match (self.quiet, self.verbose) {
            (true, _) => "warn",
            (false, 0) => "info",
            (false, 1) => "debug",
            (false, _) => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Arguments {
        Arguments::try_parse_from(std::iter::once("resbridge").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_log_levels() {
        assert_eq!(parse(&[]).log_level(), "info");
        assert_eq!(parse(&["-v"]).log_level(), "debug");
        assert_eq!(parse(&["-vv"]).log_level(), "trace");
        assert_eq!(parse(&["-q"]).log_level(), "warn");
    }

    #[test]
    fn test_verbose_conflicts_with_quiet() {
        assert!(Arguments::try_parse_from(["resbridge", "-v", "-q"]).is_err());
    }

    #[test]
    fn test_path_flags() {
        let args = parse(&["--in", "res", "--out", "ios", "--report", "r.csv", "--dump", "t.json"]);
        assert_eq!(args.source, Some(PathBuf::from("res")));
        assert_eq!(args.destination, Some(PathBuf::from("ios")));
        assert_eq!(args.report, Some(PathBuf::from("r.csv")));
        assert_eq!(args.dump, Some(PathBuf::from("t.json")));
    }
}
