//! CLI library for testing purposes

pub mod args;
pub mod config;
pub mod exit_status;
pub mod run;
pub mod validation;

pub use args::Arguments;
pub use config::{FileConfig, Settings};
pub use exit_status::ExitStatus;
pub use resbridge::Codec;
pub use run::run;
