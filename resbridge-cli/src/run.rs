use anyhow::{Context, Result};
use resbridge::Codec;
use tracing::info;

use crate::config::Settings;

/// Loads the resource tree and writes every requested output.
pub fn run(settings: &Settings) -> Result<()> {
    info!(source = %settings.source.display(), "loading resources");
    let codec = Codec::read_dir(&settings.source).with_context(|| {
        format!(
            "Failed to load resources from {}",
            settings.source.display()
        )
    })?;

    if let Some(dump) = &settings.dump {
        codec
            .cache_to_file(dump)
            .with_context(|| format!("Failed to dump locale table to {}", dump.display()))?;
    }

    if let Some(destination) = &settings.destination {
        codec.write_resources(destination).with_context(|| {
            format!("Failed to write resources to {}", destination.display())
        })?;
    }

    if let Some(report) = &settings.report {
        codec
            .write_report(report)
            .with_context(|| format!("Failed to write report {}", report.display()))?;
    }

    info!(locales = codec.table().len(), "done");
    Ok(())
}
