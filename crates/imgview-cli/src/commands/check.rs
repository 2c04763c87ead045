use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use imgview_core::ViewerConfig;

use crate::summary::print_config_summary;

#[derive(Args)]
pub struct CheckArgs {
    /// Viewer config file (TOML)
    pub file: PathBuf,
}

pub fn run(args: &CheckArgs) -> Result<()> {
    let config = ViewerConfig::load(&args.file)
        .with_context(|| format!("Invalid config {}", args.file.display()))?;
    tracing::debug!(images = config.image_count(), "config loaded");
    print_config_summary(&args.file, &config);
    Ok(())
}
