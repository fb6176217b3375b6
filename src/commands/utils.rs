use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::utils::config::SCHEMA_VERSION;
use crate::utils::settings::{load_config, SizeBotConfig};

/// Print the effective configuration as TOML
pub fn display_config(config_file: Option<PathBuf>) -> Result<()> {
    let config = match config_file {
        Some(path) => load_config(&path)
            .with_context(|| format!("Failed to load config file {}", path.display()))?,
        None => SizeBotConfig::default(),
    };

    print!("{}", config.to_toml_string()?);
    Ok(())
}

/// Display version information
pub fn display_version() {
    println!("Bundle Sizebot v{}", env!("CARGO_PKG_VERSION"));
    println!("Summary Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Compares two build artifact trees and reports bundle size changes.");
}
