//! Configuration inspection command.

use std::path::PathBuf;

use crate::config::{self, Config};

/// Print the effective configuration, or write a default config file
pub fn cmd_config(
    effective: &Config,
    explicit_path: Option<&PathBuf>,
    init: bool,
    force: bool,
) -> anyhow::Result<()> {
    let path = explicit_path.cloned().or_else(config::config_path);

    if init {
        let Some(path) = path else {
            anyhow::bail!("Could not determine config directory; pass --config PATH");
        };
        if path.exists() && !force {
            println!("Config file already exists: {}", path.display());
            println!("Use --force to overwrite it with defaults.");
            return Ok(());
        }
        config::save_to(&Config::default(), &path)?;
        println!("✓ Wrote default config to {}", path.display());
        return Ok(());
    }

    match &path {
        Some(path) if path.exists() => println!("# Loaded from {}", path.display()),
        Some(path) => println!("# {} not found, showing defaults", path.display()),
        None => println!("# No config directory, showing defaults"),
    }
    print!("{}", config::to_toml(effective)?);
    Ok(())
}
