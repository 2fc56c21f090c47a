use std::env;

use anyhow::{Context, Result};
use tracing::debug;

use crate::{
    cli::args::CommonArgs,
    config::{Config, load_config},
    core::{DottedKey, Workspace},
};

/// Load the configuration from the working directory, apply command-line
/// overrides and scan the project.
pub fn load_workspace(common: &CommonArgs) -> Result<Workspace> {
    let cwd = env::current_dir().context("Failed to determine current directory")?;
    let loaded = load_config(&cwd)?;
    if loaded.from_file {
        debug!("Loaded config from {}", loaded.project_dir.display());
    } else {
        debug!("No config file found, using defaults");
    }

    let config = apply_overrides(loaded.config, common);
    config.validate()?;
    Workspace::load(&loaded.project_dir, config)
}

fn apply_overrides(mut config: Config, common: &CommonArgs) -> Config {
    if let Some(root_path) = &common.root_path {
        config.root_path = root_path.clone();
    }
    if let Some(locale) = &common.default_locale {
        config.default_locale_tag = Some(locale.clone());
    }
    config
}

pub fn parse_key(key: &str) -> Result<DottedKey> {
    Ok(DottedKey::parse(key.trim())?)
}
