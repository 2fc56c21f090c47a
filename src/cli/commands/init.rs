use std::{fs, path::Path};

use anyhow::{Context, Result};

use super::{CommandResult, CommandSummary, InitSummary};
use crate::{
    cli::ExitStatus,
    config::{CONFIG_FILE_NAME, default_config_json},
};

pub fn init() -> Result<CommandResult> {
    let config_path = Path::new(CONFIG_FILE_NAME);

    if config_path.exists() {
        return Ok(CommandResult::new(
            CommandSummary::Init(InitSummary { created: false }),
            ExitStatus::Failure,
        ));
    }

    fs::write(config_path, format!("{}\n", default_config_json()?))
        .with_context(|| format!("Failed to write {}", CONFIG_FILE_NAME))?;

    Ok(CommandResult::new(
        CommandSummary::Init(InitSummary { created: true }),
        ExitStatus::Success,
    ))
}
