use anyhow::{Result, bail};

use super::{
    CommandResult, CommandSummary, LocateSummary,
    context::{load_workspace, parse_key},
};
use crate::{
    cli::{ExitStatus, args::LocateCommand},
    core::template::key_at,
};

pub fn locate(cmd: LocateCommand) -> Result<CommandResult> {
    let key = match (&cmd.key, &cmd.template) {
        (Some(key), _) => parse_key(key)?,
        (None, Some(template)) => {
            let line = cmd.line.unwrap_or(1);
            key_at(template, line, cmd.column)?
        }
        (None, None) => bail!("Either KEY or --template is required"),
    };

    let workspace = load_workspace(&cmd.common)?;
    let candidates = workspace.candidates(&key);
    let location = workspace.find_definition(&key)?.map(|loc| {
        format!("{}:{}", workspace.display_path(&loc.path), loc.line + 1)
    });

    let exit_status = ExitStatus::failure_if(location.is_none());
    Ok(CommandResult::new(
        CommandSummary::Locate(LocateSummary {
            key: key.to_string(),
            location,
            candidate_count: candidates.len(),
        }),
        exit_status,
    ))
}
