use anyhow::Result;

use super::{
    CommandResult, CommandSummary, ShowSummary,
    context::{load_workspace, parse_key},
};
use crate::cli::{ExitStatus, args::ShowCommand};

pub fn show(cmd: ShowCommand) -> Result<CommandResult> {
    let key = parse_key(&cmd.key)?;
    let workspace = load_workspace(&cmd.common)?;
    let session = workspace.open_session(key)?;

    let entries = session.entries().to_vec();
    let exit_status = ExitStatus::failure_if(entries.is_empty());

    Ok(CommandResult::new(
        CommandSummary::Show(ShowSummary {
            key: session.key().to_string(),
            base: workspace.project_dir().to_path_buf(),
            entries,
        }),
        exit_status,
    ))
}
