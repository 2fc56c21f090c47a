use std::collections::BTreeMap;

use anyhow::Result;

use super::{
    CommandResult, CommandSummary, SetSummary,
    context::{load_workspace, parse_key},
};
use crate::cli::{ExitStatus, args::SetCommand};

pub fn set(cmd: SetCommand) -> Result<CommandResult> {
    let key = parse_key(&cmd.key)?;
    let workspace = load_workspace(&cmd.common)?;
    let session = workspace.open_session(key)?;
    let candidate_count = session.entries().len();
    let key = session.key().to_string();

    // Later assignments for the same locale win.
    let updates: BTreeMap<String, String> = cmd.values.into_iter().collect();
    let report = session.save(&updates)?;

    let exit_status = ExitStatus::failure_if(report.has_failures());
    Ok(CommandResult::new(
        CommandSummary::Set(SetSummary {
            key,
            base: workspace.project_dir().to_path_buf(),
            candidate_count,
            report,
        }),
        exit_status,
    ))
}
