use anyhow::{Result, bail};

use super::{
    args::{Arguments, Command},
    commands::{
        CommandResult, check::check, init::init, locate::locate, set::set, show::show,
        translate::translate,
    },
};

/// Dispatch to the command handler for the parsed arguments.
pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Locate(cmd)) => locate(cmd),
        Some(Command::Show(cmd)) => show(cmd),
        Some(Command::Set(cmd)) => set(cmd),
        Some(Command::Translate(cmd)) => translate(cmd),
        Some(Command::Check(cmd)) => check(cmd),
        Some(Command::Init) => init(),
        Some(Command::Serve) => {
            // Serve command is handled in main.rs before calling run()
            bail!("Serve command should be handled before run()")
        }
        None => bail!("No command provided. Use --help to see available commands."),
    }
}
