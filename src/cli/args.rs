//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `locate`: Print where a key is defined
//! - `show`: List a key's value in every locale file
//! - `set`: Write values for one or more locales
//! - `translate`: Machine-translate a key into other locales
//! - `check`: Report template keys with no definition
//! - `init`: Create a neonkey configuration file
//! - `serve`: Start MCP server for AI integration

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        self.common().is_some_and(|c| c.verbose)
    }

    pub fn common(&self) -> Option<&CommonArgs> {
        match &self.command {
            Some(Command::Locate(cmd)) => Some(&cmd.common),
            Some(Command::Show(cmd)) => Some(&cmd.common),
            Some(Command::Set(cmd)) => Some(&cmd.common),
            Some(Command::Translate(cmd)) => Some(&cmd.common),
            Some(Command::Check(cmd)) => Some(&cmd.common),
            Some(Command::Init) | Some(Command::Serve) | None => None,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Directory holding locale files and templates (overrides config file)
    #[arg(long)]
    pub root_path: Option<String>,

    /// Locale whose files are preferred (overrides config file)
    #[arg(long)]
    pub default_locale: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct LocateCommand {
    /// Dotted key, e.g. admin.dashboard.title
    #[arg(required_unless_present = "template")]
    pub key: Option<String>,

    /// Resolve the key referenced in this template instead
    #[arg(long, requires = "line", conflicts_with = "key")]
    pub template: Option<PathBuf>,

    /// 1-based line of the reference in --template
    #[arg(long, requires = "template")]
    pub line: Option<usize>,

    /// 1-based column of the reference in --template
    #[arg(long, requires = "template")]
    pub column: Option<usize>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct ShowCommand {
    pub key: String,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct SetCommand {
    pub key: String,

    /// Values as LOCALE=VALUE
    #[arg(required = true, value_parser = parse_assignment)]
    pub values: Vec<(String, String)>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct TranslateCommand {
    pub key: String,

    /// Source locale
    #[arg(long)]
    pub from: String,

    /// Target locales (default: every other locale file of the key)
    #[arg(long)]
    pub to: Vec<String>,

    /// Text to translate (default: the key's value in the source locale)
    #[arg(long)]
    pub text: Option<String>,

    /// Write the translations (default is dry-run)
    #[arg(long)]
    pub apply: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the file and line defining a key
    Locate(LocateCommand),
    /// Show a key's value in every locale file
    Show(ShowCommand),
    /// Set a key's value for one or more locales
    Set(SetCommand),
    /// Translate a key into other locales
    Translate(TranslateCommand),
    /// Report template keys that are not defined
    Check(CheckCommand),
    /// Initialize a new .neonkeyrc.json configuration file
    Init,
    /// Start MCP server for AI coding agents
    Serve,
}

/// Parse `LOCALE=VALUE`. The value may itself contain `=`.
fn parse_assignment(s: &str) -> Result<(String, String), String> {
    let (locale, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected LOCALE=VALUE, got '{}'", s))?;
    let locale = locale.trim();
    if locale.is_empty() {
        return Err(format!("missing locale in '{}'", s));
    }
    Ok((locale.to_string(), value.to_string()))
}
