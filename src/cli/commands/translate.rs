use std::collections::BTreeSet;

use anyhow::{Context, Result, bail};

use super::{
    CommandResult, CommandSummary, TranslateSummary,
    context::{load_workspace, parse_key},
};
use crate::{
    cli::{ExitStatus, args::TranslateCommand},
    core::{TranslationEntry, UNKNOWN_LOCALE},
    translate::{OpenAiTranslator, Translator},
};

pub fn translate(cmd: TranslateCommand) -> Result<CommandResult> {
    let key = parse_key(&cmd.key)?;
    let workspace = load_workspace(&cmd.common)?;
    let session = workspace.open_session(key)?;
    if session.entries().is_empty() {
        bail!("No locale files found for key '{}'", session.key());
    }

    let text = match cmd.text {
        Some(text) => text,
        None => session
            .entry(&cmd.from)
            .map(|e| e.value.clone())
            .filter(|v| !v.trim().is_empty())
            .with_context(|| {
                format!(
                    "'{}' has no {} value to translate (pass --text)",
                    session.key(),
                    cmd.from
                )
            })?,
    };

    let targets = if cmd.to.is_empty() {
        default_targets(session.entries(), &cmd.from)
    } else {
        cmd.to.clone()
    };
    if targets.is_empty() {
        bail!("No target locales; pass --to");
    }

    let translator = OpenAiTranslator::from_config(workspace.config())?;
    let mut translations = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(translator.translate(&text, &cmd.from, &targets))?;
    // Only the requested locales are kept.
    translations.retain(|locale, _| targets.contains(locale));

    let key = session.key().to_string();
    let report = if cmd.apply {
        Some(session.save(&translations)?)
    } else {
        None
    };

    let exit_status = ExitStatus::failure_if(
        translations.is_empty() || report.as_ref().is_some_and(|r| r.has_failures()),
    );
    Ok(CommandResult::new(
        CommandSummary::Translate(TranslateSummary {
            key,
            base: workspace.project_dir().to_path_buf(),
            source_locale: cmd.from,
            text,
            translations,
            report,
        }),
        exit_status,
    ))
}

/// Every known locale of the key except the source, in file order.
fn default_targets(entries: &[TranslationEntry], source: &str) -> Vec<String> {
    let mut seen = BTreeSet::new();
    entries
        .iter()
        .map(|e| e.locale.as_str())
        .filter(|l| *l != source && *l != UNKNOWN_LOCALE)
        .filter(|l| seen.insert(*l))
        .map(str::to_string)
        .collect()
}
