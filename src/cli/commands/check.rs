use std::{fs, path::Path};

use anyhow::Result;
use rayon::prelude::*;
use tracing::debug;

use super::{CheckSummary, CommandResult, CommandSummary, context::load_workspace};
use crate::{
    cli::{ExitStatus, args::CheckCommand},
    core::{
        DottedKey, KeyStatus, LocaleIndex, SnippetMode, SourceContext, SourceLocation, Workspace,
        template::extract_references,
    },
    issues::{Issue, NoCandidateFilesIssue, ReadErrorIssue, UndefinedKeyIssue},
    utils::char_column,
};

pub fn check(cmd: CheckCommand) -> Result<CommandResult> {
    let workspace = load_workspace(&cmd.common)?;
    let templates = workspace.template_files()?;

    let (index, failures) = workspace.index_locale_files();
    let mut issues: Vec<Issue> = failures
        .into_iter()
        .map(|(path, e)| {
            Issue::ReadError(ReadErrorIssue {
                file_path: workspace.display_path(&path),
                error: e.to_string(),
            })
        })
        .collect();

    let results: Vec<(Vec<Issue>, usize)> = templates
        .par_iter()
        .map(|template| check_template(&workspace, &index, template))
        .collect();

    let mut reference_count = 0;
    for (template_issues, count) in results {
        issues.extend(template_issues);
        reference_count += count;
    }
    debug!(
        "Checked {} reference(s) in {} template(s)",
        reference_count,
        templates.len()
    );

    let exit_status = ExitStatus::failure_if(!issues.is_empty());
    Ok(CommandResult {
        summary: CommandSummary::Check(CheckSummary {
            template_count: templates.len(),
            reference_count,
            locale_file_count: index.len(),
        }),
        issues,
        exit_status,
    })
}

fn check_template(workspace: &Workspace, index: &LocaleIndex, template: &Path) -> (Vec<Issue>, usize) {
    let file_path = workspace.display_path(template);
    let source = match fs::read_to_string(template) {
        Ok(source) => source,
        Err(e) => {
            let issue = Issue::ReadError(ReadErrorIssue {
                file_path,
                error: e.to_string(),
            });
            return (vec![issue], 0);
        }
    };

    let lines: Vec<&str> = source.lines().collect();
    let references = extract_references(&source, SnippetMode::Sever);
    let mut issues = Vec::new();

    for reference in &references {
        let full_key = reference.full_key();
        let Ok(key) = DottedKey::parse(&full_key) else {
            debug!("Skipping malformed key {:?} in {}", full_key, file_path);
            continue;
        };
        let source_line = lines[reference.line];
        let context = SourceContext::new(
            SourceLocation::new(
                file_path.clone(),
                reference.line + 1,
                char_column(source_line, reference.column),
            ),
            source_line,
        );

        match workspace.key_status(index, &key) {
            KeyStatus::Defined(_) => {}
            KeyStatus::NoCandidateFiles => {
                issues.push(Issue::NoCandidateFiles(NoCandidateFilesIssue::new(
                    context,
                    full_key,
                    key.domain().to_string(),
                    &workspace.config().neon_extension,
                )));
            }
            KeyStatus::Undefined { candidates } => {
                issues.push(Issue::UndefinedKey(UndefinedKeyIssue {
                    context,
                    key: full_key,
                    searched_files: candidates
                        .iter()
                        .map(|c| workspace.display_path(&c.path))
                        .collect(),
                }));
            }
        }
    }

    (issues, references.len())
}
