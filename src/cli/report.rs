//! Report formatting and printing utilities.
//!
//! Issues are displayed in cargo-style format; command summaries as short
//! aligned listings. Separate from core logic to allow neonkey to be used as
//! a library.

use std::io::{self, Write};
use std::path::Path;

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::commands::{
    CheckSummary, CommandResult, CommandSummary, InitSummary, LocateSummary, SetSummary,
    ShowSummary, TranslateSummary,
};
use crate::config::CONFIG_FILE_NAME;
use crate::core::SaveReport;
use crate::issues::{Issue, Report, ReportLocation, Severity};
use crate::utils::display_path;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Shown in place of a value the key does not have.
const MISSING_VALUE: &str = "(missing)";

pub fn print(result: &CommandResult) {
    let mut out = io::stdout().lock();
    print_to(result, &mut out);
}

/// Print a command result to a custom writer.
pub fn print_to<W: Write>(result: &CommandResult, writer: &mut W) {
    match &result.summary {
        CommandSummary::Locate(summary) => print_locate(summary, writer),
        CommandSummary::Show(summary) => print_show(summary, writer),
        CommandSummary::Set(summary) => print_set(summary, writer),
        CommandSummary::Translate(summary) => print_translate(summary, writer),
        CommandSummary::Check(summary) => {
            report_to(&result.issues, writer);
            if result.issues.is_empty() {
                print_check_success(summary, writer);
            }
        }
        CommandSummary::Init(summary) => print_init(summary, writer),
    }
}

/// Print issues in cargo-style format, sorted by location.
pub fn report_to<W: Write>(issues: &[Issue], writer: &mut W) {
    if issues.is_empty() {
        return;
    }

    let mut sorted = issues.to_vec();
    sorted.sort_by(compare_issues);

    // Calculate max line number width for alignment
    let max_line_width = calculate_max_line_width(&sorted);

    for issue in &sorted {
        print_issue(issue, writer, max_line_width);
    }

    print_summary(&sorted, writer);
}

// ============================================================
// Issues
// ============================================================

fn print_issue<W: Write>(issue: &Issue, writer: &mut W, max_line_width: usize) {
    let loc = issue.location();
    let (file_path, line, col, source_line) = extract_location_info(&loc);

    let severity = issue.report_severity();
    let severity_str = match severity {
        Severity::Error => "error".bold().red(),
        Severity::Warning => "warning".bold().yellow(),
    };

    let _ = writeln!(
        writer,
        "{}: \"{}\"  {}",
        severity_str,
        issue.message(),
        issue.report_rule().to_string().dimmed().cyan()
    );

    // Print clickable location: --> path:line:col
    if line > 0 {
        let _ = writeln!(writer, "  {} {}:{}:{}", "-->".blue(), file_path, line, col);
    } else {
        let _ = writeln!(writer, "  {} {}", "-->".blue(), file_path);
    }

    if let Some(source_line) = source_line {
        let caret_char = match severity {
            Severity::Error => "^".red(),
            Severity::Warning => "^".yellow(),
        };

        let _ = writeln!(writer, "{:>width$} {}", "", "|".blue(), width = max_line_width);
        let _ = writeln!(
            writer,
            "{:>width$} {} {}",
            line.to_string().blue(),
            "|".blue(),
            source_line,
            width = max_line_width
        );

        // Caret pointing to the column (col is 1-based)
        let prefix: String = source_line.chars().take(col.saturating_sub(1)).collect();
        let caret_padding = UnicodeWidthStr::width(prefix.as_str());
        let _ = writeln!(
            writer,
            "{:>width$} {} {:>padding$}{}",
            "",
            "|".blue(),
            "",
            caret_char,
            width = max_line_width,
            padding = caret_padding
        );
    }

    if let Some(details) = issue.details() {
        let _ = writeln!(
            writer,
            "{:>width$} {} {} {}",
            "",
            "=".blue(),
            "note:".bold(),
            details,
            width = max_line_width
        );
    }

    if let Some(hint) = issue.hint() {
        let _ = writeln!(
            writer,
            "{:>width$} {} {} {}",
            "",
            "=".blue(),
            "hint:".bold().cyan(),
            hint,
            width = max_line_width
        );
    }

    let _ = writeln!(writer); // Empty line between issues
}

fn print_summary<W: Write>(issues: &[Issue], writer: &mut W) {
    let total_errors = issues
        .iter()
        .filter(|i| i.report_severity() == Severity::Error)
        .count();
    let total_warnings = issues.len() - total_errors;

    let _ = writeln!(
        writer,
        "{} {} problems ({} {}, {} {})",
        FAILURE_MARK.red(),
        issues.len(),
        total_errors,
        if total_errors == 1 { "error" } else { "errors" }.red(),
        total_warnings,
        if total_warnings == 1 {
            "warning"
        } else {
            "warnings"
        }
        .yellow()
    );
}

fn extract_location_info<'a>(
    loc: &'a ReportLocation<'a>,
) -> (&'a str, usize, usize, Option<&'a str>) {
    match loc {
        ReportLocation::Source(ctx) => (
            ctx.file_path(),
            ctx.line(),
            ctx.col(),
            Some(&ctx.source_line),
        ),
        ReportLocation::File { path } => (path, 0, 0, None),
    }
}

fn calculate_max_line_width(issues: &[Issue]) -> usize {
    issues
        .iter()
        .filter_map(|i| match i.location() {
            ReportLocation::Source(ctx) => Some(ctx.line()),
            ReportLocation::File { .. } => None,
        })
        .max()
        .map(|n| n.to_string().len())
        .unwrap_or(1)
}

fn compare_issues(a: &Issue, b: &Issue) -> std::cmp::Ordering {
    let a_loc = a.location();
    let b_loc = b.location();
    let (a_path, a_line, a_col, _) = extract_location_info(&a_loc);
    let (b_path, b_line, b_col, _) = extract_location_info(&b_loc);

    a_path
        .cmp(b_path)
        .then_with(|| a_line.cmp(&b_line))
        .then_with(|| a_col.cmp(&b_col))
        .then_with(|| a.rule().cmp(&b.rule()))
}

fn print_check_success<W: Write>(summary: &CheckSummary, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Checked {} {} in {} {} against {} locale {} - no issues found",
            summary.reference_count,
            plural(summary.reference_count, "reference", "references"),
            summary.template_count,
            plural(summary.template_count, "template", "templates"),
            summary.locale_file_count,
            plural(summary.locale_file_count, "file", "files"),
        )
        .green()
    );
}

// ============================================================
// Command Summaries
// ============================================================

fn print_locate<W: Write>(summary: &LocateSummary, writer: &mut W) {
    match &summary.location {
        Some(location) => {
            let _ = writeln!(writer, "{}", location);
        }
        None if summary.candidate_count == 0 => {
            let domain = summary.key.split('.').next().unwrap_or_default();
            let _ = writeln!(
                writer,
                "{} No locale files for domain \"{}\"",
                FAILURE_MARK.red(),
                domain
            );
        }
        None => {
            let _ = writeln!(
                writer,
                "{} \"{}\" is not defined in {} candidate {}",
                FAILURE_MARK.red(),
                summary.key,
                summary.candidate_count,
                plural(summary.candidate_count, "file", "files")
            );
        }
    }
}

fn print_show<W: Write>(summary: &ShowSummary, writer: &mut W) {
    if summary.entries.is_empty() {
        let domain = summary.key.split('.').next().unwrap_or_default();
        let _ = writeln!(
            writer,
            "{} No locale files for domain \"{}\"",
            FAILURE_MARK.red(),
            domain
        );
        return;
    }

    let rows: Vec<[String; 3]> = summary
        .entries
        .iter()
        .map(|entry| {
            let path = display_path(&entry.path, &summary.base);
            match entry.line {
                Some(line) => [entry.locale.clone(), entry.value.clone(), format!("{}:{}", path, line + 1)],
                None => [entry.locale.clone(), MISSING_VALUE.to_string(), path],
            }
        })
        .collect();

    let _ = writeln!(writer, "{}", summary.key.bold());
    let locale_width = column_width(rows.iter().map(|r| r[0].as_str()));
    let value_width = column_width(rows.iter().map(|r| r[1].as_str()));

    for (row, entry) in rows.iter().zip(&summary.entries) {
        let value = pad(&row[1], value_width);
        let value = if entry.is_defined() {
            value.normal()
        } else {
            value.dimmed()
        };
        let _ = writeln!(
            writer,
            "  {}  {}  {}",
            pad(&row[0], locale_width).cyan(),
            value,
            row[2]
        );
    }
}

fn print_set<W: Write>(summary: &SetSummary, writer: &mut W) {
    if summary.candidate_count == 0 {
        let domain = summary.key.split('.').next().unwrap_or_default();
        let _ = writeln!(
            writer,
            "{} No locale files for domain \"{}\"",
            FAILURE_MARK.red(),
            domain
        );
    }
    print_save_report(&summary.key, &summary.report, &summary.base, writer);
}

fn print_translate<W: Write>(summary: &TranslateSummary, writer: &mut W) {
    let _ = writeln!(
        writer,
        "Translated \"{}\" from {}:",
        summary.text,
        summary.source_locale.cyan()
    );
    let locale_width = column_width(summary.translations.keys().map(String::as_str));
    for (locale, text) in &summary.translations {
        let _ = writeln!(writer, "  {}  {}", pad(locale, locale_width).cyan(), text);
    }
    if summary.translations.is_empty() {
        let _ = writeln!(writer, "{} No translations returned", FAILURE_MARK.red());
        return;
    }

    match &summary.report {
        Some(report) => {
            let _ = writeln!(writer);
            print_save_report(&summary.key, report, &summary.base, writer);
        }
        None => {
            let _ = writeln!(writer, "Run with {} to write these translations.", "--apply".cyan());
        }
    }
}

fn print_save_report<W: Write>(key: &str, report: &SaveReport, base: &Path, writer: &mut W) {
    let locale_width = column_width(
        report
            .saved
            .iter()
            .map(|s| s.locale.as_str())
            .chain(report.malformed.iter().map(|m| m.locale.as_str()))
            .chain(report.unknown_locales.iter().map(String::as_str)),
    );

    for saved in &report.saved {
        let _ = writeln!(
            writer,
            "{} {}  {}  {}:{}",
            SUCCESS_MARK.green(),
            pad(&saved.locale, locale_width).cyan(),
            pad(saved.action.as_str(), "appended".len()),
            display_path(&saved.path, base),
            saved.line + 1
        );
    }
    for malformed in &report.malformed {
        let _ = writeln!(
            writer,
            "{} {}  {}:{} cannot be rewritten, file skipped",
            FAILURE_MARK.red(),
            pad(&malformed.locale, locale_width).cyan(),
            display_path(&malformed.path, base),
            malformed.line + 1
        );
    }
    for locale in &report.unknown_locales {
        let _ = writeln!(
            writer,
            "{} {}  no {} file for \"{}\"",
            FAILURE_MARK.red(),
            pad(locale, locale_width).cyan(),
            locale,
            key
        );
    }
    for locale in &report.skipped_empty {
        let _ = writeln!(
            writer,
            "{} empty value for {} ignored",
            "warning:".bold().yellow(),
            locale
        );
    }
}

fn print_init<W: Write>(summary: &InitSummary, writer: &mut W) {
    if summary.created {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    } else {
        eprintln!("Error: {} already exists", CONFIG_FILE_NAME);
    }
}

// ============================================================
// Helpers
// ============================================================

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}

fn column_width<'a>(cells: impl Iterator<Item = &'a str>) -> usize {
    cells.map(UnicodeWidthStr::width).max().unwrap_or(0)
}

/// Left-align `text` to a display width.
fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(UnicodeWidthStr::width(text));
    format!("{}{}", text, " ".repeat(fill))
}
