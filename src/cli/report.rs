//! Report formatting and printing utilities.
//!
//! This module provides functions to display issues in cargo-style format
//! and the outputs of the other commands.
//! Separate from core logic to allow tsling to be used as a library.

use std::io::{self, Write};

use colored::Colorize;
use serde::Serialize;
use unicode_width::UnicodeWidthStr;

use super::commands::{
    CatalogStats, CommandResult, CommandSummary, ExportSummary, InitSummary, LookupSummary,
    MergeSummary, NormalizeSummary, StatsSummary,
};
use crate::config::CONFIG_FILE_NAME;
use crate::core::translator::LookupStatus;
use crate::issues::{Issue, Report, ReportLocation, Severity};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print issues in cargo-style format to stdout.
pub fn report(issues: &[Issue]) {
    report_to(issues, &mut io::stdout().lock());
}

/// Print issues to a custom writer.
///
/// Useful for testing or redirecting output.
pub fn report_to<W: Write>(issues: &[Issue], writer: &mut W) {
    if issues.is_empty() {
        return;
    }

    let mut sorted = issues.to_vec();
    sorted.sort();

    // Calculate max line number width for alignment
    let max_line_width = calculate_max_line_width(&sorted);

    for issue in &sorted {
        print_issue(issue, writer, max_line_width);
    }

    print_summary(&sorted, writer);
}

/// Print a success message when no issues are found.
pub fn print_success(files: usize) {
    print_success_to(files, &mut io::stdout().lock());
}

/// Print a success message to a custom writer.
pub fn print_success_to<W: Write>(files: usize, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Checked {} catalog {} - no issues found",
            files,
            if files == 1 { "file" } else { "files" }
        )
        .green()
    );
}

/// Print a warning about files that could not be parsed.
pub fn print_parse_warning(count: usize, verbose: bool) {
    print_parse_warning_to(count, verbose, &mut io::stderr().lock());
}

/// Print a parse warning to a custom writer.
pub fn print_parse_warning_to<W: Write>(count: usize, verbose: bool, writer: &mut W) {
    if count > 0 && !verbose {
        let _ = writeln!(
            writer,
            "{} {} file(s) could not be parsed (use {} for details)",
            "warning:".bold().yellow(),
            count,
            "-v".cyan()
        );
    }
}

pub fn print(result: &CommandResult, verbose: bool) {
    match &result.summary {
        CommandSummary::Check => {
            report(&result.issues);
            if result.issues.is_empty() {
                print_success(result.files_checked);
            }
        }
        CommandSummary::Lookup(summary) => print_lookup(summary),
        CommandSummary::Stats(summary) => print_stats(summary),
        CommandSummary::Normalize(summary) => print_normalize(summary),
        CommandSummary::Merge(summary) => print_merge(summary),
        CommandSummary::Export(summary) => print_export(summary),
        CommandSummary::Init(summary) => print_init(summary),
    }

    print_parse_warning(result.parse_error_count, verbose);
}

// ============================================================
// Internal Functions
// ============================================================

fn print_issue<W: Write>(issue: &Issue, writer: &mut W, max_line_width: usize) {
    let loc = issue.location();

    // Print severity and message (cargo-style)
    let severity_str = match issue.report_severity() {
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
    match loc {
        ReportLocation::Message(ctx) => {
            let _ = writeln!(
                writer,
                "  {} {}:{}:{}",
                "-->".blue(),
                ctx.file_path(),
                ctx.line(),
                ctx.col()
            );
        }
        ReportLocation::File { path } => {
            let _ = writeln!(writer, "  {} {}", "-->".blue(), path);
        }
    }

    // Print details if present (cargo-style note)
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

    // Print hint if present
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
    let total_warnings = issues
        .iter()
        .filter(|i| i.report_severity() == Severity::Warning)
        .count();
    let total_problems = total_errors + total_warnings;

    if total_problems > 0 {
        let _ = writeln!(
            writer,
            "{} {} problems ({} {}, {} {})",
            FAILURE_MARK.red(),
            total_problems,
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
}

fn calculate_max_line_width(issues: &[Issue]) -> usize {
    issues
        .iter()
        .filter_map(|i| match i.location() {
            ReportLocation::Message(ctx) => Some(ctx.line()),
            ReportLocation::File { .. } => None,
        })
        .max()
        .map(|n| n.to_string().len())
        .unwrap_or(1)
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("{} failed to serialize output: {}", "error:".bold().red(), e),
    }
}

#[derive(Serialize)]
struct LookupJson<'a> {
    context: &'a str,
    source: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    comment: Option<&'a str>,
    text: &'a str,
    status: LookupStatus,
}

fn print_lookup(summary: &LookupSummary) {
    let lookup = &summary.lookup;

    if summary.json {
        print_json(&LookupJson {
            context: &summary.context,
            source: &summary.source,
            comment: summary.comment.as_deref(),
            text: &lookup.text,
            status: lookup.status,
        });
        return;
    }

    println!("{}", lookup.text);
    if lookup.is_fallback() {
        eprintln!(
            "{} no finished translation in context {} ({}), using the source text",
            "note:".bold(),
            summary.context,
            lookup.status
        );
    }
}

fn print_stats(summary: &StatsSummary) {
    if summary.json {
        print_json(&summary.catalogs);
        return;
    }

    if summary.catalogs.is_empty() {
        println!("No catalog files found.");
        return;
    }

    print_stats_table_to(&summary.catalogs, &mut io::stdout().lock());
}

const STATS_HEADERS: [&str; 8] = [
    "File",
    "Language",
    "Contexts",
    "Messages",
    "Finished",
    "Unfinished",
    "Vanished",
    "Done",
];

/// Print catalog statistics as an aligned table.
pub fn print_stats_table_to<W: Write>(catalogs: &[CatalogStats], writer: &mut W) {
    let rows: Vec<[String; 8]> = catalogs
        .iter()
        .map(|stats| {
            [
                stats.file.clone(),
                stats.language.clone().unwrap_or_else(|| "-".to_string()),
                stats.counts.contexts.to_string(),
                stats.counts.messages.to_string(),
                stats.counts.finished.to_string(),
                stats.counts.unfinished.to_string(),
                stats.counts.vanished.to_string(),
                format!("{:.1}%", stats.completion),
            ]
        })
        .collect();

    let mut widths = STATS_HEADERS.map(|h| h.width());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(UnicodeWidthStr::width(cell.as_str()));
        }
    }

    let header: Vec<String> = STATS_HEADERS.iter().map(|h| h.to_string()).collect();
    let _ = writeln!(writer, "{}", format_row(&header, &widths).bold());
    for row in &rows {
        let _ = writeln!(writer, "{}", format_row(row, &widths));
    }
}

/// First two columns are left-aligned text; the rest are right-aligned numbers.
fn format_row(cells: &[String], widths: &[usize; 8]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .enumerate()
        .map(|(i, (cell, width))| {
            let padding = " ".repeat(width.saturating_sub(UnicodeWidthStr::width(cell.as_str())));
            if i < 2 {
                format!("{}{}", cell, padding)
            } else {
                format!("{}{}", padding, cell)
            }
        })
        .collect();
    padded.join("  ").trim_end().to_string()
}

fn print_normalize(summary: &NormalizeSummary) {
    if summary.changed_files.is_empty() {
        println!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!(
                "{} catalog file(s) already normalized",
                summary.file_count
            )
            .green()
        );
        return;
    }

    if summary.is_apply {
        for file in &summary.changed_files {
            println!("  rewrote {}", file);
        }
        println!(
            "{} {} of {} catalog file(s).",
            "Normalized".green().bold(),
            summary.changed_files.len(),
            summary.file_count
        );
    } else {
        for file in &summary.changed_files {
            println!("  would rewrite {}", file);
        }
        println!(
            "{} {} of {} catalog file(s).",
            "Would normalize".yellow().bold(),
            summary.changed_files.len(),
            summary.file_count
        );
        println!("Run with {} to rewrite these files.", "--apply".cyan());
    }
}

fn print_merge(summary: &MergeSummary) {
    for merged in &summary.files {
        let stats = &merged.stats;
        println!(
            "  {}: {} added, {} kept, {} revived, {} vanished, {} dropped",
            merged.file, stats.added, stats.kept, stats.revived, stats.vanished, stats.dropped
        );
    }

    let changed = summary.files.iter().filter(|f| f.changed).count();
    if changed == 0 {
        println!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!(
                "All catalog file(s) up to date with {}",
                summary.template.display()
            )
            .green()
        );
    } else if summary.is_apply {
        println!("{} {} catalog file(s).", "Updated".green().bold(), changed);
    } else {
        println!("{} {} catalog file(s).", "Would update".yellow().bold(), changed);
        println!("Run with {} to rewrite these files.", "--apply".cyan());
    }
}

fn print_export(summary: &ExportSummary) {
    match &summary.output {
        Some(output) => println!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Wrote {}", output.display()).green()
        ),
        None => {
            print!("{}", summary.content);
            if !summary.content.ends_with('\n') {
                println!();
            }
        }
    }
}

fn print_init(summary: &InitSummary) {
    if let Some(error) = &summary.error {
        eprintln!("Error: {}", error);
    } else if summary.created {
        println!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    }
}

// ============================================================
// Tests
// ============================================================
