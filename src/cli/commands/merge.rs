use std::{fs, path::Path};

use anyhow::{Context as _, Result};

use super::super::args::MergeCommand;
use super::{
    CommandResult, CommandSummary, MergeSummary, MergedFile,
    helper::{finish, parse_error_issues},
};
use crate::{
    core::{
        Catalog, CheckContext,
        merge::{MergeOptions, merge},
        parsers::ts::parse_ts_file,
        writer::{to_ts_string, write_ts_file},
    },
    issues::Issue,
};

pub fn merge_command(cmd: MergeCommand) -> Result<CommandResult> {
    let template = parse_ts_file(&cmd.template)?;
    let options = MergeOptions {
        drop_obsolete: cmd.drop_obsolete,
    };

    // Explicit files must parse; scanned files that don't become issues.
    let mut issues: Vec<Issue> = Vec::new();
    let targets: Vec<(String, Catalog)> = if cmd.files.is_empty() {
        let ctx = CheckContext::new(&cmd.common)?;
        let template_path = fs::canonicalize(&cmd.template).ok();
        let targets = ctx
            .sorted_catalogs()
            .into_iter()
            .filter(|(file, _)| fs::canonicalize(file).ok() != template_path)
            .map(|(file, catalog)| (file.clone(), catalog.clone()))
            .collect();
        issues.extend(parse_error_issues(ctx.parse_errors()));
        targets
    } else {
        cmd.files
            .iter()
            .map(|file| Ok((file.to_string_lossy().to_string(), parse_ts_file(file)?)))
            .collect::<Result<_>>()?
    };

    let mut files = Vec::with_capacity(targets.len());
    for (file, existing) in targets {
        let outcome = merge(&existing, &template, options);
        let changed = differs_from_file(&file, &outcome.catalog)?;

        if cmd.apply && changed {
            write_ts_file(Path::new(&file), &outcome.catalog)?;
            if cmd.common.verbose {
                eprintln!("Note: Rewrote {}", file);
            }
        }

        files.push(MergedFile {
            file,
            stats: outcome.stats,
            changed,
        });
    }

    let files_checked = files.len();
    let summary = MergeSummary {
        template: cmd.template.clone(),
        files,
        is_apply: cmd.apply,
    };

    Ok(finish(
        CommandSummary::Merge(summary),
        issues,
        files_checked,
        cmd.apply,
    ))
}

fn differs_from_file(file: &str, catalog: &Catalog) -> Result<bool> {
    let current = fs::read_to_string(file)
        .with_context(|| format!("Failed to read catalog file: {}", file))?;
    Ok(to_ts_string(catalog) != current)
}
