use std::{fs, path::Path};

use anyhow::{Context as _, Result};

use super::super::args::NormalizeCommand;
use super::{
    CommandResult, CommandSummary, NormalizeSummary,
    helper::{finish, parse_error_issues},
};
use crate::core::{
    Catalog, CheckContext,
    writer::{to_ts_string, write_ts_file},
};

pub fn normalize(cmd: NormalizeCommand) -> Result<CommandResult> {
    let ctx = CheckContext::new(&cmd.common)?;

    let mut changed_files = Vec::new();
    for (file_path, catalog) in ctx.sorted_catalogs() {
        let normalized = normalized(catalog);
        let rendered = to_ts_string(&normalized);
        let current = fs::read_to_string(file_path)
            .with_context(|| format!("Failed to read catalog file: {}", file_path))?;

        if rendered == current {
            continue;
        }

        if cmd.apply {
            write_ts_file(Path::new(file_path), &normalized)?;
            if ctx.verbose {
                eprintln!("Note: Rewrote {}", file_path);
            }
        }
        changed_files.push(file_path.clone());
    }

    let summary = NormalizeSummary {
        changed_files,
        file_count: ctx.catalogs().len(),
        is_apply: cmd.apply,
    };

    Ok(finish(
        CommandSummary::Normalize(summary),
        parse_error_issues(ctx.parse_errors()),
        ctx.files.len(),
        cmd.apply,
    ))
}

fn normalized(catalog: &Catalog) -> Catalog {
    let mut normalized = catalog.clone();
    normalized.normalize();
    normalized
}
