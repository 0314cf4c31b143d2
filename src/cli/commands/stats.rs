use anyhow::Result;

use super::super::args::StatsCommand;
use super::{
    CatalogStats, CommandResult, CommandSummary, StatsSummary,
    helper::{finish, parse_error_issues},
};
use crate::core::{Catalog, CheckContext};

pub fn stats(cmd: StatsCommand) -> Result<CommandResult> {
    let ctx = CheckContext::new(&cmd.common)?;

    let catalogs = ctx
        .sorted_catalogs()
        .into_iter()
        .map(|(file, catalog)| catalog_stats(file, catalog))
        .collect();

    let summary = StatsSummary {
        catalogs,
        json: cmd.json,
    };

    Ok(finish(
        CommandSummary::Stats(summary),
        parse_error_issues(ctx.parse_errors()),
        ctx.files.len(),
        false,
    ))
}

pub fn catalog_stats(file: &str, catalog: &Catalog) -> CatalogStats {
    let counts = catalog.counts();
    CatalogStats {
        file: file.to_string(),
        language: catalog.language.clone(),
        counts,
        completion: (counts.completion() * 10.0).round() / 10.0,
    }
}
