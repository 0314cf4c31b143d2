use anyhow::{Ok, Result};
use clap::ValueEnum;
use rayon::prelude::*;

use super::super::args::CheckCommand;
use super::{
    helper::{finish, parse_error_issues},
    {CommandResult, CommandSummary},
};

use crate::{
    core::CheckContext,
    issues::{Issue, Rule},
    rules::check_catalog,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum CheckRule {
    EmptySource,
    IncompleteLocation,
    UnfinishedMismatch,
    DuplicateMessage,
    PlaceholderMismatch,
    Untranslated,
    EmptyTranslation,
}

impl CheckRule {
    pub fn all() -> Vec<CheckRule> {
        vec![
            CheckRule::EmptySource,
            CheckRule::IncompleteLocation,
            CheckRule::UnfinishedMismatch,
            CheckRule::DuplicateMessage,
            CheckRule::PlaceholderMismatch,
            CheckRule::Untranslated,
            CheckRule::EmptyTranslation,
        ]
    }
}

impl From<CheckRule> for Rule {
    fn from(rule: CheckRule) -> Self {
        match rule {
            CheckRule::EmptySource => Rule::EmptySource,
            CheckRule::IncompleteLocation => Rule::IncompleteLocation,
            CheckRule::UnfinishedMismatch => Rule::UnfinishedMismatch,
            CheckRule::DuplicateMessage => Rule::DuplicateMessage,
            CheckRule::PlaceholderMismatch => Rule::PlaceholderMismatch,
            CheckRule::Untranslated => Rule::Untranslated,
            CheckRule::EmptyTranslation => Rule::EmptyTranslation,
        }
    }
}

pub fn check(cmd: CheckCommand) -> Result<CommandResult> {
    let ctx = CheckContext::new(&cmd.args.common)?;

    let checks = if cmd.checks.is_empty() {
        CheckRule::all()
    } else {
        cmd.checks.clone()
    };
    let rules: Vec<Rule> = checks.into_iter().map(Rule::from).collect();

    let mut all_issues: Vec<Issue> = ctx
        .sorted_catalogs()
        .par_iter()
        .flat_map_iter(|(file_path, catalog)| {
            check_catalog(file_path, catalog, &ctx.config, &rules)
        })
        .collect();

    all_issues.extend(parse_error_issues(ctx.parse_errors()));

    Ok(finish(
        CommandSummary::Check,
        all_issues,
        ctx.files.len(),
        true,
    ))
}
