use std::path::PathBuf;

use serde::Serialize;

use crate::{
    core::{CatalogCounts, merge::MergeStats, translator::Lookup},
    issues::Issue,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Check,
    Lookup,
    Stats,
    Normalize,
    Merge,
    Export,
    Init,
}

#[derive(Debug)]
pub enum CommandSummary {
    Check,
    Lookup(LookupSummary),
    Stats(StatsSummary),
    Normalize(NormalizeSummary),
    Merge(MergeSummary),
    Export(ExportSummary),
    Init(InitSummary),
}

impl CommandSummary {
    pub fn kind(&self) -> CommandKind {
        match self {
            CommandSummary::Check => CommandKind::Check,
            CommandSummary::Lookup(_) => CommandKind::Lookup,
            CommandSummary::Stats(_) => CommandKind::Stats,
            CommandSummary::Normalize(_) => CommandKind::Normalize,
            CommandSummary::Merge(_) => CommandKind::Merge,
            CommandSummary::Export(_) => CommandKind::Export,
            CommandSummary::Init(_) => CommandKind::Init,
        }
    }
}

#[derive(Debug)]
pub struct LookupSummary {
    pub context: String,
    pub source: String,
    pub comment: Option<String>,
    pub lookup: Lookup,
    pub json: bool,
}

/// Progress figures of one catalog, as shown by `stats`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogStats {
    pub file: String,
    pub language: Option<String>,
    #[serde(flatten)]
    pub counts: CatalogCounts,
    /// Finished share of active messages, in percent.
    pub completion: f64,
}

#[derive(Debug)]
pub struct StatsSummary {
    pub catalogs: Vec<CatalogStats>,
    pub json: bool,
}

#[derive(Debug)]
pub struct NormalizeSummary {
    /// Files whose normalized form differs from their content.
    pub changed_files: Vec<String>,
    pub file_count: usize,
    pub is_apply: bool,
}

#[derive(Debug)]
pub struct MergedFile {
    pub file: String,
    pub stats: MergeStats,
    /// True if the merged output differs from the file content.
    pub changed: bool,
}

#[derive(Debug)]
pub struct MergeSummary {
    pub template: PathBuf,
    pub files: Vec<MergedFile>,
    pub is_apply: bool,
}

#[derive(Debug)]
pub struct ExportSummary {
    /// Serialized catalog; printed when there is no output path.
    pub content: String,
    pub output: Option<PathBuf>,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
    pub error: Option<String>,
}

/// Result of running tsling commands
pub struct CommandResult {
    pub kind: CommandKind,
    pub summary: CommandSummary,
    pub error_count: usize,
    pub warning_count: usize,
    /// If true, exit code 1 should be returned when error_count > 0.
    /// If false, always exit 0 (used for dry-run commands that report work to do).
    pub exit_on_errors: bool,
    /// All issues found during the check.
    /// Empty for non-check commands.
    pub issues: Vec<Issue>,
    /// Number of files that failed to parse.
    pub parse_error_count: usize,
    /// Number of catalog files that were processed.
    pub files_checked: usize,
}
