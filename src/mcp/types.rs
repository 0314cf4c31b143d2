use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    core::{CatalogCounts, translator::LookupStatus},
    issues::{Issue, Report, ReportLocation, Severity},
};

// ============================================================
// Parameters
// ============================================================

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetConfigParams {
    /// Absolute path of the project root
    pub project_root_path: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListCatalogsParams {
    /// Absolute path of the project root
    pub project_root_path: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScanIssuesParams {
    /// Absolute path of the project root
    pub project_root_path: String,
    /// Only report issues of this rule (e.g. "untranslated", "placeholder-mismatch")
    pub rule: Option<String>,
    /// Maximum number of items to return (default 20, max 100)
    pub limit: Option<u32>,
    /// Number of items to skip
    pub offset: Option<u32>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LookupTranslationParams {
    /// Path of the catalog file (absolute, or relative to the server's working directory)
    pub file: String,
    /// Context (class) name of the message
    pub context: String,
    /// Source text of the message
    pub source: String,
    /// Disambiguation comment of the message
    pub comment: Option<String>,
    /// Count for plural forms; replaces %n in the result
    pub n: Option<i64>,
}

// ============================================================
// Config Types (get_config)
// ============================================================

/// Configuration DTO for MCP
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigDto {
    /// True if config was loaded from a file, false if using defaults
    pub from_file: bool,
    pub config: ConfigValues,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigValues {
    pub ignores: Vec<String>,
    pub includes: Vec<String>,
    pub ignore_texts: Vec<String>,
    pub source_language: String,
}

impl From<crate::config::Config> for ConfigValues {
    fn from(c: crate::config::Config) -> Self {
        Self {
            ignores: c.ignores,
            includes: c.includes,
            ignore_texts: c.ignore_texts,
            source_language: c.source_language,
        }
    }
}

// ============================================================
// Catalog Types (list_catalogs)
// ============================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogsResult {
    pub catalogs: Vec<CatalogInfo>,
    /// Files that were found but could not be parsed
    pub parse_errors: Vec<ParseErrorItem>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogInfo {
    pub file_path: String,
    pub language: Option<String>,
    pub source_language: Option<String>,
    #[serde(flatten)]
    pub counts: CatalogCounts,
    pub completion: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseErrorItem {
    pub file_path: String,
    pub error: String,
}

// ============================================================
// Issue Types (scan_issues)
// ============================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueItem {
    pub rule: String,
    pub severity: String,
    pub file_path: String,
    /// 0 for file-level issues
    pub line: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl From<&Issue> for IssueItem {
    fn from(issue: &Issue) -> Self {
        let location = issue.location();
        let (context, comment) = match location {
            ReportLocation::Message(ctx) => (Some(ctx.context_name.clone()), ctx.comment.clone()),
            ReportLocation::File { .. } => (None, None),
        };
        Self {
            rule: issue.report_rule().to_string(),
            severity: match issue.report_severity() {
                Severity::Error => "error".to_string(),
                Severity::Warning => "warning".to_string(),
            },
            file_path: location.file_path().to_string(),
            line: location.line(),
            context,
            comment,
            message: issue.message(),
            details: issue.details(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueStats {
    pub error_count: usize,
    pub warning_count: usize,
    pub file_count: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IssuesScanResult {
    pub total_count: usize,
    pub stats: IssueStats,
    pub items: Vec<IssueItem>,
    pub pagination: Pagination,
}

/// Pagination information
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub offset: usize,
    pub limit: usize,
    pub has_more: bool,
}

// ============================================================
// Lookup Types (lookup_translation)
// ============================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupResult {
    pub text: String,
    pub status: LookupStatus,
    /// True if `text` is the source-language fallback
    pub fallback: bool,
}
