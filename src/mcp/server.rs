use std::collections::HashSet;
use std::path::Path;

use anyhow::Result;
use rmcp::{
    ErrorData as McpError, ServerHandler, ServiceExt,
    handler::server::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};

use crate::{
    config::load_config,
    core::{parsers::ts::parse_ts_file, translator::Translator},
    issues::{Issue, Report, Rule, Severity},
    rules::check_catalog,
};

use super::helpers::{check_context, json_result, page_bounds};
use super::types::{
    CatalogInfo, CatalogsResult, ConfigDto, ConfigValues, GetConfigParams, IssueItem, IssueStats,
    IssuesScanResult, ListCatalogsParams, LookupResult, LookupTranslationParams, Pagination,
    ParseErrorItem, ScanIssuesParams,
};

#[derive(Clone)]
pub struct TslingMcpServer {
    tool_router: ToolRouter<Self>,
}

impl Default for TslingMcpServer {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_router]
impl TslingMcpServer {
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
        }
    }

    /// Get the current tsling configuration
    #[tool(description = "Get the current tsling configuration.")]
    pub async fn get_config(
        &self,
        params: Parameters<GetConfigParams>,
    ) -> Result<CallToolResult, McpError> {
        let path = Path::new(&params.0.project_root_path);

        let result = load_config(path)
            .map_err(|e| McpError::internal_error(format!("Failed to load config: {}", e), None))?;

        json_result(&ConfigDto {
            from_file: result.from_file,
            config: ConfigValues::from(result.config),
        })
    }

    /// List catalog files with their languages and progress counts
    #[tool(
        description = "List Qt Linguist catalog (.ts) files in the project with language, message counts and completion percentage."
    )]
    pub async fn list_catalogs(
        &self,
        params: Parameters<ListCatalogsParams>,
    ) -> Result<CallToolResult, McpError> {
        let ctx = check_context(&params.0.project_root_path)?;

        let catalogs = ctx
            .sorted_catalogs()
            .into_iter()
            .map(|(file_path, catalog)| {
                let counts = catalog.counts();
                CatalogInfo {
                    file_path: file_path.clone(),
                    language: catalog.language.clone(),
                    source_language: catalog.source_language.clone(),
                    counts,
                    completion: (counts.completion() * 10.0).round() / 10.0,
                }
            })
            .collect();

        let mut parse_errors: Vec<ParseErrorItem> = ctx
            .parse_errors()
            .iter()
            .map(|e| ParseErrorItem {
                file_path: e.file_path.clone(),
                error: e.error.clone(),
            })
            .collect();
        parse_errors.sort_by(|a, b| a.file_path.cmp(&b.file_path));

        json_result(&CatalogsResult {
            catalogs,
            parse_errors,
        })
    }

    /// Validate catalogs and return issues
    #[tool(
        description = "Validate catalogs (empty sources, incomplete locations, unfinished mismatches, duplicates, placeholder mismatches, untranslated and empty translations). Optionally filter by rule name. Returns paginated list of issues."
    )]
    pub async fn scan_issues(
        &self,
        params: Parameters<ScanIssuesParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let (offset, limit) = page_bounds(params.offset, params.limit);

        let rules: Vec<Rule> = match params.rule.as_deref() {
            Some(name) => {
                let rule = Rule::from_name(name).ok_or_else(|| {
                    McpError::invalid_params(format!("Unknown rule: {}", name), None)
                })?;
                vec![rule]
            }
            None => Rule::CHECKS.into_iter().chain([Rule::ParseError]).collect(),
        };

        let ctx = check_context(&params.project_root_path)?;

        let mut issues: Vec<Issue> = Vec::new();
        for (file_path, catalog) in ctx.sorted_catalogs() {
            issues.extend(check_catalog(file_path, catalog, &ctx.config, &rules));
        }
        if rules.contains(&Rule::ParseError) {
            issues.extend(ctx.parse_errors().iter().cloned().map(Issue::ParseError));
        }
        issues.sort();

        let total_count = issues.len();
        let files: HashSet<String> = issues
            .iter()
            .map(|i| i.location().file_path().to_string())
            .collect();
        let stats = IssueStats {
            error_count: issues
                .iter()
                .filter(|i| i.severity() == Severity::Error)
                .count(),
            warning_count: issues
                .iter()
                .filter(|i| i.severity() == Severity::Warning)
                .count(),
            file_count: files.len(),
        };

        let items: Vec<IssueItem> = issues
            .iter()
            .skip(offset)
            .take(limit)
            .map(IssueItem::from)
            .collect();
        let has_more = offset + items.len() < total_count;

        json_result(&IssuesScanResult {
            total_count,
            stats,
            items,
            pagination: Pagination {
                offset,
                limit,
                has_more,
            },
        })
    }

    /// Look up one translation with source fallback
    #[tool(
        description = "Look up the translation of a message by context, source text and optional comment. Falls back to the source text when the translation is missing or unfinished. Pass n for plural forms."
    )]
    pub async fn lookup_translation(
        &self,
        params: Parameters<LookupTranslationParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        let catalog = parse_ts_file(Path::new(&params.file)).map_err(|e| {
            McpError::invalid_params(format!("Failed to load catalog: {:#}", e), None)
        })?;
        let translator = Translator::from_catalog(&catalog);

        let comment = params.comment.as_deref();
        let lookup = match params.n {
            Some(n) => translator.translate_n(&params.context, &params.source, comment, n),
            None => translator.translate(&params.context, &params.source, comment),
        };

        json_result(&LookupResult {
            fallback: lookup.is_fallback(),
            text: lookup.text,
            status: lookup.status,
        })
    }
}

#[tool_handler]
impl ServerHandler for TslingMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "tsling MCP helps AI agents review and use Qt Linguist (.ts) translation catalogs.\n\n\
                 Available tools:\n\
                 1. get_config - Get project configuration\n\
                 2. list_catalogs - List catalogs with language and translation progress\n\
                 3. scan_issues - Validate catalogs (paginated, optional rule filter)\n\
                 4. lookup_translation - Look up a translation with source fallback\n\n\
                 Recommended Workflow:\n\
                 1. Use list_catalogs to see which catalogs exist and how complete they are\n\
                 2. Use scan_issues to find errors first (placeholder-mismatch, duplicate-message, ...)\n\
                 3. Then review warnings (untranslated, empty-translation)"
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

/// Entry point for MCP server
pub fn run_server() -> Result<()> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let service = TslingMcpServer::new();
            let server = service.serve(rmcp::transport::stdio()).await?;
            server.waiting().await?;
            Ok(())
        })
}
