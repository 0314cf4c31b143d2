use std::path::PathBuf;

use rmcp::{
    ErrorData as McpError,
    model::{CallToolResult, Content},
};
use serde::Serialize;

use crate::{cli::args::CommonArgs, core::CheckContext};

/// Build a scan context for a project root, as the CLI would without flags.
pub fn check_context(project_root_path: &str) -> Result<CheckContext, McpError> {
    let args = CommonArgs {
        source_root: Some(PathBuf::from(project_root_path)),
        source_language: None,
        verbose: false,
    };
    CheckContext::new(&args)
        .map_err(|e| McpError::internal_error(format!("Failed to initialize: {}", e), None))
}

/// Serialize a tool result as pretty JSON text content.
pub fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json_str = serde_json::to_string_pretty(value).map_err(|e| {
        McpError::internal_error(format!("JSON serialization failed: {}", e), None)
    })?;

    Ok(CallToolResult::success(vec![Content::text(json_str)]))
}

/// Apply offset/limit; limit defaults to 20 and is capped at 100.
pub fn page_bounds(offset: Option<u32>, limit: Option<u32>) -> (usize, usize) {
    let limit = limit.map(|v| v as usize).unwrap_or(20).min(100);
    let offset = offset.map(|v| v as usize).unwrap_or(0);
    (offset, limit)
}
