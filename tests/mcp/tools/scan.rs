use rmcp::handler::server::wrapper::Parameters;
use serde_json::json;
use tsling::mcp::{TslingMcpServer, types::ScanIssuesParams};

use crate::{McpTestFixture, SKETCHER_DE, extract_tool_result_json, fixture_sketcher};

fn params(
    root: String,
    rule: Option<&str>,
    limit: Option<u32>,
    offset: Option<u32>,
) -> Parameters<ScanIssuesParams> {
    Parameters(ScanIssuesParams {
        project_root_path: root,
        rule: rule.map(str::to_string),
        limit,
        offset,
    })
}

#[tokio::test]
async fn test_scan_issues_all_rules() {
    let fixture = fixture_sketcher().unwrap();
    let server = TslingMcpServer::new();

    let result = server
        .scan_issues(params(fixture.root(), None, None, None))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["totalCount"], 3);
    assert_eq!(json_result["stats"]["errorCount"], 2);
    assert_eq!(json_result["stats"]["warningCount"], 1);
    assert_eq!(json_result["stats"]["fileCount"], 1);

    let rules: Vec<&str> = json_result["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["rule"].as_str().unwrap())
        .collect();
    // Sorted by position in the file
    assert_eq!(
        rules,
        vec!["untranslated", "placeholder-mismatch", "incomplete-location"]
    );

    let lock = &json_result["items"][0];
    assert_eq!(lock["severity"], "warning");
    assert_eq!(lock["context"], "Sketcher_ConstrainLock");
    assert_eq!(lock["message"], "Lock");
    assert!(lock["filePath"].as_str().unwrap().ends_with("Sketcher_id.ts"));
    assert!(lock["line"].as_u64().unwrap() > 0);
}

#[tokio::test]
async fn test_scan_issues_rule_filter() {
    let fixture = fixture_sketcher().unwrap();
    let server = TslingMcpServer::new();

    let result = server
        .scan_issues(params(fixture.root(), Some("placeholder-mismatch"), None, None))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["totalCount"], 1);
    assert_eq!(json_result["items"][0]["message"], "%1 constraints linking to %2");
    assert!(
        json_result["items"][0]["details"]
            .as_str()
            .unwrap()
            .contains("expected placeholders %1, %2")
    );
}

#[tokio::test]
async fn test_scan_issues_unknown_rule() {
    let fixture = fixture_sketcher().unwrap();
    let server = TslingMcpServer::new();

    let result = server
        .scan_issues(params(fixture.root(), Some("hardcoded"), None, None))
        .await;

    assert!(result.is_err());
}

#[tokio::test]
async fn test_scan_issues_pagination() {
    let fixture = fixture_sketcher().unwrap();
    let server = TslingMcpServer::new();

    let result = server
        .scan_issues(params(fixture.root(), None, Some(2), None))
        .await
        .unwrap();
    let first_page = extract_tool_result_json(&result);

    assert_eq!(first_page["items"].as_array().unwrap().len(), 2);
    assert_eq!(
        first_page["pagination"],
        json!({ "offset": 0, "limit": 2, "hasMore": true })
    );

    let result = server
        .scan_issues(params(fixture.root(), None, Some(2), Some(2)))
        .await
        .unwrap();
    let second_page = extract_tool_result_json(&result);

    assert_eq!(second_page["items"].as_array().unwrap().len(), 1);
    assert_eq!(second_page["pagination"]["hasMore"], false);
    assert_eq!(second_page["items"][0]["rule"], "incomplete-location");
}

#[tokio::test]
async fn test_scan_issues_clean_project() {
    let fixture =
        McpTestFixture::with_catalogs(vec![("translations/Sketcher_de.ts", SKETCHER_DE)]).unwrap();
    let server = TslingMcpServer::new();

    let result = server
        .scan_issues(params(fixture.root(), None, None, None))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["totalCount"], 0);
    assert_eq!(json_result["items"], json!([]));
    assert_eq!(json_result["pagination"]["hasMore"], false);
}
