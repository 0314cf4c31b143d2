use rmcp::handler::server::wrapper::Parameters;
use serde_json::json;
use tsling::mcp::{
    TslingMcpServer,
    types::{GetConfigParams, ListCatalogsParams},
};

use crate::{McpTestFixture, extract_tool_result_json, fixture_sketcher};

// ============================================================================
// get_config tests
// ============================================================================

#[tokio::test]
async fn test_get_config_defaults() {
    let fixture = McpTestFixture::new().unwrap();
    let server = TslingMcpServer::new();

    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_config(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["config"]["sourceLanguage"], "en");
    assert!(json_result["config"]["includes"].is_array());
    assert!(json_result["config"]["ignoreTexts"].is_array());
    assert_eq!(json_result["fromFile"], false);
}

#[tokio::test]
async fn test_get_config_from_tslingrc() {
    let fixture = McpTestFixture::new().unwrap();
    fixture
        .write_config(&json!({
            "includes": ["src/Mod/Sketcher/Gui/Resources/translations"],
            "ignoreTexts": ["FreeCAD"],
            "sourceLanguage": "en_US"
        }))
        .unwrap();

    let server = TslingMcpServer::new();
    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_config(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["fromFile"], true);
    assert_eq!(json_result["config"]["sourceLanguage"], "en_US");
    assert_eq!(json_result["config"]["ignoreTexts"], json!(["FreeCAD"]));
}

#[tokio::test]
async fn test_get_config_invalid_file_is_error() {
    let fixture = McpTestFixture::new().unwrap();
    fixture.write_config(&json!({ "ignores": ["[invalid"] })).unwrap();

    let server = TslingMcpServer::new();
    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    assert!(server.get_config(params).await.is_err());
}

// ============================================================================
// list_catalogs tests
// ============================================================================

#[tokio::test]
async fn test_list_catalogs() {
    let fixture = fixture_sketcher().unwrap();
    let server = TslingMcpServer::new();

    let params = Parameters(ListCatalogsParams {
        project_root_path: fixture.root(),
    });

    let result = server.list_catalogs(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);
    let catalogs = json_result["catalogs"].as_array().unwrap();

    assert_eq!(catalogs.len(), 2);

    let de = &catalogs[0];
    assert!(de["filePath"].as_str().unwrap().ends_with("Sketcher_de.ts"));
    assert_eq!(de["language"], "de");
    assert_eq!(de["messages"], 1);
    assert_eq!(de["completion"], 100.0);

    let id = &catalogs[1];
    assert!(id["filePath"].as_str().unwrap().ends_with("Sketcher_id.ts"));
    assert_eq!(id["language"], "id");
    assert_eq!(id["sourceLanguage"], "en");
    assert_eq!(id["contexts"], 3);
    assert_eq!(id["messages"], 5);
    assert_eq!(id["finished"], 4);
    assert_eq!(id["unfinished"], 1);
    assert_eq!(id["completion"], 80.0);

    assert_eq!(json_result["parseErrors"], json!([]));
}

#[tokio::test]
async fn test_list_catalogs_reports_parse_errors() {
    let fixture = McpTestFixture::with_catalogs(vec![(
        "translations/Sketcher_fr.ts",
        "<?xml version=\"1.0\"?>\n<TS version=\"2.1\" language=\"fr\"><context><name>Ctx</name>",
    )])
    .unwrap();
    let server = TslingMcpServer::new();

    let params = Parameters(ListCatalogsParams {
        project_root_path: fixture.root(),
    });

    let result = server.list_catalogs(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["catalogs"], json!([]));
    let errors = json_result["parseErrors"].as_array().unwrap();
    assert_eq!(errors.len(), 1);
    assert!(
        errors[0]["filePath"]
            .as_str()
            .unwrap()
            .ends_with("Sketcher_fr.ts")
    );
}
