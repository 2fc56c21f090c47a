use neonkey::mcp::{NeonkeyMcpServer, types::GetConfigParams};
use rmcp::handler::server::wrapper::Parameters;
use serde_json::json;

use crate::{McpTestFixture, extract_tool_result_json};

// ============================================================================
// get_config tests
// ============================================================================

#[tokio::test]
async fn test_get_config_defaults() {
    let fixture = McpTestFixture::new().unwrap();
    let server = NeonkeyMcpServer::new();

    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_config(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["fromFile"], false);
    assert_eq!(json_result["config"]["rootPath"], "app");
    assert_eq!(json_result["config"]["neonExtension"], "neon");
    assert_eq!(json_result["config"]["templateExtension"], "latte");
    assert_eq!(json_result["config"]["hasTranslationApiKey"], false);
    assert!(json_result["config"]["ignores"].is_array());
}

#[tokio::test]
async fn test_get_config_from_file_hides_api_key() {
    let fixture = McpTestFixture::new().unwrap();
    fixture
        .write_config(&json!({
            "rootPath": "src",
            "defaultLocaleTag": "cs",
            "translationApiKey": "sk-secret"
        }))
        .unwrap();

    let server = NeonkeyMcpServer::new();
    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_config(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["fromFile"], true);
    assert_eq!(json_result["config"]["rootPath"], "src");
    assert_eq!(json_result["config"]["defaultLocaleTag"], "cs");
    assert_eq!(json_result["config"]["hasTranslationApiKey"], true);
    assert!(!json_result.to_string().contains("sk-secret"));
}

#[tokio::test]
async fn test_get_config_accepts_extension_setting_names() {
    let fixture = McpTestFixture::new().unwrap();
    fixture
        .write_config(&json!({
            "neonPath": "locale",
            "defaultLanguage": "en"
        }))
        .unwrap();

    let server = NeonkeyMcpServer::new();
    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_config(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["config"]["rootPath"], "locale");
    assert_eq!(json_result["config"]["defaultLocaleTag"], "en");
}

#[tokio::test]
async fn test_get_config_invalid_file() {
    let fixture = McpTestFixture::new().unwrap();
    fixture.write_file(".neonkeyrc.json", "{ not json").unwrap();

    let server = NeonkeyMcpServer::new();
    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    assert!(server.get_config(params).await.is_err());
}
