use neonkey::mcp::{NeonkeyMcpServer, types::LocateKeyParams};
use rmcp::handler::server::wrapper::Parameters;

use crate::{extract_tool_result_json, fixture_admin};

fn by_key(root: String, key: &str) -> Parameters<LocateKeyParams> {
    Parameters(LocateKeyParams {
        project_root_path: root,
        key: Some(key.to_string()),
        template_path: None,
        line: None,
        column: None,
    })
}

// ============================================================================
// locate_key tests
// ============================================================================

#[tokio::test]
async fn test_locate_key_found() {
    let fixture = fixture_admin().unwrap();
    let server = NeonkeyMcpServer::new();

    let result = server
        .locate_key(by_key(fixture.root(), "admin.dashboard.subtitle"))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["key"], "admin.dashboard.subtitle");
    assert_eq!(json_result["found"], true);
    assert_eq!(json_result["location"]["filePath"], "app/lang/admin.cs.neon");
    assert_eq!(json_result["location"]["line"], 3);
    assert_eq!(json_result["location"]["locale"], "cs");

    let candidates = json_result["candidates"].as_array().unwrap();
    assert_eq!(candidates.len(), 2);
    assert_eq!(candidates[1]["locale"], "en");
}

#[tokio::test]
async fn test_locate_key_not_found() {
    let fixture = fixture_admin().unwrap();
    let server = NeonkeyMcpServer::new();

    let result = server
        .locate_key(by_key(fixture.root(), "front.home"))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["found"], false);
    assert!(json_result["location"].is_null());
    assert!(json_result["candidates"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_locate_key_from_template_position() {
    let fixture = fixture_admin().unwrap();
    let server = NeonkeyMcpServer::new();

    let params = Parameters(LocateKeyParams {
        project_root_path: fixture.root(),
        key: None,
        template_path: Some("app/templates/Dashboard/default.latte".to_string()),
        line: Some(3),
        column: Some(16),
    });

    let result = server.locate_key(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["key"], "admin.dashboard.heading");
    assert_eq!(json_result["found"], false);
    assert_eq!(json_result["candidates"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_locate_key_requires_key_or_template() {
    let fixture = fixture_admin().unwrap();
    let server = NeonkeyMcpServer::new();

    let params = Parameters(LocateKeyParams {
        project_root_path: fixture.root(),
        key: None,
        template_path: None,
        line: None,
        column: None,
    });

    assert!(server.locate_key(params).await.is_err());
}

#[tokio::test]
async fn test_locate_key_invalid_key() {
    let fixture = fixture_admin().unwrap();
    let server = NeonkeyMcpServer::new();

    assert!(
        server
            .locate_key(by_key(fixture.root(), "admin..title"))
            .await
            .is_err()
    );
}
