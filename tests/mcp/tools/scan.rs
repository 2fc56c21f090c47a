use neonkey::mcp::{NeonkeyMcpServer, types::ScanReferencesParams};
use rmcp::handler::server::wrapper::Parameters;

use crate::{extract_tool_result_json, fixture_admin};

fn params(root: String) -> ScanReferencesParams {
    ScanReferencesParams {
        project_root_path: root,
        template_path: None,
        undefined_only: None,
        limit: None,
        offset: None,
    }
}

// ============================================================================
// scan_references tests
// ============================================================================

#[tokio::test]
async fn test_scan_references_statuses() {
    let fixture = fixture_admin().unwrap();
    let server = NeonkeyMcpServer::new();

    let result = server
        .scan_references(Parameters(params(fixture.root())))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["templateCount"], 1);
    assert_eq!(json_result["totalCount"], 4);
    assert_eq!(json_result["undefinedCount"], 2);

    let items = json_result["items"].as_array().unwrap();
    let keys: Vec<&str> = items.iter().map(|i| i["fullKey"].as_str().unwrap()).collect();
    assert_eq!(
        keys,
        vec![
            "admin.dashboard.title",
            "admin.dashboard.subtitle",
            "admin.dashboard.heading",
            "front.home",
        ]
    );

    assert_eq!(items[0]["status"], "defined");
    assert_eq!(items[0]["rawKey"], "title");
    assert_eq!(items[0]["line"], 2);
    assert_eq!(items[0]["column"], 5);
    assert_eq!(items[0]["definition"]["filePath"], "app/lang/admin.cs.neon");
    assert_eq!(items[0]["definition"]["line"], 2);

    assert_eq!(items[2]["status"], "undefined");
    assert_eq!(items[2]["modifiers"][0], "upper");
    assert!(items[2]["definition"].is_null());

    assert_eq!(items[3]["status"], "no_candidate_files");
    assert_eq!(items[3]["filePath"], "app/templates/Dashboard/default.latte");
}

#[tokio::test]
async fn test_scan_references_undefined_only() {
    let fixture = fixture_admin().unwrap();
    let server = NeonkeyMcpServer::new();

    let mut p = params(fixture.root());
    p.undefined_only = Some(true);

    let result = server.scan_references(Parameters(p)).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["totalCount"], 2);
    let items = json_result["items"].as_array().unwrap();
    assert!(items.iter().all(|i| i["status"] != "defined"));
}

#[tokio::test]
async fn test_scan_references_pagination() {
    let fixture = fixture_admin().unwrap();
    let server = NeonkeyMcpServer::new();

    let mut p = params(fixture.root());
    p.limit = Some(3);
    p.offset = Some(1);

    let result = server.scan_references(Parameters(p)).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["items"].as_array().unwrap().len(), 3);
    assert_eq!(json_result["items"][0]["fullKey"], "admin.dashboard.subtitle");
    assert_eq!(json_result["pagination"]["offset"], 1);
    assert_eq!(json_result["pagination"]["limit"], 3);
    assert_eq!(json_result["pagination"]["hasMore"], false);

    let mut p = params(fixture.root());
    p.limit = Some(2);
    let result = server.scan_references(Parameters(p)).await.unwrap();
    let json_result = extract_tool_result_json(&result);
    assert_eq!(json_result["pagination"]["hasMore"], true);
}

#[tokio::test]
async fn test_scan_references_single_template() {
    let fixture = fixture_admin().unwrap();
    fixture
        .write_file("app/templates/Home/default.latte", "{_admin.dashboard.title}\n")
        .unwrap();
    let server = NeonkeyMcpServer::new();

    let mut p = params(fixture.root());
    p.template_path = Some("app/templates/Home/default.latte".to_string());

    let result = server.scan_references(Parameters(p)).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["templateCount"], 1);
    assert_eq!(json_result["totalCount"], 1);
    assert_eq!(json_result["items"][0]["status"], "defined");
}

#[tokio::test]
async fn test_scan_references_missing_template() {
    let fixture = fixture_admin().unwrap();
    let server = NeonkeyMcpServer::new();

    let mut p = params(fixture.root());
    p.template_path = Some("app/templates/missing.latte".to_string());

    assert!(server.scan_references(Parameters(p)).await.is_err());
}
