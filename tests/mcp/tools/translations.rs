use std::collections::BTreeMap;

use neonkey::mcp::{
    NeonkeyMcpServer,
    types::{GetTranslationsParams, SetTranslationsParams},
};
use rmcp::handler::server::wrapper::Parameters;

use crate::{McpTestFixture, extract_tool_result_json, fixture_admin};

fn translations(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(l, v)| (l.to_string(), v.to_string()))
        .collect()
}

// ============================================================================
// get_translations tests
// ============================================================================

#[tokio::test]
async fn test_get_translations_all_locales() {
    let fixture = fixture_admin().unwrap();
    let server = NeonkeyMcpServer::new();

    let params = Parameters(GetTranslationsParams {
        project_root_path: fixture.root(),
        key: "admin.dashboard.subtitle".to_string(),
    });

    let result = server.get_translations(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    let entries = json_result["entries"].as_array().unwrap();
    assert_eq!(entries.len(), 2);

    assert_eq!(entries[0]["locale"], "cs");
    assert_eq!(entries[0]["value"], "Přehled");
    assert_eq!(entries[0]["defined"], true);
    assert_eq!(entries[0]["line"], 3);

    assert_eq!(entries[1]["locale"], "en");
    assert_eq!(entries[1]["value"], "");
    assert_eq!(entries[1]["defined"], false);
    assert!(entries[1]["line"].is_null());
    assert_eq!(entries[1]["filePath"], "app/lang/admin.en.neon");
}

#[tokio::test]
async fn test_get_translations_unquotes_values() {
    let fixture = fixture_admin().unwrap();
    let server = NeonkeyMcpServer::new();

    let params = Parameters(GetTranslationsParams {
        project_root_path: fixture.root(),
        key: "admin.dashboard.title".to_string(),
    });

    let result = server.get_translations(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["entries"][0]["value"], "Nástěnka");
    assert_eq!(json_result["entries"][1]["value"], "Dashboard");
}

// ============================================================================
// set_translations tests
// ============================================================================

#[tokio::test]
async fn test_set_translations_update_and_append() {
    let fixture = fixture_admin().unwrap();
    let server = NeonkeyMcpServer::new();

    let params = Parameters(SetTranslationsParams {
        project_root_path: fixture.root(),
        key: "admin.dashboard.subtitle".to_string(),
        translations: translations(&[("cs", "Souhrn"), ("en", "Overview")]),
    });

    let result = server.set_translations(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["success"], true);
    let results = json_result["results"].as_array().unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0]["locale"], "cs");
    assert_eq!(results[0]["action"], "updated");
    assert_eq!(results[0]["line"], 3);
    assert_eq!(results[1]["locale"], "en");
    assert_eq!(results[1]["action"], "appended");
    assert_eq!(results[1]["line"], 3);

    assert_eq!(
        fixture.read_file("app/lang/admin.cs.neon").unwrap(),
        "dashboard:\n    title: \"Nástěnka\"\n    subtitle: \"Souhrn\"\n"
    );
    assert_eq!(
        fixture.read_file("app/lang/admin.en.neon").unwrap(),
        "dashboard:\n    title: Dashboard\nadmin.dashboard.subtitle: \"Overview\"\n"
    );
}

#[tokio::test]
async fn test_set_translations_reports_failures() {
    let fixture = McpTestFixture::with_files(&[("app/front.cs.neon", "\"home\": Domů\n")]).unwrap();
    let server = NeonkeyMcpServer::new();

    let params = Parameters(SetTranslationsParams {
        project_root_path: fixture.root(),
        key: "front.home".to_string(),
        translations: translations(&[("cs", "Úvod"), ("de", "Start"), ("en", " ")]),
    });

    let result = server.set_translations(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["success"], false);
    let results = json_result["results"].as_array().unwrap();
    assert_eq!(results[0]["locale"], "cs");
    assert_eq!(results[0]["action"], "malformed");
    assert_eq!(results[0]["line"], 1);
    assert_eq!(results[1]["locale"], "de");
    assert_eq!(results[1]["action"], "unknown_locale");
    assert!(results[1]["filePath"].is_null());
    assert_eq!(json_result["skippedEmpty"][0], "en");

    // Malformed file is left untouched
    assert_eq!(
        fixture.read_file("app/front.cs.neon").unwrap(),
        "\"home\": Domů\n"
    );
    assert!(fixture.root_path().join("app/front.cs.neon").exists());
}
