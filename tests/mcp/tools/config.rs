use i18nctl::mcp::{
    I18nMcpServer,
    types::{GetConfigParams, GetStatusParams},
};
use rmcp::handler::server::wrapper::Parameters;
use serde_json::json;

use crate::{McpTestFixture, extract_tool_result_json, fixture_in_sync, fixture_with_drift};

// ============================================================================
// get_config tests
// ============================================================================

#[tokio::test]
async fn test_get_config_defaults() {
    let fixture = McpTestFixture::new().unwrap();
    let server = I18nMcpServer::new();

    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_config(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["fromFile"], false);
    assert_eq!(json_result["config"]["sourceLanguage"], "en-us");
    assert_eq!(json_result["config"]["localesDir"], "./locales");
    assert_eq!(json_result["config"]["languages"], json!({"en-us": "English"}));
    assert!(json_result["config"]["extensions"].is_array());
    assert!(
        json_result["localesDir"]
            .as_str()
            .unwrap()
            .starts_with(&fixture.root())
    );
}

#[tokio::test]
async fn test_get_config_from_file() {
    let fixture = McpTestFixture::new().unwrap();
    fixture
        .write_config(&json!({
            "languages": {"pt-pt": "Portuguese", "en-us": "English"},
            "sourceLanguage": "pt-pt",
            "localesDir": "i18n"
        }))
        .unwrap();

    let server = I18nMcpServer::new();
    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_config(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["fromFile"], true);
    assert_eq!(json_result["config"]["sourceLanguage"], "pt-pt");
    assert_eq!(json_result["config"]["localesDir"], "i18n");
    assert_eq!(
        json_result["localesDir"],
        fixture.root_path().join("i18n").to_string_lossy().as_ref()
    );
}

// ============================================================================
// get_status tests
// ============================================================================

#[tokio::test]
async fn test_get_status_in_sync() {
    let fixture = fixture_in_sync().unwrap();
    let server = I18nMcpServer::new();

    let params = Parameters(GetStatusParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_status(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["sourceLanguage"], "en-us");
    assert_eq!(json_result["totalKeys"], 3);
    assert_eq!(json_result["inSync"], true);

    let languages = json_result["languages"].as_array().unwrap();
    let codes: Vec<&str> = languages
        .iter()
        .map(|l| l["code"].as_str().unwrap())
        .collect();
    assert_eq!(codes, vec!["en-us", "pt-pt", "de-de"]);
    // The source language has no completeness of its own
    assert!(languages[0]["completeness"].is_null());
    assert_eq!(languages[1]["completeness"], 100.0);
}

#[tokio::test]
async fn test_get_status_with_drift() {
    let fixture = fixture_with_drift().unwrap();
    let server = I18nMcpServer::new();

    let params = Parameters(GetStatusParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_status(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["inSync"], false);
    let portuguese = &json_result["languages"][1];
    assert_eq!(portuguese["code"], "pt-pt");
    assert_eq!(portuguese["displayName"], "Portuguese");
    assert_eq!(portuguese["keyCount"], 1);
    assert_eq!(
        portuguese["missingKeys"],
        json!(["common.cancel", "common.retry"])
    );
    assert_eq!(portuguese["completeness"], 33.3);
}

#[tokio::test]
async fn test_get_status_malformed_catalog() {
    let fixture = fixture_in_sync().unwrap();
    std::fs::write(fixture.root_path().join("locales/de-de.json"), "{ broken").unwrap();
    let server = I18nMcpServer::new();

    let params = Parameters(GetStatusParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_status(params).await;
    assert!(result.is_err());
}
