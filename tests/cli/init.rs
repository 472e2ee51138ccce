use anyhow::{Context, Result};
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{CliTest, exit_code, stderr, stdout};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run(&["init"])?;

    assert_eq!(exit_code(&output), 0);
    assert_eq!(stdout(&output), "\u{2713} Created .i18nrc.json\n");

    let content = test.read_file(".i18nrc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert_eq!(parsed["sourceLanguage"], "en-us");
    assert_eq!(parsed["languages"]["en-us"], "English");
    assert_eq!(parsed["localesDir"], "./locales");
    assert_eq!(parsed["translator"]["apiKeyEnv"], "OPENAI_API_KEY");
    assert!(content.contains("\n  \"languages\""), "2-space indentation");

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".i18nrc.json", "{}")?;

    let output = test.run(&["init"])?;

    assert_eq!(exit_code(&output), 2);
    assert!(stderr(&output).contains(".i18nrc.json already exists"));
    assert_eq!(test.read_file(".i18nrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;
    test.run(&["init"])?;

    let output = test.run(&["add", "app.title", "My App"])?;

    assert_eq!(exit_code(&output), 0, "stderr: {}", stderr(&output));
    assert_eq!(
        test.read_catalog("en-us")?,
        serde_json::json!({"app": {"title": "My App"}})
    );

    Ok(())
}

#[test]
fn test_no_command_prints_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run(&[])?;

    assert_eq!(exit_code(&output), 0);
    assert!(stdout(&output).contains("Usage:"));

    Ok(())
}
