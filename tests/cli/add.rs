use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::{CliTest, exit_code, stderr, stdout};

#[test]
fn test_add_to_source_only_project() -> Result<()> {
    let test = CliTest::with_languages(&[("en-us", "English")])?;

    let output = test.run(&["add", "button.save", "Save"])?;

    assert_eq!(exit_code(&output), 0, "stderr: {}", stderr(&output));
    assert_eq!(
        stdout(&output),
        "\u{2713} en-us  button.save added\n\u{2713} 1 value written, 0 skipped, 0 failed\n"
    );
    assert_eq!(
        test.read_file("locales/en-us.json")?,
        "{\n  \"button\": {\n    \"save\": \"Save\"\n  }\n}\n"
    );

    Ok(())
}

#[test]
fn test_add_without_api_key_reports_failed_languages() -> Result<()> {
    let test = CliTest::with_languages(&[("en-us", "English"), ("pt-pt", "Portuguese")])?;

    let output = test.run(&["add", "button.save", "Save"])?;

    assert_eq!(exit_code(&output), 1);
    let out = stdout(&output);
    assert!(out.contains("pt-pt  button.save translation failed"));
    assert!(out.contains("OPENAI_API_KEY"));

    // The source language is written regardless.
    assert_eq!(test.read_catalog("en-us")?, json!({"button": {"save": "Save"}}));
    assert!(!test.root().join("locales/pt-pt.json").exists());

    Ok(())
}

#[test]
fn test_add_existing_key_is_kept_without_force() -> Result<()> {
    let test = CliTest::with_languages(&[("en-us", "English")])?;
    test.write_catalog("en-us", &json!({"button": {"save": "Save"}}))?;

    let output = test.run(&["add", "button.save", "Store", "--no-interactive", "-v"])?;

    assert_eq!(exit_code(&output), 0);
    assert!(stdout(&output).contains("kept existing value"));
    assert_eq!(test.read_catalog("en-us")?, json!({"button": {"save": "Save"}}));

    Ok(())
}

#[test]
fn test_add_existing_key_with_force() -> Result<()> {
    let test = CliTest::with_languages(&[("en-us", "English")])?;
    test.write_catalog("en-us", &json!({"button": {"save": "Save"}}))?;

    let output = test.run(&["add", "button.save", "Store", "--force"])?;

    assert_eq!(exit_code(&output), 0);
    assert!(stdout(&output).contains("button.save updated"));
    assert_eq!(test.read_catalog("en-us")?, json!({"button": {"save": "Store"}}));

    Ok(())
}

#[test]
fn test_add_from_file() -> Result<()> {
    let test = CliTest::with_languages(&[("en-us", "English")])?;
    test.write_catalog("en-us", &json!({"title": "Home"}))?;
    test.write_file(
        "new-keys.json",
        r#"{ "button": { "save": "Save", "cancel": "Cancel" }, "nav.back": "Back" }"#,
    )?;

    let output = test.run(&["add", "--from-file", "new-keys.json"])?;

    assert_eq!(exit_code(&output), 0, "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("3 values written"));
    assert_eq!(
        test.read_catalog("en-us")?,
        json!({
            "button": {"cancel": "Cancel", "save": "Save"},
            "nav": {"back": "Back"},
            "title": "Home"
        })
    );

    Ok(())
}

#[test]
fn test_add_invalid_key_path() -> Result<()> {
    let test = CliTest::with_languages(&[("en-us", "English")])?;

    let output = test.run(&["add", "button save", "Save"])?;

    assert_eq!(exit_code(&output), 2);
    assert!(stderr(&output).contains("invalid key path \"button save\""));
    assert!(!test.root().join("locales/en-us.json").exists());

    Ok(())
}

#[test]
fn test_add_with_locales_dir_override() -> Result<()> {
    let test = CliTest::with_languages(&[("en-us", "English")])?;

    let output = test.run(&["add", "title", "Home", "--locales-dir", "i18n"])?;

    assert_eq!(exit_code(&output), 0);
    assert_eq!(test.read_file("i18n/en-us.json")?, "{\n  \"title\": \"Home\"\n}\n");

    Ok(())
}
