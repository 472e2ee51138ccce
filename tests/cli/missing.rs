use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::{CliTest, exit_code, stderr, stdout};

fn project() -> Result<CliTest> {
    let test = CliTest::with_languages(&[("en-us", "English"), ("pt-pt", "Portuguese")])?;
    test.write_catalog(
        "en-us",
        &json!({"button": {"save": "Save", "cancel": "Cancel"}, "title": "Home"}),
    )?;
    test.write_catalog("pt-pt", &json!({"button": {"save": "Guardar"}}))?;
    Ok(test)
}

#[test]
fn test_missing_prints_template() -> Result<()> {
    let test = project()?;

    let output = test.run(&["missing", "pt-pt"])?;

    assert_eq!(exit_code(&output), 0, "stderr: {}", stderr(&output));
    insta::assert_snapshot!(stdout(&output), @r#"
    {
      "button": {
        "cancel": "Cancel"
      },
      "title": "Home"
    }
    "#);

    Ok(())
}

#[test]
fn test_missing_to_file_then_import() -> Result<()> {
    let test = project()?;

    let output = test.run(&["missing", "pt-pt", "--output", "todo.json"])?;
    assert_eq!(exit_code(&output), 0);
    assert!(stdout(&output).contains("Wrote 2 missing keys for pt-pt to todo.json"));

    test.write_file(
        "todo.json",
        r#"{ "button": { "cancel": "Cancelar" }, "title": "Início" }"#,
    )?;
    let output = test.run(&["import", "pt-pt", "todo.json"])?;

    assert_eq!(exit_code(&output), 0, "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Imported 2 keys into pt-pt"));
    assert_eq!(
        test.read_catalog("pt-pt")?,
        json!({"button": {"cancel": "Cancelar", "save": "Guardar"}, "title": "Início"})
    );

    let output = test.run(&["check"])?;
    assert_eq!(exit_code(&output), 0);

    Ok(())
}

#[test]
fn test_import_keeps_existing_values_unless_overwrite() -> Result<()> {
    let test = project()?;
    test.write_file("fix.json", r#"{ "button": { "save": "Gravar" } }"#)?;

    let output = test.run(&["import", "pt-pt", "fix.json"])?;
    assert_eq!(exit_code(&output), 0);
    assert!(stdout(&output).contains("Imported 0 keys into pt-pt"));
    assert_eq!(test.read_catalog("pt-pt")?["button"]["save"], "Guardar");

    let output = test.run(&["import", "pt-pt", "fix.json", "--overwrite"])?;
    assert_eq!(exit_code(&output), 0);
    assert_eq!(test.read_catalog("pt-pt")?["button"]["save"], "Gravar");

    Ok(())
}

#[test]
fn test_missing_unknown_language() -> Result<()> {
    let test = project()?;

    let output = test.run(&["missing", "de-de"])?;

    assert_eq!(exit_code(&output), 2);
    assert!(stderr(&output).contains("language \"de-de\" is not configured"));

    Ok(())
}

#[test]
fn test_sort_rewrites_catalogs() -> Result<()> {
    let test = CliTest::with_languages(&[("en-us", "English"), ("pt-pt", "Portuguese")])?;
    test.write_file("locales/en-us.json", r#"{"b": "B", "a": {"z": "Z", "y": "Y"}}"#)?;

    let output = test.run(&["sort"])?;

    assert_eq!(exit_code(&output), 0);
    assert_eq!(stdout(&output), "\u{2713} Sorted 1 catalog\n");
    assert_eq!(
        test.read_file("locales/en-us.json")?,
        "{\n  \"a\": {\n    \"y\": \"Y\",\n    \"z\": \"Z\"\n  },\n  \"b\": \"B\"\n}\n"
    );
    assert!(!test.root().join("locales/pt-pt.json").exists());

    Ok(())
}
