use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::{CliTest, exit_code, stderr, stdout};

fn project() -> Result<CliTest> {
    let test = CliTest::with_languages(&[("en-us", "English"), ("pt-pt", "Portuguese")])?;
    test.write_catalog(
        "en-us",
        &json!({"button": {"save": "Save", "cancel": "Cancel"}, "errors": {"timeout": "Timeout"}}),
    )?;
    test.write_catalog(
        "pt-pt",
        &json!({"button": {"save": "Guardar", "cancel": "Cancelar"}}),
    )?;
    test.write_file(
        "src/Form.tsx",
        r#"
export function Form({ code }) {
  return (
    <form>
      <button>{t('button.save')}</button>
      <span>{t(`errors.${code}`)}</span>
    </form>
  );
}
"#,
    )?;
    test.write_file(
        "node_modules/lib/index.js",
        "t('button.cancel')",
    )?;
    Ok(test)
}

#[test]
fn test_unused_dry_run() -> Result<()> {
    let test = project()?;

    let output = test.run(&["unused"])?;

    assert_eq!(exit_code(&output), 1, "stderr: {}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("warning: unused key \"button.cancel\""));
    assert!(out.contains("warning: unused key \"errors.timeout\""));
    assert!(!out.contains("\"button.save\""));
    assert!(out.contains("Scanned 1 file; 33.3% of keys are used"));
    assert!(out.contains("2 unused keys (run with --apply to delete)"));

    // Dry run leaves catalogs alone.
    assert_eq!(test.read_catalog("pt-pt")?["button"]["cancel"], "Cancelar");

    Ok(())
}

#[test]
fn test_unused_apply_removes_keys_everywhere() -> Result<()> {
    let test = project()?;

    let output = test.run(&["unused", "--apply"])?;

    assert_eq!(exit_code(&output), 0, "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Removed 2 unused keys"));
    assert_eq!(test.read_catalog("en-us")?, json!({"button": {"save": "Save"}}));
    assert_eq!(test.read_catalog("pt-pt")?, json!({"button": {"save": "Guardar"}}));

    Ok(())
}

#[test]
fn test_unused_verbose_shows_locations() -> Result<()> {
    let test = project()?;

    let output = test.run(&["unused", "-v"])?;

    assert!(stdout(&output).contains("used button.save  src/Form.tsx:5"));

    Ok(())
}

#[test]
fn test_unused_all_used() -> Result<()> {
    let test = CliTest::with_languages(&[("en-us", "English")])?;
    test.write_catalog("en-us", &json!({"title": "Home"}))?;
    test.write_file("app.vue", "<h1>{{ $t('title') }}</h1>")?;

    let output = test.run(&["unused"])?;

    assert_eq!(exit_code(&output), 0);
    assert!(stdout(&output).contains("No unused keys"));

    Ok(())
}

#[test]
fn test_unused_apply_refuses_without_sources() -> Result<()> {
    let test = CliTest::with_languages(&[("en-us", "English")])?;
    test.write_catalog("en-us", &json!({"title": "Home"}))?;

    let output = test.run(&["unused", "--apply"])?;

    assert_eq!(exit_code(&output), 2);
    assert!(stderr(&output).contains("refusing to delete keys"));
    assert_eq!(test.read_catalog("en-us")?, json!({"title": "Home"}));

    Ok(())
}

#[test]
fn test_unused_apply_keeps_used_keys_under_a_shared_prefix() -> Result<()> {
    let test = CliTest::with_languages(&[("en-us", "English"), ("pt-pt", "Portuguese")])?;
    test.write_catalog("en-us", &json!({"a": "x"}))?;
    test.write_catalog("pt-pt", &json!({"a": {"b": "used"}}))?;
    test.write_file("src/app.ts", "t('a.b');\n")?;

    let output = test.run(&["unused", "--apply"])?;

    assert_eq!(exit_code(&output), 0, "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("removed: unused key \"a\""));
    assert_eq!(test.read_catalog("en-us")?, json!({}));
    assert_eq!(test.read_catalog("pt-pt")?, json!({"a": {"b": "used"}}));

    Ok(())
}

#[test]
fn test_unused_keeps_keys_used_through_i18n_instances() -> Result<()> {
    let test = CliTest::with_languages(&[("en-us", "English")])?;
    test.write_catalog("en-us", &json!({"page": {"title": "Title", "intro": "Intro"}}))?;
    test.write_file(
        "src/Page.vue",
        "export default {\n  computed: {\n    title() { return this.$i18n.t('page.title'); },\n  },\n};\n",
    )?;
    test.write_file("src/main.ts", "app.i18n.t(\"page.intro\");\n")?;

    let output = test.run(&["unused", "--apply"])?;

    assert_eq!(exit_code(&output), 0, "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("No unused keys"));
    assert_eq!(
        test.read_catalog("en-us")?,
        json!({"page": {"title": "Title", "intro": "Intro"}})
    );

    Ok(())
}
