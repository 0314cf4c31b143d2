use anyhow::Result;

use crate::{CliTest, SKETCHER_ID, SKETCHER_ID_WITH_ISSUES, stderr, stdout};

const TRANSLATIONS: &str = "Gui/Resources/translations/Sketcher_id.ts";

#[test]
fn test_clean_catalog() -> Result<()> {
    let test = CliTest::with_file(TRANSLATIONS, SKETCHER_ID)?;

    let output = test.check_command().output()?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout(&output),
        "\u{2713} Checked 1 catalog file - no issues found\n"
    );

    Ok(())
}

#[test]
fn test_issues_are_reported() -> Result<()> {
    let test = CliTest::with_file(TRANSLATIONS, SKETCHER_ID_WITH_ISSUES)?;

    let output = test.check_command().output()?;
    let out = stdout(&output);

    assert_eq!(output.status.code(), Some(1));
    assert!(out.contains("error: \"%1 constraints linking to %2\"  placeholder-mismatch"));
    assert!(out.contains("warning: \"Lock\"  untranslated"));
    assert!(out.contains("--> ./Gui/Resources/translations/Sketcher_id.ts:"));
    assert!(out.contains("note: in context Sketcher_ConstrainLock"));
    assert!(out.contains("2 problems (1 error, 1 warning)"));

    Ok(())
}

#[test]
fn test_warnings_only_exit_success() -> Result<()> {
    let test = CliTest::with_file(TRANSLATIONS, SKETCHER_ID_WITH_ISSUES)?;

    let output = test.check_command().arg("untranslated").output()?;
    let out = stdout(&output);

    assert_eq!(output.status.code(), Some(0));
    assert!(out.contains("untranslated"));
    assert!(!out.contains("placeholder-mismatch"));
    assert!(out.contains("1 problems (0 errors, 1 warning)"));

    Ok(())
}

#[test]
fn test_unknown_rule_is_usage_error() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.check_command().arg("hardcoded").output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("invalid value 'hardcoded'"));

    Ok(())
}

#[test]
fn test_config_ignore_texts() -> Result<()> {
    let test = CliTest::with_file(TRANSLATIONS, SKETCHER_ID_WITH_ISSUES)?;
    test.write_file(".tslingrc.json", r#"{ "ignoreTexts": ["Lock"] }"#)?;

    let output = test.check_command().arg("untranslated").output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("no issues found"));

    Ok(())
}

#[test]
fn test_config_ignores() -> Result<()> {
    let test = CliTest::with_file(TRANSLATIONS, SKETCHER_ID)?;
    test.write_file("build/Sketcher_id.ts", SKETCHER_ID_WITH_ISSUES)?;
    test.write_file(".tslingrc.json", r#"{ "ignores": ["build"] }"#)?;

    let output = test.check_command().output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("Checked 1 catalog file"));

    Ok(())
}

#[test]
fn test_same_language_skips_untranslated() -> Result<()> {
    let test = CliTest::with_file(TRANSLATIONS, SKETCHER_ID_WITH_ISSUES)?;

    // An explicit sourcelanguage attribute wins over the flag, so drop it.
    let content = SKETCHER_ID_WITH_ISSUES.replace(" sourcelanguage=\"en\"", "");
    test.write_file(TRANSLATIONS, &content)?;

    let output = test
        .check_command()
        .args(["untranslated", "--source-language", "id"])
        .output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("no issues found"));

    Ok(())
}

#[test]
fn test_typescript_sources_are_skipped() -> Result<()> {
    let test = CliTest::with_file(TRANSLATIONS, SKETCHER_ID)?;
    test.write_file("web/src/index.ts", "export const answer: number = 42;\n")?;

    let output = test.check_command().output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("Checked 1 catalog file"));

    Ok(())
}

#[test]
fn test_parse_error() -> Result<()> {
    let test = CliTest::with_file(TRANSLATIONS, SKETCHER_ID)?;
    test.write_file(
        "Gui/Resources/translations/Sketcher_de.ts",
        "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<TS version=\"2.1\" language=\"de\">\n  <context>\n    <name>CmdSketcherCloseShape</name>\n",
    )?;

    let output = test.check_command().output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("parse-error"));
    assert!(stdout(&output).contains("--> ./Gui/Resources/translations/Sketcher_de.ts\n"));
    assert!(stderr(&output).contains("1 file(s) could not be parsed"));

    Ok(())
}

#[test]
fn test_parse_error_names_line() -> Result<()> {
    let test = CliTest::with_file(TRANSLATIONS, SKETCHER_ID)?;
    test.write_file(
        "Gui/Resources/translations/Sketcher_de.ts",
        "<TS version=\"2.1\" language=\"de\">\n  <context>\n    <name>Ctx</name>\n    <message><source>a &bogus; b</source></message>\n  </context>\n</TS>\n",
    )?;

    let output = test.check_command().output()?;
    let out = stdout(&output);

    assert_eq!(output.status.code(), Some(1));
    assert!(out.contains("Invalid text at line 4"), "{}", out);
    assert!(out.contains("bogus"), "{}", out);

    Ok(())
}

#[test]
fn test_invalid_config() -> Result<()> {
    let test = CliTest::with_file(TRANSLATIONS, SKETCHER_ID)?;
    test.write_file(".tslingrc.json", r#"{ "ignores": ["[invalid"] }"#)?;

    let output = test.check_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Invalid glob pattern in 'ignores'"));

    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("--help").output()?;
    let out = stdout(&output);

    assert_eq!(output.status.code(), Some(0));
    for command in ["check", "lookup", "stats", "normalize", "merge", "export", "init", "serve"] {
        assert!(out.contains(command), "help should list `{}`", command);
    }

    Ok(())
}

#[test]
fn test_no_command_prints_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("Usage:"));

    Ok(())
}
