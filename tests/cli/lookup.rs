use anyhow::Result;
use serde_json::Value;

use crate::{CliTest, SKETCHER_ID, stderr, stdout};

const RU_NUMERUS: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE TS>
<TS version="2.1" language="ru">
  <context>
    <name>SketcherGui::TaskSketcherConstraints</name>
    <message numerus="yes">
      <location filename="../../TaskSketcherConstraints.cpp" line="1182"/>
      <source>%n constraint(s)</source>
      <translation>
        <numerusform>%n ограничение</numerusform>
        <numerusform>%n ограничения</numerusform>
        <numerusform>%n ограничений</numerusform>
      </translation>
    </message>
  </context>
</TS>
"#;

#[test]
fn test_lookup_finished_translation() -> Result<()> {
    let test = CliTest::with_file("Sketcher_id.ts", SKETCHER_ID)?;

    let output = test
        .lookup_command()
        .args(["Sketcher_id.ts", "--context", "CmdSketcherConstrainRadius"])
        .args(["--source", "Constrain radius"])
        .output()?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "Kendalikan radius\n");
    assert!(stderr(&output).is_empty());

    Ok(())
}

#[test]
fn test_lookup_unfinished_falls_back_to_source() -> Result<()> {
    let test = CliTest::with_file("Sketcher_id.ts", SKETCHER_ID)?;

    let output = test
        .lookup_command()
        .args(["Sketcher_id.ts", "--context", "CmdSketcherCloseShape"])
        .args(["--source", "Close shape"])
        .output()?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "Close shape\n");
    assert!(stderr(&output).contains("(unfinished)"));

    Ok(())
}

#[test]
fn test_lookup_json_missing() -> Result<()> {
    let test = CliTest::with_file("Sketcher_id.ts", SKETCHER_ID)?;

    let output = test
        .lookup_command()
        .args(["Sketcher_id.ts", "--context", "CmdSketcherConstrainRadius"])
        .args(["--source", "Constrain diameter", "--comment", "menu", "--json"])
        .output()?;

    assert_eq!(output.status.code(), Some(0));
    let json: Value = serde_json::from_str(&stdout(&output))?;
    assert_eq!(json["text"], "Constrain diameter");
    assert_eq!(json["status"], "missing");
    assert_eq!(json["comment"], "menu");
    assert_eq!(json["context"], "CmdSketcherConstrainRadius");

    Ok(())
}

#[test]
fn test_lookup_plural_form() -> Result<()> {
    let test = CliTest::with_file("Sketcher_ru.ts", RU_NUMERUS)?;

    for (n, expected) in [
        ("1", "1 ограничение\n"),
        ("3", "3 ограничения\n"),
        ("5", "5 ограничений\n"),
    ] {
        let output = test
            .lookup_command()
            .args(["Sketcher_ru.ts", "--context", "SketcherGui::TaskSketcherConstraints"])
            .args(["--source", "%n constraint(s)", "-n", n])
            .output()?;

        assert_eq!(output.status.code(), Some(0));
        assert_eq!(stdout(&output), expected);
    }

    Ok(())
}

#[test]
fn test_lookup_missing_file() -> Result<()> {
    let test = CliTest::new()?;

    let output = test
        .lookup_command()
        .args(["Sketcher_id.ts", "--context", "Ctx", "--source", "Text"])
        .output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).starts_with("Error:"));

    Ok(())
}
