use anyhow::Result;

use crate::{CliTest, SKETCHER_ID, stdout};

const FILE: &str = "translations/Sketcher_id.ts";

#[test]
fn test_normalize_dry_run_leaves_file() -> Result<()> {
    let test = CliTest::with_file(FILE, SKETCHER_ID)?;

    let output = test.command().arg("normalize").output()?;
    let out = stdout(&output);

    assert_eq!(output.status.code(), Some(0));
    assert!(out.contains("would rewrite ./translations/Sketcher_id.ts"));
    assert!(out.contains("Would normalize 1 of 1 catalog file(s)."));
    assert!(out.contains("Run with --apply"));
    assert_eq!(test.read_file(FILE)?, SKETCHER_ID);

    Ok(())
}

#[test]
fn test_normalize_apply_sorts_contexts() -> Result<()> {
    let test = CliTest::with_file(FILE, SKETCHER_ID)?;

    let output = test.command().args(["normalize", "--apply"]).output()?;
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("Normalized 1 of 1 catalog file(s)."));

    let content = test.read_file(FILE)?;
    let close = content.find("<name>CmdSketcherCloseShape</name>").unwrap();
    let radius = content.find("<name>CmdSketcherConstrainRadius</name>").unwrap();
    assert!(close < radius);
    assert!(content.contains("<translation>Kendalikan radius</translation>"));

    // A second run has nothing left to do
    let output = test.command().arg("normalize").output()?;
    assert!(stdout(&output).contains("1 catalog file(s) already normalized"));

    Ok(())
}

#[test]
fn test_normalize_merges_split_contexts() -> Result<()> {
    let split = r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE TS>
<TS version="2.1" language="id">
  <context>
    <name>CmdSketcherCopy</name>
    <message>
      <location filename="../../CommandSketcherTools.cpp" line="1534"/>
      <source>Copy</source>
      <translation>Salin</translation>
    </message>
  </context>
  <context>
    <name>CmdSketcherCopy</name>
    <message>
      <location filename="../../CommandSketcherTools.cpp" line="1535"/>
      <source>Creates a simple copy of the geometry</source>
      <translation type="unfinished"></translation>
    </message>
  </context>
</TS>
"#;
    let test = CliTest::with_file(FILE, split)?;

    test.command().args(["normalize", "--apply"]).output()?;

    let content = test.read_file(FILE)?;
    assert_eq!(content.matches("<context>").count(), 1);
    assert!(content.find("<source>Copy</source>") < content.find("<source>Creates a simple"));

    Ok(())
}
