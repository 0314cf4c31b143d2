use anyhow::Result;

use crate::{CliTest, SKETCHER_ID, stdout};

/// Fresh extraction: "Close shape" is gone, "Close polyline" is new.
const TEMPLATE: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE TS>
<TS version="2.1">
  <context>
    <name>CmdSketcherClosePolyline</name>
    <message>
      <location filename="../../CommandSketcherTools.cpp" line="120"/>
      <source>Close polyline</source>
      <translation type="unfinished"></translation>
    </message>
  </context>
  <context>
    <name>CmdSketcherConstrainRadius</name>
    <message>
      <location filename="../../CommandConstraints.cpp" line="4701"/>
      <source>Constrain radius</source>
      <translation type="unfinished"></translation>
    </message>
  </context>
</TS>
"#;

const FILE: &str = "translations/Sketcher_id.ts";

/// Catalog whose "Close shape" carries a draft translation.
fn catalog_with_draft() -> String {
    SKETCHER_ID.replace(
        "<translation type=\"unfinished\">Close shape</translation>",
        "<translation type=\"unfinished\">Tutup bentuk</translation>",
    )
}

fn merge_test() -> Result<CliTest> {
    let test = CliTest::with_file(FILE, &catalog_with_draft())?;
    test.write_file("Sketcher.ts", TEMPLATE)?;
    Ok(test)
}

#[test]
fn test_merge_dry_run() -> Result<()> {
    let test = merge_test()?;

    let output = test
        .command()
        .args(["merge", "--template", "Sketcher.ts", FILE])
        .output()?;
    let out = stdout(&output);

    assert_eq!(output.status.code(), Some(0));
    assert!(out.contains(
        "translations/Sketcher_id.ts: 1 added, 1 kept, 0 revived, 1 vanished, 0 dropped"
    ));
    assert!(out.contains("Would update 1 catalog file(s)."));
    assert_eq!(test.read_file(FILE)?, catalog_with_draft());

    Ok(())
}

#[test]
fn test_merge_apply() -> Result<()> {
    let test = merge_test()?;

    let output = test
        .command()
        .args(["merge", "--template", "Sketcher.ts", FILE, "--apply"])
        .output()?;
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("Updated 1 catalog file(s)."));

    let content = test.read_file(FILE)?;
    assert!(content.contains("language=\"id\""));
    assert!(content.contains("<source>Close polyline</source>"));
    assert!(content.contains("line=\"4701\""));
    assert!(content.contains("<translation>Kendalikan radius</translation>"));
    assert!(content.contains("<translation type=\"vanished\">Tutup bentuk</translation>"));

    // Merging the same template again changes nothing
    let output = test
        .command()
        .args(["merge", "--template", "Sketcher.ts", FILE])
        .output()?;
    assert!(stdout(&output).contains("All catalog file(s) up to date with Sketcher.ts"));

    Ok(())
}

#[test]
fn test_merge_drop_obsolete() -> Result<()> {
    let test = merge_test()?;

    let output = test
        .command()
        .args(["merge", "--template", "Sketcher.ts", FILE, "--drop-obsolete", "--apply"])
        .output()?;
    assert!(stdout(&output).contains("0 vanished, 1 dropped"));

    let content = test.read_file(FILE)?;
    assert!(!content.contains("Close shape"));

    Ok(())
}

#[test]
fn test_merge_scanned_catalogs_skip_template() -> Result<()> {
    let test = merge_test()?;

    let output = test
        .command()
        .args(["merge", "--template", "Sketcher.ts"])
        .output()?;
    let out = stdout(&output);

    assert_eq!(output.status.code(), Some(0));
    assert!(out.contains("./translations/Sketcher_id.ts: 1 added"));
    assert!(!out.contains("./Sketcher.ts:"));

    Ok(())
}

#[test]
fn test_merge_drops_untouched_placeholder() -> Result<()> {
    let test = CliTest::with_file(FILE, SKETCHER_ID)?;
    test.write_file("Sketcher.ts", TEMPLATE)?;

    let output = test
        .command()
        .args(["merge", "--template", "Sketcher.ts", FILE, "--apply"])
        .output()?;
    assert!(stdout(&output).contains("1 added, 1 kept, 0 revived, 0 vanished, 1 dropped"));

    let content = test.read_file(FILE)?;
    assert!(!content.contains("Close shape"));

    Ok(())
}
