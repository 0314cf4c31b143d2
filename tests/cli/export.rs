use anyhow::Result;
use serde_json::Value;

use crate::{CliTest, SKETCHER_ID, stdout};

#[test]
fn test_export_json_to_stdout() -> Result<()> {
    let test = CliTest::with_file("Sketcher_id.ts", SKETCHER_ID)?;

    let output = test
        .command()
        .args(["export", "Sketcher_id.ts", "--format", "json"])
        .output()?;
    assert_eq!(output.status.code(), Some(0));

    let json: Value = serde_json::from_str(&stdout(&output))?;
    assert_eq!(json["language"], "id");
    assert_eq!(
        json["contexts"]["CmdSketcherConstrainRadius"][0]["translation"],
        "Kendalikan radius"
    );
    assert_eq!(
        json["contexts"]["CmdSketcherCloseShape"][0]["status"],
        "unfinished"
    );

    Ok(())
}

#[test]
fn test_export_po_to_file() -> Result<()> {
    let test = CliTest::with_file("Sketcher_id.ts", SKETCHER_ID)?;

    let output = test
        .command()
        .args(["export", "Sketcher_id.ts", "--format", "po", "--output", "id.po"])
        .output()?;
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("Wrote id.po"));

    let po = test.read_file("id.po")?;
    assert!(po.contains("\"Language: id\\n\""));
    assert!(po.contains(
        "msgctxt \"CmdSketcherConstrainRadius\"\nmsgid \"Constrain radius\"\nmsgstr \"Kendalikan radius\"\n"
    ));

    Ok(())
}
