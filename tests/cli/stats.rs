use anyhow::Result;
use serde_json::Value;

use crate::{CliTest, SKETCHER_ID, stdout};

#[test]
fn test_stats_table() -> Result<()> {
    let test = CliTest::with_file("translations/Sketcher_id.ts", SKETCHER_ID)?;

    let output = test.command().arg("stats").output()?;
    let out = stdout(&output);
    let lines: Vec<&str> = out.lines().collect();

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("File"));
    assert!(lines[0].ends_with("Done"));
    assert!(lines[1].starts_with("./translations/Sketcher_id.ts  id"));
    assert!(lines[1].ends_with("50.0%"));

    Ok(())
}

#[test]
fn test_stats_json() -> Result<()> {
    let test = CliTest::with_file("translations/Sketcher_id.ts", SKETCHER_ID)?;

    let output = test.command().args(["stats", "--json"]).output()?;
    let json: Value = serde_json::from_str(&stdout(&output))?;

    assert_eq!(output.status.code(), Some(0));
    let catalog = &json[0];
    assert_eq!(catalog["file"], "./translations/Sketcher_id.ts");
    assert_eq!(catalog["language"], "id");
    assert_eq!(catalog["contexts"], 2);
    assert_eq!(catalog["messages"], 2);
    assert_eq!(catalog["finished"], 1);
    assert_eq!(catalog["unfinished"], 1);
    assert_eq!(catalog["vanished"], 0);
    assert_eq!(catalog["completion"], 50.0);

    Ok(())
}

#[test]
fn test_stats_without_catalogs() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("stats").output()?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "No catalog files found.\n");

    Ok(())
}
