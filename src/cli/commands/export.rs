use anyhow::{Context as _, Result};

use super::super::args::ExportCommand;
use super::{CommandResult, CommandSummary, ExportSummary, helper::finish};
use crate::core::{export::export, parsers::ts::parse_ts_file};

pub fn export_command(cmd: ExportCommand) -> Result<CommandResult> {
    let catalog = parse_ts_file(&cmd.file)?;
    let content = export(&catalog, cmd.format)?;

    if let Some(output) = &cmd.output {
        std::fs::write(output, &content)
            .with_context(|| format!("Failed to write export file: {:?}", output))?;
        if cmd.verbose {
            eprintln!(
                "Note: Exported {} message(s) as {}",
                catalog.message_count(),
                cmd.format
            );
        }
    }

    let summary = ExportSummary {
        content,
        output: cmd.output,
    };

    Ok(finish(CommandSummary::Export(summary), Vec::new(), 1, false))
}
