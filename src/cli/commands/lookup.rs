use anyhow::Result;

use super::super::args::LookupCommand;
use super::{CommandResult, CommandSummary, LookupSummary, helper::finish};
use crate::core::{parsers::ts::parse_ts_file, translator::Translator};

pub fn lookup(cmd: LookupCommand) -> Result<CommandResult> {
    let catalog = parse_ts_file(&cmd.file)?;
    let translator = Translator::from_catalog(&catalog);

    if cmd.verbose {
        eprintln!(
            "Note: Indexed {} message(s) from {}",
            translator.len(),
            cmd.file.display()
        );
    }

    let comment = cmd.comment.as_deref();
    let lookup = match cmd.n {
        Some(n) => translator.translate_n(&cmd.context, &cmd.source, comment, n),
        None => translator.translate(&cmd.context, &cmd.source, comment),
    };

    let summary = LookupSummary {
        context: cmd.context,
        source: cmd.source,
        comment: cmd.comment,
        lookup,
        json: cmd.json,
    };

    Ok(finish(CommandSummary::Lookup(summary), Vec::new(), 1, false))
}
