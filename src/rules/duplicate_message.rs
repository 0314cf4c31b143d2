//! Duplicate message detection rule.
//!
//! Lookups resolve (context, source, comment) to a single translation, so a
//! repeated key makes every later occurrence unreachable. Vanished and
//! obsolete messages are ignored: they are never served.

use std::collections::HashMap;

use crate::{
    core::{Catalog, MessageKey},
    issues::DuplicateMessageIssue,
    rules::helpers::message_context,
};

pub fn check_duplicate_message(file_path: &str, catalog: &Catalog) -> Vec<DuplicateMessageIssue> {
    let mut first_seen: HashMap<MessageKey, usize> = HashMap::new();
    let mut issues = Vec::new();

    for entry in catalog.entries().filter(|e| e.message.is_active()) {
        let line = entry.message.line;
        match first_seen.get(&entry.key()) {
            Some(&first_line) => issues.push(DuplicateMessageIssue {
                context: message_context(file_path, entry.context, entry.message),
                first_line,
            }),
            None => {
                first_seen.insert(entry.key(), line);
            }
        }
    }

    issues
}
