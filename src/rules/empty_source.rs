//! Empty source detection rule.
//!
//! The source text is the lookup key, so a message without one can never be
//! found at runtime.

use crate::{core::Catalog, issues::EmptySourceIssue, rules::helpers::message_context};

pub fn check_empty_source(file_path: &str, catalog: &Catalog) -> Vec<EmptySourceIssue> {
    catalog
        .entries()
        .filter(|entry| entry.message.source.is_empty())
        .map(|entry| EmptySourceIssue {
            context: message_context(file_path, entry.context, entry.message),
        })
        .collect()
}
