//! Empty finished translation detection rule.
//!
//! A finished translation with no text silently falls back to the source at
//! runtime; it was most likely meant to be marked unfinished.

use crate::{
    core::{Catalog, TranslationKind},
    issues::EmptyTranslationIssue,
    rules::helpers::message_context,
};

pub fn check_empty_translation(file_path: &str, catalog: &Catalog) -> Vec<EmptyTranslationIssue> {
    catalog
        .entries()
        .filter(|entry| {
            let message = entry.message;
            message.translation.kind == TranslationKind::Finished
                && !message.source.is_empty()
                && message.translation.is_empty()
        })
        .map(|entry| EmptyTranslationIssue {
            context: message_context(file_path, entry.context, entry.message),
        })
        .collect()
}
