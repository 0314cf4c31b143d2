//! Unfinished translation consistency rule.
//!
//! An unfinished translation is displayed as its source text, so its stored
//! text must be empty or identical to the source. Anything else is a draft
//! that looks finished to one tool and unfinished to another.

use crate::{
    core::{Catalog, TranslationKind},
    issues::UnfinishedMismatchIssue,
    rules::helpers::message_context,
};

pub fn check_unfinished_mismatch(
    file_path: &str,
    catalog: &Catalog,
) -> Vec<UnfinishedMismatchIssue> {
    let mut issues = Vec::new();

    for entry in catalog.entries() {
        let message = entry.message;
        let translation = &message.translation;
        if translation.kind != TranslationKind::Unfinished {
            continue;
        }

        let diverges = |text: &&String| !text.is_empty() && **text != message.source;
        let mismatch = if message.numerus {
            translation.numerus_forms.iter().find(diverges)
        } else {
            Some(&translation.text).filter(diverges)
        };

        if let Some(text) = mismatch {
            issues.push(UnfinishedMismatchIssue {
                context: message_context(file_path, entry.context, message),
                translation: text.clone(),
            });
        }
    }

    issues
}
