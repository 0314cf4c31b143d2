//! Placeholder consistency rule.
//!
//! Qt substitutes `%1`..`%99` (and `%L1`, `%n`) at runtime; a finished
//! translation that drops or invents one shows wrong values to users.
//! Plural forms may spell the count out, so `%n` is not required in each
//! numerus form.

use crate::{
    core::{Catalog, TranslationKind},
    issues::PlaceholderMismatchIssue,
    rules::helpers::message_context,
    utils::placeholders,
};

pub fn check_placeholder_mismatch(
    file_path: &str,
    catalog: &Catalog,
) -> Vec<PlaceholderMismatchIssue> {
    let mut issues = Vec::new();

    for entry in catalog.entries() {
        let message = entry.message;
        let translation = &message.translation;
        if translation.kind != TranslationKind::Finished {
            continue;
        }

        let expected = placeholders(&message.source);
        let mismatch = if message.numerus {
            let expected = without_count(&expected);
            translation
                .numerus_forms
                .iter()
                .filter(|form| !form.is_empty())
                .map(|form| (form, without_count(&placeholders(form))))
                .find(|(_, found)| *found != expected)
                .map(|(form, found)| (form, expected.clone(), found))
        } else if translation.text.is_empty() {
            None
        } else {
            let found = placeholders(&translation.text);
            (found != expected).then(|| (&translation.text, expected.clone(), found))
        };

        if let Some((text, expected, found)) = mismatch {
            issues.push(PlaceholderMismatchIssue {
                context: message_context(file_path, entry.context, message),
                translation: text.clone(),
                expected,
                found,
            });
        }
    }

    issues
}

fn without_count(placeholders: &[String]) -> Vec<String> {
    placeholders.iter().filter(|p| *p != "%n").cloned().collect()
}
