//! Untranslated text detection rule.
//!
//! Detects finished translations identical to their source text, which
//! usually means the text was copied rather than translated. Texts without
//! letters, texts listed in `ignoreTexts`, and catalogs in the source
//! language itself are skipped.

use std::collections::HashSet;

use crate::{
    config::Config,
    core::{Catalog, TranslationKind},
    issues::UntranslatedIssue,
    rules::helpers::message_context,
    utils::contains_alphabetic,
};

pub fn check_untranslated(
    file_path: &str,
    catalog: &Catalog,
    config: &Config,
) -> Vec<UntranslatedIssue> {
    let Some(language) = catalog.language.as_deref() else {
        return Vec::new();
    };
    let source_language = catalog
        .source_language
        .as_deref()
        .unwrap_or(&config.source_language);
    if primary_subtag(language) == primary_subtag(source_language) {
        return Vec::new();
    }

    let ignore_texts: HashSet<&str> = config.ignore_texts.iter().map(String::as_str).collect();
    let mut issues = Vec::new();

    for entry in catalog.entries() {
        let message = entry.message;
        let translation = &message.translation;
        if translation.kind != TranslationKind::Finished
            || !contains_alphabetic(&message.source)
            || ignore_texts.contains(message.source.as_str())
        {
            continue;
        }

        let identical = if message.numerus {
            translation.numerus_forms.iter().any(|f| *f == message.source)
        } else {
            translation.text == message.source
        };

        if identical {
            issues.push(UntranslatedIssue {
                context: message_context(file_path, entry.context, message),
                language: language.to_string(),
            });
        }
    }

    issues
}

/// `pt_BR` and `pt-BR` both yield `pt`.
fn primary_subtag(language: &str) -> String {
    language
        .split(['_', '-'])
        .next()
        .unwrap_or(language)
        .to_ascii_lowercase()
}
