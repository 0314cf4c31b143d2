//! Merge a freshly extracted template into an existing translated catalog.
//!
//! The extraction tool produces catalogs with up-to-date sources and
//! locations but no translations. Merging keeps every translation whose key
//! still exists and retires the rest.

use std::{
    collections::{HashMap, HashSet},
    ptr,
};

use serde::Serialize;

use crate::core::{Catalog, Context, Message, MessageKey, Translation, TranslationKind};

#[derive(Debug, Clone, Copy, Default)]
pub struct MergeOptions {
    /// Drop messages that are no longer in the template instead of marking them vanished.
    pub drop_obsolete: bool,
}

/// What happened to the messages during a merge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MergeStats {
    /// Template messages without an existing translation.
    pub added: usize,
    /// Template messages that kept their existing translation.
    pub kept: usize,
    /// Previously vanished messages that reappeared in the template.
    pub revived: usize,
    /// Existing messages no longer in the template, kept as vanished.
    pub vanished: usize,
    /// Existing messages no longer in the template, removed.
    pub dropped: usize,
}

impl MergeStats {
    pub fn has_changes(&self) -> bool {
        self.added + self.revived + self.vanished + self.dropped > 0
    }
}

#[derive(Debug, Clone)]
pub struct MergeOutcome {
    pub catalog: Catalog,
    pub stats: MergeStats,
}

pub fn merge(existing: &Catalog, template: &Catalog, options: MergeOptions) -> MergeOutcome {
    let mut stats = MergeStats::default();

    // First active occurrence wins, as in lookups; retired copies fill the gaps.
    let mut previous: HashMap<MessageKey, &Message> = HashMap::new();
    for entry in existing.entries().filter(|e| e.message.is_active()) {
        previous.entry(entry.key()).or_insert(entry.message);
    }
    for entry in existing.entries().filter(|e| !e.message.is_active()) {
        previous.entry(entry.key()).or_insert(entry.message);
    }

    let mut contexts: Vec<Context> = Vec::new();
    let mut used: HashSet<MessageKey> = HashSet::new();

    for template_context in &template.contexts {
        let mut context = Context::new(&template_context.name);
        for template_message in &template_context.messages {
            let key = MessageKey::of(template_context, template_message);
            let mut message = template_message.clone();
            message.line = 0;

            match previous.get(&key) {
                Some(old) => {
                    message.translation = old.translation.clone();
                    message.translator_comment = old.translator_comment.clone();
                    if old.is_active() {
                        stats.kept += 1;
                    } else {
                        message.translation.kind = TranslationKind::Unfinished;
                        stats.revived += 1;
                    }
                }
                None => {
                    message.translation = Translation::unfinished("");
                    stats.added += 1;
                }
            }

            used.insert(key);
            context.messages.push(message);
        }
        contexts.push(context);
    }

    for existing_context in &existing.contexts {
        for old in &existing_context.messages {
            let key = MessageKey::of(existing_context, old);
            // Duplicates that lost to another copy of the same key.
            if !previous.get(&key).is_some_and(|chosen| ptr::eq(*chosen, old)) {
                stats.dropped += 1;
                continue;
            }
            if used.contains(&key) {
                continue;
            }

            if options.drop_obsolete || !old.has_translation() {
                stats.dropped += 1;
                continue;
            }

            let mut message = old.clone();
            message.line = 0;
            if message.is_active() {
                message.translation.kind = TranslationKind::Vanished;
            }
            stats.vanished += 1;

            match contexts.iter_mut().find(|c| c.name == existing_context.name) {
                Some(context) => context.messages.push(message),
                None => {
                    let mut context = Context::new(&existing_context.name);
                    context.messages.push(message);
                    contexts.push(context);
                }
            }
        }
    }

    let mut catalog = Catalog {
        version: existing.version.clone(),
        language: existing.language.clone().or_else(|| template.language.clone()),
        source_language: existing
            .source_language
            .clone()
            .or_else(|| template.source_language.clone()),
        contexts,
    };
    catalog.normalize();

    MergeOutcome { catalog, stats }
}
