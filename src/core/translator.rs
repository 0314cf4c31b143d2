//! Runtime lookup of translations by (context, source, comment).
//!
//! Lookups never fail: when no reviewed translation exists, the source text is
//! returned together with a status telling the caller why.

use std::{collections::HashMap, fmt};

use serde::Serialize;

use crate::core::{Catalog, MessageKey, Translation, TranslationKind, plural::plural_index};

/// Why a lookup returned the text it did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LookupStatus {
    /// A finished translation was found.
    Translated,
    /// The message exists but its translation is unfinished; source text returned.
    Unfinished,
    /// No usable translation; source text returned.
    Missing,
}

impl fmt::Display for LookupStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupStatus::Translated => write!(f, "translated"),
            LookupStatus::Unfinished => write!(f, "unfinished"),
            LookupStatus::Missing => write!(f, "missing"),
        }
    }
}

/// Result of a lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Lookup {
    pub text: String,
    pub status: LookupStatus,
}

impl Lookup {
    /// True when `text` is the source-language fallback.
    pub fn is_fallback(&self) -> bool {
        self.status != LookupStatus::Translated
    }
}

#[derive(Debug, Clone)]
struct IndexedMessage {
    numerus: bool,
    translation: Translation,
}

/// Lookup index built from one catalog.
#[derive(Debug, Clone, Default)]
pub struct Translator {
    language: Option<String>,
    messages: HashMap<MessageKey, IndexedMessage>,
}

impl Translator {
    /// Index all active messages. The first message wins on duplicate keys.
    pub fn from_catalog(catalog: &Catalog) -> Self {
        let mut messages = HashMap::new();
        for entry in catalog.entries().filter(|e| e.message.is_active()) {
            messages.entry(entry.key()).or_insert_with(|| IndexedMessage {
                numerus: entry.message.numerus,
                translation: entry.message.translation.clone(),
            });
        }
        Self {
            language: catalog.language.clone(),
            messages,
        }
    }

    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn translate(&self, context: &str, source: &str, comment: Option<&str>) -> Lookup {
        self.lookup(context, source, comment, None)
    }

    /// Plural-aware lookup; `%n` in the result is replaced by `n`.
    pub fn translate_n(
        &self,
        context: &str,
        source: &str,
        comment: Option<&str>,
        n: i64,
    ) -> Lookup {
        let mut result = self.lookup(context, source, comment, Some(n));
        result.text = result.text.replace("%n", &n.to_string());
        result
    }

    fn lookup(&self, context: &str, source: &str, comment: Option<&str>, n: Option<i64>) -> Lookup {
        let fallback = |status| Lookup {
            text: source.to_string(),
            status,
        };

        let Some(message) = self.resolve(context, source, comment) else {
            return fallback(LookupStatus::Missing);
        };

        let translation = &message.translation;
        if translation.kind == TranslationKind::Unfinished {
            return fallback(LookupStatus::Unfinished);
        }

        let text = if message.numerus {
            let forms = &translation.numerus_forms;
            let language = self.language.as_deref().unwrap_or("");
            let index = plural_index(language, n.unwrap_or(1), forms.len());
            forms.get(index).map(String::as_str).unwrap_or("")
        } else {
            translation.text.as_str()
        };

        if text.is_empty() {
            fallback(LookupStatus::Missing)
        } else {
            Lookup {
                text: text.to_string(),
                status: LookupStatus::Translated,
            }
        }
    }

    /// Exact key first; a commented lookup falls back to the uncommented message.
    fn resolve(
        &self,
        context: &str,
        source: &str,
        comment: Option<&str>,
    ) -> Option<&IndexedMessage> {
        let comment = comment.unwrap_or("");
        self.messages
            .get(&MessageKey::new(context, source, comment))
            .or_else(|| {
                if comment.is_empty() {
                    None
                } else {
                    self.messages.get(&MessageKey::new(context, source, ""))
                }
            })
    }
}
