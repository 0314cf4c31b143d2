use std::fmt;

use serde::Serialize;

/// Default TS format version written by lupdate.
pub const DEFAULT_TS_VERSION: &str = "2.1";

/// A parsed translation catalog (one `.ts` file).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    /// TS format version from the root element (e.g., "2.1").
    pub version: String,
    /// Target language code (e.g., "id").
    pub language: Option<String>,
    /// Source language code (e.g., "en").
    pub source_language: Option<String>,
    pub contexts: Vec<Context>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            version: DEFAULT_TS_VERSION.to_string(),
            language: None,
            source_language: None,
            contexts: Vec::new(),
        }
    }
}

/// A named group of messages, usually a command or dialog class.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Context {
    pub name: String,
    pub messages: Vec<Message>,
    /// Line where `<context>` starts in the catalog file (0 if built in memory).
    #[serde(skip)]
    pub line: usize,
}

impl Context {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            messages: Vec::new(),
            line: 0,
        }
    }
}

/// A single translatable string with its translation and location hints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub locations: Vec<Location>,
    pub source: String,
    /// Disambiguation comment; part of the lookup key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// Developer note for translators (`<extracomment>`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_comment: Option<String>,
    /// Translator's own note (`<translatorcomment>`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translator_comment: Option<String>,
    pub numerus: bool,
    pub translation: Translation,
    /// Line where `<message>` starts in the catalog file (0 if built in memory).
    #[serde(skip)]
    pub line: usize,
}

impl Message {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            ..Default::default()
        }
    }

    /// The comment used for key matching (empty when absent).
    pub fn key_comment(&self) -> &str {
        self.comment.as_deref().unwrap_or("")
    }

    /// Whether the message is still part of the application (not vanished/obsolete).
    pub fn is_active(&self) -> bool {
        self.translation.kind.is_active()
    }

    /// Whether `text` only repeats the source of an unfinished message.
    ///
    /// lupdate and translators seed unfinished translations with a copy of
    /// the source; such text is a placeholder, not a translation.
    pub fn is_source_placeholder(&self, text: &str) -> bool {
        self.translation.kind == TranslationKind::Unfinished && text == self.source
    }

    /// Whether the message carries translated text worth keeping.
    pub fn has_translation(&self) -> bool {
        let translation = &self.translation;
        std::iter::once(&translation.text)
            .chain(&translation.numerus_forms)
            .any(|text| !text.is_empty() && !self.is_source_placeholder(text))
    }
}

/// A `<location>` hint pointing into the application sources.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct Location {
    pub filename: Option<String>,
    pub line: Option<usize>,
}

impl Location {
    pub fn new(filename: impl Into<String>, line: usize) -> Self {
        Self {
            filename: Some(filename.into()),
            line: Some(line),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.filename.as_deref().is_some_and(|f| !f.is_empty()) && self.line.is_some()
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = self.filename.as_deref().unwrap_or("?");
        match self.line {
            Some(line) => write!(f, "{}:{}", file, line),
            None => write!(f, "{}", file),
        }
    }
}

/// The `type` attribute of a `<translation>` element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TranslationKind {
    /// No `type` attribute: a reviewed translation.
    #[default]
    Finished,
    Unfinished,
    /// The source string disappeared from the application.
    Vanished,
    /// Legacy spelling of `Vanished` used by older lupdate versions.
    Obsolete,
}

impl TranslationKind {
    /// Parse the `type` attribute value. Unknown values are treated as unfinished.
    pub fn from_attr(value: Option<&str>) -> Self {
        match value {
            None | Some("") => TranslationKind::Finished,
            Some("vanished") => TranslationKind::Vanished,
            Some("obsolete") => TranslationKind::Obsolete,
            Some(_) => TranslationKind::Unfinished,
        }
    }

    /// Value of the `type` attribute, `None` for finished translations.
    pub fn as_attr(&self) -> Option<&'static str> {
        match self {
            TranslationKind::Finished => None,
            TranslationKind::Unfinished => Some("unfinished"),
            TranslationKind::Vanished => Some("vanished"),
            TranslationKind::Obsolete => Some("obsolete"),
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(
            self,
            TranslationKind::Finished | TranslationKind::Unfinished
        )
    }
}

impl fmt::Display for TranslationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TranslationKind::Finished => write!(f, "finished"),
            TranslationKind::Unfinished => write!(f, "unfinished"),
            TranslationKind::Vanished => write!(f, "vanished"),
            TranslationKind::Obsolete => write!(f, "obsolete"),
        }
    }
}

/// Translated text of a message.
///
/// Plain messages use `text`; numerus messages use `numerus_forms` and leave
/// `text` empty. A plain message with length variants (longest first) keeps
/// them in `length_variants` and the first one in `text`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Translation {
    #[serde(rename = "status")]
    pub kind: TranslationKind,
    pub text: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub numerus_forms: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub length_variants: Vec<String>,
}

impl Translation {
    pub fn finished(text: impl Into<String>) -> Self {
        Self {
            kind: TranslationKind::Finished,
            text: text.into(),
            numerus_forms: Vec::new(),
            length_variants: Vec::new(),
        }
    }

    pub fn unfinished(text: impl Into<String>) -> Self {
        Self {
            kind: TranslationKind::Unfinished,
            text: text.into(),
            numerus_forms: Vec::new(),
            length_variants: Vec::new(),
        }
    }

    /// True when neither the text nor any numerus form carries content.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty() && self.numerus_forms.iter().all(|f| f.is_empty())
    }
}

/// Effective lookup key of a message: (context, source, comment).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MessageKey {
    pub context: String,
    pub source: String,
    /// Empty when the message has no disambiguation comment.
    pub comment: String,
}

impl MessageKey {
    pub fn new(
        context: impl Into<String>,
        source: impl Into<String>,
        comment: impl Into<String>,
    ) -> Self {
        Self {
            context: context.into(),
            source: source.into(),
            comment: comment.into(),
        }
    }

    pub fn of(context: &Context, message: &Message) -> Self {
        Self::new(&context.name, &message.source, message.key_comment())
    }
}

impl fmt::Display for MessageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.comment.is_empty() {
            write!(f, "{}::\"{}\"", self.context, self.source)
        } else {
            write!(f, "{}::\"{}\" ({})", self.context, self.source, self.comment)
        }
    }
}

/// Borrowed view of one message together with its context name.
#[derive(Debug, Clone, Copy)]
pub struct Entry<'a> {
    pub context: &'a Context,
    pub message: &'a Message,
}

impl Entry<'_> {
    pub fn key(&self) -> MessageKey {
        MessageKey::of(self.context, self.message)
    }
}

/// Message counts by translation state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogCounts {
    pub contexts: usize,
    pub messages: usize,
    pub finished: usize,
    pub unfinished: usize,
    /// Vanished and obsolete messages.
    pub vanished: usize,
}

impl CatalogCounts {
    /// Percentage of active messages with a finished translation.
    pub fn completion(&self) -> f64 {
        let active = self.finished + self.unfinished;
        if active == 0 {
            100.0
        } else {
            self.finished as f64 * 100.0 / active as f64
        }
    }
}

impl Catalog {
    /// Iterate over all messages with their contexts, in file order.
    pub fn entries(&self) -> impl Iterator<Item = Entry<'_>> {
        self.contexts.iter().flat_map(|context| {
            context
                .messages
                .iter()
                .map(move |message| Entry { context, message })
        })
    }

    pub fn message_count(&self) -> usize {
        self.contexts.iter().map(|c| c.messages.len()).sum()
    }

    pub fn context(&self, name: &str) -> Option<&Context> {
        self.contexts.iter().find(|c| c.name == name)
    }

    /// Find the first message matching the full key.
    pub fn find(&self, context: &str, source: &str, comment: Option<&str>) -> Option<&Message> {
        let comment = comment.unwrap_or("");
        self.contexts
            .iter()
            .filter(|c| c.name == context)
            .flat_map(|c| c.messages.iter())
            .find(|m| m.source == source && m.key_comment() == comment)
    }

    pub fn counts(&self) -> CatalogCounts {
        let mut counts = CatalogCounts {
            contexts: self.contexts.len(),
            ..Default::default()
        };
        for entry in self.entries() {
            counts.messages += 1;
            match entry.message.translation.kind {
                TranslationKind::Finished => counts.finished += 1,
                TranslationKind::Unfinished => counts.unfinished += 1,
                TranslationKind::Vanished | TranslationKind::Obsolete => counts.vanished += 1,
            }
        }
        counts
    }

    /// Merge same-named contexts and sort contexts by name.
    ///
    /// The first occurrence of a context keeps its position before sorting;
    /// messages of later duplicates are appended in order. Message order within
    /// a context is preserved.
    pub fn normalize(&mut self) {
        let mut merged: Vec<Context> = Vec::with_capacity(self.contexts.len());
        for context in self.contexts.drain(..) {
            match merged.iter_mut().find(|c| c.name == context.name) {
                Some(existing) => existing.messages.extend(context.messages),
                None => merged.push(context),
            }
        }
        merged.sort_by(|a, b| a.name.cmp(&b.name));
        self.contexts = merged;
    }

    /// Context names are already unique and sorted.
    pub fn is_normalized(&self) -> bool {
        self.contexts.windows(2).all(|w| w[0].name < w[1].name)
    }
}
