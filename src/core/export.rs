//! One-way export of catalogs to other key-value catalog formats.

use std::fmt::{self, Write as _};

use anyhow::{Context as _, Result};
use clap::ValueEnum;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::{
    core::{Catalog, Message, TranslationKind},
    utils::placeholders,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// JSON locale map grouped by context
    Json,
    /// gettext PO file
    Po,
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportFormat::Json => write!(f, "json"),
            ExportFormat::Po => write!(f, "po"),
        }
    }
}

pub fn export(catalog: &Catalog, format: ExportFormat) -> Result<String> {
    match format {
        ExportFormat::Json => to_json(catalog),
        ExportFormat::Po => Ok(to_po(catalog)),
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonMessage<'a> {
    source: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    comment: Option<&'a str>,
    translation: &'a str,
    #[serde(skip_serializing_if = "<[_]>::is_empty")]
    numerus_forms: &'a [String],
    #[serde(skip_serializing_if = "<[_]>::is_empty")]
    length_variants: &'a [String],
    status: TranslationKind,
    locations: Vec<String>,
}

/// Serialize as a JSON locale map: `{ language, sourceLanguage, contexts: { name: [..] } }`.
pub fn to_json(catalog: &Catalog) -> Result<String> {
    let mut normalized = catalog.clone();
    normalized.normalize();

    let mut contexts = Map::new();
    for context in &normalized.contexts {
        let messages: Vec<JsonMessage<'_>> = context
            .messages
            .iter()
            .map(|m| JsonMessage {
                source: &m.source,
                comment: m.comment.as_deref(),
                translation: &m.translation.text,
                numerus_forms: &m.translation.numerus_forms,
                length_variants: &m.translation.length_variants,
                status: m.translation.kind,
                locations: m.locations.iter().map(ToString::to_string).collect(),
            })
            .collect();
        contexts.insert(context.name.clone(), serde_json::to_value(messages)?);
    }

    let mut root = Map::new();
    root.insert("language".into(), json_opt(&catalog.language));
    root.insert("sourceLanguage".into(), json_opt(&catalog.source_language));
    root.insert("contexts".into(), Value::Object(contexts));

    serde_json::to_string_pretty(&Value::Object(root))
        .context("Failed to serialize catalog as JSON")
}

fn json_opt(value: &Option<String>) -> Value {
    value.clone().map(Value::String).unwrap_or(Value::Null)
}

/// Serialize as a gettext PO file.
///
/// The context becomes `msgctxt` (`context|comment` when a disambiguation
/// comment exists), location hints become `#:` references and unfinished
/// translations are flagged `fuzzy`. Vanished messages are written as `#~`
/// entries.
pub fn to_po(catalog: &Catalog) -> String {
    let mut out = String::new();
    out.push_str("msgid \"\"\n");
    out.push_str("msgstr \"\"\n");
    out.push_str("\"MIME-Version: 1.0\\n\"\n");
    out.push_str("\"Content-Type: text/plain; charset=UTF-8\\n\"\n");
    out.push_str("\"Content-Transfer-Encoding: 8bit\\n\"\n");
    if let Some(language) = &catalog.language {
        let _ = writeln!(out, "\"Language: {}\\n\"", escape_po(language));
    }
    if let Some(source_language) = &catalog.source_language {
        let _ = writeln!(out, "\"X-Source-Language: {}\\n\"", escape_po(source_language));
    }

    for entry in catalog.entries() {
        out.push('\n');
        write_po_entry(&mut out, &entry.context.name, entry.message);
    }
    out
}

fn write_po_entry(out: &mut String, context: &str, message: &Message) {
    let prefix = if message.is_active() { "" } else { "#~ " };
    let translation = &message.translation;

    if let Some(extra) = &message.extra_comment {
        for line in extra.lines() {
            let _ = writeln!(out, "#. {}", line);
        }
    }
    if let Some(note) = &message.translator_comment {
        for line in note.lines() {
            let _ = writeln!(out, "# {}", line);
        }
    }
    if !message.locations.is_empty() {
        let refs: Vec<String> = message.locations.iter().map(ToString::to_string).collect();
        let _ = writeln!(out, "#: {}", refs.join(" "));
    }

    let unfinished = translation.kind == TranslationKind::Unfinished;
    let msgstr = |text: &str| -> String {
        if message.is_source_placeholder(text) {
            String::new()
        } else {
            text.to_string()
        }
    };

    let mut flags = Vec::new();
    if unfinished && message.has_translation() {
        flags.push("fuzzy");
    }
    if !placeholders(&message.source).is_empty() {
        flags.push("qt-format");
    }
    if !flags.is_empty() {
        let _ = writeln!(out, "#, {}", flags.join(", "));
    }

    let msgctxt = match &message.comment {
        Some(comment) => format!("{}|{}", context, comment),
        None => context.to_string(),
    };
    write_po_field(out, prefix, "msgctxt", &msgctxt);
    write_po_field(out, prefix, "msgid", &message.source);
    if message.numerus {
        write_po_field(out, prefix, "msgid_plural", &message.source);
        if translation.numerus_forms.is_empty() {
            write_po_field(out, prefix, "msgstr[0]", "");
        }
        for (i, form) in translation.numerus_forms.iter().enumerate() {
            write_po_field(out, prefix, &format!("msgstr[{}]", i), &msgstr(form.as_str()));
        }
    } else {
        write_po_field(out, prefix, "msgstr", &msgstr(translation.text.as_str()));
    }
}

/// Write `keyword "value"`, splitting after embedded newlines the way msgmerge does.
fn write_po_field(out: &mut String, prefix: &str, keyword: &str, value: &str) {
    let chunks: Vec<&str> = value.split_inclusive('\n').collect();
    if chunks.len() <= 1 {
        let _ = writeln!(out, "{}{} \"{}\"", prefix, keyword, escape_po(value));
        return;
    }
    let _ = writeln!(out, "{}{} \"\"", prefix, keyword);
    for chunk in chunks {
        let _ = writeln!(out, "{}\"{}\"", prefix, escape_po(chunk));
    }
}

fn escape_po(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            _ => escaped.push(c),
        }
    }
    escaped
}
