//! Catalog serialization in the lupdate layout.
//!
//! Output of [`to_ts_string`] parses back into the same catalog, and writing a
//! catalog read from a file produced by this writer reproduces that file.

use std::{fmt::Write as _, fs, path::Path};

use anyhow::{Context as _, Result};
use quick_xml::escape::{escape, partial_escape};

use crate::core::{Catalog, Message};

/// Serialize a catalog to TS XML.
pub fn to_ts_string(catalog: &Catalog) -> String {
    let mut out = String::with_capacity(catalog.message_count() * 256 + 128);
    out.push_str("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n");
    out.push_str("<!DOCTYPE TS>\n");

    out.push_str("<TS version=\"");
    out.push_str(&escape(catalog.version.as_str()));
    out.push('"');
    if let Some(language) = &catalog.language {
        let _ = write!(out, " language=\"{}\"", escape(language.as_str()));
    }
    if let Some(source_language) = &catalog.source_language {
        let _ = write!(out, " sourcelanguage=\"{}\"", escape(source_language.as_str()));
    }
    out.push_str(">\n");

    for context in &catalog.contexts {
        out.push_str("  <context>\n");
        let _ = writeln!(out, "    <name>{}</name>", partial_escape(context.name.as_str()));
        for message in &context.messages {
            write_message(&mut out, message);
        }
        out.push_str("  </context>\n");
    }

    out.push_str("</TS>\n");
    out
}

/// Serialize a catalog and write it to `path`.
pub fn write_ts_file(path: &Path, catalog: &Catalog) -> Result<()> {
    fs::write(path, to_ts_string(catalog))
        .with_context(|| format!("Failed to write catalog file: {:?}", path))
}

fn write_message(out: &mut String, message: &Message) {
    if message.numerus {
        out.push_str("    <message numerus=\"yes\">\n");
    } else {
        out.push_str("    <message>\n");
    }

    for location in &message.locations {
        out.push_str("      <location");
        if let Some(filename) = &location.filename {
            let _ = write!(out, " filename=\"{}\"", escape(filename.as_str()));
        }
        if let Some(line) = location.line {
            let _ = write!(out, " line=\"{}\"", line);
        }
        out.push_str("/>\n");
    }

    write_text_element(out, "source", &message.source);
    if let Some(comment) = &message.comment {
        write_text_element(out, "comment", comment);
    }
    if let Some(extra) = &message.extra_comment {
        write_text_element(out, "extracomment", extra);
    }
    if let Some(note) = &message.translator_comment {
        write_text_element(out, "translatorcomment", note);
    }

    let translation = &message.translation;
    out.push_str("      <translation");
    if let Some(kind) = translation.kind.as_attr() {
        let _ = write!(out, " type=\"{}\"", kind);
    }
    let has_variants = !message.numerus && !translation.length_variants.is_empty();
    if has_variants {
        out.push_str(" variants=\"yes\"");
    }
    out.push('>');
    if has_variants {
        out.push('\n');
        for variant in &translation.length_variants {
            let _ = writeln!(
                out,
                "        <lengthvariant>{}</lengthvariant>",
                partial_escape(variant.as_str())
            );
        }
        out.push_str("      ");
    } else if message.numerus {
        out.push('\n');
        for form in &translation.numerus_forms {
            let _ = writeln!(
                out,
                "        <numerusform>{}</numerusform>",
                partial_escape(form.as_str())
            );
        }
        out.push_str("      ");
    } else {
        out.push_str(&partial_escape(translation.text.as_str()));
    }
    out.push_str("</translation>\n");

    out.push_str("    </message>\n");
}

fn write_text_element(out: &mut String, tag: &str, text: &str) {
    let _ = writeln!(out, "      <{tag}>{}</{tag}>", partial_escape(text));
}
