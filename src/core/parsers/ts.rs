use std::{fs, mem, path::Path};

use anyhow::{Context as _, Result, anyhow, bail};
use quick_xml::{
    Reader,
    events::{BytesStart, Event},
};

use crate::core::{Catalog, Context, Location, Message, TranslationKind};

/// How many leading bytes are inspected by [`looks_like_ts_catalog`].
const SNIFF_LEN: usize = 512;

const UTF8_BOM: char = '\u{feff}';

/// Parse a catalog file from disk.
pub fn parse_ts_file(path: &Path) -> Result<Catalog> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog file: {:?}", path))?;
    parse_ts_str(&content).with_context(|| format!("Failed to parse catalog file: {:?}", path))
}

/// Parse catalog XML content.
///
/// Text content is kept verbatim (no trimming) after entity decoding, so
/// embedded markup and newlines in source strings survive a round trip.
pub fn parse_ts_str(content: &str) -> Result<Catalog> {
    let content = content.strip_prefix(UTF8_BOM).unwrap_or(content);
    let line_index = build_line_index(content);

    let mut reader = Reader::from_str(content);
    reader.config_mut().trim_text(false);

    let mut parser = CatalogParser::default();

    loop {
        let offset = reader.buffer_position() as usize;
        let line = offset_to_line(&line_index, offset);

        let event = match reader.read_event() {
            Ok(event) => event,
            Err(e) => bail!("XML error at line {}: {}", line, e),
        };

        match event {
            Event::Start(e) => parser.start(&e, line)?,
            Event::Empty(e) => {
                parser.start(&e, line)?;
                parser.end(e.name().as_ref(), line)?;
            }
            Event::End(e) => parser.end(e.name().as_ref(), line)?,
            Event::Text(e) => {
                if parser.field.is_some() {
                    let text = e
                        .unescape()
                        .map_err(|e| anyhow!("Invalid text at line {}: {}", line, e))?;
                    parser.text.push_str(&text);
                }
            }
            Event::CData(e) => {
                if parser.field.is_some() {
                    parser.text.push_str(&String::from_utf8_lossy(&e));
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    parser.finish()
}

/// Check whether file content is a Qt Linguist catalog.
///
/// The `.ts` extension is shared with TypeScript, so the extension alone is
/// not enough.
pub fn looks_like_ts_catalog(bytes: &[u8]) -> bool {
    let head = &bytes[..bytes.len().min(SNIFF_LEN)];
    let head = String::from_utf8_lossy(head);
    let head = head.trim_start_matches(UTF8_BOM).trim_start();
    head.starts_with("<?xml") || head.starts_with("<!DOCTYPE TS") || head.starts_with("<TS")
}

/// Element whose text content is being collected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    ContextName,
    Source,
    Comment,
    ExtraComment,
    TranslatorComment,
    Translation,
    NumerusForm,
    LengthVariant,
}

#[derive(Default)]
struct CatalogParser {
    catalog: Catalog,
    seen_root: bool,
    context: Option<Context>,
    message: Option<Message>,
    field: Option<Field>,
    text: String,
}

impl CatalogParser {
    fn start(&mut self, e: &BytesStart<'_>, line: usize) -> Result<()> {
        match e.name().as_ref() {
            b"TS" => {
                self.seen_root = true;
                if let Some(version) = attr(e, line, "version")? {
                    self.catalog.version = version;
                }
                self.catalog.language = attr(e, line, "language")?.filter(|v| !v.is_empty());
                self.catalog.source_language =
                    attr(e, line, "sourcelanguage")?.filter(|v| !v.is_empty());
            }
            b"context" => {
                if self.context.is_some() {
                    bail!("Nested <context> at line {}", line);
                }
                self.context = Some(Context {
                    line,
                    ..Default::default()
                });
            }
            b"name" => {
                if self.context.is_some() && self.message.is_none() {
                    self.begin_field(Field::ContextName);
                }
            }
            b"message" => {
                if self.context.is_none() {
                    bail!("<message> outside of <context> at line {}", line);
                }
                self.message = Some(Message {
                    numerus: attr(e, line, "numerus")?.as_deref() == Some("yes"),
                    line,
                    ..Default::default()
                });
            }
            b"location" => {
                if let Some(message) = self.message.as_mut() {
                    message.locations.push(Location {
                        filename: attr(e, line, "filename")?,
                        line: attr(e, line, "line")?.and_then(|v| v.trim().parse().ok()),
                    });
                }
            }
            b"source" => self.begin_field(Field::Source),
            b"comment" => self.begin_field(Field::Comment),
            b"extracomment" => self.begin_field(Field::ExtraComment),
            b"translatorcomment" => self.begin_field(Field::TranslatorComment),
            b"translation" => {
                if let Some(message) = self.message.as_mut() {
                    message.translation.kind =
                        TranslationKind::from_attr(attr(e, line, "type")?.as_deref());
                    self.begin_field(Field::Translation);
                }
            }
            b"numerusform" => self.begin_field(Field::NumerusForm),
            // Variants inside a numerus form stay part of that form's text.
            b"lengthvariant" if self.field == Some(Field::Translation) => {
                self.begin_field(Field::LengthVariant)
            }
            _ => {}
        }
        Ok(())
    }

    fn end(&mut self, name: &[u8], line: usize) -> Result<()> {
        match name {
            b"context" => {
                if let Some(context) = self.context.take() {
                    self.catalog.contexts.push(context);
                }
            }
            b"message" => {
                if let (Some(context), Some(message)) = (self.context.as_mut(), self.message.take())
                {
                    context.messages.push(message);
                }
            }
            b"name" if self.field == Some(Field::ContextName) => {
                let text = self.take_text();
                if let Some(context) = self.context.as_mut() {
                    context.name = text;
                }
            }
            b"source" => {
                let text = self.take_text();
                if let Some(message) = self.message.as_mut() {
                    message.source = text;
                }
            }
            b"comment" => {
                let text = self.take_text();
                if let Some(message) = self.message.as_mut() {
                    message.comment = Some(text);
                }
            }
            b"extracomment" => {
                let text = self.take_text();
                if let Some(message) = self.message.as_mut() {
                    message.extra_comment = Some(text);
                }
            }
            b"translatorcomment" => {
                let text = self.take_text();
                if let Some(message) = self.message.as_mut() {
                    message.translator_comment = Some(text);
                }
            }
            b"numerusform" => {
                let text = self.take_text();
                if let Some(message) = self.message.as_mut() {
                    message.translation.numerus_forms.push(text);
                }
                // Back inside <translation>; whitespace between forms is dropped.
                self.begin_field(Field::Translation);
            }
            b"lengthvariant" if self.field == Some(Field::LengthVariant) => {
                let text = self.take_text();
                if let Some(message) = self.message.as_mut() {
                    message.translation.length_variants.push(text);
                }
                self.begin_field(Field::Translation);
            }
            b"translation" => {
                let text = self.take_text();
                if let Some(message) = self.message.as_mut()
                    && !message.numerus
                {
                    let translation = &mut message.translation;
                    translation.text = match translation.length_variants.first() {
                        Some(longest) => longest.clone(),
                        None => text,
                    };
                }
            }
            b"TS" => {
                if self.context.is_some() {
                    bail!("Unclosed <context> before </TS> at line {}", line);
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn begin_field(&mut self, field: Field) {
        self.field = Some(field);
        self.text.clear();
    }

    fn take_text(&mut self) -> String {
        self.field = None;
        mem::take(&mut self.text)
    }

    fn finish(self) -> Result<Catalog> {
        if !self.seen_root {
            bail!("Missing <TS> root element");
        }
        if self.context.is_some() {
            bail!("Unexpected end of file inside <context>");
        }
        Ok(self.catalog)
    }
}

fn attr(e: &BytesStart<'_>, line: usize, name: &str) -> Result<Option<String>> {
    let invalid = |err: &dyn std::fmt::Display| {
        anyhow!("Invalid attribute '{}' at line {}: {}", name, line, err)
    };
    match e.try_get_attribute(name).map_err(|err| invalid(&err))? {
        Some(a) => Ok(Some(a.unescape_value().map_err(|err| invalid(&err))?.into_owned())),
        None => Ok(None),
    }
}

/// Build an index of line start byte offsets for O(log n) line lookups.
fn build_line_index(content: &str) -> Vec<usize> {
    let mut offsets = vec![0];
    for (i, b) in content.bytes().enumerate() {
        if b == b'\n' {
            offsets.push(i + 1);
        }
    }
    offsets
}

/// Find line number for a byte offset using binary search.
///
/// Returns 1-based line number.
fn offset_to_line(line_index: &[usize], offset: usize) -> usize {
    match line_index.binary_search(&offset) {
        Ok(line) => line + 1,
        Err(line) => line,
    }
}
