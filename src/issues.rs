//! Issue types for catalog validation results.
//!
//! Each issue is self-contained with everything the reporters (CLI, MCP)
//! need to display it: the catalog file and line, the message it concerns,
//! and rule-specific details.

use enum_dispatch::enum_dispatch;

use crate::{core::MessageContext, utils::truncate_for_display};

/// Longest source text shown in an issue headline.
const MAX_MESSAGE_CHARS: usize = 60;

// ============================================================
// Severity and Rule
// ============================================================

/// Severity level of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Rule identifier for each issue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rule {
    EmptySource,
    IncompleteLocation,
    UnfinishedMismatch,
    DuplicateMessage,
    PlaceholderMismatch,
    Untranslated,
    EmptyTranslation,
    ParseError,
}

impl Rule {
    /// Rules that validate parsed catalogs (everything except `parse-error`).
    pub const CHECKS: [Rule; 7] = [
        Rule::EmptySource,
        Rule::IncompleteLocation,
        Rule::UnfinishedMismatch,
        Rule::DuplicateMessage,
        Rule::PlaceholderMismatch,
        Rule::Untranslated,
        Rule::EmptyTranslation,
    ];

    /// Look up a rule by its kebab-case name.
    pub fn from_name(name: &str) -> Option<Rule> {
        Self::CHECKS
            .into_iter()
            .chain([Rule::ParseError])
            .find(|rule| rule.to_string() == name)
    }
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::EmptySource => write!(f, "empty-source"),
            Rule::IncompleteLocation => write!(f, "incomplete-location"),
            Rule::UnfinishedMismatch => write!(f, "unfinished-mismatch"),
            Rule::DuplicateMessage => write!(f, "duplicate-message"),
            Rule::PlaceholderMismatch => write!(f, "placeholder-mismatch"),
            Rule::Untranslated => write!(f, "untranslated"),
            Rule::EmptyTranslation => write!(f, "empty-translation"),
            Rule::ParseError => write!(f, "parse-error"),
        }
    }
}

// ============================================================
// Issue Types - Catalog Messages (MessageContext)
// ============================================================

/// Message without source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptySourceIssue {
    pub context: MessageContext,
}

impl EmptySourceIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::EmptySource
    }
}

/// `<location>` missing its file name or a numeric line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncompleteLocationIssue {
    pub context: MessageContext,
    pub filename: Option<String>,
    pub line: Option<usize>,
}

impl IncompleteLocationIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::IncompleteLocation
    }
}

/// Unfinished translation whose text is neither empty nor the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnfinishedMismatchIssue {
    pub context: MessageContext,
    /// The unexpected translation text.
    pub translation: String,
}

impl UnfinishedMismatchIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::UnfinishedMismatch
    }
}

/// Second (or later) message with an already seen (context, source, comment) key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateMessageIssue {
    pub context: MessageContext,
    /// Line of the first message with the same key.
    pub first_line: usize,
}

impl DuplicateMessageIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::DuplicateMessage
    }
}

/// Finished translation whose `%1`/`%n` placeholders differ from the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderMismatchIssue {
    pub context: MessageContext,
    pub translation: String,
    /// Placeholders in the source text.
    pub expected: Vec<String>,
    /// Placeholders in the translation.
    pub found: Vec<String>,
}

impl PlaceholderMismatchIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::PlaceholderMismatch
    }
}

/// Finished translation identical to the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UntranslatedIssue {
    pub context: MessageContext,
    /// Catalog language (e.g., "id").
    pub language: String,
}

impl UntranslatedIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::Untranslated
    }
}

/// Finished translation with no text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyTranslationIssue {
    pub context: MessageContext,
}

impl EmptyTranslationIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::EmptyTranslation
    }
}

// ============================================================
// Special Issue Types
// ============================================================

/// Catalog file could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseErrorIssue {
    pub file_path: String,
    pub error: String,
}

impl ParseErrorIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::ParseError
    }
}

// ============================================================
// Issue Enum
// ============================================================

/// A catalog issue found during validation.
#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    EmptySource(EmptySourceIssue),
    IncompleteLocation(IncompleteLocationIssue),
    UnfinishedMismatch(UnfinishedMismatchIssue),
    DuplicateMessage(DuplicateMessageIssue),
    PlaceholderMismatch(PlaceholderMismatchIssue),
    Untranslated(UntranslatedIssue),
    EmptyTranslation(EmptyTranslationIssue),
    ParseError(ParseErrorIssue),
}

impl Issue {
    pub fn severity(&self) -> Severity {
        match self {
            Issue::EmptySource(_) => EmptySourceIssue::severity(),
            Issue::IncompleteLocation(_) => IncompleteLocationIssue::severity(),
            Issue::UnfinishedMismatch(_) => UnfinishedMismatchIssue::severity(),
            Issue::DuplicateMessage(_) => DuplicateMessageIssue::severity(),
            Issue::PlaceholderMismatch(_) => PlaceholderMismatchIssue::severity(),
            Issue::Untranslated(_) => UntranslatedIssue::severity(),
            Issue::EmptyTranslation(_) => EmptyTranslationIssue::severity(),
            Issue::ParseError(_) => ParseErrorIssue::severity(),
        }
    }

    pub fn rule(&self) -> Rule {
        match self {
            Issue::EmptySource(_) => EmptySourceIssue::rule(),
            Issue::IncompleteLocation(_) => IncompleteLocationIssue::rule(),
            Issue::UnfinishedMismatch(_) => UnfinishedMismatchIssue::rule(),
            Issue::DuplicateMessage(_) => DuplicateMessageIssue::rule(),
            Issue::PlaceholderMismatch(_) => PlaceholderMismatchIssue::rule(),
            Issue::Untranslated(_) => UntranslatedIssue::rule(),
            Issue::EmptyTranslation(_) => EmptyTranslationIssue::rule(),
            Issue::ParseError(_) => ParseErrorIssue::rule(),
        }
    }
}

// ============================================================
// Report Trait (for CLI output)
// ============================================================

/// Location information for report output.
pub enum ReportLocation<'a> {
    /// A message inside a catalog file.
    Message(&'a MessageContext),
    /// File-level only (for ParseError - no message context).
    File { path: &'a str },
}

impl ReportLocation<'_> {
    pub fn file_path(&self) -> &str {
        match self {
            ReportLocation::Message(ctx) => ctx.file_path(),
            ReportLocation::File { path } => path,
        }
    }

    pub fn line(&self) -> usize {
        match self {
            ReportLocation::Message(ctx) => ctx.line(),
            ReportLocation::File { .. } => 0,
        }
    }

    pub fn col(&self) -> usize {
        match self {
            ReportLocation::Message(ctx) => ctx.col(),
            ReportLocation::File { .. } => 0,
        }
    }
}

/// Trait for types that can be reported to CLI.
///
/// Implemented by all issue types; `enum_dispatch` forwards calls on
/// [`Issue`] without dynamic dispatch.
#[enum_dispatch]
pub trait Report {
    /// Get the location for this issue.
    fn location(&self) -> ReportLocation<'_>;

    /// Primary message to display (source text or parse error).
    fn message(&self) -> String;

    /// Severity level.
    fn report_severity(&self) -> Severity;

    /// Rule identifier.
    fn report_rule(&self) -> Rule;

    /// Optional hint for fixing the issue.
    fn hint(&self) -> Option<&str> {
        None
    }

    /// Optional details for the "= note:" line.
    fn details(&self) -> Option<String> {
        None
    }
}

// ============================================================
// Report Implementations
// ============================================================

/// Headline shared by all message issues: the (shortened) source text.
fn source_message(ctx: &MessageContext) -> String {
    truncate_for_display(&ctx.source, MAX_MESSAGE_CHARS)
}

/// `in context Foo` or `in context Foo (comment: "bar")`.
fn context_note(ctx: &MessageContext) -> String {
    match &ctx.comment {
        Some(comment) => format!("in context {} (comment: \"{}\")", ctx.context_name, comment),
        None => format!("in context {}", ctx.context_name),
    }
}

fn format_placeholders(placeholders: &[String]) -> String {
    if placeholders.is_empty() {
        "none".to_string()
    } else {
        placeholders.join(", ")
    }
}

impl Report for EmptySourceIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        "message has no source text".to_string()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(context_note(&self.context))
    }
}

impl Report for IncompleteLocationIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        source_message(&self.context)
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        let has_file = self.filename.as_deref().is_some_and(|f| !f.is_empty());
        let missing = match (has_file, self.line.is_some()) {
            (false, false) => "file name and line",
            (false, true) => "file name",
            _ => "line number",
        };
        Some(format!("{}: location is missing its {}", context_note(&self.context), missing))
    }
}

impl Report for UnfinishedMismatchIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        source_message(&self.context)
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "{}: unfinished translation (\"{}\") differs from the source",
            context_note(&self.context),
            truncate_for_display(&self.translation, MAX_MESSAGE_CHARS)
        ))
    }

    fn hint(&self) -> Option<&str> {
        Some("finish the translation or reset it to the source text")
    }
}

impl Report for DuplicateMessageIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        source_message(&self.context)
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "{}: first defined at line {}",
            context_note(&self.context),
            self.first_line
        ))
    }
}

impl Report for PlaceholderMismatchIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        source_message(&self.context)
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "{}: expected placeholders {}, translation has {}",
            context_note(&self.context),
            format_placeholders(&self.expected),
            format_placeholders(&self.found)
        ))
    }
}

impl Report for UntranslatedIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        source_message(&self.context)
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "{}: translation is identical to the source in {}",
            context_note(&self.context),
            self.language
        ))
    }

    fn hint(&self) -> Option<&str> {
        Some("add the text to `ignoreTexts` if it should stay untranslated")
    }
}

impl Report for EmptyTranslationIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        source_message(&self.context)
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "{}: translation is marked finished but empty",
            context_note(&self.context)
        ))
    }
}

impl Report for ParseErrorIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::File {
            path: &self.file_path,
        }
    }

    fn message(&self) -> String {
        self.error.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }
}

// ============================================================
// Ordering for Issue (for sorting in reports)
// ============================================================

impl Ord for Issue {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        let (a, b) = (self.location(), other.location());

        // Sort by: file_path, line, col, rule, message
        a.file_path()
            .cmp(b.file_path())
            .then_with(|| a.line().cmp(&b.line()))
            .then_with(|| a.col().cmp(&b.col()))
            .then_with(|| self.rule().cmp(&other.rule()))
            .then_with(|| self.message().cmp(&other.message()))
    }
}

impl PartialOrd for Issue {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ============================================================
// Tests
// ============================================================
