//! Rule implementations for tsling.
//!
//! Each rule is a pure function over one parsed catalog (plus the config
//! where a rule needs it) returning its specific issue type.
//!
//! ## Module Structure
//!
//! - `helpers`: Shared utility functions (diagnostic contexts)
//! - `empty_source`: Messages without source text
//! - `incomplete_location`: Location hints without file or line
//! - `unfinished_mismatch`: Unfinished translations that diverge from the source
//! - `duplicate_message`: Repeated (context, source, comment) keys
//! - `placeholder_mismatch`: `%1`/`%n` placeholders lost or added in translation
//! - `untranslated`: Finished translations identical to the source
//! - `empty_translation`: Finished translations with no text

pub mod duplicate_message;
pub mod empty_source;
pub mod empty_translation;
pub mod helpers;
pub mod incomplete_location;
pub mod placeholder_mismatch;
pub mod unfinished_mismatch;
pub mod untranslated;

use crate::{config::Config, core::Catalog, issues::{Issue, Rule}};

use self::{
    duplicate_message::check_duplicate_message, empty_source::check_empty_source,
    empty_translation::check_empty_translation, incomplete_location::check_incomplete_location,
    placeholder_mismatch::check_placeholder_mismatch,
    unfinished_mismatch::check_unfinished_mismatch, untranslated::check_untranslated,
};

/// Run the given rules over one catalog.
///
/// `Rule::ParseError` is ignored here: parse errors come from loading, not from
/// validating a catalog.
pub fn check_catalog(
    file_path: &str,
    catalog: &Catalog,
    config: &Config,
    rules: &[Rule],
) -> Vec<Issue> {
    let mut issues = Vec::new();

    for rule in rules {
        match rule {
            Rule::EmptySource => issues.extend(
                check_empty_source(file_path, catalog)
                    .into_iter()
                    .map(Issue::EmptySource),
            ),
            Rule::IncompleteLocation => issues.extend(
                check_incomplete_location(file_path, catalog)
                    .into_iter()
                    .map(Issue::IncompleteLocation),
            ),
            Rule::UnfinishedMismatch => issues.extend(
                check_unfinished_mismatch(file_path, catalog)
                    .into_iter()
                    .map(Issue::UnfinishedMismatch),
            ),
            Rule::DuplicateMessage => issues.extend(
                check_duplicate_message(file_path, catalog)
                    .into_iter()
                    .map(Issue::DuplicateMessage),
            ),
            Rule::PlaceholderMismatch => issues.extend(
                check_placeholder_mismatch(file_path, catalog)
                    .into_iter()
                    .map(Issue::PlaceholderMismatch),
            ),
            Rule::Untranslated => issues.extend(
                check_untranslated(file_path, catalog, config)
                    .into_iter()
                    .map(Issue::Untranslated),
            ),
            Rule::EmptyTranslation => issues.extend(
                check_empty_translation(file_path, catalog)
                    .into_iter()
                    .map(Issue::EmptyTranslation),
            ),
            Rule::ParseError => {}
        }
    }

    issues
}
