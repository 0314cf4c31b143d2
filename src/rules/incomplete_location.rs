//! Incomplete location detection rule.
//!
//! Every `<location>` hint must name both a file and a numeric line. A
//! non-numeric `line` attribute parses as no line at all.

use crate::{core::Catalog, issues::IncompleteLocationIssue, rules::helpers::message_context};

pub fn check_incomplete_location(
    file_path: &str,
    catalog: &Catalog,
) -> Vec<IncompleteLocationIssue> {
    let mut issues = Vec::new();

    for entry in catalog.entries() {
        for location in entry.message.locations.iter().filter(|l| !l.is_complete()) {
            issues.push(IncompleteLocationIssue {
                context: message_context(file_path, entry.context, entry.message),
                filename: location.filename.clone(),
                line: location.line,
            });
        }
    }

    issues
}
