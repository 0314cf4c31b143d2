//! Helper functions shared by rule implementations.

use crate::core::{Context, Message, MessageContext, MessageLocation};

/// Diagnostic context for a message: where it is in the catalog and what it says.
pub fn message_context(file_path: &str, context: &Context, message: &Message) -> MessageContext {
    MessageContext::new(
        MessageLocation::with_line(file_path, message.line),
        &context.name,
        &message.source,
        message.comment.clone(),
    )
}
