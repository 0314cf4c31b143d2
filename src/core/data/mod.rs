//! Core data types shared by parsing, validation and lookup.
//!
//! ## Module Structure
//!
//! - `catalog`: The catalog model (Catalog, Context, Message, Location, Translation)
//! - `message`: Diagnostic positions inside catalog files (MessageContext, MessageLocation)

pub mod catalog;
pub mod message;

pub use catalog::{
    Catalog, CatalogCounts, Context, DEFAULT_TS_VERSION, Entry, Location, Message, MessageKey,
    Translation, TranslationKind,
};
pub use message::{MessageContext, MessageLocation};
