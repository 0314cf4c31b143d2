//! Core catalog engine: data model, TS reader/writer, lookups and transforms.
//!
//! ## Module Structure
//!
//! - `data`: Catalog data model and diagnostic locations
//! - `parsers`: Qt Linguist TS reader
//! - `writer`: Qt Linguist TS writer (lupdate layout)
//! - `translator`: Runtime lookup with source-text fallback
//! - `plural`: Plural form selection for numerus messages
//! - `merge`: Merging extracted templates into translated catalogs
//! - `export`: One-way export to JSON and gettext PO
//! - `file_scanner` / `context`: Catalog discovery and lazy loading

pub mod context;
pub mod data;
pub mod export;
pub mod file_scanner;
pub mod merge;
pub mod parsers;
pub mod plural;
pub mod translator;
pub mod writer;

pub use context::{AllCatalogs, CheckContext};
pub use data::*;
