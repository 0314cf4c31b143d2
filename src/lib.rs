//! tsling - Qt Linguist translation catalog toolkit
//!
//! tsling is a CLI tool and library for working with Qt Linguist `.ts`
//! translation catalogs. It parses and writes catalogs, serves runtime
//! lookups by (context, source, comment) with source-text fallback, validates
//! catalogs, merges freshly extracted templates and exports to JSON or PO.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (user-facing commands and reports)
//! - `config`: Configuration file loading and parsing
//! - `core`: Catalog model, parser, writer, translator, merge and export
//! - `issues`: Issue type definitions and reporting
//! - `mcp`: Model Context Protocol server implementation
//! - `rules`: Validation rules over parsed catalogs
//! - `utils`: Shared utility functions

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
pub mod mcp;
pub mod rules;
pub mod utils;
