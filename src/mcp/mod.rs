//! Model Context Protocol (MCP) server implementation.
//!
//! This module provides an MCP server that exposes tsling functionality to AI assistants.
//! The server implements the MCP specification for tool calling over stdio.
//!
//! ## Module Structure
//!
//! - `helpers`: Context construction, pagination and result serialization
//! - `server`: Main MCP server implementation
//! - `types`: MCP-specific parameter and result types

mod helpers;
mod server;
pub mod types;

pub use server::{TslingMcpServer, run_server};
