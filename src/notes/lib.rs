//! # Notes Architecture
//!
//! `notes` keeps short text records in a single JSON file. The library holds
//! everything except terminal output; the binary parses `std::env::args`,
//! runs the dispatcher, and prints the result.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Prints messages, record blocks and the help page         │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Parsing (registry.rs, parser.rs)                           │
//! │  - Closed option/action vocabulary built once at startup    │
//! │  - Raw arguments → ParsedInvocation                         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Dispatch (dispatch.rs) and Commands (commands/*.rs)        │
//! │  - Action → handler table, fallback to help on failure      │
//! │  - Business logic returning CmdResult, no I/O               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/, codec.rs)                           │
//! │  - RecordStore over a Backend (file, or memory in tests)    │
//! │  - Tagged timestamps and digit keys in the JSON document    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Error Handling
//!
//! Fallible operations return [`error::Result`]. Parse problems are not
//! errors: warnings and diagnostics travel as [`commands::CmdMessage`]s and a
//! failed parse runs the help action. Only registry construction and store
//! I/O produce [`error::NotesError`], which the binary reports before
//! exiting with status 1.
//!
//! ## Module Overview
//!
//! - [`registry`]: option and action tables
//! - [`parser`]: argument parsing state machine
//! - [`dispatch`]: action → handler table and `start`
//! - [`commands`]: one module per action
//! - [`store`]: record store and storage backends
//! - [`codec`]: timestamp tag and key rules of the backing format
//! - [`model`]: `Record` and `Stamp`
//! - [`config`]: environment-driven configuration
//! - [`error`]: error types

pub mod codec;
pub mod commands;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod model;
pub mod parser;
pub mod registry;
pub mod store;
