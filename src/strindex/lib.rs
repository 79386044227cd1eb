//! # Strindex Architecture
//!
//! Strindex stores text strings, derives properties from them, and answers
//! queries over those properties, either from structured filters or from a
//! short natural-language phrase such as
//! `"all single word palindromic strings longer than 5"`.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Clients (server/, main.rs)                                 │
//! │  - HTTP routing and JSON bodies, CLI arguments and output   │
//! │  - The ONLY places that know about status codes or stdout   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Business logic: ingest, look up, delete, filter, query   │
//! │  - Built on the pure core: analyze, nl, filter              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract DataStore trait, insert-if-absent semantics     │
//! │  - InMemoryStore                                            │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Pure Core
//!
//! [`analyze::analyze`] and [`nl::translate`] are pure functions with no
//! shared state. A natural-language query flows through
//! `translate` → [`filter::FilterSpec::validate`] → [`filter::FilterSpec::evaluate`];
//! the conflict check always runs before any record is looked at.
//!
//! ## Identity
//!
//! A record's id is the SHA-256 of its value with outer whitespace removed.
//! Two values that differ only in outer whitespace are the same record, and
//! ingesting the second one is a conflict.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Storage abstraction and the in-memory backend
//! - [`model`]: Core data types (`AnalyzedRecord`, `StringProperties`)
//! - [`analyze`]: Property analysis
//! - [`filter`]: Filter specifications and their evaluation
//! - [`nl`]: Natural-language query translation
//! - [`config`]: Server configuration
//! - [`server`]: HTTP routes, handlers and error mapping
//! - [`error`]: Error types

pub mod analyze;
pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod filter;
pub mod model;
pub mod nl;
pub mod server;
pub mod store;
