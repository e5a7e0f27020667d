//! # Roster Architecture
//!
//! Roster keeps student records (id, name, programme, date of birth, CGPA) in a
//! flat comma-delimited text file. The library holds the whole record pipeline;
//! the binary is a thin shell that reads input and prints results.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Interactive menu and scriptable subcommands              │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the in-memory collection and its DataStore          │
//! │  - add / search / delete / update / list_all                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs) + validate.rs                │
//! │  - Validation order, mutation, persist-after-mutation       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait                                          │
//! │  - FileStore (flat file), InMemoryStore (testing)           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Persistence
//!
//! The collection is loaded once when [`api::RosterApi::open`] is called and
//! the whole file is rewritten after every successful add, delete or update.
//! There is no atomic rename: a crash mid-write can truncate the file, and a
//! failed write leaves memory ahead of disk (reported as
//! [`error::RosterError::Unsaved`]).
//!
//! ## Module Overview
//!
//! - [`api`]: The record store facade
//! - [`commands`]: Logic for each operation
//! - [`validate`]: Field checks
//! - [`store`]: Storage abstraction, the flat-file serializer and the test store
//! - [`model`]: `StudentRecord` and `Programme`
//! - [`config`]: `config.json` handling and the programme policy
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
pub mod validate;
