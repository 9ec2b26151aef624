//! # Poolpass Architecture
//!
//! Poolpass is a **UI-agnostic passport tracker** for a fixed catalog of pools.
//! It is a library that happens to have a CLI client: the same core could sit
//! behind a web page, a TUI or a phone app.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns store, catalog, clock and the session               │
//! │  - Parses selectors, dispatches to commands                 │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - read → mutate → persist → recompute, one call at a time  │
//! │  - Turns recovered storage failures into warnings           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (visited.rs, views.rs, date.rs)   Storage (store/)    │
//! │  - Pure record and view logic           - KvBackend trait   │
//! │                                         - Fs / Mem backends │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Failure Model
//!
//! Nothing about storage is fatal. A substrate that cannot be read yields an
//! empty passport; one that cannot be written leaves the session working in
//! memory. Such failures come back as values ([`error::Recovered`]) and the
//! command layer turns them into warning messages.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: One module per operation
//! - [`session`]: The per-process session state
//! - [`visited`]: Record normalization, toggling and counting
//! - [`views`]: Summary, stamp ordering and pagination
//! - [`date`]: Store, display and sort-key date forms; the clock
//! - [`catalog`]: The pool list
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Pool`, `VisitedRecord`, `VisitedSet`)
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod date;
pub mod error;
pub mod model;
pub mod session;
pub mod store;
pub mod views;
pub mod visited;
