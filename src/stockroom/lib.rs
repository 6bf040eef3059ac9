//! # Stockroom Architecture
//!
//! Stockroom is a **UI-agnostic inventory library**. The `stockroom` binary is
//! one client of it; a web or desktop front-end could drive the same API.
//!
//! ## Layers
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
//! │  - Thin facade over commands                                │
//! │  - Normalizes inputs (indexes / ids → selectors)            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Per-operation orchestration and user-facing messages     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Store Layer (store/)                                       │
//! │  - ProductStore: validation, invariants, queries, stats     │
//! │  - StorageBackend: FsBackend (production), MemBackend (test)│
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Store Rules
//!
//! - Names are trimmed, at least 2 characters, unique ignoring case.
//! - Quantities are never negative.
//! - The full list is written back after every mutation; a failed write
//!   leaves the in-memory list untouched.
//! - Unreadable or corrupt storage loads as an empty store.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: One module per operation
//! - [`store`]: `ProductStore`, backends and the export snapshot
//! - [`model`]: `Product`, `ProductDraft`, `StockStatus`, `Stats`
//! - [`validation`]: Candidate validation
//! - [`index`]: Display indexes and product selectors
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod index;
pub mod model;
pub mod store;
pub mod validation;
