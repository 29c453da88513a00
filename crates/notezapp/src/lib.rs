//! # Notez Architecture
//!
//! Notez is a **UI-agnostic note keeper library**. The interactive terminal
//! client in the `notez` crate is one consumer; anything that can call Rust
//! functions and render a `CmdResult` could be another.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Presentation (the notez binary)                            │
//! │  - Prompts, parses session commands, renders lists          │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, owns the store                │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One module per user intent                               │
//! │  - Validates input, resolves 1-based positions, builds      │
//! │    messages; no I/O assumptions whatsoever                  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Store (store.rs)                                           │
//! │  - The ordered note sequence: single source of truth        │
//! │  - Explicit JSON save/load, observer notifications          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Positions, not ids
//!
//! Notes have no identity beyond where they sit in the sequence. The command
//! layer speaks 1-based positions (what a user sees on screen) and resolves
//! them to the store's 0-based indices. Positions shift when earlier notes
//! are deleted; displayed numbers are always current-store numbers, even in
//! filtered listings.
//!
//! ## Observers
//!
//! The store notifies registered callbacks after every successful mutation.
//! Presentation layers use this to re-render their list instead of tracking
//! what changed; see [`store::NoteStore::observe`].
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`store`]: The note store and observer registry
//! - [`model`]: The `Note` record
//! - [`config`]: Settings file management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
