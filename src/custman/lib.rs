//! # Custman Architecture
//!
//! Custman is a **UI-agnostic customer record library**. The interactive
//! terminal client in `cli/` is one front end over it, not the application itself.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, prompts, renders output                │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, owns store + capacity         │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Uniqueness, capacity and lookup rules                    │
//! │  - Reports violations as messages, never aborts             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait over an ordered collection               │
//! │  - InMemoryStore                                            │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Records
//!
//! A [`model::Customer`] can only be built from a [`model::NewCustomer`] draft
//! whose name and address pass validation, so the collection never holds a
//! customer with a missing name or address. Regular and premium customers share
//! one struct; the [`model::Tier`] enum carries the premium reward points.
//!
//! ## Key Principle: No I/O in Core
//!
//! From `api.rs` inward, code takes regular Rust arguments, returns
//! `Result<CmdResult>`, and never writes to stdout/stderr. Diagnostics travel
//! back as [`commands::CmdMessage`] values; logging goes through `tracing` and
//! is only collected when a front end installs a subscriber.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Storage abstraction and the in-memory implementation
//! - [`model`]: Core data types (`Customer`, `Tier`, `NewCustomer`)
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
