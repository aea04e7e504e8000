//! # awsid Architecture
//!
//! awsid resolves an AWS account alias to its account id. It answers from a local cache
//! file which it tries to refresh from AWS Organizations on every run. A failed refresh
//! only produces a warning, and the answer then comes from whatever is already on disk.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, resolves format/sort flags, prints     │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the immutable config and the account directory      │
//! │  - refresh / load / lookup / list                           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs) + query.rs                   │
//! │  - Search, exact-match precedence, sorting                  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage / Remote (cache.rs, directory/)                    │
//! │  - Cache file reader/writer, AccountDirectory trait         │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Control flow
//!
//! refresh (best effort) → read cache → search or list → sort → render → print.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: refresh, lookup and list
//! - [`model`]: The canonical [`model::Account`] and the legacy/extended row shapes
//! - [`cache`]: Reading and rewriting the cache file
//! - [`directory`]: Remote account listing (`aws` CLI, in-memory)
//! - [`query`]: Search and sort
//! - [`options`]: Output format and sort flag resolution
//! - [`render`]: json / table / csv / default output
//! - [`config`]: Startup configuration
//! - [`error`]: Error types

pub mod api;
pub mod cache;
pub mod commands;
pub mod config;
pub mod directory;
pub mod error;
pub mod model;
pub mod options;
pub mod query;
pub mod render;
