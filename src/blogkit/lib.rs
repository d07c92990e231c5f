//! # blogkit
//!
//! Maintenance tools for a static blog laid out as `content/post/*.md` plus an
//! `assets/` directory:
//!
//! - **image-url**: rewrite `![alt](path)` references to absolute URLs on the
//!   blog or one of its mirrors.
//! - **migrate**: move posts that declare a `cover` into folder-per-post
//!   bundles, copying the cover next to them.
//! - **detab**: replace tabs with spaces in a text file.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (cli/, wired by main.rs)                               │
//! │  - argument parsing, stdout/stderr, exit codes              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API (api.rs)                                               │
//! │  - resolves configured paths and hosts, dispatches          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Commands (commands/*.rs)                                   │
//! │  - the transformations, returning Result<CmdResult>         │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! From `api.rs` inward nothing writes to stdout/stderr or calls
//! `std::process::exit`. Each tool is a single synchronous pass; errors
//! propagate to the entry point, which reports them and exits non-zero.
//!
//! ## Module Overview
//!
//! - [`api`]: the facade used by the binary
//! - [`commands`]: one module per tool
//! - [`model`]: host targets, front matter, migration records
//! - [`config`]: directories, hosts and tab width, with defaults
//! - [`error`]: error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
