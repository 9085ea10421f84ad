//! # Thesis Architecture
//!
//! Thesis browses investment-thesis reports that an upstream pipeline writes as JSON
//! documents into a data directory. It lists them in a predictable order, serves the
//! listing as a `{files}` / `{error}` response, and presents a single report as a
//! sectioned document. It never writes reports.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders templates, exit codes          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Parses selectors, dispatches, builds ListingResponse     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Scan, classify, sort, select, parse                      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - ReportSource trait: DirSource, MemorySource              │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! From `api.rs` inward nothing writes to stdout or stderr and nothing exits the
//! process. Presentation helpers ([`document`], [`format`]) produce display-ready
//! values but no layout.
//!
//! ## Listing Pipeline
//!
//! 1. enumerate entry names ([`store::ReportSource::entry_names`])
//! 2. keep names ending in `.json` and classify them ([`filename::classify`])
//! 3. converge every class onto one [`model::FileMetadata`] record
//! 4. sort newest period first ([`index::sort_reports`])
//!
//! Listings are recomputed on every request; nothing is cached.
//!
//! ## Module Overview
//!
//! - [`api`]: the facade and the listing response
//! - [`commands`]: list, view, path and config
//! - [`store`]: read-only access to report documents
//! - [`model`]: listing records and filename classes
//! - [`filename`]: filename classification
//! - [`index`]: listing order and selectors
//! - [`report`]: the report document schema
//! - [`document`]: the presented thesis document
//! - [`format`]: figure and date formatting
//! - [`config`]: configuration file
//! - [`init`]: context resolution
//! - [`error`]: error types

pub mod api;
pub mod commands;
pub mod config;
pub mod document;
pub mod error;
pub mod filename;
pub mod format;
pub mod index;
pub mod init;
pub mod model;
pub mod report;
pub mod store;
