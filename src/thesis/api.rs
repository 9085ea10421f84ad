//! # API Facade
//!
//! The API layer is a thin facade over the command layer and the single entry point
//! for every thesis operation, whatever UI sits on top of it.
//!
//! It dispatches to `commands/*.rs`, turns raw user input (selectors) into typed
//! values, and returns structured results. It does no terminal I/O and no formatting.
//!
//! ## The Listing Response
//!
//! [`ThesisApi::listing_response`] is the data contract the listing endpoint serves:
//!
//! ```text
//! 200  {"files": [FileMetadata, ...]}     sorted, possibly empty
//! 500  {"error": "Failed to read files"}  enumeration failed
//! ```
//!
//! A data directory that does not exist is an empty listing, not a failure. The
//! underlying cause of a failure is logged and never sent to the client.
//!
//! ## Generic Over ReportSource
//!
//! `ThesisApi<S: ReportSource>` runs on `DirSource` in production and on
//! `MemorySource` in tests.

use crate::commands;
use crate::error::{Result, ThesisError};
use crate::index::ReportSelector;
use crate::model::FileMetadata;
use crate::store::ReportSource;
use serde::{Deserialize, Serialize};

pub const LISTING_FAILED: &str = "Failed to read files";

/// Body of a listing request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ListingResponse {
    Files { files: Vec<FileMetadata> },
    Failed { error: String },
}

impl ListingResponse {
    /// HTTP-style status code of the response.
    pub fn status(&self) -> u16 {
        match self {
            ListingResponse::Files { .. } => 200,
            ListingResponse::Failed { .. } => 500,
        }
    }
}

pub struct ThesisApi<S: ReportSource> {
    source: S,
    paths: commands::ThesisPaths,
    default_report: String,
}

impl<S: ReportSource> ThesisApi<S> {
    pub fn new(source: S, paths: commands::ThesisPaths, default_report: String) -> Self {
        Self {
            source,
            paths,
            default_report,
        }
    }

    pub fn list_reports(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.source)
    }

    pub fn listing_response(&self) -> ListingResponse {
        match commands::list::run(&self.source) {
            Ok(result) => ListingResponse::Files {
                files: result.listed_reports,
            },
            Err(e) => {
                log::error!(
                    "failed to read reports from {}: {}",
                    self.source.root().display(),
                    e
                );
                ListingResponse::Failed {
                    error: LISTING_FAILED.to_string(),
                }
            }
        }
    }

    pub fn view_report(&self, selector: Option<&str>) -> Result<commands::CmdResult> {
        let selector = selector.map(parse_selector).transpose()?;
        commands::view::run(&self.source, selector.as_ref(), &self.default_report)
    }

    pub fn report_paths<I: AsRef<str>>(&self, selectors: &[I]) -> Result<commands::CmdResult> {
        let selectors = selectors
            .iter()
            .map(|s| parse_selector(s.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        commands::paths::run(&self.source, &selectors)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, action)
    }

    pub fn paths(&self) -> &commands::ThesisPaths {
        &self.paths
    }
}

fn parse_selector(input: &str) -> Result<ReportSelector> {
    input.parse().map_err(ThesisError::Selection)
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel, ThesisPaths, ViewedReport};
