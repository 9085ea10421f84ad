//! # Storage Layer
//!
//! Report documents are produced by an upstream process and dropped into a data
//! directory. This crate never writes them; it only enumerates names and reads
//! one document at a time. [`ReportSource`] is that read-only view.
//!
//! ## Implementations
//!
//! - [`fs::DirSource`]: a directory on disk (production)
//! - [`memory::MemorySource`]: a fixed set of documents (testing), which can also
//!   simulate an absent directory or a failing one
//!
//! Listing only needs names, so [`ReportSource::entry_names`] never touches file
//! contents.

use crate::error::Result;
use std::path::PathBuf;

pub mod fs;
pub mod memory;

pub trait ReportSource {
    /// Names of the file entries in the source, in no particular order.
    ///
    /// Returns `Ok(None)` when the source directory does not exist.
    fn entry_names(&self) -> Result<Option<Vec<String>>>;

    /// Reads the raw text of one document.
    fn read_document(&self, filename: &str) -> Result<String>;

    /// The location a listing hands out for a document.
    fn document_path(&self, filename: &str) -> PathBuf;

    /// The directory this source reads from.
    fn root(&self) -> PathBuf;
}
