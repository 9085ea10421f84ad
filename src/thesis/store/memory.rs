use super::ReportSource;
use crate::error::{Result, ThesisError};
use std::collections::BTreeMap;
use std::io;
use std::path::PathBuf;

enum State {
    Present(BTreeMap<String, String>),
    Absent,
    Failing(io::ErrorKind),
}

/// In-memory report source for testing.
pub struct MemorySource {
    root: PathBuf,
    state: State,
}

impl Default for MemorySource {
    fn default() -> Self {
        Self::new()
    }
}

impl MemorySource {
    /// An existing, empty data directory.
    pub fn new() -> Self {
        Self {
            root: PathBuf::from("data"),
            state: State::Present(BTreeMap::new()),
        }
    }

    /// A data directory that does not exist.
    pub fn absent() -> Self {
        Self {
            root: PathBuf::from("data"),
            state: State::Absent,
        }
    }

    /// A data directory whose enumeration fails with the given error kind.
    pub fn failing(kind: io::ErrorKind) -> Self {
        Self {
            root: PathBuf::from("data"),
            state: State::Failing(kind),
        }
    }

    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    pub fn with_document(mut self, filename: &str, content: &str) -> Self {
        if let State::Present(files) = &mut self.state {
            files.insert(filename.to_string(), content.to_string());
        }
        self
    }
}

impl ReportSource for MemorySource {
    fn entry_names(&self) -> Result<Option<Vec<String>>> {
        match &self.state {
            State::Present(files) => Ok(Some(files.keys().cloned().collect())),
            State::Absent => Ok(None),
            State::Failing(kind) => Err(ThesisError::Io(io::Error::new(
                *kind,
                "simulated enumeration failure",
            ))),
        }
    }

    fn read_document(&self, filename: &str) -> Result<String> {
        match &self.state {
            State::Present(files) => files
                .get(filename)
                .cloned()
                .ok_or_else(|| ThesisError::ReportNotFound(filename.to_string())),
            State::Absent => Err(ThesisError::ReportNotFound(filename.to_string())),
            State::Failing(kind) => Err(ThesisError::Io(io::Error::new(
                *kind,
                "simulated read failure",
            ))),
        }
    }

    fn document_path(&self, filename: &str) -> PathBuf {
        self.root.join(filename)
    }

    fn root(&self) -> PathBuf {
        self.root.clone()
    }
}
