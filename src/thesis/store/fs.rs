use super::ReportSource;
use crate::error::{Result, ThesisError};
use std::fs;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Documents are addressed by bare filename; anything that would leave the
    /// data directory is treated as absent.
    fn resolve(&self, filename: &str) -> Option<PathBuf> {
        let mut components = Path::new(filename).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(_)), None) => Some(self.root.join(filename)),
            _ => None,
        }
    }
}

impl ReportSource for DirSource {
    fn entry_names(&self) -> Result<Option<Vec<String>>> {
        if !self.root.exists() {
            log::debug!("data directory {} does not exist", self.root.display());
            return Ok(None);
        }

        let mut names = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            if entry.file_type()?.is_dir() {
                continue;
            }
            match entry.file_name().into_string() {
                Ok(name) => names.push(name),
                Err(raw) => log::debug!("skipping non UTF-8 entry {:?}", raw),
            }
        }
        Ok(Some(names))
    }

    fn read_document(&self, filename: &str) -> Result<String> {
        let path = self
            .resolve(filename)
            .ok_or_else(|| ThesisError::ReportNotFound(filename.to_string()))?;

        fs::read_to_string(&path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => ThesisError::ReportNotFound(filename.to_string()),
            _ => ThesisError::Io(e),
        })
    }

    fn document_path(&self, filename: &str) -> PathBuf {
        self.root.join(filename)
    }

    fn root(&self) -> PathBuf {
        self.root.clone()
    }
}
