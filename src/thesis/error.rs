use thiserror::Error;

#[derive(Error, Debug)]
pub enum ThesisError {
    #[error("Report not found: {0}")]
    ReportNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Selection error: {0}")]
    Selection(String),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ThesisError>;
