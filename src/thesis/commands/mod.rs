use crate::config::ThesisConfig;
use crate::model::FileMetadata;
use crate::report::InvestmentReport;
use std::path::PathBuf;

pub mod config;
pub mod helpers;
pub mod list;
pub mod paths;
pub mod view;

/// Where configuration lives and where documents are read from.
#[derive(Debug, Clone)]
pub struct ThesisPaths {
    pub config_dir: PathBuf,
    pub data_dir: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// A report that was selected and parsed.
#[derive(Debug, Clone)]
pub struct ViewedReport {
    pub filename: String,
    pub path: PathBuf,
    pub report: InvestmentReport,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub listed_reports: Vec<FileMetadata>,
    pub viewed: Option<ViewedReport>,
    pub report_paths: Vec<PathBuf>,
    pub config: Option<ThesisConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_reports(mut self, reports: Vec<FileMetadata>) -> Self {
        self.listed_reports = reports;
        self
    }

    pub fn with_viewed(mut self, viewed: ViewedReport) -> Self {
        self.viewed = Some(viewed);
        self
    }

    pub fn with_report_paths(mut self, paths: Vec<PathBuf>) -> Self {
        self.report_paths = paths;
        self
    }

    pub fn with_config(mut self, config: ThesisConfig) -> Self {
        self.config = Some(config);
        self
    }
}
