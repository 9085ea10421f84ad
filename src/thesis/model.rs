use serde::{Deserialize, Serialize};

/// Surrogate for a ticker or quarter that the filename does not carry.
pub const NOT_AVAILABLE: &str = "N/A";
/// Surrogate for a report without an analyst segment.
pub const UNKNOWN_ANALYST: &str = "Unknown";

/// One entry of a report listing.
///
/// `filename` is the unique key. `quarter` and `year` always come from the same
/// match, so either both are set or both hold their surrogates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileMetadata {
    pub name: String,
    pub filename: String,
    pub ticker: String,
    pub quarter: String,
    pub year: Option<i32>,
    pub analyst: String,
    pub path: String,
}

/// The fiscal period a structured filename refers to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Period {
    /// Quarter digits exactly as written in the filename.
    pub quarter: String,
    pub year: i32,
}

impl Period {
    pub fn quarter_label(&self) -> String {
        format!("Q{}", self.quarter)
    }
}

/// How a report filename was understood.
///
/// Every variant converges on the same [`FileMetadata`] shape through
/// [`FilenameClass::into_metadata`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilenameClass {
    /// `TICKER_Q<n>_<YYYY>_<Analyst_Name>_combined_analysis.json`
    Attributed {
        ticker: String,
        period: Period,
        analyst: String,
    },
    /// `TICKER_Q<n>_<YYYY>_combined_analysis.json`
    Unattributed { ticker: String, period: Period },
    /// Any other report file; carries the display label derived from the name.
    Unclassified { label: String },
}

impl FilenameClass {
    pub fn into_metadata(self, filename: String, path: String) -> FileMetadata {
        match self {
            FilenameClass::Attributed {
                ticker,
                period,
                analyst,
            } => FileMetadata {
                name: format!(
                    "{} {} {} - {}",
                    ticker,
                    period.quarter_label(),
                    period.year,
                    analyst
                ),
                filename,
                quarter: period.quarter_label(),
                year: Some(period.year),
                ticker,
                analyst,
                path,
            },
            FilenameClass::Unattributed { ticker, period } => FileMetadata {
                name: format!("{} {} {}", ticker, period.quarter_label(), period.year),
                filename,
                quarter: period.quarter_label(),
                year: Some(period.year),
                ticker,
                analyst: UNKNOWN_ANALYST.to_string(),
                path,
            },
            FilenameClass::Unclassified { label } => FileMetadata {
                name: label,
                filename,
                ticker: NOT_AVAILABLE.to_string(),
                quarter: NOT_AVAILABLE.to_string(),
                year: None,
                analyst: UNKNOWN_ANALYST.to_string(),
                path,
            },
        }
    }
}
