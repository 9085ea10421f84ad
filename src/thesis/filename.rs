//! Filename classification for report documents.
//!
//! Only the name is inspected, never the content. Patterns are tried in
//! priority order and the first match wins:
//!
//! 1. `TICKER_Q<n>_<YYYY>_<Analyst_Name>_combined_analysis.json`
//! 2. `TICKER_Q<n>_<YYYY>_combined_analysis.json`
//! 3. anything else ending in `.json`
//!
//! Names without the report extension are not reports at all.

use crate::model::{FilenameClass, Period};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

pub const REPORT_EXTENSION: &str = ".json";

static ATTRIBUTED: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([A-Z]+)_Q(\d+)_(\d{4})_(.+)_combined_analysis\.json$")
        .expect("attributed report pattern is valid")
});

static UNATTRIBUTED: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([A-Z]+)_Q(\d+)_(\d{4})_combined_analysis\.json$")
        .expect("unattributed report pattern is valid")
});

pub fn is_report_file(filename: &str) -> bool {
    filename.ends_with(REPORT_EXTENSION)
}

/// Classifies a filename, or returns `None` when it is not a report file.
pub fn classify(filename: &str) -> Option<FilenameClass> {
    if !is_report_file(filename) {
        return None;
    }

    if let Some(caps) = ATTRIBUTED.captures(filename) {
        if let Some(period) = period_from(&caps) {
            return Some(FilenameClass::Attributed {
                ticker: caps[1].to_string(),
                period,
                analyst: caps[4].replace('_', " "),
            });
        }
    }

    if let Some(caps) = UNATTRIBUTED.captures(filename) {
        if let Some(period) = period_from(&caps) {
            return Some(FilenameClass::Unattributed {
                ticker: caps[1].to_string(),
                period,
            });
        }
    }

    Some(FilenameClass::Unclassified {
        label: fallback_label(filename),
    })
}

/// Display label for a name that matches no structured pattern: the first
/// extension occurrence removed and underscores turned into spaces.
pub fn fallback_label(filename: &str) -> String {
    filename.replacen(REPORT_EXTENSION, "", 1).replace('_', " ")
}

fn period_from(caps: &Captures<'_>) -> Option<Period> {
    // Four ASCII digits always fit, the check only keeps this free of panics.
    let year = caps[3].parse().ok()?;
    Some(Period {
        quarter: caps[2].to_string(),
        year,
    })
}
