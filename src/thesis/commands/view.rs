use crate::commands::{CmdResult, ViewedReport};
use crate::error::Result;
use crate::index::ReportSelector;
use crate::report::InvestmentReport;
use crate::store::ReportSource;

use super::helpers::{find_report, no_reports_messages, scan_reports};

/// Loads and parses one report.
///
/// With no selector the configured default report is shown when it is listed,
/// otherwise the first report of the listing.
pub fn run<S: ReportSource>(
    source: &S,
    selector: Option<&ReportSelector>,
    default_report: &str,
) -> Result<CmdResult> {
    let filename = match selector {
        // Filenames are read directly, they need not match a classification.
        Some(ReportSelector::Filename(name)) => name.clone(),
        Some(index) => {
            let reports = scan_reports(source)?;
            find_report(&reports, index)?.filename.clone()
        }
        None => {
            let reports = scan_reports(source)?;
            let chosen = reports
                .iter()
                .find(|r| r.filename == default_report)
                .or_else(|| reports.first());
            match chosen {
                Some(report) => report.filename.clone(),
                None => {
                    let mut result = CmdResult::default();
                    for message in no_reports_messages(&source.root()) {
                        result.add_message(message);
                    }
                    return Ok(result);
                }
            }
        }
    };

    log::debug!("loading report {}", filename);
    let raw = source.read_document(&filename)?;
    let report = InvestmentReport::from_json(&raw)?;

    Ok(CmdResult::default().with_viewed(ViewedReport {
        path: source.document_path(&filename),
        filename,
        report,
    }))
}
