use crate::commands::CmdResult;
use crate::error::Result;
use crate::index::ReportSelector;
use crate::store::ReportSource;

use super::helpers::{find_report, scan_reports};

pub fn run<S: ReportSource>(source: &S, selectors: &[ReportSelector]) -> Result<CmdResult> {
    let reports = scan_reports(source)?;
    let mut paths = Vec::with_capacity(selectors.len());

    for selector in selectors {
        let report = find_report(&reports, selector)?;
        paths.push(source.document_path(&report.filename));
    }

    Ok(CmdResult::default().with_report_paths(paths))
}
