use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::ReportSource;

use super::helpers::scan_reports;

pub fn run<S: ReportSource>(source: &S) -> Result<CmdResult> {
    let reports = scan_reports(source)?;
    Ok(CmdResult::default().with_listed_reports(reports))
}
