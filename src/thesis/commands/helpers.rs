use crate::commands::CmdMessage;
use crate::error::{Result, ThesisError};
use crate::filename::classify;
use crate::index::{sort_reports, ReportSelector};
use crate::model::FileMetadata;
use crate::store::ReportSource;
use std::path::Path;

/// Scans the source and returns the sorted listing.
///
/// An absent directory is an empty listing. A failure to enumerate is returned
/// as-is, without a partial list.
pub fn scan_reports<S: ReportSource>(source: &S) -> Result<Vec<FileMetadata>> {
    let root = source.root();
    log::debug!("scanning {} for reports", root.display());

    let names = match source.entry_names()? {
        Some(names) => names,
        None => return Ok(Vec::new()),
    };

    let mut reports: Vec<FileMetadata> = names
        .into_iter()
        .filter_map(|filename| {
            let class = match classify(&filename) {
                Some(class) => class,
                None => {
                    log::debug!("skipping {}: not a report file", filename);
                    return None;
                }
            };
            let path = source.document_path(&filename).display().to_string();
            Some(class.into_metadata(filename, path))
        })
        .collect();

    sort_reports(&mut reports);
    log::debug!("found {} reports", reports.len());
    Ok(reports)
}

/// Resolves a selector against a listing.
pub fn find_report<'a>(
    reports: &'a [FileMetadata],
    selector: &ReportSelector,
) -> Result<&'a FileMetadata> {
    match selector {
        ReportSelector::Index(n) => reports.get(n - 1).ok_or_else(|| {
            ThesisError::Selection(format!(
                "Index {} not found ({} reports available)",
                n,
                reports.len()
            ))
        }),
        ReportSelector::Filename(name) => reports
            .iter()
            .find(|r| &r.filename == name)
            .ok_or_else(|| ThesisError::ReportNotFound(name.clone())),
    }
}

/// What to tell the user when a data directory holds no reports.
pub fn no_reports_messages(root: &Path) -> Vec<CmdMessage> {
    vec![
        CmdMessage::info("No JSON files found in the data directory."),
        CmdMessage::info(format!(
            "Reports are read from {}. Generate a report there and try again.",
            root.display()
        )),
    ]
}
