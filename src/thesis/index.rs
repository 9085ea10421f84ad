//! # Listing Order and Selection
//!
//! Listings are shown newest period first. The comparator reads:
//!
//! 1. `year` descending, but only when **both** entries carry a year
//! 2. with equal years, `quarter` descending as plain strings (`"Q10"` < `"Q2"`)
//! 3. `ticker` ascending for everything else
//!
//! When exactly one side has no year, the first two keys are skipped and the pair is
//! ordered by ticker alone. Null years are therefore *not* pushed to either end of the
//! list, and the comparator is not transitive once dated and undated entries mix:
//!
//! ```text
//! ZZZ 2025  <  AAA 2024     (year)
//! AAA 2024  <  MMM  -       (ticker)
//! MMM  -    <  ZZZ 2025     (ticker)
//! ```
//!
//! `slice::sort_by` is allowed to panic on such an ordering, so listings go through
//! [`sort_reports`], a stable merge sort that accepts any comparator. For inputs where the
//! comparator is a total order the result is the same as any stable sort.
//!
//! ## Selection
//!
//! Users pick a report either by its 1-based position in the current listing or by its
//! exact filename. See [`ReportSelector`].

use crate::model::FileMetadata;
use std::cmp::Ordering;

/// Listing comparator. See the module documentation for the null-year behavior.
pub fn compare_reports(a: &FileMetadata, b: &FileMetadata) -> Ordering {
    if let (Some(year_a), Some(year_b)) = (a.year, b.year) {
        if year_a != year_b {
            return year_b.cmp(&year_a);
        }
        if a.quarter != b.quarter {
            return b.quarter.cmp(&a.quarter);
        }
    }
    a.ticker.cmp(&b.ticker)
}

/// Sorts a listing in place with [`compare_reports`].
pub fn sort_reports(reports: &mut Vec<FileMetadata>) {
    let items = std::mem::take(reports);
    *reports = merge_sort_by(items, &compare_reports);
}

fn merge_sort_by<T, F>(mut items: Vec<T>, cmp: &F) -> Vec<T>
where
    F: Fn(&T, &T) -> Ordering,
{
    if items.len() <= 1 {
        return items;
    }

    let right = items.split_off(items.len() / 2);
    let left = merge_sort_by(items, cmp);
    let right = merge_sort_by(right, cmp);

    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    while let (Some(l), Some(r)) = (left.peek(), right.peek()) {
        // Ties take from the left run to keep the sort stable.
        let next = if cmp(r, l) == Ordering::Less {
            right.next()
        } else {
            left.next()
        };
        merged.extend(next);
    }
    merged.extend(left);
    merged.extend(right);
    merged
}

/// A user input selecting one report from a listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportSelector {
    /// 1-based position in the sorted listing.
    Index(usize),
    /// Exact filename inside the data directory.
    Filename(String),
}

impl std::fmt::Display for ReportSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportSelector::Index(i) => write!(f, "{}", i),
            ReportSelector::Filename(name) => write!(f, "\"{}\"", name),
        }
    }
}

impl std::str::FromStr for ReportSelector {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err("Empty report selection".to_string());
        }
        if s.chars().all(|c| c.is_ascii_digit()) {
            return match s.parse::<usize>() {
                Ok(0) => Err("Report indexes start at 1".to_string()),
                Ok(n) => Ok(ReportSelector::Index(n)),
                Err(_) => Err(format!("Invalid report index: {}", s)),
            };
        }
        Ok(ReportSelector::Filename(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filename::classify;

    fn report(filename: &str) -> FileMetadata {
        classify(filename)
            .unwrap()
            .into_metadata(filename.to_string(), filename.to_string())
    }

    fn tickers(reports: &[FileMetadata]) -> Vec<&str> {
        reports.iter().map(|r| r.ticker.as_str()).collect()
    }

    fn undated(ticker: &str) -> FileMetadata {
        let mut r = report("notes.json");
        r.ticker = ticker.to_string();
        r
    }

    #[test]
    fn newest_period_first() {
        let mut reports = vec![
            report("AAPL_Q2_2025_combined_analysis.json"),
            report("MSFT_Q1_2024_combined_analysis.json"),
            report("GOOG_Q3_2025_Jane_Doe_combined_analysis.json"),
        ];
        sort_reports(&mut reports);
        assert_eq!(tickers(&reports), vec!["GOOG", "AAPL", "MSFT"]);
    }

    #[test]
    fn same_period_orders_by_ticker() {
        let mut reports = vec![
            report("MSFT_Q2_2025_combined_analysis.json"),
            report("AAPL_Q2_2025_Bob_combined_analysis.json"),
        ];
        sort_reports(&mut reports);
        assert_eq!(tickers(&reports), vec!["AAPL", "MSFT"]);
    }

    #[test]
    fn quarter_compares_as_text() {
        let mut reports = vec![
            report("AAA_Q10_2025_combined_analysis.json"),
            report("BBB_Q2_2025_combined_analysis.json"),
        ];
        sort_reports(&mut reports);
        // "Q2" > "Q10" as strings, so Q2 comes first when descending.
        assert_eq!(tickers(&reports), vec!["BBB", "AAA"]);
    }

    #[test]
    fn undated_pair_orders_by_ticker() {
        let mut reports = vec![undated("ZED"), undated("ABC")];
        sort_reports(&mut reports);
        assert_eq!(tickers(&reports), vec!["ABC", "ZED"]);
    }

    #[test]
    fn one_null_year_compares_by_ticker_only() {
        let dated = report("ZZZ_Q1_2025_combined_analysis.json");
        let plain = undated("N/A");
        assert_eq!(compare_reports(&plain, &dated), Ordering::Less);
        assert_eq!(compare_reports(&dated, &plain), Ordering::Greater);

        let early = report("AAA_Q1_2020_combined_analysis.json");
        assert_eq!(compare_reports(&early, &plain), Ordering::Less);
    }

    #[test]
    fn year_zero_is_still_a_year() {
        let zero = report("ZZZ_Q1_0000_combined_analysis.json");
        let dated = report("AAA_Q1_2020_combined_analysis.json");
        assert_eq!(zero.year, Some(0));
        // Compared by year, not by ticker.
        assert_eq!(compare_reports(&zero, &dated), Ordering::Greater);
    }

    #[test]
    fn non_transitive_input_sorts_without_panicking() {
        let mut reports = vec![
            report("ZZZ_Q1_2025_combined_analysis.json"),
            undated("MMM"),
            report("AAA_Q1_2024_combined_analysis.json"),
            undated("BBB"),
            report("KKK_Q4_2023_combined_analysis.json"),
            undated("YYY"),
        ];
        sort_reports(&mut reports);
        assert_eq!(reports.len(), 6);

        let mut again = reports.clone();
        sort_reports(&mut again);
        assert_eq!(tickers(&again), tickers(&reports));
    }

    #[test]
    fn sort_is_stable_for_equal_keys() {
        let mut first = undated("N/A");
        first.filename = "a.json".into();
        let mut second = undated("N/A");
        second.filename = "b.json".into();

        let mut reports = vec![first, second];
        sort_reports(&mut reports);
        assert_eq!(reports[0].filename, "a.json");
        assert_eq!(reports[1].filename, "b.json");
    }

    #[test]
    fn empty_and_single_listings() {
        let mut empty: Vec<FileMetadata> = Vec::new();
        sort_reports(&mut empty);
        assert!(empty.is_empty());

        let mut one = vec![undated("ONE")];
        sort_reports(&mut one);
        assert_eq!(tickers(&one), vec!["ONE"]);
    }

    #[test]
    fn parse_selectors() {
        assert_eq!("3".parse::<ReportSelector>(), Ok(ReportSelector::Index(3)));
        assert_eq!(
            "AAPL_Q2_2025_combined_analysis.json".parse::<ReportSelector>(),
            Ok(ReportSelector::Filename(
                "AAPL_Q2_2025_combined_analysis.json".into()
            ))
        );
        assert!("0".parse::<ReportSelector>().is_err());
        assert!("".parse::<ReportSelector>().is_err());
        assert!("99999999999999999999999".parse::<ReportSelector>().is_err());
    }

    #[test]
    fn selector_display() {
        assert_eq!(ReportSelector::Index(2).to_string(), "2");
        assert_eq!(
            ReportSelector::Filename("a.json".into()).to_string(),
            "\"a.json\""
        );
    }
}
