//! # Rendering Module
//!
//! Turns command results into styled terminal text through the templates in
//! `templates/` and the [`THESIS_THEME`] styles.
//!
//! Column widths and truncation are computed here with `unicode-width`; the
//! templates receive ready strings. Every public function takes `use_color`
//! explicitly so tests can render plain text.

use super::styles::{names, THESIS_THEME};
use super::templates::{LIST_TEMPLATE, MESSAGES_TEMPLATE, REPORT_TEMPLATE, TEXT_LIST_TEMPLATE};
use super::theme::render_with_color;
use chrono::{DateTime, Utc};
use serde::Serialize;
use thesis::api::{CmdMessage, MessageLevel, ViewedReport};
use thesis::document::ThesisDocument;
use thesis::model::FileMetadata;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const LINE_WIDTH: usize = 100;
pub const INDEX_WIDTH: usize = 5;
pub const NAME_WIDTH: usize = 44;

#[derive(Serialize)]
struct ReportLine {
    index: String,
    name: String,
    padding: String,
    filename: String,
    indent: String,
    detail: String,
}

#[derive(Serialize)]
struct ListData {
    reports: Vec<ReportLine>,
}

#[derive(Serialize)]
struct ReportData<'a> {
    #[serde(flatten)]
    document: &'a ThesisDocument,
    source: String,
}

#[derive(Serialize)]
struct TextListData {
    lines: Vec<String>,
    empty_message: String,
}

#[derive(Serialize)]
struct MessageData {
    content: String,
    style: String,
}

#[derive(Serialize)]
struct MessagesData {
    messages: Vec<MessageData>,
}

/// Renders a listing: a numbered line per report with its period and analyst below.
pub fn render_report_list(reports: &[FileMetadata], use_color: bool) -> String {
    let filename_width = LINE_WIDTH.saturating_sub(INDEX_WIDTH + NAME_WIDTH);

    let lines = reports
        .iter()
        .enumerate()
        .map(|(i, report)| {
            let name = truncate_to_width(&report.name, NAME_WIDTH - 1);
            let padding = " ".repeat(NAME_WIDTH.saturating_sub(name.width()));
            ReportLine {
                index: format!("{:>width$}", format!("{}.", i + 1), width = INDEX_WIDTH - 1) + " ",
                name,
                padding,
                filename: truncate_to_width(&report.filename, filename_width),
                indent: " ".repeat(INDEX_WIDTH),
                detail: detail_line(report),
            }
        })
        .collect();

    render_with_color(
        LIST_TEMPLATE,
        &ListData { reports: lines },
        &THESIS_THEME,
        use_color,
    )
    .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

/// `Q2 2025 • Jane Doe`, the period and analyst under each listing entry.
fn detail_line(report: &FileMetadata) -> String {
    let period = match report.year {
        Some(year) => format!("{} {}", report.quarter, year),
        None => report.quarter.clone(),
    };
    format!("{} • {}", period, report.analyst)
}

/// Renders a parsed report as a thesis document.
pub fn render_report(viewed: &ViewedReport, now: DateTime<Utc>, use_color: bool) -> String {
    let document = ThesisDocument::build(&viewed.report, now);
    let data = ReportData {
        document: &document,
        source: viewed.path.display().to_string(),
    };

    render_with_color(REPORT_TEMPLATE, &data, &THESIS_THEME, use_color)
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

pub fn render_text_list(lines: &[String], empty_message: &str, use_color: bool) -> String {
    let data = TextListData {
        lines: lines.to_vec(),
        empty_message: empty_message.to_string(),
    };

    render_with_color(TEXT_LIST_TEMPLATE, &data, &THESIS_THEME, use_color)
        .unwrap_or_else(|_| format!("{}\n", empty_message))
}

pub fn render_messages(messages: &[CmdMessage], use_color: bool) -> String {
    if messages.is_empty() {
        return String::new();
    }

    let data = MessagesData {
        messages: messages
            .iter()
            .map(|msg| MessageData {
                content: msg.content.clone(),
                style: message_style(&msg.level).to_string(),
            })
            .collect(),
    };

    render_with_color(MESSAGES_TEMPLATE, &data, &THESIS_THEME, use_color).unwrap_or_else(|_| {
        messages
            .iter()
            .map(|m| format!("{}\n", m.content))
            .collect()
    })
}

fn message_style(level: &MessageLevel) -> &'static str {
    match level {
        MessageLevel::Info => names::INFO,
        MessageLevel::Success => names::SUCCESS,
        MessageLevel::Warning => names::WARNING,
        MessageLevel::Error => names::ERROR,
    }
}

/// Cuts `s` to at most `max_width` columns, marking the cut with an ellipsis.
fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let limit = max_width.saturating_sub(1);
    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::path::PathBuf;
    use thesis::filename::classify;
    use thesis::report::InvestmentReport;

    const FULL_REPORT: &str = r#"{
      "metadata": { "analysis_timestamp": "2025-06-01T14:30:00", "analyst_name": "Jane Doe" },
      "parsed_content": {
        "financialMetrics": { "ticker": "AAPL", "totalrevenue": 95359000000, "basiceps": 1.65 },
        "analyst": { "priceTarget": "$235", "upside": "12%", "sentiment": "Bullish" }
      },
      "financial_analysis": {
        "company_name": "Apple Inc.",
        "analysis_period": "Q2 2025",
        "financial_health_score": { "overall_score": 4.5 },
        "risk_assessment": { "key_risks": ["Tariff exposure"] }
      },
      "sentiment_analysis": {
        "market_sentiment": { "sentiment": "Neutral", "supporting_quotes": ["Shares were flat after the call."] }
      },
      "leadership_analysis": {
        "key_trends": [
          { "trend": "Deep bench in operations", "trend_direction": "Positive" },
          { "trend": "CFO departure", "trend_direction": "Negative" }
        ],
        "stability_assessment": { "stability_score": 8, "succession_readiness": "Strong" },
        "overall_impact": "Positive"
      }
    }"#;

    fn listed(filename: &str) -> FileMetadata {
        classify(filename)
            .unwrap()
            .into_metadata(filename.to_string(), format!("data/{}", filename))
    }

    fn viewed(json: &str) -> ViewedReport {
        ViewedReport {
            filename: "AAPL_Q2_2025_combined_analysis.json".into(),
            path: PathBuf::from("data/AAPL_Q2_2025_combined_analysis.json"),
            report: InvestmentReport::from_json(json).unwrap(),
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 4, 15, 0, 0).unwrap()
    }

    #[test]
    fn test_render_list_lines() {
        let reports = vec![
            listed("GOOG_Q3_2025_Jane_Doe_combined_analysis.json"),
            listed("AAPL_Q2_2025_combined_analysis.json"),
        ];
        let output = render_report_list(&reports, false);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("  1. GOOG Q3 2025 - Jane Doe"));
        assert!(lines[0].ends_with("GOOG_Q3_2025_Jane_Doe_combined_analysis.json"));
        assert_eq!(lines[1], "     Q3 2025 • Jane Doe");
        assert!(lines[2].starts_with("  2. AAPL Q2 2025 "));
        assert_eq!(lines[3], "     Q2 2025 • Unknown");
        // Filenames line up in one column.
        assert_eq!(
            lines[0].find("GOOG_"),
            lines[2].find("AAPL_")
        );
    }

    #[test]
    fn test_undated_entry_detail() {
        let output = render_report_list(&[listed("notes.json")], false);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], "     N/A • Unknown");
    }

    #[test]
    fn test_render_empty_list_is_empty() {
        assert_eq!(render_report_list(&[], false), "");
    }

    #[test]
    fn test_long_names_are_truncated() {
        let mut report = listed("notes.json");
        report.name = "x".repeat(80);
        let output = render_report_list(&[report], false);
        assert!(output.contains('…'));
        assert!(!output.contains(&"x".repeat(NAME_WIDTH)));
    }

    #[test]
    fn test_render_full_report() {
        let output = render_report(&viewed(FULL_REPORT), now(), false);

        assert!(output.starts_with("AAPL  Apple Inc. Investment Thesis\n"));
        assert!(output.contains("Analyst Jane Doe   Period Q2 2025   generated 3 days ago\n"));
        assert!(output.contains("data/AAPL_Q2_2025_combined_analysis.json"));
        assert!(output.contains("Revenue       $95.4B"));
        assert!(output.contains("EPS           $1.65"));
        assert!(output.contains("Health score  4.5/6.0"));
        assert!(output.contains("Stability     8/10"));
        assert!(output.contains("Market reaction\n  Shares were flat after the call."));
        assert!(output.contains("    - Deep bench in operations"));
        assert!(output.contains("is considered positive."));
        assert!(!output.contains("(!?)"));

        let sections: Vec<usize> = [
            "Report Summary",
            "Financial Analysis",
            "Sentiment Analysis",
            "Leadership Analysis",
        ]
        .iter()
        .map(|s| output.find(s).unwrap())
        .collect();
        assert!(sections.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_render_sparse_report() {
        let output = render_report(&viewed("{}"), now(), false);
        assert!(output.starts_with("N/A  Investment Thesis\n"));
        assert!(output.contains("Revenue       N/A"));
        assert!(output.contains("No specific market reaction found."));
        assert!(!output.contains("generated"));
        assert!(!output.contains("Key concerns"));
        assert!(!output.contains("(!?)"));
    }

    #[test]
    fn test_render_unavailable_section() {
        let output = render_report(
            &viewed(r#"{"sentiment_analysis": {"error": "No sentiment analysis results available"}}"#),
            now(),
            false,
        );
        assert!(output.contains("Sentiment Analysis\n  No sentiment analysis results available\n"));
        assert!(!output.contains("Market reaction"));
    }

    #[test]
    fn test_render_messages() {
        let messages = vec![
            CmdMessage::info("first"),
            CmdMessage::error("second"),
        ];
        assert_eq!(render_messages(&messages, false), "first\nsecond\n");
        assert_eq!(render_messages(&[], false), "");
    }

    #[test]
    fn test_render_text_list() {
        let lines = vec!["a".to_string(), "b".to_string()];
        assert_eq!(render_text_list(&lines, "nothing", false), "a\nb\n");
        assert_eq!(render_text_list(&[], "nothing", false), "nothing\n");
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("short", 10), "short");
        assert_eq!(truncate_to_width("exactly10!", 10), "exactly10!");
        assert_eq!(truncate_to_width("longer than ten", 10), "longer th…");
        assert_eq!(truncate_to_width("日本語テキスト", 7), "日本語…");
    }
}
