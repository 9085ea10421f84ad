//! # Thesis Document
//!
//! Maps a parsed [`InvestmentReport`] onto the sections of an investment-thesis
//! document. Everything here is display-ready text: figures are already formatted,
//! sentiment labels carry the style name of their badge, and lists are filtered.
//! Layout (columns, colors, wrapping) belongs to the UI client.
//!
//! Missing text renders as an empty string and missing figures as `"N/A"`.

use crate::format::{
    format_age, format_billions, format_eps, format_percentage, format_score, parse_timestamp,
    split_period, Tone, MISSING,
};
use crate::model::UNKNOWN_ANALYST;
use crate::report::InvestmentReport;
use chrono::{DateTime, Utc};
use serde::Serialize;

const HEALTH_SCALE: &str = "6.0";
const STABILITY_SCALE: &str = "10";
const POSITIVE_DIRECTION: &str = "Positive";
pub const NO_MARKET_REACTION: &str = "No specific market reaction found.";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThesisDocument {
    pub header: Header,
    pub summary: Summary,
    pub financial: Financial,
    pub sentiment: Sentiment,
    pub leadership: Leadership,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Header {
    pub ticker: String,
    pub title: String,
    pub analyst: String,
    pub quarter: String,
    pub year: String,
    /// Age of the analysis, when the document carries a readable timestamp.
    pub generated: Option<String>,
}

/// A sentiment label with the style its badge uses.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Badge {
    pub label: String,
    pub style: String,
}

impl Badge {
    fn from_label(label: Option<&str>) -> Self {
        Self {
            label: label.unwrap_or_default().to_string(),
            style: Tone::from_label(label).style_name().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub price_target: String,
    pub upside: String,
    pub sentiment: Badge,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Financial {
    pub revenue: String,
    pub growth: String,
    pub operating_margin: String,
    pub eps: String,
    pub performance_summary: String,
    pub health_score: String,
    pub investment_outlook: String,
    pub key_concerns: Vec<String>,
    pub unavailable: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sentiment {
    pub analyst: Badge,
    pub analyst_confidence: String,
    pub market: Badge,
    pub market_confidence: String,
    pub key_themes: Vec<String>,
    pub market_reaction: String,
    pub risk_factors: Vec<String>,
    pub unavailable: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Leadership {
    pub stability_score: String,
    pub succession_readiness: Badge,
    pub positive_trends: Vec<String>,
    pub key_risks: Vec<String>,
    pub investor_implications: String,
    pub overall_impact: String,
    pub unavailable: Option<String>,
}

fn text(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

impl ThesisDocument {
    /// Builds the document. `now` anchors the relative generation time.
    pub fn build(report: &InvestmentReport, now: DateTime<Utc>) -> Self {
        Self {
            header: header(report, now),
            summary: summary(report),
            financial: financial(report),
            sentiment: sentiment(report),
            leadership: leadership(report),
        }
    }
}

fn header(report: &InvestmentReport, now: DateTime<Utc>) -> Header {
    let metrics = &report.parsed_content.financial_metrics;
    let analysis = &report.financial_analysis;

    let ticker = metrics
        .ticker
        .clone()
        .or_else(|| report.leadership_analysis.company_ticker.clone())
        .unwrap_or_else(|| MISSING.to_string());
    let company = analysis
        .company_name
        .clone()
        .or_else(|| report.sentiment_analysis.company_name.clone())
        .or_else(|| report.leadership_analysis.company_name.clone());
    let title = match company {
        Some(name) => format!("{} Investment Thesis", name),
        None => "Investment Thesis".to_string(),
    };
    let analyst = report
        .metadata
        .analyst_name
        .clone()
        .or_else(|| metrics.analyst_name.clone())
        .unwrap_or_else(|| UNKNOWN_ANALYST.to_string());
    let (quarter, year) = split_period(analysis.analysis_period.as_deref().unwrap_or_default());
    let generated = report
        .metadata
        .analysis_timestamp
        .as_deref()
        .and_then(parse_timestamp)
        .map(|ts| format_age(ts, now));

    Header {
        ticker,
        title,
        analyst,
        quarter,
        year,
        generated,
    }
}

fn summary(report: &InvestmentReport) -> Summary {
    let analyst = &report.parsed_content.analyst;
    Summary {
        price_target: text(&analyst.price_target),
        upside: text(&analyst.upside),
        sentiment: Badge::from_label(analyst.sentiment.as_deref()),
        text: text(&analyst.summary),
    }
}

fn financial(report: &InvestmentReport) -> Financial {
    let metrics = &report.parsed_content.financial_metrics;
    let analysis = &report.financial_analysis;
    Financial {
        revenue: format_billions(metrics.totalrevenue),
        growth: format_percentage(metrics.revenuegrowth),
        operating_margin: format_percentage(metrics.operatingmargin),
        eps: format_eps(metrics.basiceps),
        performance_summary: text(&analysis.performance_summary),
        health_score: format_score(analysis.financial_health_score.overall_score, HEALTH_SCALE),
        investment_outlook: text(&analysis.investment_outlook),
        key_concerns: analysis.risk_assessment.key_risks.clone(),
        unavailable: analysis.error.clone(),
    }
}

fn sentiment(report: &InvestmentReport) -> Sentiment {
    let analysis = &report.sentiment_analysis;
    let market_reaction = analysis
        .market_sentiment
        .supporting_quotes
        .first()
        .filter(|quote| !quote.is_empty())
        .cloned()
        .unwrap_or_else(|| NO_MARKET_REACTION.to_string());

    Sentiment {
        analyst: Badge::from_label(analysis.analyst_sentiment.sentiment.as_deref()),
        analyst_confidence: format_percentage(analysis.analyst_sentiment.confidence),
        market: Badge::from_label(analysis.market_sentiment.sentiment.as_deref()),
        market_confidence: format_percentage(analysis.market_sentiment.confidence),
        key_themes: analysis.key_themes.clone(),
        market_reaction,
        // Risk factors come from the financial analysis, shown alongside sentiment.
        risk_factors: report.financial_analysis.risk_assessment.risk_factors.clone(),
        unavailable: analysis.error.clone(),
    }
}

fn leadership(report: &InvestmentReport) -> Leadership {
    let analysis = &report.leadership_analysis;
    let stability = &analysis.stability_assessment;

    // Exact match: "positive" in lowercase is not a positive trend.
    let positive_trends = analysis
        .key_trends
        .iter()
        .filter(|t| t.trend_direction.as_deref() == Some(POSITIVE_DIRECTION))
        .filter_map(|t| t.trend.clone())
        .collect();

    Leadership {
        stability_score: format_score(stability.stability_score, STABILITY_SCALE),
        succession_readiness: Badge::from_label(stability.succession_readiness.as_deref()),
        positive_trends,
        key_risks: stability.key_risks.clone(),
        investor_implications: text(&analysis.investor_implications),
        overall_impact: text(&analysis.overall_impact).to_lowercase(),
        unavailable: analysis.error.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::fixtures::FULL_REPORT;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 4, 15, 0, 0).unwrap()
    }

    fn full() -> ThesisDocument {
        let report = InvestmentReport::from_json(FULL_REPORT).unwrap();
        ThesisDocument::build(&report, now())
    }

    #[test]
    fn header_fields() {
        let doc = full();
        assert_eq!(doc.header.ticker, "AAPL");
        assert_eq!(doc.header.title, "Apple Inc. Investment Thesis");
        assert_eq!(doc.header.analyst, "Jane Doe");
        assert_eq!(doc.header.quarter, "Q2");
        assert_eq!(doc.header.year, "2025");
        assert_eq!(doc.header.generated.as_deref(), Some("3 days ago"));
    }

    #[test]
    fn summary_fields() {
        let doc = full();
        assert_eq!(doc.summary.price_target, "$235");
        assert_eq!(doc.summary.upside, "12%");
        assert_eq!(doc.summary.sentiment.label, "Bullish");
        assert_eq!(doc.summary.sentiment.style, "tone-positive");
    }

    #[test]
    fn financial_figures_are_formatted() {
        let doc = full();
        assert_eq!(doc.financial.revenue, "$95.4B");
        assert_eq!(doc.financial.growth, "5.1%");
        assert_eq!(doc.financial.operating_margin, "29.7%");
        assert_eq!(doc.financial.eps, "$1.65");
        assert_eq!(doc.financial.health_score, "4.5/6.0");
        assert_eq!(doc.financial.key_concerns.len(), 2);
        assert!(doc.financial.unavailable.is_none());
    }

    #[test]
    fn sentiment_fields() {
        let doc = full();
        assert_eq!(doc.sentiment.analyst.style, "tone-positive");
        assert_eq!(doc.sentiment.analyst_confidence, "85.0%");
        assert_eq!(doc.sentiment.market.style, "tone-neutral");
        assert_eq!(doc.sentiment.market_confidence, "60.0%");
        assert_eq!(doc.sentiment.market_reaction, "Shares were flat after the call.");
        assert_eq!(
            doc.sentiment.risk_factors,
            vec!["Regulatory pressure on the App Store".to_string()]
        );
    }

    #[test]
    fn leadership_keeps_only_positive_trends() {
        let doc = full();
        assert_eq!(doc.leadership.stability_score, "8/10");
        assert_eq!(doc.leadership.succession_readiness.style, "tone-positive");
        assert_eq!(
            doc.leadership.positive_trends,
            vec!["Deep bench in operations".to_string()]
        );
        assert_eq!(doc.leadership.overall_impact, "positive");
    }

    #[test]
    fn empty_report_degrades_to_placeholders() {
        let doc = ThesisDocument::build(&InvestmentReport::default(), now());
        assert_eq!(doc.header.ticker, "N/A");
        assert_eq!(doc.header.title, "Investment Thesis");
        assert_eq!(doc.header.analyst, "Unknown");
        assert_eq!(doc.header.quarter, "");
        assert!(doc.header.generated.is_none());
        assert_eq!(doc.financial.revenue, "N/A");
        assert_eq!(doc.financial.eps, "N/A");
        assert_eq!(doc.financial.health_score, "N/A");
        assert_eq!(doc.summary.sentiment.style, "tone-default");
        assert_eq!(doc.sentiment.market_reaction, NO_MARKET_REACTION);
        assert!(doc.leadership.positive_trends.is_empty());
    }

    #[test]
    fn error_sections_are_flagged() {
        let report = InvestmentReport::from_json(
            r#"{"leadership_analysis": {"error": "No leadership analysis results available"}}"#,
        )
        .unwrap();
        let doc = ThesisDocument::build(&report, now());
        assert_eq!(
            doc.leadership.unavailable.as_deref(),
            Some("No leadership analysis results available")
        );
        assert!(doc.financial.unavailable.is_none());
    }

    #[test]
    fn ticker_falls_back_to_leadership_section() {
        let report = InvestmentReport::from_json(
            r#"{"leadership_analysis": {"company_ticker": "MSFT"}}"#,
        )
        .unwrap();
        assert_eq!(ThesisDocument::build(&report, now()).header.ticker, "MSFT");
    }
}
