//! # Report Documents
//!
//! A report is one JSON document written by the upstream analysis pipeline. Its shape
//! is an external contract that this crate reads but never enforces: every section and
//! every field is optional, unknown keys are ignored, and a value of the wrong type is
//! treated as missing. The pipeline replaces a section it could not produce with
//! `{"error": "..."}`; such a section reads as empty with its `error` set.
//!
//! The only hard requirement is that the document is a JSON object.

use crate::error::{Result, ThesisError};
use serde::de::{DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize};

/// Deserializes a field, falling back to its default when the value has an
/// unexpected type.
fn lenient<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InvestmentReport {
    #[serde(default, deserialize_with = "lenient")]
    pub metadata: ReportMetadata,
    #[serde(default, deserialize_with = "lenient")]
    pub parsed_content: ParsedContent,
    #[serde(default, deserialize_with = "lenient")]
    pub financial_analysis: FinancialAnalysis,
    #[serde(default, deserialize_with = "lenient")]
    pub sentiment_analysis: SentimentAnalysis,
    #[serde(default, deserialize_with = "lenient")]
    pub leadership_analysis: LeadershipAnalysis,
}

impl InvestmentReport {
    pub fn from_json(text: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(text)?;
        if !value.is_object() {
            return Err(ThesisError::Serialization(serde::de::Error::custom(
                "report document must be a JSON object",
            )));
        }
        Ok(serde_json::from_value(value)?)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportMetadata {
    #[serde(default, deserialize_with = "lenient")]
    pub analysis_timestamp: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub analyst_name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub original_filename: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub analysis_version: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedContent {
    #[serde(rename = "financialMetrics", default, deserialize_with = "lenient")]
    pub financial_metrics: FinancialMetrics,
    #[serde(default, deserialize_with = "lenient")]
    pub analyst: AnalystView,
}

/// Raw figures as reported; ratios are fractions (`0.25` is 25%).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FinancialMetrics {
    #[serde(default, deserialize_with = "lenient")]
    pub ticker: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub analyst_name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub year: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub quarter: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub totalrevenue: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub revenuegrowth: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub ebitda: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub ebitdamargins: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub netincome: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub profitmargin: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub operatingmargin: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub basiceps: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub sharesoutstanding: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub dividendrate: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub dividendyield: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalystView {
    #[serde(default, deserialize_with = "lenient")]
    pub summary: Option<String>,
    #[serde(rename = "priceTarget", default, deserialize_with = "lenient")]
    pub price_target: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub upside: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub sentiment: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub catalysts: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub risks: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FinancialAnalysis {
    #[serde(default, deserialize_with = "lenient")]
    pub company_name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub analysis_period: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub financial_health_score: HealthScore,
    #[serde(default, deserialize_with = "lenient")]
    pub performance_summary: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub investment_outlook: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub risk_assessment: RiskAssessment,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HealthScore {
    #[serde(default, deserialize_with = "lenient")]
    pub overall_score: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub liquidity_score: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub profitability_score: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub efficiency_score: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub growth_score: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    #[serde(default, deserialize_with = "lenient")]
    pub key_risks: Vec<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub risk_factors: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SentimentAnalysis {
    #[serde(default, deserialize_with = "lenient")]
    pub company_name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub overall_sentiment: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub confidence_score: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub analyst_sentiment: SentimentReading,
    #[serde(default, deserialize_with = "lenient")]
    pub market_sentiment: MarketSentiment,
    #[serde(default, deserialize_with = "lenient")]
    pub key_themes: Vec<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SentimentReading {
    #[serde(default, deserialize_with = "lenient")]
    pub sentiment: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub confidence: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketSentiment {
    #[serde(default, deserialize_with = "lenient")]
    pub sentiment: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub confidence: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub supporting_quotes: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LeadershipAnalysis {
    #[serde(default, deserialize_with = "lenient")]
    pub company_ticker: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub company_name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub analysis_period: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub key_trends: Vec<LeadershipTrend>,
    #[serde(default, deserialize_with = "lenient")]
    pub stability_assessment: StabilityAssessment,
    #[serde(default, deserialize_with = "lenient")]
    pub overall_impact: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub investor_implications: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LeadershipTrend {
    #[serde(default, deserialize_with = "lenient")]
    pub trend: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub trend_direction: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StabilityAssessment {
    #[serde(default, deserialize_with = "lenient")]
    pub stability_score: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub key_risks: Vec<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub succession_readiness: Option<String>,
}

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    /// A complete document in the shape the upstream pipeline writes.
    pub const FULL_REPORT: &str = r#"{
  "metadata": {
    "analysis_timestamp": "2025-06-01T14:30:00.123456",
    "analyst_name": "Jane Doe",
    "original_filename": "AAPL_Q2_2025.pdf",
    "analysis_version": "1.0"
  },
  "parsed_content": {
    "financialMetrics": {
      "ticker": "AAPL",
      "analyst_name": "Jane Doe",
      "year": 2025,
      "quarter": 2,
      "totalrevenue": 95359000000,
      "revenuegrowth": 0.051,
      "ebitda": 32250000000,
      "ebitdamargins": 0.338,
      "netincome": 24780000000,
      "profitmargin": 0.26,
      "operatingmargin": 0.297,
      "basiceps": 1.65,
      "sharesoutstanding": 14940000000,
      "dividendrate": 1.04,
      "dividendyield": 0.0048
    },
    "analyst": {
      "summary": "Services strength offsets a soft hardware quarter.",
      "priceTarget": "$235",
      "upside": "12%",
      "sentiment": "Bullish",
      "catalysts": "AI features",
      "risks": "China demand"
    }
  },
  "financial_analysis": {
    "company_name": "Apple Inc.",
    "analysis_period": "Q2 2025",
    "financial_health_score": {
      "overall_score": 4.5,
      "liquidity_score": 4.0,
      "profitability_score": 5.5,
      "efficiency_score": 4.2,
      "growth_score": 3.8
    },
    "performance_summary": "Revenue grew modestly with record services margins.",
    "investment_outlook": "Positive",
    "risk_assessment": {
      "key_risks": ["Tariff exposure", "Smartphone saturation"],
      "risk_factors": ["Regulatory pressure on the App Store"]
    }
  },
  "sentiment_analysis": {
    "company_name": "Apple Inc.",
    "overall_sentiment": "Positive",
    "confidence_score": 0.82,
    "analyst_sentiment": { "sentiment": "Positive", "confidence": 0.85 },
    "market_sentiment": {
      "sentiment": "Neutral",
      "confidence": 0.6,
      "supporting_quotes": ["Shares were flat after the call."]
    },
    "key_themes": ["Services", "AI", "Buybacks"]
  },
  "leadership_analysis": {
    "company_ticker": "AAPL",
    "company_name": "Apple Inc.",
    "analysis_period": "Q2 2025",
    "key_trends": [
      { "trend": "Deep bench in operations", "trend_direction": "Positive" },
      { "trend": "Design leadership turnover", "trend_direction": "Negative" },
      { "trend": "Stable board", "trend_direction": "positive" }
    ],
    "stability_assessment": {
      "stability_score": 8,
      "key_risks": ["CEO succession timing"],
      "succession_readiness": "Strong"
    },
    "overall_impact": "Positive",
    "investor_implications": "Leadership continuity supports the capital return story."
  }
}"#;
}
