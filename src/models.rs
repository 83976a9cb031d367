//! Core data models for market intelligence synthesis

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::error::SynthesisError;

//
// ================= Enums =================
//

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TrendStatus {
    Rising,
    Declining,
    Stable,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ReviewSentiment {
    Positive,
    Negative,
    Neutral,
}

//
// ================= Competitor =================
//

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PricePoint {
    pub date: String,
    pub price: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Competitor {
    pub id: String,
    pub name: String,
    pub url: String,
    pub price: f64,
    pub currency: String,
    pub last_updated: String,
    pub features: Vec<String>,
    /// Star rating, 0–5
    pub rating: f64,
    pub review_count: u32,
    /// Normalized sentiment in [0, 1]. The upstream dataset once documented
    /// this as [-1, 1], but every fixture value and the percentage rendering
    /// assume [0, 1].
    pub sentiment_score: f64,
    /// Insertion order is chronological order.
    pub price_history: Vec<PricePoint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recent_changes: Option<Vec<String>>,
}

//
// ================= Market Trend =================
//

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketTrend {
    pub keyword: String,
    pub volume: u64,
    /// Signed growth percentage. Not required to agree with `status`.
    pub growth: f64,
    pub status: TrendStatus,
}

//
// ================= Review Sample =================
//

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewSample {
    pub source: String,
    pub text: String,
    pub sentiment: ReviewSentiment,
}

//
// ================= Snapshot =================
//

/// Read-only input to one analysis session. Construction validates that
/// every competitor with price history shares the same date points, so
/// downstream trend charts never silently misalign series.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketSnapshot {
    pub competitors: Vec<Competitor>,
    pub trends: Vec<MarketTrend>,
    pub reviews: Vec<ReviewSample>,
}

impl MarketSnapshot {
    pub fn new(
        competitors: Vec<Competitor>,
        trends: Vec<MarketTrend>,
        reviews: Vec<ReviewSample>,
    ) -> crate::Result<Self> {
        let snapshot = Self {
            competitors,
            trends,
            reviews,
        };
        snapshot.validate_alignment()?;
        Ok(snapshot)
    }

    /// All non-empty price histories must carry identical date sequences.
    pub fn validate_alignment(&self) -> crate::Result<()> {
        let mut reference: Option<(&str, Vec<&str>)> = None;

        for competitor in &self.competitors {
            if competitor.price_history.is_empty() {
                continue;
            }
            let dates: Vec<&str> = competitor
                .price_history
                .iter()
                .map(|p| p.date.as_str())
                .collect();

            match &reference {
                None => reference = Some((&competitor.name, dates)),
                Some((ref_name, ref_dates)) => {
                    if *ref_dates != dates {
                        return Err(SynthesisError::MisalignedSeries(format!(
                            "competitor '{}' has date points {:?}, but '{}' has {:?}",
                            competitor.name, dates, ref_name, ref_dates
                        )));
                    }
                }
            }
        }

        Ok(())
    }
}

//
// ================= Synthesis Output =================
//

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SentimentInsights {
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
}

/// Merged output of one report-generation invocation. Superseded, not
/// merged, by each subsequent invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketReport {
    pub report_id: Uuid,
    pub generated_at: DateTime<Utc>,
    /// Markdown narrative, or the fixed placeholder when generation failed.
    pub narrative: String,
    pub insights: SentimentInsights,
    /// True when `narrative` is the failure placeholder.
    pub narrative_degraded: bool,
    /// True when `insights` is the static fallback.
    pub sentiment_degraded: bool,
}

impl fmt::Display for TrendStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TrendStatus::Rising => "rising",
            TrendStatus::Declining => "declining",
            TrendStatus::Stable => "stable",
        };
        write!(f, "{}", s)
    }
}

impl fmt::Display for ReviewSentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ReviewSentiment::Positive => "positive",
            ReviewSentiment::Negative => "negative",
            ReviewSentiment::Neutral => "neutral",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn competitor(name: &str, dates: &[&str]) -> Competitor {
        Competitor {
            id: name.to_lowercase(),
            name: name.to_string(),
            url: format!("https://{}.example.com", name.to_lowercase()),
            price: 999.0,
            currency: "$".to_string(),
            last_updated: "2025-12-06".to_string(),
            features: vec![],
            rating: 4.0,
            review_count: 10,
            sentiment_score: 0.5,
            price_history: dates
                .iter()
                .map(|d| PricePoint {
                    date: (*d).to_string(),
                    price: 999.0,
                })
                .collect(),
            recent_changes: None,
        }
    }

    #[test]
    fn aligned_histories_pass_validation() {
        let snapshot = MarketSnapshot::new(
            vec![
                competitor("Alpha", &["2025-10-01", "2025-11-01"]),
                competitor("Beta", &["2025-10-01", "2025-11-01"]),
            ],
            vec![],
            vec![],
        );
        assert!(snapshot.is_ok());
    }

    #[test]
    fn misaligned_histories_are_rejected() {
        let result = MarketSnapshot::new(
            vec![
                competitor("Alpha", &["2025-10-01", "2025-11-01"]),
                competitor("Beta", &["2025-10-01", "2025-12-01"]),
            ],
            vec![],
            vec![],
        );
        assert!(matches!(
            result,
            Err(SynthesisError::MisalignedSeries(_))
        ));
    }

    #[test]
    fn empty_history_is_ignored_by_validation() {
        let snapshot = MarketSnapshot::new(
            vec![
                competitor("Alpha", &["2025-10-01"]),
                competitor("Beta", &[]),
            ],
            vec![],
            vec![],
        );
        assert!(snapshot.is_ok());
    }

    #[test]
    fn trend_status_serializes_lowercase() {
        let trend = MarketTrend {
            keyword: "spatial audio".to_string(),
            volume: 45000,
            growth: 22.0,
            status: TrendStatus::Rising,
        };
        let json = serde_json::to_string(&trend).unwrap();
        assert!(json.contains("\"status\":\"rising\""));
    }
}
