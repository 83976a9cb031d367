//! Prompt construction for the two synthesis calls
//!
//! Pure functions: no I/O, byte-identical output for identical snapshots.
//! Generation itself is non-deterministic; the prompts are not.

use serde::Serialize;

use crate::models::{MarketSnapshot, ReviewSample};

/// Compact competitor projection embedded in the narrative prompt.
/// Other fields are intentionally omitted to keep the prompt focused
/// on pricing moves.
#[derive(Debug, Serialize)]
struct CompetitorDigest<'a> {
    name: &'a str,
    price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    changes: Option<&'a Vec<String>>,
}

/// Build the weekly narrative report prompt.
pub fn build_report_prompt(snapshot: &MarketSnapshot) -> crate::Result<String> {
    let digests: Vec<CompetitorDigest<'_>> = snapshot
        .competitors
        .iter()
        .map(|c| CompetitorDigest {
            name: &c.name,
            price: c.price,
            changes: c.recent_changes.as_ref(),
        })
        .collect();

    let competitors_json = serde_json::to_string(&digests)?;
    let trends_json = serde_json::to_string(&snapshot.trends)?;
    let reviews_json = serde_json::to_string(&snapshot.reviews)?;

    Ok(format!(
        r#"Act as a Senior Market Research Analyst.
Generate a "Weekly Market Intelligence Report" based on the following data:

Competitors: {}
Market Trends: {}
Recent Sentiment Samples: {}

The report must be in Markdown format and include these sections:
1. Executive Summary
2. Key Competitor Moves (Highlight price changes and new features)
3. Market Sentiment Analysis (What are customers complaining/praising?)
4. Strategic Recommendations (Actionable advice for the Product Manager)

Keep it professional, concise, and "board-room ready"."#,
        competitors_json, trends_json, reviews_json,
    ))
}

/// Build the sentiment strength/weakness extraction prompt.
pub fn build_sentiment_prompt(reviews: &[ReviewSample]) -> crate::Result<String> {
    let reviews_json = serde_json::to_string(reviews)?;

    Ok(format!(
        r#"Analyze these customer reviews: {}

Identify the top 3 strengths and top 3 weaknesses mentioned across the market.
Return purely valid JSON with this structure:
{{
  "strengths": ["string", "string", "string"],
  "weaknesses": ["string", "string", "string"]
}}
No additional text."#,
        reviews_json,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::demo_snapshot;

    #[test]
    fn report_prompt_is_deterministic() {
        let snapshot = demo_snapshot();
        let first = build_report_prompt(&snapshot).unwrap();
        let second = build_report_prompt(&snapshot).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn sentiment_prompt_is_deterministic() {
        let snapshot = demo_snapshot();
        let first = build_sentiment_prompt(&snapshot.reviews).unwrap();
        let second = build_sentiment_prompt(&snapshot.reviews).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn report_prompt_projects_competitors() {
        let snapshot = demo_snapshot();
        let prompt = build_report_prompt(&snapshot).unwrap();

        // Projection keeps name/price/changes, drops everything else.
        assert!(prompt.contains("TechFlow Pro"));
        assert!(prompt.contains("1299"));
        assert!(prompt.contains("Price drop detected"));
        assert!(!prompt.contains("reviewCount"));
        assert!(!prompt.contains("priceHistory"));
    }

    #[test]
    fn report_prompt_names_required_sections() {
        let snapshot = demo_snapshot();
        let prompt = build_report_prompt(&snapshot).unwrap();

        assert!(prompt.contains("Executive Summary"));
        assert!(prompt.contains("Key Competitor Moves"));
        assert!(prompt.contains("Market Sentiment Analysis"));
        assert!(prompt.contains("Strategic Recommendations"));
        assert!(prompt.contains("board-room ready"));
    }

    #[test]
    fn sentiment_prompt_embeds_all_reviews() {
        let snapshot = demo_snapshot();
        let prompt = build_sentiment_prompt(&snapshot.reviews).unwrap();

        for review in &snapshot.reviews {
            assert!(prompt.contains(&review.source));
        }
        assert!(prompt.contains("top 3 strengths"));
        assert!(prompt.contains("\"weaknesses\""));
    }
}
