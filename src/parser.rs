//! Response interpretation for the two synthesis calls
//!
//! Narrative responses are opaque Markdown and pass straight through.
//! Sentiment responses must parse as the fixed two-list schema; anything
//! else falls back to a static insight object so the caller always sees
//! two populated lists.

use serde_json::Value;

use crate::error::SynthesisError;
use crate::models::SentimentInsights;

/// Shown when the narrative call fails outright.
pub const NARRATIVE_FAILURE_PLACEHOLDER: &str =
    "## Error generating report.\nPlease check your API Key configuration.";

/// Shown when the narrative call succeeds but returns no text.
pub const NARRATIVE_EMPTY_PLACEHOLDER: &str =
    "## Error generating report.\nCould not retrieve content from the model.";

/// Static fallback used whenever the sentiment response is unusable.
pub fn fallback_insights() -> SentimentInsights {
    SentimentInsights {
        strengths: vec!["High Reliability".to_string(), "Good Battery".to_string()],
        weaknesses: vec!["High Price".to_string(), "Bulky Design".to_string()],
    }
}

/// Interpret the narrative call outcome. Returns the report body plus a
/// degraded flag; raw empty text is never surfaced.
pub fn narrative_or_placeholder(outcome: crate::Result<String>) -> (String, bool) {
    match outcome {
        Ok(text) if !text.trim().is_empty() => (text, false),
        Ok(_) => (NARRATIVE_EMPTY_PLACEHOLDER.to_string(), true),
        Err(_) => (NARRATIVE_FAILURE_PLACEHOLDER.to_string(), true),
    }
}

/// Parse a sentiment response strictly against the two-list schema.
///
/// Models sometimes wrap JSON replies in markdown fences even when asked
/// not to, so fences are stripped before parsing. Shape mismatches (wrong
/// field names, non-list values, non-string entries, empty lists) are
/// rejected so the caller can apply the fixed fallback uniformly.
pub fn parse_sentiment(response: &str) -> crate::Result<SentimentInsights> {
    let cleaned = strip_code_fences(response);

    let json: Value = serde_json::from_str(cleaned).map_err(|e| {
        SynthesisError::Parse(format!("sentiment response is not valid JSON: {}", e))
    })?;

    let strengths = string_list(&json, "strengths")?;
    let weaknesses = string_list(&json, "weaknesses")?;

    Ok(SentimentInsights {
        strengths,
        weaknesses,
    })
}

fn string_list(json: &Value, field: &str) -> crate::Result<Vec<String>> {
    let array = json
        .get(field)
        .ok_or_else(|| SynthesisError::Parse(format!("missing '{}' field", field)))?
        .as_array()
        .ok_or_else(|| SynthesisError::Parse(format!("'{}' is not an array", field)))?;

    if array.is_empty() {
        return Err(SynthesisError::Parse(format!("'{}' is empty", field)));
    }

    array
        .iter()
        .map(|v| {
            v.as_str()
                .map(|s| s.to_string())
                .ok_or_else(|| {
                    SynthesisError::Parse(format!("'{}' contains a non-string entry", field))
                })
        })
        .collect()
}

fn strip_code_fences(response: &str) -> &str {
    response
        .trim()
        .trim_start_matches("```json")
        .trim_start_matches("```")
        .trim_end_matches("```")
        .trim()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SynthesisError;

    #[test]
    fn valid_sentiment_passes_through_unmodified() {
        let response = r#"{"strengths":["A","B","C"],"weaknesses":["X","Y","Z"]}"#;
        let insights = parse_sentiment(response).unwrap();
        assert_eq!(insights.strengths, vec!["A", "B", "C"]);
        assert_eq!(insights.weaknesses, vec!["X", "Y", "Z"]);
    }

    #[test]
    fn fenced_sentiment_is_unwrapped() {
        let response = "```json\n{\"strengths\":[\"A\"],\"weaknesses\":[\"X\"]}\n```";
        let insights = parse_sentiment(response).unwrap();
        assert_eq!(insights.strengths, vec!["A"]);
    }

    #[test]
    fn invalid_json_is_a_parse_failure() {
        assert!(matches!(
            parse_sentiment("not json"),
            Err(SynthesisError::Parse(_))
        ));
    }

    #[test]
    fn wrong_field_names_are_rejected() {
        let response = r#"{"pros":["A"],"cons":["X"]}"#;
        assert!(matches!(
            parse_sentiment(response),
            Err(SynthesisError::Parse(_))
        ));
    }

    #[test]
    fn non_list_values_are_rejected() {
        let response = r#"{"strengths":"A","weaknesses":["X"]}"#;
        assert!(parse_sentiment(response).is_err());
    }

    #[test]
    fn non_string_entries_are_rejected() {
        let response = r#"{"strengths":[1,2,3],"weaknesses":["X"]}"#;
        assert!(parse_sentiment(response).is_err());
    }

    #[test]
    fn empty_lists_are_rejected() {
        let response = r#"{"strengths":[],"weaknesses":["X"]}"#;
        assert!(parse_sentiment(response).is_err());
    }

    #[test]
    fn fallback_has_fixed_contents() {
        let fallback = fallback_insights();
        assert_eq!(fallback.strengths, vec!["High Reliability", "Good Battery"]);
        assert_eq!(fallback.weaknesses, vec!["High Price", "Bulky Design"]);
    }

    #[test]
    fn narrative_passes_through_on_success() {
        let (body, degraded) =
            narrative_or_placeholder(Ok("## Weekly Report\nAll good.".to_string()));
        assert_eq!(body, "## Weekly Report\nAll good.");
        assert!(!degraded);
    }

    #[test]
    fn empty_narrative_becomes_placeholder() {
        let (body, degraded) = narrative_or_placeholder(Ok("   ".to_string()));
        assert_eq!(body, NARRATIVE_EMPTY_PLACEHOLDER);
        assert!(degraded);
    }

    #[test]
    fn failed_narrative_becomes_placeholder() {
        let (body, degraded) = narrative_or_placeholder(Err(SynthesisError::Generation(
            "boom".to_string(),
        )));
        assert_eq!(body, NARRATIVE_FAILURE_PLACEHOLDER);
        assert!(body.starts_with("## Error generating report."));
        assert!(degraded);
    }
}
