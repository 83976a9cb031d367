//! Synthesis orchestrator
//!
//! Fans out the narrative and sentiment generation calls concurrently,
//! joins both, and merges the halves into one `MarketReport`. The halves
//! fail independently: each absorbs its own failure into a fixed
//! placeholder or fallback and never aborts the other.
//!
//! No caching, no request coalescing, no cancellation: every invocation
//! re-issues both calls, and overlapping invocations run independently.

use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::gemini::TextGenerator;
use crate::models::{MarketReport, MarketSnapshot, SentimentInsights};
use crate::parser;
use crate::prompt;

/// Coordinates one report-generation invocation over an injected backend.
pub struct SynthesisEngine {
    generator: Arc<dyn TextGenerator>,
}

impl SynthesisEngine {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// Generate a merged market report from a read-only snapshot.
    ///
    /// The only hard error is a misaligned snapshot, caught before any
    /// network call. Generation and parse failures degrade per half:
    /// placeholder narrative, fixed fallback insights, degraded flags set,
    /// and a warn diagnostic emitted for monitoring.
    pub async fn generate_report(&self, snapshot: &MarketSnapshot) -> crate::Result<MarketReport> {
        snapshot.validate_alignment()?;

        let started = Instant::now();
        info!(
            competitors = snapshot.competitors.len(),
            trends = snapshot.trends.len(),
            reviews = snapshot.reviews.len(),
            "Starting report synthesis"
        );

        let (narrative_outcome, sentiment_outcome) = tokio::join!(
            self.run_narrative(snapshot),
            self.run_sentiment(snapshot),
        );

        let (narrative, narrative_degraded) = parser::narrative_or_placeholder(narrative_outcome);
        if narrative_degraded {
            warn!("Narrative generation degraded to placeholder");
        }

        let (insights, sentiment_degraded) = match sentiment_outcome {
            Ok(insights) => (insights, false),
            Err(e) => {
                warn!("Sentiment extraction degraded to fallback: {}", e);
                (parser::fallback_insights(), true)
            }
        };

        info!(
            elapsed_ms = started.elapsed().as_millis() as u64,
            narrative_degraded,
            sentiment_degraded,
            "Report synthesis complete"
        );

        Ok(MarketReport {
            report_id: Uuid::new_v4(),
            generated_at: Utc::now(),
            narrative,
            insights,
            narrative_degraded,
            sentiment_degraded,
        })
    }

    async fn run_narrative(&self, snapshot: &MarketSnapshot) -> crate::Result<String> {
        let prompt = prompt::build_report_prompt(snapshot)?;
        self.generator.generate(&prompt, false).await
    }

    async fn run_sentiment(&self, snapshot: &MarketSnapshot) -> crate::Result<SentimentInsights> {
        let prompt = prompt::build_sentiment_prompt(&snapshot.reviews)?;
        let response = self.generator.generate(&prompt, true).await?;
        parser::parse_sentiment(&response)
    }
}
