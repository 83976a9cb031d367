//! One-shot demo: run the synthesis pipeline over the shipped snapshot
//! and print the merged report.

use market_intel_engine::gemini::GeminiClient;
use market_intel_engine::snapshot::demo_snapshot;
use market_intel_engine::synthesis::SynthesisEngine;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    // Load environment variables
    dotenv::dotenv().ok();

    let gemini_api_key = std::env::var("GEMINI_API_KEY").unwrap_or_else(|_| {
        eprintln!("GEMINI_API_KEY not set in .env; calls will degrade to fallbacks");
        String::new()
    });

    info!("Market Intelligence Synthesis - demo run");

    let client = Arc::new(GeminiClient::new(gemini_api_key));
    let engine = SynthesisEngine::new(client);

    let snapshot = demo_snapshot();
    let report = engine.generate_report(&snapshot).await?;

    println!("{}", report.narrative);
    println!();
    println!("Strengths:");
    for s in &report.insights.strengths {
        println!("  - {}", s);
    }
    println!("Weaknesses:");
    for w in &report.insights.weaknesses {
        println!("  - {}", w);
    }

    if report.narrative_degraded || report.sentiment_degraded {
        eprintln!(
            "note: degraded output (narrative={}, sentiment={})",
            report.narrative_degraded, report.sentiment_degraded
        );
    }

    Ok(())
}
