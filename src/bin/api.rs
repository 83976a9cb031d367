use market_intel_engine::api::start_server;
use market_intel_engine::gemini::GeminiClient;
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
        eprintln!("GEMINI_API_KEY not set in .env");
        eprintln!("Generation calls will fail and reports will degrade to fallbacks");
        String::new()
    });

    let api_port: u16 = std::env::var("PORT")
        .or_else(|_| std::env::var("API_PORT"))
        .unwrap_or_else(|_| "8080".to_string())
        .parse()?;

    info!("Market Intelligence Synthesis - API Server");
    info!("Port: {}", api_port);

    let client = Arc::new(GeminiClient::new(gemini_api_key));
    let engine = Arc::new(SynthesisEngine::new(client));

    info!("Synthesis engine initialized");
    info!("Starting API server...");

    start_server(engine, api_port).await?;

    Ok(())
}
