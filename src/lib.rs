//! Market Intelligence Synthesis Engine
//!
//! Turns a read-only market snapshot (competitors, trends, review samples)
//! into a merged intelligence report:
//! - Builds two independent prompts (narrative weekly report, sentiment
//!   strength/weakness extraction)
//! - Issues both generation calls concurrently against a Gemini backend
//! - Degrades each half independently to fixed placeholder/fallback values
//!   so the caller always receives a complete report
//!
//! PIPELINE:
//! SNAPSHOT → {PROMPT → GENERATE → PARSE} × 2 (concurrent) → MERGED REPORT

pub mod api;
pub mod error;
pub mod gemini;
pub mod models;
pub mod parser;
pub mod prompt;
pub mod snapshot;
pub mod synthesis;

pub use error::Result;

// Re-export common types
pub use models::*;
pub use synthesis::SynthesisEngine;
