//! NLP pre-analysis engine for video ad transcripts.
//!
//! Three pure components over a load-once table set: a lexicon sentiment
//! scorer (one emotion record per transcript segment), a volatility
//! aggregator over the ordered score sequence, and a persuasion-technique
//! detector over the full transcript text. Everything is deterministic
//! string matching against read-only tables; there is no I/O and no shared
//! mutable state, so the engine can be called from any number of threads.

pub mod cli;
pub mod config;
pub mod emotion;
pub mod error;
pub mod keywords;
pub mod lexicon;
pub mod matcher;
pub mod persuasion;
pub mod report;
pub mod transcript;

pub use emotion::{EmotionScorer, EmotionSegment, VolatilityMetrics};
pub use error::{AdpulseError, Result};
pub use keywords::{extract_keywords, KeywordCount};
pub use lexicon::AnalysisTables;
pub use persuasion::{PersuasionDetector, PersuasionMatch};
pub use report::{AnalysisEngine, AnalysisOptions, AnalysisReport};
pub use transcript::{Transcript, TranscriptSegment};
