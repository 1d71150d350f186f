use serde::{Deserialize, Serialize};

pub mod scorer;
pub mod volatility;

pub use scorer::EmotionScorer;
pub use volatility::VolatilityMetrics;

/// Sentiment estimate for one transcript segment, one-to-one with its input.
/// `emotion_score` is in [-1, 1]; the word lists hold every matched surface
/// form in order of occurrence, duplicates included.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmotionSegment {
    pub start_time: f64,
    pub end_time: f64,
    pub text: String,
    pub emotion_score: f64,
    pub positive_words: Vec<String>,
    pub negative_words: Vec<String>,
}
