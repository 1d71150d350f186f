use crate::emotion::EmotionSegment;
use serde::{Deserialize, Serialize};

/// Summary statistics over an ordered emotion-score sequence.
///
/// `volatility_std` is the population standard deviation (the sequence is
/// the complete population of segments for one video). `max_amplitude` is
/// the largest absolute swing between consecutive scores, not the largest
/// single score magnitude.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolatilityMetrics {
    pub volatility_std: f64,
    pub direction_changes: u32,
    pub max_amplitude: f64,
    pub avg_score: f64,
    pub score_range: f64,
}

impl VolatilityMetrics {
    pub fn zero() -> Self {
        Self {
            volatility_std: 0.0,
            direction_changes: 0,
            max_amplitude: 0.0,
            avg_score: 0.0,
            score_range: 0.0,
        }
    }

    pub fn from_segments(segments: &[EmotionSegment]) -> Self {
        let scores: Vec<f64> = segments.iter().map(|s| s.emotion_score).collect();
        Self::from_scores(&scores)
    }

    pub fn from_scores(scores: &[f64]) -> Self {
        if scores.is_empty() {
            return Self::zero();
        }

        let n = scores.len() as f64;
        let avg = scores.iter().sum::<f64>() / n;
        let variance = scores.iter().map(|s| (s - avg).powi(2)).sum::<f64>() / n;

        // Sign flips between consecutive nonzero scores; zeros are neutral
        // and never count as a direction themselves.
        let mut direction_changes = 0u32;
        let mut prev_nonzero: Option<f64> = None;
        for &score in scores {
            if score != 0.0 {
                if let Some(prev) = prev_nonzero {
                    if (score > 0.0) != (prev > 0.0) {
                        direction_changes += 1;
                    }
                }
                prev_nonzero = Some(score);
            }
        }

        let max_amplitude = scores
            .windows(2)
            .map(|pair| (pair[1] - pair[0]).abs())
            .fold(0.0, f64::max);

        let min = scores.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = scores.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

        Self {
            volatility_std: variance.sqrt(),
            direction_changes,
            max_amplitude,
            avg_score: avg,
            score_range: max - min,
        }
    }
}
