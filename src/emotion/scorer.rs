use crate::emotion::EmotionSegment;
use crate::lexicon::SentimentLexicon;
use crate::matcher::scan_triggers;
use crate::transcript::TranscriptSegment;
use tracing::debug;

/// Scores transcript segments against a sentiment lexicon.
///
/// Each occurrence of a positive trigger counts +1 and each occurrence of a
/// negative trigger counts -1; the score is the tally normalized by the
/// total occurrence count, `(pos - neg) / (pos + neg)`, so a segment
/// dominated by one polarity saturates at ±1 regardless of length and a
/// segment with no matches scores exactly 0.
pub struct EmotionScorer<'a> {
    lexicon: &'a SentimentLexicon,
}

impl<'a> EmotionScorer<'a> {
    pub fn new(lexicon: &'a SentimentLexicon) -> Self {
        Self { lexicon }
    }

    /// Produce exactly one EmotionSegment for the given segment. Timing is
    /// copied through untouched.
    pub fn score_segment(&self, segment: &TranscriptSegment) -> EmotionSegment {
        let positive_hits = scan_triggers(&segment.text, &self.lexicon.positive);
        let negative_hits = scan_triggers(&segment.text, &self.lexicon.negative);

        let pos = positive_hits.len();
        let neg = negative_hits.len();
        let total = pos + neg;
        let emotion_score = if total == 0 {
            0.0
        } else {
            (pos as f64 - neg as f64) / total as f64
        };

        EmotionSegment {
            start_time: segment.start_time,
            end_time: segment.end_time,
            text: segment.text.clone(),
            emotion_score,
            positive_words: positive_hits.into_iter().map(|o| o.surface).collect(),
            negative_words: negative_hits.into_iter().map(|o| o.surface).collect(),
        }
    }

    pub fn score_segments(&self, segments: &[TranscriptSegment]) -> Vec<EmotionSegment> {
        let scored: Vec<EmotionSegment> =
            segments.iter().map(|s| self.score_segment(s)).collect();
        debug!(
            segments = scored.len(),
            matched = scored
                .iter()
                .filter(|s| !s.positive_words.is_empty() || !s.negative_words.is_empty())
                .count(),
            "scored transcript segments"
        );
        scored
    }
}
