use crate::emotion::{EmotionScorer, EmotionSegment, VolatilityMetrics};
use crate::keywords::{extract_keywords, KeywordCount};
use crate::lexicon::AnalysisTables;
use crate::persuasion::{PersuasionDetector, PersuasionMatch};
use crate::transcript::{Transcript, TranscriptSegment};
use serde::{Deserialize, Serialize};
use tracing::debug;

const DEFAULT_KEYWORD_TOP_N: usize = 30;

/// Combined output of one analysis run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub emotion_segments: Vec<EmotionSegment>,
    pub volatility: VolatilityMetrics,
    pub techniques: Vec<PersuasionMatch>,
    pub keywords: Vec<KeywordCount>,
}

/// Tuning knobs that are not table data
#[derive(Debug, Clone, Copy)]
pub struct AnalysisOptions {
    pub keyword_top_n: usize,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            keyword_top_n: DEFAULT_KEYWORD_TOP_N,
        }
    }
}

/// Runs the full pre-analysis pipeline: per-segment sentiment, volatility
/// over the score sequence, persuasion techniques and keywords over the
/// full text. Owns the validated tables; every call is a pure function of
/// its inputs, so one engine can serve any number of threads.
pub struct AnalysisEngine {
    tables: AnalysisTables,
    options: AnalysisOptions,
}

impl AnalysisEngine {
    pub fn new(tables: AnalysisTables) -> Self {
        Self::with_options(tables, AnalysisOptions::default())
    }

    pub fn with_options(tables: AnalysisTables, options: AnalysisOptions) -> Self {
        Self { tables, options }
    }

    pub fn tables(&self) -> &AnalysisTables {
        &self.tables
    }

    /// Analyze an ordered segment sequence plus the separately supplied
    /// full transcript text.
    pub fn analyze(&self, segments: &[TranscriptSegment], full_text: &str) -> AnalysisReport {
        let scorer = EmotionScorer::new(&self.tables.sentiment);
        let detector = PersuasionDetector::new(&self.tables.techniques);

        let emotion_segments = scorer.score_segments(segments);
        let volatility = VolatilityMetrics::from_segments(&emotion_segments);
        let techniques = detector.detect(full_text);
        let keywords = extract_keywords(full_text, self.options.keyword_top_n);

        debug!(
            segments = emotion_segments.len(),
            techniques = techniques.len(),
            keywords = keywords.len(),
            "analysis complete"
        );

        AnalysisReport {
            emotion_segments,
            volatility,
            techniques,
            keywords,
        }
    }

    /// Convenience for callers holding a Transcript: the full text is
    /// derived from the segments.
    pub fn analyze_transcript(&self, transcript: &Transcript) -> AnalysisReport {
        self.analyze(&transcript.segments, &transcript.full_text())
    }
}
