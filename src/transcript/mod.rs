use crate::error::{AdpulseError, Result};
use serde::{Deserialize, Serialize};

/// A timestamped span of transcribed text
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptSegment {
    pub start_time: f64,
    pub end_time: f64,
    pub text: String,
}

impl TranscriptSegment {
    pub fn new(start_time: f64, end_time: f64, text: impl Into<String>) -> Self {
        Self {
            start_time,
            end_time,
            text: text.into(),
        }
    }

    pub fn duration(&self) -> f64 {
        self.end_time - self.start_time
    }

    pub fn format_timestamp(&self) -> String {
        let start_sec = self.start_time.max(0.0) as u64;
        let start_min = start_sec / 60;
        let start_sec = start_sec % 60;
        format!("{:02}:{:02}", start_min, start_sec)
    }
}

/// Full transcript
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transcript {
    pub segments: Vec<TranscriptSegment>,
    pub language: Option<String>,
    pub duration_secs: f64,
}

impl Transcript {
    pub fn new(segments: Vec<TranscriptSegment>) -> Self {
        let duration_secs = segments.last().map(|s| s.end_time).unwrap_or(0.0);
        Self {
            segments,
            language: None,
            duration_secs,
        }
    }

    pub fn full_text(&self) -> String {
        self.segments
            .iter()
            .map(|s| s.text.as_str())
            .filter(|t| !t.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Check segment timing. The analysis engine never calls this (timing is
/// pass-through there); callers that want rejection instead of pass-through
/// run it before handing segments over.
pub fn validate_segments(segments: &[TranscriptSegment]) -> Result<()> {
    for (i, seg) in segments.iter().enumerate() {
        if seg.start_time < 0.0 {
            return Err(AdpulseError::InvalidSegment(format!(
                "segment {} has negative start_time {}",
                i, seg.start_time
            )));
        }
        if seg.end_time <= seg.start_time {
            return Err(AdpulseError::InvalidSegment(format!(
                "segment {} has end_time {} <= start_time {}",
                i, seg.end_time, seg.start_time
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_text_skips_empty_segments() {
        let transcript = Transcript::new(vec![
            TranscriptSegment::new(0.0, 5.0, "hello"),
            TranscriptSegment::new(5.0, 10.0, ""),
            TranscriptSegment::new(10.0, 15.0, "world"),
        ]);
        assert_eq!(transcript.full_text(), "hello world");
        assert_eq!(transcript.duration_secs, 15.0);
    }

    #[test]
    fn test_validate_accepts_well_formed() {
        let segments = vec![
            TranscriptSegment::new(0.0, 5.0, "a"),
            TranscriptSegment::new(5.0, 10.0, ""),
        ];
        assert!(validate_segments(&segments).is_ok());
    }

    #[test]
    fn test_validate_rejects_inverted_timing() {
        let segments = vec![TranscriptSegment::new(5.0, 5.0, "a")];
        let err = validate_segments(&segments).unwrap_err();
        assert!(matches!(err, AdpulseError::InvalidSegment(_)));
    }

    #[test]
    fn test_validate_rejects_negative_start() {
        let segments = vec![TranscriptSegment::new(-1.0, 5.0, "a")];
        assert!(validate_segments(&segments).is_err());
    }

    #[test]
    fn test_format_timestamp() {
        assert_eq!(TranscriptSegment::new(0.0, 1.0, "").format_timestamp(), "00:00");
        assert_eq!(TranscriptSegment::new(65.0, 70.0, "").format_timestamp(), "01:05");
    }
}
