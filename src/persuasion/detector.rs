use crate::lexicon::TechniqueEntry;
use crate::matcher::scan_triggers;
use crate::persuasion::PersuasionMatch;
use tracing::debug;

/// Scans full transcript text for rhetorical technique triggers.
///
/// Works on the unsegmented text; segment boundaries and timing play no
/// role here.
pub struct PersuasionDetector<'a> {
    catalog: &'a [TechniqueEntry],
}

impl<'a> PersuasionDetector<'a> {
    pub fn new(catalog: &'a [TechniqueEntry]) -> Self {
        Self { catalog }
    }

    /// One PersuasionMatch per technique with at least one hit, in catalog
    /// order. Within a technique, hits from all its triggers are merged
    /// into appearance order; the same phrase firing repeatedly is recorded
    /// once per occurrence.
    pub fn detect(&self, text: &str) -> Vec<PersuasionMatch> {
        if text.trim().is_empty() {
            return Vec::new();
        }

        let detected: Vec<PersuasionMatch> = self
            .catalog
            .iter()
            .filter_map(|technique| {
                let hits = scan_triggers(text, &technique.triggers);
                if hits.is_empty() {
                    return None;
                }
                Some(PersuasionMatch {
                    technique: technique.id.clone(),
                    label: technique.label.clone(),
                    matches: hits.into_iter().map(|o| o.surface).collect(),
                })
            })
            .collect();

        debug!(
            techniques = detected.len(),
            hits = detected.iter().map(|d| d.matches.len()).sum::<usize>(),
            "scanned transcript for persuasion techniques"
        );
        detected
    }
}
