use serde::{Deserialize, Serialize};

pub mod detector;

pub use detector::PersuasionDetector;

/// All hits for one technique category in a transcript. Techniques with no
/// hits never produce a record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersuasionMatch {
    /// Catalog identifier, e.g. "urgency"
    pub technique: String,
    /// Configured category name, e.g. "緊急性・限定性"
    pub label: String,
    /// Matched surface forms in appearance order, duplicates preserved
    pub matches: Vec<String>,
}
