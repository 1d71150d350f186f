use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration struct
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AdpulseConfig {
    #[serde(default)]
    pub tables: TablesConfig,

    #[serde(default)]
    pub analysis: AnalysisConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TablesConfig {
    /// Explicit analysis-tables file (None = user tables file if present,
    /// else the builtin tables)
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// How many keywords the report carries
    #[serde(default = "default_keyword_top_n")]
    pub keyword_top_n: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            keyword_top_n: default_keyword_top_n(),
        }
    }
}

fn default_keyword_top_n() -> usize {
    30
}
