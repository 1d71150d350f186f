use crate::error::{AdpulseError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::info;

pub mod builtin;

/// Word lists for segment sentiment scoring
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentimentLexicon {
    pub positive: Vec<String>,
    pub negative: Vec<String>,
}

/// One persuasion technique category and its trigger phrases
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TechniqueEntry {
    /// Stable identifier, e.g. "urgency"
    pub id: String,
    /// Human-facing category name, e.g. "緊急性・限定性"
    pub label: String,
    pub triggers: Vec<String>,
}

/// The full read-only table set the engine scores against. Loaded once at
/// startup, validated, never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisTables {
    pub sentiment: SentimentLexicon,
    #[serde(rename = "technique")]
    pub techniques: Vec<TechniqueEntry>,
}

impl AnalysisTables {
    /// Parse and validate the tables embedded in the binary
    pub fn builtin() -> Result<Self> {
        Self::from_toml_str(builtin::BUILTIN_TABLES)
    }

    /// Load and validate tables from a TOML file
    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(AdpulseError::TablesNotFound(path.to_path_buf()));
        }
        let content = fs::read_to_string(path)?;
        let tables = Self::from_toml_str(&content)?;
        info!(
            path = %path.display(),
            positive = tables.sentiment.positive.len(),
            negative = tables.sentiment.negative.len(),
            techniques = tables.techniques.len(),
            "loaded analysis tables"
        );
        Ok(tables)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let tables: AnalysisTables = toml::from_str(content)?;
        tables.validate()?;
        Ok(tables)
    }

    /// Reject table sets the engine must not score against. An empty or
    /// half-empty table would report "no sentiment detected" as if that
    /// were a true negative, so loading fails instead.
    pub fn validate(&self) -> Result<()> {
        if self.sentiment.positive.is_empty() {
            return Err(AdpulseError::InvalidTables(
                "positive lexicon is empty".to_string(),
            ));
        }
        if self.sentiment.negative.is_empty() {
            return Err(AdpulseError::InvalidTables(
                "negative lexicon is empty".to_string(),
            ));
        }
        if self.techniques.is_empty() {
            return Err(AdpulseError::InvalidTables(
                "technique catalog is empty".to_string(),
            ));
        }

        for word in self.sentiment.positive.iter().chain(&self.sentiment.negative) {
            if word.trim().is_empty() {
                return Err(AdpulseError::InvalidTables(
                    "sentiment lexicon contains an empty word".to_string(),
                ));
            }
        }

        let mut seen_ids = HashSet::new();
        for technique in &self.techniques {
            if technique.id.trim().is_empty() {
                return Err(AdpulseError::InvalidTables(
                    "technique with empty id".to_string(),
                ));
            }
            if !seen_ids.insert(technique.id.as_str()) {
                return Err(AdpulseError::InvalidTables(format!(
                    "duplicate technique id: {}",
                    technique.id
                )));
            }
            if technique.triggers.is_empty() {
                return Err(AdpulseError::InvalidTables(format!(
                    "technique {} has no triggers",
                    technique.id
                )));
            }
            if technique.triggers.iter().any(|t| t.trim().is_empty()) {
                return Err(AdpulseError::InvalidTables(format!(
                    "technique {} contains an empty trigger",
                    technique.id
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_builtin_tables_parse_and_validate() {
        let tables = AnalysisTables::builtin().unwrap();
        assert!(tables.sentiment.positive.contains(&"素晴らしい".to_string()));
        assert!(tables.sentiment.negative.contains(&"不安".to_string()));
        assert_eq!(tables.techniques.len(), 4);
        assert!(tables.techniques.iter().any(|t| t.id == "scarcity"));
    }

    #[test]
    fn test_from_path_missing_file() {
        let err = AnalysisTables::from_path(Path::new("/nonexistent/tables.toml")).unwrap_err();
        assert!(matches!(err, AdpulseError::TablesNotFound(_)));
    }

    #[test]
    fn test_from_path_roundtrip() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(builtin::BUILTIN_TABLES.as_bytes()).unwrap();
        let tables = AnalysisTables::from_path(file.path()).unwrap();
        assert!(!tables.sentiment.positive.is_empty());
    }

    #[test]
    fn test_empty_lexicon_side_rejected() {
        let toml = r#"
            [sentiment]
            positive = ["良い"]
            negative = []

            [[technique]]
            id = "urgency"
            label = "緊急性"
            triggers = ["今すぐ"]
        "#;
        let err = AnalysisTables::from_toml_str(toml).unwrap_err();
        assert!(matches!(err, AdpulseError::InvalidTables(_)));
    }

    #[test]
    fn test_duplicate_technique_id_rejected() {
        let toml = r#"
            [sentiment]
            positive = ["良い"]
            negative = ["悪い"]

            [[technique]]
            id = "urgency"
            label = "a"
            triggers = ["今すぐ"]

            [[technique]]
            id = "urgency"
            label = "b"
            triggers = ["限定"]
        "#;
        let err = AnalysisTables::from_toml_str(toml).unwrap_err();
        assert!(matches!(err, AdpulseError::InvalidTables(_)));
    }

    #[test]
    fn test_technique_without_triggers_rejected() {
        let toml = r#"
            [sentiment]
            positive = ["良い"]
            negative = ["悪い"]

            [[technique]]
            id = "urgency"
            label = "緊急性"
            triggers = []
        "#;
        assert!(AnalysisTables::from_toml_str(toml).is_err());
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let err = AnalysisTables::from_toml_str("sentiment = [[[").unwrap_err();
        assert!(matches!(err, AdpulseError::TomlParse(_)));
    }
}
