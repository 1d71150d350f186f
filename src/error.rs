use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AdpulseError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Analysis tables not found: {0}")]
    TablesNotFound(PathBuf),

    #[error("Invalid analysis tables: {0}")]
    InvalidTables(String),

    #[error("Invalid segment: {0}")]
    InvalidSegment(String),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AdpulseError>;
