use crate::config::settings::AdpulseConfig;
use crate::error::{AdpulseError, Result};
use crate::lexicon::AnalysisTables;
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Get XDG-compliant config directory
pub fn config_dir() -> Result<PathBuf> {
    ProjectDirs::from("", "", "adpulse")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| AdpulseError::Config("Could not determine config directory".to_string()))
}

/// Get config file path
pub fn config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.toml"))
}

/// Get the user analysis-tables file path
pub fn tables_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("tables.toml"))
}

/// Load config from file, creating default if not exists
pub fn load_config() -> Result<AdpulseConfig> {
    let path = config_path()?;

    if !path.exists() {
        let config = AdpulseConfig::default();
        save_config(&config)?;
        return Ok(config);
    }

    let content = fs::read_to_string(&path)?;
    let config: AdpulseConfig = toml::from_str(&content)?;
    Ok(config)
}

/// Save config to file
pub fn save_config(config: &AdpulseConfig) -> Result<()> {
    let path = config_path()?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let content = toml::to_string_pretty(config)?;
    fs::write(&path, content)?;
    Ok(())
}

pub fn load_config_with_env() -> Result<AdpulseConfig> {
    let mut config = load_config()?;

    if let Ok(path) = std::env::var("ADPULSE_TABLES_PATH") {
        config.tables.path = Some(PathBuf::from(path));
    }
    if let Ok(top_n) = std::env::var("ADPULSE_KEYWORD_TOP_N") {
        config.analysis.keyword_top_n = top_n
            .parse()
            .map_err(|_| AdpulseError::Config(format!("ADPULSE_KEYWORD_TOP_N: {}", top_n)))?;
    }

    Ok(config)
}

/// Resolve the analysis tables for this run: an explicitly configured file
/// wins, then a user tables file in the config dir, then the builtin
/// tables. Any load or validation failure is fatal here, before the engine
/// is constructed.
pub fn load_tables(config: &AdpulseConfig) -> Result<AnalysisTables> {
    if let Some(path) = &config.tables.path {
        return AnalysisTables::from_path(path);
    }

    let user_tables = tables_path()?;
    if user_tables.exists() {
        return AnalysisTables::from_path(&user_tables);
    }

    info!("no user tables file, using builtin analysis tables");
    AnalysisTables::builtin()
}

/// Write the builtin tables to the config dir as a starting point for
/// customization. Refuses to clobber an existing file.
pub fn init_tables_file(path: &Path) -> Result<()> {
    if path.exists() {
        return Err(AdpulseError::Config(format!(
            "tables file already exists: {}",
            path.display()
        )));
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, crate::lexicon::builtin::BUILTIN_TABLES)?;
    Ok(())
}
