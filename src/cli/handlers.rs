use crate::cli::commands::*;
use crate::config;
use crate::config::settings::AdpulseConfig;
use crate::emotion::VolatilityMetrics;
use crate::keywords::extract_keywords;
use crate::lexicon::AnalysisTables;
use crate::persuasion::PersuasionDetector;
use crate::report::{AnalysisEngine, AnalysisOptions};
use crate::transcript::{validate_segments, TranscriptSegment};
use anyhow::Context;
use serde::Serialize;
use std::io::Read;
use std::path::Path;

pub fn handle_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Analyze {
            input,
            text,
            tables,
            pretty,
        } => handle_analyze(&input, text.as_deref(), tables.as_deref(), pretty),
        Commands::Emotions { input, pretty } => handle_emotions(&input, pretty),
        Commands::Techniques { input, pretty } => handle_techniques(&input, pretty),
        Commands::Keywords { input, top, pretty } => handle_keywords(&input, top, pretty),
        Commands::Tables { action } => handle_tables(action),
        Commands::Config { action } => handle_config(action),
    }
}

fn handle_analyze(
    input: &Path,
    text: Option<&Path>,
    tables_override: Option<&Path>,
    pretty: bool,
) -> anyhow::Result<()> {
    let config = config::load_config_with_env()?;
    let tables = match tables_override {
        Some(path) => AnalysisTables::from_path(path)
            .with_context(|| format!("loading tables from {}", path.display()))?,
        None => config::load_tables(&config)?,
    };

    let segments = read_segments(input)?;
    validate_segments(&segments)?;

    let full_text = match text {
        Some(path) => read_text(path)?,
        None => segments
            .iter()
            .map(|s| s.text.as_str())
            .filter(|t| !t.is_empty())
            .collect::<Vec<_>>()
            .join(" "),
    };

    let engine = AnalysisEngine::with_options(
        tables,
        AnalysisOptions {
            keyword_top_n: config.analysis.keyword_top_n,
        },
    );
    let report = engine.analyze(&segments, &full_text);
    print_json(&report, pretty)
}

fn handle_emotions(input: &Path, pretty: bool) -> anyhow::Result<()> {
    #[derive(Serialize)]
    struct EmotionOutput {
        emotion_segments: Vec<crate::emotion::EmotionSegment>,
        volatility: VolatilityMetrics,
    }

    let config = config::load_config_with_env()?;
    let tables = config::load_tables(&config)?;
    let segments = read_segments(input)?;
    validate_segments(&segments)?;

    let scorer = crate::emotion::EmotionScorer::new(&tables.sentiment);
    let emotion_segments = scorer.score_segments(&segments);
    let volatility = VolatilityMetrics::from_segments(&emotion_segments);

    print_json(
        &EmotionOutput {
            emotion_segments,
            volatility,
        },
        pretty,
    )
}

fn handle_techniques(input: &Path, pretty: bool) -> anyhow::Result<()> {
    let config = config::load_config_with_env()?;
    let tables = config::load_tables(&config)?;
    let text = read_text(input)?;

    let detector = PersuasionDetector::new(&tables.techniques);
    print_json(&detector.detect(&text), pretty)
}

fn handle_keywords(input: &Path, top: Option<usize>, pretty: bool) -> anyhow::Result<()> {
    let config = config::load_config_with_env()?;
    let text = read_text(input)?;
    let top_n = top.unwrap_or(config.analysis.keyword_top_n);
    print_json(&extract_keywords(&text, top_n), pretty)
}

fn handle_tables(action: TablesCommands) -> anyhow::Result<()> {
    match action {
        TablesCommands::Show => {
            let config = config::load_config_with_env()?;
            let tables = config::load_tables(&config)?;
            println!("{}", toml::to_string_pretty(&tables)?);
        }
        TablesCommands::Path => {
            println!("{}", config::loader::tables_path()?.display());
        }
        TablesCommands::Init => {
            let path = config::loader::tables_path()?;
            config::loader::init_tables_file(&path)?;
            println!("Wrote builtin tables to {}", path.display());
        }
    }
    Ok(())
}

fn handle_config(action: ConfigCommands) -> anyhow::Result<()> {
    match action {
        ConfigCommands::Show => {
            let config = config::load_config()?;
            println!("{}", toml::to_string_pretty(&config)?);
        }
        ConfigCommands::Path => {
            println!("{}", config::loader::config_path()?.display());
        }
        ConfigCommands::Init => {
            config::save_config(&AdpulseConfig::default())?;
            println!("Wrote default config to {}", config::loader::config_path()?.display());
        }
    }
    Ok(())
}

fn read_segments(path: &Path) -> anyhow::Result<Vec<TranscriptSegment>> {
    let content = read_text(path)?;
    let segments: Vec<TranscriptSegment> = serde_json::from_str(&content)
        .with_context(|| format!("parsing segments from {}", path.display()))?;
    Ok(segments)
}

fn read_text(path: &Path) -> anyhow::Result<String> {
    if path.as_os_str() == "-" {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .context("reading stdin")?;
        Ok(content)
    } else {
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
    }
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> anyhow::Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{}", json);
    Ok(())
}
