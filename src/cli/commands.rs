use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "adpulse")]
#[command(
    author,
    version,
    about = "NLP pre-analysis engine for video ad transcripts"
)]
#[command(
    long_about = "Score transcript segments against a sentiment lexicon, derive emotion volatility statistics, and detect persuasion techniques before any AI analysis"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the full analysis over a transcript segment file
    Analyze {
        /// Segments JSON file: [{"start_time", "end_time", "text"}, ...] ("-" for stdin)
        input: PathBuf,

        /// Full transcript text file (derived from the segments if omitted)
        #[arg(short, long)]
        text: Option<PathBuf>,

        /// Analysis tables TOML file (overrides the configured tables)
        #[arg(long)]
        tables: Option<PathBuf>,

        /// Pretty-print the JSON report
        #[arg(short, long)]
        pretty: bool,
    },

    /// Emotion timeline and volatility metrics only
    Emotions {
        /// Segments JSON file ("-" for stdin)
        input: PathBuf,

        /// Pretty-print the JSON output
        #[arg(short, long)]
        pretty: bool,
    },

    /// Detect persuasion techniques in a plain-text transcript
    Techniques {
        /// Transcript text file ("-" for stdin)
        input: PathBuf,

        /// Pretty-print the JSON output
        #[arg(short, long)]
        pretty: bool,
    },

    /// Frequency-ranked keywords from a plain-text transcript
    Keywords {
        /// Transcript text file ("-" for stdin)
        input: PathBuf,

        /// Number of keywords to report (default from config)
        #[arg(short = 'n', long)]
        top: Option<usize>,

        /// Pretty-print the JSON output
        #[arg(short, long)]
        pretty: bool,
    },

    /// Analysis tables management
    Tables {
        #[command(subcommand)]
        action: TablesCommands,
    },

    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

#[derive(Subcommand)]
pub enum TablesCommands {
    /// Show the tables the engine would use
    Show,
    /// Print the user tables file path
    Path,
    /// Write the builtin tables to the config dir for editing
    Init,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,
    /// Print config file path
    Path,
    /// Initialize default configuration
    Init,
}
