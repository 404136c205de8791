//! CLI argument definitions for DOK Studio.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "dok-studio",
    version,
    about = "DOK Studio - DOK-aligned assessment items and standards seeding",
    long_about = "Generate Depth-of-Knowledge aligned assessment items and classroom\n\
                  activities, and convert subject standards CSV files into\n\
                  grade-indexed JSON lookups."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Prefix log lines with a timestamp.
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,

    /// Include the emitting module path in log lines.
    #[arg(long = "log-target", global = true)]
    pub log_target: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Convert subject CSV files into grade-indexed JSON.
    Seed(SeedArgs),

    /// Generate assessment items and activities for a standard.
    Generate(GenerateArgs),

    /// List the DOK levels with their definitions and verbs.
    Levels,
}

#[derive(Parser)]
pub struct SeedArgs {
    /// Project root (default: $DOK_STUDIO_ROOT or the current directory).
    #[arg(long = "root", value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Seed config file (default: <ROOT>/seed.toml when present).
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Directory holding the subject CSV files (default: <ROOT>/data).
    #[arg(long = "data-dir", value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Directory for the generated JSON files (default: <ROOT>/standards).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Verify existing outputs are current without writing anything.
    ///
    /// Exits with status 1 when any output is missing or out of date.
    #[arg(long = "check")]
    pub check: bool,

    /// Print the seed report as JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct GenerateArgs {
    /// Standard code and statement, e.g. "RL.5.1 – cite evidence".
    #[arg(long = "standard", value_name = "TEXT")]
    pub standard: String,

    /// Subject label.
    #[arg(long = "subject", default_value = "")]
    pub subject: String,

    /// Grade or grade band label.
    #[arg(long = "grade", default_value = "")]
    pub grade: String,

    /// DOK level (1-4).
    #[arg(long = "dok", allow_hyphen_values = true)]
    pub dok: i64,

    /// Which artifacts to generate.
    #[arg(long = "kind", value_enum, default_value = "all")]
    pub kind: ArtifactKindArg,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "json")]
    pub format: OutputFormatArg,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ArtifactKindArg {
    Items,
    Activities,
    All,
}

impl ArtifactKindArg {
    pub fn includes_items(self) -> bool {
        matches!(self, ArtifactKindArg::Items | ArtifactKindArg::All)
    }

    pub fn includes_activities(self) -> bool {
        matches!(self, ArtifactKindArg::Activities | ArtifactKindArg::All)
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Json,
    Table,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
