//! CLI command definitions and argument parsing.

use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

/// Citeline CLI - Render and resolve citations in generated reports.
#[derive(Debug, Parser)]
#[command(name = "citeline")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Base URL of the document/report service
    #[arg(long, global = true, env = "CITELINE_SERVICE_URL")]
    pub service_url: Option<String>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (clean text only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Renumber the citations of a report and print the result
    Render(RenderArgs),

    /// Show the source behind one citation number
    Resolve(ResolveArgs),

    /// Fetch document detail for a source id
    Detail(DetailArgs),

    /// Score the completeness of a citation record
    Score(ScoreArgs),

    /// Manage the configuration file
    Config(ConfigArgs),
}

/// Where to read a report from.
#[derive(Debug, Args)]
#[group(required = true, multiple = false)]
pub struct ReportSource {
    /// Report JSON file (preview body or bare report)
    pub file: Option<PathBuf>,

    /// Fetch the report preview from the service instead
    #[arg(short, long)]
    pub report_id: Option<String>,
}

/// Arguments for the render command.
#[derive(Debug, Parser)]
pub struct RenderArgs {
    #[command(flatten)]
    pub source: ReportSource,

    /// Strip markdown formatting before renumbering
    #[arg(long)]
    pub strip_markdown: bool,
}

/// Arguments for the resolve command.
#[derive(Debug, Parser)]
pub struct ResolveArgs {
    #[command(flatten)]
    pub source: ReportSource,

    /// Section index (1-based)
    #[arg(short, long, default_value = "1")]
    pub section: usize,

    /// Content item index within the section (1-based)
    #[arg(short, long, default_value = "1")]
    pub item: usize,

    /// Citation number as shown in the rendered text
    #[arg(short, long)]
    pub number: u32,

    /// Also fetch document detail from the service
    #[arg(short, long)]
    pub detail: bool,
}

/// Arguments for the detail command.
#[derive(Debug, Parser)]
pub struct DetailArgs {
    /// Source id to look up
    pub source_id: String,
}

/// Arguments for the score command.
#[derive(Debug, Parser)]
pub struct ScoreArgs {
    /// Source id
    #[arg(long)]
    pub source_id: Option<String>,

    /// Page number (0 = absent)
    #[arg(long, default_value = "0")]
    pub page: u32,

    /// Snippet text
    #[arg(long)]
    pub snippet: Option<String>,

    /// Document name
    #[arg(long)]
    pub document: Option<String>,
}

/// Arguments for configuration management.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,

    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Set the service base URL
    SetUrl {
        /// Base URL (e.g., http://localhost:8000)
        url: String,
    },

    /// Set the request timeout in seconds
    SetTimeout {
        /// Timeout in seconds
        secs: u64,
    },
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}
