//! `covmat` - render a goal coverage matrix from framework and program tables

mod commands;

use clap::{Args, Parser, Subcommand, ValueEnum};
use covmat_render::OutputFormat;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "covmat", version, about = "Goal coverage matrix renderer")]
struct Cli {
    /// Log output format (written to stderr)
    #[arg(long, value_enum, default_value_t = LogFormat::Text, global = true)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Render the matrix for one category field
    Render(RenderArgs),

    /// List selectable category fields and their values
    Categories(CategoriesArgs),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogFormat {
    Text,
    Json,
}

/// Where the goal and program tables come from
#[derive(Debug, Args)]
struct SourceArgs {
    /// Framework table (CSV, JSON or YAML)
    #[arg(long, requires = "programs", required_unless_present = "sample")]
    goals: Option<PathBuf>,

    /// Program table (CSV, JSON or YAML)
    #[arg(long, requires = "goals", required_unless_present = "sample")]
    programs: Option<PathBuf>,

    /// Use the built-in demo tables
    #[arg(long, conflicts_with_all = ["goals", "programs"])]
    sample: bool,
}

#[derive(Debug, Args)]
struct RenderArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Category column; defaults to the first configured option
    #[arg(long)]
    category: Option<String>,

    /// Output format: svg, text or json
    #[arg(long, default_value_t = OutputFormat::Svg)]
    format: OutputFormat,

    /// Output file; stdout when absent
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// Chart configuration (TOML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the configured chart width
    #[arg(long)]
    width: Option<f64>,

    /// Override the configured row height
    #[arg(long)]
    row_height: Option<f64>,
}

#[derive(Debug, Args)]
struct CategoriesArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Chart configuration (TOML)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    match format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_format);

    let result = match cli.command {
        Command::Render(args) => commands::render(args).await,
        Command::Categories(args) => commands::categories(args).await,
    };

    if let Err(err) = &result {
        tracing::error!("{err:#}");
    }
    result
}
