//! Citeline CLI - Render and resolve citations in generated reports.

use citeline_cli::commands;
use citeline_cli::{Cli, Command, Config, Formatter};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> citeline_cli::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Load config; flags and environment override the file
    let path = match cli.config {
        Some(path) => path,
        None => Config::path()?,
    };
    let mut file_config = Config::load_from(&path)?;
    let config = file_config.clone().with_service_url(cli.service_url);

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    // Create formatter
    let formatter = Formatter::new(format, color_enabled);

    match cli.command {
        Command::Render(args) => commands::execute_render(args, &config, &formatter).await?,
        Command::Resolve(args) => commands::execute_resolve(args, &config, &formatter).await?,
        Command::Detail(args) => commands::execute_detail(args, &config, &formatter).await?,
        Command::Score(args) => commands::execute_score(args, &formatter)?,
        Command::Config(args) => commands::execute_config(args, &mut file_config, &path, &formatter)?,
    }

    Ok(())
}

/// Log to stderr; `RUST_LOG` wins over `-v`
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
