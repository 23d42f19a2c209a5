use anyhow::Context;
use clap::Parser;
use dox_config::DoxConfig;

mod cli;
mod commands;
mod output;
mod report;

fn main() {
    if let Err(error) = run() {
        eprintln!("doxsig error: {error:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    let flags = cli.global_flags();
    init_tracing(flags.quiet, flags.verbose)?;

    let config = load_config(&flags)?;

    commands::dispatch(&cli.command, &flags, &config)
}

fn load_config(flags: &cli::GlobalFlags) -> anyhow::Result<DoxConfig> {
    let mut config = DoxConfig::load_with_dotenv().context("failed to load doxsig configuration")?;
    if let Some(max_lines) = flags.max_lines {
        config.parser.max_lines = max_lines;
        config.validate().context("invalid --max-lines")?;
    }
    tracing::debug!(max_lines = config.parser.max_lines, "configuration loaded");
    Ok(config)
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("DOXSIG_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
