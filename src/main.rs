//! pydocs-scraper main entry point
//!
//! This is the command-line interface for the Python documentation parser.

use clap::Parser;
use pydocs_scraper::config::load_or_default;
use pydocs_scraper::output::{control_output, OutputMode};
use pydocs_scraper::{run_mode, CachedSession, Config, Mode, ScrapeContext};
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Python documentation parser
///
/// Collects release notes, version status, the PDF archive and PEP status
/// counts from docs.python.org and peps.python.org.
#[derive(Parser, Debug)]
#[command(name = "pydocs-scraper")]
#[command(version)]
#[command(about = "Python documentation parser", long_about = None)]
struct Cli {
    /// Parser to run
    #[arg(value_enum, value_name = "MODE")]
    mode: Mode,

    /// Clear the response cache before running
    #[arg(short, long)]
    clear_cache: bool,

    /// Output mode; results are printed as plain lines when omitted
    #[arg(short, long, value_enum)]
    output: Option<OutputMode>,

    /// Path to TOML configuration file
    #[arg(long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = load_or_default(cli.config.as_deref())?;
    let _log_guard = setup_logging(cli.verbose, cli.quiet, &config.output.logs_path())?;

    tracing::info!("Parser started");
    tracing::info!("Command line arguments: {:?}", cli);

    if let Err(e) = handle_run(&cli, &config).await {
        tracing::error!("Parser '{}' failed: {}", cli.mode, e);
        return Err(e.into());
    }

    tracing::info!("Parser finished");
    Ok(())
}

/// Runs the selected parser and renders its table
async fn handle_run(cli: &Cli, config: &Config) -> pydocs_scraper::Result<()> {
    let mut session = CachedSession::from_config(config)?;
    if cli.clear_cache {
        let removed = session.clear_cache()?;
        tracing::info!("Cleared {} cached responses", removed);
    }

    let mut ctx = ScrapeContext::new(config, session);
    if let Some(table) = run_mode(cli.mode, &mut ctx).await? {
        control_output(&table, cli.output, cli.mode.name(), &config.output)?;
    }

    Ok(())
}

/// Sets up console and file logging based on verbosity level
///
/// `RUST_LOG` takes precedence over the flags. The returned guard flushes
/// the file writer when dropped.
fn setup_logging(verbose: u8, quiet: bool, logs_dir: &Path) -> std::io::Result<WorkerGuard> {
    let default_filter = if quiet {
        "error"
    } else {
        match verbose {
            0 => "pydocs_scraper=info,warn",
            1 => "pydocs_scraper=debug,info",
            2 => "pydocs_scraper=trace,debug",
            _ => "trace",
        }
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    std::fs::create_dir_all(logs_dir)?;
    let appender = tracing_appender::rolling::never(logs_dir, "parser.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(fmt::layer().with_ansi(false).with_writer(writer))
        .init();

    Ok(guard)
}
