//! clean-env CLI
//!
//! Resolves the project's environment policy, checks the current process
//! environment against it, and asks for confirmation before letting a
//! dirty build proceed.

use anyhow::Result;
use clap::Parser;
use clean_env::check::check;
use clean_env::config::ConfigLoader;
use clean_env::env::{EnvSnapshot, overlay_dotenv};
use clean_env::prompt::confirm;
use clean_env::report::render_report;
use std::fs::OpenOptions;
use std::path::PathBuf;
use tracing::{Level, debug};
use tracing_subscriber::FmtSubscriber;

/// Check environment variables against the project policy before a build
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Project root directory to resolve the configuration from
    #[arg(default_value = ".")]
    root: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Logging output: 0/off, 1/stdout, 2/stderr (default), or filename
    #[arg(short, long, default_value = "2")]
    log: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli)?;

    let loader = ConfigLoader::resolve(&cli.root)?;
    if let Some(path) = loader.config_path() {
        debug!(path = %path.display(), "using configuration file");
    }
    let config = loader.into_config();

    let mut env = EnvSnapshot::from_process();
    overlay_dotenv(&cli.root, &config.dotenv, &mut env)?;

    let report = check(&config, &env);
    if report.is_clean() {
        debug!("environment is clean");
        return Ok(());
    }

    print!("{}", render_report(&report, &config.translations));

    let confirmed = confirm(&config.translations.error_question, &config.translations.yes).await?;
    if !confirmed {
        std::process::exit(1);
    }
    Ok(())
}

/// Initialize logging based on the --log option.
fn init_logging(cli: &Cli) -> Result<()> {
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    match cli.log.as_str() {
        "0" | "off" => {
            // No logging
        }
        "1" | "stdout" => {
            let subscriber = FmtSubscriber::builder()
                .with_max_level(level)
                .with_writer(std::io::stdout)
                .finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
        "2" | "stderr" => {
            let subscriber = FmtSubscriber::builder()
                .with_max_level(level)
                .with_writer(std::io::stderr)
                .finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
        filename => {
            // Log to file (append mode)
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(filename)?;
            let subscriber = FmtSubscriber::builder()
                .with_max_level(level)
                .with_writer(file)
                .with_ansi(false)
                .finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
    }
    Ok(())
}
