use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tokio::runtime::Runtime;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use repolens::cli::{ConfigFormat, Output, SummaryFormat};
use repolens::config::ConfigLoader;

#[derive(Parser)]
#[command(name = "repolens")]
#[command(
    version,
    about = "Summarize public GitHub repositories with an LLM"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(long, short, global = true, help = "Extra TOML config file")]
    config: Option<PathBuf>,

    #[arg(long, global = true)]
    verbose: bool,

    #[arg(long, short, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize a GitHub repository
    Summarize {
        #[arg(help = "Repository URL, e.g. https://github.com/psf/requests")]
        url: String,
        #[arg(short = 'f', long, value_enum, default_value_t = SummaryFormat::Text)]
        format: SummaryFormat,
    },

    /// Serve the HTTP API
    Serve {
        #[arg(long, help = "Socket address to bind (default: server.bind)")]
        bind: Option<String>,
    },

    /// Inspect configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show current configuration (merged from all sources)
    Show {
        #[arg(short = 'f', long, value_enum, default_value_t = ConfigFormat::Toml)]
        format: ConfigFormat,
    },
    /// Show configuration file paths
    Path,
}

fn main() -> ExitCode {
    match run_cli() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            Output::new().error(&format!("Error: {}", e));
            ExitCode::FAILURE
        }
    }
}

fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let explicit = cli.config.as_deref();

    match cli.command {
        Commands::Summarize { url, format } => {
            let config = ConfigLoader::load_with(explicit)?;
            let rt = Runtime::new()?;
            rt.block_on(repolens::cli::commands::summarize::run(&config, &url, format))?;
        }
        Commands::Serve { bind } => {
            let config = ConfigLoader::load_with(explicit)?;
            let rt = Runtime::new()?;
            rt.block_on(repolens::cli::commands::serve::run(&config, bind.as_deref()))?;
        }
        Commands::Config { action } => match action {
            ConfigAction::Show { format } => {
                repolens::cli::commands::config::show(explicit, format)?;
            }
            ConfigAction::Path => {
                repolens::cli::commands::config::path(explicit)?;
            }
        },
    }

    Ok(())
}
