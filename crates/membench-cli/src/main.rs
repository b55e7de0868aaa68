use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use membench_analysis::{respond, DirectoryResultSource, View, ViewRequest};
use membench_core::tracing::init_tracing;
use membench_core::MembenchConfig;

#[derive(Parser)]
#[command(name = "membench")]
#[command(about = "Aggregate memory-strategy benchmark results into analytic views")]
#[command(version)]
struct Cli {
    /// TOML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Results directory (overrides the config file)
    #[arg(long, global = true)]
    results_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render one view as JSON
    View {
        /// View name, see `membench list`
        name: View,

        /// Scenario for the token-cost view
        #[arg(short, long)]
        scenario: Option<String>,

        /// Pretty-print the JSON body
        #[arg(long)]
        pretty: bool,
    },
    /// List the available views
    List,
}

fn load_config(cli: &Cli) -> Result<MembenchConfig> {
    let mut config = match &cli.config {
        Some(path) => MembenchConfig::from_file(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => MembenchConfig::default(),
    };
    if let Some(dir) = &cli.results_dir {
        config.results.dir = Some(dir.clone());
    }
    Ok(config)
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;
    init_tracing(&config.logging);

    match cli.command {
        Commands::List => {
            for view in View::ALL {
                println!("{view}");
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::View {
            name,
            scenario,
            pretty,
        } => {
            let source = DirectoryResultSource::from_config(&config.results);
            tracing::debug!(root = %source.root().display(), view = %name, "rendering");

            let request = ViewRequest {
                view: name,
                scenario,
            };
            let response = respond(&source, &request)
                .with_context(|| format!("rendering view {name}"))?;

            let body = if pretty {
                serde_json::to_string_pretty(&response.body)?
            } else {
                serde_json::to_string(&response.body)?
            };
            println!("{body}");

            Ok(if response.is_ok() {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(2)
            })
        }
    }
}
