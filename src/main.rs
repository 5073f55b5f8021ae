//! opsnotes: command-line shell for the ops-notes analyzer.
//!
//! ```text
//!   notes (file / stdin)                       path
//!          │                                    │
//!          ▼                                    ▼
//!   ┌──────────────┐   POST /api/analyze/  ┌──────────┐
//!   │ AnalyzeClient│ ────────────────────▶ │ Router   │
//!   └──────┬───────┘      backend          └────┬─────┘
//!          │ AnalysisReport / JSON              │ ViewId
//!          ▼                                    ▼
//!   ┌──────────────────────────────────────────────────┐
//!   │                 views (plain text)               │
//!   └──────────────────────────────────────────────────┘
//! ```

use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde_json::Value;

use opsnotes::api::AnalyzeClient;
use opsnotes::config::{resolve_config, ConfigOverrides};
use opsnotes::observability::init_logging;
use opsnotes::routing::{Navigator, Router};
use opsnotes::views;

#[derive(Parser)]
#[command(name = "opsnotes")]
#[command(about = "Client shell for the ops-notes analysis backend", long_about = None)]
struct Cli {
    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Backend origin, overriding `api.base` ("" for same-origin).
    #[arg(long, env = "OPSNOTES_API_BASE")]
    api_base: Option<String>,

    /// Page origin used to resolve same-origin requests.
    #[arg(long)]
    origin: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Send notes for analysis and show the dashboard
    Analyze {
        /// Notes file; reads stdin when omitted
        file: Option<PathBuf>,

        /// Print the raw JSON response instead of the dashboard
        #[arg(long)]
        raw: bool,
    },
    /// List declared routes
    Routes,
    /// Show which view a path renders
    Route { path: String },
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let overrides = ConfigOverrides {
        api_base: cli.api_base.clone(),
        origin: cli.origin.clone(),
    };
    let config = resolve_config(cli.config.as_deref(), &overrides)?;

    init_logging(&config.observability);
    tracing::debug!(
        api_base = %config.api.base,
        origin = ?config.api.origin,
        "Configuration loaded"
    );

    match cli.command {
        Commands::Analyze { file, raw } => {
            let notes = read_notes(file)?;
            let client = AnalyzeClient::from_config(&config.api)?;
            let value: Value = client.analyze_notes(&notes).await?;

            if raw {
                println!("{}", serde_json::to_string_pretty(&value)?);
                return Ok(ExitCode::SUCCESS);
            }

            let mut nav = Navigator::default();
            nav.push("/dashboard");
            print!("{}", views::render_response(nav.router(), nav.current_path(), &value));
        }
        Commands::Routes => {
            for route in Router::app().routes() {
                println!("{:<12} {}", route.path, route.view);
            }
        }
        Commands::Route { path } => {
            let nav = Navigator::with_location(Router::app(), &path);
            match nav.current_view() {
                Some(view) => println!("{path} -> {view}"),
                None => {
                    eprint!("{}", views::render_not_found(&path));
                    return Ok(ExitCode::FAILURE);
                }
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn read_notes(file: Option<PathBuf>) -> std::io::Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path),
        None => {
            let mut notes = String::new();
            std::io::stdin().read_to_string(&mut notes)?;
            Ok(notes)
        }
    }
}
