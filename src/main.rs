//! Issue tracker route resolver CLI.
//!
//! # Architecture Overview
//!
//! ```text
//!     path ─────▶ ┌──────────┐    ┌──────────┐    ┌──────────────┐
//!                 │navigator │───▶│  router  │───▶│ gate + route │
//!                 └────┬─────┘    │ patterns │    │   handler    │
//!                      ▲          └──────────┘    └──────┬───────┘
//!                      │ redirect                        │ prefetch
//!                      │                                 ▼
//!     outcome ◀────────┴──── view descriptor ◀──── ┌──────────────┐
//!                                                  │  transport   │──▶ server API
//!                                                  └──────────────┘
//! ```
//!
//! Results are printed to stdout as JSON, logs go to stderr.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use serde_json::json;

use issue_routes::config::{self, ClientConfig};
use issue_routes::observability::logging;
use issue_routes::routing::RouteParams;
use issue_routes::session::{Session, SessionHandle};
use issue_routes::{build_navigator, ResolveError};

#[derive(Parser)]
#[command(name = "issue-routes")]
#[command(about = "Resolve issue tracker paths into views", long_about = None)]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Path to a JSON session snapshot (anonymous when omitted)
    #[arg(short, long)]
    session: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a path and print the resulting view
    Resolve {
        path: String,

        /// Print redirects instead of following them
        #[arg(long)]
        no_follow: bool,
    },
    /// List registered routes in match order
    Routes,
    /// Build a path for a named route
    Url {
        name: String,

        /// Route parameters as key=value
        #[arg(value_parser = parse_param)]
        params: Vec<(String, String)>,
    },
}

fn parse_param(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .ok_or_else(|| format!("expected key=value, got '{raw}'"))
}

fn load_session(path: Option<&Path>) -> Result<Session, Box<dyn std::error::Error>> {
    match path {
        Some(path) => {
            let content = std::fs::read_to_string(path)?;
            Ok(serde_json::from_str(&content)?)
        }
        None => Ok(Session::default()),
    }
}

fn error_json(error: &ResolveError) -> serde_json::Value {
    json!({
        "error": error.kind(),
        "errorCode": error.error_code(),
        "message": error.to_string(),
    })
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => config::load_config(path)?,
        None => ClientConfig::default(),
    };
    logging::init(&config.observability)?;

    let session = SessionHandle::new(load_session(cli.session.as_deref())?);
    let navigator = build_navigator(&config, session)?;

    match cli.command {
        Commands::Resolve { path, no_follow } => {
            let result = if no_follow {
                navigator.resolve(&path).await.map(|outcome| outcome.to_json())
            } else {
                navigator
                    .navigate(&path)
                    .await
                    .map(|resolved| serde_json::to_value(resolved))
            };

            match result {
                Ok(value) => println!("{}", serde_json::to_string_pretty(&value?)?),
                Err(e) => {
                    tracing::warn!(path = %path, error = %e, "Resolution failed");
                    println!("{}", serde_json::to_string_pretty(&error_json(&e))?);
                    std::process::exit(1);
                }
            }
        }
        Commands::Routes => {
            let routes: Vec<_> = navigator
                .router()
                .routes()
                .iter()
                .map(|route| {
                    json!({
                        "name": route.name(),
                        "pattern": route.pattern().template(),
                        "gate": format!("{:?}", route.gate()),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&routes)?);
        }
        Commands::Url { name, params } => {
            let params: RouteParams = params.into_iter().collect();
            match navigator.router().url_for(&name, &params) {
                Some(url) => println!("{url}"),
                None => {
                    eprintln!("Error: cannot build a path for route '{name}' with the given parameters");
                    std::process::exit(1);
                }
            }
        }
    }

    Ok(())
}
