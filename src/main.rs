mod catalog;
mod config;
mod consts;
mod environment;
mod error_classifier;
mod events;
mod logging;
mod pagination;
mod selection;
mod session;
mod ui;
mod workers;

use crate::config::{Config, get_config_path};
use crate::environment::Environment;
use crate::session::{run_headless_mode, run_tui_mode, setup_session};
use clap::{Parser, Subcommand};
use std::error::Error;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Command-line arguments
struct Args {
    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Open the artworks dashboard
    Start {
        /// Catalog source: `direct`, `relay` or an http(s) base URL
        #[arg(long, value_name = "ENVIRONMENT")]
        environment: Option<String>,

        /// 1-based page to open with
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        page: u32,

        /// Path to a JSON config file
        #[arg(long, value_name = "PATH")]
        config: Option<PathBuf>,

        /// Enable background colors
        #[arg(long = "with-background", action = clap::ArgAction::SetTrue)]
        with_background: bool,
    },
    /// Print one page of artworks and exit
    List {
        /// 1-based page to list
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        page: u32,

        /// Catalog source: `direct`, `relay` or an http(s) base URL
        #[arg(long, value_name = "ENVIRONMENT")]
        environment: Option<String>,

        /// Path to a JSON config file
        #[arg(long, value_name = "PATH")]
        config: Option<PathBuf>,

        /// Mark the first N rows of the page as selected
        #[arg(long, value_name = "N")]
        select_first: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    logging::init_log_level();

    let args = Args::parse();
    match args.command {
        Command::Start {
            environment,
            page,
            config,
            with_background,
        } => {
            let config = load_config(config.as_deref())?;
            let environment = resolve_environment(&config, environment.as_deref())?;
            let session = setup_session(environment, request_timeout(&config))?;
            run_tui_mode(
                session,
                page,
                with_background || config.with_background_color,
            )
            .await
        }
        Command::List {
            page,
            environment,
            config,
            select_first,
        } => {
            let config = load_config(config.as_deref())?;
            let environment = resolve_environment(&config, environment.as_deref())?;
            let session = setup_session(environment, request_timeout(&config))?;
            run_headless_mode(session, page, select_first).await
        }
    }
}

/// Loads the config from `path`, or from the default location when no path is given.
///
/// An explicit path must exist; the default file is optional.
fn load_config(path: Option<&Path>) -> Result<Config, Box<dyn Error>> {
    let config = match path {
        Some(path) => Config::load_from_file(path)?,
        None => Config::load_or_default(&get_config_path()?)?,
    };
    Ok(config)
}

fn resolve_environment(config: &Config, flag: Option<&str>) -> Result<Environment, Box<dyn Error>> {
    let env_var = std::env::var("ARTIC_ENVIRONMENT").ok();
    let environment = config.resolve_environment(flag, env_var.as_deref())?;
    Ok(environment)
}

fn request_timeout(config: &Config) -> Duration {
    Duration::from_secs(config.request_timeout_secs)
}
