//! Job Router - Main Entry Point
//!
//! Thin driver around the library: loads the route table, collects input names
//! and prints one notice per line on stdout.

use clap::{Parser, Subcommand};
use job_router::config::{parse_route_arg, RouterConfig};
use job_router::demo::DEMO_FILES;
use job_router::observability::{init_default_logging, metrics};
use job_router::{ConsoleSink, Dispatcher, Handler, OutputFormat, RouterResult};
use std::io::{self, BufRead, IsTerminal};
use std::path::PathBuf;
use std::process;
use tracing::{error, info};

/// Route named inputs to data processing handlers by keyword
#[derive(Parser)]
#[command(name = "job-router")]
#[command(about = "Keyword-based routing of file names to data processing handlers")]
#[command(version)]
struct Cli {
    /// Route table file (TOML)
    #[arg(short, long, value_name = "FILE", env = "JOB_ROUTER_CONFIG")]
    config: Option<PathBuf>,

    /// Verbose logging (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Dispatch names; reads one name per line from stdin when none are given
    Run {
        /// Dispatch the built-in demonstration file list first
        #[arg(long)]
        demo: bool,

        /// Print notices as JSON lines
        #[arg(long)]
        json: bool,

        /// Extra route appended to the table
        #[arg(long = "route", value_name = "KEYWORD=HANDLER")]
        routes: Vec<String>,

        /// Names to dispatch
        names: Vec<String>,
    },
    /// List routes in resolution order
    Routes,
    /// Validate configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    init_default_logging(cli.verbose);

    info!("Starting job-router v{}", env!("CARGO_PKG_VERSION"));

    let config = match load_configuration(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Run {
            demo,
            json,
            routes,
            names,
        } => run_dispatch(config, demo, json, &routes, names),
        Commands::Routes => list_routes(&config),
        Commands::Config { show } => handle_config_command(&config, show),
    };

    if let Err(e) = result {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

fn load_configuration(config_path: &Option<PathBuf>) -> RouterResult<RouterConfig> {
    match config_path {
        Some(path) => {
            info!("Loading configuration from: {}", path.display());
            Ok(RouterConfig::load_from_file(path)?)
        }
        None => {
            let default_paths = ["job-router.toml", "config/job-router.toml"];

            for path_str in default_paths {
                let path = PathBuf::from(path_str);
                if path.exists() {
                    info!("Loading configuration from: {}", path.display());
                    return Ok(RouterConfig::load_from_file(&path)?);
                }
            }

            info!("No configuration file found, using built-in route table");
            Ok(RouterConfig::default())
        }
    }
}

fn run_dispatch(
    mut config: RouterConfig,
    demo: bool,
    json: bool,
    extra_routes: &[String],
    names: Vec<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    for arg in extra_routes {
        config.routes.push(parse_route_arg(arg)?);
    }

    let mut inputs: Vec<String> = Vec::new();
    if demo {
        inputs.extend(DEMO_FILES.iter().map(|s| s.to_string()));
    }
    inputs.extend(names);

    if inputs.is_empty() && !io::stdin().is_terminal() {
        inputs = read_names(io::stdin().lock())?;
    }

    let format = if json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };
    let mut sink = ConsoleSink::stdout(format);

    let dispatcher = Dispatcher::from_config(&config);
    let report = dispatcher.run(&inputs, &mut sink);

    info!(
        run_id = %report.run_id,
        metrics = %serde_json::to_string(&metrics().snapshot())?,
        "Run finished"
    );
    Ok(())
}

/// Read one name per non-blank line
fn read_names<R: BufRead>(reader: R) -> RouterResult<Vec<String>> {
    let mut names = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let name = line.trim();
        if !name.is_empty() {
            names.push(name.to_string());
        }
    }
    Ok(names)
}

fn list_routes(config: &RouterConfig) -> Result<(), Box<dyn std::error::Error>> {
    let dispatcher = Dispatcher::from_config(config);

    println!("Deferred marker: {}", dispatcher.deferred_marker());
    for (position, (keyword, handler)) in dispatcher.registry().routes().enumerate() {
        println!("{:>3}. {:?} -> {}", position + 1, keyword, handler.describe().label);
    }
    Ok(())
}

fn handle_config_command(
    config: &RouterConfig,
    show: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if show {
        println!("Current configuration:");
        println!("{}", toml::to_string_pretty(config)?);
    }

    info!("Configuration validation complete");
    Ok(())
}
