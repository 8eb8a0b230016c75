//! CLI Adapter.

mod output;

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use super::load::{AppConfigOptions, load_app_config, resolve_config_path};
use crate::domain::AppError;
use crate::services::LocalFilesystem;

pub use output::{OutputFormat, render_projects};

#[derive(Parser)]
#[command(name = "apibuilder-config")]
#[command(version)]
#[command(
    about = "Locate and inspect the .apibuilder/config generator configuration",
    long_about = None
)]
struct Cli {
    /// Explicit config file (skips discovery)
    #[arg(short, long, global = true)]
    path: Option<PathBuf>,
    /// Directory to start discovery from (defaults to the current directory)
    #[arg(short, long, global = true)]
    dir: Option<PathBuf>,
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the resolved project root directory
    Root,
    /// Print the resolved config file path
    Path,
    /// List the projects and generators declared under `code`
    #[clap(visible_alias = "ls")]
    Projects {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

pub fn run() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let options = AppConfigOptions { path: cli.path, start_dir: cli.dir };
    let fs = LocalFilesystem::new();

    let result: Result<(), AppError> = match cli.command {
        Commands::Root => load_app_config(&options, &fs).map(|config| {
            println!("{}", config.project_dir().display());
        }),
        Commands::Path => resolve_config_path(&options, &fs).map(|path| {
            println!("{}", path.display());
        }),
        Commands::Projects { format } => load_app_config(&options, &fs)
            .and_then(|config| render_projects(&config, format))
            .map(|rendered| print!("{}", rendered)),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .init();
}
