// linesift - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. config.toml loading (platform dir or --config)
// 3. Logging initialisation (debug mode support)
// 4. Running the filter and mapping the outcome to an exit code

use clap::Parser;
use linesift::app::job::{self, FilterJob};
use linesift::platform::config::{self, PlatformPaths};
use linesift::util::{constants, logging};
use std::path::PathBuf;

/// linesift - drop range-record lines from a text file.
///
/// Copies INPUT to OUTPUT line by line, leaving out every line whose
/// trimmed text looks like `12 - 34 : 5.6`. Kept lines are written
/// byte-for-byte in their original order.
#[derive(Parser, Debug)]
#[command(name = "linesift", version, about)]
struct Cli {
    /// File to read [default: out1.txt, or [paths] input in config.toml].
    #[arg(short = 'i', long = "input", value_name = "PATH")]
    input: Option<PathBuf>,

    /// File to create or truncate [default: filtered_output.txt, or [paths] output in config.toml].
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    output: Option<PathBuf>,

    /// Config file to use instead of the platform default location.
    #[arg(short = 'c', long = "config", value_name = "PATH")]
    config: Option<PathBuf>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    // Config is read before logging so its [logging] level can take effect;
    // its warnings are replayed once the subscriber is up.
    let explicit_config = cli.config.is_some();
    let config_path = cli
        .config
        .unwrap_or_else(|| PlatformPaths::resolve().config_file());
    let (app_config, mut config_warnings) = config::load_config(&config_path);
    if explicit_config && !config_path.exists() {
        config_warnings.push(format!(
            "Config file '{}' given with --config does not exist. Using defaults.",
            config_path.display()
        ));
    }

    logging::init(cli.debug, app_config.log_level.as_deref());

    tracing::info!(
        version = constants::APP_VERSION,
        config = %config_path.display(),
        debug = cli.debug,
        "linesift starting"
    );
    for warning in &config_warnings {
        tracing::warn!(warning = %warning, "Config warning");
    }

    let filter_job = FilterJob::resolve(cli.input, cli.output, &app_config);

    if let Err(e) = job::run_filter(&filter_job) {
        tracing::error!(path = %e.path().display(), error = %e, "Filter failed");
        eprintln!("Error: {e}");
        std::process::exit(constants::EXIT_FAILURE);
    }
}
