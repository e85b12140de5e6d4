// linesift - util/constants.rs
//
// Single source of truth for named constants and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "linesift";

/// Application identifier used for the platform config directory.
pub const APP_ID: &str = "linesift";

/// Current application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Default file paths
// =============================================================================

/// Input file read when neither the CLI nor config.toml names one.
pub const DEFAULT_INPUT_PATH: &str = "out1.txt";

/// Output file written when neither the CLI nor config.toml names one.
pub const DEFAULT_OUTPUT_PATH: &str = "filtered_output.txt";

// =============================================================================
// I/O
// =============================================================================

/// Capacity of the buffered reader wrapped around the input file.
pub const READ_BUFFER_CAPACITY: usize = 64 * 1024; // 64 KB

/// Capacity of the buffered writer wrapped around the output file.
pub const WRITE_BUFFER_CAPACITY: usize = 64 * 1024; // 64 KB

/// Initial capacity of the per-line byte buffer. Grows as needed.
pub const LINE_BUFFER_CAPACITY: usize = 256;

// =============================================================================
// Configuration & logging
// =============================================================================

/// Default log level when neither RUST_LOG, --debug, nor config set one.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Log levels accepted in `[logging] level`.
pub const VALID_LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Config file name inside the platform config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

// =============================================================================
// Process exit codes
// =============================================================================

/// Exit code for a run that failed with a FileAccessError.
pub const EXIT_FAILURE: i32 = 1;
