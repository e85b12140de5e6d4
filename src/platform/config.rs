// linesift - platform/config.rs
//
// Platform config directory resolution and config.toml loading with
// validation. Uses the `directories` crate for XDG (Linux), AppData
// (Windows) and Library (macOS) compliance.
//
// A bad config never stops a run: every problem becomes a warning and the
// affected value falls back to its default.

use crate::util::constants;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Resolved platform paths for linesift configuration.
#[derive(Debug, Clone)]
pub struct PlatformPaths {
    /// Configuration directory (e.g. ~/.config/linesift/ or %APPDATA%\linesift\config\)
    pub config_dir: PathBuf,
}

impl PlatformPaths {
    /// Resolve platform-appropriate paths.
    ///
    /// Falls back to the current directory if platform dirs cannot be determined.
    pub fn resolve() -> Self {
        if let Some(proj_dirs) = ProjectDirs::from("", "", constants::APP_ID) {
            let config_dir = proj_dirs.config_dir().to_path_buf();
            tracing::debug!(config = %config_dir.display(), "Platform paths resolved");
            Self { config_dir }
        } else {
            tracing::warn!("Could not determine platform directories, using current directory");
            Self {
                config_dir: PathBuf::from("."),
            }
        }
    }

    /// Location of config.toml inside the config directory.
    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join(constants::CONFIG_FILE_NAME)
    }
}

// =============================================================================
// config.toml loading and validation
// =============================================================================

/// Raw deserialisable shape of config.toml.
///
/// Unknown keys are ignored so a newer config file still works with an
/// older binary.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// `[paths]` section.
    pub paths: PathsSection,
    /// `[logging]` section.
    pub logging: LoggingSection,
}

/// `[paths]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct PathsSection {
    /// Input file to filter.
    pub input: Option<String>,
    /// Output file to write.
    pub output: Option<String>,
}

/// `[logging]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub level: Option<String>,
}

/// Validated configuration derived from config.toml.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Input path used when --input is not given.
    pub input: PathBuf,
    /// Output path used when --output is not given.
    pub output: PathBuf,
    /// Logging level string (applied before tracing is initialised).
    pub log_level: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(constants::DEFAULT_INPUT_PATH),
            output: PathBuf::from(constants::DEFAULT_OUTPUT_PATH),
            log_level: None,
        }
    }
}

/// Load and validate the config file at `config_path`.
///
/// Returns the validated config and a list of non-fatal warnings.
/// A missing file yields defaults with no warnings. Note that this usually
/// runs before logging is initialised, so callers should log the returned
/// warnings themselves once it is.
pub fn load_config(config_path: &Path) -> (AppConfig, Vec<String>) {
    let mut warnings: Vec<String> = Vec::new();

    if !config_path.exists() {
        return (AppConfig::default(), warnings);
    }

    let content = match std::fs::read_to_string(config_path) {
        Ok(c) => c,
        Err(e) => {
            warnings.push(format!(
                "Could not read config file '{}': {e}. Using defaults.",
                config_path.display()
            ));
            return (AppConfig::default(), warnings);
        }
    };

    let (config, mut parse_warnings) = parse_config(&content, config_path);
    warnings.append(&mut parse_warnings);
    (config, warnings)
}

/// Parse and validate config.toml content. `origin` is used in warnings only.
pub fn parse_config(content: &str, origin: &Path) -> (AppConfig, Vec<String>) {
    let mut warnings: Vec<String> = Vec::new();

    let raw: RawConfig = match toml::from_str(content) {
        Ok(r) => r,
        Err(e) => {
            warnings.push(format!(
                "Failed to parse config file '{}': {e}. Using defaults.",
                origin.display()
            ));
            return (AppConfig::default(), warnings);
        }
    };

    let mut config = AppConfig::default();

    // -- Paths: input --
    if let Some(ref input) = raw.paths.input {
        if input.trim().is_empty() {
            warnings.push(format!(
                "[paths] input is empty. Using default ({}).",
                constants::DEFAULT_INPUT_PATH
            ));
        } else {
            config.input = PathBuf::from(input);
        }
    }

    // -- Paths: output --
    if let Some(ref output) = raw.paths.output {
        if output.trim().is_empty() {
            warnings.push(format!(
                "[paths] output is empty. Using default ({}).",
                constants::DEFAULT_OUTPUT_PATH
            ));
        } else {
            config.output = PathBuf::from(output);
        }
    }

    // -- Logging: level --
    if let Some(ref level) = raw.logging.level {
        let lower = level.to_lowercase();
        if constants::VALID_LOG_LEVELS.contains(&lower.as_str()) {
            config.log_level = Some(lower);
        } else {
            warnings.push(format!(
                "[logging] level = \"{level}\" is not recognised. \
                 Valid values: error, warn, info, debug, trace. Using default ({}).",
                constants::DEFAULT_LOG_LEVEL
            ));
        }
    }

    (config, warnings)
}
