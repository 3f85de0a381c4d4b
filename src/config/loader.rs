//! Configuration file loading with precedence handling.

use crate::view_state::{FontSet, LayoutMetrics, SettlePolicy};
use serde::Deserialize;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "MDSCROLL_CONFIG";

/// Environment variable overriding the settle policy.
pub const SETTLE_POLICY_ENV: &str = "MDSCROLL_SETTLE_POLICY";

/// Environment variable overriding the frame rate.
pub const FPS_ENV: &str = "MDSCROLL_FPS";

/// Largest accepted base font size in layout units.
pub const MAX_FONT_SIZE: i32 = 1000;

/// Largest accepted margin, paragraph spacing or code line gap.
pub const MAX_SPACING: i32 = 1000;

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (file may not exist or have permission issues).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },

    /// A setting has a value outside its valid range.
    #[error("Invalid value for {field}: {reason}")]
    InvalidValue {
        /// Setting name.
        field: &'static str,
        /// What is wrong with it.
        reason: String,
    },
}

/// How overscroll is corrected after each layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SettleMode {
    /// Move back by `settle_step` per frame.
    #[default]
    Incremental,
    /// Remove the whole overshoot in one pass.
    Immediate,
}

impl FromStr for SettleMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "incremental" => Ok(Self::Incremental),
            "immediate" => Ok(Self::Immediate),
            other => Err(ConfigError::InvalidValue {
                field: "settle_policy",
                reason: format!("expected \"incremental\" or \"immediate\", got {:?}", other),
            }),
        }
    }
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/mdscroll/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Base font size in layout units.
    #[serde(default)]
    pub font_size: Option<i32>,

    /// Outer margin in layout units.
    #[serde(default)]
    pub margin: Option<i32>,

    /// Space after each paragraph.
    #[serde(default)]
    pub paragraph_spacing: Option<i32>,

    /// Gap between code block lines.
    #[serde(default)]
    pub code_line_gap: Option<i32>,

    /// Frame rate of the render loop.
    #[serde(default)]
    pub frames_per_second: Option<u32>,

    /// Overscroll correction mode.
    #[serde(default)]
    pub settle_policy: Option<SettleMode>,

    /// Units removed per frame by incremental settling.
    #[serde(default)]
    pub settle_step: Option<i32>,

    /// Disable colors.
    #[serde(default)]
    pub no_color: Option<bool>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Base font size.
    pub font_size: i32,
    /// Outer margin.
    pub margin: i32,
    /// Space after each paragraph.
    pub paragraph_spacing: i32,
    /// Gap between code block lines.
    pub code_line_gap: i32,
    /// Frame rate.
    pub frames_per_second: u32,
    /// Overscroll correction mode.
    pub settle_mode: SettleMode,
    /// Incremental settle step. `None` follows the font size.
    pub settle_step: Option<i32>,
    /// Disable colors.
    pub no_color: bool,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            font_size: 18,
            margin: 10,
            paragraph_spacing: 0,
            code_line_gap: 0,
            frames_per_second: 60,
            settle_mode: SettleMode::Incremental,
            settle_step: None,
            no_color: false,
            log_file_path: default_log_path(),
        }
    }
}

impl ResolvedConfig {
    /// Spacing for the layout engine.
    pub fn layout_metrics(&self) -> LayoutMetrics {
        LayoutMetrics::new(self.font_size, self.margin)
            .with_spacing(self.paragraph_spacing, self.code_line_gap)
    }

    /// Fonts at the configured base size.
    pub fn font_set(&self) -> FontSet {
        FontSet::new(self.font_size)
    }

    /// Settle policy for the scroll controller.
    pub fn settle_policy(&self) -> SettlePolicy {
        match self.settle_mode {
            SettleMode::Incremental => {
                SettlePolicy::incremental(self.settle_step.unwrap_or(self.font_size))
            }
            SettleMode::Immediate => SettlePolicy::Immediate,
        }
    }

    /// Time budget of one frame.
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs(1) / self.frames_per_second.max(1)
    }

    /// Check value ranges.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for the first out-of-range setting.
    pub fn validate(self) -> Result<Self, ConfigError> {
        fn invalid(field: &'static str, reason: &str) -> ConfigError {
            ConfigError::InvalidValue {
                field,
                reason: reason.to_string(),
            }
        }

        if !(2..=MAX_FONT_SIZE).contains(&self.font_size) {
            return Err(invalid(
                "font_size",
                &format!("must be between 2 and {}", MAX_FONT_SIZE),
            ));
        }
        for (field, value) in [
            ("margin", self.margin),
            ("paragraph_spacing", self.paragraph_spacing),
            ("code_line_gap", self.code_line_gap),
        ] {
            if !(0..=MAX_SPACING).contains(&value) {
                return Err(invalid(
                    field,
                    &format!("must be between 0 and {}", MAX_SPACING),
                ));
            }
        }
        if self.frames_per_second == 0 {
            return Err(invalid("frames_per_second", "must be positive"));
        }
        if self.settle_step.is_some_and(|step| step <= 0) {
            return Err(invalid("settle_step", "must be positive"));
        }
        Ok(self)
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/mdscroll/mdscroll.log` on Unix-like systems,
/// or appropriate platform path on other systems.
///
/// If state directory cannot be determined, falls back to current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("mdscroll").join("mdscroll.log")
    } else {
        PathBuf::from("mdscroll.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/mdscroll/config.toml` on Unix, appropriate path on other platforms.
/// Returns `None` if home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("mdscroll").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `MDSCROLL_CONFIG` environment variable
/// 3. Default path `~/.config/mdscroll/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV) {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        font_size: config.font_size.unwrap_or(defaults.font_size),
        margin: config.margin.unwrap_or(defaults.margin),
        paragraph_spacing: config
            .paragraph_spacing
            .unwrap_or(defaults.paragraph_spacing),
        code_line_gap: config.code_line_gap.unwrap_or(defaults.code_line_gap),
        frames_per_second: config
            .frames_per_second
            .unwrap_or(defaults.frames_per_second),
        settle_mode: config.settle_policy.unwrap_or(defaults.settle_mode),
        settle_step: config.settle_step.or(defaults.settle_step),
        no_color: config.no_color.unwrap_or(defaults.no_color),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `MDSCROLL_SETTLE_POLICY`: `incremental` or `immediate`
/// - `MDSCROLL_FPS`: positive frame rate
///
/// # Errors
///
/// Returns [`ConfigError::InvalidValue`] when a variable is set but unparsable.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> Result<ResolvedConfig, ConfigError> {
    if let Ok(policy) = std::env::var(SETTLE_POLICY_ENV) {
        config.settle_mode = policy.parse()?;
    }

    if let Ok(fps) = std::env::var(FPS_ENV) {
        config.frames_per_second =
            fps.trim()
                .parse()
                .map_err(|e: std::num::ParseIntError| ConfigError::InvalidValue {
                    field: "frames_per_second",
                    reason: format!("{}: {:?}", e, fps),
                })?;
    }

    Ok(config)
}

/// CLI flags that override configuration.
///
/// `None`/`false` means the flag was not given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    /// `--font-size`
    pub font_size: Option<i32>,
    /// `--settle-policy`
    pub settle_mode: Option<SettleMode>,
    /// `--no-color`
    pub no_color: bool,
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for flags that were explicitly set by the user.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(mut config: ResolvedConfig, cli: CliOverrides) -> ResolvedConfig {
    if let Some(font_size) = cli.font_size {
        config.font_size = font_size;
    }

    if let Some(mode) = cli.settle_mode {
        config.settle_mode = mode;
    }

    if cli.no_color {
        config.no_color = true;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
