//! Scenario file loading.
//!
//! A scenario is a YAML document listing positions, the settlement price range
//! to sweep and logging preferences. `${VAR}` and `${VAR:-default}` are
//! replaced from the environment before parsing.
//!
//! # Usage
//!
//! ```rust,ignore
//! use payoff_engine::config::load_config;
//!
//! let scenario = load_config(Some("scenario.yaml"))?;
//! let curve = scenario.into_builder().simulate_curve()?;
//! ```

mod observability;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{AssetParam, OptionParam};
use crate::simulation::{PositionBuilder, SimulateRange, SimulationConfig};

pub use observability::{LoggingConfig, ObservabilityConfig};

/// Default scenario path.
pub const DEFAULT_SCENARIO_PATH: &str = "scenario.yaml";

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        /// Path to the config file.
        path: String,
        /// The underlying IO error.
        source: std::io::Error,
    },

    /// Failed to parse YAML configuration (includes rejected position values).
    #[error("Failed to parse config YAML: {0}")]
    ParseError(#[from] serde_yaml_bw::Error),

    /// Configuration validation failed.
    #[error("Config validation failed: {0}")]
    ValidationError(String),
}

/// Root scenario structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioConfig {
    /// Positions to evaluate.
    #[serde(default)]
    pub positions: PositionsConfig,
    /// Range sweep settings.
    pub simulation: SimulationSection,
    /// Logging settings.
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

/// Option and asset positions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionsConfig {
    /// Option positions.
    #[serde(default)]
    pub options: Vec<OptionParam>,
    /// Underlying asset positions.
    #[serde(default)]
    pub assets: Vec<AssetParam>,
}

impl PositionsConfig {
    /// Total number of positions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.options.len() + self.assets.len()
    }

    /// Returns true if no positions are configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Range sweep settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationSection {
    /// Settlement prices to sweep.
    pub range: SimulateRange,
    /// Execution settings.
    #[serde(default)]
    pub executor: SimulationConfig,
}

impl ScenarioConfig {
    /// Build the position builder described by this scenario.
    #[must_use]
    pub fn into_builder(self) -> PositionBuilder {
        PositionBuilder::new(
            self.positions.options,
            self.positions.assets,
            self.simulation.range,
        )
        .with_config(self.simulation.executor)
    }
}

// ============================================
// Configuration Loading
// ============================================

/// Load a scenario from a YAML file with environment variable interpolation.
///
/// # Arguments
///
/// * `path` - Optional path to the scenario file. Defaults to [`DEFAULT_SCENARIO_PATH`].
///
/// # Errors
///
/// Returns a `ConfigError` if the file cannot be read, parsed, or validated.
pub fn load_config(path: Option<&str>) -> Result<ScenarioConfig, ConfigError> {
    let path = path.unwrap_or(DEFAULT_SCENARIO_PATH);

    let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_string(),
        source: e,
    })?;

    load_config_from_string(&contents)
}

/// Load a scenario from a YAML string.
///
/// # Errors
///
/// Returns a `ConfigError` if the YAML cannot be parsed or validated.
pub fn load_config_from_string(yaml: &str) -> Result<ScenarioConfig, ConfigError> {
    let interpolated = interpolate_env_vars(yaml);
    let config: ScenarioConfig = serde_yaml_bw::from_str(&interpolated)?;
    validate_config(&config)?;
    Ok(config)
}

/// Interpolate environment variables in a string.
///
/// Supports both `${VAR}` and `${VAR:-default}` syntax. Unset variables
/// without a default become empty strings.
#[allow(clippy::expect_used)] // Regex is compile-time constant
fn interpolate_env_vars(input: &str) -> String {
    use std::sync::OnceLock;

    static ENV_VAR_REGEX: OnceLock<regex::Regex> = OnceLock::new();

    let re = ENV_VAR_REGEX.get_or_init(|| {
        regex::Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)(?::-([^}]*))?\}")
            .expect("env var regex is valid")
    });

    re.replace_all(input, |cap: &regex::Captures<'_>| {
        let default_value = cap.get(2).map_or("", |m| m.as_str());
        match std::env::var(&cap[1]) {
            Ok(v) if !v.is_empty() => v,
            _ => default_value.to_string(),
        }
    })
    .into_owned()
}

/// Validate scenario values not covered by the position types themselves.
fn validate_config(config: &ScenarioConfig) -> Result<(), ConfigError> {
    if config.positions.is_empty() {
        return Err(ConfigError::ValidationError(
            "scenario must contain at least one option or asset position".to_string(),
        ));
    }

    let level = config.observability.logging.level.to_lowercase();
    let valid_levels = ["trace", "debug", "info", "warn", "error", "off"];
    if !valid_levels.contains(&level.as_str()) {
        return Err(ConfigError::ValidationError(format!(
            "observability.logging.level must be one of: {valid_levels:?}"
        )));
    }

    Ok(())
}
