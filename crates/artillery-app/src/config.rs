//! Configuration module - environment variable parsing

use std::env;

use artillery_core::constants::{DEFAULT_ARENA_HEIGHT, DEFAULT_ARENA_WIDTH, DEFAULT_CAMERA_WIDTH};
use artillery_core::types::Arena;
use artillery_sim::engine::SimConfig;

/// Host configuration loaded from environment variables. Every variable is optional.
#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    pub arena: Arena,
    /// Width of the camera frame feeding pose observations.
    pub camera_width: f64,
    /// Seed for the synthetic pose feed.
    pub seed: u64,
    /// Upper bound on a demo run, in simulated seconds.
    pub max_seconds: f64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            arena: Arena::default(),
            camera_width: DEFAULT_CAMERA_WIDTH,
            seed: 42,
            max_seconds: 60.0,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Ok(Self {
            log_level: lookup("ARTILLERY_LOG_LEVEL").unwrap_or(defaults.log_level),
            arena: Arena::new(
                positive(&lookup, "ARTILLERY_ARENA_WIDTH", DEFAULT_ARENA_WIDTH)?,
                positive(&lookup, "ARTILLERY_ARENA_HEIGHT", DEFAULT_ARENA_HEIGHT)?,
            ),
            camera_width: positive(&lookup, "ARTILLERY_CAMERA_WIDTH", DEFAULT_CAMERA_WIDTH)?,
            seed: match lookup("ARTILLERY_SEED") {
                Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid {
                    var: "ARTILLERY_SEED",
                    value: raw,
                })?,
                None => defaults.seed,
            },
            max_seconds: positive(&lookup, "ARTILLERY_MAX_SECONDS", defaults.max_seconds)?,
        })
    }

    /// Engine configuration for this host.
    pub fn sim_config(&self) -> SimConfig {
        SimConfig {
            arena: self.arena,
            camera_width: self.camera_width,
        }
    }
}

fn positive<F>(lookup: &F, var: &'static str, default: f64) -> Result<f64, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(var) else {
        return Ok(default);
    };
    let value: f64 = raw.trim().parse().map_err(|_| ConfigError::Invalid {
        var,
        value: raw.clone(),
    })?;
    if !value.is_finite() || value <= 0.0 {
        return Err(ConfigError::NotPositive { var, value: raw });
    }
    Ok(value)
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {value:?}")]
    Invalid { var: &'static str, value: String },

    #[error("{var} must be a positive number, got {value:?}")]
    NotPositive { var: &'static str, value: String },
}
