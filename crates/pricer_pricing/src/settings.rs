//! Engine settings.
//!
//! [`PricerSettings`] is the serialisable form of the engine configuration.
//! It can be loaded from TOML and overridden from environment variables;
//! [`PricerSettings::simulation_config`] and
//! [`PricerSettings::finite_difference_config`] turn it into validated
//! runtime configuration.
//!
//! ```toml
//! workers = 8
//! strategy = "vectorized"
//! greeks_mode = "fd-monte-carlo"
//!
//! [finite_difference]
//! delta_bump = 0.01
//! gamma_method = "delta-difference"
//! gamma_bump = 0.03
//! theta_step = 0.05
//! vega_step = 0.01
//! ```
//!
//! Environment overrides: `PRICER_WORKERS`, `PRICER_STRATEGY`,
//! `PRICER_GREEKS_MODE`.

use std::path::{Path, PathBuf};

use pricer_core::types::PricingError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::greeks::{
    FiniteDifferenceConfig, GammaMethod, GreeksMode, DEFAULT_DELTA_BUMP,
    DEFAULT_GAMMA_DELTA_BUMP, DEFAULT_GAMMA_PRICE_BUMP, DEFAULT_VEGA_STEP,
};
use crate::mc::{ConfigError, ExecutionStrategy, SimulationConfig};

/// Environment variable overriding the worker count.
pub const ENV_WORKERS: &str = "PRICER_WORKERS";
/// Environment variable overriding the execution strategy.
pub const ENV_STRATEGY: &str = "PRICER_STRATEGY";
/// Environment variable overriding the Greeks mode.
pub const ENV_GREEKS_MODE: &str = "PRICER_GREEKS_MODE";

/// Settings loading errors.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The settings file could not be read.
    #[error("Failed to read settings file {path}: {source}")]
    Io {
        /// File that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The TOML text could not be parsed.
    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// Settings could not be written as TOML.
    #[error("Failed to serialise settings: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// An environment override holds an unusable value.
    #[error("Invalid value '{value}' for {var}")]
    Env {
        /// Variable name.
        var: &'static str,
        /// Offending value.
        value: String,
    },

    /// Parsed values failed validation.
    #[error(transparent)]
    Invalid(#[from] ConfigError),
}

impl From<SettingsError> for PricingError {
    fn from(err: SettingsError) -> Self {
        PricingError::InvalidConfig(err.to_string())
    }
}

/// Gamma estimation method as written in settings files.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GammaMethodKind {
    /// Second difference of prices.
    SecondDifference,
    /// Difference of deltas.
    #[default]
    DeltaDifference,
}

/// `[finite_difference]` table.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FiniteDifferenceSettings {
    /// Relative spot bump for delta.
    pub delta_bump: f64,
    /// Gamma method.
    pub gamma_method: GammaMethodKind,
    /// Relative spot bump for gamma; the method's default when absent.
    pub gamma_bump: Option<f64>,
    /// Maturity step for theta, in years; one day for the closed-form
    /// pricer and a wider step for Monte Carlo when absent.
    pub theta_step: Option<f64>,
    /// Absolute volatility bump for vega.
    pub vega_step: f64,
}

impl Default for FiniteDifferenceSettings {
    fn default() -> Self {
        Self {
            delta_bump: DEFAULT_DELTA_BUMP,
            gamma_method: GammaMethodKind::default(),
            gamma_bump: None,
            theta_step: None,
            vega_step: DEFAULT_VEGA_STEP,
        }
    }
}

/// Engine settings.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricerSettings {
    /// Worker threads per simulation; hardware concurrency when absent.
    pub workers: Option<usize>,
    /// Inner-loop strategy.
    pub strategy: ExecutionStrategy,
    /// Default Greeks mode for reports.
    pub greeks_mode: GreeksMode,
    /// Bump sizes for finite-difference Greeks.
    pub finite_difference: FiniteDifferenceSettings,
}

impl PricerSettings {
    /// Parses settings from TOML text and validates them.
    ///
    /// # Errors
    ///
    /// `SettingsError::Parse` for malformed TOML, `SettingsError::Invalid`
    /// for values that fail validation.
    pub fn from_toml_str(content: &str) -> Result<Self, SettingsError> {
        let settings: PricerSettings = toml::from_str(content)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Loads settings from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), ?settings, "loaded pricer settings");
        Ok(settings)
    }

    /// Default settings with environment overrides applied.
    pub fn from_env() -> Result<Self, SettingsError> {
        let mut settings = Self::default();
        settings.apply_env()?;
        Ok(settings)
    }

    /// Applies `PRICER_*` environment overrides in place.
    pub fn apply_env(&mut self) -> Result<(), SettingsError> {
        self.apply_overrides(|var| std::env::var(var).ok())
    }

    fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), SettingsError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        if let Some(value) = lookup(ENV_WORKERS) {
            let workers = value.trim().parse().map_err(|_| SettingsError::Env {
                var: ENV_WORKERS,
                value: value.clone(),
            })?;
            self.workers = Some(workers);
        }
        if let Some(value) = lookup(ENV_STRATEGY) {
            self.strategy = value.parse()?;
        }
        if let Some(value) = lookup(ENV_GREEKS_MODE) {
            self.greeks_mode = value.parse()?;
        }
        self.validate()?;
        Ok(())
    }

    /// Serialises the settings as TOML.
    pub fn to_toml_string(&self) -> Result<String, SettingsError> {
        Ok(toml::to_string(self)?)
    }

    /// Checks every value by building the runtime configs.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.simulation_config()?;
        self.finite_difference_config()?;
        Ok(())
    }

    /// Runtime simulation configuration.
    pub fn simulation_config(&self) -> Result<SimulationConfig, ConfigError> {
        let mut builder = SimulationConfig::builder().strategy(self.strategy);
        if let Some(workers) = self.workers {
            builder = builder.workers(workers);
        }
        builder.build()
    }

    /// Runtime finite-difference configuration.
    pub fn finite_difference_config(&self) -> Result<FiniteDifferenceConfig, ConfigError> {
        let fd = &self.finite_difference;
        let gamma_method = match fd.gamma_method {
            GammaMethodKind::SecondDifference => GammaMethod::SecondDifference {
                relative_bump: fd.gamma_bump.unwrap_or(DEFAULT_GAMMA_PRICE_BUMP),
            },
            GammaMethodKind::DeltaDifference => GammaMethod::DeltaDifference {
                relative_bump: fd.gamma_bump.unwrap_or(DEFAULT_GAMMA_DELTA_BUMP),
            },
        };
        let mut builder = FiniteDifferenceConfig::builder()
            .delta_bump(fd.delta_bump)
            .gamma_method(gamma_method)
            .vega_step(fd.vega_step);
        if let Some(step) = fd.theta_step {
            builder = builder.theta_step(step);
        }
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::greeks::RepricingSource;
    use std::collections::HashMap;

    #[test]
    fn test_toml_deserialization() {
        let toml_str = r#"
            workers = 8
            strategy = "scalar"
            greeks_mode = "fd-monte-carlo"

            [finite_difference]
            delta_bump = 0.02
            gamma_method = "second-difference"
            theta_step = 0.01
            vega_step = 0.005
        "#;

        let settings = PricerSettings::from_toml_str(toml_str).unwrap();
        assert_eq!(settings.workers, Some(8));
        assert_eq!(settings.strategy, ExecutionStrategy::Scalar);
        assert_eq!(
            settings.greeks_mode,
            GreeksMode::FiniteDifference(RepricingSource::MonteCarlo)
        );

        let fd = settings.finite_difference_config().unwrap();
        assert_eq!(fd.delta_bump(), 0.02);
        assert_eq!(
            fd.gamma_method(),
            GammaMethod::SecondDifference {
                relative_bump: DEFAULT_GAMMA_PRICE_BUMP
            }
        );
        assert_eq!(fd.theta_step(), Some(0.01));
        assert_eq!(settings.simulation_config().unwrap().workers(), 8);
    }

    #[test]
    fn test_partial_toml_deserialization() {
        let settings = PricerSettings::from_toml_str("strategy = \"vectorized\"").unwrap();
        assert_eq!(settings.workers, None);
        assert_eq!(settings.greeks_mode, GreeksMode::Analytic);
        assert_eq!(settings.finite_difference.theta_step, None);
        assert_eq!(
            settings.finite_difference_config().unwrap(),
            FiniteDifferenceConfig::default()
        );
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(matches!(
            PricerSettings::from_toml_str("workers = 0"),
            Err(SettingsError::Invalid(ConfigError::InvalidWorkerCount(0)))
        ));
        assert!(matches!(
            PricerSettings::from_toml_str("[finite_difference]\nvega_step = -0.01"),
            Err(SettingsError::Invalid(ConfigError::InvalidParameter { .. }))
        ));
        assert!(matches!(
            PricerSettings::from_toml_str("greeks_mode = \"symbolic\""),
            Err(SettingsError::Parse(_))
        ));
        assert!(matches!(
            PricerSettings::from_toml_str("workers = "),
            Err(SettingsError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        let err = PricerSettings::from_file("/nonexistent/pricer.toml").unwrap_err();
        assert!(matches!(err, SettingsError::Io { .. }));
        let err: PricingError = err.into();
        assert!(matches!(err, PricingError::InvalidConfig(_)));
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            (ENV_WORKERS, "3"),
            (ENV_STRATEGY, "scalar"),
            (ENV_GREEKS_MODE, "fd-analytic"),
        ]
        .into_iter()
        .collect();

        let mut settings = PricerSettings::default();
        settings
            .apply_overrides(|var| vars.get(var).map(|v| v.to_string()))
            .unwrap();
        assert_eq!(settings.workers, Some(3));
        assert_eq!(settings.strategy, ExecutionStrategy::Scalar);
        assert_eq!(
            settings.greeks_mode,
            GreeksMode::FiniteDifference(RepricingSource::Analytic)
        );

        let err = PricerSettings::default()
            .apply_overrides(|var| (var == ENV_WORKERS).then(|| "many".to_string()))
            .unwrap_err();
        assert!(matches!(err, SettingsError::Env { var: ENV_WORKERS, .. }));
    }

    #[test]
    fn test_written_settings_load_back() {
        let settings = PricerSettings {
            workers: Some(4),
            greeks_mode: GreeksMode::FiniteDifference(RepricingSource::MonteCarlo),
            ..Default::default()
        };
        let text = settings.to_toml_string().unwrap();
        assert_eq!(PricerSettings::from_toml_str(&text).unwrap(), settings);
    }
}
