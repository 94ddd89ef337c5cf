use std::env;
use std::fmt;
use std::path::PathBuf;

use crate::screening::ScoringSettings;

/// Distinguishes runtime behavior for different stages of deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }

    /// Log level used when `APP_LOG_LEVEL` is unset.
    pub const fn default_log_level(self) -> &'static str {
        match self {
            Self::Development => "debug",
            Self::Test => "warn",
            Self::Production => "info",
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub screening: ScreeningConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let tree_path = env::var("SCREENING_TREE_PATH")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);

        let mut scoring = ScoringSettings::default();
        if let Some(cutoff) = parse_var::<i32>("SCREENING_BUCKET_CUTOFF")? {
            if cutoff < 0 {
                return Err(ConfigError::OutOfRange {
                    name: "SCREENING_BUCKET_CUTOFF",
                    value: cutoff.to_string(),
                });
            }
            scoring.bayes.bucket_cutoff = cutoff;
        }
        if let Some(cutoff) = parse_amount("SCREENING_APPROVAL_CUTOFF")? {
            scoring.bayes.approval_cutoff = cutoff;
        }
        if let Some(penalty) = parse_amount("SCREENING_DEFAULT_PENALTY")? {
            scoring.risk.default_penalty = penalty;
        }

        let log_level = env::var("APP_LOG_LEVEL")
            .unwrap_or_else(|_| environment.default_log_level().to_string());

        Ok(Self {
            environment,
            screening: ScreeningConfig { tree_path, scoring },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

fn parse_var<T: std::str::FromStr>(name: &'static str) -> Result<Option<T>, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidNumber { name, value: raw }),
        Err(_) => Ok(None),
    }
}

/// Parses a float that must be finite and non-negative.
fn parse_amount(name: &'static str) -> Result<Option<f64>, ConfigError> {
    match parse_var::<f64>(name)? {
        Some(value) if !value.is_finite() || value < 0.0 => Err(ConfigError::OutOfRange {
            name,
            value: value.to_string(),
        }),
        parsed => Ok(parsed),
    }
}

/// Decision tree source and scoring constants.
#[derive(Debug, Clone)]
pub struct ScreeningConfig {
    /// JSON tree definition; the reference tree is used when absent.
    pub tree_path: Option<PathBuf>,
    pub scoring: ScoringSettings,
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidNumber { name: &'static str, value: String },
    OutOfRange { name: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidNumber { name, value } => {
                write!(f, "{name} must be a number, got '{value}'")
            }
            ConfigError::OutOfRange { name, value } => {
                write!(f, "{name} must be finite and non-negative, got '{value}'")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        env::remove_var("APP_ENV");
        env::remove_var("APP_LOG_LEVEL");
        env::remove_var("SCREENING_TREE_PATH");
        env::remove_var("SCREENING_BUCKET_CUTOFF");
        env::remove_var("SCREENING_APPROVAL_CUTOFF");
        env::remove_var("SCREENING_DEFAULT_PENALTY");
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.screening.tree_path, None);
        assert_eq!(config.screening.scoring, ScoringSettings::default());
        assert_eq!(config.telemetry.log_level, "debug");
    }

    #[test]
    fn overrides_scoring_constants() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_ENV", "ci");
        env::set_var("SCREENING_BUCKET_CUTOFF", "650");
        env::set_var("SCREENING_APPROVAL_CUTOFF", " 0.6 ");
        env::set_var("SCREENING_TREE_PATH", "trees/strict.json");
        let config = AppConfig::load().expect("config loads");
        reset_env();

        assert_eq!(config.environment, AppEnvironment::Test);
        assert_eq!(config.screening.scoring.bayes.bucket_cutoff, 650);
        assert_eq!(config.screening.scoring.bayes.approval_cutoff, 0.6);
        assert_eq!(
            config.screening.tree_path,
            Some(PathBuf::from("trees/strict.json"))
        );
    }

    #[test]
    fn rejects_non_numeric_penalty() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("SCREENING_DEFAULT_PENALTY", "half");
        let err = AppConfig::load().expect_err("invalid penalty rejected");
        reset_env();

        assert!(err.to_string().contains("SCREENING_DEFAULT_PENALTY"));
    }

    #[test]
    fn log_level_follows_environment_unless_set() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_ENV", "production");
        let production = AppConfig::load().expect("config loads");
        env::set_var("APP_LOG_LEVEL", "trace");
        let explicit = AppConfig::load().expect("config loads");
        reset_env();

        assert_eq!(production.environment, AppEnvironment::Production);
        assert_eq!(production.telemetry.log_level, "info");
        assert_eq!(explicit.telemetry.log_level, "trace");
    }

    #[test]
    fn rejects_non_finite_or_negative_scoring_values() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        let cases = [
            ("SCREENING_DEFAULT_PENALTY", "NaN"),
            ("SCREENING_DEFAULT_PENALTY", "-0.5"),
            ("SCREENING_APPROVAL_CUTOFF", "inf"),
            ("SCREENING_APPROVAL_CUTOFF", "-1"),
            ("SCREENING_BUCKET_CUTOFF", "-600"),
        ];

        for (name, value) in cases {
            reset_env();
            env::set_var(name, value);
            let result = AppConfig::load();
            reset_env();

            match result {
                Err(ConfigError::OutOfRange { name: rejected, .. }) => assert_eq!(rejected, name),
                other => panic!("expected {name}={value} to be out of range, got {other:?}"),
            }
        }
    }
}
