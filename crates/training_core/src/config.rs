use std::path::PathBuf;

use crate::TrainingError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = TrainingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(TrainingError::Config(format!(
                "TRAINING_OUTPUT must be `text` or `json`, got `{other}`"
            ))),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct Config {
    /// Package file to read; the built-in sample set is used when absent.
    pub packages_path: Option<PathBuf>,
    pub output: OutputFormat,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self, TrainingError> {
        Self::from_env_with(|k| std::env::var(k).ok())
    }

    /// Testable helper that reads configuration values using the provided
    /// function, so tests never touch the process environment.
    pub fn from_env_with<F>(mut get: F) -> Result<Self, TrainingError>
    where
        F: FnMut(&str) -> Option<String>,
    {
        let packages_path = get("TRAINING_PACKAGES_PATH")
            .filter(|p| !p.is_empty())
            .map(PathBuf::from);
        let output = get("TRAINING_OUTPUT")
            .map(|v| v.parse::<OutputFormat>())
            .transpose()?
            .unwrap_or_default();
        let log_level = get("TRAINING_LOG_LEVEL")
            .or_else(|| get("RUST_LOG"))
            .unwrap_or_else(|| "info".into());
        Ok(Self {
            packages_path,
            output,
            log_level,
        })
    }
}
