//! Settings shared by the desktop app and `question-tool`.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use thiserror::Error;

use crate::domain::Language;

pub const DEFAULT_CONFIG_PATH: &str = "maths_tutor.toml";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub teacher_code: String,
    pub question_bank_path: PathBuf,
    pub styles_dir: PathBuf,
    pub default_language: Language,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            teacher_code: "teacher123".into(),
            question_bank_path: Path::new("question").join("question.xlsx"),
            styles_dir: PathBuf::from("styles"),
            default_language: Language::English,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid config file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Defaults, then `config_path` if it exists, then `MATHS_TUTOR__*` environment variables.
pub fn load_settings(config_path: &Path) -> Result<Settings, ConfigError> {
    let settings = read_settings_file(config_path)?;
    Ok(apply_env_overrides(settings, |name| std::env::var(name).ok()))
}

/// Defaults overlaid with `config_path`; a missing file yields the defaults.
pub fn read_settings_file(config_path: &Path) -> Result<Settings, ConfigError> {
    match fs::read_to_string(config_path) {
        Ok(raw) => toml::from_str::<Settings>(&raw).map_err(|source| ConfigError::Parse {
            path: config_path.to_path_buf(),
            source,
        }),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            tracing::debug!(path = %config_path.display(), "no config file; using defaults");
            Ok(Settings::default())
        }
        Err(source) => Err(ConfigError::Read {
            path: config_path.to_path_buf(),
            source,
        }),
    }
}

pub fn apply_env_overrides(
    mut settings: Settings,
    lookup: impl Fn(&str) -> Option<String>,
) -> Settings {
    if let Some(v) = lookup("MATHS_TUTOR__TEACHER_CODE") {
        settings.teacher_code = v;
    }
    if let Some(v) = lookup("MATHS_TUTOR__QUESTION_BANK") {
        settings.question_bank_path = PathBuf::from(v);
    }
    if let Some(v) = lookup("MATHS_TUTOR__STYLES_DIR") {
        settings.styles_dir = PathBuf::from(v);
    }
    if let Some(v) = lookup("MATHS_TUTOR__LANGUAGE") {
        match v.parse::<Language>() {
            Ok(language) => settings.default_language = language,
            Err(err) => tracing::warn!(value = %v, error = %err, "ignoring MATHS_TUTOR__LANGUAGE"),
        }
    }
    settings
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
