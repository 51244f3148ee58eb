//! Reader configuration from `lessonbook.toml`.
//!
//! Lookup order: `$LESSONBOOK_CONFIG`, then `./lessonbook.toml`. A missing
//! `./lessonbook.toml` means defaults. A missing file named by the variable, or
//! a file that fails to parse, is an error.

use crate::core::catalog::Track;
use crate::core::error::LessonbookError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_ENV: &str = "LESSONBOOK_CONFIG";
pub const CONFIG_FILE: &str = "lessonbook.toml";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Markdown,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReaderConfig {
    pub track: Track,
    pub format: OutputFormat,
    pub color: bool,
    pub excerpt_chars: usize,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            track: Track::Full,
            format: OutputFormat::Text,
            color: true,
            excerpt_chars: 500,
        }
    }
}

/// Where the config comes from: a path the user named, or the implicit file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Env(PathBuf),
    Implicit(PathBuf),
}

impl ConfigSource {
    pub fn path(&self) -> &Path {
        match self {
            ConfigSource::Env(p) | ConfigSource::Implicit(p) => p,
        }
    }
}

/// Relative `$LESSONBOOK_CONFIG` values resolve against `cwd`.
pub fn config_source(cwd: &Path) -> ConfigSource {
    match std::env::var(CONFIG_ENV) {
        Ok(p) if !p.trim().is_empty() => ConfigSource::Env(cwd.join(p)),
        _ => ConfigSource::Implicit(cwd.join(CONFIG_FILE)),
    }
}

pub fn load_config(cwd: &Path) -> Result<ReaderConfig, LessonbookError> {
    load_config_source(&config_source(cwd))
}

pub fn load_config_source(source: &ConfigSource) -> Result<ReaderConfig, LessonbookError> {
    if let ConfigSource::Env(path) = source
        && !path.exists()
    {
        return Err(LessonbookError::ConfigError(format!(
            "{}: file named by {} does not exist",
            path.display(),
            CONFIG_ENV
        )));
    }
    load_config_from(source.path())
}

pub fn load_config_from(path: &Path) -> Result<ReaderConfig, LessonbookError> {
    if !path.exists() {
        return Ok(ReaderConfig::default());
    }
    let content = fs::read_to_string(path).map_err(LessonbookError::IoError)?;
    let config: ReaderConfig = toml::from_str(&content)
        .map_err(|e| LessonbookError::ConfigError(format!("{}: {}", path.display(), e)))?;
    if config.excerpt_chars < 16 {
        return Err(LessonbookError::ConfigError(format!(
            "{}: excerpt_chars must be at least 16 (got {})",
            path.display(),
            config.excerpt_chars
        )));
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let tmp = tempdir().expect("tempdir");
        let cfg = load_config_from(&tmp.path().join(CONFIG_FILE)).expect("defaults");
        assert_eq!(cfg, ReaderConfig::default());
    }

    #[test]
    fn test_named_source_must_exist() {
        let tmp = tempdir().expect("tempdir");
        let missing = tmp.path().join("alt.tml");

        let implicit = ConfigSource::Implicit(missing.clone());
        assert_eq!(load_config_source(&implicit).expect("defaults"), ReaderConfig::default());

        let named = ConfigSource::Env(missing);
        let err = load_config_source(&named).unwrap_err();
        assert!(matches!(err, LessonbookError::ConfigError(_)));
        assert!(err.to_string().contains("LESSONBOOK_CONFIG"));
    }

    #[test]
    fn test_named_source_is_read() {
        let tmp = tempdir().expect("tempdir");
        let path = tmp.path().join("alt.toml");
        fs::write(&path, "color = false\n").expect("write");
        let cfg = load_config_source(&ConfigSource::Env(path)).expect("parse");
        assert!(!cfg.color);
        assert_eq!(cfg.track, Track::Full);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let tmp = tempdir().expect("tempdir");
        let path = tmp.path().join(CONFIG_FILE);
        fs::write(&path, "track = \"shortlist\"\nformat = \"markdown\"\n").expect("write");
        let cfg = load_config_from(&path).expect("parse");
        assert_eq!(cfg.track, Track::Shortlist);
        assert_eq!(cfg.format, OutputFormat::Markdown);
        assert!(cfg.color);
        assert_eq!(cfg.excerpt_chars, 500);
    }

    #[test]
    fn test_bad_values_are_config_errors() {
        let tmp = tempdir().expect("tempdir");
        let path = tmp.path().join(CONFIG_FILE);

        fs::write(&path, "track = \"weekly\"\n").expect("write");
        assert!(matches!(
            load_config_from(&path),
            Err(LessonbookError::ConfigError(_))
        ));

        fs::write(&path, "excerpt_chars = 4\n").expect("write");
        assert!(matches!(
            load_config_from(&path),
            Err(LessonbookError::ConfigError(_))
        ));
    }
}
