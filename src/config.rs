use crate::difficulty::{Difficulty, TickPeriods};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Program configuration read from a configuration file
#[derive(Clone, Copy, Deserialize, Debug, Default, Eq, PartialEq)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub(crate) struct Config {
    /// Difficulty that is selected when the menu first opens
    pub(crate) difficulty: Difficulty,

    /// Time between ticks for each difficulty
    pub(crate) tick_periods: TickPeriods,
}

impl Config {
    /// Return the default configuration file path
    pub(crate) fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_local_dir()
            .map(|p| p.join("gridsnake").join("config.toml"))
            .ok_or(ConfigError::NoPath)
    }

    /// Read configuration from a file on disk.  If the file does not exist and
    /// `allow_missing` is true, a default `Config` value is returned.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file could not be read or if the file's contents
    /// could not be deserialized.
    pub(crate) fn load(path: &Path, allow_missing: bool) -> Result<Config, ConfigError> {
        let content = match fs_err::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && allow_missing => {
                log::info!("No configuration file at {}; using defaults", path.display());
                return Ok(Config::default());
            }
            Err(e) => return Err(ConfigError::Read(e)),
        };
        log::info!("Read configuration from {}", path.display());
        Config::parse(&content)
    }

    fn parse(content: &str) -> Result<Config, ConfigError> {
        toml::from_str(content).map_err(Into::into)
    }
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to determine path to local configuration directory")]
    NoPath,
    #[error("failed to read configuration file")]
    Read(#[from] std::io::Error),
    #[error("failed to parse configuration file")]
    Parse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::time::Duration;

    #[test]
    fn empty() {
        assert_eq!(Config::parse("").unwrap(), Config::default());
    }

    #[test]
    fn full() {
        let cfg = Config::parse(concat!(
            "difficulty = \"hard\"\n",
            "\n",
            "[tick-periods]\n",
            "easy = 300\n",
            "normal = 150\n",
            "hard = 75\n",
        ))
        .unwrap();
        assert_eq!(cfg.difficulty, Difficulty::Hard);
        assert_eq!(
            cfg.tick_periods.get(Difficulty::Easy),
            Duration::from_millis(300)
        );
        assert_eq!(
            cfg.tick_periods.get(Difficulty::Normal),
            Duration::from_millis(150)
        );
        assert_eq!(
            cfg.tick_periods.get(Difficulty::Hard),
            Duration::from_millis(75)
        );
    }

    #[test]
    fn partial_periods() {
        let cfg = Config::parse("[tick-periods]\nhard = 30\n").unwrap();
        assert_eq!(cfg.difficulty, Difficulty::Normal);
        assert_eq!(
            cfg.tick_periods.get(Difficulty::Hard),
            Duration::from_millis(30)
        );
        assert_eq!(
            cfg.tick_periods.get(Difficulty::Easy),
            Duration::from_millis(200)
        );
    }

    #[test]
    fn zero_period() {
        let r = Config::parse("[tick-periods]\nnormal = 0\n");
        assert!(matches!(r, Err(ConfigError::Parse(_))), "{r:?}");
    }

    #[test]
    fn unknown_key() {
        let r = Config::parse("speed = 3\n");
        assert!(matches!(r, Err(ConfigError::Parse(_))), "{r:?}");
    }

    #[test]
    fn bad_difficulty() {
        let r = Config::parse("difficulty = \"medium\"\n");
        assert!(matches!(r, Err(ConfigError::Parse(_))), "{r:?}");
    }

    #[test]
    fn load_file() {
        let tmpdir = tempfile::tempdir().unwrap();
        let path = tmpdir.path().join("config.toml");
        fs_err::write(&path, "difficulty = \"easy\"\n").unwrap();
        let cfg = Config::load(&path, false).unwrap();
        assert_eq!(cfg.difficulty, Difficulty::Easy);
    }

    #[test]
    fn load_missing_allowed() {
        let tmpdir = tempfile::tempdir().unwrap();
        let path = tmpdir.path().join("nonexistent.toml");
        assert_eq!(Config::load(&path, true).unwrap(), Config::default());
    }

    #[test]
    fn load_missing_required() {
        let tmpdir = tempfile::tempdir().unwrap();
        let path = tmpdir.path().join("nonexistent.toml");
        let r = Config::load(&path, false);
        assert!(matches!(r, Err(ConfigError::Read(_))), "{r:?}");
    }
}
