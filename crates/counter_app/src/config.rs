use std::env;
use std::fs;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use counter_engine::{CountSettings, DEFAULT_PARALLEL_THRESHOLD};
use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::logging::LogDestination;

const CONFIG_FILENAME: &str = "counter.ron";
const CONFIG_ENV: &str = "COUNTER_CONFIG";

/// Optional settings read from a RON file; every field may be omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub parallel_threshold: usize,
    pub max_workers: Option<NonZeroUsize>,
    pub log_level: LevelFilter,
    pub log_destination: LogDestination,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
            max_workers: None,
            log_level: LevelFilter::Warn,
            log_destination: LogDestination::default(),
        }
    }
}

impl AppConfig {
    pub fn count_settings(&self) -> CountSettings {
        CountSettings {
            parallel_threshold: self.parallel_threshold,
            max_workers: self.max_workers,
        }
    }
}

/// Load from `$COUNTER_CONFIG`, else `./counter.ron`, else defaults.
///
/// Runs before the logger exists, so problems are reported on stderr.
pub fn load() -> AppConfig {
    match env::var_os(CONFIG_ENV) {
        Some(path) => load_from(&PathBuf::from(path), true),
        None => load_from(Path::new(CONFIG_FILENAME), false),
    }
}

fn load_from(path: &Path, required: bool) -> AppConfig {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound && !required => {
            return AppConfig::default();
        }
        Err(err) => {
            eprintln!("Warning: Could not read config {:?}: {}", path, err);
            return AppConfig::default();
        }
    };
    match parse(&content) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Warning: Could not parse config {:?}: {}", path, err);
            AppConfig::default()
        }
    }
}

fn parse(content: &str) -> Result<AppConfig, ron::error::SpannedError> {
    ron::from_str(content)
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::num::NonZeroUsize;

    use log::LevelFilter;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::{load_from, parse, AppConfig};
    use crate::logging::LogDestination;

    #[test]
    fn full_config_parses() {
        let config = parse(
            r#"(parallel_threshold: 4, max_workers: Some(3), log_level: Debug, log_destination: Both)"#,
        )
        .unwrap();
        assert_eq!(config.parallel_threshold, 4);
        assert_eq!(config.max_workers, NonZeroUsize::new(3));
        assert_eq!(config.log_level, LevelFilter::Debug);
        assert_eq!(config.log_destination, LogDestination::Both);
    }

    #[test]
    fn omitted_fields_use_defaults() {
        let config = parse("(max_workers: Some(2))").unwrap();
        assert_eq!(config.parallel_threshold, 2);
        assert_eq!(config.log_level, LevelFilter::Warn);
        assert_eq!(config.log_destination, LogDestination::Terminal);
    }

    #[test]
    fn zero_workers_is_rejected() {
        assert!(parse("(max_workers: Some(0))").is_err());
    }

    #[test]
    fn level_names_ignore_case() {
        assert_eq!(parse("(log_level: info)").unwrap().log_level, LevelFilter::Info);
        assert_eq!(parse("(log_level: Off)").unwrap().log_level, LevelFilter::Off);
    }

    #[test]
    fn unknown_level_is_a_parse_error() {
        assert!(parse("(log_level: Chatty)").is_err());
    }

    #[test]
    fn unknown_level_in_file_gives_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("counter.ron");
        fs::write(&path, "(parallel_threshold: 9, log_level: Loud)").unwrap();
        assert_eq!(load_from(&path, true), AppConfig::default());
    }

    #[test]
    fn missing_optional_file_gives_defaults() {
        let temp = TempDir::new().unwrap();
        let config = load_from(&temp.path().join("counter.ron"), false);
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn broken_file_gives_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("counter.ron");
        fs::write(&path, "(parallel_threshold: \"many\")").unwrap();
        assert_eq!(load_from(&path, true), AppConfig::default());
    }

    #[test]
    fn settings_carry_over() {
        let config = parse("(parallel_threshold: 7)").unwrap();
        let settings = config.count_settings();
        assert_eq!(settings.parallel_threshold, 7);
        assert_eq!(settings.max_workers, None);
    }
}
