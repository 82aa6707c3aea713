//! Command-line handling for the `snowman-shooter` binary.

use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

use crate::config::{AppConfig, ConfigError};

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{flag} needs a value")]
    MissingValue { flag: String },
    #[error("invalid value for {flag}: {value}")]
    InvalidValue { flag: String, value: String },
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to start game loop: {0}")]
    Spawn(#[source] std::io::Error),
    #[error("game loop thread panicked")]
    LoopPanicked,
}

pub fn wants_help(args: &[String]) -> bool {
    args.iter()
        .any(|a| matches!(a.as_str(), "help" | "--help" | "-h"))
}

fn has_flag(args: &[String], flag: &str) -> bool {
    args.iter().any(|a| a == flag)
}

/// Value following `flag`, if the flag is present.
pub fn parse_value<T: FromStr>(args: &[String], flag: &str) -> Result<Option<T>, CliError> {
    for i in 0..args.len() {
        if args[i] == flag {
            let raw = args.get(i + 1).ok_or_else(|| CliError::MissingValue {
                flag: flag.to_string(),
            })?;
            return raw.parse().map(Some).map_err(|_| CliError::InvalidValue {
                flag: flag.to_string(),
                value: raw.clone(),
            });
        }
    }
    Ok(None)
}

/// Config file (or defaults) with command-line overrides applied.
pub fn load_config(args: &[String]) -> Result<AppConfig, CliError> {
    let mut config = match parse_value::<PathBuf>(args, "--config")? {
        Some(path) => AppConfig::load(&path)?,
        None => AppConfig::default(),
    };

    if let Some(seed) = parse_value(args, "--seed")? {
        config.seed = seed;
    }
    if let Some(secs) = parse_value(args, "--max-secs")? {
        config.max_run_secs = secs;
    }
    if has_flag(args, "--fast") {
        config.realtime = false;
    }
    if has_flag(args, "--manual") {
        config.autopilot.enabled = false;
    }

    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_no_args_gives_defaults() {
        let config = load_config(&[]).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_overrides_applied() {
        let config =
            load_config(&args(&["--seed", "9", "--max-secs", "12.5", "--fast", "--manual"]))
                .unwrap();
        assert_eq!(config.seed, 9);
        assert_eq!(config.max_run_secs, 12.5);
        assert!(!config.realtime);
        assert!(!config.autopilot.enabled);
    }

    #[test]
    fn test_missing_value() {
        let err = load_config(&args(&["--seed"])).unwrap_err();
        assert!(matches!(err, CliError::MissingValue { ref flag } if flag == "--seed"));
    }

    #[test]
    fn test_invalid_value() {
        let err = load_config(&args(&["--seed", "many"])).unwrap_err();
        assert_eq!(err.to_string(), "invalid value for --seed: many");
    }

    #[test]
    fn test_negative_time_limit_fails_validation() {
        let err = load_config(&args(&["--max-secs", "-1"])).unwrap_err();
        assert!(matches!(err, CliError::Config(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_missing_config_file() {
        let err = load_config(&args(&["--config", "/no/such/snowman.toml"])).unwrap_err();
        assert!(matches!(err, CliError::Config(ConfigError::Io { .. })));
    }

    #[test]
    fn test_help_detected() {
        assert!(wants_help(&args(&["--fast", "-h"])));
        assert!(!wants_help(&args(&["--fast"])));
    }
}
