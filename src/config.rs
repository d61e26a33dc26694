use crate::constants::DEFAULT_REPLY_DELAY_MS;
use crate::errors::{NyayError, NyayResult};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::{env, fs, path::PathBuf, sync::RwLock, time::Duration};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub reply_delay_ms: u64,
    pub log_spec: String,
    pub activity_log_capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            reply_delay_ms: DEFAULT_REPLY_DELAY_MS,
            log_spec: "info".to_string(),
            activity_log_capacity: 200,
        }
    }
}

impl Config {
    pub fn reply_delay(&self) -> Duration {
        Duration::from_millis(self.reply_delay_ms)
    }
}

static CONFIG: Lazy<RwLock<Config>> = Lazy::new(|| RwLock::new(Config::default()));

pub fn initialize_config() -> NyayResult<()> {
    let config_path = get_config_path()?;

    // If a config file exists, load it
    if config_path.exists() {
        let config_str = fs::read_to_string(&config_path)
            .map_err(|e| NyayError::config_error(format!("failed to read config file: {}", e)))?;

        let mut config: Config = serde_json::from_str(&config_str)
            .map_err(|e| NyayError::config_error(format!("failed to parse config: {}", e)))?;

        apply_env_overrides(&mut config);
        validate_config(&config)?;

        *CONFIG.write().unwrap() = config;
    } else {
        // Create default config
        let mut config = Config::default();
        apply_env_overrides(&mut config);

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                NyayError::config_error(format!("failed to create config directory: {}", e))
            })?;
        }

        let config_str = serde_json::to_string_pretty(&config)
            .map_err(|e| NyayError::config_error(format!("failed to serialize config: {}", e)))?;

        fs::write(&config_path, config_str)
            .map_err(|e| NyayError::config_error(format!("failed to write config file: {}", e)))?;

        *CONFIG.write().unwrap() = config;
    }

    Ok(())
}

fn apply_env_overrides(config: &mut Config) {
    if let Ok(spec) = env::var("NYAYSAHAYAK_LOG") {
        config.log_spec = spec;
    }
}

fn get_config_path() -> NyayResult<PathBuf> {
    let home_dir = dirs::home_dir()
        .ok_or_else(|| NyayError::config_error("could not determine home directory"))?;

    Ok(home_dir
        .join(".config")
        .join("nyaysahayak")
        .join("config.json"))
}

fn validate_config(config: &Config) -> NyayResult<()> {
    if config.reply_delay_ms == 0 {
        return Err(NyayError::config_error(
            "reply_delay_ms must be greater than 0",
        ));
    }

    if config.log_spec.trim().is_empty() {
        return Err(NyayError::config_error("log_spec is required"));
    }

    if config.activity_log_capacity == 0 {
        return Err(NyayError::config_error(
            "activity_log_capacity must be greater than 0",
        ));
    }

    Ok(())
}

pub fn get_config() -> Config {
    CONFIG.read().unwrap().clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_validate_config_valid() {
        let config = Config::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validate_config_zero_delay() {
        let mut config = Config::default();
        config.reply_delay_ms = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_config_zero_log_capacity() {
        let mut config = Config::default();
        config.activity_log_capacity = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_config_blank_log_spec() {
        let mut config = Config::default();
        config.log_spec = "   ".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_config_file_round_trip() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("config.json");

        let mut config = Config::default();
        config.reply_delay_ms = 1500;
        let json = serde_json::to_string_pretty(&config).expect("serialize");
        fs::write(&path, json).expect("write");

        let loaded: Config =
            serde_json::from_str(&fs::read_to_string(&path).expect("read")).expect("parse");
        assert_eq!(loaded.reply_delay_ms, 1500);
        assert_eq!(loaded.reply_delay(), Duration::from_millis(1500));
        assert!(validate_config(&loaded).is_ok());
    }
}
