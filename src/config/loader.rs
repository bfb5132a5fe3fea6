// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration loading.

use crate::error::{ConfigError, GwkError, Result};
use std::path::{Path, PathBuf};

use super::schema::GwkConfig;

/// Configuration file names to search for, in order of priority.
const CONFIG_FILES: &[&str] = &["gwk.toml", ".gwk.toml", ".config/gwk.toml"];

/// Find the configuration file in the current directory or parent directories.
pub fn find_config_file() -> Option<PathBuf> {
    let current_dir = std::env::current_dir().ok()?;
    find_config_file_from(&current_dir)
}

/// Find the configuration file starting from a specific directory.
pub fn find_config_file_from(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        for config_name in CONFIG_FILES {
            let config_path = current.join(config_name);
            if config_path.exists() {
                return Some(config_path);
            }
        }

        if !current.pop() {
            break;
        }
    }

    if let Some(home) = dirs::home_dir() {
        for config_name in CONFIG_FILES {
            let config_path = home.join(config_name);
            if config_path.exists() {
                return Some(config_path);
            }
        }
    }

    // XDG config directory
    if let Some(config_dir) = dirs::config_dir() {
        let gwk_config = config_dir.join("gwk").join("config.toml");
        if gwk_config.exists() {
            return Some(gwk_config);
        }
    }

    None
}

/// Load configuration from the default locations.
pub fn load_config() -> Result<GwkConfig> {
    match find_config_file() {
        Some(path) => load_config_from(&path),
        None => {
            tracing::debug!("No configuration file found, using defaults");
            Ok(GwkConfig::default())
        }
    }
}

/// Load configuration from a specific path.
pub fn load_config_from(path: &Path) -> Result<GwkConfig> {
    tracing::debug!("Loading configuration from: {:?}", path);

    if !path.exists() {
        return Err(GwkError::Config(ConfigError::NotFound {
            path: path.to_path_buf(),
        }));
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        GwkError::Config(ConfigError::ParseError {
            message: format!("Failed to read config file: {}", e),
        })
    })?;

    parse_config(&content)
}

/// Parse configuration from a TOML string.
pub fn parse_config(content: &str) -> Result<GwkConfig> {
    let config: GwkConfig = toml::from_str(content).map_err(|e| {
        GwkError::Config(ConfigError::ParseError {
            message: format!("Failed to parse TOML: {}", e),
        })
    })?;

    validate_config(&config)?;
    Ok(config)
}

fn validate_config(config: &GwkConfig) -> Result<()> {
    if config.commit.max_body_line_length == 0 {
        return Err(GwkError::Config(ConfigError::InvalidValue {
            key: "commit.max_body_line_length".to_string(),
            message: "must be greater than zero".to_string(),
        }));
    }

    if config.push.spinner_interval_ms == 0 {
        return Err(GwkError::Config(ConfigError::InvalidValue {
            key: "push.spinner_interval_ms".to_string(),
            message: "must be greater than zero".to_string(),
        }));
    }

    if let Some(scope) = config.commit.common_scopes.iter().find(|s| s.is_empty()) {
        return Err(GwkError::Config(ConfigError::InvalidValue {
            key: "commit.common_scopes".to_string(),
            message: format!("empty scope {:?} is not allowed", scope),
        }));
    }

    Ok(())
}
