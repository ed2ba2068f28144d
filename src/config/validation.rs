//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use url::Url;

use crate::utils::errors::{DirectoryError, Result};
use super::Settings;

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_api_config(&settings.api)?;
    validate_admin_config(&settings.admin)?;
    validate_logging_config(&settings.logging)?;
    validate_ui_config(&settings.ui)?;

    Ok(())
}

/// Validate directory API configuration
fn validate_api_config(config: &super::ApiConfig) -> Result<()> {
    if config.base_url.trim().is_empty() {
        return Err(DirectoryError::Config(
            "API base URL is required".to_string()
        ));
    }

    let url = Url::parse(&config.base_url)?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(DirectoryError::Config(
            format!("API base URL must use http or https, got: {}", url.scheme())
        ));
    }

    if url.cannot_be_a_base() {
        return Err(DirectoryError::Config(
            "API base URL cannot be used as a base".to_string()
        ));
    }

    Ok(())
}

/// Validate admin credentials configuration
fn validate_admin_config(config: &super::AdminConfig) -> Result<()> {
    if config.username.is_empty() {
        return Err(DirectoryError::Config(
            "Admin username is required".to_string()
        ));
    }

    if config.password.is_empty() {
        return Err(DirectoryError::Config(
            "Admin password is required".to_string()
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(DirectoryError::Config(
            "Log level is required".to_string()
        ));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(DirectoryError::Config(
            format!("Invalid log level: {}. Valid levels: {:?}", config.level, valid_levels)
        ));
    }

    if config.file_name.is_empty() {
        return Err(DirectoryError::Config(
            "Log file name is required".to_string()
        ));
    }

    Ok(())
}

/// Validate terminal UI configuration
fn validate_ui_config(config: &super::UiConfig) -> Result<()> {
    if config.tick_rate_ms == 0 {
        return Err(DirectoryError::Config(
            "UI tick rate must be greater than 0".to_string()
        ));
    }

    Ok(())
}
