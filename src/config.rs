//! Runtime configuration for the key pair generator.

use clap::Parser;

/// Ethereum-compatible key pair generator
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Key vault name used in the example storage commands
    #[arg(long, default_value = "YOLO")]
    pub vault_name: String,

    /// Prefix for the secret names in the example storage commands
    #[arg(long, default_value = "hyperliquid")]
    pub secret_prefix: String,
}

impl Config {
    /// Validates the configuration.
    ///
    /// Both values are interpolated into example shell commands, so they
    /// must be non-empty and free of whitespace and quoting characters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_token("vault name", &self.vault_name)?;
        validate_token("secret prefix", &self.secret_prefix)?;
        Ok(())
    }
}

fn validate_token(what: &str, value: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::InvalidValue(format!("{what} cannot be empty")));
    }
    if value.chars().any(|c| c.is_whitespace() || c == '\'' || c == '"') {
        return Err(ConfigError::InvalidValue(format!(
            "{what} cannot contain whitespace or quotes"
        )));
    }
    Ok(())
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    InvalidValue(String),
}
