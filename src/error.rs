//! Error kinds for key generation.

use thiserror::Error;

/// Package name printed in installation guidance when the backend is unusable.
pub const CRYPTO_PACKAGE: &str = "secp256k1";

#[derive(Debug, Error)]
pub enum KeygenError {
    /// The cryptographic backend could not be initialized or failed its
    /// known-answer self check.
    #[error("cryptographic library unavailable: {package}")]
    DependencyUnavailable { package: &'static str },

    /// The 32-byte scalar is zero or exceeds the secp256k1 group order.
    #[error("invalid secret key: {0}")]
    InvalidSecretKey(#[from] secp256k1::Error),
}

impl KeygenError {
    /// Installation guidance for a missing or broken cryptographic backend.
    pub fn install_hint(&self) -> String {
        let package = match self {
            KeygenError::DependencyUnavailable { package } => package,
            _ => CRYPTO_PACKAGE,
        };
        format!(
            "❌ Error: {package} library unavailable\n\
             \n\
             Add it to Cargo.toml and rebuild:\n\
             \x20 cargo add {package} --features rand-std"
        )
    }
}
