//! Cryptographic operations for Ethereum key and address generation.
//!
//! This module provides:
//! - Secure random key generation using secp256k1
//! - Ethereum address derivation using Keccak-256 (EIP-55 checksummed)
//! - A known-answer self check for the cryptographic backend

mod address;
mod keypair;

pub use address::Address;
pub use keypair::Keypair;

use crate::error::{KeygenError, CRYPTO_PACKAGE};

/// Lowercase address for the secret scalar 1, a published test vector.
const SELF_CHECK_ADDRESS: &str = "7e5f4552091a69125d5dfcb7b8c2659029395bdf";

/// Verifies the cryptographic backend with a known-answer derivation.
///
/// Derives the address for the secret scalar 1 and compares it against the
/// published value. Any failure means the secp256k1 backend is unusable on
/// this host.
pub fn self_check() -> Result<(), KeygenError> {
    let mut scalar_one = [0u8; 32];
    scalar_one[31] = 1;

    let keypair = Keypair::from_secret_bytes(scalar_one).map_err(|_| {
        KeygenError::DependencyUnavailable {
            package: CRYPTO_PACKAGE,
        }
    })?;

    if keypair.address().to_hex() != SELF_CHECK_ADDRESS {
        return Err(KeygenError::DependencyUnavailable {
            package: CRYPTO_PACKAGE,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_self_check_passes() {
        assert!(self_check().is_ok());
    }
}
