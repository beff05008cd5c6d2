//! Ethereum key pair generation.

use std::fmt;

use rand::RngCore;
use secp256k1::{PublicKey, Secp256k1, SecretKey};

use crate::error::KeygenError;

use super::Address;

/// An Ethereum key pair: a 32-byte secret scalar and its derived address.
///
/// The secret key exists only in process memory and the single report this
/// tool prints; it is never written to disk or the network.
#[derive(Clone)]
pub struct Keypair {
    secret_key: [u8; 32],
    address: Address,
}

impl Keypair {
    /// Generates a fresh key pair from the OS secure random source.
    pub fn generate() -> Result<Self, KeygenError> {
        let mut secret_bytes = [0u8; 32];
        rand::thread_rng().fill_bytes(&mut secret_bytes);
        Self::from_secret_bytes(secret_bytes)
    }

    /// Builds a key pair from an existing 32-byte secret scalar.
    ///
    /// Fails with `InvalidSecretKey` if the scalar is zero or not below the
    /// secp256k1 group order.
    pub fn from_secret_bytes(secret_bytes: [u8; 32]) -> Result<Self, KeygenError> {
        let secp = Secp256k1::new();
        let secret_key = SecretKey::from_slice(&secret_bytes)?;
        let public_key = PublicKey::from_secret_key(&secp, &secret_key);

        Ok(Self {
            secret_key: secret_bytes,
            address: Address::from_public_key(&public_key),
        })
    }

    /// Returns the private key as a 0x-prefixed lowercase hex string.
    pub fn private_key_hex(&self) -> String {
        format!("0x{}", hex::encode(self.secret_key))
    }

    /// Returns the derived address.
    #[inline]
    pub fn address(&self) -> &Address {
        &self.address
    }
}

// The secret scalar must never leak through debug output.
impl fmt::Debug for Keypair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Keypair")
            .field("secret_key", &"<redacted>")
            .field("address", &self.address)
            .finish()
    }
}
