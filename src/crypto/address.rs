//! Ethereum address representation and derivation.

use std::fmt;

use secp256k1::PublicKey;
use tiny_keccak::{Hasher, Keccak};

/// An Ethereum address (20 bytes).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Address([u8; 20]);

impl Address {
    /// Derives the address for a secp256k1 public key.
    ///
    /// The address is the last 20 bytes of the Keccak-256 hash of the
    /// uncompressed public key body (the 64 bytes after the 0x04 tag).
    pub fn from_public_key(public_key: &PublicKey) -> Self {
        let uncompressed = public_key.serialize_uncompressed();
        let hash = keccak256(&uncompressed[1..]);

        let mut bytes = [0u8; 20];
        bytes.copy_from_slice(&hash[12..]);
        Self(bytes)
    }

    /// Creates an address from raw bytes.
    #[inline]
    pub const fn from_bytes(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    /// Returns the address as raw bytes.
    #[inline]
    pub const fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    /// Returns the address as a lowercase hex string (without 0x prefix).
    #[inline]
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Returns the 0x-prefixed, EIP-55 checksum-cased address.
    ///
    /// Each hex letter is uppercased when the corresponding nibble of the
    /// Keccak-256 hash of the lowercase hex body is 8 or greater.
    pub fn to_checksum(&self) -> String {
        let lower = self.to_hex();
        let hash = keccak256(lower.as_bytes());

        let mut out = String::with_capacity(42);
        out.push_str("0x");

        for (i, c) in lower.bytes().enumerate() {
            let shift = if i % 2 == 0 { 4 } else { 0 };
            let nibble = (hash[i / 2] >> shift) & 0x0f;
            if c.is_ascii_alphabetic() && nibble >= 8 {
                out.push(c.to_ascii_uppercase() as char);
            } else {
                out.push(c as char);
            }
        }

        out
    }
}

fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    hasher.update(data);
    let mut hash = [0u8; 32];
    hasher.finalize(&mut hash);
    hash
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self.to_checksum())
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_checksum())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addr(hex_str: &str) -> Address {
        Address::from_bytes(hex::decode(hex_str).unwrap().try_into().unwrap())
    }

    #[test]
    fn test_checksum_vectors() {
        // Test vectors from EIP-55
        for expected in [
            "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed",
            "0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359",
            "0xdbF03B407c01E7cD3CBea99509d93f8DDDC8C6FB",
            "0xD1220A0cf47c7B9Be7A2E6BA89F429762e7b9aDb",
        ] {
            assert_eq!(addr(&expected[2..].to_lowercase()).to_checksum(), expected);
        }
    }

    #[test]
    fn test_hex_output() {
        let address = Address::from_bytes([0u8; 20]);
        assert_eq!(address.to_hex(), "0000000000000000000000000000000000000000");
        assert_eq!(address.to_hex().len(), 40);
    }

    #[test]
    fn test_display_is_checksummed() {
        let address = addr("5aaeb6053f3e94c9b9a09f33669435e7ef1beaed");
        assert_eq!(
            format!("{}", address),
            "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed"
        );
    }
}
