//! # eth_keygen
//!
//! Ethereum-compatible key pair generator with vault-storage instructions.
//!
//! ## Architecture
//!
//! - `crypto`: Key generation and address derivation
//! - `report`: Formatted operator report (wallet details, warnings, vault commands)
//! - `config`: Runtime configuration
//! - `error`: Error kinds

pub mod config;
pub mod crypto;
pub mod error;
pub mod report;

pub use config::Config;
pub use crypto::{Address, Keypair};
pub use error::KeygenError;
pub use report::Report;
