//! Ethereum-compatible key pair generator CLI
//!
//! Usage:
//!   eth-keygen                                  # Generate with default vault text
//!   eth-keygen --vault-name OPS                 # Use a different vault name
//!   eth-keygen --secret-prefix trading          # Use a different secret prefix
//!
//! Prints a fresh key pair with security warnings and example commands for
//! storing the credentials in a key vault. Exits 1 with installation
//! guidance if the cryptographic backend is unusable.

use std::io::{self, Write};
use std::process;

use clap::Parser;

use eth_keygen::{crypto, Config, Keypair, KeygenError, Report};

fn main() {
    let config = Config::parse();

    if let Err(e) = config.validate() {
        eprintln!("Configuration error: {}", e);
        process::exit(1);
    }

    let stdout = io::stdout();
    process::exit(run(&config, &mut stdout.lock()));
}

fn run(config: &Config, out: &mut impl Write) -> i32 {
    let keypair = match crypto::self_check().and_then(|_| Keypair::generate()) {
        Ok(keypair) => keypair,
        Err(e) => return fail(&e, out),
    };

    if let Err(e) = Report::new(&keypair, config).write_to(out) {
        eprintln!("Error writing report: {}", e);
        return 1;
    }

    0
}

/// Maps a generation failure to its exit code, printing installation
/// guidance for a missing cryptographic backend.
fn fail(e: &KeygenError, out: &mut impl Write) -> i32 {
    match e {
        KeygenError::DependencyUnavailable { .. } => {
            let _ = writeln!(out, "{}", e.install_hint());
        }
        other => eprintln!("Error: {}", other),
    }
    1
}
