//! The formatted operator report.
//!
//! Everything this tool prints lives here: wallet details, security
//! warnings, and example vault-storage commands for the testnet and mainnet
//! environments. The report is rendered to a `String` first so tests can
//! assert on the exact output.

use std::fmt::Write as _;
use std::io::{self, Write};

use crate::config::Config;
use crate::crypto::Keypair;

const WIDE_RULE: &str = "============================================================";
const RULE: &str = "------------------------------------------------------------";

/// A report for one generated key pair.
pub struct Report<'a> {
    keypair: &'a Keypair,
    vault_name: &'a str,
    secret_prefix: &'a str,
}

impl<'a> Report<'a> {
    pub fn new(keypair: &'a Keypair, config: &'a Config) -> Self {
        Self {
            keypair,
            vault_name: &config.vault_name,
            secret_prefix: &config.secret_prefix,
        }
    }

    /// Writes the rendered report to the given stream.
    pub fn write_to(&self, out: &mut impl Write) -> io::Result<()> {
        out.write_all(self.render().as_bytes())
    }

    /// Renders the full report.
    pub fn render(&self) -> String {
        let address = self.keypair.address().to_checksum();
        let private_key = self.keypair.private_key_hex();

        let mut out = String::new();
        let _ = writeln!(out, "🔑 Generating new Ethereum-compatible key pair...");
        let _ = writeln!(out, "{WIDE_RULE}");
        let _ = writeln!(out);
        let _ = writeln!(out, "✅ Key pair generated successfully!");
        let _ = writeln!(out);
        let _ = writeln!(out, "📋 Wallet Details:");
        let _ = writeln!(out, "{RULE}");
        let _ = writeln!(out, "Address:     {address}");
        let _ = writeln!(out, "Private Key: {private_key}");
        let _ = writeln!(out);
        let _ = writeln!(out, "⚠️  SECURITY WARNINGS:");
        let _ = writeln!(out, "{RULE}");
        let _ = writeln!(out, "1. NEVER share your private key with anyone");
        let _ = writeln!(out, "2. NEVER commit your private key to source control");
        let _ = writeln!(out, "3. Store the private key securely in a key vault");
        let _ = writeln!(out, "4. This wallet has NO FUNDS - you must fund it before use");
        let _ = writeln!(out);
        let _ = writeln!(out, "📝 Next Steps:");
        let _ = writeln!(out, "{RULE}");
        let _ = writeln!(out, "For TESTNET:");
        let _ = writeln!(out, "  1. Fund this address with testnet tokens");
        let _ = writeln!(out, "  2. Store credentials in the key vault:");
        let _ = writeln!(out);
        self.vault_commands(&mut out, "dev", &address, &private_key);
        let _ = writeln!(out, "For MAINNET:");
        let _ = writeln!(out, "  ⚠️  Use a hardware wallet or secure key management!");
        let _ = writeln!(out, "  1. Fund this address with REAL tokens (be careful!)");
        let _ = writeln!(out, "  2. Store credentials in the key vault:");
        let _ = writeln!(out);
        self.vault_commands(&mut out, "prod", &address, &private_key);
        let _ = writeln!(out, "{WIDE_RULE}");
        out
    }

    /// Appends the two `az keyvault secret set` examples for one environment.
    fn vault_commands(&self, out: &mut String, env: &str, address: &str, private_key: &str) {
        for (secret, value) in [("address", address), ("privatekey", private_key)] {
            let _ = writeln!(out, "     az keyvault secret set \\");
            let _ = writeln!(out, "       --vault-name {} \\", self.vault_name);
            let _ = writeln!(out, "       --name {}-{env}-{secret} \\", self.secret_prefix);
            let _ = writeln!(out, "       --value '{value}'");
            let _ = writeln!(out);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn test_keypair() -> Keypair {
        let mut scalar = [0u8; 32];
        scalar[31] = 1;
        Keypair::from_secret_bytes(scalar).unwrap()
    }

    fn test_config() -> Config {
        Config::parse_from(["eth-keygen"])
    }

    #[test]
    fn test_report_contains_credentials_verbatim() {
        let keypair = test_keypair();
        let config = test_config();
        let report = Report::new(&keypair, &config).render();

        let address = keypair.address().to_checksum();
        let private_key = keypair.private_key_hex();

        // Wallet Details plus one vault command per environment
        assert_eq!(report.matches(&address).count(), 3);
        assert_eq!(report.matches(&private_key).count(), 3);
        assert!(report.contains(&format!("Address:     {address}")));
        assert!(report.contains(&format!("Private Key: {private_key}")));
    }

    #[test]
    fn test_report_structure() {
        let keypair = test_keypair();
        let config = test_config();
        let report = Report::new(&keypair, &config).render();

        assert_eq!(report.matches(WIDE_RULE).count(), 2);
        assert_eq!(report.matches(RULE).count(), 3);
        assert_eq!(report.matches("For TESTNET:").count(), 1);
        assert_eq!(report.matches("For MAINNET:").count(), 1);
        assert_eq!(report.matches("az keyvault secret set").count(), 4);
        for warning in ["NEVER share", "NEVER commit", "key vault", "NO FUNDS"] {
            assert!(report.contains(warning), "missing warning: {warning}");
        }
    }

    #[test]
    fn test_secret_names_use_configured_vault() {
        let keypair = test_keypair();
        let config = Config::parse_from([
            "eth-keygen",
            "--vault-name",
            "OPS",
            "--secret-prefix",
            "trading",
        ]);
        let report = Report::new(&keypair, &config).render();

        assert_eq!(report.matches("--vault-name OPS").count(), 4);
        for name in [
            "trading-dev-address",
            "trading-dev-privatekey",
            "trading-prod-address",
            "trading-prod-privatekey",
        ] {
            assert_eq!(report.matches(name).count(), 1, "secret name: {name}");
        }
    }

    #[test]
    fn test_write_to_matches_render() {
        let keypair = test_keypair();
        let config = test_config();
        let report = Report::new(&keypair, &config);

        let mut buf = Vec::new();
        report.write_to(&mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), report.render());
    }
}
