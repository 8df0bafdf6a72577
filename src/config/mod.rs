use crate::adapters::http::DEFAULT_BASE_URL;
use crate::app::routines::address_lookup::{DEFAULT_CITY, DEFAULT_REGION, DEFAULT_STREET};
use crate::app::routines::batch_lookup::DEFAULT_POSTAL_CODES;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_url, Validate};
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "viacep-lookup")]
#[command(about = "Look up Brazilian postal codes and addresses on ViaCEP")]
pub struct CliConfig {
    #[arg(long, global = true, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Look up each postal code in order
    Batch {
        #[arg(default_values = DEFAULT_POSTAL_CODES)]
        codes: Vec<String>,
    },
    /// Reverse lookup by region (UF), city and street
    Address {
        #[arg(long, default_value = DEFAULT_REGION)]
        region: String,

        #[arg(long, default_value = DEFAULT_CITY)]
        city: String,

        #[arg(long, default_value = DEFAULT_STREET)]
        street: String,
    },
}

impl ConfigProvider for CliConfig {
    fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("base_url", &self.base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn batch_codes(config: &CliConfig) -> Vec<String> {
        match &config.command {
            Command::Batch { codes } => codes.clone(),
            other => panic!("expected batch, got {:?}", other),
        }
    }

    #[test]
    fn test_batch_defaults_to_fixed_codes() {
        let config = CliConfig::try_parse_from(["viacep-lookup", "batch"]).unwrap();
        let codes = batch_codes(&config);

        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(codes, DEFAULT_POSTAL_CODES.to_vec());
    }

    #[test]
    fn test_batch_codes_keep_order() {
        let config =
            CliConfig::try_parse_from(["viacep-lookup", "batch", "01001000", "30140071"]).unwrap();

        assert_eq!(batch_codes(&config), vec!["01001000", "30140071"]);
    }

    #[test]
    fn test_address_defaults() {
        let config = CliConfig::try_parse_from(["viacep-lookup", "address"]).unwrap();

        match config.command {
            Command::Address {
                region,
                city,
                street,
            } => {
                assert_eq!(region, "mg");
                assert_eq!(city, "belo horizonte");
                assert_eq!(street, "rua dos aimores");
            }
            other => panic!("expected address, got {:?}", other),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let config = CliConfig::try_parse_from([
            "viacep-lookup",
            "address",
            "--city",
            "sao paulo",
            "--base-url",
            "http://localhost:8080/ws",
            "--verbose",
        ])
        .unwrap();

        assert!(config.verbose);
        assert!(!config.json_logs);
        assert_eq!(config.base_url(), "http://localhost:8080/ws");
        assert!(matches!(config.command, Command::Address { ref city, .. } if city == "sao paulo"));
    }

    #[test]
    fn test_validate_rejects_bad_base_url() {
        let config =
            CliConfig::try_parse_from(["viacep-lookup", "--base-url", "ftp://x", "batch"]).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_subcommand_required() {
        assert!(CliConfig::try_parse_from(["viacep-lookup"]).is_err());
    }
}
