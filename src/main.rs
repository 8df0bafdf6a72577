use clap::Parser;
use viacep_lookup::utils::{logger, validation::Validate};
use viacep_lookup::{
    AddressLookup, BatchLookup, CliConfig, Command, LocalityQuery, LookupError, LookupRunner,
    PostalCode, ViaCepClient,
};

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    if config.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = run(config).await {
        tracing::error!("viacep-lookup failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }
}

async fn run(config: CliConfig) -> Result<(), LookupError> {
    config.validate()?;

    let client = ViaCepClient::from_config(&config)?;
    tracing::debug!("Using base URL {}", client.base_url());

    match config.command {
        Command::Batch { codes } => {
            let codes = codes.into_iter().map(PostalCode::from).collect();
            LookupRunner::new(BatchLookup::new(client, codes)).run().await
        }
        Command::Address {
            region,
            city,
            street,
        } => {
            let query = LocalityQuery::new(region, city, street);
            LookupRunner::new(AddressLookup::new(client, query)).run().await
        }
    }
}
