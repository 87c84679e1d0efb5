use tx_app::{commands, logger};

use tx_auth::{CredentialPair, StaticCredentials};
use tx_store::FileStore;

use std::error::Error;
use std::io::IsTerminal;

use clap::Parser;

fn main() -> Result<(), Box<dyn Error>> {
    dotenvy::dotenv().ok();

    let cli = tx_app::Cli::parse();

    // Load and validate configuration
    let config = tx_config::Config::load()?;
    config.validate()?;

    let log_file = config.log_file_path()?;
    let colored = log_file.is_none() && std::io::stderr().is_terminal();
    logger::initialize(config.logging.level, log_file, colored)?;

    let verifier = StaticCredentials::new(
        config
            .auth
            .credentials
            .iter()
            .map(|entry| CredentialPair::new(entry.email.clone(), entry.password.clone()))
            .collect(),
    );

    let mut store =
        FileStore::open_with_quota(config.store_path()?, config.storage.quota_bytes)?;

    commands::run(cli.command, &mut store, &verifier)?;

    Ok(())
}
