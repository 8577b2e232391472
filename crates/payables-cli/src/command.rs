use payables_core::{
    AccountPayables, ClientConfig, Exchange, PayablesClient, Query, ValidationError,
};
use tracing::info;

use crate::cli::Cli;
use crate::error::CliError;

pub async fn run(cli: &Cli) -> Result<AccountPayables, CliError> {
    let query = build_query(cli)?;
    let config = ClientConfig::new(&cli.base_url, cli.timeout_ms)?;

    info!(
        symbol = %query.provider_symbol(),
        fiscal_year = %query.fiscal_year(),
        "fetching account payables"
    );
    let client = PayablesClient::new(config);
    Ok(client.fetch(&query).await?)
}

/// Validate every user-supplied field before anything touches the network.
pub fn build_query(cli: &Cli) -> Result<Query, ValidationError> {
    let exchange = cli
        .exchange
        .as_deref()
        .map(str::parse::<Exchange>)
        .transpose()?;
    Query::new(&cli.ticker, exchange, &cli.year, cli.api_key.as_deref())
}
