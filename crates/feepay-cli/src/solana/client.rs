use anyhow::{Context, Result};
use feepay_client::config::{ENV_PROVIDER_URL, ENV_WALLET};
use feepay_client::{Commitment, FeePayClient, ProviderConfig};
use solana_sdk::pubkey::Pubkey;
use tracing::debug;

use crate::args::Cli;

pub fn program_id(cli: &Cli) -> Result<Pubkey> {
    Ok(feepay_client::program_id_or_default(cli.program_id.as_deref())?)
}

/// Resolve the provider: command line flags first, then the Anchor env vars.
pub fn provider_config(cli: &Cli) -> Result<ProviderConfig> {
    let commitment: Commitment = cli.commitment.parse()?;
    let cfg = ProviderConfig::from_lookup(|key| {
        let flag = match key {
            ENV_PROVIDER_URL => cli.url.clone(),
            ENV_WALLET => cli.wallet.clone(),
            _ => None,
        };
        flag.or_else(|| std::env::var(key).ok())
    })?;
    Ok(cfg.with_commitment(commitment))
}

pub fn connect(cli: &Cli) -> Result<FeePayClient> {
    let program_id = program_id(cli)?;
    let cfg = provider_config(cli)?;
    debug!(url = %cfg.url, wallet = %cfg.wallet_path, commitment = %cfg.commitment, "provider");
    FeePayClient::new(program_id, cfg).context("failed to set up provider")
}
