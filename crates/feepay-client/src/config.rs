//! Provider configuration: which cluster to talk to and which keypair signs.
//!
//! Follows the Anchor provider convention: `ANCHOR_PROVIDER_URL` names the
//! cluster (URL or moniker) and `ANCHOR_WALLET` names a keypair file. The
//! environment is only consulted by [`ProviderConfig::from_env`]; everything
//! else takes configuration explicitly.

use std::fmt;
use std::str::FromStr;

use solana_sdk::commitment_config::CommitmentConfig;
use solana_sdk::signature::{read_keypair_file, Keypair};
use url::Url;

use crate::error::{ClientError, ClientResult};

pub const ENV_PROVIDER_URL: &str = "ANCHOR_PROVIDER_URL";
pub const ENV_WALLET: &str = "ANCHOR_WALLET";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    pub url: String,
    pub wallet_path: String,
    pub commitment: Commitment,
}

impl ProviderConfig {
    /// Build from a cluster URL or moniker and a keypair path.
    pub fn new(cluster: &str, wallet_path: &str) -> ClientResult<Self> {
        let cluster: Cluster = cluster.parse()?;
        let cfg = Self {
            url: cluster.url().to_string(),
            wallet_path: shellexpand::tilde(wallet_path).to_string(),
            commitment: Commitment::default(),
        };
        validate_config(&cfg)?;
        Ok(cfg)
    }

    pub fn from_env() -> ClientResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> ClientResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let url = lookup(ENV_PROVIDER_URL)
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| ClientError::config(format!("{ENV_PROVIDER_URL} is not set")))?;
        let wallet = lookup(ENV_WALLET)
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| ClientError::config(format!("{ENV_WALLET} is not set")))?;
        Self::new(&url, &wallet)
    }

    pub fn with_commitment(mut self, commitment: Commitment) -> Self {
        self.commitment = commitment;
        self
    }

    pub fn load_keypair(&self) -> ClientResult<Keypair> {
        read_keypair_file(&self.wallet_path).map_err(|e| ClientError::Keypair {
            path: self.wallet_path.clone(),
            reason: e.to_string(),
        })
    }
}

/// Validate a provider configuration.
pub fn validate_config(cfg: &ProviderConfig) -> ClientResult<()> {
    let url = Url::parse(&cfg.url).map_err(|e| ClientError::config(format!("invalid cluster url: {e}")))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ClientError::config("cluster url must be http or https"));
    }

    if cfg.wallet_path.trim().is_empty() {
        return Err(ClientError::config("wallet path must not be empty"));
    }

    Ok(())
}

/// Cluster monikers accepted in place of a URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cluster {
    Localnet,
    Devnet,
    Testnet,
    Mainnet,
    Custom(String),
}

impl Cluster {
    pub fn url(&self) -> &str {
        match self {
            Self::Localnet => "http://127.0.0.1:8899",
            Self::Devnet => "https://api.devnet.solana.com",
            Self::Testnet => "https://api.testnet.solana.com",
            Self::Mainnet => "https://api.mainnet-beta.solana.com",
            Self::Custom(url) => url,
        }
    }
}

impl FromStr for Cluster {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.to_ascii_lowercase().as_str() {
            "l" | "localnet" => Ok(Self::Localnet),
            "d" | "devnet" => Ok(Self::Devnet),
            "t" | "testnet" => Ok(Self::Testnet),
            "m" | "mainnet" | "mainnet-beta" => Ok(Self::Mainnet),
            "" => Err(ClientError::config("cluster must not be empty")),
            _ => Ok(Self::Custom(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Commitment {
    Processed,
    #[default]
    Confirmed,
    Finalized,
}

impl Commitment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Processed => "processed",
            Self::Confirmed => "confirmed",
            Self::Finalized => "finalized",
        }
    }

    pub fn to_config(self) -> CommitmentConfig {
        match self {
            Self::Processed => CommitmentConfig::processed(),
            Self::Confirmed => CommitmentConfig::confirmed(),
            Self::Finalized => CommitmentConfig::finalized(),
        }
    }
}

impl fmt::Display for Commitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Commitment {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "processed" => Ok(Self::Processed),
            "confirmed" => Ok(Self::Confirmed),
            "finalized" => Ok(Self::Finalized),
            other => Err(ClientError::config(format!("unknown commitment: {other}"))),
        }
    }
}
