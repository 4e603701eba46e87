//! Error type for the fee payment client.

use solana_client::client_error::ClientError as RpcError;
use thiserror::Error;

pub type ClientResult<T> = Result<T, ClientError>;

#[derive(Debug, Error)]
pub enum ClientError {
    /// Provider configuration is missing or malformed.
    #[error("config: {0}")]
    Config(String),

    /// The signing keypair could not be loaded.
    #[error("keypair {path}: {reason}")]
    Keypair { path: String, reason: String },

    /// Any failure reported by the RPC transport or the cluster,
    /// including program-side rejections. Kept unmodified.
    #[error(transparent)]
    Rpc(#[from] Box<RpcError>),

    #[error("account data: {0}")]
    AccountData(String),

    #[error("invalid pubkey: {0}")]
    InvalidPubkey(String),

    #[error("encode: {0}")]
    Encode(#[from] std::io::Error),
}

impl ClientError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn account_data(msg: impl Into<String>) -> Self {
        Self::AccountData(msg.into())
    }
}

impl From<RpcError> for ClientError {
    fn from(err: RpcError) -> Self {
        Self::Rpc(Box::new(err))
    }
}
