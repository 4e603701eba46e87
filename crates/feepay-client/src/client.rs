//! RPC client for the fee payment program.
//!
//! Wraps the nonblocking Solana RPC client together with the signing wallet
//! and the program id. Each operation sends exactly one transaction; there is
//! no retry and no backoff, and errors from the cluster are returned as-is.

use serde::Serialize;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_program::instruction::Instruction;
use solana_program::pubkey::Pubkey;
use solana_sdk::signature::{Keypair, Signature, Signer};
use solana_sdk::transaction::Transaction;
use tracing::{debug, info};

use crate::config::ProviderConfig;
use crate::error::ClientResult;
use crate::instruction;
use crate::pda::{self, StatePda};
use crate::state::ProgramState;

/// Result of a successful `initialize` call.
#[derive(Debug, Clone, Serialize)]
pub struct InitializeOutcome {
    pub signature: String,
    #[serde(serialize_with = "crate::serde_pubkey::serialize")]
    pub state: Pubkey,
    pub bump: u8,
    #[serde(serialize_with = "crate::serde_pubkey::serialize")]
    pub admin: Pubkey,
}

pub struct FeePayClient {
    program_id: Pubkey,
    rpc: RpcClient,
    payer: Keypair,
    config: ProviderConfig,
}

impl FeePayClient {
    /// Load the wallet named by `config` and connect lazily to its cluster.
    pub fn new(program_id: Pubkey, config: ProviderConfig) -> ClientResult<Self> {
        let payer = config.load_keypair()?;
        Ok(Self::with_payer(program_id, config, payer))
    }

    pub fn with_payer(program_id: Pubkey, config: ProviderConfig, payer: Keypair) -> Self {
        let rpc = RpcClient::new_with_commitment(config.url.clone(), config.commitment.to_config());
        Self::with_rpc(program_id, config, payer, rpc)
    }

    /// Use an already-built RPC client (e.g. a mock sender in tests).
    pub fn with_rpc(program_id: Pubkey, config: ProviderConfig, payer: Keypair, rpc: RpcClient) -> Self {
        Self { program_id, rpc, payer, config }
    }

    /// Public key of the signing wallet. Doubles as the admin identity.
    pub fn admin(&self) -> Pubkey {
        self.payer.pubkey()
    }

    pub fn state_address(&self) -> StatePda {
        pda::state_pda(&self.program_id)
    }

    /// Submit the `initialize` transaction with the wallet as admin.
    pub async fn initialize(&self) -> ClientResult<InitializeOutcome> {
        let admin = self.admin();
        let state = self.state_address();
        debug!(program_id = %self.program_id, state = %state.address, bump = state.bump, "derived state pda");

        let ix = instruction::initialize(&self.program_id, &admin)?;
        let signature = self.send(&[ix]).await?;
        info!(%signature, state = %state.address, "initialize confirmed");

        Ok(InitializeOutcome {
            signature: signature.to_string(),
            state: state.address,
            bump: state.bump,
            admin,
        })
    }

    /// Transfer `amount` lamports from the admin wallet into the state account.
    pub async fn add_funds(&self, amount: u64) -> ClientResult<Signature> {
        let ix = instruction::add_funds(&self.program_id, &self.admin(), amount)?;
        let signature = self.send(&[ix]).await?;
        info!(%signature, amount, "add_funds confirmed");
        Ok(signature)
    }

    /// Ask the program to log its statistics.
    pub async fn get_stats(&self) -> ClientResult<Signature> {
        let ix = instruction::get_stats(&self.program_id);
        let signature = self.send(&[ix]).await?;
        info!(%signature, "get_stats confirmed");
        Ok(signature)
    }

    /// Fetch and decode the state account. `None` until the program has
    /// created it; lamports sent to the bare PDA leave a system-owned empty
    /// account there, which also counts as not initialized.
    pub async fn fetch_state(&self) -> ClientResult<Option<ProgramState>> {
        let address = self.state_address().address;
        let resp = self
            .rpc
            .get_account_with_commitment(&address, self.config.commitment.to_config())
            .await?;

        let Some(account) = resp.value else {
            return Ok(None);
        };
        debug!(owner = %account.owner, len = account.data.len(), "state account fetched");
        if account.owner != self.program_id || account.data.is_empty() {
            return Ok(None);
        }
        ProgramState::try_from_account_data(&account.data).map(Some)
    }

    /// Wallet balance in lamports.
    pub async fn balance(&self) -> ClientResult<u64> {
        Ok(self.rpc.get_balance(&self.admin()).await?)
    }

    async fn send(&self, ixs: &[Instruction]) -> ClientResult<Signature> {
        let blockhash = self.rpc.get_latest_blockhash().await?;
        let tx = Transaction::new_signed_with_payer(ixs, Some(&self.admin()), &[&self.payer], blockhash);
        debug!(%blockhash, instructions = ixs.len(), "sending transaction");
        Ok(self.rpc.send_and_confirm_transaction(&tx).await?)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use base64::Engine;
    use serde_json::{json, Value};
    use solana_client::rpc_request::RpcRequest;

    use super::*;
    use crate::constants::{PROGRAM_ID, STATE_ACCOUNT_NAME};
    use crate::instruction::account_discriminator;

    fn mocked_client(account: Value) -> FeePayClient {
        let mut mocks = HashMap::new();
        mocks.insert(
            RpcRequest::GetAccountInfo,
            json!({ "context": { "slot": 1 }, "value": account }),
        );
        let rpc = RpcClient::new_mock_with_mocks("succeeds".to_string(), mocks);
        let cfg = ProviderConfig::new("localnet", "/unused/id.json").unwrap();
        FeePayClient::with_rpc(PROGRAM_ID, cfg, Keypair::new(), rpc)
    }

    fn ui_account(owner: &Pubkey, data: &[u8]) -> Value {
        json!({
            "lamports": 1_000_000u64,
            "data": [base64::engine::general_purpose::STANDARD.encode(data), "base64"],
            "owner": owner.to_string(),
            "executable": false,
            "rentEpoch": 0,
            "space": data.len(),
        })
    }

    fn offline_client() -> FeePayClient {
        // Port 1 is never a validator; nothing here touches the network.
        let cfg = ProviderConfig::new("http://127.0.0.1:1", "/unused/id.json").unwrap();
        FeePayClient::with_payer(PROGRAM_ID, cfg, Keypair::new())
    }

    #[test]
    fn admin_is_wallet_pubkey() {
        let kp = Keypair::new();
        let expected = kp.pubkey();
        let cfg = ProviderConfig::new("localnet", "/unused/id.json").unwrap();
        let client = FeePayClient::with_payer(PROGRAM_ID, cfg, kp);
        assert_eq!(client.admin(), expected);
    }

    #[test]
    fn state_address_matches_pda_helper() {
        let client = offline_client();
        assert_eq!(client.state_address(), pda::state_pda(&PROGRAM_ID));
    }

    #[tokio::test]
    async fn missing_state_account_is_not_initialized() {
        let client = mocked_client(Value::Null);
        assert_eq!(client.fetch_state().await.unwrap(), None);
    }

    #[tokio::test]
    async fn prefunded_system_account_is_not_initialized() {
        let client = mocked_client(ui_account(&solana_sdk::system_program::id(), &[]));
        assert_eq!(client.fetch_state().await.unwrap(), None);
    }

    #[tokio::test]
    async fn program_owned_state_is_decoded() {
        let admin = Pubkey::new_unique();
        let mut data = account_discriminator(STATE_ACCOUNT_NAME).to_vec();
        data.extend_from_slice(admin.as_ref());
        data.extend_from_slice(&7u64.to_le_bytes());
        data.extend_from_slice(&2u64.to_le_bytes());
        data.extend_from_slice(&5_000u64.to_le_bytes());
        data.push(253);

        let client = mocked_client(ui_account(&PROGRAM_ID, &data));
        let state = client.fetch_state().await.unwrap().expect("decoded state");
        assert_eq!(state.admin, admin);
        assert_eq!(state.total_funds, 7);
        assert_eq!(state.total_ads_viewed, 2);
        assert_eq!(state.fee_per_ad, 5_000);
        assert_eq!(state.bump, 253);
    }

    #[tokio::test]
    async fn unreachable_cluster_surfaces_rpc_error() {
        let client = offline_client();
        let err = client.initialize().await.unwrap_err();
        assert!(matches!(err, crate::error::ClientError::Rpc(_)), "unexpected error: {err}");
    }
}
