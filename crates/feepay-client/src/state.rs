//! Decoding of the program's global state account.

use borsh::BorshDeserialize;
use serde::Serialize;
use solana_program::pubkey::Pubkey;

use crate::constants::STATE_ACCOUNT_NAME;
use crate::error::{ClientError, ClientResult};
use crate::instruction::{account_discriminator, DISCRIMINATOR_LEN};

/// Discriminator + admin + three u64 counters + bump.
pub const STATE_ACCOUNT_LEN: usize = DISCRIMINATOR_LEN + 32 + 8 + 8 + 8 + 1;

#[derive(Debug, BorshDeserialize)]
struct RawProgramState {
    admin: [u8; 32],
    total_funds: u64,
    total_ads_viewed: u64,
    fee_per_ad: u64,
    bump: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProgramState {
    #[serde(serialize_with = "crate::serde_pubkey::serialize")]
    pub admin: Pubkey,
    pub total_funds: u64,
    pub total_ads_viewed: u64,
    pub fee_per_ad: u64,
    pub bump: u8,
}

impl ProgramState {
    pub fn try_from_account_data(data: &[u8]) -> ClientResult<Self> {
        if data.len() < STATE_ACCOUNT_LEN {
            return Err(ClientError::account_data(format!(
                "expected at least {STATE_ACCOUNT_LEN} bytes, got {}",
                data.len()
            )));
        }

        let (disc, mut body) = data.split_at(DISCRIMINATOR_LEN);
        if disc != account_discriminator(STATE_ACCOUNT_NAME).as_slice() {
            return Err(ClientError::account_data("discriminator mismatch"));
        }

        // deserialize (not try_from_slice): trailing padding is allowed
        let raw = RawProgramState::deserialize(&mut body)
            .map_err(|e| ClientError::account_data(e.to_string()))?;

        Ok(Self {
            admin: Pubkey::new_from_array(raw.admin),
            total_funds: raw.total_funds,
            total_ads_viewed: raw.total_ads_viewed,
            fee_per_ad: raw.fee_per_ad,
            bump: raw.bump,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn encoded(admin: &Pubkey, funds: u64, views: u64, fee: u64, bump: u8) -> Vec<u8> {
        let mut out = account_discriminator(STATE_ACCOUNT_NAME).to_vec();
        out.extend_from_slice(admin.as_ref());
        out.extend_from_slice(&funds.to_le_bytes());
        out.extend_from_slice(&views.to_le_bytes());
        out.extend_from_slice(&fee.to_le_bytes());
        out.push(bump);
        out
    }

    #[test]
    fn decodes_fresh_state() {
        let admin = Pubkey::new_unique();
        let data = encoded(&admin, 0, 0, 5_000, 254);
        assert_eq!(data.len(), STATE_ACCOUNT_LEN);

        let state = ProgramState::try_from_account_data(&data).unwrap();
        assert_eq!(
            state,
            ProgramState { admin, total_funds: 0, total_ads_viewed: 0, fee_per_ad: 5_000, bump: 254 }
        );
    }

    #[test]
    fn tolerates_trailing_bytes() {
        let admin = Pubkey::new_unique();
        let mut data = encoded(&admin, 42, 3, 5_000, 1);
        data.extend_from_slice(&[0u8; 16]);
        let state = ProgramState::try_from_account_data(&data).unwrap();
        assert_eq!(state.total_funds, 42);
        assert_eq!(state.total_ads_viewed, 3);
    }

    #[test]
    fn rejects_foreign_discriminator() {
        let mut data = encoded(&Pubkey::new_unique(), 0, 0, 5_000, 1);
        data[0] ^= 0xff;
        assert_matches!(
            ProgramState::try_from_account_data(&data),
            Err(ClientError::AccountData(msg)) if msg.contains("discriminator")
        );
    }

    #[test]
    fn rejects_short_buffer() {
        let data = encoded(&Pubkey::new_unique(), 0, 0, 5_000, 1);
        assert_matches!(
            ProgramState::try_from_account_data(&data[..40]),
            Err(ClientError::AccountData(_))
        );
    }
}
