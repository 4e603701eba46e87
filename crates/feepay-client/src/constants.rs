//! Constants shared between the on-chain program and clients.
//!
//! Keep these stable because they affect PDA derivation and instruction
//! encoding.

use std::str::FromStr;

use solana_program::pubkey;
use solana_program::pubkey::Pubkey;

use crate::error::{ClientError, ClientResult};

/// Deployed program id of the fee payment program.
pub const PROGRAM_ID: Pubkey = pubkey!("368SCgsps98BfdQfgcZvmhexXXijABFWZVj5PDjUWtyi");

/// PDA seed for the global program state account.
pub const SEED_STATE: &[u8] = b"state";

/// Fee per ad (lamports) the program writes into state on initialize.
pub const DEFAULT_FEE_PER_AD: u64 = 5_000;

/// Instruction names as exposed by the program. These feed the Anchor
/// discriminator preimage `global:<name>`.
pub mod ix_names {
    pub const INITIALIZE: &str = "initialize";
    pub const ADD_FUNDS: &str = "add_funds";
    pub const GET_STATS: &str = "get_stats";
}

/// Account type name used for the state discriminator preimage.
pub const STATE_ACCOUNT_NAME: &str = "ProgramState";

pub fn default_program_id() -> Pubkey {
    PROGRAM_ID
}

/// Parse a base58 program id, falling back to [`PROGRAM_ID`] when absent.
pub fn program_id_or_default(input: Option<&str>) -> ClientResult<Pubkey> {
    match input.map(str::trim) {
        None | Some("") => Ok(default_program_id()),
        Some(s) => Pubkey::from_str(s).map_err(|e| ClientError::InvalidPubkey(format!("{s}: {e}"))),
    }
}

/// Version string reported by the CLI and doctor output.
pub const CLIENT_VERSION: &str = "v1";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn program_id_override() {
        assert_eq!(program_id_or_default(None).unwrap(), PROGRAM_ID);
        assert_eq!(program_id_or_default(Some("  ")).unwrap(), PROGRAM_ID);

        let other = Pubkey::new_unique();
        assert_eq!(program_id_or_default(Some(&other.to_string())).unwrap(), other);
        assert!(program_id_or_default(Some("not-base58!")).is_err());
    }

    #[test]
    fn program_id_text_is_stable() {
        assert_eq!(PROGRAM_ID.to_string(), "368SCgsps98BfdQfgcZvmhexXXijABFWZVj5PDjUWtyi");
    }
}
