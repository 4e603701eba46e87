//! PDA derivation helpers for the fee payment program.
//!
//! The program keeps one global state account at a fixed seed. These helpers
//! must match the `seeds = [b"state"]` constraint on the program side.

use serde::Serialize;
use solana_program::pubkey::Pubkey;

use crate::constants::SEED_STATE;

/// A derived address together with its canonical bump.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatePda {
    #[serde(serialize_with = "crate::serde_pubkey::serialize")]
    pub address: Pubkey,
    pub bump: u8,
}

impl From<(Pubkey, u8)> for StatePda {
    fn from((address, bump): (Pubkey, u8)) -> Self {
        Self { address, bump }
    }
}

/// Derive the global state PDA.
pub fn derive_state(program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[SEED_STATE], program_id)
}

pub fn state_pda(program_id: &Pubkey) -> StatePda {
    derive_state(program_id).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::PROGRAM_ID;
    use proptest::prelude::*;

    fn state_signer_seeds(bump: &[u8; 1]) -> [&[u8]; 2] {
        [SEED_STATE, bump]
    }

    #[test]
    fn state_pda_is_stable_for_program_id() {
        let first = derive_state(&PROGRAM_ID);
        let second = derive_state(&PROGRAM_ID);
        assert_eq!(first, second);
    }

    #[test]
    fn state_pda_is_off_curve() {
        let (pda, _) = derive_state(&PROGRAM_ID);
        assert!(!pda.is_on_curve());
    }

    #[test]
    fn bump_reproduces_address() {
        let (pda, bump) = derive_state(&PROGRAM_ID);
        let bump = [bump];
        let seeds = state_signer_seeds(&bump);
        let recreated = Pubkey::create_program_address(&seeds, &PROGRAM_ID).unwrap();
        assert_eq!(pda, recreated);
    }

    #[test]
    fn different_programs_get_different_state() {
        let other = Pubkey::new_unique();
        assert_ne!(derive_state(&PROGRAM_ID).0, derive_state(&other).0);
    }

    #[test]
    fn json_uses_base58_address() {
        let pda = state_pda(&PROGRAM_ID);
        let v = serde_json::to_value(pda).unwrap();
        assert_eq!(v["address"], pda.address.to_string());
        assert_eq!(v["bump"], pda.bump);
    }

    proptest! {
        #[test]
        fn derivation_is_deterministic(raw in any::<[u8; 32]>()) {
            let program_id = Pubkey::new_from_array(raw);
            let a = state_pda(&program_id);
            let b = state_pda(&program_id);
            prop_assert_eq!(a, b);
            prop_assert!(!a.address.is_on_curve());
        }
    }
}
