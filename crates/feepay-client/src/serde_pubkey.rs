//! Serialize public keys as base58 text in JSON output.

use serde::Serializer;
use solana_program::pubkey::Pubkey;

pub fn serialize<S: Serializer>(key: &Pubkey, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(key)
}
