//! Instruction builders for the fee payment program.
//!
//! Wire format is Anchor's: an 8-byte discriminator taken from
//! `sha256("global:<name>")`, followed by the Borsh-encoded argument struct.
//! Account order must match the program's `#[derive(Accounts)]` structs.

use borsh::BorshSerialize;
use sha2::{Digest, Sha256};
use solana_program::instruction::{AccountMeta, Instruction};
use solana_program::pubkey::Pubkey;
use solana_sdk::system_program;

use crate::constants::ix_names;
use crate::error::ClientResult;
use crate::pda;

pub const DISCRIMINATOR_LEN: usize = 8;

/// Anchor instruction discriminator for `name`.
pub fn instruction_discriminator(name: &str) -> [u8; DISCRIMINATOR_LEN] {
    discriminator("global", name)
}

/// Anchor account discriminator for the account type `name`.
pub fn account_discriminator(name: &str) -> [u8; DISCRIMINATOR_LEN] {
    discriminator("account", name)
}

fn discriminator(namespace: &str, name: &str) -> [u8; DISCRIMINATOR_LEN] {
    let hash = Sha256::digest(format!("{namespace}:{name}").as_bytes());
    let mut out = [0u8; DISCRIMINATOR_LEN];
    out.copy_from_slice(&hash[..DISCRIMINATOR_LEN]);
    out
}

#[derive(Debug, BorshSerialize)]
struct InitializeArgs {
    admin: [u8; 32],
}

#[derive(Debug, BorshSerialize)]
struct AddFundsArgs {
    amount: u64,
}

fn encode<T: BorshSerialize>(name: &str, args: &T) -> ClientResult<Vec<u8>> {
    let mut data = instruction_discriminator(name).to_vec();
    args.serialize(&mut data)?;
    Ok(data)
}

/// Build the `initialize(admin)` instruction.
///
/// Accounts: state PDA (writable, created by the program), admin (payer,
/// signer), system program.
pub fn initialize(program_id: &Pubkey, admin: &Pubkey) -> ClientResult<Instruction> {
    let (state, _bump) = pda::derive_state(program_id);
    let data = encode(ix_names::INITIALIZE, &InitializeArgs { admin: admin.to_bytes() })?;

    Ok(Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new(state, false),
            AccountMeta::new(*admin, true),
            AccountMeta::new_readonly(system_program::id(), false),
        ],
        data,
    })
}

/// Build the `add_funds(amount)` instruction. Only the admin recorded in
/// state may call it.
pub fn add_funds(program_id: &Pubkey, admin: &Pubkey, amount: u64) -> ClientResult<Instruction> {
    let (state, _bump) = pda::derive_state(program_id);
    let data = encode(ix_names::ADD_FUNDS, &AddFundsArgs { amount })?;

    Ok(Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new(state, false),
            AccountMeta::new(*admin, true),
            AccountMeta::new_readonly(system_program::id(), false),
        ],
        data,
    })
}

/// Build the `get_stats()` instruction. The program reports through its log.
pub fn get_stats(program_id: &Pubkey) -> Instruction {
    let (state, _bump) = pda::derive_state(program_id);

    Instruction {
        program_id: *program_id,
        accounts: vec![AccountMeta::new_readonly(state, false)],
        data: instruction_discriminator(ix_names::GET_STATS).to_vec(),
    }
}
