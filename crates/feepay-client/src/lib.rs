//! feepay-client
//!
//! A small, focused Rust client for the fee payment on-chain program.
//!
//! It includes:
//! - the program id and PDA seed constants
//! - state PDA derivation
//! - Anchor-compatible instruction builders and state decoding
//! - provider configuration (cluster + wallet) and an RPC client that signs
//!   and submits transactions

pub mod client;
pub mod config;
pub mod constants;
pub mod error;
pub mod instruction;
pub mod pda;
pub mod state;

mod serde_pubkey;

pub use client::{FeePayClient, InitializeOutcome};
pub use config::{Cluster, Commitment, ProviderConfig};
pub use constants::*;
pub use error::{ClientError, ClientResult};
pub use pda::{derive_state, state_pda, StatePda};
pub use state::ProgramState;
