use anyhow::Result;
use feepay_client::{state_pda, StatePda, SEED_STATE};
use serde::Serialize;

use crate::args::Cli;
use crate::output;
use crate::solana;

#[derive(Debug, Serialize)]
pub struct AddressOut {
    pub program_id: String,
    pub seed: String,
    pub state: StatePda,
}

pub fn run(cli: &Cli) -> Result<()> {
    let program_id = solana::client::program_id(cli)?;
    let state = state_pda(&program_id);

    let out = AddressOut {
        program_id: program_id.to_string(),
        seed: String::from_utf8_lossy(SEED_STATE).into_owned(),
        state,
    };
    output::report(&out, |w| {
        output::field(w, "Program ID", &out.program_id)?;
        output::field(w, "State PDA", state.address)?;
        output::field(w, "Bump", state.bump)
    })
}
