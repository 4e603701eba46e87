use anyhow::Result;
use feepay_client::ProgramState;
use serde::Serialize;
use solana_sdk::native_token::LAMPORTS_PER_SOL;

use crate::args::Cli;
use crate::output;
use crate::solana;

#[derive(Debug, Serialize)]
pub struct StateOut {
    pub initialized: bool,
    pub address: String,
    pub state: Option<ProgramState>,
}

pub async fn run(cli: &Cli) -> Result<()> {
    let client = solana::client::connect(cli)?;
    let address = client.state_address().address;

    let state = match client.fetch_state().await {
        Ok(state) => state,
        Err(err) => {
            output::failure("Fetching state failed", &err);
            return Ok(());
        }
    };

    let out = StateOut { initialized: state.is_some(), address: address.to_string(), state };
    output::report(&out, |w| {
        output::field(w, "State PDA", address)?;
        let Some(state) = &out.state else {
            return output::field(w, "Status", "not initialized");
        };
        output::field(w, "Admin", state.admin)?;
        output::field(w, "Total funds", format!("{} lamports ({} SOL)", state.total_funds, sol(state.total_funds)))?;
        output::field(w, "Total ads viewed", state.total_ads_viewed)?;
        output::field(w, "Fee per ad", format!("{} lamports", state.fee_per_ad))?;
        output::field(w, "Bump", state.bump)
    })
}

fn sol(lamports: u64) -> f64 {
    lamports as f64 / LAMPORTS_PER_SOL as f64
}
