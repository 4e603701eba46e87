use anyhow::Result;
use feepay_client::InitializeOutcome;
use serde::Serialize;

use crate::args::Cli;
use crate::output;
use crate::solana;

#[derive(Debug, Serialize)]
pub struct InitializeOut {
    pub ok: bool,
    #[serde(flatten)]
    pub outcome: InitializeOutcome,
}

pub async fn run(cli: &Cli) -> Result<()> {
    let client = solana::client::connect(cli)?;

    let pb = output::spinner("initializing program state");
    let res = client.initialize().await;
    pb.finish_and_clear();

    match res {
        Ok(outcome) => output::report(&InitializeOut { ok: true, outcome: outcome.clone() }, |out| {
            output::headline(out, "Program initialized successfully!")?;
            output::field(out, "Transaction signature", &outcome.signature)?;
            output::field(out, "State PDA", outcome.state)
        }),
        Err(err) => {
            tracing::debug!(error = ?err, "initialize failed");
            output::failure("Initialization failed", &err);
            Ok(())
        }
    }
}
