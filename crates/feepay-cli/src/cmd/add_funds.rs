use anyhow::Result;
use serde::Serialize;

use crate::args::Cli;
use crate::output;
use crate::solana;

#[derive(Debug, Serialize)]
pub struct AddFundsOut {
    pub ok: bool,
    pub signature: String,
    pub lamports: u64,
}

pub async fn run(cli: &Cli, lamports: u64) -> Result<()> {
    let client = solana::client::connect(cli)?;

    let pb = output::spinner("adding funds");
    let res = client.add_funds(lamports).await;
    pb.finish_and_clear();

    match res {
        Ok(sig) => {
            let out = AddFundsOut { ok: true, signature: sig.to_string(), lamports };
            output::report(&out, |w| {
                output::headline(w, "Funds added")?;
                output::field(w, "Lamports", lamports)?;
                output::field(w, "Transaction signature", &out.signature)
            })
        }
        Err(err) => {
            output::failure("Adding funds failed", &err);
            Ok(())
        }
    }
}
