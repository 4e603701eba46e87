use anyhow::Result;
use serde::Serialize;

use crate::args::Cli;
use crate::output;
use crate::solana;

#[derive(Debug, Serialize)]
pub struct StatsOut {
    pub ok: bool,
    pub signature: String,
}

/// The program only logs its counters; the decoded account is read by
/// `feepay state`.
pub async fn run(cli: &Cli) -> Result<()> {
    let client = solana::client::connect(cli)?;

    let pb = output::spinner("requesting stats");
    let res = client.get_stats().await;
    pb.finish_and_clear();

    match res {
        Ok(sig) => {
            let out = StatsOut { ok: true, signature: sig.to_string() };
            output::report(&out, |w| {
                output::headline(w, "Stats logged by program")?;
                output::field(w, "Transaction signature", &out.signature)
            })
        }
        Err(err) => {
            output::failure("Stats request failed", &err);
            Ok(())
        }
    }
}
