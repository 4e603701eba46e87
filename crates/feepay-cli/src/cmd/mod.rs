use anyhow::Result;

use crate::args::{Cli, Command};

mod add_funds;
mod address;
mod doctor;
mod initialize;
mod state;
mod stats;

pub async fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Initialize => initialize::run(&cli).await,
        Command::Address => address::run(&cli),
        Command::State => state::run(&cli).await,
        Command::AddFunds { lamports } => add_funds::run(&cli, lamports).await,
        Command::Stats => stats::run(&cli).await,
        Command::Doctor => doctor::run(&cli).await,
    }
}
