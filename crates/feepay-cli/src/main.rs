use anyhow::Result;
use clap::Parser;

mod args;
mod cmd;
mod logging;
mod output;
mod solana;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = args::Cli::parse();
    logging::init(cli.verbose);
    output::init(cli.json);

    cmd::dispatch(cli).await
}
