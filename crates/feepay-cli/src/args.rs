use clap::{Parser, Subcommand};

#[derive(Parser, Debug, Clone)]
#[command(name = "feepay", version, about = "Fee payment program CLI")]
pub struct Cli {
    /// Emit JSON output on stdout.
    #[arg(long, global = true)]
    pub json: bool,

    /// Log at debug level (RUST_LOG takes precedence).
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Cluster URL or moniker (localnet|devnet|testnet|mainnet).
    /// Falls back to ANCHOR_PROVIDER_URL.
    #[arg(long, short = 'u', global = true)]
    pub url: Option<String>,

    /// Path to the signing keypair. Falls back to ANCHOR_WALLET.
    #[arg(long, global = true)]
    pub wallet: Option<String>,

    /// Program id override (base58).
    #[arg(long, global = true, env = "FEEPAY_PROGRAM_ID")]
    pub program_id: Option<String>,

    /// processed|confirmed|finalized
    #[arg(long, global = true, env = "FEEPAY_COMMITMENT", default_value = "confirmed")]
    pub commitment: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Initialize the program state with the wallet as admin.
    Initialize,

    /// Print the program id and derived state address (offline).
    Address,

    /// Fetch and decode the on-chain program state.
    State,

    /// Move lamports from the admin wallet into the program state account.
    AddFunds {
        /// Amount in lamports. Passed through as given; the program decides
        /// what it accepts.
        lamports: u64,
    },

    /// Invoke the program's get_stats instruction.
    Stats,

    /// Run environment checks.
    Doctor,
}
