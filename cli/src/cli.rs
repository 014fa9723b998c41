use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "safesnap")]
#[command(about = "Inspect and normalize SafeSnap execution configs", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the normalized form of a stored plugin config
    Coerce(ConfigArgs),

    /// Check that every batch of every Safe is complete
    Validate(ConfigArgs),

    /// Print the batch hashes and Safe hash of every Safe
    Hashes(ConfigArgs),

    /// Check whether a contract is deployed at an address
    Contract(ContractArgs),

    /// Resolve a function selector (or call data) to text signatures
    Signature(SignatureArgs),
}

#[derive(Args, Clone)]
pub struct ConfigArgs {
    /// Path to the plugin config JSON file
    #[arg(value_name = "FILE")]
    pub path: String,

    /// Network used for Safes that do not name one (chain id)
    #[arg(long, env = "SAFESNAP_NETWORK", default_value = "1")]
    pub network: String,
}

#[derive(Args, Clone)]
pub struct ContractArgs {
    /// Address to check
    #[arg(value_name = "ADDRESS")]
    pub address: String,

    /// Chain id the address lives on
    #[arg(long, env = "SAFESNAP_NETWORK", default_value = "1")]
    pub network: String,

    /// RPC endpoint URL (defaults to the network's public RPC)
    #[arg(long, env = "ETH_RPC_URL")]
    pub rpc_url: Option<String>,
}

#[derive(Args, Clone)]
pub struct SignatureArgs {
    /// Four-byte selector or full call data
    #[arg(value_name = "SELECTOR|CALLDATA")]
    pub data: String,

    /// Base URL of a 4byte-compatible directory
    #[arg(long, default_value = safesnap::DEFAULT_SIGNATURE_DIRECTORY)]
    pub directory_url: String,
}
