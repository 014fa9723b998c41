use alloy::primitives::Address;
use color_eyre::eyre::{eyre, Result};
use safesnap::{is_ethereum_address, is_ethereum_contract_address, parse_network, RpcCodeReader};
use tracing::debug;

use crate::cli::ContractArgs;
use crate::output::ContractOutput;

pub async fn run(args: ContractArgs, json: bool) -> Result<()> {
    if !is_ethereum_address(&args.address) {
        return Err(eyre!("Invalid address: {}", args.address));
    }
    let address: Address = args.address.parse()?;
    let network = parse_network(&args.network)?;

    debug!(network, %address, rpc_url = ?args.rpc_url, "checking contract code");
    let reader = match &args.rpc_url {
        Some(rpc_url) => RpcCodeReader::connect(rpc_url)?,
        None => RpcCodeReader::for_network(network)?,
    };

    let is_contract = is_ethereum_contract_address(&reader, network, address).await?;

    let output = ContractOutput {
        address,
        network,
        is_contract,
    };
    output.print(json);

    Ok(())
}
