//! Chain registries: network metadata and MultiSend deployments

mod multisend;
mod networks;

pub use multisend::{legacy_multi_send_address, multi_send_address, MultiSendVersion};
pub use networks::{chain_ids, network_info, NetworkInfo, NETWORKS};

use crate::error::{Error, Result};

/// Parses a network id as stored in configs (`"1"`, `"100"`, or `"0x64"`)
pub fn parse_network(network: &str) -> Result<u64> {
    let trimmed = network.trim();
    let parsed = match trimmed.strip_prefix("0x").or_else(|| trimmed.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => trimmed.parse::<u64>(),
    };
    parsed.map_err(|_| Error::InvalidNetwork(network.to_string()))
}

/// Formats a chain id the way wallets expect it (`0x` prefixed, no padding)
pub fn to_hex_chain_id(chain_id: u64) -> String {
    format!("{chain_id:#x}")
}
