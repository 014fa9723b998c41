//! Address and config validators
//!
//! Address format and on-chain code presence are treated as fixed for the
//! life of the process, so both checks are memoized. The caches are unbounded;
//! long-running processes that see many distinct addresses should call
//! [`clear_validation_caches`] periodically.

use std::sync::LazyLock;

use alloy::primitives::Address;
use tracing::debug;

use crate::cache::Memo;
use crate::error::Result;
use crate::provider::CodeReader;
use crate::types::{Batch, PluginConfig, SafeTarget};

static ADDRESS_CACHE: LazyLock<Memo<String, bool>> = LazyLock::new(Memo::new);
static CONTRACT_CACHE: LazyLock<Memo<(u64, Address), bool>> = LazyLock::new(Memo::new);

/// Returns true if `address` is a `0x`-prefixed, well-formed Ethereum address
///
/// Single-case hex is accepted as-is; mixed case must be a valid EIP-55 checksum.
pub fn is_ethereum_address(address: &str) -> bool {
    memoized(&ADDRESS_CACHE, address, check_address)
}

fn memoized(
    cache: &Memo<String, bool>,
    address: &str,
    check: impl FnOnce(&str) -> bool,
) -> bool {
    cache.get_or_insert_with(address.to_string(), || check(address))
}

fn check_address(address: &str) -> bool {
    let Some(hex) = address.strip_prefix("0x") else {
        return false;
    };
    if hex.len() != 40 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return false;
    }

    let has_lower = hex.bytes().any(|b| b.is_ascii_lowercase());
    let has_upper = hex.bytes().any(|b| b.is_ascii_uppercase());
    if !(has_lower && has_upper) {
        return true;
    }

    Address::parse_checksummed(address, None).is_ok()
}

/// Returns true if a contract is deployed at `address` on `network`
///
/// Code consisting only of zero bytes counts as no code. Successful answers
/// are cached per `(network, address)`; reader errors are returned and not
/// cached.
pub async fn is_ethereum_contract_address<R: CodeReader>(
    reader: &R,
    network: u64,
    address: Address,
) -> Result<bool> {
    let key = (network, address);
    if let Some(cached) = CONTRACT_CACHE.get(&key) {
        return Ok(cached);
    }

    let code = reader.code_at(address).await?;
    let is_contract = code.iter().any(|&b| b != 0);
    debug!(network, %address, code_len = code.len(), is_contract, "checked contract code");

    CONTRACT_CACHE.insert(key, is_contract);
    Ok(is_contract)
}

/// Drops every memoized address and contract check
pub fn clear_validation_caches() {
    ADDRESS_CACHE.clear();
    CONTRACT_CACHE.clear();
}

/// Returns true if the safe has no batches, or every transaction in every batch is present
pub fn validate_safe_data(safe: &SafeTarget) -> bool {
    safe.txs.is_empty() || safe.txs.iter().all(Batch::is_complete)
}

/// Returns true if every safe of the config passes [`validate_safe_data`]
pub fn is_valid_input(config: &PluginConfig) -> bool {
    config.safes.iter().all(validate_safe_data)
}
