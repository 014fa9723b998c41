//! Config coercion: converges every historical config shape to [`PluginConfig`]
//!
//! Configs are versioned by shape rather than by tag. Three shapes exist:
//! the original single-address config, multi-safe configs whose batches are
//! bare arrays, and wrapped batches written before `mainTransaction` was
//! stored. Coercion is idempotent: batches that already carry a main
//! transaction are passed through and existing hashes are never recomputed.

use alloy::primitives::Address;
use tracing::{debug, warn};

use crate::chain::{legacy_multi_send_address, multi_send_address, parse_network};
use crate::encoding::{Eip712TxHasher, TransactionHasher};
use crate::hashing::{create_batch, format_batch_transaction, get_safe_hash};
use crate::types::{
    Batch, BatchShape, ConfigAddress, LegacyConfig, ModuleType, MultiSafeConfig, PluginConfig,
    RawPluginConfig, RawSafeTarget, SafeTarget,
};

/// Normalizes a stored config using Reality module hashing
pub fn coerce_config(config: RawPluginConfig, default_network: &str) -> PluginConfig {
    coerce_config_with(&Eip712TxHasher, config, default_network)
}

/// Normalizes a stored config with a custom transaction hasher
pub fn coerce_config_with<H: TransactionHasher + ?Sized>(
    hasher: &H,
    config: RawPluginConfig,
    default_network: &str,
) -> PluginConfig {
    match config {
        RawPluginConfig::Legacy(legacy) => coerce_legacy(legacy, default_network),
        RawPluginConfig::Current(MultiSafeConfig { safes, extra }) => PluginConfig {
            safes: safes
                .into_iter()
                .map(|safe| coerce_safe(hasher, safe, default_network))
                .collect(),
            extra,
        },
    }
}

fn coerce_legacy(legacy: LegacyConfig, default_network: &str) -> PluginConfig {
    let multi_send_address = parse_network(default_network)
        .ok()
        .and_then(legacy_multi_send_address)
        .map(ConfigAddress::from);

    debug!(
        network = default_network,
        module = %legacy.address,
        "migrating single-address config"
    );

    PluginConfig {
        safes: vec![SafeTarget {
            network: Some(default_network.to_string()),
            module_address: Some(legacy.address),
            module_type: ModuleType::Reality,
            multi_send_address,
            txs: Vec::new(),
            hash: None,
            extra: Default::default(),
        }],
        extra: legacy.extra,
    }
}

fn coerce_safe<H: TransactionHasher + ?Sized>(
    hasher: &H,
    safe: RawSafeTarget,
    default_network: &str,
) -> SafeTarget {
    let RawSafeTarget {
        network,
        reality_address,
        module_address,
        module_type,
        multi_send_address: configured_multi_send,
        txs,
        hash,
        extra,
    } = safe;

    let (module_address, module_type) = match reality_address.filter(|a| !a.is_blank()) {
        Some(reality) => (Some(reality), ModuleType::Reality),
        None => (module_address, module_type.unwrap_or_default()),
    };

    let effective_network = network.as_deref().unwrap_or(default_network);
    let chain_id = parse_network(effective_network).ok();

    let configured_multi_send = configured_multi_send.filter(|a| !a.is_blank());
    // Historical batches must be re-derived against the deployment they were signed with.
    let legacy_multi_send = match &configured_multi_send {
        Some(configured) => usable_multi_send(configured),
        None => chain_id.and_then(legacy_multi_send_address),
    };
    let multi_send = configured_multi_send.or_else(|| {
        chain_id
            .and_then(|id| multi_send_address(id, None))
            .map(ConfigAddress::from)
    });

    let txs: Vec<Batch> = txs
        .into_iter()
        .enumerate()
        .map(|(index, raw)| match BatchShape::from(raw) {
            BatchShape::Legacy(transactions) => create_batch(
                hasher,
                module_address.as_ref(),
                effective_network,
                index as u64,
                transactions,
                legacy_multi_send,
            ),
            BatchShape::Unformatted(mut batch) => {
                batch.main_transaction =
                    format_batch_transaction(&batch.transactions, batch.nonce, legacy_multi_send);
                batch
            }
            BatchShape::Formatted(batch) => batch,
        })
        .collect();

    let hash = hash.or_else(|| get_safe_hash(&txs));

    debug!(
        network = effective_network,
        module = ?module_address.as_ref().map(ToString::to_string),
        batches = txs.len(),
        hashed = hash.is_some(),
        "coerced safe"
    );

    SafeTarget {
        network,
        module_address,
        module_type,
        multi_send_address: multi_send,
        txs,
        hash,
        extra,
    }
}

fn usable_multi_send(configured: &ConfigAddress) -> Option<Address> {
    match configured.address() {
        Ok(address) => Some(address),
        Err(err) => {
            warn!(error = %err, "configured MultiSend address is unusable");
            None
        }
    }
}
