//! # safesnap
//!
//! Execution-config handling for SafeSnap governance proposals.
//!
//! A proposal carries, per Safe, ordered batches of module transactions that
//! are executed through a Reality (or UMA) module once the vote passes. This
//! crate normalizes stored configs, hashes batches the way the module does,
//! validates addresses and contracts, and keeps an injected wallet on the
//! Safe's network.
//!
//! ## Features
//!
//! - Coercion of every historical config shape into [`PluginConfig`]
//! - EIP-712 module transaction hashing and MultiSend aggregation
//! - Memoized address and contract validators
//! - Network reconciliation for injected wallets
//! - 4byte function-signature lookup
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use safesnap::{coerce_config, is_valid_input, RawPluginConfig};
//!
//! let raw = RawPluginConfig::from_json(&stored_json)?;
//! let config = coerce_config(raw, "1");
//!
//! if is_valid_input(&config) {
//!     for safe in &config.safes {
//!         println!("{:?}: {:?}", safe.module_address, safe.hash);
//!     }
//! }
//! ```
//!
//! ## Network switching
//!
//! ```rust,ignore
//! use safesnap::{ensure_right_network, NetworkSwitchOptions, WalletCapability};
//!
//! let wallet = WalletCapability::SwitchCapable(injected);
//! ensure_right_network(&wallet, 100, &NetworkSwitchOptions::default()).await?;
//! ```

pub mod cache;
pub mod chain;
pub mod coerce;
pub mod contracts;
pub mod encoding;
pub mod error;
pub mod hashing;
pub mod provider;
pub mod signatures;
pub mod types;
pub mod validation;
pub mod wallet;

// Re-export main types at crate root
pub use chain::{
    legacy_multi_send_address, multi_send_address, network_info, parse_network, MultiSendVersion,
    NetworkInfo,
};
pub use coerce::{coerce_config, coerce_config_with};
pub use contracts::IMultiSend;
pub use encoding::{build_multisend_transaction, Eip712TxHasher, TransactionHasher};
pub use error::{Error, Result};
pub use hashing::{create_batch, format_batch_transaction, get_batch_hash, get_safe_hash};
pub use provider::{CodeReader, RpcCodeReader};
pub use signatures::{selector_of, SignatureDirectory, DEFAULT_SIGNATURE_DIRECTORY};
pub use types::{
    Batch, BatchShape, ConfigAddress, ModuleTransaction, ModuleType, Operation, PluginConfig,
    RawBatch, RawPluginConfig, RawSafeTarget, SafeCall, SafeTarget,
};
pub use validation::{
    clear_validation_caches, is_ethereum_address, is_ethereum_contract_address, is_valid_input,
    validate_safe_data,
};
pub use wallet::{
    ensure_right_network, NetworkSwitchOptions, WalletCapability, WalletProvider,
    UNRECOGNIZED_CHAIN_CODE,
};

// Re-export alloy types that are commonly used
pub use alloy::primitives::{Address, Bytes, B256, U256};
