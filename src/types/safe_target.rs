//! Execution targets: a Safe reached through a governance module

use alloy::primitives::B256;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::serde_helpers::lenient;
use super::{Batch, ConfigAddress, RawBatch};

/// Kind of module the Safe executes proposals through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleType {
    /// Reality.eth oracle module
    #[default]
    Reality,
    /// UMA optimistic governor
    Uma,
}

/// A normalized execution target
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SafeTarget {
    /// Network id the Safe lives on; the plugin default applies when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network: Option<String>,
    /// Module the proposal executes through
    #[serde(default)]
    pub module_address: Option<ConfigAddress>,
    /// Module kind
    #[serde(default)]
    pub module_type: ModuleType,
    /// MultiSend contract used to aggregate new batches
    #[serde(default)]
    pub multi_send_address: Option<ConfigAddress>,
    /// Batches in nonce order
    #[serde(default)]
    pub txs: Vec<Batch>,
    /// Aggregate hash over all batch hashes
    #[serde(default, deserialize_with = "lenient::option")]
    pub hash: Option<B256>,
    /// Other keys, kept as-is
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SafeTarget {
    /// Returns the network this Safe should be resolved against
    pub fn network_or<'a>(&'a self, default_network: &'a str) -> &'a str {
        self.network.as_deref().unwrap_or(default_network)
    }
}

/// An execution target as found in a stored config
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSafeTarget {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network: Option<String>,
    /// Pre-dates `moduleAddress`; always a Reality module
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reality_address: Option<ConfigAddress>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module_address: Option<ConfigAddress>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module_type: Option<ModuleType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multi_send_address: Option<ConfigAddress>,
    #[serde(default)]
    pub txs: Vec<RawBatch>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::option"
    )]
    pub hash: Option<B256>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl From<SafeTarget> for RawSafeTarget {
    fn from(safe: SafeTarget) -> Self {
        Self {
            network: safe.network,
            reality_address: None,
            module_address: safe.module_address,
            module_type: Some(safe.module_type),
            multi_send_address: safe.multi_send_address,
            txs: safe.txs.into_iter().map(RawBatch::from).collect(),
            hash: safe.hash,
            extra: safe.extra,
        }
    }
}
