//! Top-level plugin configuration

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{ConfigAddress, RawSafeTarget, SafeTarget};

/// A normalized plugin configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginConfig {
    /// Execution targets
    pub safes: Vec<SafeTarget>,
    /// Other top-level keys, kept as-is
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Current config shape: `{ safes: [...] }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiSafeConfig {
    pub safes: Vec<RawSafeTarget>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Original config shape: one Reality module given by `address`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacyConfig {
    pub address: ConfigAddress,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A plugin configuration as stored by a space, in any historical shape
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawPluginConfig {
    Current(MultiSafeConfig),
    Legacy(LegacyConfig),
}

impl RawPluginConfig {
    /// Parses a stored config from JSON text
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl From<PluginConfig> for RawPluginConfig {
    fn from(config: PluginConfig) -> Self {
        RawPluginConfig::Current(MultiSafeConfig {
            safes: config.safes.into_iter().map(RawSafeTarget::from).collect(),
            extra: config.extra,
        })
    }
}
