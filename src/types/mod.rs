//! Type definitions for plugin configs and module transactions

mod address;
mod batch;
mod config;
mod operation;
mod safe_target;
mod serde_helpers;
mod transaction;

pub use address::ConfigAddress;
pub use batch::{Batch, BatchShape, RawBatch};
pub use config::{LegacyConfig, MultiSafeConfig, PluginConfig, RawPluginConfig};
pub use operation::Operation;
pub use safe_target::{ModuleType, RawSafeTarget, SafeTarget};
pub use transaction::{ModuleTransaction, SafeCall};
