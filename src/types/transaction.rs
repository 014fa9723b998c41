//! Transaction types executed through a module

use alloy::primitives::{Address, Bytes, U256};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::serde_helpers::{opt_u64_decimal, u256_decimal};
use super::Operation;

/// Trait for types that can be encoded as a Safe call
pub trait SafeCall {
    /// Returns the target address
    fn to(&self) -> Address;

    /// Returns the value to send (in wei)
    fn value(&self) -> U256;

    /// Returns the calldata
    fn data(&self) -> Bytes;

    /// Returns the operation type (Call or DelegateCall)
    fn operation(&self) -> Operation;
}

/// A single call proposed for execution by the module
///
/// Keys the plugin UI attaches for display (`type`, `abi`, `recipient`, ...)
/// are kept in `extra` and written back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleTransaction {
    /// Target address
    pub to: Address,
    /// Value to send
    #[serde(default, with = "u256_decimal")]
    pub value: U256,
    /// Calldata
    #[serde(default)]
    pub data: Bytes,
    /// Operation type
    #[serde(default)]
    pub operation: Operation,
    /// Module nonce, assigned per batch
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "opt_u64_decimal"
    )]
    pub nonce: Option<u64>,
    /// UI metadata
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ModuleTransaction {
    /// Creates a new call with the given parameters
    pub fn new(to: Address, value: U256, data: impl Into<Bytes>) -> Self {
        Self {
            to,
            value,
            data: data.into(),
            operation: Operation::Call,
            nonce: None,
            extra: Map::new(),
        }
    }

    /// Creates a new call with zero value
    pub fn call(to: Address, data: impl Into<Bytes>) -> Self {
        Self::new(to, U256::ZERO, data)
    }

    /// Creates a new delegate call
    pub fn delegate_call(to: Address, data: impl Into<Bytes>) -> Self {
        Self::call(to, data).with_operation(Operation::DelegateCall)
    }

    /// Sets the operation type
    pub fn with_operation(mut self, operation: Operation) -> Self {
        self.operation = operation;
        self
    }

    /// Sets the nonce
    pub fn with_nonce(mut self, nonce: u64) -> Self {
        self.nonce = Some(nonce);
        self
    }
}

impl SafeCall for ModuleTransaction {
    fn to(&self) -> Address {
        self.to
    }

    fn value(&self) -> U256 {
        self.value
    }

    fn data(&self) -> Bytes {
        self.data.clone()
    }

    fn operation(&self) -> Operation {
        self.operation
    }
}
