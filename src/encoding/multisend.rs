//! MultiSend transaction encoding
//!
//! The MultiSend contract expects transactions to be encoded in a packed format:
//! - operation: 1 byte (0 = Call, 1 = DelegateCall)
//! - to: 20 bytes
//! - value: 32 bytes
//! - data length: 32 bytes
//! - data: variable length

use alloy::primitives::{Address, Bytes, U256};
use alloy::sol_types::SolCall;
use serde_json::Map;

use crate::contracts::IMultiSend;
use crate::types::{ModuleTransaction, Operation, SafeCall};

/// Encodes a single transaction for MultiSend packed format
///
/// Format: operation (1 byte) | to (20 bytes) | value (32 bytes) | data length (32 bytes) | data
pub fn encode_transaction(call: &impl SafeCall) -> Vec<u8> {
    let data = call.data();
    let data_len = data.len();

    let mut encoded = Vec::with_capacity(85 + data_len);

    encoded.push(call.operation().as_u8());
    encoded.extend_from_slice(call.to().as_slice());
    encoded.extend_from_slice(&call.value().to_be_bytes::<32>());
    encoded.extend_from_slice(&U256::from(data_len).to_be_bytes::<32>());
    encoded.extend_from_slice(&data);

    encoded
}

/// Encodes multiple transactions for MultiSend
pub fn encode_multisend_data(calls: &[impl SafeCall]) -> Bytes {
    let mut encoded = Vec::new();

    for call in calls {
        encoded.extend(encode_transaction(call));
    }

    Bytes::from(encoded)
}

/// Builds the single transaction that executes `transactions` through MultiSend
///
/// The aggregate delegate-calls the MultiSend contract with zero value so each
/// inner call runs in the Safe's context.
pub fn build_multisend_transaction(
    transactions: &[ModuleTransaction],
    nonce: u64,
    multi_send: Address,
) -> ModuleTransaction {
    let data = IMultiSend::multiSendCall {
        transactions: encode_multisend_data(transactions),
    }
    .abi_encode();

    ModuleTransaction {
        to: multi_send,
        value: U256::ZERO,
        data: data.into(),
        operation: Operation::DelegateCall,
        nonce: Some(nonce),
        extra: Map::new(),
    }
}
