//! Contract ABI definitions and EIP-712 type hashes used by the module

use alloy::primitives::{keccak256, B256};
use alloy::sol;

sol! {
    /// MultiSend interface for batching multiple calls
    #[sol(rpc)]
    interface IMultiSend {
        /// Sends multiple transactions in a single call
        /// @param transactions Packed encoding of transactions:
        ///        operation (1 byte) | to (20 bytes) | value (32 bytes) | data length (32 bytes) | data
        function multiSend(bytes memory transactions) external payable;
    }
}

/// EIP-712 struct type the Reality module hashes proposals with
pub const TRANSACTION_TYPE: &str =
    "Transaction(address to,uint256 value,bytes data,uint8 operation,uint256 nonce)";

/// EIP-712 domain type hash for the module
/// keccak256("EIP712Domain(uint256 chainId,address verifyingContract)")
pub const DOMAIN_SEPARATOR_TYPEHASH: [u8; 32] = [
    0x47, 0xe7, 0x95, 0x34, 0xa2, 0x45, 0x95, 0x2e, 0x8b, 0x16, 0x89, 0x3a, 0x33, 0x6b, 0x85, 0xa3,
    0xd9, 0xea, 0x9f, 0xa8, 0xc5, 0x73, 0xf3, 0xd8, 0x03, 0xaf, 0xb9, 0x2a, 0x79, 0x46, 0x92, 0x18,
];

/// keccak256 of [`TRANSACTION_TYPE`]
pub fn transaction_typehash() -> B256 {
    keccak256(TRANSACTION_TYPE)
}
