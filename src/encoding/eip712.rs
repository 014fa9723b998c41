//! EIP-712 hashing of module transactions
//!
//! The Reality module identifies a proposed transaction by the EIP-712 hash of
//! `Transaction(address to,uint256 value,bytes data,uint8 operation,uint256 nonce)`
//! under the domain `{ chainId, verifyingContract: module }`.

use alloy::primitives::{keccak256, Address, B256, U256};

use crate::contracts::{transaction_typehash, DOMAIN_SEPARATOR_TYPEHASH};
use crate::error::{Error, Result};
use crate::types::ModuleTransaction;

/// Computes one hash per transaction for a module on a chain
///
/// The default implementation is [`Eip712TxHasher`]; other module kinds can
/// plug in their own scheme.
pub trait TransactionHasher {
    fn transaction_hashes(
        &self,
        chain_id: u64,
        module: Address,
        transactions: &[ModuleTransaction],
    ) -> Result<Vec<B256>>;
}

/// Reality module transaction hashing
#[derive(Debug, Clone, Copy, Default)]
pub struct Eip712TxHasher;

impl TransactionHasher for Eip712TxHasher {
    fn transaction_hashes(
        &self,
        chain_id: u64,
        module: Address,
        transactions: &[ModuleTransaction],
    ) -> Result<Vec<B256>> {
        transactions
            .iter()
            .map(|tx| compute_module_transaction_hash(chain_id, module, tx))
            .collect()
    }
}

/// Computes the domain separator for a module
///
/// domain_separator = keccak256(abi.encode(DOMAIN_SEPARATOR_TYPEHASH, chainId, module))
pub fn compute_domain_separator(chain_id: u64, module: Address) -> B256 {
    let mut encoded = Vec::with_capacity(96);

    encoded.extend_from_slice(&DOMAIN_SEPARATOR_TYPEHASH);
    encoded.extend_from_slice(&U256::from(chain_id).to_be_bytes::<32>());
    encoded.extend_from_slice(module.into_word().as_slice());

    keccak256(&encoded)
}

/// Computes the struct hash of a module transaction
///
/// keccak256(abi.encode(TRANSACTION_TYPEHASH, to, value, keccak256(data), operation, nonce))
pub fn compute_tx_struct_hash(tx: &ModuleTransaction) -> Result<B256> {
    let nonce = tx.nonce.ok_or(Error::MissingNonce)?;
    let mut encoded = Vec::with_capacity(192);

    encoded.extend_from_slice(transaction_typehash().as_slice());
    encoded.extend_from_slice(tx.to.into_word().as_slice());
    encoded.extend_from_slice(&tx.value.to_be_bytes::<32>());
    encoded.extend_from_slice(keccak256(&tx.data).as_slice());
    encoded.extend_from_slice(&U256::from(tx.operation.as_u8()).to_be_bytes::<32>());
    encoded.extend_from_slice(&U256::from(nonce).to_be_bytes::<32>());

    Ok(keccak256(&encoded))
}

/// Computes the final EIP-712 hash
///
/// hash = keccak256("\x19\x01" || domainSeparator || structHash)
pub fn compute_transaction_hash(domain_separator: B256, struct_hash: B256) -> B256 {
    let mut encoded = Vec::with_capacity(66);

    encoded.extend_from_slice(&[0x19, 0x01]);
    encoded.extend_from_slice(domain_separator.as_slice());
    encoded.extend_from_slice(struct_hash.as_slice());

    keccak256(&encoded)
}

/// Computes the hash the module stores for a proposed transaction
pub fn compute_module_transaction_hash(
    chain_id: u64,
    module: Address,
    tx: &ModuleTransaction,
) -> Result<B256> {
    let domain_separator = compute_domain_separator(chain_id, module);
    let struct_hash = compute_tx_struct_hash(tx)?;
    Ok(compute_transaction_hash(domain_separator, struct_hash))
}
