//! Batch construction and hashing
//!
//! A batch is executed as a single module transaction. Hash failures never
//! abort config loading: they are logged and surface as a `None` hash, which
//! callers treat as "unknown" rather than "invalid".

use alloy::primitives::{keccak256, Address, B256, U256};
use tracing::warn;

use crate::chain::parse_network;
use crate::encoding::{build_multisend_transaction, TransactionHasher};
use crate::error::{Error, Result};
use crate::types::{Batch, ConfigAddress, ModuleTransaction};

/// Builds the transaction the module executes for a batch
///
/// Returns `None` if any entry of the batch is invalid. A single transaction
/// is passed through with the batch nonce; anything else (including an empty
/// batch) is aggregated through MultiSend.
pub fn format_batch_transaction(
    batch: &[Option<ModuleTransaction>],
    nonce: u64,
    multi_send: Option<Address>,
) -> Option<ModuleTransaction> {
    let transactions = batch.iter().cloned().collect::<Option<Vec<_>>>()?;

    if let [tx] = transactions.as_slice() {
        return Some(tx.clone().with_nonce(nonce));
    }

    let Some(multi_send) = multi_send else {
        warn!(nonce, calls = transactions.len(), "no MultiSend deployment to aggregate batch");
        return None;
    };

    Some(build_multisend_transaction(&transactions, nonce, multi_send))
}

/// Hashes a batch's main transaction for `module` on `network`
///
/// Any failure (including a blank or malformed module address) is logged and
/// returns `None`.
pub fn get_batch_hash<H: TransactionHasher + ?Sized>(
    hasher: &H,
    module: Option<&ConfigAddress>,
    network: &str,
    transaction: &ModuleTransaction,
) -> Option<B256> {
    match try_batch_hash(hasher, module, network, transaction) {
        Ok(hash) => Some(hash),
        Err(err) => {
            warn!(network, nonce = ?transaction.nonce, error = %err, "could not hash batch");
            None
        }
    }
}

fn try_batch_hash<H: TransactionHasher + ?Sized>(
    hasher: &H,
    module: Option<&ConfigAddress>,
    network: &str,
    transaction: &ModuleTransaction,
) -> Result<B256> {
    let module = module
        .filter(|module| !module.is_blank())
        .ok_or(Error::MissingModuleAddress)?
        .address()?;
    let chain_id = parse_network(network)?;
    let hashes = hasher.transaction_hashes(chain_id, module, std::slice::from_ref(transaction))?;
    hashes.into_iter().next().ok_or(Error::HashCount {
        expected: 1,
        got: 0,
    })
}

/// Builds a complete batch: main transaction plus its hash
pub fn create_batch<H: TransactionHasher + ?Sized>(
    hasher: &H,
    module: Option<&ConfigAddress>,
    network: &str,
    nonce: u64,
    transactions: Vec<Option<ModuleTransaction>>,
    multi_send: Option<Address>,
) -> Batch {
    let main_transaction = format_batch_transaction(&transactions, nonce, multi_send);
    let hash = main_transaction
        .as_ref()
        .and_then(|tx| get_batch_hash(hasher, module, network, tx));

    Batch {
        hash,
        nonce,
        main_transaction,
        transactions,
    }
}

/// Aggregates batch hashes into one hash for the whole Safe
///
/// Returns `None` when there are no batches or any batch is unhashed.
/// Otherwise `keccak256(abi.encode(bytes32[]))` over the hashes in stored order.
pub fn get_safe_hash(batches: &[Batch]) -> Option<B256> {
    if batches.is_empty() {
        return None;
    }
    let hashes = batches
        .iter()
        .map(|batch| batch.hash)
        .collect::<Option<Vec<_>>>()?;

    // offset (32 bytes) | length (32 bytes) | hashes
    let mut encoded = Vec::with_capacity(64 + 32 * hashes.len());
    encoded.extend_from_slice(&U256::from(32).to_be_bytes::<32>());
    encoded.extend_from_slice(&U256::from(hashes.len()).to_be_bytes::<32>());
    for hash in &hashes {
        encoded.extend_from_slice(hash.as_slice());
    }

    Some(keccak256(&encoded))
}
