//! Transaction batches and their historical config shapes

use alloy::primitives::B256;
use serde::{Deserialize, Serialize};

use super::serde_helpers::{lenient, u64_lenient};
use super::ModuleTransaction;

/// An ordered group of transactions executed under one module nonce
///
/// `main_transaction` is what the module actually executes: the sole
/// transaction, or a multi-send aggregate of all of them. `hash` identifies
/// `main_transaction` and is `None` whenever the batch holds an invalid entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Batch {
    /// Hash of the main transaction
    #[serde(default, deserialize_with = "lenient::option")]
    pub hash: Option<B256>,
    /// Module nonce
    #[serde(with = "u64_lenient")]
    pub nonce: u64,
    /// Transaction the module executes for this batch
    #[serde(default, deserialize_with = "lenient::option")]
    pub main_transaction: Option<ModuleTransaction>,
    /// Individual transactions; `None` marks an invalid entry
    #[serde(default, deserialize_with = "lenient::entries")]
    pub transactions: Vec<Option<ModuleTransaction>>,
}

impl Batch {
    /// Returns true if every transaction of the batch is present
    pub fn is_complete(&self) -> bool {
        self.transactions.iter().all(Option::is_some)
    }
}

/// A batch as found in a stored config
///
/// The oldest configs stored a batch as a bare array of transactions; newer
/// ones wrap it in an object. Entries that are not well-formed transactions
/// (a placeholder `to`, say) are read as invalid entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawBatch {
    /// Bare array of transactions, nonce implied by position
    Legacy(#[serde(deserialize_with = "lenient::entries")] Vec<Option<ModuleTransaction>>),
    /// `{ hash, nonce, mainTransaction, transactions }` object
    Wrapped(Batch),
}

impl From<Batch> for RawBatch {
    fn from(batch: Batch) -> Self {
        RawBatch::Wrapped(batch)
    }
}

/// The three historical batch shapes, resolved once when a config is loaded
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchShape {
    /// Bare transaction array; must be rebuilt and hashed
    Legacy(Vec<Option<ModuleTransaction>>),
    /// Wrapped batch written before `mainTransaction` existed
    Unformatted(Batch),
    /// Canonical batch, passed through untouched
    Formatted(Batch),
}

impl BatchShape {
    /// Classifies a stored batch
    pub fn classify(raw: RawBatch) -> Self {
        match raw {
            RawBatch::Legacy(transactions) => BatchShape::Legacy(transactions),
            RawBatch::Wrapped(batch) if batch.main_transaction.is_none() => {
                BatchShape::Unformatted(batch)
            }
            RawBatch::Wrapped(batch) => BatchShape::Formatted(batch),
        }
    }
}

impl From<RawBatch> for BatchShape {
    fn from(raw: RawBatch) -> Self {
        Self::classify(raw)
    }
}
