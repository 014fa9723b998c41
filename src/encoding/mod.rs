//! Encoding utilities for module transactions

mod eip712;
mod multisend;

pub use eip712::{
    compute_domain_separator, compute_module_transaction_hash, compute_transaction_hash,
    compute_tx_struct_hash, Eip712TxHasher, TransactionHasher,
};
pub use multisend::{build_multisend_transaction, encode_multisend_data, encode_transaction};
