//! Error types for safesnap

use thiserror::Error;

/// Result type alias for safesnap operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while normalizing configs, hashing batches or talking to a wallet
#[derive(Debug, Error)]
pub enum Error {
    /// Failed to connect to the RPC provider
    #[error("Provider error: {0}")]
    Provider(String),

    /// Failed to fetch data from the blockchain
    #[error("Failed to fetch {what}: {reason}")]
    Fetch { what: &'static str, reason: String },

    /// Network identifier is not a chain id
    #[error("Invalid network id: {0:?}")]
    InvalidNetwork(String),

    /// Chain is missing from the network registry
    #[error("Unsupported chain ID: {0}")]
    UnsupportedChain(u64),

    /// Registry entry carries an RPC URL that does not parse
    #[error("Invalid RPC URL {url}: {reason}")]
    InvalidRpcUrl { url: String, reason: String },

    /// Config field that should hold an address does not
    #[error("Invalid address: {0:?}")]
    InvalidAddress(String),

    /// A batch cannot be hashed without the module it executes through
    #[error("Safe has no module address")]
    MissingModuleAddress,

    /// Module transactions are hashed with their batch nonce
    #[error("Transaction has no nonce")]
    MissingNonce,

    /// The hashing collaborator returned fewer hashes than transactions
    #[error("Hasher returned {got} hashes for {expected} transactions")]
    HashCount { expected: usize, got: usize },

    /// Wallet is on a different chain and could not be switched
    #[error("Connected to network {actual} instead of {required}")]
    WrongNetwork { required: u64, actual: u64 },

    /// Wallet rejected an RPC request
    #[error("Wallet request failed with code {code}: {message}")]
    WalletRpc { code: i64, message: String },

    /// URL does not parse or cannot be joined
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(String),

    /// Encoding error
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<alloy::transports::RpcError<alloy::transports::TransportErrorKind>> for Error {
    fn from(err: alloy::transports::RpcError<alloy::transports::TransportErrorKind>) -> Self {
        Error::Provider(err.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Http(err.to_string())
    }
}
