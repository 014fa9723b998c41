//! Injected wallet access and network reconciliation
//!
//! Proposals are executed from whatever wallet the user has connected, which
//! may sit on any chain. [`ensure_right_network`] asks a switch-capable wallet
//! to move to the Safe's chain, registering the chain first when the wallet
//! does not know it.
//!
//! # Example
//!
//! ```rust,ignore
//! use safesnap::wallet::{ensure_right_network, NetworkSwitchOptions, WalletCapability};
//!
//! let wallet = WalletCapability::SwitchCapable(injected);
//! ensure_right_network(&wallet, 100, &NetworkSwitchOptions::default()).await?;
//! ```

use std::future::Future;
use std::time::Duration;

use serde::Serialize;
use serde_json::{json, Value};
use tracing::{debug, warn};

use crate::chain::{network_info, to_hex_chain_id};
use crate::error::{Error, Result};

/// Wallet error code for a chain the wallet has not been told about
pub const UNRECOGNIZED_CHAIN_CODE: i64 = 4902;

/// An EIP-1193 style wallet
///
/// Failed requests are reported as [`Error::WalletRpc`] carrying the wallet's error code.
pub trait WalletProvider: Send + Sync {
    /// Returns the chain the wallet is currently connected to
    fn chain_id(&self) -> impl Future<Output = Result<u64>> + Send;

    /// Sends a raw JSON-RPC request to the wallet
    fn request(&self, method: &str, params: Value) -> impl Future<Output = Result<Value>> + Send;
}

/// A wallet together with what it is allowed to do
#[derive(Debug, Clone)]
pub enum WalletCapability<W> {
    /// Wallet accepts `wallet_switchEthereumChain` and `wallet_addEthereumChain`
    SwitchCapable(W),
    /// Wallet can only be read; it is never asked to switch
    ReadOnly(W),
}

impl<W> WalletCapability<W> {
    /// Returns the wrapped wallet
    pub fn provider(&self) -> &W {
        match self {
            Self::SwitchCapable(wallet) | Self::ReadOnly(wallet) => wallet,
        }
    }

    pub fn can_switch(&self) -> bool {
        matches!(self, Self::SwitchCapable(_))
    }
}

/// Options for [`ensure_right_network`]
#[derive(Debug, Clone)]
pub struct NetworkSwitchOptions {
    /// How long to wait after a switch before re-reading the chain id (default: 1s)
    ///
    /// Wallets report the new chain asynchronously, so this is a heuristic.
    pub settle_delay: Duration,
}

impl Default for NetworkSwitchOptions {
    fn default() -> Self {
        Self {
            settle_delay: Duration::from_secs(1),
        }
    }
}

impl NetworkSwitchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the delay between the switch request and the final chain check
    pub fn with_settle_delay(mut self, settle_delay: Duration) -> Self {
        self.settle_delay = settle_delay;
        self
    }
}

/// Parameters of `wallet_addEthereumChain`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddChainParams {
    pub chain_id: String,
    pub chain_name: String,
    pub rpc_urls: Vec<String>,
    pub block_explorer_urls: Vec<String>,
}

impl AddChainParams {
    /// Builds the parameters from the network registry
    pub fn for_chain(chain_id: u64) -> Option<Self> {
        let info = network_info(chain_id)?;
        Some(Self {
            chain_id: to_hex_chain_id(chain_id),
            chain_name: info.name.to_string(),
            rpc_urls: info.rpc.iter().map(|url| url.to_string()).collect(),
            block_explorer_urls: vec![info.explorer.to_string()],
        })
    }
}

/// Makes sure the wallet is connected to `chain_id`
///
/// Does nothing if the wallet is already there. A read-only wallet on another
/// chain fails immediately. Otherwise the wallet is asked to switch (adding
/// the chain on error 4902), and after `settle_delay` the chain id is read
/// again. Failures of the switch or add requests are only logged; the final
/// chain check decides the outcome.
pub async fn ensure_right_network<W: WalletProvider>(
    wallet: &WalletCapability<W>,
    chain_id: u64,
    options: &NetworkSwitchOptions,
) -> Result<()> {
    let provider = wallet.provider();
    let actual = provider.chain_id().await?;
    if actual == chain_id {
        return Ok(());
    }

    let WalletCapability::SwitchCapable(provider) = wallet else {
        return Err(Error::WrongNetwork {
            required: chain_id,
            actual,
        });
    };

    debug!(from = actual, to = chain_id, "switching wallet network");
    let switch = provider
        .request(
            "wallet_switchEthereumChain",
            json!([{ "chainId": to_hex_chain_id(chain_id) }]),
        )
        .await;

    match switch {
        Ok(_) => {}
        Err(Error::WalletRpc { code, .. }) if code == UNRECOGNIZED_CHAIN_CODE => {
            add_chain(provider, chain_id).await;
        }
        Err(err) => warn!(chain_id, error = %err, "wallet refused to switch network"),
    }

    tokio::time::sleep(options.settle_delay).await;

    let actual = provider.chain_id().await?;
    if actual != chain_id {
        return Err(Error::WrongNetwork {
            required: chain_id,
            actual,
        });
    }
    Ok(())
}

async fn add_chain<W: WalletProvider>(provider: &W, chain_id: u64) {
    let Some(params) = AddChainParams::for_chain(chain_id) else {
        warn!(chain_id, "wallet does not know chain and it is not in the registry");
        return;
    };

    let params = match serde_json::to_value([params]) {
        Ok(params) => params,
        Err(err) => {
            warn!(chain_id, error = %err, "could not encode add-chain request");
            return;
        }
    };

    debug!(chain_id, "adding chain to wallet");
    if let Err(err) = provider.request("wallet_addEthereumChain", params).await {
        warn!(chain_id, error = %err, "wallet refused to add network");
    }
}
