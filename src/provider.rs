//! Read-only chain data used by the validators

use std::future::Future;

use alloy::network::AnyNetwork;
use alloy::primitives::{Address, Bytes};
use alloy::providers::{DynProvider, Provider, ProviderBuilder};
use url::Url;

use crate::chain::network_info;
use crate::error::{Error, Result};

/// Source of deployed bytecode for one network
pub trait CodeReader: Send + Sync {
    /// Returns the code deployed at `address` (empty for EOAs)
    fn code_at(&self, address: Address) -> impl Future<Output = Result<Bytes>> + Send;
}

/// [`CodeReader`] backed by an alloy provider
#[derive(Debug, Clone)]
pub struct RpcCodeReader<P> {
    provider: P,
}

impl<P> RpcCodeReader<P>
where
    P: Provider<AnyNetwork>,
{
    pub fn new(provider: P) -> Self {
        Self { provider }
    }
}

impl RpcCodeReader<DynProvider<AnyNetwork>> {
    /// Connects over HTTP to `rpc_url`
    pub fn connect(rpc_url: &str) -> Result<Self> {
        let url: Url = rpc_url.parse().map_err(|e: url::ParseError| Error::InvalidRpcUrl {
            url: rpc_url.to_string(),
            reason: e.to_string(),
        })?;

        let provider = ProviderBuilder::new()
            .network::<AnyNetwork>()
            .connect_http(url)
            .erased();

        Ok(Self::new(provider))
    }

    /// Connects to the preferred public RPC of a registry network
    pub fn for_network(chain_id: u64) -> Result<Self> {
        let rpc = network_info(chain_id)
            .and_then(|info| info.rpc.first())
            .ok_or(Error::UnsupportedChain(chain_id))?;

        Self::connect(rpc)
    }
}

impl<P> CodeReader for RpcCodeReader<P>
where
    P: Provider<AnyNetwork>,
{
    async fn code_at(&self, address: Address) -> Result<Bytes> {
        self.provider
            .get_code_at(address)
            .await
            .map_err(|e| Error::Fetch {
                what: "code",
                reason: e.to_string(),
            })
    }
}
