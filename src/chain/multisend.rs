//! MultiSend deployments per chain and version

use alloy::primitives::{address, Address};

use super::chain_ids;

/// Canonical MultiSend v1.1.1 deployment
const MULTI_SEND_V1_1_1: Address = address!("8D29bE29923b68abfDD21e541b9374737B49cdAD");

/// Canonical MultiSend v1.3.0 deployment
const MULTI_SEND_V1_3_0: Address = address!("A238CBeb142c10Ef7Ad8442C6D1f9E89e07e7761");

/// MultiSend v1.3.0 deployed through the EIP-155 singleton factory
const MULTI_SEND_V1_3_0_EIP155: Address = address!("998739BFdAAdde7C933B942a68053933098f9EDa");

/// MultiSend contract versions the plugin has shipped with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MultiSendVersion {
    V1_1_1,
    V1_3_0,
}

impl MultiSendVersion {
    /// Version used when none is pinned
    pub const LATEST: Self = MultiSendVersion::V1_3_0;
}

/// Looks up the MultiSend address for a chain; `None` selects the latest version
pub fn multi_send_address(chain_id: u64, version: Option<MultiSendVersion>) -> Option<Address> {
    match version.unwrap_or(MultiSendVersion::LATEST) {
        MultiSendVersion::V1_1_1 => match chain_id {
            chain_ids::MAINNET | chain_ids::RINKEBY | chain_ids::GOERLI | chain_ids::GNOSIS => {
                Some(MULTI_SEND_V1_1_1)
            }
            _ => None,
        },
        MultiSendVersion::V1_3_0 => match chain_id {
            chain_ids::MAINNET
            | chain_ids::RINKEBY
            | chain_ids::GOERLI
            | chain_ids::BSC
            | chain_ids::GNOSIS
            | chain_ids::POLYGON
            | chain_ids::ARBITRUM
            | chain_ids::AVALANCHE => Some(MULTI_SEND_V1_3_0),
            chain_ids::OPTIMISM | chain_ids::BASE | chain_ids::SEPOLIA => {
                Some(MULTI_SEND_V1_3_0_EIP155)
            }
            _ => None,
        },
    }
}

/// MultiSend address that historical batches were signed against
///
/// Batches stored before `mainTransaction` existed were aggregated through
/// v1.1.1 where it was deployed, v1.3.0 elsewhere.
pub fn legacy_multi_send_address(chain_id: u64) -> Option<Address> {
    multi_send_address(chain_id, Some(MultiSendVersion::V1_1_1))
        .or_else(|| multi_send_address(chain_id, Some(MultiSendVersion::V1_3_0)))
}
