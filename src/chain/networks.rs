//! Static network registry used when asking a wallet to add a chain

/// Metadata a wallet needs to add a chain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkInfo {
    /// Chain ID
    pub chain_id: u64,
    /// Human readable name
    pub name: &'static str,
    /// Public RPC endpoints, preferred first
    pub rpc: &'static [&'static str],
    /// Block explorer base URL
    pub explorer: &'static str,
}

/// Well-known chain IDs
pub mod chain_ids {
    pub const MAINNET: u64 = 1;
    pub const RINKEBY: u64 = 4;
    pub const GOERLI: u64 = 5;
    pub const OPTIMISM: u64 = 10;
    pub const BSC: u64 = 56;
    pub const GNOSIS: u64 = 100;
    pub const POLYGON: u64 = 137;
    pub const BASE: u64 = 8453;
    pub const ARBITRUM: u64 = 42161;
    pub const AVALANCHE: u64 = 43114;
    pub const SEPOLIA: u64 = 11155111;
}

/// Every network the registry knows about
pub static NETWORKS: &[NetworkInfo] = &[
    NetworkInfo {
        chain_id: chain_ids::MAINNET,
        name: "Ethereum Mainnet",
        rpc: &["https://eth.llamarpc.com", "https://rpc.ankr.com/eth"],
        explorer: "https://etherscan.io",
    },
    NetworkInfo {
        chain_id: chain_ids::GOERLI,
        name: "Ethereum Testnet Görli",
        rpc: &["https://rpc.ankr.com/eth_goerli"],
        explorer: "https://goerli.etherscan.io",
    },
    NetworkInfo {
        chain_id: chain_ids::OPTIMISM,
        name: "Optimism",
        rpc: &["https://mainnet.optimism.io"],
        explorer: "https://optimistic.etherscan.io",
    },
    NetworkInfo {
        chain_id: chain_ids::BSC,
        name: "BNB Smart Chain Mainnet",
        rpc: &["https://bsc-dataseed.binance.org"],
        explorer: "https://bscscan.com",
    },
    NetworkInfo {
        chain_id: chain_ids::GNOSIS,
        name: "Gnosis Chain",
        rpc: &["https://rpc.gnosischain.com", "https://rpc.ankr.com/gnosis"],
        explorer: "https://gnosisscan.io",
    },
    NetworkInfo {
        chain_id: chain_ids::POLYGON,
        name: "Polygon Mainnet",
        rpc: &["https://polygon-rpc.com", "https://rpc.ankr.com/polygon"],
        explorer: "https://polygonscan.com",
    },
    NetworkInfo {
        chain_id: chain_ids::BASE,
        name: "Base",
        rpc: &["https://mainnet.base.org"],
        explorer: "https://basescan.org",
    },
    NetworkInfo {
        chain_id: chain_ids::ARBITRUM,
        name: "Arbitrum One",
        rpc: &["https://arb1.arbitrum.io/rpc"],
        explorer: "https://arbiscan.io",
    },
    NetworkInfo {
        chain_id: chain_ids::AVALANCHE,
        name: "Avalanche C-Chain",
        rpc: &["https://api.avax.network/ext/bc/C/rpc"],
        explorer: "https://snowtrace.io",
    },
    NetworkInfo {
        chain_id: chain_ids::SEPOLIA,
        name: "Sepolia",
        rpc: &["https://rpc.sepolia.org", "https://rpc.ankr.com/eth_sepolia"],
        explorer: "https://sepolia.etherscan.io",
    },
];

/// Looks up a network by chain ID
pub fn network_info(chain_id: u64) -> Option<&'static NetworkInfo> {
    NETWORKS.iter().find(|n| n.chain_id == chain_id)
}
