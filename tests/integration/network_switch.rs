//! Wallet network reconciliation

use std::time::Duration;

use safesnap::chain::chain_ids;
use safesnap::{ensure_right_network, network_info, Error, NetworkSwitchOptions, WalletCapability};

use crate::common::FakeWallet;

fn options() -> NetworkSwitchOptions {
    NetworkSwitchOptions::new().with_settle_delay(Duration::from_millis(5))
}

#[tokio::test]
async fn test_wallet_already_on_safe_network() {
    let wallet = WalletCapability::SwitchCapable(FakeWallet::on(chain_ids::GNOSIS));

    ensure_right_network(&wallet, chain_ids::GNOSIS, &options())
        .await
        .unwrap();

    assert!(wallet.provider().requests().is_empty());
}

#[tokio::test]
async fn test_switch_to_known_network() {
    let wallet = WalletCapability::SwitchCapable(
        FakeWallet::on(chain_ids::MAINNET).knowing(chain_ids::GNOSIS),
    );

    ensure_right_network(&wallet, chain_ids::GNOSIS, &options())
        .await
        .unwrap();

    assert_eq!(wallet.provider().current_chain(), chain_ids::GNOSIS);
    assert_eq!(wallet.provider().methods(), vec!["wallet_switchEthereumChain"]);
}

#[tokio::test]
async fn test_unknown_network_is_added_from_registry() {
    let wallet = WalletCapability::SwitchCapable(FakeWallet::on(chain_ids::MAINNET));

    ensure_right_network(&wallet, chain_ids::ARBITRUM, &options())
        .await
        .unwrap();

    let requests = wallet.provider().requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[1].0, "wallet_addEthereumChain");

    let info = network_info(chain_ids::ARBITRUM).unwrap();
    let params = &requests[1].1[0];
    assert_eq!(params["chainId"], "0xa4b1");
    assert_eq!(params["chainName"], info.name);
    assert_eq!(params["rpcUrls"][0], info.rpc[0]);
    assert_eq!(params["blockExplorerUrls"][0], info.explorer);
    assert_eq!(wallet.provider().current_chain(), chain_ids::ARBITRUM);
}

#[tokio::test]
async fn test_rejected_add_reports_wrong_network() {
    let wallet =
        WalletCapability::SwitchCapable(FakeWallet::on(chain_ids::MAINNET).rejecting_add());

    let err = ensure_right_network(&wallet, chain_ids::POLYGON, &options())
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        Error::WrongNetwork {
            required: chain_ids::POLYGON,
            actual: chain_ids::MAINNET
        }
    ));
    assert_eq!(
        wallet.provider().methods(),
        vec!["wallet_switchEthereumChain", "wallet_addEthereumChain"]
    );
}

#[tokio::test]
async fn test_read_only_wallet_is_never_asked_to_switch() {
    let wallet = WalletCapability::ReadOnly(
        FakeWallet::on(chain_ids::MAINNET).knowing(chain_ids::GNOSIS),
    );

    let err = ensure_right_network(&wallet, chain_ids::GNOSIS, &options())
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Connected to network 1 instead of 100");
    assert!(wallet.provider().requests().is_empty());
    assert!(!wallet.can_switch());
}
