//! Contract-code checks through the memoized validator

use alloy::primitives::{address, Address};
use safesnap::{
    clear_validation_caches, is_ethereum_contract_address, multi_send_address, Error,
    RpcCodeReader,
};

use crate::common::FakeCodeReader;
use crate::skip_if_no_rpc;

// Every test uses its own addresses: the cache is shared by the whole test binary.

#[tokio::test]
async fn test_deployed_code_is_a_contract() {
    let token = address!("0x00000000000000000000000000000000000a0001");
    let reader = FakeCodeReader::new().with_code(token, vec![0x60, 0x80, 0x60, 0x40]);

    assert!(is_ethereum_contract_address(&reader, 1, token).await.unwrap());
}

#[tokio::test]
async fn test_empty_or_zero_code_is_not_a_contract() {
    let eoa = address!("0x00000000000000000000000000000000000a0002");
    let zeroed = address!("0x00000000000000000000000000000000000a0003");
    let reader = FakeCodeReader::new().with_code(zeroed, vec![0u8; 32]);

    assert!(!is_ethereum_contract_address(&reader, 1, eoa).await.unwrap());
    assert!(!is_ethereum_contract_address(&reader, 1, zeroed).await.unwrap());
}

#[tokio::test]
async fn test_answers_are_memoized_per_network() {
    let token = address!("0x00000000000000000000000000000000000a0004");
    let reader = FakeCodeReader::new().with_code(token, vec![0x01]);

    assert!(is_ethereum_contract_address(&reader, 1, token).await.unwrap());
    assert!(is_ethereum_contract_address(&reader, 1, token).await.unwrap());
    assert_eq!(reader.calls(), 1);

    // same address on another network is a separate entry
    assert!(is_ethereum_contract_address(&reader, 100, token).await.unwrap());
    assert_eq!(reader.calls(), 2);

    clear_validation_caches();
    assert!(is_ethereum_contract_address(&reader, 1, token).await.unwrap());
    assert_eq!(reader.calls(), 3);
}

#[tokio::test]
async fn test_reader_errors_propagate_and_are_not_cached() {
    let target = address!("0x00000000000000000000000000000000000a0005");
    let reader = FakeCodeReader::failing();

    let err = is_ethereum_contract_address(&reader, 1, target).await.unwrap_err();
    assert!(matches!(err, Error::Fetch { what: "code", .. }));

    assert!(is_ethereum_contract_address(&reader, 1, target).await.is_err());
    assert_eq!(reader.calls(), 2);
}

/// MultiSend is deployed on mainnet; a random address is not
#[tokio::test]
async fn test_rpc_reader_against_mainnet() {
    skip_if_no_rpc!();

    let rpc_url = std::env::var("ETH_RPC_URL").unwrap();
    let reader = RpcCodeReader::connect(&rpc_url).expect("Failed to connect");

    let multi_send = multi_send_address(1, None).unwrap();
    let nobody = Address::repeat_byte(0x5a);

    assert!(is_ethereum_contract_address(&reader, 1, multi_send).await.unwrap());
    assert!(!is_ethereum_contract_address(&reader, 1, nobody).await.unwrap());
}
