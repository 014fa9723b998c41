//! Coercion of stored configs end to end

use alloy::primitives::{Address, U256};
use safesnap::encoding::compute_module_transaction_hash;
use safesnap::{
    coerce_config, get_safe_hash, is_valid_input, multi_send_address, ConfigAddress,
    MultiSendVersion, ModuleTransaction, ModuleType, Operation, PluginConfig, RawPluginConfig,
};
use serde_json::json;

use crate::common::{plugin_tx, transfer_data, MODULE, RECIPIENT, TOKEN};

fn coerce(value: serde_json::Value, network: &str) -> PluginConfig {
    let raw = RawPluginConfig::from_json(&value.to_string()).expect("stored config should parse");
    coerce_config(raw, network)
}

#[test]
fn test_proposal_with_two_batches() {
    let config = coerce(
        json!({
            "safes": [{
                "network": "1",
                "realityAddress": MODULE,
                "txs": [
                    [plugin_tx(TOKEN, "0", &transfer_data())],
                    [plugin_tx(RECIPIENT, "1000000000000000000", "0x"), plugin_tx(TOKEN, "0", &transfer_data())]
                ]
            }]
        }),
        "1",
    );

    assert!(is_valid_input(&config));
    let safe = &config.safes[0];
    let module: Address = MODULE.parse().unwrap();
    assert_eq!(safe.module_type, ModuleType::Reality);
    assert_eq!(safe.multi_send_address, multi_send_address(1, None).map(ConfigAddress::from));

    // single-call batch executes the call itself
    let first = safe.txs[0].main_transaction.as_ref().unwrap();
    assert_eq!(first.to, TOKEN.parse::<Address>().unwrap());
    assert_eq!(first.operation, Operation::Call);
    assert_eq!(
        safe.txs[0].hash,
        Some(compute_module_transaction_hash(1, module, first).unwrap())
    );

    // stored array batches were built against MultiSend 1.1.1
    let second = safe.txs[1].main_transaction.as_ref().unwrap();
    assert_eq!(Some(second.to), multi_send_address(1, Some(MultiSendVersion::V1_1_1)));
    assert_eq!(second.operation, Operation::DelegateCall);
    assert_eq!(second.value, U256::ZERO);
    assert_eq!(second.nonce, Some(1));

    assert_eq!(safe.hash, get_safe_hash(&safe.txs));
}

#[test]
fn test_hash_depends_on_network() {
    let stored = json!({
        "safes": [{ "moduleAddress": MODULE, "txs": [[plugin_tx(TOKEN, "0", &transfer_data())]] }]
    });

    let mainnet = coerce(stored.clone(), "1");
    let gnosis = coerce(stored, "100");

    assert!(mainnet.safes[0].hash.is_some());
    assert_ne!(mainnet.safes[0].txs[0].hash, gnosis.safes[0].txs[0].hash);
    assert_ne!(mainnet.safes[0].hash, gnosis.safes[0].hash);
}

#[test]
fn test_coerced_config_serializes_in_current_shape() {
    let config = coerce(
        json!({
            "safes": [{ "realityAddress": MODULE, "txs": [[plugin_tx(TOKEN, "5", "0x")]] }],
            "valid": true
        }),
        "1",
    );

    let value = serde_json::to_value(&config).unwrap();
    let safe = &value["safes"][0];
    assert_eq!(value["valid"], true);
    assert!(safe.get("realityAddress").is_none());
    assert_eq!(safe["moduleType"], "reality");
    assert_eq!(safe["txs"][0]["nonce"], 0);
    assert_eq!(safe["txs"][0]["mainTransaction"]["nonce"], "0");
    assert_eq!(safe["txs"][0]["mainTransaction"]["value"], "5");
    assert_eq!(safe["txs"][0]["mainTransaction"]["operation"], "0");
    assert!(safe["txs"][0]["hash"].is_string());
    assert!(safe["hash"].is_string());
}

#[test]
fn test_reloading_a_coerced_config_changes_nothing() {
    let once = coerce(
        json!({
            "safes": [
                { "realityAddress": MODULE, "txs": [[plugin_tx(TOKEN, "0", &transfer_data())], []] },
                { "network": "100", "moduleAddress": MODULE, "moduleType": "uma", "txs": [] }
            ]
        }),
        "1",
    );

    let stored = serde_json::to_string(&once).unwrap();
    let twice = coerce_config(RawPluginConfig::from_json(&stored).unwrap(), "1");
    assert_eq!(once, twice);
}

#[test]
fn test_legacy_config_on_gnosis() {
    let config = coerce(json!({ "address": MODULE }), "100");

    let safe = &config.safes[0];
    assert_eq!(safe.network.as_deref(), Some("100"));
    assert_eq!(safe.module_address, Some(MODULE.parse().unwrap()));
    assert_eq!(
        safe.multi_send_address,
        multi_send_address(100, Some(MultiSendVersion::V1_1_1)).map(ConfigAddress::from)
    );
    assert!(is_valid_input(&config));
}

#[test]
fn test_incomplete_batch_makes_config_invalid() {
    let config = coerce(
        json!({
            "safes": [{ "moduleAddress": MODULE, "txs": [[plugin_tx(TOKEN, "0", "0x"), null]] }]
        }),
        "1",
    );

    assert!(!is_valid_input(&config));
    assert_eq!(config.safes[0].txs[0].hash, None);
    assert_eq!(config.safes[0].hash, None);
}

#[test]
fn test_wrapped_batch_without_main_transaction() {
    let tx = plugin_tx(TOKEN, "0", &transfer_data());
    let config = coerce(
        json!({
            "safes": [{ "moduleAddress": MODULE, "txs": [{ "nonce": 3, "transactions": [tx.clone()] }] }]
        }),
        "1",
    );

    let expected: ModuleTransaction = serde_json::from_value(tx).unwrap();
    let batch = &config.safes[0].txs[0];
    assert_eq!(batch.main_transaction, Some(expected.with_nonce(3)));
    // stored hash is kept as-is, even when absent
    assert_eq!(batch.hash, None);
    assert_eq!(config.safes[0].hash, None);
}

#[test]
fn test_half_edited_config_still_loads() {
    let config = coerce(
        json!({
            "safes": [
                { "moduleAddress": "", "txs": [[plugin_tx("", "0", "0x")]] },
                { "network": "1", "moduleAddress": MODULE, "txs": [[plugin_tx(TOKEN, "0", &transfer_data())]] }
            ]
        }),
        "1",
    );

    assert_eq!(config.safes.len(), 2);
    assert_eq!(config.safes[0].txs[0].transactions, vec![None]);
    assert_eq!(config.safes[0].hash, None);
    assert!(config.safes[1].hash.is_some());
    assert!(!is_valid_input(&config));
}

#[test]
fn test_placeholder_module_addresses_survive_coercion() {
    let legacy = coerce(json!({ "address": "0xABC" }), "1");
    let legacy_json = serde_json::to_value(&legacy).unwrap();
    assert_eq!(legacy_json["safes"][0]["moduleAddress"], "0xABC");
    assert_eq!(legacy.safes[0].hash, None);

    let reality = coerce(json!({ "safes": [{ "realityAddress": "0xDEF", "txs": [] }] }), "1");
    let reality_json = serde_json::to_value(&reality).unwrap();
    assert_eq!(reality_json["safes"][0]["moduleAddress"], "0xDEF");
    assert_eq!(reality_json["safes"][0]["moduleType"], "reality");
    assert!(reality_json["safes"][0].get("realityAddress").is_none());
}
