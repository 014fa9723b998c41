//! Common test utilities for integration tests

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use alloy::primitives::{Address, Bytes};
use safesnap::{CodeReader, Error, Result, WalletProvider, UNRECOGNIZED_CHAIN_CODE};
use serde_json::{json, Value};

/// Macro to skip tests when ETH_RPC_URL is not set
#[macro_export]
macro_rules! skip_if_no_rpc {
    () => {
        if std::env::var("ETH_RPC_URL").is_err() {
            eprintln!("Skipping test: ETH_RPC_URL not set");
            return;
        }
    };
}

pub const MODULE: &str = "0xabcdefabcdefabcdefabcdefabcdefabcdefabcd";
pub const TOKEN: &str = "0x6b175474e89094c44da98b954eedeac495271d0f";
pub const RECIPIENT: &str = "0x1111111111111111111111111111111111111111";

/// A plugin transaction as the proposal UI stores it
pub fn plugin_tx(to: &str, value: &str, data: &str) -> Value {
    json!({ "to": to, "value": value, "data": data, "operation": "0" })
}

/// `transfer(RECIPIENT, 1)` call data
pub fn transfer_data() -> String {
    format!(
        "0xa9059cbb{:0>64}{:064x}",
        RECIPIENT.trim_start_matches("0x"),
        1
    )
}

/// Code reader serving fixed bytecode and counting lookups
#[derive(Default)]
pub struct FakeCodeReader {
    code: HashMap<Address, Bytes>,
    failing: bool,
    calls: AtomicUsize,
}

impl FakeCodeReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    pub fn with_code(mut self, address: Address, code: impl Into<Bytes>) -> Self {
        self.code.insert(address, code.into());
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl CodeReader for FakeCodeReader {
    async fn code_at(&self, address: Address) -> Result<Bytes> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing {
            return Err(Error::Fetch {
                what: "code",
                reason: "connection refused".into(),
            });
        }
        Ok(self.code.get(&address).cloned().unwrap_or_default())
    }
}

/// Injected wallet that knows a fixed set of chains
pub struct FakeWallet {
    chain: Mutex<u64>,
    known: Mutex<Vec<u64>>,
    reject_add: bool,
    requests: Mutex<Vec<(String, Value)>>,
}

impl FakeWallet {
    pub fn on(chain: u64) -> Self {
        Self {
            chain: Mutex::new(chain),
            known: Mutex::new(vec![chain]),
            reject_add: false,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn knowing(self, chain: u64) -> Self {
        self.known.lock().unwrap().push(chain);
        self
    }

    pub fn rejecting_add(mut self) -> Self {
        self.reject_add = true;
        self
    }

    pub fn current_chain(&self) -> u64 {
        *self.chain.lock().unwrap()
    }

    pub fn requests(&self) -> Vec<(String, Value)> {
        self.requests.lock().unwrap().clone()
    }

    pub fn methods(&self) -> Vec<String> {
        self.requests().into_iter().map(|(method, _)| method).collect()
    }
}

fn requested_chain(params: &Value) -> u64 {
    let hex = params[0]["chainId"].as_str().unwrap();
    u64::from_str_radix(hex.trim_start_matches("0x"), 16).unwrap()
}

impl WalletProvider for FakeWallet {
    async fn chain_id(&self) -> Result<u64> {
        Ok(self.current_chain())
    }

    async fn request(&self, method: &str, params: Value) -> Result<Value> {
        self.requests
            .lock()
            .unwrap()
            .push((method.to_string(), params.clone()));

        let target = requested_chain(&params);
        match method {
            "wallet_switchEthereumChain" if self.known.lock().unwrap().contains(&target) => {
                *self.chain.lock().unwrap() = target;
                Ok(Value::Null)
            }
            "wallet_switchEthereumChain" => Err(Error::WalletRpc {
                code: UNRECOGNIZED_CHAIN_CODE,
                message: "Unrecognized chain ID".into(),
            }),
            "wallet_addEthereumChain" if self.reject_add => Err(Error::WalletRpc {
                code: 4001,
                message: "User rejected the request.".into(),
            }),
            "wallet_addEthereumChain" => {
                self.known.lock().unwrap().push(target);
                *self.chain.lock().unwrap() = target;
                Ok(Value::Null)
            }
            _ => Err(Error::WalletRpc {
                code: 4200,
                message: format!("Unsupported method {method}"),
            }),
        }
    }
}
