use alloy::primitives::{Address, Selector, B256};
use safesnap::{ConfigAddress, PluginConfig, SafeTarget};
use serde::Serialize;

/// Prints a normalized config; it is JSON either way
pub fn print_config(config: &PluginConfig) {
    println!("{}", serde_json::to_string_pretty(config).unwrap());
}

fn label(index: usize, safe: &SafeTarget) -> String {
    let module = safe
        .module_address
        .as_ref()
        .map(|address| address.to_string())
        .unwrap_or_else(|| "<no module>".to_string());
    match &safe.network {
        Some(network) => format!("Safe {} ({} on network {})", index, module, network),
        None => format!("Safe {} ({})", index, module),
    }
}

fn hash_or_dash(hash: Option<B256>) -> String {
    hash.map(|h| h.to_string()).unwrap_or_else(|| "-".to_string())
}

#[derive(Serialize)]
pub struct SafeValidity {
    pub index: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network: Option<String>,
    pub module_address: Option<ConfigAddress>,
    pub batches: usize,
    pub valid: bool,
    #[serde(skip)]
    pub label: String,
}

impl SafeValidity {
    pub fn new(index: usize, safe: &SafeTarget, valid: bool) -> Self {
        Self {
            index,
            network: safe.network.clone(),
            module_address: safe.module_address.clone(),
            batches: safe.txs.len(),
            valid,
            label: label(index, safe),
        }
    }
}

#[derive(Serialize)]
pub struct ValidationOutput {
    pub valid: bool,
    pub safes: Vec<SafeValidity>,
}

impl ValidationOutput {
    pub fn print(&self, json: bool) {
        if json {
            println!("{}", serde_json::to_string_pretty(self).unwrap());
        } else {
            for safe in &self.safes {
                let status = if safe.valid { "valid" } else { "INVALID" };
                println!("{}: {} ({} batches)", safe.label, status, safe.batches);
            }
            println!("Config valid: {}", self.valid);
        }
    }
}

#[derive(Serialize)]
pub struct BatchHashOutput {
    pub nonce: u64,
    pub hash: Option<B256>,
}

#[derive(Serialize)]
pub struct SafeHashesOutput {
    pub index: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network: Option<String>,
    pub module_address: Option<ConfigAddress>,
    pub multi_send_address: Option<ConfigAddress>,
    pub batches: Vec<BatchHashOutput>,
    pub hash: Option<B256>,
    #[serde(skip)]
    pub label: String,
}

impl SafeHashesOutput {
    pub fn new(index: usize, safe: &SafeTarget) -> Self {
        Self {
            index,
            network: safe.network.clone(),
            module_address: safe.module_address.clone(),
            multi_send_address: safe.multi_send_address.clone(),
            batches: safe
                .txs
                .iter()
                .map(|batch| BatchHashOutput {
                    nonce: batch.nonce,
                    hash: batch.hash,
                })
                .collect(),
            hash: safe.hash,
            label: label(index, safe),
        }
    }
}

#[derive(Serialize)]
pub struct HashesOutput {
    pub safes: Vec<SafeHashesOutput>,
}

impl HashesOutput {
    pub fn print(&self, json: bool) {
        if json {
            println!("{}", serde_json::to_string_pretty(self).unwrap());
        } else {
            for safe in &self.safes {
                println!("{}:", safe.label);
                for batch in &safe.batches {
                    println!("  Batch {}: {}", batch.nonce, hash_or_dash(batch.hash));
                }
                println!("  Safe hash: {}", hash_or_dash(safe.hash));
            }
        }
    }
}

#[derive(Serialize)]
pub struct ContractOutput {
    pub address: Address,
    pub network: u64,
    pub is_contract: bool,
}

impl ContractOutput {
    pub fn print(&self, json: bool) {
        if json {
            println!("{}", serde_json::to_string_pretty(self).unwrap());
        } else if self.is_contract {
            println!("{} is a contract on network {}", self.address, self.network);
        } else {
            println!("{} has no code on network {}", self.address, self.network);
        }
    }
}

#[derive(Serialize)]
pub struct SignatureOutput {
    pub selector: Selector,
    pub signatures: Vec<String>,
}

impl SignatureOutput {
    pub fn print(&self, json: bool) {
        if json {
            println!("{}", serde_json::to_string_pretty(self).unwrap());
        } else if self.signatures.is_empty() {
            println!("No signatures found for {}", self.selector);
        } else {
            println!("Signatures for {}:", self.selector);
            for signature in &self.signatures {
                println!("  {}", signature);
            }
        }
    }
}
