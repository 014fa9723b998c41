//! Addresses as written in stored configs

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use alloy::primitives::Address;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::error::{Error, Result};

/// An address field of a plugin config
///
/// Configs are edited by hand and saved mid-edit, so address fields can hold
/// placeholders or partial input. Those are kept verbatim and only rejected
/// where an address is actually needed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ConfigAddress {
    /// A well-formed 20-byte address
    Valid(Address),
    /// Anything else
    Raw(String),
}

impl ConfigAddress {
    pub fn parse(text: &str) -> Self {
        match text.parse::<Address>() {
            Ok(address) => ConfigAddress::Valid(address),
            Err(_) => ConfigAddress::Raw(text.to_string()),
        }
    }

    /// Returns the parsed address, or [`Error::InvalidAddress`]
    pub fn address(&self) -> Result<Address> {
        match self {
            ConfigAddress::Valid(address) => Ok(*address),
            ConfigAddress::Raw(text) => Err(Error::InvalidAddress(text.clone())),
        }
    }

    /// Returns true for an empty or whitespace-only field
    pub fn is_blank(&self) -> bool {
        matches!(self, ConfigAddress::Raw(text) if text.trim().is_empty())
    }
}

impl From<Address> for ConfigAddress {
    fn from(address: Address) -> Self {
        ConfigAddress::Valid(address)
    }
}

impl FromStr for ConfigAddress {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl fmt::Display for ConfigAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigAddress::Valid(address) => write!(f, "{address}"),
            ConfigAddress::Raw(text) => f.write_str(text),
        }
    }
}

impl PartialEq<Address> for ConfigAddress {
    fn eq(&self, other: &Address) -> bool {
        matches!(self, ConfigAddress::Valid(address) if address == other)
    }
}

impl Serialize for ConfigAddress {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ConfigAddress {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        Ok(match Value::deserialize(deserializer)? {
            Value::String(text) => Self::parse(&text),
            other => ConfigAddress::Raw(other.to_string()),
        })
    }
}
