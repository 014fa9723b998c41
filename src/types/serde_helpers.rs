//! Serde adapters for the numeric fields of plugin configs
//!
//! Configs written by the plugin UI store amounts and nonces as decimal strings,
//! while hand-written configs often use plain JSON numbers. Both are accepted;
//! output always uses the decimal string form.

use alloy::primitives::U256;
use serde::{de, Deserialize, Deserializer, Serializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    String(String),
    Number(u64),
}

impl StringOrNumber {
    fn into_u256<E: de::Error>(self) -> Result<U256, E> {
        match self {
            StringOrNumber::Number(n) => Ok(U256::from(n)),
            StringOrNumber::String(s) => s
                .trim()
                .parse::<U256>()
                .map_err(|e| E::custom(format!("invalid integer {s:?}: {e}"))),
        }
    }

    fn into_u64<E: de::Error>(self) -> Result<u64, E> {
        match self {
            StringOrNumber::Number(n) => Ok(n),
            StringOrNumber::String(s) => s
                .trim()
                .parse::<u64>()
                .map_err(|e| E::custom(format!("invalid integer {s:?}: {e}"))),
        }
    }
}

/// `U256` as a decimal string
pub mod u256_decimal {
    use super::*;

    pub fn serialize<S: Serializer>(value: &U256, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<U256, D::Error> {
        StringOrNumber::deserialize(deserializer)?.into_u256()
    }
}

/// `Option<u64>` as a decimal string
pub mod opt_u64_decimal {
    use super::*;

    pub fn serialize<S: Serializer>(value: &Option<u64>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(v) => serializer.serialize_str(&v.to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<u64>, D::Error> {
        Option::<StringOrNumber>::deserialize(deserializer)?
            .map(StringOrNumber::into_u64)
            .transpose()
    }
}

/// `u64` accepted as a string or number, written as a number
pub mod u64_lenient {
    use super::*;

    pub fn serialize<S: Serializer>(value: &u64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(*value)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
        StringOrNumber::deserialize(deserializer)?.into_u64()
    }
}

/// Fields whose content may be malformed without invalidating the whole config
///
/// A value that does not parse is logged and read as `None`, which marks it as
/// invalid (transactions) or unknown (hashes, derived transactions).
pub mod lenient {
    use serde::de::DeserializeOwned;
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;
    use tracing::warn;

    fn parse<T: DeserializeOwned>(value: Value) -> Option<T> {
        if value.is_null() {
            return None;
        }
        match serde_json::from_value(value) {
            Ok(parsed) => Some(parsed),
            Err(err) => {
                warn!(error = %err, "ignoring malformed config entry");
                None
            }
        }
    }

    pub fn option<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned,
    {
        Ok(parse(Value::deserialize(deserializer)?))
    }

    pub fn entries<'de, D, T>(deserializer: D) -> Result<Vec<Option<T>>, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned,
    {
        Ok(Vec::<Value>::deserialize(deserializer)?
            .into_iter()
            .map(parse)
            .collect())
    }
}
