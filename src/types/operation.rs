//! Operation types for module transactions

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Operation type for module transactions
///
/// Configs store the operation as a decimal string (`"0"` or `"1"`); plain
/// numbers are accepted on input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Operation {
    /// Regular call (default)
    #[default]
    Call = 0,
    /// Delegate call (executes in context of the Safe)
    DelegateCall = 1,
}

impl Operation {
    /// Returns the operation as a u8 value
    pub fn as_u8(&self) -> u8 {
        *self as u8
    }

    /// Creates an Operation from a u8 value
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Operation::Call),
            1 => Some(Operation::DelegateCall),
            _ => None,
        }
    }
}

impl From<Operation> for u8 {
    fn from(op: Operation) -> Self {
        op.as_u8()
    }
}

impl TryFrom<u8> for Operation {
    type Error = &'static str;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Operation::from_u8(value).ok_or("Invalid operation value")
    }
}

impl Serialize for Operation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.as_u8().to_string())
    }
}

impl<'de> Deserialize<'de> for Operation {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct OperationVisitor;

        impl Visitor<'_> for OperationVisitor {
            type Value = Operation;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("operation 0 or 1, as a number or decimal string")
            }

            fn visit_u64<E: de::Error>(self, value: u64) -> Result<Operation, E> {
                u8::try_from(value)
                    .ok()
                    .and_then(Operation::from_u8)
                    .ok_or_else(|| E::custom(format!("invalid operation {value}")))
            }

            fn visit_i64<E: de::Error>(self, value: i64) -> Result<Operation, E> {
                let value =
                    u64::try_from(value).map_err(|_| E::custom(format!("invalid operation {value}")))?;
                self.visit_u64(value)
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<Operation, E> {
                let parsed: u64 = value
                    .trim()
                    .parse()
                    .map_err(|_| E::custom(format!("invalid operation {value:?}")))?;
                self.visit_u64(parsed)
            }
        }

        deserializer.deserialize_any(OperationVisitor)
    }
}
