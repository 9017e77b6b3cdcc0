//! Remote result records, scalar coercion, and enumeration outcomes.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::errors::CoercionError;

/// A single instance returned by an enumeration: a bag of named properties.
///
/// Records are opaque to the query layer itself; higher-level wrappers read
/// individual properties off them to build their own typed models.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    properties: Map<String, Value>,
}

impl Record {
    /// Coerce a raw executor record into a property bag.
    ///
    /// Only object-shaped records qualify; scalars, nulls, and arrays in
    /// the middle of an instance stream are malformed and get skipped by
    /// the caller.
    pub fn from_value(value: Value) -> Result<Self, CoercionError> {
        match value {
            Value::Object(properties) => Ok(Self { properties }),
            other => Err(CoercionError {
                expected: "instance record",
                reason: format!("got {}", json_type_name(&other)),
            }),
        }
    }

    /// Raw property value, if present.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.properties.get(name)
    }

    /// String property value.
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Value::as_str)
    }

    /// Unsigned integer property value.
    pub fn get_u32(&self, name: &str) -> Option<u32> {
        self.get(name)
            .and_then(Value::as_u64)
            .and_then(|v| u32::try_from(v).ok())
    }

    /// Boolean property value.
    pub fn get_bool(&self, name: &str) -> Option<bool> {
        self.get(name).and_then(Value::as_bool)
    }

    /// Names of every property on the record.
    pub fn property_names(&self) -> impl Iterator<Item = &str> {
        self.properties.keys().map(String::as_str)
    }

    /// Number of properties.
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Whether the record carries no properties at all.
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

/// Result of an enumeration: the coerced instances plus a diagnostic entry
/// for every record that had to be skipped.
///
/// Skipping never aborts the batch; the skip list makes the swallowed
/// failures observable instead of print-only. Outcomes served from cache
/// carry an empty skip list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryOutcome {
    /// Every record that coerced successfully, in stream order.
    pub records: Vec<Record>,
    /// Diagnostics for records dropped during collection.
    pub skipped: Vec<SkippedRecord>,
}

/// One record dropped during enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedRecord {
    /// Position of the record in the executor's stream.
    pub index: usize,
    /// Why the record did not coerce.
    pub reason: String,
}

/// Coerce a raw executor record to its string rendering.
///
/// Strings pass through; numbers and booleans render the way the remote
/// shell would print them. Null and structured records do not coerce.
pub fn coerce_scalar(value: &Value) -> Result<String, CoercionError> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(CoercionError {
            expected: "string",
            reason: format!("got {}", json_type_name(other)),
        }),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
