//! Reference-data fingerprinting
//!
//! Hashes canonical JSON so that two bundles with the same content always
//! produce the same fingerprint, regardless of map ordering.

use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::reference::ReferenceError;

/// SHA-256 (lowercase hex) of the canonical JSON form of `value`
pub fn compute_fingerprint<T: Serialize>(value: &T) -> Result<String, ReferenceError> {
    use serde_json::Value;
    use std::collections::BTreeMap;

    let value = serde_json::to_value(value)
        .map_err(|e| ReferenceError::Serialization(e.to_string()))?;

    // Recursively sort all object keys
    fn canonicalize(value: Value) -> Value {
        match value {
            Value::Object(map) => {
                let sorted: BTreeMap<String, Value> =
                    map.into_iter().map(|(k, v)| (k, canonicalize(v))).collect();
                Value::Object(sorted.into_iter().collect())
            }
            Value::Array(arr) => Value::Array(arr.into_iter().map(canonicalize).collect()),
            other => other,
        }
    }

    let json = serde_json::to_string(&canonicalize(value))
        .map_err(|e| ReferenceError::Serialization(e.to_string()))?;

    let mut hasher = Sha256::new();
    hasher.update(json.as_bytes());
    Ok(format!("{:x}", hasher.finalize()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_key_order_does_not_matter() {
        let a = json!({"a": 1, "b": {"x": true, "y": [1, 2]}});
        let b = json!({"b": {"y": [1, 2], "x": true}, "a": 1});
        assert_eq!(compute_fingerprint(&a).unwrap(), compute_fingerprint(&b).unwrap());
    }

    #[test]
    fn test_array_order_matters() {
        let a = json!([1, 2]);
        let b = json!([2, 1]);
        assert_ne!(compute_fingerprint(&a).unwrap(), compute_fingerprint(&b).unwrap());
    }

    #[test]
    fn test_hex_length() {
        let hash = compute_fingerprint(&json!({})).unwrap();
        assert_eq!(hash.len(), 64);
        assert!(hash.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
