use serde::{Deserialize, Serialize};

use crate::constants::{MAX_WITNESS_SIZE, SECP256K1_DATA_HASH, SECP256K1_DATA_SIZE};
use crate::error::{ErrorCode, LockError};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LockConfig {
    /// Content hash the secp256k1 data dependency is looked up by.
    #[serde(with = "hex")]
    pub context_data_hash: [u8; 32],
    pub context_data_size: usize,
    /// Upper bound for witness #0. Values above the fixed buffer are clamped.
    pub max_witness_size: usize,
}

impl Default for LockConfig {
    fn default() -> Self {
        Self {
            context_data_hash: SECP256K1_DATA_HASH,
            context_data_size: SECP256K1_DATA_SIZE,
            max_witness_size: MAX_WITNESS_SIZE,
        }
    }
}

impl LockConfig {
    pub fn witness_bound(&self) -> usize {
        self.max_witness_size.min(MAX_WITNESS_SIZE)
    }

    pub fn validate(&self) -> Result<(), LockError> {
        if self.context_data_size == 0 {
            return Err(LockError::new(
                ErrorCode::ConfigLoadError,
                "context_data_size must be non-zero",
            ));
        }
        if self.context_data_size > SECP256K1_DATA_SIZE {
            return Err(LockError::new(
                ErrorCode::ConfigLoadError,
                "context_data_size exceeds secp256k1 data size",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let cfg: LockConfig = serde_json::from_str(r#"{"max_witness_size": 1024}"#).expect("cfg");
        assert_eq!(cfg.max_witness_size, 1024);
        assert_eq!(cfg.context_data_size, SECP256K1_DATA_SIZE);
        assert_eq!(cfg.context_data_hash, SECP256K1_DATA_HASH);
    }

    #[test]
    fn context_hash_is_hex() {
        let cfg = LockConfig {
            context_data_hash: [0xab; 32],
            ..LockConfig::default()
        };
        let v = serde_json::to_value(&cfg).expect("json");
        assert_eq!(v["context_data_hash"], "ab".repeat(32));
        let back: LockConfig = serde_json::from_value(v).expect("roundtrip");
        assert_eq!(back, cfg);
    }

    #[test]
    fn witness_bound_is_clamped() {
        let cfg = LockConfig {
            max_witness_size: MAX_WITNESS_SIZE * 4,
            ..LockConfig::default()
        };
        assert_eq!(cfg.witness_bound(), MAX_WITNESS_SIZE);
    }

    #[test]
    fn zero_context_size_rejected() {
        let cfg = LockConfig {
            context_data_size: 0,
            ..LockConfig::default()
        };
        assert_eq!(cfg.validate().unwrap_err().code, ErrorCode::ConfigLoadError);
    }

    #[test]
    fn oversized_context_size_rejected() {
        for size in [SECP256K1_DATA_SIZE + 1, usize::MAX] {
            let cfg = LockConfig {
                context_data_size: size,
                ..LockConfig::default()
            };
            assert_eq!(
                cfg.validate().unwrap_err().code,
                ErrorCode::ConfigLoadError,
                "size={size}"
            );
        }
        let cfg = LockConfig {
            context_data_size: SECP256K1_DATA_SIZE,
            ..LockConfig::default()
        };
        assert!(cfg.validate().is_ok());
    }
}
