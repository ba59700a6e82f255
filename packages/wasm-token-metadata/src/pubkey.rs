//! Solana public key helpers.
//!
//! Parameter records coming from JavaScript carry keys as base58 strings. The `base58`
//! and `base58_option` modules plug into `#[serde(with = ...)]` so records can hold
//! real `Pubkey` values while accepting strings on the wire.

use crate::error::TokenMetadataError;
use std::str::FromStr;

/// Re-export the underlying Solana Pubkey type.
pub use solana_sdk::pubkey::Pubkey;

/// Extension trait for Pubkey to add crate-level error handling.
pub trait PubkeyExt {
    fn from_base58(address: &str) -> Result<Pubkey, TokenMetadataError>;
    fn from_bytes_checked(bytes: &[u8]) -> Result<Pubkey, TokenMetadataError>;
}

impl PubkeyExt for Pubkey {
    /// Create a Pubkey from a base58 string.
    fn from_base58(address: &str) -> Result<Pubkey, TokenMetadataError> {
        Pubkey::from_str(address)
            .map_err(|e| TokenMetadataError::InvalidPubkey(format!("{}: {}", address, e)))
    }

    /// Create a Pubkey from a byte slice with length validation.
    fn from_bytes_checked(bytes: &[u8]) -> Result<Pubkey, TokenMetadataError> {
        let array: [u8; 32] = bytes.try_into().map_err(|_| {
            TokenMetadataError::InvalidPubkey(format!(
                "expected 32 bytes, got {}",
                bytes.len()
            ))
        })?;

        Ok(Pubkey::from(array))
    }
}

/// Serde adapter reading and writing a `Pubkey` as a base58 string.
pub mod base58 {
    use super::{Pubkey, PubkeyExt};
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(pubkey: &Pubkey, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&pubkey.to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Pubkey, D::Error> {
        let address = String::deserialize(deserializer)?;
        Pubkey::from_base58(&address).map_err(D::Error::custom)
    }
}

/// Serde adapter for `Option<Pubkey>`; a missing or null value maps to `None`.
pub mod base58_option {
    use super::{Pubkey, PubkeyExt};
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        pubkey: &Option<Pubkey>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match pubkey {
            Some(pubkey) => serializer.serialize_some(&pubkey.to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Pubkey>, D::Error> {
        Option::<String>::deserialize(deserializer)?
            .map(|address| Pubkey::from_base58(&address).map_err(D::Error::custom))
            .transpose()
    }
}
