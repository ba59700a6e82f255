//! Metadata content records embedded in instruction payloads.

use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};
use solana_sdk::pubkey::Pubkey;

/// A creator listed on a metadata account. Shares across creators sum to 100.
#[derive(BorshSerialize, BorshDeserialize, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Creator {
    #[serde(with = "crate::pubkey::base58")]
    pub address: Pubkey,
    pub verified: bool,
    /// Percentage of royalties owed to this creator.
    pub share: u8,
}

/// Descriptive content of a token: name, symbol, off-chain URI and royalty split.
#[derive(BorshSerialize, BorshDeserialize, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Data {
    pub name: String,
    pub symbol: String,
    pub uri: String,
    /// Royalty basis points (10000 = 100%) owed on secondary sales.
    pub seller_fee_basis_points: u16,
    #[serde(default)]
    pub creators: Option<Vec<Creator>>,
}

/// Entry of a legacy reservation list.
#[derive(BorshSerialize, BorshDeserialize, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    #[serde(with = "crate::pubkey::base58")]
    pub address: Pubkey,
    pub spots_remaining: u64,
    pub total_spots: u64,
}
