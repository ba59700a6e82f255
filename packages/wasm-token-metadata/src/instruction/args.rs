//! Argument records carried by instructions that have a payload beyond the tag.

use borsh::{BorshDeserialize, BorshSerialize};
use serde::Serialize;
use solana_sdk::pubkey::Pubkey;

use crate::state::{Data, Reservation};

#[derive(BorshSerialize, BorshDeserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateMetadataAccountArgs {
    pub data: Data,
    /// Whether the metadata can be updated after creation.
    pub is_mutable: bool,
}

/// Each field left as `None` keeps the current on-chain value.
#[derive(BorshSerialize, BorshDeserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMetadataAccountArgs {
    pub data: Option<Data>,
    #[serde(with = "crate::pubkey::base58_option")]
    pub update_authority: Option<Pubkey>,
    pub primary_sale_happened: Option<bool>,
}

#[derive(BorshSerialize, BorshDeserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateMasterEditionArgs {
    /// `None` allows unlimited prints; `Some(0)` forbids printing.
    pub max_supply: Option<u64>,
}

#[derive(BorshSerialize, BorshDeserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SetReservationListArgs {
    pub reservations: Vec<Reservation>,
    /// Only settable on the first call for a given list.
    pub total_reservation_spots: Option<u64>,
    /// Position in the list to start writing at.
    pub offset: u64,
    pub total_spot_offset: u64,
}

#[derive(BorshSerialize, BorshDeserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MintPrintingTokensViaTokenArgs {
    pub supply: u64,
}

#[derive(BorshSerialize, BorshDeserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MintNewEditionFromMasterEditionViaTokenArgs {
    pub edition: u64,
}
