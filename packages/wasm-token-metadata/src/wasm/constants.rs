//! Program ID constants and PDA helpers exported via WASM.
//!
//! These allow JavaScript code to reference the Token Metadata program and derive its
//! accounts without needing to import @metaplex-foundation packages.

use wasm_bindgen::prelude::*;

use crate::pda::{
    find_edition_marker_address as find_edition_marker, find_master_edition_address as find_edition,
    find_metadata_address as find_metadata, EDITION_MARKER_BIT_SIZE,
};
use crate::program_ids::{
    SYSTEM_PROGRAM_ID, SYSVAR_RENT_ID, TOKEN_METADATA_PROGRAM_ID, TOKEN_PROGRAM_ID,
    TOKEN_VAULT_PROGRAM_ID,
};
use crate::pubkey::{Pubkey, PubkeyExt};

/// Token Metadata Program ID
#[wasm_bindgen]
pub fn token_metadata_program_id() -> String {
    TOKEN_METADATA_PROGRAM_ID.to_string()
}

/// Token Vault Program ID (Metaplex)
#[wasm_bindgen]
pub fn token_vault_program_id() -> String {
    TOKEN_VAULT_PROGRAM_ID.to_string()
}

/// System Program ID
#[wasm_bindgen]
pub fn system_program_id() -> String {
    SYSTEM_PROGRAM_ID.to_string()
}

/// Token Program ID (SPL Token)
#[wasm_bindgen]
pub fn token_program_id() -> String {
    TOKEN_PROGRAM_ID.to_string()
}

/// Rent sysvar address
#[wasm_bindgen]
pub fn sysvar_rent() -> String {
    SYSVAR_RENT_ID.to_string()
}

/// Number of print editions covered by one edition marker account (248)
#[wasm_bindgen]
pub fn edition_marker_bit_size() -> u64 {
    EDITION_MARKER_BIT_SIZE
}

/// Derive the metadata account address for a mint.
///
/// Seeds: ["metadata", token_metadata_program_id, mint]
///
/// @param mint_address - Token mint address (base58)
/// @returns The derived metadata address (base58)
#[wasm_bindgen]
pub fn find_metadata_address(mint_address: &str) -> Result<String, JsValue> {
    let mint = Pubkey::from_base58(mint_address)?;
    let (metadata, _bump) = find_metadata(&mint);
    Ok(metadata.to_string())
}

/// Derive the master edition (or print edition) address for a mint.
///
/// Seeds: ["metadata", token_metadata_program_id, mint, "edition"]
///
/// @param mint_address - Token mint address (base58)
/// @returns The derived edition address (base58)
#[wasm_bindgen]
pub fn find_master_edition_address(mint_address: &str) -> Result<String, JsValue> {
    let mint = Pubkey::from_base58(mint_address)?;
    let (edition, _bump) = find_edition(&mint);
    Ok(edition.to_string())
}

/// Derive the edition marker address tracking print `edition` of a master mint.
///
/// Seeds: ["metadata", token_metadata_program_id, mint, "edition", floor(edition / 248)]
///
/// @param mint_address - Master edition mint address (base58)
/// @param edition - Print edition number
/// @returns The derived edition marker address (base58)
#[wasm_bindgen]
pub fn find_edition_marker_address(mint_address: &str, edition: u64) -> Result<String, JsValue> {
    let mint = Pubkey::from_base58(mint_address)?;
    let (marker, _bump) = find_edition_marker(&mint, edition);
    Ok(marker.to_string())
}
