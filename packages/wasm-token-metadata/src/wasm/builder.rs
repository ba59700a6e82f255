//! WASM binding for instruction building.
//!
//! Every method takes a camelCase params object (keys as base58 strings, u64 fields as
//! number or BigInt) and returns
//! `{ programId, accounts: [{ pubkey, isSigner, isWritable }], data: Uint8Array }`.

use serde::de::DeserializeOwned;
use solana_sdk::instruction::Instruction;
use wasm_bindgen::prelude::*;

use crate::builder::{self, legacy};
use crate::error::TokenMetadataError;
use crate::wasm::try_into_js_value::TryIntoJsValue;

/// Deserialize `params`, run `build_fn` and convert the result for JavaScript.
fn build_with<P: DeserializeOwned>(
    params: JsValue,
    build_fn: fn(&P) -> Result<Instruction, TokenMetadataError>,
) -> Result<JsValue, JsValue> {
    let params: P = serde_wasm_bindgen::from_value(params)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse instruction params: {}", e)))?;
    let instruction = build_fn(&params)?;
    Ok(instruction.try_to_js_value()?)
}

/// Namespace for instruction building operations.
#[wasm_bindgen]
pub struct BuilderNamespace;

#[wasm_bindgen]
impl BuilderNamespace {
    /// Build a CreateMetadataAccount instruction.
    ///
    /// ```json
    /// {
    ///   "metadata": "...", "mint": "...", "mintAuthority": "...", "payer": "...",
    ///   "updateAuthority": "...", "updateAuthorityIsSigner": false, "isMutable": true,
    ///   "data": {
    ///     "name": "Token", "symbol": "TKN", "uri": "https://...",
    ///     "sellerFeeBasisPoints": 500,
    ///     "creators": [{ "address": "...", "verified": false, "share": 100 }]
    ///   }
    /// }
    /// ```
    #[wasm_bindgen]
    pub fn create_metadata_account(params: JsValue) -> Result<JsValue, JsValue> {
        build_with(params, builder::create_metadata_account)
    }

    /// Build an UpdateMetadataAccount instruction. `newUpdateAuthority`, `data` and
    /// `primarySaleHappened` are optional.
    #[wasm_bindgen]
    pub fn update_metadata_account(params: JsValue) -> Result<JsValue, JsValue> {
        build_with(params, builder::update_metadata_account)
    }

    #[wasm_bindgen]
    pub fn update_primary_sale_happened_via_token(params: JsValue) -> Result<JsValue, JsValue> {
        build_with(params, builder::update_primary_sale_happened_via_token)
    }

    #[wasm_bindgen]
    pub fn sign_metadata(params: JsValue) -> Result<JsValue, JsValue> {
        build_with(params, builder::sign_metadata)
    }

    #[wasm_bindgen]
    pub fn puff_metadata(params: JsValue) -> Result<JsValue, JsValue> {
        build_with(params, builder::puff_metadata)
    }

    /// Build a CreateMasterEdition instruction. Omit `maxSupply` for unlimited prints.
    #[wasm_bindgen]
    pub fn create_master_edition(params: JsValue) -> Result<JsValue, JsValue> {
        build_with(params, builder::create_master_edition)
    }

    #[wasm_bindgen]
    pub fn mint_new_edition_from_master_edition_via_token(
        params: JsValue,
    ) -> Result<JsValue, JsValue> {
        build_with(params, builder::mint_new_edition_from_master_edition_via_token)
    }

    #[wasm_bindgen]
    pub fn convert_master_edition_v1_to_v2(params: JsValue) -> Result<JsValue, JsValue> {
        build_with(params, builder::convert_master_edition_v1_to_v2)
    }

    /// `tokenVaultProgram` defaults to the Metaplex token vault program.
    #[wasm_bindgen]
    pub fn mint_new_edition_from_master_edition_via_vault_proxy(
        params: JsValue,
    ) -> Result<JsValue, JsValue> {
        build_with(
            params,
            builder::mint_new_edition_from_master_edition_via_vault_proxy,
        )
    }

    // Legacy instructions

    #[wasm_bindgen]
    pub fn deprecated_create_master_edition(params: JsValue) -> Result<JsValue, JsValue> {
        build_with(params, legacy::deprecated_create_master_edition)
    }

    #[wasm_bindgen]
    pub fn deprecated_mint_new_edition_from_master_edition_via_printing_token(
        params: JsValue,
    ) -> Result<JsValue, JsValue> {
        build_with(
            params,
            legacy::deprecated_mint_new_edition_from_master_edition_via_printing_token,
        )
    }

    #[wasm_bindgen]
    pub fn deprecated_set_reservation_list(params: JsValue) -> Result<JsValue, JsValue> {
        build_with(params, legacy::deprecated_set_reservation_list)
    }

    #[wasm_bindgen]
    pub fn deprecated_create_reservation_list(params: JsValue) -> Result<JsValue, JsValue> {
        build_with(params, legacy::deprecated_create_reservation_list)
    }

    #[wasm_bindgen]
    pub fn deprecated_mint_printing_tokens_via_token(
        params: JsValue,
    ) -> Result<JsValue, JsValue> {
        build_with(params, legacy::deprecated_mint_printing_tokens_via_token)
    }

    #[wasm_bindgen]
    pub fn deprecated_mint_printing_tokens(params: JsValue) -> Result<JsValue, JsValue> {
        build_with(params, legacy::deprecated_mint_printing_tokens)
    }
}
