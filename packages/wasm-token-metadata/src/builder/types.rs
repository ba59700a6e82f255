//! Parameter records for instruction building.
//!
//! These types are deserialized from JavaScript via serde. Keys travel as base58 strings
//! and field names are camelCase; in Rust they are plain structs with `Pubkey` fields.

use serde::Deserialize;
use solana_sdk::pubkey::Pubkey;

use crate::program_ids::TOKEN_VAULT_PROGRAM_ID;
use crate::state::{Data, Reservation};

fn default_token_vault_program() -> Pubkey {
    TOKEN_VAULT_PROGRAM_ID
}

// ===== Metadata =====

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMetadataAccountParams {
    /// Metadata PDA of `["metadata", program id, mint]`.
    #[serde(with = "crate::pubkey::base58")]
    pub metadata: Pubkey,
    #[serde(with = "crate::pubkey::base58")]
    pub mint: Pubkey,
    #[serde(with = "crate::pubkey::base58")]
    pub mint_authority: Pubkey,
    #[serde(with = "crate::pubkey::base58")]
    pub payer: Pubkey,
    #[serde(with = "crate::pubkey::base58")]
    pub update_authority: Pubkey,
    #[serde(default)]
    pub update_authority_is_signer: bool,
    pub is_mutable: bool,
    pub data: Data,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMetadataAccountParams {
    #[serde(with = "crate::pubkey::base58")]
    pub metadata: Pubkey,
    /// Current update authority, must sign.
    #[serde(with = "crate::pubkey::base58")]
    pub update_authority: Pubkey,
    #[serde(default, with = "crate::pubkey::base58_option")]
    pub new_update_authority: Option<Pubkey>,
    #[serde(default)]
    pub data: Option<Data>,
    #[serde(default)]
    pub primary_sale_happened: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePrimarySaleHappenedViaTokenParams {
    #[serde(with = "crate::pubkey::base58")]
    pub metadata: Pubkey,
    /// Owner of `token`, must sign.
    #[serde(with = "crate::pubkey::base58")]
    pub owner: Pubkey,
    /// Token account holding the metadata's mint.
    #[serde(with = "crate::pubkey::base58")]
    pub token: Pubkey,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignMetadataParams {
    #[serde(with = "crate::pubkey::base58")]
    pub metadata: Pubkey,
    #[serde(with = "crate::pubkey::base58")]
    pub creator: Pubkey,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PuffMetadataParams {
    #[serde(with = "crate::pubkey::base58")]
    pub metadata: Pubkey,
}

// ===== Editions =====

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMasterEditionParams {
    /// Edition PDA of `["metadata", program id, mint, "edition"]`.
    #[serde(with = "crate::pubkey::base58")]
    pub edition: Pubkey,
    #[serde(with = "crate::pubkey::base58")]
    pub mint: Pubkey,
    #[serde(with = "crate::pubkey::base58")]
    pub update_authority: Pubkey,
    /// Mint authority of `mint`; authority moves to the edition account.
    #[serde(with = "crate::pubkey::base58")]
    pub mint_authority: Pubkey,
    #[serde(with = "crate::pubkey::base58")]
    pub metadata: Pubkey,
    #[serde(with = "crate::pubkey::base58")]
    pub payer: Pubkey,
    #[serde(default)]
    pub max_supply: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MintNewEditionFromMasterEditionViaTokenParams {
    #[serde(with = "crate::pubkey::base58")]
    pub new_metadata: Pubkey,
    #[serde(with = "crate::pubkey::base58")]
    pub new_edition: Pubkey,
    #[serde(with = "crate::pubkey::base58")]
    pub master_edition: Pubkey,
    #[serde(with = "crate::pubkey::base58")]
    pub new_mint: Pubkey,
    /// Edition marker PDA covering `edition`.
    #[serde(with = "crate::pubkey::base58")]
    pub edition_mark: Pubkey,
    #[serde(with = "crate::pubkey::base58")]
    pub new_mint_authority: Pubkey,
    #[serde(with = "crate::pubkey::base58")]
    pub payer: Pubkey,
    #[serde(with = "crate::pubkey::base58")]
    pub token_account_owner: Pubkey,
    /// Token account holding the master edition token.
    #[serde(with = "crate::pubkey::base58")]
    pub token_account: Pubkey,
    #[serde(with = "crate::pubkey::base58")]
    pub new_metadata_update_authority: Pubkey,
    #[serde(with = "crate::pubkey::base58")]
    pub master_metadata: Pubkey,
    pub edition: u64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConvertMasterEditionV1ToV2Params {
    #[serde(with = "crate::pubkey::base58")]
    pub master_edition: Pubkey,
    #[serde(with = "crate::pubkey::base58")]
    pub one_time_auth: Pubkey,
    #[serde(with = "crate::pubkey::base58")]
    pub printing_mint: Pubkey,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MintNewEditionFromMasterEditionViaVaultProxyParams {
    #[serde(with = "crate::pubkey::base58")]
    pub new_metadata: Pubkey,
    #[serde(with = "crate::pubkey::base58")]
    pub new_edition: Pubkey,
    #[serde(with = "crate::pubkey::base58")]
    pub master_edition: Pubkey,
    #[serde(with = "crate::pubkey::base58")]
    pub new_mint: Pubkey,
    #[serde(with = "crate::pubkey::base58")]
    pub edition_mark: Pubkey,
    #[serde(with = "crate::pubkey::base58")]
    pub new_mint_authority: Pubkey,
    #[serde(with = "crate::pubkey::base58")]
    pub payer: Pubkey,
    #[serde(with = "crate::pubkey::base58")]
    pub vault_authority: Pubkey,
    #[serde(with = "crate::pubkey::base58")]
    pub safety_deposit_store: Pubkey,
    #[serde(with = "crate::pubkey::base58")]
    pub safety_deposit_box: Pubkey,
    #[serde(with = "crate::pubkey::base58")]
    pub vault: Pubkey,
    #[serde(with = "crate::pubkey::base58")]
    pub new_metadata_update_authority: Pubkey,
    #[serde(with = "crate::pubkey::base58")]
    pub master_metadata: Pubkey,
    /// Defaults to the Metaplex Token Vault program when omitted from JavaScript.
    #[serde(
        with = "crate::pubkey::base58",
        default = "default_token_vault_program"
    )]
    pub token_vault_program: Pubkey,
    pub edition: u64,
}

// ===== Legacy =====

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeprecatedCreateMasterEditionParams {
    #[serde(with = "crate::pubkey::base58")]
    pub edition: Pubkey,
    #[serde(with = "crate::pubkey::base58")]
    pub mint: Pubkey,
    #[serde(with = "crate::pubkey::base58")]
    pub printing_mint: Pubkey,
    #[serde(with = "crate::pubkey::base58")]
    pub one_time_printing_authorization_mint: Pubkey,
    #[serde(with = "crate::pubkey::base58")]
    pub update_authority: Pubkey,
    #[serde(with = "crate::pubkey::base58")]
    pub printing_mint_authority: Pubkey,
    #[serde(with = "crate::pubkey::base58")]
    pub mint_authority: Pubkey,
    #[serde(with = "crate::pubkey::base58")]
    pub metadata: Pubkey,
    #[serde(with = "crate::pubkey::base58")]
    pub payer: Pubkey,
    #[serde(with = "crate::pubkey::base58")]
    pub one_time_printing_authorization_mint_authority: Pubkey,
    #[serde(default)]
    pub max_supply: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeprecatedMintNewEditionFromMasterEditionViaPrintingTokenParams {
    #[serde(with = "crate::pubkey::base58")]
    pub metadata: Pubkey,
    #[serde(with = "crate::pubkey::base58")]
    pub edition: Pubkey,
    #[serde(with = "crate::pubkey::base58")]
    pub master_edition: Pubkey,
    #[serde(with = "crate::pubkey::base58")]
    pub mint: Pubkey,
    #[serde(with = "crate::pubkey::base58")]
    pub mint_authority: Pubkey,
    #[serde(with = "crate::pubkey::base58")]
    pub printing_mint: Pubkey,
    #[serde(with = "crate::pubkey::base58")]
    pub master_token_account: Pubkey,
    #[serde(with = "crate::pubkey::base58")]
    pub edition_marker: Pubkey,
    #[serde(with = "crate::pubkey::base58")]
    pub burn_authority: Pubkey,
    #[serde(with = "crate::pubkey::base58")]
    pub payer: Pubkey,
    #[serde(with = "crate::pubkey::base58")]
    pub master_update_authority: Pubkey,
    #[serde(with = "crate::pubkey::base58")]
    pub master_metadata: Pubkey,
    /// Appended as a trailing writable account when present.
    #[serde(default, with = "crate::pubkey::base58_option")]
    pub reservation_list: Option<Pubkey>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeprecatedSetReservationListParams {
    #[serde(with = "crate::pubkey::base58")]
    pub master_edition: Pubkey,
    #[serde(with = "crate::pubkey::base58")]
    pub reservation_list: Pubkey,
    /// Resource the reservation list is tied to, must sign.
    #[serde(with = "crate::pubkey::base58")]
    pub resource: Pubkey,
    pub reservations: Vec<Reservation>,
    #[serde(default)]
    pub total_reservation_spots: Option<u64>,
    pub offset: u64,
    pub total_spot_offset: u64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeprecatedCreateReservationListParams {
    #[serde(with = "crate::pubkey::base58")]
    pub reservation_list: Pubkey,
    #[serde(with = "crate::pubkey::base58")]
    pub payer: Pubkey,
    #[serde(with = "crate::pubkey::base58")]
    pub update_authority: Pubkey,
    #[serde(with = "crate::pubkey::base58")]
    pub master_edition: Pubkey,
    #[serde(with = "crate::pubkey::base58")]
    pub resource: Pubkey,
    #[serde(with = "crate::pubkey::base58")]
    pub metadata: Pubkey,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeprecatedMintPrintingTokensViaTokenParams {
    #[serde(with = "crate::pubkey::base58")]
    pub destination: Pubkey,
    /// Token account holding the one time authorization token.
    #[serde(with = "crate::pubkey::base58")]
    pub token: Pubkey,
    #[serde(with = "crate::pubkey::base58")]
    pub one_time_printing_authorization_mint: Pubkey,
    #[serde(with = "crate::pubkey::base58")]
    pub printing_mint: Pubkey,
    #[serde(with = "crate::pubkey::base58")]
    pub burn_authority: Pubkey,
    #[serde(with = "crate::pubkey::base58")]
    pub metadata: Pubkey,
    #[serde(with = "crate::pubkey::base58")]
    pub master_edition: Pubkey,
    pub supply: u64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeprecatedMintPrintingTokensParams {
    #[serde(with = "crate::pubkey::base58")]
    pub destination: Pubkey,
    #[serde(with = "crate::pubkey::base58")]
    pub printing_mint: Pubkey,
    #[serde(with = "crate::pubkey::base58")]
    pub update_authority: Pubkey,
    #[serde(with = "crate::pubkey::base58")]
    pub metadata: Pubkey,
    #[serde(with = "crate::pubkey::base58")]
    pub master_edition: Pubkey,
    pub supply: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vault_program_defaults() {
        let key = "FKjSjCqByQRwSzZoMXA7bKnDbJe41YgJTHFFzBeC42bH";
        let params: MintNewEditionFromMasterEditionViaVaultProxyParams =
            serde_json::from_value(serde_json::json!({
                "newMetadata": key,
                "newEdition": key,
                "masterEdition": key,
                "newMint": key,
                "editionMark": key,
                "newMintAuthority": key,
                "payer": key,
                "vaultAuthority": key,
                "safetyDepositStore": key,
                "safetyDepositBox": key,
                "vault": key,
                "newMetadataUpdateAuthority": key,
                "masterMetadata": key,
                "edition": 7
            }))
            .unwrap();
        assert_eq!(params.token_vault_program, TOKEN_VAULT_PROGRAM_ID);
        assert_eq!(params.edition, 7);
    }

    #[test]
    fn test_create_metadata_signer_flag_defaults_false() {
        let key = "11111111111111111111111111111111";
        let params: CreateMetadataAccountParams = serde_json::from_value(serde_json::json!({
            "metadata": key,
            "mint": key,
            "mintAuthority": key,
            "payer": key,
            "updateAuthority": key,
            "isMutable": true,
            "data": {
                "name": "n",
                "symbol": "s",
                "uri": "u",
                "sellerFeeBasisPoints": 0
            }
        }))
        .unwrap();
        assert!(!params.update_authority_is_signer);
        assert_eq!(params.data.creators, None);
    }

    #[test]
    fn test_missing_key_is_rejected() {
        let result = serde_json::from_value::<SignMetadataParams>(serde_json::json!({
            "metadata": "11111111111111111111111111111111"
        }));
        assert!(result.unwrap_err().to_string().contains("creator"));
    }
}
