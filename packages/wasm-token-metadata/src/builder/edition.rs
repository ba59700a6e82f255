//! Builders for master edition and print edition instructions.

use solana_sdk::instruction::{AccountMeta, Instruction};

use super::build;
use super::types::*;
use crate::error::TokenMetadataError;
use crate::instruction::{
    CreateMasterEditionArgs, MetadataInstruction, MintNewEditionFromMasterEditionViaTokenArgs,
};
use crate::program_ids::{SYSTEM_PROGRAM_ID, SYSVAR_RENT_ID, TOKEN_PROGRAM_ID};

/// Build a CreateMasterEdition instruction (master edition V2).
///
/// ### Accounts
///  0. `[WRITE]` Edition account
///  1. `[WRITE]` Mint
///  2. `[SIGNER]` Update authority
///  3. `[SIGNER]` Mint authority
///  4. `[WRITE, SIGNER]` Payer
///  5. `[READ]` Metadata account
///  6. `[READ]` Token program
///  7. `[READ]` System program
///  8. `[READ]` Rent sysvar
pub fn create_master_edition(
    params: &CreateMasterEditionParams,
) -> Result<Instruction, TokenMetadataError> {
    build(
        MetadataInstruction::CreateMasterEdition(CreateMasterEditionArgs {
            max_supply: params.max_supply,
        }),
        vec![
            AccountMeta::new(params.edition, false),
            AccountMeta::new(params.mint, false),
            AccountMeta::new_readonly(params.update_authority, true),
            AccountMeta::new_readonly(params.mint_authority, true),
            AccountMeta::new(params.payer, true),
            AccountMeta::new_readonly(params.metadata, false),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
            AccountMeta::new_readonly(SYSTEM_PROGRAM_ID, false),
            AccountMeta::new_readonly(SYSVAR_RENT_ID, false),
        ],
    )
}

/// Build a MintNewEditionFromMasterEditionViaToken instruction.
///
/// ### Accounts
///  0. `[WRITE]` New metadata account
///  1. `[WRITE]` New edition account
///  2. `[WRITE]` Master edition account
///  3. `[WRITE]` New mint
///  4. `[WRITE]` Edition marker
///  5. `[SIGNER]` New mint authority
///  6. `[WRITE, SIGNER]` Payer
///  7. `[SIGNER]` Owner of the master token account
///  8. `[READ]` Master token account
///  9. `[READ]` Update authority for the new metadata
/// 10. `[READ]` Master metadata account
/// 11. `[READ]` Token program
/// 12. `[READ]` System program
/// 13. `[READ]` Rent sysvar
pub fn mint_new_edition_from_master_edition_via_token(
    params: &MintNewEditionFromMasterEditionViaTokenParams,
) -> Result<Instruction, TokenMetadataError> {
    build(
        MetadataInstruction::MintNewEditionFromMasterEditionViaToken(
            MintNewEditionFromMasterEditionViaTokenArgs {
                edition: params.edition,
            },
        ),
        vec![
            AccountMeta::new(params.new_metadata, false),
            AccountMeta::new(params.new_edition, false),
            AccountMeta::new(params.master_edition, false),
            AccountMeta::new(params.new_mint, false),
            AccountMeta::new(params.edition_mark, false),
            AccountMeta::new_readonly(params.new_mint_authority, true),
            AccountMeta::new(params.payer, true),
            AccountMeta::new_readonly(params.token_account_owner, true),
            AccountMeta::new_readonly(params.token_account, false),
            AccountMeta::new_readonly(params.new_metadata_update_authority, false),
            AccountMeta::new_readonly(params.master_metadata, false),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
            AccountMeta::new_readonly(SYSTEM_PROGRAM_ID, false),
            AccountMeta::new_readonly(SYSVAR_RENT_ID, false),
        ],
    )
}

/// Build a ConvertMasterEditionV1ToV2 instruction. All accounts are writable, none sign.
pub fn convert_master_edition_v1_to_v2(
    params: &ConvertMasterEditionV1ToV2Params,
) -> Result<Instruction, TokenMetadataError> {
    build(
        MetadataInstruction::ConvertMasterEditionV1ToV2,
        vec![
            AccountMeta::new(params.master_edition, false),
            AccountMeta::new(params.one_time_auth, false),
            AccountMeta::new(params.printing_mint, false),
        ],
    )
}

/// Build a MintNewEditionFromMasterEditionViaVaultProxy instruction.
///
/// Same as [`mint_new_edition_from_master_edition_via_token`] except the master token
/// sits in a token vault safety deposit box and the vault authority signs.
///
/// ### Accounts
///  0-6. As for the via-token mint
///  7. `[SIGNER]` Vault authority
///  8. `[READ]` Safety deposit token store
///  9. `[READ]` Safety deposit box
/// 10. `[READ]` Vault
/// 11. `[READ]` Update authority for the new metadata
/// 12. `[READ]` Master metadata account
/// 13. `[READ]` Token program
/// 14. `[READ]` Token vault program
/// 15. `[READ]` System program
/// 16. `[READ]` Rent sysvar
pub fn mint_new_edition_from_master_edition_via_vault_proxy(
    params: &MintNewEditionFromMasterEditionViaVaultProxyParams,
) -> Result<Instruction, TokenMetadataError> {
    build(
        MetadataInstruction::MintNewEditionFromMasterEditionViaVaultProxy(
            MintNewEditionFromMasterEditionViaTokenArgs {
                edition: params.edition,
            },
        ),
        vec![
            AccountMeta::new(params.new_metadata, false),
            AccountMeta::new(params.new_edition, false),
            AccountMeta::new(params.master_edition, false),
            AccountMeta::new(params.new_mint, false),
            AccountMeta::new(params.edition_mark, false),
            AccountMeta::new_readonly(params.new_mint_authority, true),
            AccountMeta::new(params.payer, true),
            AccountMeta::new_readonly(params.vault_authority, true),
            AccountMeta::new_readonly(params.safety_deposit_store, false),
            AccountMeta::new_readonly(params.safety_deposit_box, false),
            AccountMeta::new_readonly(params.vault, false),
            AccountMeta::new_readonly(params.new_metadata_update_authority, false),
            AccountMeta::new_readonly(params.master_metadata, false),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
            AccountMeta::new_readonly(params.token_vault_program, false),
            AccountMeta::new_readonly(SYSTEM_PROGRAM_ID, false),
            AccountMeta::new_readonly(SYSVAR_RENT_ID, false),
        ],
    )
}
