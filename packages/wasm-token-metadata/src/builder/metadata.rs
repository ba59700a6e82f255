//! Builders for instructions that create or modify a metadata account.

use solana_sdk::instruction::{AccountMeta, Instruction};

use super::build;
use super::types::*;
use crate::error::TokenMetadataError;
use crate::instruction::{CreateMetadataAccountArgs, MetadataInstruction, UpdateMetadataAccountArgs};
use crate::program_ids::{SYSTEM_PROGRAM_ID, SYSVAR_RENT_ID};

/// Build a CreateMetadataAccount instruction.
///
/// ### Accounts
///  0. `[WRITE]` Metadata account
///  1. `[READ]` Mint
///  2. `[SIGNER]` Mint authority
///  3. `[WRITE, SIGNER]` Payer
///  4. `[READ]` Update authority, signer when `update_authority_is_signer`
///  5. `[READ]` System program
///  6. `[READ]` Rent sysvar
pub fn create_metadata_account(
    params: &CreateMetadataAccountParams,
) -> Result<Instruction, TokenMetadataError> {
    build(
        MetadataInstruction::CreateMetadataAccount(CreateMetadataAccountArgs {
            data: params.data.clone(),
            is_mutable: params.is_mutable,
        }),
        vec![
            AccountMeta::new(params.metadata, false),
            AccountMeta::new_readonly(params.mint, false),
            AccountMeta::new_readonly(params.mint_authority, true),
            AccountMeta::new(params.payer, true),
            AccountMeta::new_readonly(params.update_authority, params.update_authority_is_signer),
            AccountMeta::new_readonly(SYSTEM_PROGRAM_ID, false),
            AccountMeta::new_readonly(SYSVAR_RENT_ID, false),
        ],
    )
}

/// Build an UpdateMetadataAccount instruction.
///
/// ### Accounts
///  0. `[WRITE]` Metadata account
///  1. `[SIGNER]` Update authority
pub fn update_metadata_account(
    params: &UpdateMetadataAccountParams,
) -> Result<Instruction, TokenMetadataError> {
    build(
        MetadataInstruction::UpdateMetadataAccount(UpdateMetadataAccountArgs {
            data: params.data.clone(),
            update_authority: params.new_update_authority,
            primary_sale_happened: params.primary_sale_happened,
        }),
        vec![
            AccountMeta::new(params.metadata, false),
            AccountMeta::new_readonly(params.update_authority, true),
        ],
    )
}

/// Build an UpdatePrimarySaleHappenedViaToken instruction.
///
/// ### Accounts
///  0. `[WRITE]` Metadata account
///  1. `[SIGNER]` Owner of the token account
///  2. `[READ]` Token account holding the metadata's mint
pub fn update_primary_sale_happened_via_token(
    params: &UpdatePrimarySaleHappenedViaTokenParams,
) -> Result<Instruction, TokenMetadataError> {
    build(
        MetadataInstruction::UpdatePrimarySaleHappenedViaToken,
        vec![
            AccountMeta::new(params.metadata, false),
            AccountMeta::new_readonly(params.owner, true),
            AccountMeta::new_readonly(params.token, false),
        ],
    )
}

/// Build a SignMetadata instruction, verifying `creator` on the metadata.
///
/// ### Accounts
///  0. `[WRITE]` Metadata account
///  1. `[SIGNER]` Creator
pub fn sign_metadata(params: &SignMetadataParams) -> Result<Instruction, TokenMetadataError> {
    build(
        MetadataInstruction::SignMetadata,
        vec![
            AccountMeta::new(params.metadata, false),
            AccountMeta::new_readonly(params.creator, true),
        ],
    )
}

/// Build a PuffMetadata instruction. Permissionless.
pub fn puff_metadata(params: &PuffMetadataParams) -> Result<Instruction, TokenMetadataError> {
    build(
        MetadataInstruction::PuffMetadata,
        vec![AccountMeta::new(params.metadata, false)],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::test_utils::{flags, key, metas};
    use crate::instruction::InstructionKind;
    use crate::program_ids::TOKEN_METADATA_PROGRAM_ID;
    use crate::state::{Creator, Data};

    fn sample_data() -> Data {
        Data {
            name: "A".to_string(),
            symbol: "B".to_string(),
            uri: "C".to_string(),
            seller_fee_basis_points: 500,
            creators: None,
        }
    }

    fn create_params() -> CreateMetadataAccountParams {
        CreateMetadataAccountParams {
            metadata: key(1),
            mint: key(2),
            mint_authority: key(3),
            payer: key(4),
            update_authority: key(5),
            update_authority_is_signer: false,
            is_mutable: true,
            data: sample_data(),
        }
    }

    #[test]
    fn test_create_metadata_account_layout() {
        let ix = create_metadata_account(&create_params()).unwrap();

        assert_eq!(ix.program_id, TOKEN_METADATA_PROGRAM_ID);
        assert_eq!(
            metas(&ix),
            vec![
                (key(1), false, true),
                (key(2), false, false),
                (key(3), true, false),
                (key(4), true, true),
                (key(5), false, false),
                (SYSTEM_PROGRAM_ID, false, false),
                (SYSVAR_RENT_ID, false, false),
            ]
        );
    }

    #[test]
    fn test_create_metadata_account_data() {
        let ix = create_metadata_account(&create_params()).unwrap();

        // tag, Data, is_mutable
        let mut expected = vec![InstructionKind::CreateMetadataAccount as u8];
        expected.extend(borsh::to_vec(&sample_data()).unwrap());
        expected.push(1);
        assert_eq!(ix.data, expected);
        assert_eq!(hex::encode(&ix.data), "00010000004101000000420100000043f4010001");
    }

    #[test]
    fn test_create_metadata_account_update_authority_signer() {
        let mut params = create_params();
        params.update_authority_is_signer = true;
        params.is_mutable = false;

        let ix = create_metadata_account(&params).unwrap();
        assert_eq!(ix.accounts[4].pubkey, key(5));
        assert!(ix.accounts[4].is_signer);
        assert!(!ix.accounts[4].is_writable);
        assert_eq!(*ix.data.last().unwrap(), 0);
    }

    #[test]
    fn test_create_metadata_account_layout_ignores_key_values() {
        let mut params = create_params();
        // Same key in every slot still yields the fixed flag pattern
        params.metadata = key(9);
        params.mint = key(9);
        params.mint_authority = key(9);
        params.payer = key(9);
        params.update_authority = key(9);

        let ix = create_metadata_account(&params).unwrap();
        assert_eq!(
            flags(&ix),
            flags(&create_metadata_account(&create_params()).unwrap())
        );
    }

    #[test]
    fn test_create_metadata_account_deterministic() {
        let mut params = create_params();
        params.data.creators = Some(vec![
            Creator {
                address: key(6),
                verified: false,
                share: 60,
            },
            Creator {
                address: key(7),
                verified: true,
                share: 40,
            },
        ]);

        let first = create_metadata_account(&params).unwrap();
        let second = create_metadata_account(&params.clone()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_create_metadata_account_field_order_irrelevant() {
        let reordered = CreateMetadataAccountParams {
            data: sample_data(),
            is_mutable: true,
            update_authority_is_signer: false,
            update_authority: key(5),
            payer: key(4),
            mint_authority: key(3),
            mint: key(2),
            metadata: key(1),
        };
        assert_eq!(
            create_metadata_account(&reordered).unwrap(),
            create_metadata_account(&create_params()).unwrap()
        );
    }

    #[test]
    fn test_update_metadata_account() {
        let ix = update_metadata_account(&UpdateMetadataAccountParams {
            metadata: key(1),
            update_authority: key(2),
            new_update_authority: Some(key(3)),
            data: None,
            primary_sale_happened: Some(true),
        })
        .unwrap();

        assert_eq!(metas(&ix), vec![(key(1), false, true), (key(2), true, false)]);

        let mut expected = vec![1, 0, 1];
        expected.extend_from_slice(&[3u8; 32]);
        expected.extend_from_slice(&[1, 1]);
        assert_eq!(ix.data, expected);
    }

    #[test]
    fn test_update_metadata_account_no_changes() {
        let ix = update_metadata_account(&UpdateMetadataAccountParams {
            metadata: key(1),
            update_authority: key(2),
            new_update_authority: None,
            data: None,
            primary_sale_happened: None,
        })
        .unwrap();
        assert_eq!(ix.data, vec![1, 0, 0, 0]);
    }

    #[test]
    fn test_update_primary_sale_happened_via_token() {
        let ix = update_primary_sale_happened_via_token(&UpdatePrimarySaleHappenedViaTokenParams {
            metadata: key(1),
            owner: key(2),
            token: key(3),
        })
        .unwrap();

        assert_eq!(ix.data, vec![4]);
        assert_eq!(
            metas(&ix),
            vec![
                (key(1), false, true),
                (key(2), true, false),
                (key(3), false, false),
            ]
        );
    }

    #[test]
    fn test_sign_metadata() {
        let ix = sign_metadata(&SignMetadataParams {
            metadata: key(1),
            creator: key(2),
        })
        .unwrap();

        assert_eq!(ix.data, vec![7]);
        assert_eq!(metas(&ix), vec![(key(1), false, true), (key(2), true, false)]);
    }

    #[test]
    fn test_puff_metadata() {
        let ix = puff_metadata(&PuffMetadataParams { metadata: key(1) }).unwrap();

        assert_eq!(ix.data, vec![14]);
        assert_eq!(metas(&ix), vec![(key(1), false, true)]);
    }
}
