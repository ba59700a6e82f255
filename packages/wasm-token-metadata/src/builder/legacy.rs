//! Builders for legacy Token Metadata instructions.
//!
//! These cover the printing-token and reservation-list model that predates master
//! edition V2. The program still accepts them, so they are kept for tooling that has to
//! reproduce historical transactions. New integrations should use the non-legacy
//! builders in the parent module.

use solana_sdk::instruction::{AccountMeta, Instruction};

use super::build;
use super::types::*;
use crate::error::TokenMetadataError;
use crate::instruction::{
    CreateMasterEditionArgs, MetadataInstruction, MintPrintingTokensViaTokenArgs,
    SetReservationListArgs,
};
use crate::program_ids::{SYSTEM_PROGRAM_ID, SYSVAR_RENT_ID, TOKEN_PROGRAM_ID};

/// Build a master edition V1 creation instruction.
///
/// ### Accounts
///  0. `[WRITE]` Edition account
///  1. `[WRITE]` Mint
///  2. `[WRITE]` Printing mint
///  3. `[WRITE]` One time printing authorization mint
///  4. `[SIGNER]` Update authority
///  5. `[SIGNER]` Printing mint authority
///  6. `[SIGNER]` Mint authority
///  7. `[READ]` Metadata account
///  8. `[SIGNER]` Payer
///  9. `[READ]` Token program
/// 10. `[READ]` System program
/// 11. `[READ]` Rent sysvar
/// 12. `[SIGNER]` One time printing authorization mint authority
pub fn deprecated_create_master_edition(
    params: &DeprecatedCreateMasterEditionParams,
) -> Result<Instruction, TokenMetadataError> {
    build(
        MetadataInstruction::DeprecatedCreateMasterEdition(CreateMasterEditionArgs {
            max_supply: params.max_supply,
        }),
        vec![
            AccountMeta::new(params.edition, false),
            AccountMeta::new(params.mint, false),
            AccountMeta::new(params.printing_mint, false),
            AccountMeta::new(params.one_time_printing_authorization_mint, false),
            AccountMeta::new_readonly(params.update_authority, true),
            AccountMeta::new_readonly(params.printing_mint_authority, true),
            AccountMeta::new_readonly(params.mint_authority, true),
            AccountMeta::new_readonly(params.metadata, false),
            AccountMeta::new_readonly(params.payer, true),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
            AccountMeta::new_readonly(SYSTEM_PROGRAM_ID, false),
            AccountMeta::new_readonly(SYSVAR_RENT_ID, false),
            AccountMeta::new_readonly(params.one_time_printing_authorization_mint_authority, true),
        ],
    )
}

/// Build an edition mint that burns one printing token.
///
/// The reservation list account is appended only when provided.
///
/// ### Accounts
///  0. `[WRITE]` New metadata account
///  1. `[WRITE]` New edition account
///  2. `[WRITE]` Master edition account
///  3. `[WRITE]` New mint
///  4. `[SIGNER]` New mint authority
///  5. `[WRITE]` Printing mint
///  6. `[WRITE]` Token account holding the printing token
///  7. `[WRITE]` Edition marker
///  8. `[SIGNER]` Burn authority
///  9. `[SIGNER]` Payer
/// 10. `[READ]` Master update authority
/// 11. `[READ]` Master metadata account
/// 12. `[READ]` Token program
/// 13. `[READ]` System program
/// 14. `[READ]` Rent sysvar
/// 15. `[WRITE]` Optional reservation list
pub fn deprecated_mint_new_edition_from_master_edition_via_printing_token(
    params: &DeprecatedMintNewEditionFromMasterEditionViaPrintingTokenParams,
) -> Result<Instruction, TokenMetadataError> {
    let mut accounts = vec![
        AccountMeta::new(params.metadata, false),
        AccountMeta::new(params.edition, false),
        AccountMeta::new(params.master_edition, false),
        AccountMeta::new(params.mint, false),
        AccountMeta::new_readonly(params.mint_authority, true),
        AccountMeta::new(params.printing_mint, false),
        AccountMeta::new(params.master_token_account, false),
        AccountMeta::new(params.edition_marker, false),
        AccountMeta::new_readonly(params.burn_authority, true),
        AccountMeta::new_readonly(params.payer, true),
        AccountMeta::new_readonly(params.master_update_authority, false),
        AccountMeta::new_readonly(params.master_metadata, false),
        AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
        AccountMeta::new_readonly(SYSTEM_PROGRAM_ID, false),
        AccountMeta::new_readonly(SYSVAR_RENT_ID, false),
    ];
    if let Some(reservation_list) = params.reservation_list {
        accounts.push(AccountMeta::new(reservation_list, false));
    }

    build(
        MetadataInstruction::DeprecatedMintNewEditionFromMasterEditionViaPrintingToken,
        accounts,
    )
}

/// ### Accounts
///  0. `[WRITE]` Master edition account
///  1. `[WRITE]` Reservation list
///  2. `[SIGNER]` Resource the list was created for
pub fn deprecated_set_reservation_list(
    params: &DeprecatedSetReservationListParams,
) -> Result<Instruction, TokenMetadataError> {
    build(
        MetadataInstruction::DeprecatedSetReservationList(SetReservationListArgs {
            reservations: params.reservations.clone(),
            total_reservation_spots: params.total_reservation_spots,
            offset: params.offset,
            total_spot_offset: params.total_spot_offset,
        }),
        vec![
            AccountMeta::new(params.master_edition, false),
            AccountMeta::new(params.reservation_list, false),
            AccountMeta::new_readonly(params.resource, true),
        ],
    )
}

/// ### Accounts
///  0. `[WRITE]` Reservation list PDA
///  1. `[SIGNER]` Payer
///  2. `[SIGNER]` Update authority
///  3. `[READ]` Master edition account
///  4. `[READ]` Resource
///  5. `[READ]` Metadata account
///  6. `[READ]` System program
///  7. `[READ]` Rent sysvar
pub fn deprecated_create_reservation_list(
    params: &DeprecatedCreateReservationListParams,
) -> Result<Instruction, TokenMetadataError> {
    build(
        MetadataInstruction::DeprecatedCreateReservationList,
        vec![
            AccountMeta::new(params.reservation_list, false),
            AccountMeta::new_readonly(params.payer, true),
            AccountMeta::new_readonly(params.update_authority, true),
            AccountMeta::new_readonly(params.master_edition, false),
            AccountMeta::new_readonly(params.resource, false),
            AccountMeta::new_readonly(params.metadata, false),
            AccountMeta::new_readonly(SYSTEM_PROGRAM_ID, false),
            AccountMeta::new_readonly(SYSVAR_RENT_ID, false),
        ],
    )
}

/// Mint printing tokens by burning one time printing authorization tokens.
///
/// ### Accounts
///  0. `[WRITE]` Destination token account
///  1. `[WRITE]` Token account holding the authorization token
///  2. `[WRITE]` One time printing authorization mint
///  3. `[WRITE]` Printing mint
///  4. `[SIGNER]` Burn authority
///  5. `[READ]` Metadata account
///  6. `[READ]` Master edition account
///  7. `[READ]` Token program
///  8. `[READ]` Rent sysvar
pub fn deprecated_mint_printing_tokens_via_token(
    params: &DeprecatedMintPrintingTokensViaTokenParams,
) -> Result<Instruction, TokenMetadataError> {
    build(
        MetadataInstruction::DeprecatedMintPrintingTokensViaToken(
            MintPrintingTokensViaTokenArgs {
                supply: params.supply,
            },
        ),
        vec![
            AccountMeta::new(params.destination, false),
            AccountMeta::new(params.token, false),
            AccountMeta::new(params.one_time_printing_authorization_mint, false),
            AccountMeta::new(params.printing_mint, false),
            AccountMeta::new_readonly(params.burn_authority, true),
            AccountMeta::new_readonly(params.metadata, false),
            AccountMeta::new_readonly(params.master_edition, false),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
            AccountMeta::new_readonly(SYSVAR_RENT_ID, false),
        ],
    )
}

/// Mint printing tokens directly with the update authority.
///
/// ### Accounts
///  0. `[WRITE]` Destination token account
///  1. `[WRITE]` Printing mint
///  2. `[SIGNER]` Update authority
///  3. `[READ]` Metadata account
///  4. `[READ]` Master edition account
///  5. `[READ]` Token program
///  6. `[READ]` Rent sysvar
pub fn deprecated_mint_printing_tokens(
    params: &DeprecatedMintPrintingTokensParams,
) -> Result<Instruction, TokenMetadataError> {
    build(
        MetadataInstruction::DeprecatedMintPrintingTokens(MintPrintingTokensViaTokenArgs {
            supply: params.supply,
        }),
        vec![
            AccountMeta::new(params.destination, false),
            AccountMeta::new(params.printing_mint, false),
            AccountMeta::new_readonly(params.update_authority, true),
            AccountMeta::new_readonly(params.metadata, false),
            AccountMeta::new_readonly(params.master_edition, false),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
            AccountMeta::new_readonly(SYSVAR_RENT_ID, false),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::test_utils::{flags, key, metas};
    use crate::instruction::InstructionKind;
    use crate::state::Reservation;

    fn printing_token_params(
        reservation_list: Option<solana_sdk::pubkey::Pubkey>,
    ) -> DeprecatedMintNewEditionFromMasterEditionViaPrintingTokenParams {
        DeprecatedMintNewEditionFromMasterEditionViaPrintingTokenParams {
            metadata: key(1),
            edition: key(2),
            master_edition: key(3),
            mint: key(4),
            mint_authority: key(5),
            printing_mint: key(6),
            master_token_account: key(7),
            edition_marker: key(8),
            burn_authority: key(9),
            payer: key(10),
            master_update_authority: key(11),
            master_metadata: key(12),
            reservation_list,
        }
    }

    #[test]
    fn test_deprecated_create_master_edition() {
        let ix = deprecated_create_master_edition(&DeprecatedCreateMasterEditionParams {
            edition: key(1),
            mint: key(2),
            printing_mint: key(3),
            one_time_printing_authorization_mint: key(4),
            update_authority: key(5),
            printing_mint_authority: key(6),
            mint_authority: key(7),
            metadata: key(8),
            payer: key(9),
            one_time_printing_authorization_mint_authority: key(10),
            max_supply: Some(258),
        })
        .unwrap();

        assert_eq!(ix.data, vec![2, 1, 2, 1, 0, 0, 0, 0, 0, 0]);
        assert_eq!(
            metas(&ix),
            vec![
                (key(1), false, true),
                (key(2), false, true),
                (key(3), false, true),
                (key(4), false, true),
                (key(5), true, false),
                (key(6), true, false),
                (key(7), true, false),
                (key(8), false, false),
                (key(9), true, false),
                (TOKEN_PROGRAM_ID, false, false),
                (SYSTEM_PROGRAM_ID, false, false),
                (SYSVAR_RENT_ID, false, false),
                (key(10), true, false),
            ]
        );
    }

    #[test]
    fn test_printing_token_mint_without_reservation_list() {
        let ix =
            deprecated_mint_new_edition_from_master_edition_via_printing_token(
                &printing_token_params(None),
            )
            .unwrap();

        assert_eq!(ix.data, vec![3]);
        assert_eq!(
            ix.accounts.len(),
            InstructionKind::DeprecatedMintNewEditionFromMasterEditionViaPrintingToken
                .required_accounts()
        );
        assert_eq!(
            flags(&ix),
            vec![
                (false, true),
                (false, true),
                (false, true),
                (false, true),
                (true, false),
                (false, true),
                (false, true),
                (false, true),
                (true, false),
                (true, false),
                (false, false),
                (false, false),
                (false, false),
                (false, false),
                (false, false),
            ]
        );
    }

    #[test]
    fn test_printing_token_mint_with_reservation_list() {
        let without =
            deprecated_mint_new_edition_from_master_edition_via_printing_token(
                &printing_token_params(None),
            )
            .unwrap();
        let with = deprecated_mint_new_edition_from_master_edition_via_printing_token(
            &printing_token_params(Some(key(13))),
        )
        .unwrap();

        assert_eq!(with.accounts.len(), 16);
        assert_eq!(with.accounts[..15], without.accounts[..]);
        assert_eq!(metas(&with)[15], (key(13), false, true));
        assert_eq!(with.data, without.data);
    }

    #[test]
    fn test_deprecated_set_reservation_list() {
        let ix = deprecated_set_reservation_list(&DeprecatedSetReservationListParams {
            master_edition: key(1),
            reservation_list: key(2),
            resource: key(3),
            reservations: vec![Reservation {
                address: key(4),
                spots_remaining: 2,
                total_spots: 3,
            }],
            total_reservation_spots: None,
            offset: 1,
            total_spot_offset: 7,
        })
        .unwrap();

        assert_eq!(
            metas(&ix),
            vec![
                (key(1), false, true),
                (key(2), false, true),
                (key(3), true, false),
            ]
        );

        let mut expected = vec![5, 1, 0, 0, 0];
        expected.extend_from_slice(&[4u8; 32]);
        expected.extend_from_slice(&2u64.to_le_bytes());
        expected.extend_from_slice(&3u64.to_le_bytes());
        expected.push(0);
        expected.extend_from_slice(&1u64.to_le_bytes());
        expected.extend_from_slice(&7u64.to_le_bytes());
        assert_eq!(ix.data, expected);
    }

    #[test]
    fn test_deprecated_set_reservation_list_empty() {
        let ix = deprecated_set_reservation_list(&DeprecatedSetReservationListParams {
            master_edition: key(1),
            reservation_list: key(2),
            resource: key(3),
            reservations: vec![],
            total_reservation_spots: Some(10),
            offset: 0,
            total_spot_offset: 0,
        })
        .unwrap();

        assert_eq!(
            hex::encode(&ix.data),
            "0500000000010a0000000000000000000000000000000000000000000000"
        );
    }

    #[test]
    fn test_deprecated_create_reservation_list() {
        let ix = deprecated_create_reservation_list(&DeprecatedCreateReservationListParams {
            reservation_list: key(1),
            payer: key(2),
            update_authority: key(3),
            master_edition: key(4),
            resource: key(5),
            metadata: key(6),
        })
        .unwrap();

        assert_eq!(ix.data, vec![6]);
        assert_eq!(
            metas(&ix),
            vec![
                (key(1), false, true),
                (key(2), true, false),
                (key(3), true, false),
                (key(4), false, false),
                (key(5), false, false),
                (key(6), false, false),
                (SYSTEM_PROGRAM_ID, false, false),
                (SYSVAR_RENT_ID, false, false),
            ]
        );
    }

    #[test]
    fn test_deprecated_mint_printing_tokens_via_token() {
        let ix = deprecated_mint_printing_tokens_via_token(
            &DeprecatedMintPrintingTokensViaTokenParams {
                destination: key(1),
                token: key(2),
                one_time_printing_authorization_mint: key(3),
                printing_mint: key(4),
                burn_authority: key(5),
                metadata: key(6),
                master_edition: key(7),
                supply: 5,
            },
        )
        .unwrap();

        assert_eq!(hex::encode(&ix.data), "080500000000000000");
        assert_eq!(
            metas(&ix),
            vec![
                (key(1), false, true),
                (key(2), false, true),
                (key(3), false, true),
                (key(4), false, true),
                (key(5), true, false),
                (key(6), false, false),
                (key(7), false, false),
                (TOKEN_PROGRAM_ID, false, false),
                (SYSVAR_RENT_ID, false, false),
            ]
        );
    }

    #[test]
    fn test_deprecated_mint_printing_tokens() {
        let ix = deprecated_mint_printing_tokens(&DeprecatedMintPrintingTokensParams {
            destination: key(1),
            printing_mint: key(2),
            update_authority: key(3),
            metadata: key(4),
            master_edition: key(5),
            supply: 5,
        })
        .unwrap();

        assert_eq!(hex::encode(&ix.data), "090500000000000000");
        assert_eq!(
            metas(&ix),
            vec![
                (key(1), false, true),
                (key(2), false, true),
                (key(3), true, false),
                (key(4), false, false),
                (key(5), false, false),
                (TOKEN_PROGRAM_ID, false, false),
                (SYSVAR_RENT_ID, false, false),
            ]
        );
    }
}
