//! Token Metadata instruction set and its wire encoding.
//!
//! # Wire Format
//!
//! Every payload starts with a single-byte discriminant followed by the borsh encoding of
//! the instruction's arguments:
//!
//! ```text
//! [discriminant: u8][field_1][field_2]...[field_n]
//! ```
//!
//! Discriminants are positional. New instructions may only be appended; reordering
//! breaks every deployed client.

mod args;

pub use args::*;

use borsh::{BorshDeserialize, BorshSerialize};
use serde::Serialize;

use crate::error::TokenMetadataError;

/// Discriminant of a Token Metadata instruction.
///
/// Variants prefixed `Deprecated` are legacy instructions kept for compatibility with
/// historical transactions. They are still fully supported but should not be used by new
/// callers.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum InstructionKind {
    CreateMetadataAccount = 0,
    UpdateMetadataAccount = 1,
    DeprecatedCreateMasterEdition = 2,
    DeprecatedMintNewEditionFromMasterEditionViaPrintingToken = 3,
    UpdatePrimarySaleHappenedViaToken = 4,
    DeprecatedSetReservationList = 5,
    DeprecatedCreateReservationList = 6,
    SignMetadata = 7,
    DeprecatedMintPrintingTokensViaToken = 8,
    DeprecatedMintPrintingTokens = 9,
    CreateMasterEdition = 10,
    MintNewEditionFromMasterEditionViaToken = 11,
    ConvertMasterEditionV1ToV2 = 12,
    MintNewEditionFromMasterEditionViaVaultProxy = 13,
    PuffMetadata = 14,
}

impl InstructionKind {
    /// Every kind, in discriminant order.
    pub const ALL: [InstructionKind; 15] = [
        Self::CreateMetadataAccount,
        Self::UpdateMetadataAccount,
        Self::DeprecatedCreateMasterEdition,
        Self::DeprecatedMintNewEditionFromMasterEditionViaPrintingToken,
        Self::UpdatePrimarySaleHappenedViaToken,
        Self::DeprecatedSetReservationList,
        Self::DeprecatedCreateReservationList,
        Self::SignMetadata,
        Self::DeprecatedMintPrintingTokensViaToken,
        Self::DeprecatedMintPrintingTokens,
        Self::CreateMasterEdition,
        Self::MintNewEditionFromMasterEditionViaToken,
        Self::ConvertMasterEditionV1ToV2,
        Self::MintNewEditionFromMasterEditionViaVaultProxy,
        Self::PuffMetadata,
    ];

    pub fn is_legacy(&self) -> bool {
        matches!(
            self,
            Self::DeprecatedCreateMasterEdition
                | Self::DeprecatedMintNewEditionFromMasterEditionViaPrintingToken
                | Self::DeprecatedSetReservationList
                | Self::DeprecatedCreateReservationList
                | Self::DeprecatedMintPrintingTokensViaToken
                | Self::DeprecatedMintPrintingTokens
        )
    }

    /// Positional account roles expected by the program, including trailing program and
    /// sysvar accounts. Optional trailing accounts are listed last.
    pub fn account_names(&self) -> &'static [&'static str] {
        match self {
            Self::CreateMetadataAccount => &[
                "metadata",
                "mint",
                "mintAuthority",
                "payer",
                "updateAuthority",
                "systemProgram",
                "rent",
            ],
            Self::UpdateMetadataAccount => &["metadata", "updateAuthority"],
            Self::DeprecatedCreateMasterEdition => &[
                "edition",
                "mint",
                "printingMint",
                "oneTimePrintingAuthorizationMint",
                "updateAuthority",
                "printingMintAuthority",
                "mintAuthority",
                "metadata",
                "payer",
                "tokenProgram",
                "systemProgram",
                "rent",
                "oneTimePrintingAuthorizationMintAuthority",
            ],
            Self::DeprecatedMintNewEditionFromMasterEditionViaPrintingToken => &[
                "metadata",
                "edition",
                "masterEdition",
                "mint",
                "mintAuthority",
                "printingMint",
                "masterTokenAccount",
                "editionMarker",
                "burnAuthority",
                "payer",
                "masterUpdateAuthority",
                "masterMetadata",
                "tokenProgram",
                "systemProgram",
                "rent",
                "reservationList",
            ],
            Self::UpdatePrimarySaleHappenedViaToken => &["metadata", "owner", "token"],
            Self::DeprecatedSetReservationList => &["masterEdition", "reservationList", "resource"],
            Self::DeprecatedCreateReservationList => &[
                "reservationList",
                "payer",
                "updateAuthority",
                "masterEdition",
                "resource",
                "metadata",
                "systemProgram",
                "rent",
            ],
            Self::SignMetadata => &["metadata", "creator"],
            Self::DeprecatedMintPrintingTokensViaToken => &[
                "destination",
                "token",
                "oneTimePrintingAuthorizationMint",
                "printingMint",
                "burnAuthority",
                "metadata",
                "masterEdition",
                "tokenProgram",
                "rent",
            ],
            Self::DeprecatedMintPrintingTokens => &[
                "destination",
                "printingMint",
                "updateAuthority",
                "metadata",
                "masterEdition",
                "tokenProgram",
                "rent",
            ],
            Self::CreateMasterEdition => &[
                "edition",
                "mint",
                "updateAuthority",
                "mintAuthority",
                "payer",
                "metadata",
                "tokenProgram",
                "systemProgram",
                "rent",
            ],
            Self::MintNewEditionFromMasterEditionViaToken => &[
                "newMetadata",
                "newEdition",
                "masterEdition",
                "newMint",
                "editionMark",
                "newMintAuthority",
                "payer",
                "tokenAccountOwner",
                "tokenAccount",
                "newMetadataUpdateAuthority",
                "masterMetadata",
                "tokenProgram",
                "systemProgram",
                "rent",
            ],
            Self::ConvertMasterEditionV1ToV2 => &["masterEdition", "oneTimeAuth", "printingMint"],
            Self::MintNewEditionFromMasterEditionViaVaultProxy => &[
                "newMetadata",
                "newEdition",
                "masterEdition",
                "newMint",
                "editionMark",
                "newMintAuthority",
                "payer",
                "vaultAuthority",
                "safetyDepositStore",
                "safetyDepositBox",
                "vault",
                "newMetadataUpdateAuthority",
                "masterMetadata",
                "tokenProgram",
                "tokenVaultProgram",
                "systemProgram",
                "rent",
            ],
            Self::PuffMetadata => &["metadata"],
        }
    }

    /// Number of accounts that must be present; only the printing-token edition mint has
    /// an optional trailing account.
    pub fn required_accounts(&self) -> usize {
        let names = self.account_names().len();
        match self {
            Self::DeprecatedMintNewEditionFromMasterEditionViaPrintingToken => names - 1,
            _ => names,
        }
    }
}

impl TryFrom<u8> for InstructionKind {
    type Error = TokenMetadataError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(value as usize)
            .copied()
            .ok_or(TokenMetadataError::UnknownInstruction(value))
    }
}

/// A Token Metadata instruction payload.
///
/// Variant order mirrors [`InstructionKind`]; borsh writes the variant index as the
/// leading byte, which is the wire discriminant.
#[derive(BorshSerialize, BorshDeserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "type", content = "args")]
pub enum MetadataInstruction {
    CreateMetadataAccount(CreateMetadataAccountArgs),
    UpdateMetadataAccount(UpdateMetadataAccountArgs),
    DeprecatedCreateMasterEdition(CreateMasterEditionArgs),
    DeprecatedMintNewEditionFromMasterEditionViaPrintingToken,
    UpdatePrimarySaleHappenedViaToken,
    DeprecatedSetReservationList(SetReservationListArgs),
    DeprecatedCreateReservationList,
    SignMetadata,
    DeprecatedMintPrintingTokensViaToken(MintPrintingTokensViaTokenArgs),
    DeprecatedMintPrintingTokens(MintPrintingTokensViaTokenArgs),
    CreateMasterEdition(CreateMasterEditionArgs),
    MintNewEditionFromMasterEditionViaToken(MintNewEditionFromMasterEditionViaTokenArgs),
    ConvertMasterEditionV1ToV2,
    MintNewEditionFromMasterEditionViaVaultProxy(MintNewEditionFromMasterEditionViaTokenArgs),
    PuffMetadata,
}

impl MetadataInstruction {
    pub fn kind(&self) -> InstructionKind {
        match self {
            Self::CreateMetadataAccount(_) => InstructionKind::CreateMetadataAccount,
            Self::UpdateMetadataAccount(_) => InstructionKind::UpdateMetadataAccount,
            Self::DeprecatedCreateMasterEdition(_) => {
                InstructionKind::DeprecatedCreateMasterEdition
            }
            Self::DeprecatedMintNewEditionFromMasterEditionViaPrintingToken => {
                InstructionKind::DeprecatedMintNewEditionFromMasterEditionViaPrintingToken
            }
            Self::UpdatePrimarySaleHappenedViaToken => {
                InstructionKind::UpdatePrimarySaleHappenedViaToken
            }
            Self::DeprecatedSetReservationList(_) => InstructionKind::DeprecatedSetReservationList,
            Self::DeprecatedCreateReservationList => {
                InstructionKind::DeprecatedCreateReservationList
            }
            Self::SignMetadata => InstructionKind::SignMetadata,
            Self::DeprecatedMintPrintingTokensViaToken(_) => {
                InstructionKind::DeprecatedMintPrintingTokensViaToken
            }
            Self::DeprecatedMintPrintingTokens(_) => InstructionKind::DeprecatedMintPrintingTokens,
            Self::CreateMasterEdition(_) => InstructionKind::CreateMasterEdition,
            Self::MintNewEditionFromMasterEditionViaToken(_) => {
                InstructionKind::MintNewEditionFromMasterEditionViaToken
            }
            Self::ConvertMasterEditionV1ToV2 => InstructionKind::ConvertMasterEditionV1ToV2,
            Self::MintNewEditionFromMasterEditionViaVaultProxy(_) => {
                InstructionKind::MintNewEditionFromMasterEditionViaVaultProxy
            }
            Self::PuffMetadata => InstructionKind::PuffMetadata,
        }
    }

    /// Encode into instruction data.
    pub fn pack(&self) -> Result<Vec<u8>, TokenMetadataError> {
        borsh::to_vec(self).map_err(TokenMetadataError::Encode)
    }

    /// Decode instruction data. Trailing bytes after the payload are rejected.
    pub fn unpack(data: &[u8]) -> Result<Self, TokenMetadataError> {
        let (&tag, _) = data.split_first().ok_or(TokenMetadataError::EmptyData)?;
        InstructionKind::try_from(tag)?;
        Self::try_from_slice(data).map_err(TokenMetadataError::Decode)
    }
}
