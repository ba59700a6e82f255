//! Program derived addresses owned by the Token Metadata program.
//!
//! Every account the program creates lives at a PDA seeded with `"metadata"`, the program
//! id and the mint:
//!
//! - metadata: `["metadata", program_id, mint]`
//! - master or print edition: `["metadata", program_id, mint, "edition"]`
//! - edition marker: `["metadata", program_id, mint, "edition", (edition / 248).to_string()]`

use solana_sdk::pubkey::Pubkey;

use crate::program_ids::TOKEN_METADATA_PROGRAM_ID;

pub const PREFIX: &[u8] = b"metadata";
pub const EDITION: &[u8] = b"edition";

/// Number of editions tracked by a single edition marker account, one bit each.
pub const EDITION_MARKER_BIT_SIZE: u64 = 248;

/// Metadata account address for `mint`.
pub fn find_metadata_address(mint: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[
            PREFIX,
            TOKEN_METADATA_PROGRAM_ID.as_ref(),
            mint.as_ref(),
        ],
        &TOKEN_METADATA_PROGRAM_ID,
    )
}

/// Edition account address for `mint`. Master editions and print editions share this
/// derivation.
pub fn find_master_edition_address(mint: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[
            PREFIX,
            TOKEN_METADATA_PROGRAM_ID.as_ref(),
            mint.as_ref(),
            EDITION,
        ],
        &TOKEN_METADATA_PROGRAM_ID,
    )
}

/// Edition marker address covering print number `edition` of the master `mint`.
pub fn find_edition_marker_address(mint: &Pubkey, edition: u64) -> (Pubkey, u8) {
    let marker = (edition / EDITION_MARKER_BIT_SIZE).to_string();
    Pubkey::find_program_address(
        &[
            PREFIX,
            TOKEN_METADATA_PROGRAM_ID.as_ref(),
            mint.as_ref(),
            EDITION,
            marker.as_bytes(),
        ],
        &TOKEN_METADATA_PROGRAM_ID,
    )
}
