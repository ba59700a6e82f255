//! Instruction building module.
//!
//! One function per Token Metadata instruction. Each takes a parameter record and
//! returns a `solana_sdk` [`Instruction`] targeting the Token Metadata program with the
//! account list in the program's fixed positional order.
//!
//! Builders never validate keys or business rules; the on-chain program rejects invalid
//! instructions at execution time.

mod edition;
pub mod legacy;
mod metadata;
mod types;

pub use edition::{
    convert_master_edition_v1_to_v2, create_master_edition,
    mint_new_edition_from_master_edition_via_token,
    mint_new_edition_from_master_edition_via_vault_proxy,
};
pub use metadata::{
    create_metadata_account, puff_metadata, sign_metadata, update_metadata_account,
    update_primary_sale_happened_via_token,
};
pub use types::*;

use solana_sdk::instruction::{AccountMeta, Instruction};

use crate::error::TokenMetadataError;
use crate::instruction::MetadataInstruction;
use crate::program_ids::TOKEN_METADATA_PROGRAM_ID;

/// Pack `instruction` and pair it with `accounts` under the Token Metadata program.
fn build(
    instruction: MetadataInstruction,
    accounts: Vec<AccountMeta>,
) -> Result<Instruction, TokenMetadataError> {
    let data = instruction.pack()?;
    log::trace!(
        "built {:?} instruction: {} accounts, {} data bytes",
        instruction.kind(),
        accounts.len(),
        data.len()
    );
    Ok(Instruction {
        program_id: TOKEN_METADATA_PROGRAM_ID,
        accounts,
        data,
    })
}

#[cfg(test)]
pub(crate) mod test_utils {
    use solana_sdk::instruction::Instruction;
    use solana_sdk::pubkey::Pubkey;

    /// Deterministic key filled with `n`.
    pub fn key(n: u8) -> Pubkey {
        Pubkey::new_from_array([n; 32])
    }

    /// Account list as `(pubkey, is_signer, is_writable)` triples.
    pub fn metas(ix: &Instruction) -> Vec<(Pubkey, bool, bool)> {
        ix.accounts
            .iter()
            .map(|meta| (meta.pubkey, meta.is_signer, meta.is_writable))
            .collect()
    }

    /// `(is_signer, is_writable)` per position, ignoring keys.
    pub fn flags(ix: &Instruction) -> Vec<(bool, bool)> {
        ix.accounts
            .iter()
            .map(|meta| (meta.is_signer, meta.is_writable))
            .collect()
    }
}
