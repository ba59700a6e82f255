//! Instruction decoding for Token Metadata instructions.
//!
//! The inverse of the builders: given a program id, the instruction's account keys and
//! its data, recover the typed instruction and name every account by its role.

use serde::Serialize;
use solana_sdk::instruction::Instruction;
use solana_sdk::pubkey::Pubkey;

use crate::error::TokenMetadataError;
use crate::instruction::{InstructionKind, MetadataInstruction};
use crate::program_ids::is_token_metadata_program;

/// Label for accounts past the end of a kind's layout.
pub const REMAINING_ACCOUNT: &str = "remaining";

/// Context for decoding an instruction - provides account addresses.
pub struct InstructionContext<'a> {
    pub program_id: &'a Pubkey,
    pub accounts: &'a [Pubkey],
    pub data: &'a [u8],
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedAccount {
    pub name: &'static str,
    #[serde(with = "crate::pubkey::base58")]
    pub pubkey: Pubkey,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedInstruction {
    pub kind: InstructionKind,
    pub instruction: MetadataInstruction,
    pub accounts: Vec<ParsedAccount>,
}

impl ParsedInstruction {
    /// Look up an account by role name.
    pub fn account(&self, name: &str) -> Option<&Pubkey> {
        self.accounts
            .iter()
            .find(|account| account.name == name)
            .map(|account| &account.pubkey)
    }
}

/// Decode a single instruction into a ParsedInstruction.
pub fn decode_instruction(
    ctx: InstructionContext,
) -> Result<ParsedInstruction, TokenMetadataError> {
    if !is_token_metadata_program(ctx.program_id) {
        log::debug!("skipping instruction for program {}", ctx.program_id);
        return Err(TokenMetadataError::InvalidProgramId(*ctx.program_id));
    }

    let instruction = MetadataInstruction::unpack(ctx.data).inspect_err(|e| {
        log::debug!("rejected {} bytes of instruction data: {}", ctx.data.len(), e);
    })?;
    let kind = instruction.kind();

    let expected = kind.required_accounts();
    if ctx.accounts.len() < expected {
        log::debug!(
            "{:?} has {} accounts, needs {}",
            kind,
            ctx.accounts.len(),
            expected
        );
        return Err(TokenMetadataError::NotEnoughAccounts {
            kind,
            expected,
            actual: ctx.accounts.len(),
        });
    }

    let names = kind.account_names();
    let accounts = ctx
        .accounts
        .iter()
        .enumerate()
        .map(|(i, pubkey)| ParsedAccount {
            name: names.get(i).copied().unwrap_or(REMAINING_ACCOUNT),
            pubkey: *pubkey,
        })
        .collect();

    Ok(ParsedInstruction {
        kind,
        instruction,
        accounts,
    })
}

/// Decode an already assembled [`Instruction`].
pub fn parse_instruction(
    instruction: &Instruction,
) -> Result<ParsedInstruction, TokenMetadataError> {
    let accounts: Vec<Pubkey> = instruction.accounts.iter().map(|meta| meta.pubkey).collect();
    decode_instruction(InstructionContext {
        program_id: &instruction.program_id,
        accounts: &accounts,
        data: &instruction.data,
    })
}
