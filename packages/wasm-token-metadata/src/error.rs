use solana_sdk::pubkey::Pubkey;
use thiserror::Error;
use wasm_bindgen::prelude::*;

use crate::instruction::InstructionKind;

#[derive(Debug, Error)]
pub enum TokenMetadataError {
    /// Borsh rejected an instruction payload while packing it.
    ///
    /// Payload records have a fixed shape, so this never occurs for values built through
    /// this crate. Seeing it means the payload types themselves are broken.
    #[error("failed to encode instruction data: {0}")]
    Encode(#[source] std::io::Error),

    #[error("failed to decode instruction data: {0}")]
    Decode(#[source] std::io::Error),

    #[error("instruction data is empty")]
    EmptyData,

    #[error("unknown token metadata instruction discriminant: {0}")]
    UnknownInstruction(u8),

    #[error("instruction targets {0}, not the token metadata program")]
    InvalidProgramId(Pubkey),

    #[error("{kind:?} expects at least {expected} accounts, got {actual}")]
    NotEnoughAccounts {
        kind: InstructionKind,
        expected: usize,
        actual: usize,
    },

    #[error("invalid public key: {0}")]
    InvalidPubkey(String),
}

// Required for wasm_bindgen to convert errors to JavaScript exceptions
impl From<TokenMetadataError> for JsValue {
    fn from(err: TokenMetadataError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}
