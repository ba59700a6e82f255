//! WASM binding for instruction parsing.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::decode::{decode_instruction, InstructionContext};
use crate::pubkey::{Pubkey, PubkeyExt};

/// Namespace for instruction parsing operations.
#[wasm_bindgen]
pub struct ParserNamespace;

#[wasm_bindgen]
impl ParserNamespace {
    /// Decode a Token Metadata instruction.
    ///
    /// Returns an object with:
    /// - `kind`: The instruction name (e.g. "CreateMasterEdition")
    /// - `instruction`: `{ type, args }` with the decoded payload, u64 fields as BigInt
    /// - `accounts`: Array of `{ name, pubkey }` in instruction order
    ///
    /// @param program_id - Program the instruction targets (base58)
    /// @param accounts - Account addresses in instruction order (base58)
    /// @param data - Raw instruction data
    #[wasm_bindgen]
    pub fn parse_instruction(
        program_id: &str,
        accounts: Vec<String>,
        data: &[u8],
    ) -> Result<JsValue, JsValue> {
        let program_id = Pubkey::from_base58(program_id)?;
        let accounts = accounts
            .iter()
            .map(|address| Pubkey::from_base58(address))
            .collect::<Result<Vec<_>, _>>()?;

        let parsed = decode_instruction(InstructionContext {
            program_id: &program_id,
            accounts: &accounts,
            data,
        })?;

        let serializer =
            serde_wasm_bindgen::Serializer::new().serialize_large_number_types_as_bigints(true);
        parsed
            .serialize(&serializer)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }
}
