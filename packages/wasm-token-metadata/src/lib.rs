//! wasm-token-metadata: instruction builders for the Metaplex Token Metadata program.
//!
//! Builds the on-chain instructions that create and update NFT metadata accounts, create
//! master editions and mint print editions, and decodes those instructions back. Output is
//! a `solana_sdk` [`Instruction`](solana_sdk::instruction::Instruction) ready to be placed
//! in a transaction; nothing here signs, submits or talks to an RPC node.
//!
//! # Architecture
//!
//! The crate follows a two-layer architecture:
//!
//! 1. **Core** (`state`, `instruction`, `builder`, `decode`, `pda`) - Typed payloads, wire
//!    encoding and account layouts
//! 2. **WASM bindings** (`wasm/`) - Thin wrappers that expose the core to JavaScript
//!
//! # Usage from Rust
//!
//! ```rust
//! use wasm_token_metadata::builder::{create_master_edition, CreateMasterEditionParams};
//! use wasm_token_metadata::{find_master_edition_address, find_metadata_address, Pubkey};
//!
//! let mint = Pubkey::new_from_array([1; 32]);
//! let authority = Pubkey::new_from_array([2; 32]);
//!
//! let instruction = create_master_edition(&CreateMasterEditionParams {
//!     edition: find_master_edition_address(&mint).0,
//!     mint,
//!     update_authority: authority,
//!     mint_authority: authority,
//!     metadata: find_metadata_address(&mint).0,
//!     payer: authority,
//!     max_supply: Some(0),
//! })
//! .unwrap();
//!
//! assert_eq!(instruction.data, vec![10, 1, 0, 0, 0, 0, 0, 0, 0, 0]);
//! ```

pub mod builder;
pub mod decode;
mod error;
pub mod instruction;
pub mod pda;
pub mod program_ids;
pub mod pubkey;
pub mod state;
pub mod wasm;

// Re-export core types at crate root
pub use decode::{decode_instruction, parse_instruction, InstructionContext, ParsedInstruction};
pub use error::TokenMetadataError;
pub use instruction::{InstructionKind, MetadataInstruction};
pub use pda::{find_edition_marker_address, find_master_edition_address, find_metadata_address};
pub use program_ids::TOKEN_METADATA_PROGRAM_ID;
pub use pubkey::{Pubkey, PubkeyExt};
pub use state::{Creator, Data, Reservation};

// Re-export WASM types
pub use wasm::{BuilderNamespace, ParserNamespace};
