//! Well-known program IDs and sysvars referenced by token metadata instructions.

use solana_sdk::pubkey::Pubkey;

/// Metaplex Token Metadata program, the target of every instruction built here.
pub const TOKEN_METADATA_PROGRAM_ID: Pubkey =
    Pubkey::from_str_const("metaqbxxUerdq28cj1RbAWkYQm3ybzjb6a8bt518x1s");

pub const SYSTEM_PROGRAM_ID: Pubkey = Pubkey::from_str_const("11111111111111111111111111111111");

/// SPL Token Program: https://www.solana-program.com/docs/token
pub const TOKEN_PROGRAM_ID: Pubkey =
    Pubkey::from_str_const("TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA");

pub const SYSVAR_RENT_ID: Pubkey =
    Pubkey::from_str_const("SysvarRent111111111111111111111111111111111");

/// Metaplex Token Vault program, passed to the vault proxy edition mint.
pub const TOKEN_VAULT_PROGRAM_ID: Pubkey =
    Pubkey::from_str_const("vau1zxA2LbssAUEF7Gpw91zMM1LvXrvpzJtmZ58rPsn");

/// Check if a program ID is the Token Metadata program.
pub fn is_token_metadata_program(program_id: &Pubkey) -> bool {
    *program_id == TOKEN_METADATA_PROGRAM_ID
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_match_base58() {
        assert_eq!(
            TOKEN_METADATA_PROGRAM_ID.to_string(),
            "metaqbxxUerdq28cj1RbAWkYQm3ybzjb6a8bt518x1s"
        );
        assert_eq!(SYSTEM_PROGRAM_ID.to_bytes(), [0u8; 32]);
        assert_eq!(
            TOKEN_PROGRAM_ID.to_string(),
            "TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA"
        );
        assert_eq!(
            SYSVAR_RENT_ID.to_string(),
            "SysvarRent111111111111111111111111111111111"
        );
    }

    #[test]
    fn test_is_token_metadata_program() {
        assert!(is_token_metadata_program(&TOKEN_METADATA_PROGRAM_ID));
        assert!(!is_token_metadata_program(&TOKEN_PROGRAM_ID));
    }
}
