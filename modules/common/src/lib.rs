pub mod admin;

use solana_program::pubkey::Pubkey;

/// Value stored in a role slot that has no holder.
pub const NO_HOLDER: Pubkey = Pubkey::new_from_array([0; 32]);
