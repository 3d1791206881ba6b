use anchor_lang::prelude::*;

/// Emitted on initialization, claim and renunciation. `new_owner` is the zero pubkey when
/// ownership is renounced.
#[event]
#[derive(Debug, PartialEq, Eq)]
pub struct OwnershipTransferred {
    pub previous_owner: Pubkey,
    pub new_owner: Pubkey,
}
