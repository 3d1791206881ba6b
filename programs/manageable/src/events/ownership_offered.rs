use anchor_lang::prelude::*;

#[event]
#[derive(Debug, PartialEq, Eq)]
pub struct OwnershipOffered {
    pub pending_owner: Pubkey,
}
