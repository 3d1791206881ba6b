use anchor_lang::prelude::*;

#[event]
#[derive(Debug, PartialEq, Eq)]
pub struct ManagerTransferred {
    pub previous_manager: Pubkey,
    pub new_manager: Pubkey,
}
