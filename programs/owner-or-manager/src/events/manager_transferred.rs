use anchor_lang::prelude::*;

/// Unlike the `manageable` program's event of the same name, this one only carries the new
/// manager.
#[event]
#[derive(Debug, PartialEq, Eq)]
pub struct ManagerTransferred {
    pub new_manager: Pubkey,
}
