use anchor_lang::prelude::*;

#[event]
#[derive(Debug, PartialEq, Eq)]
pub struct ProtectedFunctionCalled {
    pub caller: Pubkey,
}
