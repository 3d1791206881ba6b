use crate::{admin::Ownable, NO_HOLDER};
use anchor_lang::prelude::*;

/// True only if `owner` holds the owner slot. A renounced slot holds
/// [NO_HOLDER], which stands for nobody, so it never matches.
pub fn only_owner<A>(acct: &A, owner: &Pubkey) -> bool
where
    A: Ownable,
{
    *acct.owner() != NO_HOLDER && *acct.owner() == *owner
}

pub fn is_renounced<A>(acct: &A) -> bool
where
    A: Ownable,
{
    *acct.owner() == NO_HOLDER
}

/// Writes the owner slot directly and returns whoever held it before.
pub fn transfer_ownership<A>(acct: &mut A, new_owner: &Pubkey) -> Pubkey
where
    A: Ownable,
{
    std::mem::replace(acct.owner_mut(), *new_owner)
}

pub fn renounce_ownership<A>(acct: &mut A) -> Pubkey
where
    A: Ownable,
{
    transfer_ownership(acct, &NO_HOLDER)
}
