use crate::{
    admin::{Manageable, Ownable},
    NO_HOLDER,
};
use anchor_lang::prelude::*;

pub fn only_manager<A>(acct: &A, manager: &Pubkey) -> bool
where
    A: Manageable,
{
    *acct.manager() != NO_HOLDER && *acct.manager() == *manager
}

/// Either role is sufficient. The result does not say which one matched.
pub fn only_manager_or_owner<A>(acct: &A, manager_or_owner: &Pubkey) -> bool
where
    A: Manageable + Ownable,
{
    only_manager(acct, manager_or_owner) || super::ownable::only_owner(acct, manager_or_owner)
}

/// Assigning the value already in the slot is a no-op, which callers reject.
pub fn is_existing_manager<A>(acct: &A, new_manager: &Pubkey) -> bool
where
    A: Manageable,
{
    *acct.manager() == *new_manager
}

/// Writes the manager slot and returns whoever held it before.
pub fn transfer_manager<A>(acct: &mut A, new_manager: &Pubkey) -> Pubkey
where
    A: Manageable,
{
    std::mem::replace(acct.manager_mut(), *new_manager)
}
