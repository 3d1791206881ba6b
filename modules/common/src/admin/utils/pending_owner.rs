use crate::{admin::PendingOwner, NO_HOLDER};
use anchor_lang::prelude::*;

/// Pending owner as the sentinel-encoded value readers expect.
pub fn pending_owner_or_default<A>(acct: &A) -> Pubkey
where
    A: PendingOwner,
{
    acct.pending_owner().unwrap_or(NO_HOLDER)
}

pub fn only_pending_owner<A>(acct: &A, pending_owner: &Pubkey) -> bool
where
    A: PendingOwner,
{
    matches!(acct.pending_owner(), Some(pending) if pending == pending_owner)
}

/// Offers ownership to `new_owner`, replacing any earlier offer.
pub fn transfer_ownership<A>(acct: &mut A, new_owner: &Pubkey)
where
    A: PendingOwner,
{
    acct.pending_owner_mut().replace(*new_owner);
}

/// Moves the pending owner into the owner slot and clears the offer. Returns the previous owner,
/// or `None` if there was no offer to accept.
pub fn accept_ownership<A>(acct: &mut A) -> Option<Pubkey>
where
    A: PendingOwner,
{
    let new_owner = acct.pending_owner_mut().take()?;
    Some(super::ownable::transfer_ownership(acct, &new_owner))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::admin::test_utils::*;

    #[test]
    fn empty_offer_reads_as_no_holder() {
        let roles = Roles::owned_by(ALICE);
        assert_eq!(pending_owner_or_default(&roles), NO_HOLDER);
        assert!(!only_pending_owner(&roles, &NO_HOLDER));
    }

    #[test]
    fn offer_does_not_move_owner() {
        let mut roles = Roles::owned_by(ALICE);
        transfer_ownership(&mut roles, &BOB);

        assert_eq!(roles.owner, ALICE);
        assert_eq!(pending_owner_or_default(&roles), BOB);
        assert!(only_pending_owner(&roles, &BOB));
        assert!(!only_pending_owner(&roles, &ALICE));
    }

    #[test]
    fn later_offer_overwrites_earlier() {
        let mut roles = Roles::owned_by(ALICE);
        transfer_ownership(&mut roles, &BOB);
        transfer_ownership(&mut roles, &CAROL);

        assert!(!only_pending_owner(&roles, &BOB));
        assert!(only_pending_owner(&roles, &CAROL));
    }

    #[test]
    fn accept_moves_pending_into_owner() {
        let mut roles = Roles::owned_by(ALICE);
        transfer_ownership(&mut roles, &BOB);

        assert_eq!(accept_ownership(&mut roles), Some(ALICE));
        assert_eq!(roles.owner, BOB);
        assert_eq!(roles.pending_owner, None);
    }

    #[test]
    fn accept_without_offer_changes_nothing() {
        let mut roles = Roles::owned_by(ALICE);
        assert_eq!(accept_ownership(&mut roles), None);
        assert_eq!(roles, Roles::owned_by(ALICE));
    }
}
