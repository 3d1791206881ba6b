use super::*;
use crate::{
    error::OwnableError,
    events::{OwnershipOffered, OwnershipTransferred, ProtectedFunctionCalled},
    state::OwnableConfig,
};
use anchor_lang::prelude::*;

fn set_up() -> (OwnableConfig, Pubkey) {
    let owner = Pubkey::new_unique();
    let mut config = OwnableConfig::new(0, Pubkey::default());

    let event = handle_initialize(&mut config, 254, owner);
    assert_eq!(
        event,
        OwnershipTransferred {
            previous_owner: Pubkey::default(),
            new_owner: owner,
        }
    );

    (config, owner)
}

#[test]
fn owner_is_initial_owner_by_default() {
    let (config, owner) = set_up();

    assert_eq!(config.bump, 254);
    assert_eq!(config.owner, owner);
    assert_eq!(config.pending_owner_or_default(), Pubkey::default());
}

#[test]
fn transfer_ownership_offers_to_new_owner() {
    let (mut config, owner) = set_up();
    let new_owner = Pubkey::new_unique();

    let event = handle_transfer_ownership(&mut config, &owner, new_owner).unwrap();
    assert_eq!(
        event,
        OwnershipOffered {
            pending_owner: new_owner
        }
    );
    assert_eq!(config.pending_owner_or_default(), new_owner);
    assert_eq!(config.owner, owner);
}

#[test]
fn cannot_transfer_ownership_to_zero_pubkey() {
    let (mut config, owner) = set_up();
    let stranger = Pubkey::new_unique();

    for caller in [owner, stranger] {
        let err = handle_transfer_ownership(&mut config, &caller, Pubkey::default()).unwrap_err();
        assert_eq!(err, error!(OwnableError::PendingOwnerIsZero));
    }
    assert_eq!(config.pending_owner, None);
}

#[test]
fn zero_pubkey_refused_with_offer_pending() {
    let (mut config, owner) = set_up();
    let new_owner = Pubkey::new_unique();
    handle_transfer_ownership(&mut config, &owner, new_owner).unwrap();

    for caller in [owner, new_owner, Pubkey::new_unique()] {
        let err = handle_transfer_ownership(&mut config, &caller, Pubkey::default()).unwrap_err();
        assert_eq!(err, error!(OwnableError::PendingOwnerIsZero));
    }

    // The earlier offer survives the refused one.
    assert_eq!(config.pending_owner_or_default(), new_owner);
    handle_claim_ownership(&mut config, &new_owner).unwrap();
}

#[test]
fn zero_pubkey_refused_after_renounce() {
    let (mut config, owner) = set_up();
    handle_renounce_ownership(&mut config, &owner).unwrap();

    for caller in [owner, Pubkey::new_unique(), Pubkey::default()] {
        let err = handle_transfer_ownership(&mut config, &caller, Pubkey::default()).unwrap_err();
        assert_eq!(err, error!(OwnableError::PendingOwnerIsZero));
    }
    assert_eq!(config.pending_owner, None);
}

#[test]
fn cannot_transfer_ownership_if_not_owner() {
    let (mut config, _) = set_up();
    let before = config.clone();

    let err = handle_transfer_ownership(&mut config, &Pubkey::new_unique(), Pubkey::new_unique())
        .unwrap_err();
    assert_eq!(err, error!(OwnableError::CallerNotOwner));
    assert_eq!(config, before);
}

#[test]
fn pending_owner_claims_ownership() {
    let (mut config, owner) = set_up();
    let new_owner = Pubkey::new_unique();
    handle_transfer_ownership(&mut config, &owner, new_owner).unwrap();

    let event = handle_claim_ownership(&mut config, &new_owner).unwrap();
    assert_eq!(
        event,
        OwnershipTransferred {
            previous_owner: owner,
            new_owner,
        }
    );
    assert_eq!(config.owner, new_owner);
    assert_eq!(config.pending_owner_or_default(), Pubkey::default());

    // The previous owner is locked out.
    let err = handle_protected_function(&config, &owner).unwrap_err();
    assert_eq!(err, error!(OwnableError::CallerNotOwner));
}

#[test]
fn cannot_claim_ownership_if_not_pending_owner() {
    let (mut config, owner) = set_up();
    handle_transfer_ownership(&mut config, &owner, Pubkey::new_unique()).unwrap();
    let before = config.clone();

    for caller in [owner, Pubkey::new_unique()] {
        let err = handle_claim_ownership(&mut config, &caller).unwrap_err();
        assert_eq!(err, error!(OwnableError::CallerNotPendingOwner));
    }
    assert_eq!(config, before);
}

#[test]
fn cannot_claim_ownership_without_offer() {
    let (mut config, _) = set_up();

    let err = handle_claim_ownership(&mut config, &Pubkey::default()).unwrap_err();
    assert_eq!(err, error!(OwnableError::CallerNotPendingOwner));
}

#[test]
fn later_offer_replaces_earlier_one() {
    let (mut config, owner) = set_up();
    let first = Pubkey::new_unique();
    let second = Pubkey::new_unique();
    handle_transfer_ownership(&mut config, &owner, first).unwrap();
    handle_transfer_ownership(&mut config, &owner, second).unwrap();

    let err = handle_claim_ownership(&mut config, &first).unwrap_err();
    assert_eq!(err, error!(OwnableError::CallerNotPendingOwner));

    handle_claim_ownership(&mut config, &second).unwrap();
    assert_eq!(config.owner, second);
}

#[test]
fn owner_renounces_ownership() {
    let (mut config, owner) = set_up();
    let new_owner = Pubkey::new_unique();
    handle_transfer_ownership(&mut config, &owner, new_owner).unwrap();
    handle_claim_ownership(&mut config, &new_owner).unwrap();

    let event = handle_renounce_ownership(&mut config, &new_owner).unwrap();
    assert_eq!(
        event,
        OwnershipTransferred {
            previous_owner: new_owner,
            new_owner: Pubkey::default(),
        }
    );
    assert_eq!(config.owner, Pubkey::default());
    assert_eq!(config.pending_owner_or_default(), Pubkey::default());
}

#[test]
fn cannot_renounce_ownership_if_not_owner() {
    let (mut config, owner) = set_up();

    let err = handle_renounce_ownership(&mut config, &Pubkey::new_unique()).unwrap_err();
    assert_eq!(err, error!(OwnableError::CallerNotOwner));
    assert_eq!(config.owner, owner);
}

#[test]
fn renounced_ownership_locks_out_everyone() {
    let (mut config, owner) = set_up();
    handle_renounce_ownership(&mut config, &owner).unwrap();

    for caller in [owner, Pubkey::new_unique(), Pubkey::default()] {
        let err =
            handle_transfer_ownership(&mut config, &caller, Pubkey::new_unique()).unwrap_err();
        assert_eq!(err, error!(OwnableError::CallerNotOwner));

        let err = handle_renounce_ownership(&mut config, &caller).unwrap_err();
        assert_eq!(err, error!(OwnableError::CallerNotOwner));

        let err = handle_protected_function(&config, &caller).unwrap_err();
        assert_eq!(err, error!(OwnableError::CallerNotOwner));
    }
}

#[test]
fn renounce_leaves_pending_offer_in_place() {
    let (mut config, owner) = set_up();
    let new_owner = Pubkey::new_unique();
    handle_transfer_ownership(&mut config, &owner, new_owner).unwrap();

    handle_renounce_ownership(&mut config, &owner).unwrap();
    assert_eq!(config.owner, Pubkey::default());
    assert_eq!(config.pending_owner_or_default(), new_owner);
}

#[test]
fn protected_function_is_owner_only() {
    let (config, owner) = set_up();

    let event = handle_protected_function(&config, &owner).unwrap();
    assert_eq!(event, ProtectedFunctionCalled { caller: owner });

    let err = handle_protected_function(&config, &Pubkey::new_unique()).unwrap_err();
    assert_eq!(err, error!(OwnableError::CallerNotOwner));
}
