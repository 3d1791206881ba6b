use anchor_lang::prelude::*;
use common::admin::utils::{manager, ownable, pending_owner};

#[account]
#[derive(Debug, PartialEq, Eq, InitSpace)]
pub struct OwnerOrManagerConfig {
    pub bump: u8,

    /// Program's owner.
    pub owner: Pubkey,
    pub pending_owner: Option<Pubkey>,

    /// Program's manager. Has the same access as the owner to instructions gated on either role,
    /// but cannot manage ownership or the manager role.
    pub manager: Pubkey,
}

impl OwnerOrManagerConfig {
    pub const SEED_PREFIX: &'static [u8] = b"owner-or-manager";

    pub fn new(bump: u8, owner: Pubkey) -> Self {
        Self {
            bump,
            owner,
            pending_owner: None,
            manager: common::NO_HOLDER,
        }
    }

    pub fn is_owner(&self, key: &Pubkey) -> bool {
        ownable::only_owner(self, key)
    }

    pub fn is_authorized(&self, key: &Pubkey) -> bool {
        manager::only_manager_or_owner(self, key)
    }

    pub fn pending_owner_or_default(&self) -> Pubkey {
        pending_owner::pending_owner_or_default(self)
    }
}

impl common::admin::Ownable for OwnerOrManagerConfig {
    fn owner(&self) -> &Pubkey {
        &self.owner
    }

    fn owner_mut(&mut self) -> &mut Pubkey {
        &mut self.owner
    }
}

impl common::admin::PendingOwner for OwnerOrManagerConfig {
    fn pending_owner(&self) -> &Option<Pubkey> {
        &self.pending_owner
    }

    fn pending_owner_mut(&mut self) -> &mut Option<Pubkey> {
        &mut self.pending_owner
    }
}

impl common::admin::Manageable for OwnerOrManagerConfig {
    fn manager(&self) -> &Pubkey {
        &self.manager
    }

    fn manager_mut(&mut self) -> &mut Pubkey {
        &mut self.manager
    }
}
