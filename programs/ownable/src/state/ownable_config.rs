use anchor_lang::prelude::*;
use common::admin::utils::{ownable, pending_owner};

#[account]
#[derive(Debug, PartialEq, Eq, InitSpace)]
pub struct OwnableConfig {
    pub bump: u8,

    /// Program's owner. The zero pubkey once ownership is renounced.
    pub owner: Pubkey,
    pub pending_owner: Option<Pubkey>,
}

impl OwnableConfig {
    pub const SEED_PREFIX: &'static [u8] = b"ownable";

    pub fn new(bump: u8, owner: Pubkey) -> Self {
        Self {
            bump,
            owner,
            pending_owner: None,
        }
    }

    pub fn is_owner(&self, key: &Pubkey) -> bool {
        ownable::only_owner(self, key)
    }

    pub fn pending_owner_or_default(&self) -> Pubkey {
        pending_owner::pending_owner_or_default(self)
    }
}

impl common::admin::Ownable for OwnableConfig {
    fn owner(&self) -> &Pubkey {
        &self.owner
    }

    fn owner_mut(&mut self) -> &mut Pubkey {
        &mut self.owner
    }
}

impl common::admin::PendingOwner for OwnableConfig {
    fn pending_owner(&self) -> &Option<Pubkey> {
        &self.pending_owner
    }

    fn pending_owner_mut(&mut self) -> &mut Option<Pubkey> {
        &mut self.pending_owner
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn new_config_has_no_pending_owner() {
        let owner = Pubkey::new_unique();
        let config = OwnableConfig::new(255, owner);

        assert_eq!(config.owner, owner);
        assert_eq!(config.pending_owner_or_default(), Pubkey::default());
        assert!(config.is_owner(&owner));
        assert!(!config.is_owner(&Pubkey::new_unique()));
    }
}
