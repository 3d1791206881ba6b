use std::ops::{Deref, DerefMut};

use crate::state::OwnerOrManagerConfig;
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct CheckedConfig<'info> {
    #[account(
        seeds = [OwnerOrManagerConfig::SEED_PREFIX],
        bump = inner.bump,
    )]
    pub inner: Account<'info, OwnerOrManagerConfig>,
}

impl<'info> Deref for CheckedConfig<'info> {
    type Target = Account<'info, OwnerOrManagerConfig>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

#[derive(Accounts)]
pub struct CheckedMutConfig<'info> {
    #[account(
        mut,
        seeds = [OwnerOrManagerConfig::SEED_PREFIX],
        bump = inner.bump,
    )]
    pub inner: Account<'info, OwnerOrManagerConfig>,
}

impl<'info> Deref for CheckedMutConfig<'info> {
    type Target = Account<'info, OwnerOrManagerConfig>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl<'info> DerefMut for CheckedMutConfig<'info> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.inner
    }
}
