use std::ops::{Deref, DerefMut};

use crate::state::OwnableConfig;
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct CheckedConfig<'info> {
    #[account(
        seeds = [OwnableConfig::SEED_PREFIX],
        bump = inner.bump,
    )]
    pub inner: Account<'info, OwnableConfig>,
}

impl<'info> Deref for CheckedConfig<'info> {
    type Target = Account<'info, OwnableConfig>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

#[derive(Accounts)]
pub struct CheckedMutConfig<'info> {
    #[account(
        mut,
        seeds = [OwnableConfig::SEED_PREFIX],
        bump = inner.bump,
    )]
    pub inner: Account<'info, OwnableConfig>,
}

impl<'info> Deref for CheckedMutConfig<'info> {
    type Target = Account<'info, OwnableConfig>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl<'info> DerefMut for CheckedMutConfig<'info> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.inner
    }
}
