use crate::composite::*;
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct ReadConfig<'info> {
    config: CheckedConfig<'info>,
}

pub fn owner(ctx: Context<ReadConfig>) -> Result<Pubkey> {
    Ok(ctx.accounts.config.owner)
}

pub fn pending_owner(ctx: Context<ReadConfig>) -> Result<Pubkey> {
    Ok(ctx.accounts.config.pending_owner_or_default())
}

pub fn manager(ctx: Context<ReadConfig>) -> Result<Pubkey> {
    Ok(ctx.accounts.config.manager)
}
