use crate::{events::OwnershipTransferred, state::ManageableConfig};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    payer: Signer<'info>,

    /// CHECK: Any key may be the initial owner, the payer included.
    initial_owner: AccountInfo<'info>,

    #[account(
        init,
        payer = payer,
        space = 8 + ManageableConfig::INIT_SPACE,
        seeds = [ManageableConfig::SEED_PREFIX],
        bump,
    )]
    config: Account<'info, ManageableConfig>,

    system_program: Program<'info, System>,
}

pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
    let event = handle_initialize(
        &mut ctx.accounts.config,
        ctx.bumps.config,
        ctx.accounts.initial_owner.key(),
    );

    msg!("Initial owner: {}", event.new_owner);
    emit!(event);

    // Done.
    Ok(())
}

/// Seeds the owner. The manager starts out unset.
pub(crate) fn handle_initialize(
    config: &mut ManageableConfig,
    bump: u8,
    initial_owner: Pubkey,
) -> OwnershipTransferred {
    *config = ManageableConfig::new(bump, initial_owner);

    OwnershipTransferred {
        previous_owner: common::NO_HOLDER,
        new_owner: initial_owner,
    }
}
