use crate::{events::OwnershipTransferred, state::OwnerOrManagerConfig};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct Initialize<'info> {
    /// Owner of the program, who presumably deployed this program.
    #[account(mut)]
    owner: Signer<'info>,

    #[account(
        init,
        payer = owner,
        space = 8 + OwnerOrManagerConfig::INIT_SPACE,
        seeds = [OwnerOrManagerConfig::SEED_PREFIX],
        bump,
    )]
    config: Account<'info, OwnerOrManagerConfig>,

    system_program: Program<'info, System>,
}

pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
    let event = handle_initialize(
        &mut ctx.accounts.config,
        ctx.bumps.config,
        ctx.accounts.owner.key(),
    );

    msg!("Initial owner: {}", event.new_owner);
    emit!(event);

    // Done.
    Ok(())
}

/// The deployer paying for the config account becomes its owner.
pub(crate) fn handle_initialize(
    config: &mut OwnerOrManagerConfig,
    bump: u8,
    deployer: Pubkey,
) -> OwnershipTransferred {
    *config = OwnerOrManagerConfig::new(bump, deployer);

    OwnershipTransferred {
        previous_owner: common::NO_HOLDER,
        new_owner: deployer,
    }
}
