use crate::{
    composite::*, error::OwnableError, events::OwnershipTransferred, state::OwnableConfig,
};
use anchor_lang::prelude::*;
use common::admin::utils::ownable;

#[derive(Accounts)]
pub struct RenounceOwnership<'info> {
    owner: Signer<'info>,

    config: CheckedMutConfig<'info>,
}

pub fn renounce_ownership(ctx: Context<RenounceOwnership>) -> Result<()> {
    let event = handle_renounce_ownership(&mut ctx.accounts.config, &ctx.accounts.owner.key())?;

    msg!("Ownership renounced by {}", event.previous_owner);
    emit!(event);

    // Done.
    Ok(())
}

/// Clears the owner slot. Any pending offer stays where it is.
pub(crate) fn handle_renounce_ownership(
    config: &mut OwnableConfig,
    caller: &Pubkey,
) -> Result<OwnershipTransferred> {
    require!(config.is_owner(caller), OwnableError::CallerNotOwner);

    let previous_owner = ownable::renounce_ownership(config);

    Ok(OwnershipTransferred {
        previous_owner,
        new_owner: common::NO_HOLDER,
    })
}
