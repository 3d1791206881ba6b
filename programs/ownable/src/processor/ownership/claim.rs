use crate::{
    composite::*, error::OwnableError, events::OwnershipTransferred, state::OwnableConfig,
};
use anchor_lang::prelude::*;
use common::admin::utils::pending_owner;

#[derive(Accounts)]
pub struct ClaimOwnership<'info> {
    /// Must be the pending owner set in the config account.
    pending_owner: Signer<'info>,

    config: CheckedMutConfig<'info>,
}

pub fn claim_ownership(ctx: Context<ClaimOwnership>) -> Result<()> {
    let event = handle_claim_ownership(
        &mut ctx.accounts.config,
        &ctx.accounts.pending_owner.key(),
    )?;

    msg!(
        "Ownership transferred from {} to {}",
        event.previous_owner,
        event.new_owner
    );
    emit!(event);

    // Done.
    Ok(())
}

pub(crate) fn handle_claim_ownership(
    config: &mut OwnableConfig,
    caller: &Pubkey,
) -> Result<OwnershipTransferred> {
    require!(
        pending_owner::only_pending_owner(&*config, caller),
        OwnableError::CallerNotPendingOwner
    );

    let previous_owner =
        pending_owner::accept_ownership(config).ok_or(OwnableError::CallerNotPendingOwner)?;

    Ok(OwnershipTransferred {
        previous_owner,
        new_owner: *caller,
    })
}
