use crate::{
    composite::*, error::OwnerOrManagerError, events::OwnershipOffered, state::OwnerOrManagerConfig,
};
use anchor_lang::prelude::*;
use common::admin::utils::pending_owner;

#[derive(Accounts)]
pub struct TransferOwnership<'info> {
    owner: Signer<'info>,

    config: CheckedMutConfig<'info>,

    /// New Owner.
    ///
    /// CHECK: Must not be zero pubkey.
    new_owner: AccountInfo<'info>,
}

pub fn transfer_ownership(ctx: Context<TransferOwnership>) -> Result<()> {
    let event = handle_transfer_ownership(
        &mut ctx.accounts.config,
        &ctx.accounts.owner.key(),
        ctx.accounts.new_owner.key(),
    )?;

    msg!("Ownership offered to {}", event.pending_owner);
    emit!(event);

    // Done.
    Ok(())
}

pub(crate) fn handle_transfer_ownership(
    config: &mut OwnerOrManagerConfig,
    caller: &Pubkey,
    new_owner: Pubkey,
) -> Result<OwnershipOffered> {
    // The zero pubkey is refused whoever asks, so this goes before the owner check.
    require!(
        new_owner != common::NO_HOLDER,
        OwnerOrManagerError::PendingOwnerIsZero
    );
    require!(config.is_owner(caller), OwnerOrManagerError::CallerNotOwner);

    pending_owner::transfer_ownership(config, &new_owner);

    Ok(OwnershipOffered {
        pending_owner: new_owner,
    })
}
