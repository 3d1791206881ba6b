use crate::{
    composite::*, error::OwnerOrManagerError, events::ProtectedFunctionCalled,
    state::OwnerOrManagerConfig,
};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct ProtectedFunction<'info> {
    owner_or_manager: Signer<'info>,

    config: CheckedConfig<'info>,
}

pub fn protected_function(ctx: Context<ProtectedFunction>) -> Result<()> {
    let event = handle_protected_function(
        &ctx.accounts.config,
        &ctx.accounts.owner_or_manager.key(),
    )?;
    emit!(event);

    // Done.
    Ok(())
}

pub(crate) fn handle_protected_function(
    config: &OwnerOrManagerConfig,
    caller: &Pubkey,
) -> Result<ProtectedFunctionCalled> {
    require!(
        config.is_authorized(caller),
        OwnerOrManagerError::CallerNotManagerOrOwner
    );

    Ok(ProtectedFunctionCalled { caller: *caller })
}
