use crate::{
    composite::*, error::OwnableError, events::ProtectedFunctionCalled, state::OwnableConfig,
};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct ProtectedFunction<'info> {
    owner: Signer<'info>,

    config: CheckedConfig<'info>,
}

pub fn protected_function(ctx: Context<ProtectedFunction>) -> Result<()> {
    let event = handle_protected_function(&ctx.accounts.config, &ctx.accounts.owner.key())?;
    emit!(event);

    // Done.
    Ok(())
}

pub(crate) fn handle_protected_function(
    config: &OwnableConfig,
    caller: &Pubkey,
) -> Result<ProtectedFunctionCalled> {
    require!(config.is_owner(caller), OwnableError::CallerNotOwner);

    Ok(ProtectedFunctionCalled { caller: *caller })
}
