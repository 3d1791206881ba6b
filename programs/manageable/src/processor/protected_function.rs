use crate::{
    composite::*, error::ManageableError, events::ProtectedFunctionCalled,
    state::ManageableConfig,
};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct ProtectedFunction<'info> {
    manager: Signer<'info>,

    config: CheckedConfig<'info>,
}

pub fn protected_function(ctx: Context<ProtectedFunction>) -> Result<()> {
    let event = handle_protected_function(&ctx.accounts.config, &ctx.accounts.manager.key())?;
    emit!(event);

    // Done.
    Ok(())
}

pub(crate) fn handle_protected_function(
    config: &ManageableConfig,
    caller: &Pubkey,
) -> Result<ProtectedFunctionCalled> {
    require!(config.is_manager(caller), ManageableError::CallerNotManager);

    Ok(ProtectedFunctionCalled { caller: *caller })
}
