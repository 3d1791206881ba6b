use crate::{
    composite::*, error::ManageableError, events::ManagerTransferred, state::ManageableConfig,
};
use anchor_lang::prelude::*;
use common::admin::utils::manager;

#[derive(Accounts)]
pub struct SetManager<'info> {
    owner: Signer<'info>,

    config: CheckedMutConfig<'info>,

    /// New Manager.
    ///
    /// CHECK: Must differ from the current manager. The zero pubkey unsets the manager.
    new_manager: AccountInfo<'info>,
}

pub fn set_manager(ctx: Context<SetManager>) -> Result<()> {
    let event = handle_set_manager(
        &mut ctx.accounts.config,
        &ctx.accounts.owner.key(),
        ctx.accounts.new_manager.key(),
    )?;

    msg!(
        "Manager transferred from {} to {}",
        event.previous_manager,
        event.new_manager
    );
    emit!(event);

    // Done.
    Ok(())
}

pub(crate) fn handle_set_manager(
    config: &mut ManageableConfig,
    caller: &Pubkey,
    new_manager: Pubkey,
) -> Result<ManagerTransferred> {
    require!(config.is_owner(caller), ManageableError::CallerNotOwner);
    require!(
        !manager::is_existing_manager(&*config, &new_manager),
        ManageableError::ExistingManagerAddress
    );

    let previous_manager = manager::transfer_manager(config, &new_manager);

    Ok(ManagerTransferred {
        previous_manager,
        new_manager,
    })
}
