#![doc = include_str!("../README.md")]
#![allow(clippy::result_large_err)]

pub mod error;

pub mod events;

mod composite;

mod processor;
pub(crate) use processor::*;
// Disambiguate from the `owner` instruction glob-imported by `#[program]`.
#[allow(unused_imports)]
pub(crate) use processor::owner;

pub mod state;

use anchor_lang::prelude::*;

cfg_if::cfg_if! {
    if #[cfg(feature = "mainnet")] {
        // Placeholder.
        declare_id!("Manageab1eMainnet11111111111111111111111111");
    } else if #[cfg(feature = "testnet")] {
        // Placeholder.
        declare_id!("Manageab1eTestnet11111111111111111111111111");
    } else {
        // Localnet (the default) and unit tests.
        declare_id!("Manageab1e111111111111111111111111111111111");
    }
}

#[program]
pub mod manageable {
    use super::*;

    /// This instruction creates the program's [ManageableConfig](crate::state::ManageableConfig)
    /// account with `initial_owner` as its owner, no pending owner and no manager.
    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        processor::initialize(ctx)
    }

    pub fn owner(ctx: Context<ReadConfig>) -> Result<Pubkey> {
        processor::owner(ctx)
    }

    pub fn pending_owner(ctx: Context<ReadConfig>) -> Result<Pubkey> {
        processor::pending_owner(ctx)
    }

    /// Returns the current manager, or the zero pubkey if there is none.
    pub fn manager(ctx: Context<ReadConfig>) -> Result<Pubkey> {
        processor::manager(ctx)
    }

    /// This instruction sets the `pending_owner` field in the config account. This instruction is
    /// owner-only.
    pub fn transfer_ownership(ctx: Context<TransferOwnership>) -> Result<()> {
        processor::transfer_ownership(ctx)
    }

    /// This instruction confirms that the `pending_owner` is the signer of the transaction and
    /// makes it the owner. The manager is left in place.
    pub fn claim_ownership(ctx: Context<ClaimOwnership>) -> Result<()> {
        processor::claim_ownership(ctx)
    }

    /// This instruction clears the owner. The manager keeps its role, but it can no longer be
    /// reassigned.
    pub fn renounce_ownership(ctx: Context<RenounceOwnership>) -> Result<()> {
        processor::renounce_ownership(ctx)
    }

    /// This instruction updates the `manager` field in the config account. This instruction is
    /// owner-only. Setting the manager it already has fails, and setting the zero pubkey removes
    /// the manager.
    pub fn set_manager(ctx: Context<SetManager>) -> Result<()> {
        processor::set_manager(ctx)
    }

    pub fn protected_function(ctx: Context<ProtectedFunction>) -> Result<()> {
        processor::protected_function(ctx)
    }
}
