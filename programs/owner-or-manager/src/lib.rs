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
        declare_id!("ownerorManagerMainnet1111111111111111111111");
    } else if #[cfg(feature = "testnet")] {
        // Placeholder.
        declare_id!("ownerorManagerTestnet1111111111111111111111");
    } else {
        // Localnet (the default) and unit tests.
        declare_id!("ownerorManager11111111111111111111111111111");
    }
}

#[program]
pub mod owner_or_manager {
    use super::*;

    /// This instruction creates the program's
    /// [OwnerOrManagerConfig](crate::state::OwnerOrManagerConfig) account. The signer paying for
    /// it becomes the owner. There is no pending owner and no manager yet.
    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        processor::initialize(ctx)
    }

    pub fn owner(ctx: Context<ReadConfig>) -> Result<Pubkey> {
        processor::owner(ctx)
    }

    pub fn pending_owner(ctx: Context<ReadConfig>) -> Result<Pubkey> {
        processor::pending_owner(ctx)
    }

    pub fn manager(ctx: Context<ReadConfig>) -> Result<Pubkey> {
        processor::manager(ctx)
    }

    /// This instruction sets the `pending_owner` field in the config account. This instruction is
    /// owner-only.
    pub fn transfer_ownership(ctx: Context<TransferOwnership>) -> Result<()> {
        processor::transfer_ownership(ctx)
    }

    /// This instruction confirms that the `pending_owner` is the signer of the transaction and
    /// makes it the owner.
    pub fn claim_ownership(ctx: Context<ClaimOwnership>) -> Result<()> {
        processor::claim_ownership(ctx)
    }

    /// This instruction clears the owner. The manager keeps its role, but nobody can assign a new
    /// one afterwards.
    pub fn renounce_ownership(ctx: Context<RenounceOwnership>) -> Result<()> {
        processor::renounce_ownership(ctx)
    }

    /// This instruction updates the `manager` field in the config account. This instruction is
    /// owner-only, meaning that the manager cannot reassign its own role.
    pub fn set_manager(ctx: Context<SetManager>) -> Result<()> {
        processor::set_manager(ctx)
    }

    /// Admits the owner or the manager.
    pub fn protected_function(ctx: Context<ProtectedFunction>) -> Result<()> {
        processor::protected_function(ctx)
    }
}
