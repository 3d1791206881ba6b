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
        declare_id!("TwoStepownab1eMainnet1111111111111111111111");
    } else if #[cfg(feature = "testnet")] {
        // Placeholder.
        declare_id!("TwoStepownab1eTestnet1111111111111111111111");
    } else {
        // Localnet (the default) and unit tests.
        declare_id!("TwoStepownab1e11111111111111111111111111111");
    }
}

#[program]
pub mod ownable {
    use super::*;

    /// This instruction creates the program's [OwnableConfig](crate::state::OwnableConfig)
    /// account and sets `initial_owner` as its owner. The pending owner starts out empty.
    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        processor::initialize(ctx)
    }

    /// Returns the current owner, or the zero pubkey once ownership is renounced.
    pub fn owner(ctx: Context<ReadConfig>) -> Result<Pubkey> {
        processor::owner(ctx)
    }

    /// Returns the pending owner, or the zero pubkey if no transfer is in flight.
    pub fn pending_owner(ctx: Context<ReadConfig>) -> Result<Pubkey> {
        processor::pending_owner(ctx)
    }

    /// This instruction sets the `pending_owner` field in the config account. This instruction is
    /// owner-only. The owner does not change until the pending owner claims.
    ///
    /// # Arguments
    ///
    /// * `ctx` - `TransferOwnership` context. `new_owner` must not be the zero pubkey.
    pub fn transfer_ownership(ctx: Context<TransferOwnership>) -> Result<()> {
        processor::transfer_ownership(ctx)
    }

    /// This instruction confirms that the `pending_owner` is the signer of the transaction and
    /// makes it the owner.
    pub fn claim_ownership(ctx: Context<ClaimOwnership>) -> Result<()> {
        processor::claim_ownership(ctx)
    }

    /// This instruction clears the owner. It cannot be undone.
    pub fn renounce_ownership(ctx: Context<RenounceOwnership>) -> Result<()> {
        processor::renounce_ownership(ctx)
    }

    pub fn protected_function(ctx: Context<ProtectedFunction>) -> Result<()> {
        processor::protected_function(ctx)
    }
}
