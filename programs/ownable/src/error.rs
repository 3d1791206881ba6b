#[anchor_lang::prelude::error_code]
pub enum OwnableError {
    /// Only the program's owner is permitted.
    #[msg("CallerNotOwner")]
    CallerNotOwner = 0x2,

    /// Only the program's pending owner is permitted.
    #[msg("CallerNotPendingOwner")]
    CallerNotPendingOwner = 0x4,

    /// The zero pubkey cannot be offered ownership.
    #[msg("PendingOwnerIsZero")]
    PendingOwnerIsZero = 0x6,
}
