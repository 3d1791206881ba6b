#[anchor_lang::prelude::error_code]
pub enum OwnerOrManagerError {
    /// Only the program's owner is permitted.
    #[msg("CallerNotOwner")]
    CallerNotOwner = 0x2,

    /// Only the program's pending owner is permitted.
    #[msg("CallerNotPendingOwner")]
    CallerNotPendingOwner = 0x4,

    /// The zero pubkey cannot be offered ownership.
    #[msg("PendingOwnerIsZero")]
    PendingOwnerIsZero = 0x6,

    // Only the program's owner or manager is permitted.
    #[msg("CallerNotManagerOrOwner")]
    CallerNotManagerOrOwner = 0xa,

    /// Specified key is already the program's manager.
    #[msg("ExistingManagerAddress")]
    ExistingManagerAddress = 0x20,
}
