#[anchor_lang::prelude::error_code]
pub enum ManageableError {
    /// Only the program's owner is permitted.
    #[msg("CallerNotOwner")]
    CallerNotOwner = 0x2,

    /// Only the program's pending owner is permitted.
    #[msg("CallerNotPendingOwner")]
    CallerNotPendingOwner = 0x4,

    /// The zero pubkey cannot be offered ownership.
    #[msg("PendingOwnerIsZero")]
    PendingOwnerIsZero = 0x6,

    /// Only the program's manager is permitted.
    #[msg("CallerNotManager")]
    CallerNotManager = 0x8,

    /// Specified key is already the program's manager.
    #[msg("ExistingManagerAddress")]
    ExistingManagerAddress = 0x20,
}
