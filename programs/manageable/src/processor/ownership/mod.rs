mod claim;
pub use claim::*;

mod renounce;
pub use renounce::*;

mod transfer;
pub use transfer::*;
