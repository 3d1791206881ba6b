mod manager_transferred;
pub use manager_transferred::*;

mod ownership_offered;
pub use ownership_offered::*;

mod ownership_transferred;
pub use ownership_transferred::*;

mod protected_function_called;
pub use protected_function_called::*;
