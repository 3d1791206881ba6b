mod initialize;
pub use initialize::*;

mod ownership;
pub use ownership::*;

mod protected_function;
pub use protected_function::*;

mod read;
pub use read::*;

#[cfg(test)]
mod test;
