mod core;
mod errors;
mod state;

pub use core::BreakingWays;
pub use errors::IteratorError;

#[cfg(test)]
mod tests;
