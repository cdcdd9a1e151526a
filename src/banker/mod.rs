mod breaker;
mod core;
mod errors;

pub use breaker::CoinBreaker;
pub use core::Banker;
pub use errors::BankerError;
