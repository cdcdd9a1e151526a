//! Coin denominations and the per-coin count collections built from them

mod collection;
mod denomination;
mod display;

pub use collection::CoinCollection;
pub use denomination::Coin;
