use thiserror::Error;

use crate::coin::Coin;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum IteratorError {
    #[error("Coins must be distinct and sorted largest first: {0:?}")]
    UnorderedCoins(Vec<Coin>),
}
