use thiserror::Error;

use crate::utils::UtilsError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum BankerError {
    #[error("At least one coin is required to break an amount")]
    EmptyCoinSet,
    #[error("A penny is required so every amount can be broken exactly")]
    MissingUnitCoin,
    #[error("Invalid amount: {0}")]
    Utils(#[from] UtilsError),
}
