use thiserror::Error;

/// Errors that can occur while reading or checking an amount of cents
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UtilsError {
    #[error("Amount cannot be empty")]
    EmptyAmount,
    #[error("Amount cannot be negative: {0}")]
    NegativeAmount(String),
    #[error("Amount must be a whole number of cents: {0}")]
    InvalidAmount(String),
    #[error("Amount is too large: {0}")]
    AmountOverflow(i64),
    #[error("Amount {cents} is above the counting limit of {limit} cents")]
    AmountTooLarge { cents: u32, limit: u32 },
}
