//! Amount parsing and counting helpers

pub mod constants;
mod counting;
mod errors;
mod validation;

pub use constants::MAX_COUNTABLE_CENTS;
pub use counting::count_breaking_ways;
pub use errors::UtilsError;
pub use validation::{parse_amount, validate_amount};
