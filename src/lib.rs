//! Coinbreak - A library for enumerating every way to break an amount into coins
//!
//! Amounts are whole cents. Each way of breaking an amount is a [`CoinCollection`]
//! holding a count per [`Coin`], produced lazily by a chain of [`CoinBreaker`]s that
//! runs from the largest denomination down to the penny.

pub mod banker;
pub mod coin;
pub mod iterator;
pub mod utils;

// Re-export the main public API
pub use banker::{Banker, BankerError, CoinBreaker};
pub use coin::{Coin, CoinCollection};
pub use iterator::{BreakingWays, IteratorError};
pub use utils::{
    MAX_COUNTABLE_CENTS, UtilsError, count_breaking_ways, parse_amount, validate_amount,
};

/// Collect every way to break `cents` using all known denominations
///
/// This is a convenience function that validates the amount, creates a default
/// banker and collects its enumeration.
///
/// # Arguments
///
/// * `cents` - The amount to break, in cents
///
/// # Errors
///
/// This function will return an error if:
/// * The amount is negative
/// * The amount does not fit in a `u32`
///
/// # Examples
///
/// ```
/// use coinbreak::{Coin, find_breaking_ways};
///
/// // Six cents: six pennies, or a nickel and a penny
/// match find_breaking_ways(6) {
///     Ok(ways) => {
///         assert_eq!(ways.len(), 2);
///         assert_eq!(ways[1][Coin::Nickel], 1);
///     }
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
pub fn find_breaking_ways(cents: i64) -> Result<Vec<CoinCollection>, BankerError> {
    let cents = validate_amount(cents)?;

    let banker = Banker::new();
    Ok(banker.find_breaking_ways(cents).collect())
}
