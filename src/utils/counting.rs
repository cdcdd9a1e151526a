use log::{debug, warn};

use crate::coin::Coin;
use crate::utils::constants::MAX_COUNTABLE_CENTS;
use crate::utils::errors::UtilsError;

/// Count the ways to break `cents` using the given coins, without enumerating them
///
/// Unbounded coin-change recurrence, walked one total at a time. Each coin only
/// needs the last `coin.cents()` totals of its own row, so memory stays bounded
/// by the coin values rather than the amount. Saturates at `u64::MAX`.
///
/// # Errors
///
/// Returns an error if `cents` is above [`MAX_COUNTABLE_CENTS`].
pub fn count_breaking_ways(coins: &[Coin], cents: u32) -> Result<u64, UtilsError> {
    debug!(
        "Counting breaking ways for {} cents over {} coins",
        cents,
        coins.len()
    );

    if cents > MAX_COUNTABLE_CENTS {
        warn!(
            "Amount {} is above the counting limit of {}",
            cents, MAX_COUNTABLE_CENTS
        );
        return Err(UtilsError::AmountTooLarge {
            cents,
            limit: MAX_COUNTABLE_CENTS,
        });
    }

    // rows[k][t % value] holds the ways to make `t` with the first k + 1 coins
    let mut rows: Vec<Vec<u64>> = coins
        .iter()
        .map(|coin| vec![0u64; coin.cents() as usize])
        .collect();

    let mut ways = 1;
    for total in 0..=cents as usize {
        ways = u64::from(total == 0);
        for row in &mut rows {
            let slot = total % row.len();
            if let Some(cell) = row.get_mut(slot) {
                ways = ways.saturating_add(*cell);
                *cell = ways;
            }
        }
    }

    debug!("Counted {} breaking ways", ways);
    Ok(ways)
}
