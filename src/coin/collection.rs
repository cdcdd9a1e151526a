use std::ops::{Index, IndexMut};

use crate::coin::denomination::Coin;

/// One way of breaking an amount: a count for every denomination
///
/// Denominations that were never set read as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CoinCollection {
    counts: [u32; Coin::COUNT],
}

impl CoinCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total value of the collection in cents
    pub fn total_cents(&self) -> u64 {
        self.iter()
            .map(|(coin, count)| u64::from(coin.cents()) * u64::from(count))
            .sum()
    }

    /// Total number of coins in the collection
    pub fn coin_count(&self) -> u64 {
        self.counts.iter().map(|&count| u64::from(count)).sum()
    }

    /// Iterate over `(coin, count)` pairs, largest denomination first, including zero counts
    pub fn iter(&self) -> impl Iterator<Item = (Coin, u32)> + '_ {
        Coin::ALL
            .iter()
            .rev()
            .map(move |&coin| (coin, self[coin]))
    }
}

impl Index<Coin> for CoinCollection {
    type Output = u32;

    fn index(&self, coin: Coin) -> &u32 {
        &self.counts[coin.index()]
    }
}

impl IndexMut<Coin> for CoinCollection {
    fn index_mut(&mut self, coin: Coin) -> &mut u32 {
        &mut self.counts[coin.index()]
    }
}
