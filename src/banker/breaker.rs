use crate::coin::Coin;
use crate::iterator::BreakingWays;

/// One link of the descending coin chain
///
/// A breaker is a cursor into the banker's coin list: it owns the coin at `rank`
/// and hands everything smaller to the breaker at `rank + 1`.
#[derive(Debug, Clone, Copy)]
pub struct CoinBreaker<'a> {
    coins: &'a [Coin],
    rank: usize,
    coin: Coin,
}

impl<'a> CoinBreaker<'a> {
    /// Returns `None` if `rank` is past the end of the chain.
    pub(crate) fn at(coins: &'a [Coin], rank: usize) -> Option<Self> {
        coins
            .get(rank)
            .map(|&coin| Self { coins, rank, coin })
    }

    pub fn current_coin(&self) -> Coin {
        self.coin
    }

    pub fn next_coin(&self) -> Option<Coin> {
        self.coins.get(self.rank + 1).copied()
    }

    pub fn next_breaker(&self) -> Option<CoinBreaker<'a>> {
        Self::at(self.coins, self.rank + 1)
    }

    /// Every way to break `cents` using this coin and the smaller ones below it
    pub fn find_breaking_ways(&self, cents: u32) -> BreakingWays<'a> {
        BreakingWays::new(self.coins.get(self.rank..).unwrap_or(&[]), cents)
    }
}
