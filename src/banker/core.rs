use log::{debug, warn};

use crate::banker::breaker::CoinBreaker;
use crate::banker::errors::BankerError;
use crate::coin::Coin;
use crate::iterator::BreakingWays;
use crate::utils::count_breaking_ways;

/// Entry point for breaking amounts into coins
///
/// Holds the coin chain, largest denomination first, and hands every request to
/// the breaker at its head.
#[derive(Debug, Clone)]
pub struct Banker {
    coins: Vec<Coin>,
}

impl Banker {
    /// Create a banker over every known denomination
    pub fn new() -> Self {
        let coins: Vec<Coin> = Coin::ALL.iter().rev().copied().collect();
        debug!("Built coin chain headed by {}", Coin::largest());
        Self { coins }
    }

    /// Create a banker over a subset of the known denominations
    ///
    /// Duplicates are ignored and order does not matter.
    ///
    /// # Errors
    ///
    /// Returns an error if `coins` is empty or does not contain [`Coin::Penny`].
    pub fn with_coins(coins: &[Coin]) -> Result<Self, BankerError> {
        if coins.is_empty() {
            warn!("Refusing to build an empty coin chain");
            return Err(BankerError::EmptyCoinSet);
        }
        if !coins.contains(&Coin::Penny) {
            warn!("Refusing to build a coin chain without a penny: {:?}", coins);
            return Err(BankerError::MissingUnitCoin);
        }

        let mut chain = coins.to_vec();
        chain.sort_unstable_by(|a, b| b.cmp(a));
        chain.dedup();
        debug!("Built coin chain {:?}", chain);
        Ok(Self { coins: chain })
    }

    /// Coins in the chain, largest first
    pub fn coins(&self) -> &[Coin] {
        &self.coins
    }

    /// The breaker for the largest coin
    pub fn chief_breaker(&self) -> Option<CoinBreaker<'_>> {
        CoinBreaker::at(&self.coins, 0)
    }

    /// Lazily enumerate every way to break `cents` into coins
    pub fn find_breaking_ways(&self, cents: u32) -> BreakingWays<'_> {
        match self.chief_breaker() {
            Some(breaker) => breaker.find_breaking_ways(cents),
            // Not reachable: both constructors leave at least one coin in the chain
            None => BreakingWays::new(&[], cents),
        }
    }

    /// Number of ways to break `cents`, computed without enumerating them
    ///
    /// # Errors
    ///
    /// Returns an error if `cents` is above [`MAX_COUNTABLE_CENTS`](crate::utils::MAX_COUNTABLE_CENTS).
    pub fn count_breaking_ways(&self, cents: u32) -> Result<u64, BankerError> {
        Ok(count_breaking_ways(&self.coins, cents)?)
    }
}

impl Default for Banker {
    fn default() -> Self {
        Self::new()
    }
}
