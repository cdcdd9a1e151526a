use std::iter::FusedIterator;

use log::{debug, trace, warn};

use crate::coin::{Coin, CoinCollection};

use super::errors::IteratorError;
use super::state::BreakerFrame;

/// Lazy sequence of every way to break an amount over a descending chain of coins
///
/// Combinations come out with the larger coins counting up slowest: zero of the
/// largest coin first, then one, and so on, recursively down the chain. Nothing past
/// the current combination is computed until it is asked for.
///
/// If the smallest coin is not a penny, branches that leave cents over are skipped.
#[derive(Debug, Clone)]
pub struct BreakingWays<'a> {
    coins: &'a [Coin],
    frames: Vec<BreakerFrame>,
    position: usize,
    started: bool,
    exhausted: bool,
}

impl<'a> BreakingWays<'a> {
    /// Enumerate over an arbitrary chain of coins
    ///
    /// # Errors
    ///
    /// Returns an error unless `coins` is strictly descending. A repeated coin
    /// would count twice into the same slot of each combination.
    pub fn try_new(coins: &'a [Coin], cents: u32) -> Result<Self, IteratorError> {
        if !coins.windows(2).all(|pair| matches!(pair, [a, b] if a > b)) {
            warn!("Rejecting coin chain that is not strictly descending: {:?}", coins);
            return Err(IteratorError::UnorderedCoins(coins.to_vec()));
        }
        Ok(Self::new(coins, cents))
    }

    /// `coins` must be distinct and sorted largest first.
    pub(crate) fn new(coins: &'a [Coin], cents: u32) -> Self {
        debug!(
            "Starting enumeration of {} cents over {} coins",
            cents,
            coins.len()
        );

        let mut frames = Vec::with_capacity(coins.len());
        if let Some(&largest) = coins.first() {
            frames.push(BreakerFrame::new(largest, cents));
        }

        Self {
            coins,
            frames,
            position: 0,
            started: false,
            exhausted: coins.is_empty(),
        }
    }

    /// Number of combinations yielded so far
    pub fn position(&self) -> usize {
        self.position
    }

    /// Push zero-count frames until the chain bottoms out, then fill the smallest coin.
    /// Returns false if the smallest coin cannot cover what is left exactly.
    fn descend(&mut self) -> bool {
        while self.frames.len() < self.coins.len() {
            let remainder = self.frames.last().map_or(0, BreakerFrame::remainder);
            let depth = self.frames.len();
            match self.coins.get(depth) {
                Some(&coin) => self.frames.push(BreakerFrame::new(coin, remainder)),
                None => break,
            }
        }
        self.frames.last_mut().is_some_and(BreakerFrame::fill)
    }

    /// Move to the next combination, carrying from the second-smallest coin upward
    fn step(&mut self) -> bool {
        // The smallest coin never branches
        self.frames.pop();
        while let Some(frame) = self.frames.last_mut() {
            if frame.advance() {
                return true;
            }
            self.frames.pop();
        }
        false
    }

    fn snapshot(&self) -> CoinCollection {
        let mut collection = CoinCollection::new();
        for frame in &self.frames {
            collection[frame.coin] = frame.count;
        }
        collection
    }
}

impl Iterator for BreakingWays<'_> {
    type Item = CoinCollection;

    fn next(&mut self) -> Option<CoinCollection> {
        loop {
            if self.exhausted {
                return None;
            }

            if !self.started {
                self.started = true;
            } else if !self.step() {
                debug!("Enumeration exhausted after {} combinations", self.position);
                self.exhausted = true;
                return None;
            }

            if !self.descend() {
                // Only reachable when the smallest coin is not a penny
                trace!("Skipping combination with leftover cents");
                continue;
            }

            let collection = self.snapshot();
            self.position += 1;
            trace!("Combination {}: {}", self.position, collection);
            return Some(collection);
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.exhausted {
            (0, Some(0))
        } else {
            (0, None)
        }
    }
}

impl FusedIterator for BreakingWays<'_> {}
