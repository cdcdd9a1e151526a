use crate::coin::Coin;

/// Enumeration state held for one link of the coin chain
#[derive(Debug, Clone)]
pub struct BreakerFrame {
    pub(crate) coin: Coin,
    /// Cents handed to this link by the larger coins above it
    pub(crate) amount: u32,
    pub(crate) count: u32,
}

impl BreakerFrame {
    pub fn new(coin: Coin, amount: u32) -> Self {
        Self {
            coin,
            amount,
            count: 0,
        }
    }

    /// Cents left for the smaller coins below this link
    pub fn remainder(&self) -> u32 {
        self.amount - self.count * self.coin.cents()
    }

    /// Try one more coin of this denomination. Returns false if it would overshoot.
    pub fn advance(&mut self) -> bool {
        let Some(next) = self.count.checked_add(1) else {
            return false;
        };
        match next.checked_mul(self.coin.cents()) {
            Some(used) if used <= self.amount => {
                self.count = next;
                true
            }
            _ => false,
        }
    }

    /// Smallest link: as many coins as fit, no further branching.
    /// Returns whether they cover the amount exactly.
    pub fn fill(&mut self) -> bool {
        self.count = self.amount / self.coin.cents();
        self.remainder() == 0
    }
}
