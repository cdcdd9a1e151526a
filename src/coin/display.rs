use std::fmt;

use crate::coin::collection::CoinCollection;
use crate::coin::denomination::Coin;

impl fmt::Display for Coin {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

// Renders as "<count> <Coin> " per non-zero denomination, largest first.
impl fmt::Display for CoinCollection {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (coin, count) in self.iter().filter(|&(_, count)| count > 0) {
            write!(f, "{} {} ", count, coin)?;
        }
        Ok(())
    }
}
