/// A coin denomination, valued in cents
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u32)]
pub enum Coin {
    Penny = 1,
    Nickel = 5,
    Dime = 10,
    Quarter = 25,
}

impl Coin {
    /// Number of known denominations
    pub const COUNT: usize = 4;

    /// Every denomination, smallest first
    pub const ALL: [Coin; Coin::COUNT] = [Coin::Penny, Coin::Nickel, Coin::Dime, Coin::Quarter];

    /// Value of the coin in cents
    pub fn cents(self) -> u32 {
        self as u32
    }

    pub fn name(self) -> &'static str {
        match self {
            Coin::Penny => "Penny",
            Coin::Nickel => "Nickel",
            Coin::Dime => "Dime",
            Coin::Quarter => "Quarter",
        }
    }

    /// Position of the coin in [`Coin::ALL`]
    pub(crate) fn index(self) -> usize {
        match self {
            Coin::Penny => 0,
            Coin::Nickel => 1,
            Coin::Dime => 2,
            Coin::Quarter => 3,
        }
    }

    /// The largest known denomination
    pub fn largest() -> Coin {
        Coin::Quarter
    }
}
