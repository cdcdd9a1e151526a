// Limits for the counting helper
/// Largest amount `count_breaking_ways` accepts: one million dollars
pub const MAX_COUNTABLE_CENTS: u32 = 100_000_000;
