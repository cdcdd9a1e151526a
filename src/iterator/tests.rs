use crate::banker::Banker;
use crate::coin::{Coin, CoinCollection};
use crate::iterator::{BreakingWays, IteratorError};

const DESCENDING: [Coin; 4] = [Coin::Quarter, Coin::Dime, Coin::Nickel, Coin::Penny];

fn collect_all(cents: u32) -> Vec<CoinCollection> {
    BreakingWays::new(&DESCENDING, cents).collect()
}

#[test]
fn iterator_yields_single_zero_combination_for_zero() {
    let ways = collect_all(0);
    assert_eq!(ways.len(), 1);
    assert_eq!(ways.first(), Some(&CoinCollection::new()));
}

#[test]
fn iterator_starts_with_all_pennies() {
    let mut it = BreakingWays::new(&DESCENDING, 17);
    let first = it.next();
    assert!(first.is_some(), "expected a first combination");
    if let Some(first) = first {
        assert_eq!(first[Coin::Penny], 17);
        assert_eq!(first.coin_count(), 17);
    }
}

#[test]
fn iterator_counts_smaller_coins_fastest() {
    let ways = collect_all(11);
    let rendered: Vec<String> = ways.iter().map(|w| w.to_string()).collect();
    assert_eq!(
        rendered,
        vec![
            "11 Penny ",
            "1 Nickel 6 Penny ",
            "2 Nickel 1 Penny ",
            "1 Dime 1 Penny ",
        ]
    );
}

#[test]
fn iterator_every_combination_sums_to_amount() {
    for cents in 0..=60 {
        for way in BreakingWays::new(&DESCENDING, cents) {
            assert_eq!(way.total_cents(), u64::from(cents), "bad way {}", way);
        }
    }
}

#[test]
fn iterator_combinations_are_distinct() {
    let ways = collect_all(50);
    for (i, a) in ways.iter().enumerate() {
        for b in ways.iter().skip(i + 1) {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn iterator_single_coin_chain() {
    let ways: Vec<_> = BreakingWays::new(&[Coin::Penny], 9).collect();
    assert_eq!(ways.len(), 1);
    if let Some(way) = ways.first() {
        assert_eq!(way[Coin::Penny], 9);
    }
}

#[test]
fn iterator_empty_chain_yields_nothing() {
    let mut it = BreakingWays::new(&[], 5);
    assert!(it.next().is_none());
    assert_eq!(it.size_hint(), (0, Some(0)));
}

#[test]
fn iterator_is_fused() {
    let mut it = BreakingWays::new(&DESCENDING, 3);
    assert!(it.next().is_some());
    assert!(it.next().is_none());
    assert!(it.next().is_none());
    assert_eq!(it.position(), 1);
}

#[test]
fn iterator_stops_early_on_huge_amounts() {
    // Far too many combinations to enumerate; only the requested prefix is built.
    let mut it = BreakingWays::new(&DESCENDING, 1_000_000);
    let prefix: Vec<_> = it.by_ref().take(3).collect();
    assert_eq!(prefix.len(), 3);
    assert_eq!(it.position(), 3);
    assert_eq!(prefix.first().map(|w| w[Coin::Penny]), Some(1_000_000));
    assert_eq!(prefix.get(1).map(|w| w[Coin::Nickel]), Some(1));
    assert_eq!(prefix.get(2).map(|w| w[Coin::Nickel]), Some(2));
}

#[test]
fn iterator_clone_resumes_at_same_point() {
    let mut it = BreakingWays::new(&DESCENDING, 30);
    it.nth(4);
    let rest_a: Vec<_> = it.clone().collect();
    let rest_b: Vec<_> = it.collect();
    assert_eq!(rest_a, rest_b);
    assert_eq!(rest_a.len(), 18 - 5);
}

#[test]
fn iterator_yielded_values_are_independent() {
    let mut it = BreakingWays::new(&DESCENDING, 10);
    let first = it.next();
    let second = it.next();
    assert_ne!(first, second);
    assert_eq!(first.map(|w| w[Coin::Penny]), Some(10));
}

#[test]
fn iterator_skips_inexact_ways_without_penny() {
    let ways: Vec<_> = BreakingWays::new(&[Coin::Dime, Coin::Nickel], 25).collect();
    assert_eq!(ways.len(), 3);
    for way in &ways {
        assert_eq!(way.total_cents(), 25);
    }
    assert_eq!(BreakingWays::new(&[Coin::Dime], 15).count(), 0);
}

#[test]
fn iterator_try_new_accepts_descending_chain() {
    let it = BreakingWays::try_new(&DESCENDING, 30);
    assert!(it.is_ok());
    if let Ok(it) = it {
        assert_eq!(it.count(), 18);
    }
    assert!(BreakingWays::try_new(&[], 5).is_ok());
}

#[test]
fn iterator_try_new_rejects_repeated_coin() {
    let result = BreakingWays::try_new(&[Coin::Penny, Coin::Penny], 2);
    assert_eq!(
        result.err(),
        Some(IteratorError::UnorderedCoins(vec![Coin::Penny, Coin::Penny]))
    );
}

#[test]
fn iterator_try_new_rejects_ascending_chain() {
    let result = BreakingWays::try_new(&[Coin::Penny, Coin::Nickel], 10);
    assert!(matches!(result, Err(IteratorError::UnorderedCoins(_))));

    let result = BreakingWays::try_new(&[Coin::Quarter, Coin::Penny, Coin::Dime], 10);
    assert!(matches!(result, Err(IteratorError::UnorderedCoins(_))));
}

#[test]
fn iterator_breaker_chains_never_repeat_a_coin() {
    // Every way through the public chain keeps the sum, even with duplicate input coins
    let banker = Banker::with_coins(&[Coin::Penny, Coin::Penny, Coin::Nickel]);
    assert!(banker.is_ok());
    if let Ok(banker) = banker {
        let ways: Vec<_> = banker.find_breaking_ways(12).collect();
        assert_eq!(ways.len(), 3);
        assert!(ways.iter().all(|w| w.total_cents() == 12));
    }
}
