use rand::Rng;

use crate::stock::{total_remaining, StockItem};

/// Returned when a draw is requested against a fully depleted snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoStockError;

impl std::fmt::Display for NoStockError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("no stock available")
    }
}

impl std::error::Error for NoStockError {}

/// Draws up to `requested` units without replacement, weighted by remaining
/// count.
///
/// The pool holds one slot per remaining unit, so pick probability is exactly
/// proportional to remaining stock and a drawn unit cannot come up again
/// within the same request. The loop stops early once the pool empties, so a
/// request larger than the total remaining yields a short result rather than
/// an error. The snapshot is mutated in place; an empty pool leaves it
/// untouched and returns `NoStockError`.
///
/// Deterministic given the injected `rng`.
pub fn draw(
    stock: &mut [StockItem],
    requested: u32,
    rng: &mut impl Rng,
) -> Result<Vec<String>, NoStockError> {
    let mut pool = Vec::with_capacity(total_remaining(stock) as usize);
    for (index, item) in stock.iter().enumerate() {
        for _ in 0..item.remain {
            pool.push(index);
        }
    }

    if pool.is_empty() {
        return Err(NoStockError);
    }

    let mut drawn = Vec::with_capacity(requested as usize);
    for _ in 0..requested {
        if pool.is_empty() {
            break;
        }
        // A uniformly chosen slot leaves the pool a uniform multiset, so
        // swap_remove matches an order-preserving removal in distribution.
        let slot = rng.gen_range(0..pool.len());
        let index = pool.swap_remove(slot);
        drawn.push(stock[index].name.clone());
        stock[index].remain = stock[index].remain.saturating_sub(1);
    }

    Ok(drawn)
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::stock::StockSnapshot;

    use super::*;

    fn snapshot(items: &[(&str, u32)]) -> StockSnapshot {
        items
            .iter()
            .map(|(name, remain)| StockItem {
                name: (*name).to_string(),
                remain: *remain,
            })
            .collect()
    }

    #[test]
    fn draw_conserves_total_units() {
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut stock = snapshot(&[("A", 5), ("B", 0), ("C", 3), ("D", 1)]);
            let before = total_remaining(&stock);

            let drawn = draw(&mut stock, 4, &mut rng).expect("pool should not be empty");

            assert_eq!(total_remaining(&stock), before - drawn.len() as u64);
        }
    }

    #[test]
    fn draw_never_exceeds_requested_or_available() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut stock = snapshot(&[("A", 2), ("B", 1)]);

        let drawn = draw(&mut stock, 50, &mut rng).expect("pool should not be empty");

        assert_eq!(drawn.len(), 3);
        assert_eq!(total_remaining(&stock), 0);
    }

    #[test]
    fn draw_skips_depleted_items() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut stock = snapshot(&[("A", 0), ("B", 4), ("C", 0)]);

        let drawn = draw(&mut stock, 4, &mut rng).expect("pool should not be empty");

        assert!(drawn.iter().all(|name| name == "B"));
        assert_eq!(stock, snapshot(&[("A", 0), ("B", 0), ("C", 0)]));
    }

    #[test]
    fn empty_pool_leaves_snapshot_untouched() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut stock = snapshot(&[("A", 0), ("B", 0)]);
        let before = stock.clone();

        let error = draw(&mut stock, 1, &mut rng).expect_err("empty pool should fail");

        assert_eq!(error, NoStockError);
        assert_eq!(stock, before);
    }

    #[test]
    fn exhaustive_draw_returns_exact_multiset() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut stock = snapshot(&[("A", 2), ("B", 1)]);

        let mut drawn = draw(&mut stock, 3, &mut rng).expect("pool should not be empty");
        drawn.sort();

        assert_eq!(drawn, vec!["A", "A", "B"]);
        assert_eq!(stock, snapshot(&[("A", 0), ("B", 0)]));

        let error = draw(&mut stock, 1, &mut rng).expect_err("depleted pool should fail");
        assert_eq!(error, NoStockError);
    }

    #[test]
    fn draw_is_deterministic_for_identical_seed() {
        let mut stock_a = snapshot(&[("A", 10), ("B", 10), ("C", 10)]);
        let mut stock_b = stock_a.clone();
        let mut rng_a = StdRng::seed_from_u64(7);
        let mut rng_b = StdRng::seed_from_u64(7);

        let drawn_a = draw(&mut stock_a, 8, &mut rng_a).expect("pool should not be empty");
        let drawn_b = draw(&mut stock_b, 8, &mut rng_b).expect("pool should not be empty");

        assert_eq!(drawn_a, drawn_b);
        assert_eq!(stock_a, stock_b);
    }

    #[test]
    fn remaining_counts_never_go_negative() {
        let mut rng = StdRng::seed_from_u64(99);
        let mut stock = snapshot(&[("A", 1), ("B", 2), ("C", 1)]);

        draw(&mut stock, 50, &mut rng).expect("pool should not be empty");

        assert!(stock.iter().all(|item| item.remain == 0));
    }
}
