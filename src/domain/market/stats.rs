use crate::domain::coin::Coin;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Aggregate totals over a coin snapshot.
///
/// Recomputed on demand from a fresh snapshot, never cached. Sums are
/// exact decimal accumulation, so the result is independent of input
/// order; rounding happens only at formatting boundaries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketStats {
    pub total_volume_24h: Decimal,
    pub total_market_cap: Decimal,
    pub active_coins: usize,
}

impl MarketStats {
    /// Fold a snapshot into its aggregate totals. An empty snapshot is
    /// valid and yields all zeros.
    pub fn aggregate(coins: &[Coin]) -> Self {
        let mut total_volume_24h = Decimal::ZERO;
        let mut total_market_cap = Decimal::ZERO;

        for coin in coins {
            total_volume_24h += coin.volume_24h;
            total_market_cap += coin.market_cap;
        }

        Self {
            total_volume_24h,
            total_market_cap,
            active_coins: coins.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::coin::{CoinDraft, MarketData};
    use chrono::Utc;
    use rust_decimal_macros::dec;

    fn coin(id: &str, volume: Decimal, market_cap: Decimal) -> Coin {
        let draft = CoinDraft::new(format!("Coin {id}"), "MOCK", None, None).unwrap();
        Coin::new(
            id,
            draft,
            Utc::now(),
            MarketData {
                volume_24h: volume,
                market_cap,
                ..MarketData::default()
            },
        )
        .unwrap()
    }

    #[test]
    fn test_empty_snapshot_is_all_zero() {
        let stats = MarketStats::aggregate(&[]);
        assert_eq!(
            stats,
            MarketStats {
                total_volume_24h: dec!(0),
                total_market_cap: dec!(0),
                active_coins: 0,
            }
        );
    }

    #[test]
    fn test_totals_sum_every_coin() {
        let coins = vec![
            coin("a", dec!(100.25), dec!(1000)),
            coin("b", dec!(500), dec!(2500.5)),
            coin("c", dec!(200), dec!(750)),
        ];

        let stats = MarketStats::aggregate(&coins);
        assert_eq!(stats.total_volume_24h, dec!(800.25));
        assert_eq!(stats.total_market_cap, dec!(4250.5));
        assert_eq!(stats.active_coins, 3);
    }

    #[test]
    fn test_aggregation_is_order_independent() {
        let forward = vec![
            coin("a", dec!(0.0000001), dec!(1)),
            coin("b", dec!(4000000), dec!(2)),
            coin("c", dec!(0.33), dec!(3)),
        ];
        let mut reversed = forward.clone();
        reversed.reverse();

        assert_eq!(
            MarketStats::aggregate(&forward),
            MarketStats::aggregate(&reversed)
        );
    }
}
