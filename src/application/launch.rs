use crate::domain::coin::{Coin, CoinDraft, MarketData};
use crate::domain::ports::CoinRegistry;
use crate::domain::trading::fees::FeeSchedule;
use anyhow::Result;
use chrono::Utc;
use rust_decimal::Decimal;
use tracing::info;
use uuid::Uuid;

/// What a successful launch hands back: the listed coin and the flat,
/// all-inclusive fee the creator owes.
#[derive(Debug, Clone)]
pub struct LaunchReceipt {
    pub coin: Coin,
    pub mint_fee: Decimal,
}

/// Turns validated drafts into listed coins.
///
/// Stamps id and creation time, zeroes the market figures (a brand-new
/// coin has no trading history) and registers the coin. Collecting the
/// mint fee is left to whoever executes the receipt.
pub struct CoinLauncher {
    fees: FeeSchedule,
}

impl CoinLauncher {
    pub fn new(fees: FeeSchedule) -> Self {
        Self { fees }
    }

    pub fn launch(
        &self,
        registry: &mut dyn CoinRegistry,
        draft: CoinDraft,
    ) -> Result<LaunchReceipt> {
        let coin = Coin::new(
            Uuid::new_v4().to_string(),
            draft,
            Utc::now(),
            MarketData::default(),
        )?;

        registry.register(coin.clone())?;
        info!(
            "Launched {} ({}) for a {} mint fee",
            coin.name, coin.symbol, self.fees.mint_fee
        );

        Ok(LaunchReceipt {
            coin,
            mint_fee: self.fees.mint_fee,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::mock::MockCoinRegistry;
    use rust_decimal_macros::dec;

    #[test]
    fn test_launch_lists_a_zeroed_coin() {
        let mut registry = MockCoinRegistry::empty();
        let launcher = CoinLauncher::new(FeeSchedule::default());
        let draft = CoinDraft::new("Moon Rocket", "moonr", None, None).unwrap();

        let receipt = launcher.launch(&mut registry, draft).unwrap();
        assert_eq!(receipt.coin.symbol, "MOONR");
        assert_eq!(receipt.coin.price, dec!(0));
        assert_eq!(receipt.coin.volume_24h, dec!(0));
        assert_eq!(receipt.coin.holders, 0);
        assert_eq!(receipt.mint_fee, dec!(0.11));

        let snapshot = registry.snapshot().unwrap();
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].id, receipt.coin.id);
    }

    #[test]
    fn test_each_launch_gets_a_distinct_id() {
        let mut registry = MockCoinRegistry::empty();
        let launcher = CoinLauncher::new(FeeSchedule::default());

        let a = launcher
            .launch(
                &mut registry,
                CoinDraft::new("Coin A", "AAA", None, None).unwrap(),
            )
            .unwrap();
        let b = launcher
            .launch(
                &mut registry,
                CoinDraft::new("Coin B", "BBB", None, None).unwrap(),
            )
            .unwrap();

        assert_ne!(a.coin.id, b.coin.id);
        assert_eq!(registry.snapshot().unwrap().len(), 2);
    }
}
