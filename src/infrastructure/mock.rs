use crate::domain::coin::{Coin, CoinDraft, MarketData};
use crate::domain::ports::CoinRegistry;
use anyhow::Result;
use chrono::{Duration, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use tracing::info;
use uuid::Uuid;

// Base prices roughly span the sub-cent to double-digit range so every
// display band shows up in demo data.
const SEED_COINS: &[(&str, &str, f64)] = &[
    ("Moon Rocket", "MOONR", 0.0042),
    ("Doge Classic", "DOGEC", 0.085),
    ("Pepe Gold", "PEPEG", 0.0000071),
    ("Solana Cat", "SCAT", 1.37),
    ("Diamond Paws", "DMND", 0.00055),
    ("Giga Chad", "GIGA", 12.5),
    ("Rug Shield", "RUGS", 0.019),
    ("Banana Stand", "BNNA", 0.31),
];

/// In-memory registry with fabricated market data, for demos and tests.
pub struct MockCoinRegistry {
    coins: Vec<Coin>,
}

impl MockCoinRegistry {
    /// Fabricate `count` coins from fresh entropy.
    pub fn new(count: usize) -> Self {
        Self::with_seed(count, rand::random::<u64>())
    }

    /// Fabricate `count` coins reproducibly from an explicit seed.
    pub fn with_seed(count: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let coins = (0..count).filter_map(|i| fabricate(i, &mut rng)).collect();
        Self { coins }
    }

    pub fn empty() -> Self {
        Self { coins: Vec::new() }
    }

    pub fn from_coins(coins: Vec<Coin>) -> Self {
        Self { coins }
    }
}

impl Default for MockCoinRegistry {
    fn default() -> Self {
        Self::new(6)
    }
}

impl CoinRegistry for MockCoinRegistry {
    fn snapshot(&self) -> Result<Vec<Coin>> {
        Ok(self.coins.clone())
    }

    fn register(&mut self, coin: Coin) -> Result<()> {
        if self.coins.iter().any(|c| c.id == coin.id) {
            anyhow::bail!("coin id {} already listed", coin.id);
        }
        info!("Listing {} ({})", coin.name, coin.symbol);
        self.coins.push(coin);
        Ok(())
    }
}

fn fabricate(i: usize, rng: &mut StdRng) -> Option<Coin> {
    let (base_name, base_symbol, base_price) = SEED_COINS[i % SEED_COINS.len()];
    let generation = i / SEED_COINS.len();
    let (name, symbol) = if generation == 0 {
        (base_name.to_string(), base_symbol.to_string())
    } else {
        (
            format!("{} {}", base_name, generation + 1),
            format!("{}{}", base_symbol, generation + 1),
        )
    };

    let price = base_price * rng.random_range(0.5..1.5);
    let volume = rng.random_range(500.0..4_000_000.0);
    let market_cap = volume * rng.random_range(2.0..20.0);
    let change = rng.random_range(-40.0..60.0);

    let market = MarketData {
        price: Decimal::from_f64(price).unwrap_or(Decimal::ZERO).round_dp(8),
        change_24h: Decimal::from_f64(change)
            .unwrap_or(Decimal::ZERO)
            .round_dp(2),
        volume_24h: Decimal::from_f64(volume)
            .unwrap_or(Decimal::ZERO)
            .round_dp(2),
        market_cap: Decimal::from_f64(market_cap)
            .unwrap_or(Decimal::ZERO)
            .round_dp(2),
        holders: rng.random_range(12..80_000),
    };

    let created_at = Utc::now() - Duration::hours(rng.random_range(1..720));
    let draft = CoinDraft::new(name.clone(), symbol, Some(format!("{name} community token")), None).ok()?;
    Coin::new(Uuid::new_v4().to_string(), draft, created_at, market).ok()
}
