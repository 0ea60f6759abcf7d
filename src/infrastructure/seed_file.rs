//! Declarative seed coins from a TOML file.
//!
//! ```toml
//! [[coin]]
//! name = "Moon Rocket"
//! symbol = "MOONR"
//! price = 0.0042
//! volume_24h = 125000
//! market_cap = 980000
//! change_24h = 12.5
//! holders = 420
//! ```

use crate::domain::coin::{Coin, CoinDraft, MarketData};
use crate::infrastructure::mock::MockCoinRegistry;
use anyhow::{Context, Result};
use chrono::Utc;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::path::Path;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
struct SeedFile {
    #[serde(default)]
    coin: Vec<SeedCoin>,
}

#[derive(Debug, Deserialize)]
struct SeedCoin {
    name: String,
    symbol: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    image: Option<String>,
    #[serde(default)]
    price: Decimal,
    #[serde(default)]
    change_24h: Decimal,
    #[serde(default)]
    volume_24h: Decimal,
    #[serde(default)]
    market_cap: Decimal,
    #[serde(default)]
    holders: u64,
}

/// Build a registry from a TOML seed file.
pub fn load(path: &Path) -> Result<MockCoinRegistry> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read seed file {}", path.display()))?;
    parse(&raw).with_context(|| format!("Invalid seed file {}", path.display()))
}

/// Parse seed TOML into a registry. Every entry goes through the same
/// validation a launched coin does.
pub fn parse(raw: &str) -> Result<MockCoinRegistry> {
    let file: SeedFile = toml::from_str(raw)?;

    let mut coins = Vec::with_capacity(file.coin.len());
    for entry in file.coin {
        let draft = CoinDraft::new(entry.name, entry.symbol, entry.description, entry.image)?;
        let market = MarketData {
            price: entry.price,
            change_24h: entry.change_24h,
            volume_24h: entry.volume_24h,
            market_cap: entry.market_cap,
            holders: entry.holders,
        };
        coins.push(Coin::new(
            Uuid::new_v4().to_string(),
            draft,
            Utc::now(),
            market,
        )?);
    }

    Ok(MockCoinRegistry::from_coins(coins))
}
