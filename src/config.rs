use crate::domain::market::ranking::SortKey;
use crate::domain::trading::fees::FeeSchedule;
use anyhow::{Context, Result};
use rust_decimal::Decimal;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Debug, Clone)]
pub struct Config {
    pub fee_rate: Decimal,
    pub mint_fee: Decimal,
    pub seed_coins: usize,
    pub seed: Option<u64>,
    pub seed_file: Option<PathBuf>,
    pub default_sort: SortKey,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let fee_rate = parse_decimal("FEE_RATE", "0.02")?;
        if fee_rate < Decimal::ZERO || fee_rate >= Decimal::ONE {
            anyhow::bail!("FEE_RATE must lie in [0, 1), got {}", fee_rate);
        }

        let mint_fee = parse_decimal("MINT_FEE", "0.11")?;
        if mint_fee < Decimal::ZERO {
            anyhow::bail!("MINT_FEE must be non-negative, got {}", mint_fee);
        }

        let seed_coins = env::var("SEED_COINS")
            .unwrap_or_else(|_| "6".to_string())
            .parse::<usize>()
            .context("Invalid SEED_COINS")?;

        let seed = match env::var("SEED") {
            Ok(raw) => Some(raw.parse::<u64>().context("Invalid SEED")?),
            Err(_) => None,
        };

        let seed_file = env::var("SEED_FILE").ok().map(PathBuf::from);

        let sort_str = env::var("SORT_KEY").unwrap_or_else(|_| "volume".to_string());
        let default_sort = SortKey::from_str(&sort_str)?;

        Ok(Self {
            fee_rate,
            mint_fee,
            seed_coins,
            seed,
            seed_file,
            default_sort,
        })
    }

    pub fn fee_schedule(&self) -> FeeSchedule {
        FeeSchedule {
            fee_rate: self.fee_rate,
            mint_fee: self.mint_fee,
        }
    }
}

fn parse_decimal(var: &str, default: &str) -> Result<Decimal> {
    env::var(var)
        .unwrap_or_else(|_| default.to_string())
        .parse::<Decimal>()
        .with_context(|| format!("Invalid {}", var))
}
