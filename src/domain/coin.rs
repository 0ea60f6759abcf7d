use crate::domain::errors::CoinError;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub const MAX_NAME_LEN: usize = 50;
pub const MAX_SYMBOL_LEN: usize = 10;
pub const MAX_DESCRIPTION_LEN: usize = 500;

/// Launch-form payload for a new coin.
///
/// # Invariants
///
/// - `name` is 1-50 characters
/// - `symbol` is 1-10 uppercase alphanumeric characters (input is
///   uppercased before validation)
/// - `description`, when present, is at most 500 characters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoinDraft {
    pub name: String,
    pub symbol: String,
    pub description: Option<String>,
    pub image: Option<String>,
}

impl CoinDraft {
    /// Create a validated draft. The symbol is normalized to uppercase.
    pub fn new(
        name: impl Into<String>,
        symbol: impl Into<String>,
        description: Option<String>,
        image: Option<String>,
    ) -> Result<Self, CoinError> {
        let draft = Self {
            name: name.into(),
            symbol: symbol.into().trim().to_uppercase(),
            description,
            image,
        };

        draft.validate()?;
        Ok(draft)
    }

    fn validate(&self) -> Result<(), CoinError> {
        let name_len = self.name.chars().count();
        if name_len == 0 || name_len > MAX_NAME_LEN {
            return Err(CoinError::InvalidName {
                len: name_len,
                max: MAX_NAME_LEN,
            });
        }

        let symbol_ok = !self.symbol.is_empty()
            && self.symbol.len() <= MAX_SYMBOL_LEN
            && self
                .symbol
                .chars()
                .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit());
        if !symbol_ok {
            return Err(CoinError::InvalidSymbol {
                symbol: self.symbol.clone(),
            });
        }

        if let Some(description) = &self.description {
            let len = description.chars().count();
            if len > MAX_DESCRIPTION_LEN {
                return Err(CoinError::DescriptionTooLong {
                    len,
                    max: MAX_DESCRIPTION_LEN,
                });
            }
        }

        Ok(())
    }
}

/// Market figures attached to a listed coin.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketData {
    pub price: Decimal,
    pub change_24h: Decimal,
    pub volume_24h: Decimal,
    pub market_cap: Decimal,
    pub holders: u64,
}

/// A listed coin. Immutable once constructed; callers read and derive,
/// never mutate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coin {
    pub id: String,
    pub name: String,
    pub symbol: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub price: Decimal,
    pub change_24h: Decimal,
    pub volume_24h: Decimal,
    pub market_cap: Decimal,
    pub holders: u64,
}

impl Coin {
    /// Build a coin from a validated draft and its market figures.
    ///
    /// Price, volume and market cap must be non-negative; the 24h change
    /// may carry either sign.
    pub fn new(
        id: impl Into<String>,
        draft: CoinDraft,
        created_at: DateTime<Utc>,
        market: MarketData,
    ) -> Result<Self, CoinError> {
        for (field, value) in [
            ("price", market.price),
            ("volume_24h", market.volume_24h),
            ("market_cap", market.market_cap),
        ] {
            if value < Decimal::ZERO {
                return Err(CoinError::NegativeField { field, value });
            }
        }

        Ok(Self {
            id: id.into(),
            name: draft.name,
            symbol: draft.symbol,
            description: draft.description,
            image: draft.image,
            created_at,
            price: market.price,
            change_24h: market.change_24h,
            volume_24h: market.volume_24h,
            market_cap: market.market_cap,
            holders: market.holders,
        })
    }
}
