use crate::domain::errors::TradeError;
use crate::domain::trading::types::TradeSide;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Decimal places fee and net totals are rounded to.
pub const FEE_SCALE: u32 = 4;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeeSchedule {
    pub fee_rate: Decimal, // e.g., 0.02 (2% of every trade)
    pub mint_fee: Decimal, // flat, all-inclusive launch fee
}

impl Default for FeeSchedule {
    fn default() -> Self {
        Self {
            fee_rate: Decimal::new(2, 2),  // 0.02
            mint_fee: Decimal::new(11, 2), // 0.11
        }
    }
}

fn ensure_positive(amount: Decimal) -> Result<(), TradeError> {
    if amount <= Decimal::ZERO {
        return Err(TradeError::InvalidAmount {
            input: amount.to_string(),
        });
    }
    Ok(())
}

/// Proportional fee on a trade amount, rounded for currency display.
pub fn compute_fee(amount: Decimal, fee_rate: Decimal) -> Result<Decimal, TradeError> {
    ensure_positive(amount)?;
    Ok((amount * fee_rate).round_dp(FEE_SCALE))
}

/// Total the payer spends (buy) or the seller nets (sell).
pub fn compute_net(
    amount: Decimal,
    fee_rate: Decimal,
    side: TradeSide,
) -> Result<Decimal, TradeError> {
    ensure_positive(amount)?;

    let multiplier = match side {
        TradeSide::Buy => Decimal::ONE + fee_rate,
        TradeSide::Sell => Decimal::ONE - fee_rate,
    };
    Ok((amount * multiplier).round_dp(FEE_SCALE))
}
