use crate::domain::errors::TradeError;
use crate::domain::trading::fees::{FeeSchedule, compute_fee, compute_net};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TradeSide {
    Buy,
    Sell,
}

impl fmt::Display for TradeSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TradeSide::Buy => write!(f, "BUY"),
            TradeSide::Sell => write!(f, "SELL"),
        }
    }
}

impl std::str::FromStr for TradeSide {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "buy" => Ok(TradeSide::Buy),
            "sell" => Ok(TradeSide::Sell),
            _ => anyhow::bail!("Invalid trade side: {}. Must be 'buy' or 'sell'", s),
        }
    }
}

/// A validated, normalized trade ready to hand to an executor.
///
/// `net` is the total the payer spends for a buy (amount plus fee) or the
/// total the seller nets for a sell (amount minus fee). Constructed
/// transiently per submission; no history is kept here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeIntent {
    pub coin_id: String,
    pub side: TradeSide,
    pub amount: Decimal,
    pub fee: Decimal,
    pub net: Decimal,
}

impl TradeIntent {
    /// Validate the requested amount and assemble fee and net totals.
    pub fn new(
        coin_id: impl Into<String>,
        side: TradeSide,
        amount: Decimal,
        fees: &FeeSchedule,
    ) -> Result<Self, TradeError> {
        let fee = compute_fee(amount, fees.fee_rate)?;
        let net = compute_net(amount, fees.fee_rate, side)?;

        Ok(Self {
            coin_id: coin_id.into(),
            side,
            amount,
            fee,
            net,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_buy_intent_totals() {
        let fees = FeeSchedule::default();
        let intent = TradeIntent::new("c1", TradeSide::Buy, dec!(10), &fees).unwrap();

        assert_eq!(intent.amount, dec!(10));
        assert_eq!(intent.fee, dec!(0.2));
        assert_eq!(intent.net, dec!(10.2));
    }

    #[test]
    fn test_sell_intent_totals() {
        let fees = FeeSchedule::default();
        let intent = TradeIntent::new("c1", TradeSide::Sell, dec!(10), &fees).unwrap();

        assert_eq!(intent.fee, dec!(0.2));
        assert_eq!(intent.net, dec!(9.8));
    }

    #[test]
    fn test_non_positive_amount_rejected() {
        let fees = FeeSchedule::default();
        let err = TradeIntent::new("c1", TradeSide::Buy, dec!(0), &fees).unwrap_err();
        assert!(matches!(err, TradeError::InvalidAmount { .. }));
    }

    #[test]
    fn test_side_display_and_parse() {
        assert_eq!(TradeSide::Buy.to_string(), "BUY");
        assert_eq!("SELL".parse::<TradeSide>().unwrap(), TradeSide::Sell);
        assert!("hold".parse::<TradeSide>().is_err());
    }
}
