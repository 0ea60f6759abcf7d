use thiserror::Error;
use rust_decimal::Decimal;

/// Errors related to trade submission and intent assembly
#[derive(Debug, Error, PartialEq)]
pub enum TradeError {
    #[error("Invalid trade amount {input:?}: must be a positive number")]
    InvalidAmount { input: String },

    #[error("Unknown coin: {query}")]
    UnknownCoin { query: String },

    #[error("No coin selected")]
    NoSelection,
}

/// Errors related to coin launch validation
#[derive(Debug, Error, PartialEq)]
pub enum CoinError {
    #[error("Coin name must be 1-{max} characters, got {len}")]
    InvalidName { len: usize, max: usize },

    #[error("Coin symbol must be 1-10 uppercase alphanumeric characters: {symbol:?}")]
    InvalidSymbol { symbol: String },

    #[error("Description too long: {len} > {max} characters")]
    DescriptionTooLong { len: usize, max: usize },

    #[error("Coin {field} must be non-negative, got {value}")]
    NegativeField { field: &'static str, value: Decimal },
}
