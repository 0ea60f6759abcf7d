// Coin records and launch drafts
pub mod coin;

// Market valuation and ranking domain
pub mod market;

// Core trading domain
pub mod trading;

// Port interfaces
pub mod ports;

// Domain-specific error types
pub mod errors;
