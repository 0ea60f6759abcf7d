//! Mock token-launch and trading market: coin drafts, fee/valuation math,
//! market ranking and trade-intent assembly over an in-memory registry.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
