pub mod composer;

pub use composer::{ComposerState, TradeComposer, TradePreview};

use crate::domain::coin::Coin;
use crate::domain::errors::TradeError;

/// Resolve a user-supplied coin reference against a snapshot. Accepts the
/// exact id or a case-insensitive ticker symbol.
pub fn find_coin<'a>(coins: &'a [Coin], query: &str) -> Result<&'a Coin, TradeError> {
    coins
        .iter()
        .find(|c| c.id == query || c.symbol.eq_ignore_ascii_case(query))
        .ok_or_else(|| TradeError::UnknownCoin {
            query: query.to_string(),
        })
}
