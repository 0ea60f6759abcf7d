use crate::domain::coin::Coin;
use anyhow::Result;

/// Source of listed coins. Implementations own the backing collection;
/// callers only ever see point-in-time snapshots.
pub trait CoinRegistry: Send + Sync {
    /// Point-in-time copy of every listed coin.
    fn snapshot(&self) -> Result<Vec<Coin>>;

    /// List a newly launched coin.
    fn register(&mut self, coin: Coin) -> Result<()>;
}
