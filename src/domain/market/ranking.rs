use crate::domain::coin::Coin;
use std::cmp::Ordering;

/// Key the market list is ordered by. All keys sort descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    Price,
    #[default]
    Volume,
    Change,
}

impl std::str::FromStr for SortKey {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "price" => Ok(SortKey::Price),
            "volume" => Ok(SortKey::Volume),
            "change" => Ok(SortKey::Change),
            _ => anyhow::bail!(
                "Invalid sort key: {}. Must be 'price', 'volume' or 'change'",
                s
            ),
        }
    }
}

/// Rank a snapshot by the given key, best first. Returns a new sequence;
/// the input is never mutated. Equal keys fall back to coin id ascending
/// so the ordering is reproducible for any input order.
pub fn rank(coins: &[Coin], key: SortKey) -> Vec<Coin> {
    let mut ranked = coins.to_vec();
    ranked.sort_by(|a, b| {
        let primary = match key {
            SortKey::Price => b.price.cmp(&a.price),
            SortKey::Volume => b.volume_24h.cmp(&a.volume_24h),
            SortKey::Change => b.change_24h.cmp(&a.change_24h),
        };
        match primary {
            Ordering::Equal => a.id.cmp(&b.id),
            other => other,
        }
    });
    ranked
}
