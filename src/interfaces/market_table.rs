use crate::domain::coin::Coin;
use crate::domain::market::formatting::{format_change, format_price, format_volume};
use crate::domain::market::stats::MarketStats;

/// Plain-text rendering of a ranked snapshot. Display strings only; all
/// numbers come pre-computed from the domain.
pub struct MarketTable;

impl MarketTable {
    pub fn render(coins: &[Coin], stats: &MarketStats) -> String {
        if coins.is_empty() {
            return "No coins listed yet. Launch the first one to start trading!\n".to_string();
        }

        let mut out = String::new();
        out.push_str(&format!(
            "{:<24} {:<8} {:>14} {:>10} {:>10} {:>10} {:>8}\n",
            "Coin", "Symbol", "Price", "24h", "Volume", "Mkt Cap", "Holders"
        ));

        for coin in coins {
            out.push_str(&format!(
                "{:<24} {:<8} {:>14} {:>10} {:>10} {:>10} {:>8}\n",
                coin.name,
                coin.symbol,
                format_price(coin.price),
                format_change(coin.change_24h),
                format_volume(coin.volume_24h),
                format_volume(coin.market_cap),
                coin.holders
            ));
        }

        out.push_str(&format!(
            "\nTotal Volume 24h: {}   Total Market Cap: {}   Active Coins: {}\n",
            format_volume(stats.total_volume_24h),
            format_volume(stats.total_market_cap),
            stats.active_coins
        ));
        out
    }
}
