//! Coinlaunch CLI - mock token-launch and trading market
//!
//! # Usage
//! ```sh
//! coinlaunch market --sort volume
//! coinlaunch trade --coin MOONR --side buy --amount 10
//! coinlaunch launch --name "Moon Rocket" --symbol MOONR
//! ```
//!
//! # Environment Variables
//! - `FEE_RATE` - proportional trade fee (default: 0.02)
//! - `MINT_FEE` - flat launch fee (default: 0.11)
//! - `SEED_COINS` - fabricated coin count (default: 6)
//! - `SEED` - RNG seed for reproducible mock data
//! - `SEED_FILE` - TOML file of seed coins instead of fabricated ones

use anyhow::Result;
use clap::{Parser, Subcommand};
use coinlaunch::application::launch::CoinLauncher;
use coinlaunch::application::trading::{TradeComposer, find_coin};
use coinlaunch::config::Config;
use coinlaunch::domain::coin::CoinDraft;
use coinlaunch::domain::market::ranking::{SortKey, rank};
use coinlaunch::domain::market::stats::MarketStats;
use coinlaunch::domain::ports::CoinRegistry;
use coinlaunch::domain::trading::types::TradeSide;
use coinlaunch::infrastructure::mock::MockCoinRegistry;
use coinlaunch::infrastructure::seed_file;
use coinlaunch::interfaces::market_table::MarketTable;
use std::str::FromStr;
use tracing::Level;
use tracing_subscriber::prelude::*;

#[derive(Parser)]
#[command(name = "coinlaunch", version, about = "Mock token-launch and trading market")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the market, ranked, with aggregate stats
    Market {
        /// Sort key: price, volume or change
        #[arg(long)]
        sort: Option<String>,
    },
    /// Compose a trade and print the resulting intent
    Trade {
        /// Coin id or ticker symbol
        #[arg(long)]
        coin: String,
        /// buy or sell
        #[arg(long)]
        side: String,
        /// Amount in base currency units
        #[arg(long)]
        amount: String,
    },
    /// Launch a new coin
    Launch {
        #[arg(long)]
        name: String,
        #[arg(long)]
        symbol: String,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        image: Option<String>,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let stdout_layer = tracing_subscriber::fmt::layer().with_target(false).compact();
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::WARN.into()))
        .with(stdout_layer)
        .init();

    let cli = Cli::parse();
    let config = Config::from_env()?;
    let mut registry = build_registry(&config)?;

    match cli.command {
        Commands::Market { sort } => {
            let key = match sort {
                Some(raw) => SortKey::from_str(&raw)?,
                None => config.default_sort,
            };
            let snapshot = registry.snapshot()?;
            let ranked = rank(&snapshot, key);
            let stats = MarketStats::aggregate(&snapshot);
            print!("{}", MarketTable::render(&ranked, &stats));
        }
        Commands::Trade { coin, side, amount } => {
            let snapshot = registry.snapshot()?;
            let coin = find_coin(&snapshot, &coin)?;

            let mut composer = TradeComposer::new(config.fee_schedule());
            composer.select(coin.id.as_str());
            composer.set_side(TradeSide::from_str(&side)?);
            composer.set_amount(amount);

            let intent = composer.submit()?;
            println!("{}", serde_json::to_string_pretty(&intent)?);
        }
        Commands::Launch {
            name,
            symbol,
            description,
            image,
        } => {
            let draft = CoinDraft::new(name, symbol, description, image)?;
            let launcher = CoinLauncher::new(config.fee_schedule());
            let receipt = launcher.launch(&mut registry, draft)?;

            println!(
                "Launched {} ({}) with id {}",
                receipt.coin.name, receipt.coin.symbol, receipt.coin.id
            );
            println!("Mint fee: {} (all inclusive)", receipt.mint_fee);
        }
    }

    Ok(())
}

fn build_registry(config: &Config) -> Result<MockCoinRegistry> {
    if let Some(path) = &config.seed_file {
        return seed_file::load(path);
    }
    Ok(match config.seed {
        Some(seed) => MockCoinRegistry::with_seed(config.seed_coins, seed),
        None => MockCoinRegistry::new(config.seed_coins),
    })
}
