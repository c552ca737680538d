use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use coinscreener::apis::CoinGeckoClient;
use coinscreener::config::Config;
use coinscreener::constants::{is_supported_currency, SUPPORTED_CURRENCIES};
use coinscreener::logger::{self, LogOutput, LogTag, LoggerConfig};
use coinscreener::market_data::{
    Coin, HighlightsAggregator, MarketOrder, PageCursor, TrendingCoin,
};
use colored::*;
use comfy_table::{presets::UTF8_FULL, Table};
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "coinscreener")]
#[command(about = "Crypto market dashboard backed by the CoinGecko API", long_about = None)]
struct Args {
    /// Enable debug output for tags (comma separated: api,cache,gateway,highlights,config,system or all)
    #[arg(long, value_delimiter = ',', global = true)]
    debug: Vec<String>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Only show warnings and errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Paged market listing
    Markets {
        /// Sort order, e.g. market_cap_desc, volume_desc, percent_change_24h_desc
        #[arg(long, default_value = "market_cap_desc")]
        order: MarketOrder,

        #[arg(long, default_value_t = 1)]
        page: u32,

        /// Coins per page (defaults to COINS_PER_PAGE)
        #[arg(long)]
        per_page: Option<u32>,

        /// Quote currency (usd, eur, btc)
        #[arg(long)]
        currency: Option<String>,

        /// Only show coins whose name or symbol contains this text
        #[arg(long)]
        search: Option<String>,

        /// Include the 7-day sparkline
        #[arg(long)]
        sparkline: bool,
    },

    /// Trending coins
    Trending,

    /// Detail document for one coin
    Detail {
        /// Coin id, e.g. bitcoin
        id: String,
    },

    /// Top gainers, top losers, highest volume and trending
    Highlights {
        /// Entries per section (defaults to HIGHLIGHTS_COUNT)
        #[arg(long)]
        limit: Option<u32>,
    },
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    // stdout carries tables and JSON only
    logger::init(
        LoggerConfig::from_flags(&args.debug, args.verbose, args.quiet)
            .with_output(LogOutput::Stderr),
    );

    if let Err(e) = run(args.command).await {
        logger::error(LogTag::System, &format!("{:#}", e));
        std::process::exit(1);
    }
}

async fn run(command: Command) -> Result<()> {
    let config = Config::from_env()?;
    let client = Arc::new(CoinGeckoClient::new(&config)?);

    match command {
        Command::Markets {
            order,
            page,
            per_page,
            currency,
            search,
            sparkline,
        } => {
            let currency = match currency {
                Some(c) if !is_supported_currency(&c.to_lowercase()) => {
                    bail!("Unsupported currency '{}', expected one of {:?}", c, SUPPORTED_CURRENCIES)
                }
                Some(c) => c.to_lowercase(),
                None => client.default_currency().to_string(),
            };

            let mut cursor = PageCursor::new(per_page.unwrap_or(client.coins_per_page()));
            if !cursor.can_go_to(page) {
                bail!("Page must be between 1 and {}", cursor.total_pages());
            }
            cursor.go_to(page);

            let query = cursor.query(order).currency(&currency).sparkline(sparkline);
            let mut coins = client.list_markets(&query).await?;
            if let Some(text) = search {
                coins = client.search_coins(&text, &coins);
            }

            print_coins_table(&coins, &currency);
            println!(
                "Page {} of ~{}{}",
                cursor.current(),
                cursor.total_pages(),
                if cursor.has_next() { "  (--page for more)" } else { "" }
            );
        }
        Command::Trending => {
            let trending = client.trending_coins().await?;
            print_trending_table(&trending);
        }
        Command::Detail { id } => {
            let detail = client.coin_detail(&id).await?;
            println!("{}", serde_json::to_string_pretty(&detail)?);
        }
        Command::Highlights { limit } => {
            let limit = limit.unwrap_or(config.highlights_count);
            let aggregator = HighlightsAggregator::new(client.clone(), limit);
            let highlights = aggregator.highlights().await?;
            let currency = client.default_currency();

            println!("\n{}", "TOP GAINERS (24h)".bold());
            print_coins_table(&highlights.top_gainers, currency);
            println!("\n{}", "TOP LOSERS (24h)".bold());
            print_coins_table(&highlights.top_losers, currency);
            println!("\n{}", "HIGHEST VOLUME".bold());
            print_coins_table(&highlights.highest_volume, currency);
            println!("\n{}", "TRENDING".bold());
            print_trending_table(&highlights.trending);

            for section in &highlights.failed {
                logger::warning(LogTag::Highlights, &format!("{} unavailable", section));
            }
        }
    }

    Ok(())
}

fn print_coins_table(coins: &[Coin], currency: &str) {
    if coins.is_empty() {
        println!("{}", "No coins to display".dimmed());
        return;
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header([
        "#".to_string(),
        "Coin".to_string(),
        format!("Price ({})", currency.to_uppercase()),
        "24h %".to_string(),
        "Market Cap".to_string(),
        "Volume".to_string(),
    ]);

    for coin in coins {
        table.add_row([
            coin.market_cap_rank
                .map(|r| r.to_string())
                .unwrap_or_else(|| "-".to_string()),
            format!("{} ({})", coin.name, coin.symbol.to_uppercase()),
            format_price(coin.current_price),
            format_change(coin.price_change_percentage_24h),
            format_compact(coin.market_cap),
            format_compact(coin.total_volume),
        ]);
    }

    println!("{}", table);
}

fn print_trending_table(coins: &[TrendingCoin]) {
    if coins.is_empty() {
        println!("{}", "No trending coins".dimmed());
        return;
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(["Score", "Coin", "Rank", "Price (BTC)"]);

    for coin in coins {
        table.add_row([
            coin.score.map(|s| s.to_string()).unwrap_or_else(|| "-".to_string()),
            format!("{} ({})", coin.name, coin.symbol.to_uppercase()),
            coin.market_cap_rank
                .map(|r| r.to_string())
                .unwrap_or_else(|| "-".to_string()),
            coin.price_btc
                .map(|p| format!("{:.10}", p))
                .unwrap_or_else(|| "-".to_string()),
        ]);
    }

    println!("{}", table);
}

fn format_price(price: Option<f64>) -> String {
    match price {
        Some(p) if p >= 1.0 => format!("{:.2}", p),
        Some(p) => format!("{:.8}", p),
        None => "-".to_string(),
    }
}

fn format_change(change: Option<f64>) -> String {
    match change {
        Some(c) if c > 0.0 => format!("+{:.2}%", c).green().to_string(),
        Some(c) if c < 0.0 => format!("{:.2}%", c).red().to_string(),
        Some(c) => format!("{:.2}%", c),
        None => "-".to_string(),
    }
}

fn format_compact(value: Option<f64>) -> String {
    let Some(v) = value else {
        return "-".to_string();
    };
    match v.abs() {
        a if a >= 1e12 => format!("{:.2}T", v / 1e12),
        a if a >= 1e9 => format!("{:.2}B", v / 1e9),
        a if a >= 1e6 => format!("{:.2}M", v / 1e6),
        a if a >= 1e3 => format!("{:.2}K", v / 1e3),
        _ => format!("{:.2}", v),
    }
}
