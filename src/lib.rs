//! Data-access layer of a crypto market dashboard
//!
//! Reads market listings, trending coins and coin details from CoinGecko
//! through a cached gateway, and assembles the dashboard highlights.

pub mod apis;
pub mod cache;
pub mod config;
pub mod constants;
pub mod errors;
pub mod logger;
pub mod market_data;
