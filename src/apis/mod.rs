/// Upstream API access
///
/// - `client`: request executor shared by every endpoint
/// - `coingecko`: cached gateway over the CoinGecko REST API
pub mod client;
pub mod coingecko;

pub use client::{HttpClient, HttpMethod, RequestOptions};
pub use coingecko::CoinGeckoClient;

#[cfg(test)]
mod tests;
