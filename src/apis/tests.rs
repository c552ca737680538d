//! Executor and gateway tests against an in-process mock upstream
use super::client::{HttpClient, RequestOptions};
use super::coingecko::CoinGeckoClient;
use crate::config::Config;
use crate::errors::RequestErrorKind;
use crate::market_data::{HighlightSection, HighlightsAggregator, MarketOrder, MarketsQuery};
use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{any, get};
use axum::{Json, Router};
use parking_lot::Mutex;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

// ============================================================================
// MOCK UPSTREAM
// ============================================================================

#[derive(Default)]
struct Upstream {
    markets_hits: AtomicUsize,
    trending_hits: AtomicUsize,
    detail_hits: AtomicUsize,
    fail_markets: AtomicBool,
    fail_trending: AtomicBool,
    last_markets_query: Mutex<HashMap<String, String>>,
}

type Shared = State<Arc<Upstream>>;

fn bitcoin_json() -> Value {
    json!({
        "id": "bitcoin",
        "symbol": "btc",
        "name": "Bitcoin",
        "image": "https://assets.coingecko.com/coins/images/1/large/bitcoin.png",
        "current_price": 67187.0,
        "market_cap": 1317802988326.0,
        "market_cap_rank": 1,
        "fully_diluted_valuation": 1410865941131.0,
        "total_volume": 31260929299.0,
        "high_24h": 67899.0,
        "low_24h": 66203.0,
        "price_change_24h": 784.23,
        "price_change_percentage_24h": 1.18,
        "market_cap_change_24h": 15120000000.0,
        "market_cap_change_percentage_24h": 1.16,
        "circulating_supply": 19675987.0,
        "total_supply": 21000000.0,
        "max_supply": 21000000.0,
        "ath": 73738.0,
        "ath_change_percentage": -8.88,
        "ath_date": "2024-03-14T07:10:36.635Z",
        "atl": 67.81,
        "atl_change_percentage": 98986.1,
        "atl_date": "2013-07-06T00:00:00.000Z",
        "last_updated": "2024-04-07T16:49:31.736Z"
    })
}

fn change_json(id: &str, symbol: &str, change: Value) -> Value {
    json!({
        "id": id,
        "symbol": symbol,
        "name": id.to_uppercase(),
        "current_price": 1.0,
        "price_change_percentage_24h": change
    })
}

async fn markets(
    State(up): Shared,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    up.markets_hits.fetch_add(1, Ordering::SeqCst);
    *up.last_markets_query.lock() = params.clone();

    if up.fail_markets.load(Ordering::SeqCst) {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": "database unavailable"})),
        )
            .into_response();
    }

    let body = match params.get("order").map(String::as_str) {
        Some("percent_change_24h_desc") => json!([
            change_json("pepe", "pepe", json!(25.1)),
            change_json("bonk", "bonk", json!("3.2")),
            change_json("tether", "usdt", json!(0.0)),
            change_json("mystery", "???", Value::Null)
        ]),
        Some("percent_change_24h_asc") => json!([
            change_json("solana", "sol", json!(-7.5)),
            change_json("usd-coin", "usdc", json!(0.0)),
            change_json("ethereum", "eth", json!(1.1))
        ]),
        Some("volume_desc") => json!([
            change_json("tether", "usdt", json!(0.01)),
            change_json("bitcoin", "btc", json!(1.18))
        ]),
        _ => {
            let mut bitcoin = bitcoin_json();
            if params.get("sparkline").map(String::as_str) == Some("true") {
                bitcoin["sparkline_in_7d"] = json!({"price": [66000.0, 66500.5, 67187.0]});
            }
            json!([
                bitcoin,
                {
                    "id": "ethereum",
                    "symbol": "eth",
                    "name": "Ethereum",
                    "current_price": "3401.25",
                    "market_cap_rank": 2,
                    "max_supply": null,
                    "ath_date": "not a date",
                    "price_change_percentage_24h": 0.0
                },
                {
                    "id": "obscure",
                    "symbol": "obs",
                    "name": "Obscure",
                    "market_cap_rank": 0,
                    "current_price": "n/a",
                    "total_volume": 0
                }
            ])
        }
    };
    Json(body).into_response()
}

async fn trending(State(up): Shared) -> Response {
    up.trending_hits.fetch_add(1, Ordering::SeqCst);
    if up.fail_trending.load(Ordering::SeqCst) {
        return StatusCode::SERVICE_UNAVAILABLE.into_response();
    }
    Json(json!({
        "coins": [
            {"item": {"id": "pepe", "coin_id": 29850, "name": "Pepe", "symbol": "PEPE",
                      "market_cap_rank": 40, "thumb": "pepe-thumb.png", "score": 0}},
            {"item": {"id": "kaspa", "coin_id": 25751, "name": "Kaspa", "symbol": "KAS",
                      "market_cap_rank": 25, "small": "kaspa-small.png", "score": 1}},
            {"item": {"id": "ondo-finance", "name": "Ondo", "symbol": "ONDO", "score": 2}}
        ],
        "nfts": []
    }))
    .into_response()
}

async fn detail(State(up): Shared, Path(id): Path<String>) -> Response {
    up.detail_hits.fetch_add(1, Ordering::SeqCst);
    match id.as_str() {
        "bitcoin" => Json(json!({
            "id": "bitcoin",
            "symbol": "btc",
            "name": "Bitcoin",
            "description": {"en": "Bitcoin is the first decentralized cryptocurrency."},
            "links": {"homepage": ["http://www.bitcoin.org"]},
            "market_data": {"current_price": {"usd": 67187.0}}
        }))
        .into_response(),
        "listed-as-array" => Json(json!([1, 2, 3])).into_response(),
        _ => (StatusCode::NOT_FOUND, Json(json!({"error": "coin not found"}))).into_response(),
    }
}

async fn limited() -> Response {
    (
        StatusCode::TOO_MANY_REQUESTS,
        Json(json!({"status": {"error_code": 429, "error_message": "You've exceeded the Rate Limit."}})),
    )
        .into_response()
}

async fn teapot() -> Response {
    (
        StatusCode::IM_A_TEAPOT,
        Json(json!({"error": "brewing coffee is not supported"})),
    )
        .into_response()
}

async fn bad_gateway() -> Response {
    (StatusCode::BAD_GATEWAY, "<html>upstream down</html>").into_response()
}

async fn not_json() -> Response {
    (StatusCode::OK, "<html>maintenance</html>").into_response()
}

async fn slow() -> Response {
    tokio::time::sleep(Duration::from_secs(3)).await;
    Json(json!({"late": true})).into_response()
}

async fn echo(
    method: Method,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
    body: String,
) -> Response {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(String::from)
    };
    Json(json!({
        "method": method.as_str(),
        "query": params,
        "demo_key": header("x-cg-demo-api-key"),
        "accept": header("accept"),
        "content_type": header("content-type"),
        "body": serde_json::from_str::<Value>(&body).ok()
    }))
    .into_response()
}

async fn spawn_upstream() -> (String, Arc<Upstream>) {
    let upstream = Arc::new(Upstream::default());
    let app = Router::new()
        .route("/coins/markets", get(markets))
        .route("/coins/:id", get(detail))
        .route("/search/trending", get(trending))
        .route("/limited", get(limited))
        .route("/teapot", get(teapot))
        .route("/bad-gateway", get(bad_gateway))
        .route("/not-json", get(not_json))
        .route("/slow", get(slow))
        .route("/echo", any(echo))
        .with_state(upstream.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}", addr), upstream)
}

fn config_for(base_url: &str) -> Config {
    Config {
        base_url: base_url.to_string(),
        request_timeout_ms: 2_000,
        ..Config::default()
    }
}

async fn gateway() -> (CoinGeckoClient, Arc<Upstream>) {
    let (base_url, upstream) = spawn_upstream().await;
    let client = CoinGeckoClient::new(&config_for(&base_url)).unwrap();
    (client, upstream)
}

// ============================================================================
// REQUEST EXECUTOR
// ============================================================================

#[tokio::test]
async fn test_rate_limit_carries_status() {
    let (base_url, _) = spawn_upstream().await;
    let http = HttpClient::from_config(&config_for(&base_url)).unwrap();

    let err = http.execute("/limited", RequestOptions::get()).await.unwrap_err();
    assert_eq!(err.kind, RequestErrorKind::RateLimited);
    assert_eq!(err.status, Some(429));
    assert_eq!(err.message, "Rate limit exceeded. Please try again later.");
}

#[tokio::test]
async fn test_slow_upstream_times_out_without_status() {
    let (base_url, _) = spawn_upstream().await;
    let config = Config {
        request_timeout_ms: 150,
        ..config_for(&base_url)
    };
    let http = HttpClient::from_config(&config).unwrap();

    let started = std::time::Instant::now();
    let err = http.execute("/slow", RequestOptions::get()).await.unwrap_err();
    assert_eq!(err.kind, RequestErrorKind::Timeout);
    assert_eq!(err.status, None);
    assert_eq!(err.message, "Request timeout after 150ms. Please try again.");
    assert!(started.elapsed() < Duration::from_secs(2));
}

#[tokio::test]
async fn test_status_classification() {
    let (base_url, _) = spawn_upstream().await;
    let http = HttpClient::from_config(&config_for(&base_url)).unwrap();

    let err = http
        .execute("/coins/does-not-exist", RequestOptions::get())
        .await
        .unwrap_err();
    assert_eq!(err.kind, RequestErrorKind::NotFound);
    assert_eq!(err.status, Some(404));

    let err = http.execute("/teapot", RequestOptions::get()).await.unwrap_err();
    assert_eq!(err.kind, RequestErrorKind::ApiError);
    assert_eq!(err.status, Some(418));
    assert_eq!(err.message, "brewing coffee is not supported");

    // Non-JSON error body falls back to the reason phrase; 502 is not a server error
    let err = http
        .execute("/bad-gateway", RequestOptions::get())
        .await
        .unwrap_err();
    assert_eq!(err.kind, RequestErrorKind::ApiError);
    assert_eq!(err.status, Some(502));
    assert_eq!(err.message, "Bad Gateway");
}

#[tokio::test]
async fn test_server_error_from_500() {
    let (base_url, upstream) = spawn_upstream().await;
    upstream.fail_markets.store(true, Ordering::SeqCst);
    let http = HttpClient::from_config(&config_for(&base_url)).unwrap();

    let err = http
        .execute("/coins/markets", RequestOptions::get())
        .await
        .unwrap_err();
    assert_eq!(err.kind, RequestErrorKind::ServerError);
    assert_eq!(err.status, Some(500));
    assert_eq!(err.message, "Internal server error. Please try again later.");
}

#[tokio::test]
async fn test_invalid_json_on_success_is_network_error() {
    let (base_url, _) = spawn_upstream().await;
    let http = HttpClient::from_config(&config_for(&base_url)).unwrap();

    let err = http.execute("/not-json", RequestOptions::get()).await.unwrap_err();
    assert_eq!(err.kind, RequestErrorKind::NetworkError);
    assert_eq!(err.status, Some(200));
}

#[tokio::test]
async fn test_refused_connection_is_network_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let http = HttpClient::from_config(&config_for(&format!("http://{}", addr))).unwrap();
    let err = http.execute("/ping", RequestOptions::get()).await.unwrap_err();
    assert_eq!(err.kind, RequestErrorKind::NetworkError);
    assert_eq!(err.status, None);
}

#[tokio::test]
async fn test_query_headers_and_api_key() {
    let (base_url, _) = spawn_upstream().await;
    let config = Config {
        api_key: Some("CG-test-key".to_string()),
        ..config_for(&base_url)
    };
    let http = HttpClient::from_config(&config).unwrap();

    let options = RequestOptions::get()
        .param("vs_currency", "usd")
        .opt_param::<String>("category", None)
        .param("page", 2);
    let echoed = http.execute("/echo", options).await.unwrap();

    assert_eq!(echoed["method"], "GET");
    assert_eq!(echoed["query"], json!({"vs_currency": "usd", "page": "2"}));
    assert_eq!(echoed["demo_key"], "CG-test-key");
    assert_eq!(echoed["accept"], "application/json");
    assert_eq!(echoed["content_type"], "application/json");
}

#[tokio::test]
async fn test_no_key_header_without_api_key() {
    let (base_url, _) = spawn_upstream().await;
    let http = HttpClient::from_config(&config_for(&base_url)).unwrap();

    let echoed = http.execute("/echo", RequestOptions::get()).await.unwrap();
    assert_eq!(echoed["demo_key"], Value::Null);
    assert_eq!(echoed["query"], json!({}));
}

#[tokio::test]
async fn test_post_sends_json_body() {
    let (base_url, _) = spawn_upstream().await;
    let http = HttpClient::from_config(&config_for(&base_url)).unwrap();

    let echoed = http
        .execute("/echo", RequestOptions::post(json!({"ids": ["bitcoin"]})))
        .await
        .unwrap();
    assert_eq!(echoed["method"], "POST");
    assert_eq!(echoed["body"], json!({"ids": ["bitcoin"]}));
}

// ============================================================================
// GATEWAY
// ============================================================================

#[tokio::test]
async fn test_list_markets_adapts_in_upstream_order() {
    let (client, upstream) = gateway().await;

    let coins = client.list_markets(&MarketsQuery::new()).await.unwrap();
    let ids: Vec<&str> = coins.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["bitcoin", "ethereum", "obscure"]);

    let bitcoin = &coins[0];
    assert_eq!(bitcoin.current_price, Some(67187.0));
    assert_eq!(bitcoin.market_cap_rank, Some(1));
    assert_eq!(bitcoin.ath_date.map(|d| d.timestamp()), Some(1710400236));
    assert_eq!(bitcoin.atl_date.map(|d| d.timestamp()), Some(1373068800));
    assert_eq!(bitcoin.sparkline_7d, None);

    let ethereum = &coins[1];
    assert_eq!(ethereum.current_price, Some(3401.25));
    assert_eq!(ethereum.price_change_percentage_24h, Some(0.0));
    assert_eq!(ethereum.max_supply, None);
    assert_eq!(ethereum.ath_date, None);

    let obscure = &coins[2];
    assert_eq!(obscure.market_cap_rank, None);
    assert_eq!(obscure.current_price, None);
    assert_eq!(obscure.total_volume, Some(0.0));
    assert_eq!(obscure.image, None);

    let sent = upstream.last_markets_query.lock().clone();
    assert_eq!(sent.get("vs_currency").map(String::as_str), Some("usd"));
    assert_eq!(sent.get("order").map(String::as_str), Some("market_cap_desc"));
    assert_eq!(sent.get("per_page").map(String::as_str), Some("50"));
    assert_eq!(sent.get("page").map(String::as_str), Some("1"));
    assert_eq!(sent.get("sparkline").map(String::as_str), Some("false"));
    assert_eq!(
        sent.get("price_change_percentage").map(String::as_str),
        Some("24h")
    );
}

#[tokio::test]
async fn test_list_markets_with_sparkline() {
    let (client, _) = gateway().await;

    let query = MarketsQuery::new().currency("EUR").sparkline(true);
    let coins = client.list_markets(&query).await.unwrap();
    assert_eq!(coins[0].sparkline_7d, Some(vec![66000.0, 66500.5, 67187.0]));
    assert_eq!(
        client.cache_stats().keys,
        vec!["coins_markets:eur:market_cap_desc:50:1:true:24h".to_string()]
    );
}

#[tokio::test]
async fn test_repeated_listing_is_served_from_cache() {
    let (client, upstream) = gateway().await;

    let first = client.list_markets(&MarketsQuery::new()).await.unwrap();
    let second = client.list_markets(&MarketsQuery::new()).await.unwrap();
    assert_eq!(first, second);
    assert_eq!(upstream.markets_hits.load(Ordering::SeqCst), 1);

    // A different page is a different key
    client
        .list_markets(&MarketsQuery::new().page(2))
        .await
        .unwrap();
    assert_eq!(upstream.markets_hits.load(Ordering::SeqCst), 2);
    assert_eq!(client.cache_stats().count, 2);

    client.clear_cache();
    assert_eq!(client.cache_stats().count, 0);
    client.list_markets(&MarketsQuery::new()).await.unwrap();
    assert_eq!(upstream.markets_hits.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn test_failure_is_not_cached() {
    let (client, upstream) = gateway().await;
    upstream.fail_markets.store(true, Ordering::SeqCst);

    let err = client.list_markets(&MarketsQuery::new()).await.unwrap_err();
    assert_eq!(err.kind, RequestErrorKind::ServerError);
    assert_eq!(client.cache_stats().count, 0);

    upstream.fail_markets.store(false, Ordering::SeqCst);
    let coins = client.list_markets(&MarketsQuery::new()).await.unwrap();
    assert_eq!(coins.len(), 3);
    assert_eq!(upstream.markets_hits.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_top_gainers_keep_strictly_positive() {
    let (client, upstream) = gateway().await;

    let gainers = client.top_gainers(5).await.unwrap();
    let ids: Vec<&str> = gainers.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["pepe", "bonk"]);

    let sent = upstream.last_markets_query.lock().clone();
    assert_eq!(
        sent.get("order").map(String::as_str),
        Some("percent_change_24h_desc")
    );
    assert_eq!(sent.get("per_page").map(String::as_str), Some("5"));
    assert_eq!(sent.get("page").map(String::as_str), Some("1"));
}

#[tokio::test]
async fn test_top_losers_keep_strictly_negative() {
    let (client, _) = gateway().await;

    let losers = client.top_losers(5).await.unwrap();
    let ids: Vec<&str> = losers.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["solana"]);
}

#[tokio::test]
async fn test_highest_volume_is_unfiltered() {
    let (client, upstream) = gateway().await;

    let coins = client.highest_volume(10).await.unwrap();
    assert_eq!(coins.len(), 2);
    assert_eq!(
        upstream.last_markets_query.lock().get("order").map(String::as_str),
        Some("volume_desc")
    );
}

#[tokio::test]
async fn test_zero_limit_returns_nothing_without_request() {
    let (client, upstream) = gateway().await;

    assert!(client.top_gainers(0).await.unwrap().is_empty());
    assert!(client.top_losers(0).await.unwrap().is_empty());
    assert!(client.highest_volume(0).await.unwrap().is_empty());
    assert_eq!(upstream.markets_hits.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_ranked_lists_never_exceed_limit() {
    let (client, upstream) = gateway().await;

    // Mock ignores per_page and always answers with the full list
    let volume = client.highest_volume(1).await.unwrap();
    assert_eq!(volume.len(), 1);
    assert_eq!(volume[0].id, "tether");
    assert_eq!(
        upstream.last_markets_query.lock().get("per_page").map(String::as_str),
        Some("1")
    );

    let gainers = client.top_gainers(1).await.unwrap();
    let ids: Vec<&str> = gainers.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["pepe"]);
}

#[tokio::test]
async fn test_detail_expires_before_listing() {
    let (client, upstream) = gateway().await;

    client.coin_detail("bitcoin").await.unwrap();
    client.list_markets(&MarketsQuery::new()).await.unwrap();

    // Move the cache clock only; requests run with the clock resumed
    tokio::time::pause();
    tokio::time::advance(Duration::from_secs(30)).await;
    tokio::time::resume();

    client.coin_detail("bitcoin").await.unwrap();
    client.list_markets(&MarketsQuery::new()).await.unwrap();
    assert_eq!(upstream.detail_hits.load(Ordering::SeqCst), 2);
    assert_eq!(upstream.markets_hits.load(Ordering::SeqCst), 1);

    tokio::time::pause();
    tokio::time::advance(Duration::from_secs(30)).await;
    tokio::time::resume();

    client.list_markets(&MarketsQuery::new()).await.unwrap();
    assert_eq!(upstream.markets_hits.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_trending_is_adapted_and_cached() {
    let (client, upstream) = gateway().await;

    let trending = client.trending_coins().await.unwrap();
    let ids: Vec<&str> = trending.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["pepe", "kaspa", "ondo-finance"]);
    assert_eq!(trending[1].image(), Some("kaspa-small.png"));
    assert_eq!(trending[2].coin_id, None);

    client.trending_coins().await.unwrap();
    assert_eq!(upstream.trending_hits.load(Ordering::SeqCst), 1);
    assert!(client
        .cache_stats()
        .keys
        .contains(&"trending_coins".to_string()));
}

#[tokio::test]
async fn test_coin_detail_is_passed_through_and_cached() {
    let (client, upstream) = gateway().await;

    let detail = client.coin_detail(" bitcoin ").await.unwrap();
    assert_eq!(detail["name"], "Bitcoin");
    assert_eq!(detail["market_data"]["current_price"]["usd"], 67187.0);

    client.coin_detail("bitcoin").await.unwrap();
    assert_eq!(upstream.detail_hits.load(Ordering::SeqCst), 1);
    assert_eq!(
        client.cache_stats().keys,
        vec!["coin_details:bitcoin".to_string()]
    );
}

#[tokio::test]
async fn test_coin_detail_not_found_propagates() {
    let (client, upstream) = gateway().await;

    let err = client.coin_detail("nonexistent-coin").await.unwrap_err();
    assert_eq!(err.kind, RequestErrorKind::NotFound);
    assert_eq!(err.status, Some(404));
    assert_eq!(client.cache_stats().count, 0);

    client.coin_detail("nonexistent-coin").await.unwrap_err();
    assert_eq!(upstream.detail_hits.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_coin_detail_rejects_blank_id_and_non_object() {
    let (client, upstream) = gateway().await;

    let err = client.coin_detail("   ").await.unwrap_err();
    assert_eq!(err.kind, RequestErrorKind::ApiError);
    assert_eq!(upstream.detail_hits.load(Ordering::SeqCst), 0);

    let err = client.coin_detail("listed-as-array").await.unwrap_err();
    assert_eq!(err.kind, RequestErrorKind::ApiError);
    assert_eq!(client.cache_stats().count, 0);
}

#[tokio::test]
async fn test_highlights_survive_trending_outage() {
    let (client, upstream) = gateway().await;
    upstream.fail_trending.store(true, Ordering::SeqCst);

    let aggregator = HighlightsAggregator::new(Arc::new(client), 5);
    let highlights = aggregator.highlights().await.unwrap();

    assert_eq!(highlights.top_gainers.len(), 2);
    assert_eq!(highlights.top_losers.len(), 1);
    assert_eq!(highlights.highest_volume.len(), 2);
    assert!(highlights.trending.is_empty());
    assert_eq!(highlights.failed, vec![HighlightSection::Trending]);
}

#[tokio::test]
async fn test_highlights_fail_when_upstream_is_down() {
    let (client, upstream) = gateway().await;
    upstream.fail_markets.store(true, Ordering::SeqCst);
    upstream.fail_trending.store(true, Ordering::SeqCst);

    let aggregator = HighlightsAggregator::new(Arc::new(client), 5);
    let err = aggregator.highlights().await.unwrap_err();
    assert_eq!(err.errors().len(), 4);
    assert_eq!(err.errors()[3].status, Some(503));
}

#[tokio::test]
async fn test_search_over_fetched_listing() {
    let (client, _) = gateway().await;

    let coins = client
        .list_markets(&MarketsQuery::new().order(MarketOrder::MarketCapDesc))
        .await
        .unwrap();
    let found = client.search_coins("ETH", &coins);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, "ethereum");
    assert_eq!(client.search_coins("", &coins).len(), 3);
}
