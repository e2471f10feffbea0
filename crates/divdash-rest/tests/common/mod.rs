//! In-process analytics service used by the integration tests

use axum::extract::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::Router;
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::TcpListener;

/// Response for the QQCL.TO sample position, trimmed to two years
pub fn sample_response() -> Value {
    json!({
        "ticker": "QQCL.TO",
        "pnL": 11.10999899999996,
        "pnLPercent": 2.7331543144157093,
        "pnLWithDividend": 75.85999899999997,
        "pnLWithDividendPercent": 18.662205420398514,
        "totalDividend": 64.75,
        "totalDivPercent": 15.929051105982806,
        "lastDividendYield": 15.258620689655173,
        "ttmDividendYield": 14.00862068965517,
        "yieldOnCost": 15.675662339354812,
        "dividendFrequency": "monthly",
        "totalShares": 18,
        "totalInvestment": 406.490001,
        "totalValueToday": 417.59999999999997,
        "averageCost": 22.582777833333335,
        "summary": { "dividendsFound": 14 },
        "dividendHistory": [
            {
                "year": 2025,
                "frequency": "monthly",
                "totalAmount": 999,
                "payments": [
                    { "period": 1, "amount": 0.295, "status": "paid" },
                    { "period": 2, "amount": 0.295, "status": "paid" },
                    { "period": 7, "amount": 0.26785714285714285, "status": "upcoming" },
                    { "period": 8, "amount": 0, "status": "pending" }
                ]
            },
            {
                "year": 2024,
                "frequency": "monthly",
                "payments": [
                    { "period": 11, "amount": "0.25", "status": "paid", "label": "Nov" },
                    { "period": 12, "amount": 0.25, "status": "paid", "label": "Dec" }
                ]
            }
        ]
    })
}

/// Start a server with the given routes on an ephemeral port
pub async fn spawn(router: Router) -> String {
    let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0)))
        .await
        .unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

/// Healthy service that echoes the requested ticker into the sample response
pub async fn spawn_healthy() -> String {
    let router = Router::new()
        .route("/health", get(|| async { "OK" }))
        .route(
            "/api/v1/backtest",
            post(|Json(body): Json<Value>| async move {
                let mut response = sample_response();
                response["ticker"] = body["ticker"].clone();
                response["echo"] = body;
                Json(response)
            }),
        );
    spawn(router).await
}

/// Service that answers every backtest with the given status and body
pub async fn spawn_rejecting(status: StatusCode, body: &'static str) -> String {
    let router = Router::new()
        .route("/health", get(move || async move { status.into_response() }))
        .route(
            "/api/v1/backtest",
            post(move || async move { (status, body).into_response() }),
        );
    spawn(router).await
}

/// Service that waits before answering
pub async fn spawn_slow(delay: Duration) -> String {
    let router = Router::new().route(
        "/api/v1/backtest",
        post(move || async move {
            tokio::time::sleep(delay).await;
            Json(sample_response())
        }),
    );
    spawn(router).await
}

/// Address on which nothing is listening
pub async fn closed_address() -> String {
    let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0)))
        .await
        .unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}
