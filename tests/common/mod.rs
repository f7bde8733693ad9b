//! Shared fixtures for the integration tests.
//!
//! `spawn_upstream` starts a throwaway axum server on an ephemeral port that
//! plays the role of the upstream product catalog.

#![allow(dead_code)]

use std::time::Duration;

use axum::http::{header::CONTENT_TYPE, StatusCode};
use axum::routing::get;
use axum::Router;

use catalog_filter::api::{set_silent, CatalogClient};

pub const SAMPLE_CATALOG: &str = r#"{
    "products": [
        {"title": "Small tee", "description": "A soft green shirt for summer", "price": 10, "sizes": ["S"]},
        {"title": "Rain jacket", "description": "A green jacket that keeps rain out", "price": 20, "sizes": ["M", "L"]},
        {"title": "Wool coat", "description": "A warm coat for cold winter days", "price": 30, "sizes": ["L"]}
    ]
}"#;

/// Serve `body` with `status` at `/products` and return its URL.
pub async fn spawn_upstream(status: StatusCode, body: &'static str) -> String {
    spawn_upstream_with_delay(status, body, Duration::ZERO).await
}

pub async fn spawn_upstream_with_delay(
    status: StatusCode,
    body: &'static str,
    delay: Duration,
) -> String {
    set_silent(true);
    let app = Router::new().route(
        "/products",
        get(move || async move {
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            (status, [(CONTENT_TYPE, "application/json")], body)
        }),
    );
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}/products", addr)
}

/// A URL on a port with nothing listening.
pub async fn unreachable_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/products", addr)
}

pub fn client_for(url: &str) -> CatalogClient {
    CatalogClient::new(url, Duration::from_secs(2)).unwrap()
}
