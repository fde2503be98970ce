//! Integration tests for the catalog fetch path.
//!
//! Each test binds a local listener that speaks just enough HTTP to serve
//! one canned response, so the full reqwest round trip is exercised without
//! a network dependency.

use std::net::SocketAddr;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use cartwheel_core::ItemId;
use cartwheel_store::{AppState, CartConfig, CatalogClient, CatalogError};

/// Serve a single canned HTTP response, then close the connection.
async fn spawn_one_shot_server(status_line: &'static str, body: &'static str) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Failed to read listener addr");

    tokio::spawn(async move {
        let Ok((mut stream, _)) = listener.accept().await else {
            return;
        };

        // Drain the request head before responding
        let mut request = Vec::new();
        let mut buf = [0_u8; 1024];
        loop {
            match stream.read(&mut buf).await {
                Ok(0) => break,
                Ok(n) => {
                    request.extend_from_slice(&buf[..n]);
                    if request.windows(4).any(|window| window == b"\r\n\r\n") {
                        break;
                    }
                }
                Err(_) => return,
            }
        }

        let response = format!(
            "HTTP/1.1 {status_line}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
            body.len()
        );
        let _ = stream.write_all(response.as_bytes()).await;
        let _ = stream.shutdown().await;
    });

    addr
}

fn config_for(addr: SocketAddr) -> CartConfig {
    CartConfig {
        catalog_url: format!("http://{addr}/")
            .parse()
            .expect("Failed to parse test endpoint"),
        request_timeout_secs: Some(5),
        sentry_dsn: None,
    }
}

const TWO_ITEMS: &str = r#"[
    {"id": "rec1", "title": "Samsung Galaxy S8", "price": "399.99", "img": "https://example.com/s8.jpg", "amount": 1},
    {"id": "rec2", "title": "Google Pixel", "price": "499.99", "amount": 2, "vendor": "google"}
]"#;

// ============================================================================
// Gateway Tests
// ============================================================================

#[tokio::test]
async fn test_fetch_decodes_items_in_response_order() {
    let addr = spawn_one_shot_server("200 OK", TWO_ITEMS).await;
    let client = CatalogClient::new(&config_for(addr)).expect("Failed to build client");

    let items = client
        .fetch_initial_items("random")
        .await
        .expect("Fetch should succeed");

    assert_eq!(items.len(), 2);
    assert_eq!(items[0].id, ItemId::from("rec1"));
    assert_eq!(items[1].id, ItemId::from("rec2"));
    assert_eq!(items[1].amount, 2);
    // Unmodeled remote fields survive the decode
    assert_eq!(items[1].extra["vendor"], serde_json::json!("google"));
}

#[tokio::test]
async fn test_fetch_maps_non_success_status_to_api_error() {
    let addr = spawn_one_shot_server("500 Internal Server Error", "boom").await;
    let client = CatalogClient::new(&config_for(addr)).expect("Failed to build client");

    let err = client
        .fetch_initial_items("")
        .await
        .expect_err("Fetch should fail");

    match err {
        CatalogError::Api { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "boom");
        }
        other => panic!("Expected Api error, got: {other}"),
    }
}

#[tokio::test]
async fn test_fetch_maps_bad_body_to_decode_error() {
    let addr = spawn_one_shot_server("200 OK", "not json at all").await;
    let client = CatalogClient::new(&config_for(addr)).expect("Failed to build client");

    let err = client
        .fetch_initial_items("")
        .await
        .expect_err("Fetch should fail");

    assert!(matches!(err, CatalogError::Decode(_)));
}

#[tokio::test]
async fn test_fetch_maps_refused_connection_to_http_error() {
    // Bind then drop to get an address nothing is listening on
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Failed to read listener addr");
    drop(listener);

    let client = CatalogClient::new(&config_for(addr)).expect("Failed to build client");
    let err = client
        .fetch_initial_items("")
        .await
        .expect_err("Fetch should fail");

    assert!(matches!(err, CatalogError::Http(_)));
}

// ============================================================================
// Store Synchronization Tests
// ============================================================================

#[tokio::test]
async fn test_load_success_populates_store_and_totals() {
    let addr = spawn_one_shot_server("200 OK", TWO_ITEMS).await;
    let state = AppState::new(config_for(addr)).expect("Failed to build state");

    assert!(state.cart().is_loading());
    state.load_initial_items("random").await;

    let mut cart = state.cart_mut();
    assert!(!cart.is_loading());
    assert!(cart.last_fetch_error().is_none());
    cart.recompute_totals();
    assert_eq!(cart.total_quantity(), 3);
    assert_eq!(
        cart.total_price(),
        "1399.97".parse::<rust_decimal::Decimal>().expect("decimal")
    );
}

#[tokio::test]
async fn test_load_failure_leaves_items_and_records_error() {
    let addr = spawn_one_shot_server("502 Bad Gateway", "upstream down").await;
    let state = AppState::new(config_for(addr)).expect("Failed to build state");

    state.load_initial_items("random").await;

    let mut cart = state.cart_mut();
    assert!(!cart.is_loading());
    assert!(cart.items().is_empty());
    assert!(cart.last_fetch_error().is_some());
    cart.recompute_totals();
    assert_eq!(cart.total_quantity(), 0);
}
