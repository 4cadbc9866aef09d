//! Integration tests for NetBox client
//!
//! These tests require a running NetBox instance.
//! Set NETBOX_URL and NETBOX_TOKEN environment variables to run.

use netbox_client::{NetBoxClient, NetBoxError};

fn live_client() -> NetBoxClient {
    let url = std::env::var("NETBOX_URL")
        .unwrap_or_else(|_| "http://localhost:8001".to_string());
    let token = std::env::var("NETBOX_TOKEN")
        .expect("NETBOX_TOKEN environment variable must be set");

    NetBoxClient::new(&url, Some(&token)).expect("Failed to create client")
}

#[tokio::test]
#[ignore] // Requires running NetBox instance
async fn test_walk_all_devices() {
    let client = live_client();

    let mut pager = client.devices();
    let mut count = 0;
    while let Some(device) = pager.next_record().await.expect("Failed to fetch devices") {
        assert!(device.raw().contains_key("id"), "NetBox devices always carry an id");
        count += 1;
    }

    println!("Found {} devices across {} pages", count, pager.pages_fetched());
}

#[tokio::test]
#[ignore]
async fn test_small_pages_follow_cursor() {
    let client = live_client();

    let filters = vec![("limit".to_string(), "1".to_string())];
    let mut pager = client.devices_filtered(&filters);
    let mut count = 0;
    while pager.next_record().await.expect("Failed to fetch devices").is_some() {
        count += 1;
    }

    assert_eq!(pager.pages_fetched().max(1), count.max(1), "one device per page");
}

#[tokio::test]
#[ignore]
async fn test_bad_token_is_rejected() {
    let url = std::env::var("NETBOX_URL")
        .unwrap_or_else(|_| "http://localhost:8001".to_string());
    let client = NetBoxClient::new(&url, Some("definitely-not-a-token")).expect("Failed to create client");

    let err = client.devices().next_record().await.expect_err("invalid token must fail");
    assert!(matches!(err, NetBoxError::UnexpectedStatus { status: 403, .. }));
}
