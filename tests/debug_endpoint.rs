//! Debug endpoint behavior over real HTTP.

mod helpers;

use helpers::*;
use smartlink::Config;

fn debug_config() -> Config {
    Config {
        debug: true,
        ios_deep_link: Some("myapp://ios/open".to_string()),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_debug_endpoint_is_hidden_when_disabled() {
    let server = start_test_server(Config::default()).await;

    for path in ["/api/debug", "/debug"] {
        let response = client()
            .get(format!("{}{}", server.base_url, path))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 404, "path {}", path);
        assert_eq!(response.text().await.unwrap(), "Not Found");
    }
}

#[tokio::test]
async fn test_debug_endpoint_reports_routing() {
    let server = start_test_server(debug_config()).await;

    let response = client()
        .get(format!("{}/api/debug?utm=foo&id=7", server.base_url))
        .header("User-Agent", IPHONE_UA)
        .header("Sec-CH-UA-Mobile", "?1")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    assert_eq!(response.headers()["content-type"], "application/json");
    assert_eq!(response.headers()["cache-control"], "no-store");

    let json: serde_json::Value =
        serde_json::from_str(&response.text().await.unwrap()).unwrap();
    assert_eq!(json["detection"]["device"], "ios");
    assert_eq!(json["detection"]["confidence"], "high");
    assert!(json["detection"]["reason"].as_str().unwrap().contains("iPhone"));
    assert_eq!(json["needsBridgePage"], false);
    assert_eq!(json["chosenTarget"], "deep_link");
    assert_eq!(json["queryString"], "utm=foo&id=7");
    assert_eq!(json["headers"]["User-Agent"], IPHONE_UA);
    assert_eq!(json["headers"]["Sec-CH-UA-Mobile"], "?1");
    assert!(json["headers"]["Sec-CH-UA-Platform"].is_null());
    assert!(json["headers"]["x-forwarded-for"].is_null());
    assert_eq!(json["config"]["iosDeepLink"], "myapp://ios/open");
    assert!(json["config"]["androidDeepLink"].is_null());
    assert_eq!(json["config"]["fallbackUrl"], "https://example.com/app");
}

#[tokio::test]
async fn test_debug_endpoint_redacts_client_ip() {
    let server = start_test_server(debug_config()).await;

    let response = client()
        .get(format!("{}/debug", server.base_url))
        .header("x-forwarded-for", "198.51.100.23")
        .header("x-real-ip", "198.51.100.24")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let body = response.text().await.unwrap();
    assert!(!body.contains("198.51.100.23"));
    assert!(!body.contains("198.51.100.24"));

    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["headers"]["x-forwarded-for"], "[redacted]");
}

#[tokio::test]
async fn test_debug_matches_redirect_decision() {
    let server = start_test_server(debug_config()).await;

    let response = client()
        .get(format!("{}/api/debug", server.base_url))
        .header("Sec-CH-UA-Platform", "\"macOS\"")
        .header("User-Agent", IPAD_UA)
        .send()
        .await
        .unwrap();
    let json: serde_json::Value =
        serde_json::from_str(&response.text().await.unwrap()).unwrap();
    assert_eq!(json["chosenTarget"], "bridge");
    assert_eq!(json["needsBridgePage"], true);
    assert_eq!(json["detection"]["confidence"], "low");

    // The debug endpoint records nothing; the redirect does
    assert!(server.sink.events().is_empty());
    client()
        .get(format!("{}/", server.base_url))
        .header("Sec-CH-UA-Platform", "\"macOS\"")
        .header("User-Agent", IPAD_UA)
        .send()
        .await
        .unwrap();
    let events = server.sink.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].chosen_target.to_string(), "bridge");
}
