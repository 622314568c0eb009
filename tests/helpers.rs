// Shared test helpers for standing up the smart-link server.
//
// Each test binds its own server on an ephemeral port and talks to it over
// real HTTP with redirects disabled, so 302 responses can be inspected.

use std::sync::{Arc, Mutex};

use smartlink::events::{EventSink, LogEvent};
use smartlink::{build_router, AppState, Config};
use tokio::net::TcpListener;

pub const ANDROID_UA: &str = "Mozilla/5.0 (Linux; Android 14; Pixel 8) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Mobile Safari/537.36";
pub const IPHONE_UA: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_4 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.4 Mobile/15E148 Safari/604.1";
pub const IPAD_UA: &str = "Mozilla/5.0 (iPad; CPU OS 16_6 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/16.6 Mobile/15E148 Safari/604.1";
pub const LINUX_UA: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";

/// Event sink that keeps every event for later inspection.
#[derive(Default)]
pub struct RecordingSink {
    events: Mutex<Vec<LogEvent>>,
}

#[allow(dead_code)] // Not every test file inspects events
impl RecordingSink {
    pub fn events(&self) -> Vec<LogEvent> {
        self.events.lock().expect("sink mutex poisoned").clone()
    }
}

impl EventSink for RecordingSink {
    fn emit(&self, event: &LogEvent) {
        self.events
            .lock()
            .expect("sink mutex poisoned")
            .push(event.clone());
    }
}

/// A running test server.
pub struct TestServer {
    pub base_url: String,
    #[allow(dead_code)] // Not every test file inspects events
    pub sink: Arc<RecordingSink>,
}

/// Starts the router on 127.0.0.1 with an ephemeral port.
pub async fn start_test_server(config: Config) -> TestServer {
    let sink = Arc::new(RecordingSink::default());
    let state = AppState::with_sink(config, sink.clone());

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test server");
    let addr = listener.local_addr().expect("Failed to read local address");

    tokio::spawn(async move {
        axum::serve(listener, build_router(state))
            .await
            .expect("Test server failed");
    });

    TestServer {
        base_url: format!("http://{}", addr),
        sink,
    }
}

/// HTTP client that does not follow redirects.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .expect("Failed to build HTTP client")
}

/// Configuration with both deep links set.
#[allow(dead_code)] // Not every test file needs deep links
pub fn config_with_deep_links() -> Config {
    Config {
        android_deep_link: Some("myapp://android/open".to_string()),
        ios_deep_link: Some("myapp://ios/open".to_string()),
        ..Default::default()
    }
}
