//! Integration tests for the EcoBid site.
//!
//! Each test spawns the full application on an ephemeral port and drives it
//! over HTTP with a cookie-holding `reqwest` client, so sessions, redirects,
//! and HTMX fragments behave exactly as they do in production. The simulated
//! matching and order delays are zeroed out to keep the suite fast.
//!
//! Run with: `cargo test -p ecobid-integration-tests`

use std::net::{IpAddr, Ipv4Addr};
use std::time::Duration;

use ecobid_site::config::SiteConfig;
use ecobid_site::routes;
use ecobid_site::state::AppState;

/// A site instance bound to an ephemeral port for the duration of a test.
pub struct TestSite {
    pub base_url: String,
}

impl TestSite {
    /// Build a URL under this site's base.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

/// Configuration with the simulated delays zeroed out.
fn test_config() -> SiteConfig {
    SiteConfig {
        host: IpAddr::V4(Ipv4Addr::LOCALHOST),
        port: 0,
        base_url: "http://localhost".to_string(),
        matching_delay: Duration::ZERO,
        order_delay: Duration::ZERO,
        sentry_dsn: None,
        sentry_environment: "test".to_string(),
        sentry_sample_rate: 0.0,
        sentry_traces_sample_rate: 0.0,
    }
}

/// Spawn the site on an ephemeral port and return its base URL.
///
/// The server task is detached; it is torn down when the test binary exits.
pub async fn spawn_site() -> TestSite {
    let state = AppState::new(test_config());
    let app = routes::app(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Listener has no local addr");

    tokio::spawn(async move {
        axum::serve(listener, app)
            .await
            .expect("Test server exited");
    });

    TestSite {
        base_url: format!("http://{addr}"),
    }
}

/// A client that keeps session cookies between requests, like a browser.
#[must_use]
pub fn browser() -> reqwest::Client {
    reqwest::Client::builder()
        .cookie_store(true)
        .build()
        .expect("Failed to build HTTP client")
}

/// Like [`browser`], but does not follow redirects. Used to assert on
/// post/redirect/get behavior directly.
#[must_use]
pub fn browser_no_redirect() -> reqwest::Client {
    reqwest::Client::builder()
        .cookie_store(true)
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .expect("Failed to build HTTP client")
}

/// Pull the text between `prefix` and the next `suffix` out of an HTML body.
///
/// Panics when the pattern is missing so test failures point at the page
/// that changed.
#[must_use]
pub fn extract_between<'a>(body: &'a str, prefix: &str, suffix: &str) -> &'a str {
    let start = body
        .find(prefix)
        .unwrap_or_else(|| panic!("Pattern {prefix:?} not found in body"))
        + prefix.len();
    let rest = body.get(start..).expect("Prefix ends past the body");
    let end = rest
        .find(suffix)
        .unwrap_or_else(|| panic!("Suffix {suffix:?} not found after {prefix:?}"));
    rest.get(..end).expect("Suffix ends past the body")
}
