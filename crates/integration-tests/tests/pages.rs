//! Marketing pages, health check, 404 handling, and static assets.

use ecobid_integration_tests::{browser, extract_between, spawn_site};

#[tokio::test]
async fn test_health_endpoint() {
    let site = spawn_site().await;
    let client = browser();

    let resp = client
        .get(site.url("/health"))
        .send()
        .await
        .expect("health request failed");

    assert_eq!(resp.status(), reqwest::StatusCode::OK);
    assert_eq!(resp.text().await.expect("body"), "ok");
}

#[tokio::test]
async fn test_marketing_pages_render() {
    let site = spawn_site().await;
    let client = browser();

    for (path, marker) in [
        ("/", "Your Home Should Make You Smile."),
        ("/how", "Your Green Transformation Journey"),
        ("/vendors", "Join Our Vendor Network"),
        ("/contact", "Get in Touch"),
    ] {
        let resp = client
            .get(site.url(path))
            .send()
            .await
            .expect("page request failed");
        assert_eq!(resp.status(), reqwest::StatusCode::OK, "GET {path}");

        let body = resp.text().await.expect("body");
        assert!(body.contains(marker), "{path} is missing {marker:?}");
    }
}

#[tokio::test]
async fn test_unknown_path_renders_not_found_page() {
    let site = spawn_site().await;
    let client = browser();

    let resp = client
        .get(site.url("/no-such-page"))
        .send()
        .await
        .expect("request failed");

    assert_eq!(resp.status(), reqwest::StatusCode::NOT_FOUND);
    let body = resp.text().await.expect("body");
    assert!(body.contains("Page Not Found"));
    assert!(body.contains("Go Home"));
}

#[tokio::test]
async fn test_hashed_stylesheet_is_served() {
    let site = spawn_site().await;
    let client = browser();

    let home = client
        .get(site.url("/"))
        .send()
        .await
        .expect("home request failed")
        .text()
        .await
        .expect("body");

    // Every page links the content-hashed stylesheet produced at build time
    let href = extract_between(&home, "<link rel=\"stylesheet\" href=\"", "\"");
    assert!(
        href.starts_with("/static/css/derived/main."),
        "unexpected stylesheet href {href:?}"
    );

    let css = client
        .get(site.url(href))
        .send()
        .await
        .expect("stylesheet request failed");
    assert_eq!(css.status(), reqwest::StatusCode::OK);
    assert!(css.text().await.expect("body").contains(":root"));
}

#[tokio::test]
async fn test_navbar_links_every_section() {
    let site = spawn_site().await;
    let client = browser();

    let body = client
        .get(site.url("/"))
        .send()
        .await
        .expect("home request failed")
        .text()
        .await
        .expect("body");

    for href in ["/how", "/vendors", "/shop", "/contact", "/cart", "/start"] {
        assert!(
            body.contains(&format!("href=\"{href}\"")),
            "navbar is missing a link to {href}"
        );
    }
}
