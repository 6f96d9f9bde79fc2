//! HTTP route handlers for the site.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Home page
//! GET  /health                 - Health check
//! GET  /how                    - How it works
//! GET  /vendors                - Vendor network pitch
//! GET  /contact                - Contact channels
//!
//! # Shop
//! GET  /shop                   - Eco shop (search, filter, sort)
//!
//! # Cart (HTMX fragments)
//! GET  /cart                   - Cart page
//! POST /cart/add               - Add to cart (returns added-state button fragment)
//! GET  /cart/button/{id}       - Fresh add-button fragment (button reset)
//! POST /cart/update            - Update quantity (returns cart_items fragment)
//! POST /cart/remove            - Remove item (returns cart_items fragment)
//! GET  /cart/count             - Cart count badge (fragment)
//!
//! # Checkout
//! GET  /checkout               - Checkout form
//! POST /checkout               - Validate and place the order
//! GET  /checkout/success       - Order confirmation page
//! POST /checkout/new-order     - Clear the confirmation, back to the shop
//!
//! # Quote wizard (session state machine; GET /start renders the current step)
//! GET  /start                  - Current wizard step
//! POST /start/details          - Submit contact and project details
//! POST /start/photos/upload    - Upload room photos (multipart)
//! POST /start/photos/remove    - Remove an uploaded photo
//! POST /start/photos           - Finish the photo step, start matching
//! POST /start/select           - Choose a designer
//! POST /start/confirm          - Confirm the selection
//! POST /start/schedule         - Book the consultation
//! POST /start/schedule/back    - Back from scheduling to the confirm step
//! POST /start/restart          - Abandon the journey and start over
//!
//! # Uploads
//! GET  /uploads/{id}           - Serve an uploaded photo
//! ```

pub mod cart;
pub mod checkout;
pub mod home;
pub mod pages;
pub mod quote;
pub mod shop;
pub mod uploads;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use tower_http::services::ServeDir;
use tower_http::trace::{DefaultOnResponse, OnResponse, TraceLayer};
use tracing::Span;

use crate::middleware::{create_session_layer, request_id_middleware};
use crate::state::AppState;

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/button/{id}", get(cart::add_button))
        .route("/update", post(cart::update))
        .route("/remove", post(cart::remove))
        .route("/count", get(cart::count))
}

/// Create the checkout routes router.
pub fn checkout_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(checkout::show).post(checkout::place_order))
        .route("/success", get(checkout::success))
        .route("/new-order", post(checkout::new_order))
}

/// Create the quote wizard routes router.
pub fn quote_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(quote::show))
        .route("/details", post(quote::submit_details))
        .route("/photos/upload", post(quote::upload_photos))
        .route("/photos/remove", post(quote::remove_photo))
        .route("/photos", post(quote::finish_photos))
        .route("/select", post(quote::select_designer))
        .route("/confirm", post(quote::confirm_selection))
        .route("/schedule", post(quote::schedule))
        .route("/schedule/back", post(quote::schedule_back))
        .route("/restart", post(quote::restart))
        // Photo uploads exceed the default 2 MB body cap
        .layer(DefaultBodyLimit::max(quote::MAX_UPLOAD_BODY_BYTES))
}

/// Create all routes for the site.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Home page
        .route("/", get(home::home))
        // Marketing pages
        .route("/how", get(pages::how))
        .route("/vendors", get(pages::vendors))
        .route("/contact", get(pages::contact))
        // Shop
        .route("/shop", get(shop::index))
        // Cart routes
        .nest("/cart", cart_routes())
        // Checkout routes
        .nest("/checkout", checkout_routes())
        // Quote wizard
        .nest("/start", quote_routes())
        // Uploaded photos
        .route("/uploads/{id}", get(uploads::show))
}

/// Build the complete application router with middleware.
///
/// Sentry layers are not attached here; `main` adds them outermost so the
/// whole stack is covered. Tests drive this router directly.
pub fn app(state: AppState) -> Router {
    let session_layer = create_session_layer(state.config());

    Router::new()
        .route("/health", get(health))
        .merge(routes())
        .fallback(pages::not_found)
        .nest_service(
            "/static",
            ServeDir::new(concat!(env!("CARGO_MANIFEST_DIR"), "/static")),
        )
        .layer(session_layer)
        .layer(axum::middleware::from_fn(request_id_middleware))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri(),
                        request_id = tracing::field::Empty,
                        status = tracing::field::Empty,
                        latency_ms = tracing::field::Empty,
                    )
                })
                .on_response(
                    |response: &axum::http::Response<_>,
                     latency: std::time::Duration,
                     span: &Span| {
                        span.record("status", response.status().as_u16());
                        span.record("latency_ms", u64::try_from(latency.as_millis()).unwrap_or(u64::MAX));
                        DefaultOnResponse::default().on_response(response, latency, span);
                    },
                ),
        )
        .with_state(state)
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
async fn health() -> &'static str {
    "ok"
}
