//! Cart route handlers.
//!
//! Cart operations use HTMX for dynamic updates without full page reloads.
//! The cart itself lives in the session; products are priced against the
//! static catalog on every render.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::Path,
    response::{AppendHeaders, IntoResponse, Response},
};
use ecobid_core::ProductId;
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::catalog;
use crate::error::{AppError, Result, add_breadcrumb};
use crate::filters;
use crate::models::cart::{Cart, CartTotals};
use crate::models::session_keys;

// =============================================================================
// View Types
// =============================================================================

/// Cart item display data for templates.
#[derive(Clone)]
pub struct CartItemView {
    pub id: String,
    pub name: &'static str,
    pub price: String,
    pub quantity: u32,
    pub line_price: String,
    pub image_path: &'static str,
}

/// Cart display data for templates.
#[derive(Clone)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub subtotal: String,
    /// "Free" above the free-shipping threshold, a price otherwise.
    pub shipping: String,
    pub total: String,
    pub item_count: u32,
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        let totals = CartTotals::compute(cart);

        let items = cart
            .lines
            .iter()
            .filter_map(|line| {
                catalog::find(&line.product_id).map(|product| CartItemView {
                    id: product.id.as_str().to_string(),
                    name: product.name,
                    price: product.price.to_string(),
                    quantity: line.quantity,
                    line_price: product.price.times(line.quantity).to_string(),
                    image_path: product.image_path,
                })
            })
            .collect();

        Self {
            items,
            subtotal: totals.subtotal.to_string(),
            shipping: if totals.shipping.is_zero() {
                "Free".to_string()
            } else {
                totals.shipping.to_string()
            },
            total: totals.total.to_string(),
            item_count: cart.item_count(),
        }
    }
}

// =============================================================================
// Session Helpers
// =============================================================================

/// Get the cart from the session, defaulting to empty.
pub(crate) async fn get_cart(session: &Session) -> Cart {
    session
        .get::<Cart>(session_keys::CART)
        .await
        .ok()
        .flatten()
        .unwrap_or_default()
}

/// Persist the cart to the session.
pub(crate) async fn set_cart(
    session: &Session,
    cart: &Cart,
) -> std::result::Result<(), tower_sessions::session::Error> {
    session.insert(session_keys::CART, cart).await
}

// =============================================================================
// Forms and Templates
// =============================================================================

/// Add to cart form data.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub product_id: String,
    pub quantity: Option<u32>,
}

/// Update cart form data.
#[derive(Debug, Deserialize)]
pub struct UpdateCartForm {
    pub product_id: String,
    pub quantity: u32,
}

/// Remove from cart form data.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartForm {
    pub product_id: String,
}

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart/show.html")]
pub struct CartShowTemplate {
    pub cart: CartView,
}

/// Cart items fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_items.html")]
pub struct CartItemsTemplate {
    pub cart: CartView,
}

/// Cart count badge fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub count: u32,
}

/// Add-to-cart button fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/add_button.html")]
pub struct AddButtonTemplate {
    pub product_id: String,
    pub in_stock: bool,
}

/// Added-to-cart confirmation button fragment (for HTMX).
///
/// Swaps itself back to the regular button after a short delay.
#[derive(Template, WebTemplate)]
#[template(path = "partials/add_button_added.html")]
pub struct AddedButtonTemplate {
    pub product_id: String,
}

// =============================================================================
// Handlers
// =============================================================================

/// Display cart page.
#[instrument(skip(session))]
pub async fn show(session: Session) -> impl IntoResponse {
    let cart = get_cart(&session).await;

    CartShowTemplate {
        cart: CartView::from(&cart),
    }
}

/// Add item to cart (HTMX).
///
/// Returns the button in its "Added to Cart!" state plus an HTMX trigger
/// that refreshes the cart count badge. Out-of-stock products leave the
/// cart untouched.
#[instrument(skip(session))]
pub async fn add(session: Session, Form(form): Form<AddToCartForm>) -> Result<Response> {
    let product_id = ProductId::new(form.product_id);
    let product = catalog::find(&product_id)
        .ok_or_else(|| AppError::NotFound(format!("product {product_id}")))?;

    if !product.in_stock {
        return Ok(AddButtonTemplate {
            product_id: product_id.as_str().to_string(),
            in_stock: false,
        }
        .into_response());
    }

    let mut cart = get_cart(&session).await;
    cart.add(product_id.clone(), form.quantity.unwrap_or(1));

    if let Err(e) = set_cart(&session, &cart).await {
        tracing::error!("Failed to save cart to session: {e}");
    }

    add_breadcrumb(
        "cart",
        "Added product to cart",
        Some(&[("product_id", product_id.as_str())]),
    );

    Ok((
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        AddedButtonTemplate {
            product_id: product_id.as_str().to_string(),
        },
    )
        .into_response())
}

/// Fresh add-to-cart button fragment (HTMX).
///
/// The added-state button swaps itself for this after its delay expires.
#[instrument]
pub async fn add_button(Path(id): Path<String>) -> Result<impl IntoResponse> {
    let product_id = ProductId::new(id);
    let product = catalog::find(&product_id)
        .ok_or_else(|| AppError::NotFound(format!("product {product_id}")))?;

    Ok(AddButtonTemplate {
        product_id: product_id.as_str().to_string(),
        in_stock: product.in_stock,
    })
}

/// Update cart item quantity (HTMX). Quantity zero removes the line.
#[instrument(skip(session))]
pub async fn update(session: Session, Form(form): Form<UpdateCartForm>) -> Response {
    let mut cart = get_cart(&session).await;
    cart.set_quantity(&ProductId::new(form.product_id), form.quantity);

    if let Err(e) = set_cart(&session, &cart).await {
        tracing::error!("Failed to save cart to session: {e}");
    }

    (
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        CartItemsTemplate {
            cart: CartView::from(&cart),
        },
    )
        .into_response()
}

/// Remove item from cart (HTMX).
#[instrument(skip(session))]
pub async fn remove(session: Session, Form(form): Form<RemoveFromCartForm>) -> Response {
    let mut cart = get_cart(&session).await;
    cart.remove(&ProductId::new(form.product_id));

    if let Err(e) = set_cart(&session, &cart).await {
        tracing::error!("Failed to save cart to session: {e}");
    }

    (
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        CartItemsTemplate {
            cart: CartView::from(&cart),
        },
    )
        .into_response()
}

/// Get cart count badge (HTMX).
#[instrument(skip(session))]
pub async fn count(session: Session) -> impl IntoResponse {
    let cart = get_cart(&session).await;

    CartCountTemplate {
        count: cart.item_count(),
    }
}
