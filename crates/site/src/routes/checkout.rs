//! Checkout route handlers.
//!
//! Checkout is a three-state flow: cart, checkout form, success. The form
//! validates presence only; there is no real payment processing, so any
//! filled-in form places the order after a simulated processing delay.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use chrono::Utc;
use ecobid_core::INDIAN_STATES;
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::{Result, add_breadcrumb};
use crate::filters;
use crate::models::cart::{Cart, CartTotals};
use crate::models::checkout::{OrderConfirmation, PaymentMethod, generate_order_number};
use crate::models::session_keys;
use crate::routes::cart::{CartView, get_cart, set_cart};
use crate::state::AppState;

// =============================================================================
// Forms and Validation
// =============================================================================

/// Checkout form data. Every field arrives as a string; validation decides
/// which ones must be non-blank.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CheckoutForm {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub postal_code: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub payment_method: String,
    #[serde(default)]
    pub card_number: String,
    #[serde(default)]
    pub expiry_date: String,
    #[serde(default)]
    pub cvv: String,
    #[serde(default)]
    pub special_instructions: String,
}

impl CheckoutForm {
    /// The payment method this form selects, defaulting to card.
    #[must_use]
    pub fn method(&self) -> PaymentMethod {
        PaymentMethod::from_slug(&self.payment_method)
    }
}

/// One inline message per invalid checkout field.
#[derive(Debug, Default)]
pub struct CheckoutErrors {
    pub first_name: Option<&'static str>,
    pub last_name: Option<&'static str>,
    pub email: Option<&'static str>,
    pub phone: Option<&'static str>,
    pub address: Option<&'static str>,
    pub city: Option<&'static str>,
    pub postal_code: Option<&'static str>,
    pub state: Option<&'static str>,
    pub card_number: Option<&'static str>,
    pub expiry_date: Option<&'static str>,
    pub cvv: Option<&'static str>,
}

impl CheckoutErrors {
    /// Presence-check a submitted form. Card fields are only required when
    /// the card payment method is selected.
    #[must_use]
    pub fn validate(form: &CheckoutForm) -> Self {
        let require =
            |value: &str, message: &'static str| value.trim().is_empty().then_some(message);

        let mut errors = Self {
            first_name: require(&form.first_name, "First name is required"),
            last_name: require(&form.last_name, "Last name is required"),
            email: require(&form.email, "Email is required"),
            phone: require(&form.phone, "Phone is required"),
            address: require(&form.address, "Address is required"),
            city: require(&form.city, "City is required"),
            postal_code: require(&form.postal_code, "Postal code is required"),
            state: require(&form.state, "State is required"),
            ..Self::default()
        };

        if form.method() == PaymentMethod::Card {
            errors.card_number = require(&form.card_number, "Card number is required");
            errors.expiry_date = require(&form.expiry_date, "Expiry date is required");
            errors.cvv = require(&form.cvv, "CVV is required");
        }

        errors
    }

    /// Whether any field failed validation.
    #[must_use]
    pub const fn any(&self) -> bool {
        self.first_name.is_some()
            || self.last_name.is_some()
            || self.email.is_some()
            || self.phone.is_some()
            || self.address.is_some()
            || self.city.is_some()
            || self.postal_code.is_some()
            || self.state.is_some()
            || self.card_number.is_some()
            || self.expiry_date.is_some()
            || self.cvv.is_some()
    }
}

/// One payment method radio button.
#[derive(Clone)]
pub struct PaymentOption {
    pub value: &'static str,
    pub label: &'static str,
    pub checked: bool,
}

fn payment_options(selected: PaymentMethod) -> Vec<PaymentOption> {
    PaymentMethod::ALL
        .into_iter()
        .map(|method| PaymentOption {
            value: method.slug(),
            label: method.label(),
            checked: method == selected,
        })
        .collect()
}

// =============================================================================
// Templates
// =============================================================================

/// Checkout form template.
#[derive(Template, WebTemplate)]
#[template(path = "checkout/show.html")]
pub struct CheckoutTemplate {
    pub cart: CartView,
    pub form: CheckoutForm,
    pub errors: CheckoutErrors,
    pub payment_methods: Vec<PaymentOption>,
    pub states: &'static [&'static str],
}

/// Order confirmation template.
#[derive(Template, WebTemplate)]
#[template(path = "checkout/success.html")]
pub struct SuccessTemplate {
    pub order_number: String,
    pub total: String,
    pub email: String,
}

// =============================================================================
// Handlers
// =============================================================================

/// Display the checkout form. An empty cart has nothing to check out,
/// so it bounces back to the cart page.
#[instrument(skip(session))]
pub async fn show(session: Session) -> Result<Response> {
    let cart = get_cart(&session).await;
    if cart.is_empty() {
        return Ok(Redirect::to("/cart").into_response());
    }

    Ok(CheckoutTemplate {
        cart: CartView::from(&cart),
        form: CheckoutForm::default(),
        errors: CheckoutErrors::default(),
        payment_methods: payment_options(PaymentMethod::default()),
        states: &INDIAN_STATES,
    }
    .into_response())
}

/// Validate the form and place the order.
///
/// Validation failures re-render the form with inline messages and the
/// entered values. A valid form waits out the simulated processing delay,
/// stores the confirmation, empties the cart, and redirects to the
/// success page.
#[instrument(skip_all, fields(payment_method = %form.payment_method))]
pub async fn place_order(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<CheckoutForm>,
) -> Result<Response> {
    let cart = get_cart(&session).await;
    if cart.is_empty() {
        return Ok(Redirect::to("/cart").into_response());
    }

    let errors = CheckoutErrors::validate(&form);
    if errors.any() {
        return Ok(CheckoutTemplate {
            cart: CartView::from(&cart),
            payment_methods: payment_options(form.method()),
            states: &INDIAN_STATES,
            form,
            errors,
        }
        .into_response());
    }

    tokio::time::sleep(state.config().order_delay).await;

    let totals = CartTotals::compute(&cart);
    let confirmation = OrderConfirmation {
        order_number: generate_order_number(),
        total: totals.total,
        email: form.email.trim().to_string(),
        placed_at: Utc::now(),
    };

    session
        .insert(session_keys::ORDER_CONFIRMATION, &confirmation)
        .await?;
    set_cart(&session, &Cart::default()).await?;

    add_breadcrumb(
        "checkout",
        "Order placed",
        Some(&[("order_number", confirmation.order_number.as_str())]),
    );
    tracing::info!(
        order_number = %confirmation.order_number,
        total = %confirmation.total,
        method = form.method().slug(),
        "Order placed"
    );

    Ok(Redirect::to("/checkout/success").into_response())
}

/// Display the order confirmation. Without a confirmation in the session
/// there is nothing to show, so it bounces back to the cart page.
#[instrument(skip(session))]
pub async fn success(session: Session) -> Result<Response> {
    let Some(confirmation) = session
        .get::<OrderConfirmation>(session_keys::ORDER_CONFIRMATION)
        .await?
    else {
        return Ok(Redirect::to("/cart").into_response());
    };

    Ok(SuccessTemplate {
        order_number: confirmation.order_number.to_string(),
        total: confirmation.total.to_string(),
        email: confirmation.email,
    }
    .into_response())
}

/// Clear the confirmation and head back to the shop.
#[instrument(skip(session))]
pub async fn new_order(session: Session) -> Result<Redirect> {
    session
        .remove::<OrderConfirmation>(session_keys::ORDER_CONFIRMATION)
        .await?;
    Ok(Redirect::to("/shop"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> CheckoutForm {
        CheckoutForm {
            first_name: "Aisha".to_string(),
            last_name: "Sharma".to_string(),
            email: "aisha@example.com".to_string(),
            phone: "+91 98765 43210".to_string(),
            address: "12 MG Road".to_string(),
            city: "Panaji".to_string(),
            postal_code: "403001".to_string(),
            state: "Goa".to_string(),
            payment_method: "card".to_string(),
            card_number: "4111 1111 1111 1111".to_string(),
            expiry_date: "12/27".to_string(),
            cvv: "123".to_string(),
            special_instructions: String::new(),
        }
    }

    #[test]
    fn test_validate_accepts_filled_card_form() {
        assert!(!CheckoutErrors::validate(&filled_form()).any());
    }

    #[test]
    fn test_validate_flags_missing_fields() {
        let mut form = filled_form();
        form.first_name = String::new();
        form.email = "   ".to_string();

        let errors = CheckoutErrors::validate(&form);
        assert_eq!(errors.first_name, Some("First name is required"));
        assert_eq!(errors.email, Some("Email is required"));
        assert!(errors.last_name.is_none());
        assert!(errors.any());
    }

    #[test]
    fn test_validate_requires_card_fields_for_card_only() {
        let mut form = filled_form();
        form.card_number = String::new();
        form.expiry_date = String::new();
        form.cvv = String::new();

        let errors = CheckoutErrors::validate(&form);
        assert_eq!(errors.card_number, Some("Card number is required"));
        assert_eq!(errors.expiry_date, Some("Expiry date is required"));
        assert_eq!(errors.cvv, Some("CVV is required"));

        form.payment_method = "cod".to_string();
        let errors = CheckoutErrors::validate(&form);
        assert!(!errors.any());
    }

    #[test]
    fn test_validate_unknown_method_falls_back_to_card() {
        let mut form = filled_form();
        form.payment_method = "cheque".to_string();
        form.cvv = String::new();

        let errors = CheckoutErrors::validate(&form);
        assert_eq!(errors.cvv, Some("CVV is required"));
    }

    #[test]
    fn test_special_instructions_are_optional() {
        let mut form = filled_form();
        form.special_instructions = String::new();
        assert!(!CheckoutErrors::validate(&form).any());
    }

    #[test]
    fn test_payment_options_mark_selection() {
        let options = payment_options(PaymentMethod::Upi);
        let checked: Vec<&str> = options
            .iter()
            .filter(|o| o.checked)
            .map(|o| o.value)
            .collect();
        assert_eq!(checked, vec!["upi"]);
        assert_eq!(options.len(), 3);
    }
}
