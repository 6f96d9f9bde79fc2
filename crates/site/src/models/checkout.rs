//! Checkout types stored in the session.

use chrono::{DateTime, Utc};
use ecobid_core::{OrderNumber, Price};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Payment methods offered at checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    #[default]
    Card,
    Upi,
    Cod,
}

impl PaymentMethod {
    pub const ALL: [Self; 3] = [Self::Card, Self::Upi, Self::Cod];

    /// Form value for this payment method.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Card => "card",
            Self::Upi => "upi",
            Self::Cod => "cod",
        }
    }

    /// Label shown next to the radio button.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Card => "Credit/Debit Card",
            Self::Upi => "UPI",
            Self::Cod => "Cash on Delivery",
        }
    }

    /// Parse a form value, falling back to `Card`.
    #[must_use]
    pub fn from_slug(slug: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|m| m.slug() == slug)
            .unwrap_or_default()
    }
}

/// Stored after a successful order so the success page can render it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderConfirmation {
    pub order_number: OrderNumber,
    pub total: Price,
    pub email: String,
    pub placed_at: DateTime<Utc>,
}

/// Generate a fresh order number, e.g. `ECO-K3TZR7Q2M`.
#[must_use]
pub fn generate_order_number() -> OrderNumber {
    let suffix: String = rand::rng()
        .sample_iter(rand::distr::Alphanumeric)
        .take(9)
        .map(|b| char::from(b).to_ascii_uppercase())
        .collect();
    OrderNumber::new(format!("{}{suffix}", OrderNumber::PREFIX))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payment_method_slug_round_trip() {
        for method in PaymentMethod::ALL {
            assert_eq!(PaymentMethod::from_slug(method.slug()), method);
        }
    }

    #[test]
    fn test_payment_method_unknown_defaults_to_card() {
        assert_eq!(PaymentMethod::from_slug("cheque"), PaymentMethod::Card);
    }

    #[test]
    fn test_order_number_shape() {
        let number = generate_order_number();
        let suffix = number
            .as_str()
            .strip_prefix(OrderNumber::PREFIX)
            .unwrap_or_default();

        assert_eq!(suffix.len(), 9);
        assert!(suffix.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
    }
}
