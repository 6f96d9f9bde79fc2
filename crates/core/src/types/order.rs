//! Order number newtype.

use serde::{Deserialize, Serialize};

/// A customer-facing shop order number.
///
/// Order numbers look like `ECO-K3TZR7Q2M`: the fixed prefix followed by
/// nine uppercase alphanumerics. Generation lives with the checkout flow;
/// this type only carries the value around.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderNumber(String);

impl OrderNumber {
    /// The prefix every order number starts with.
    pub const PREFIX: &'static str = "ECO-";

    /// Wrap an already-formatted order number.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Get the underlying string value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for OrderNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<OrderNumber> for String {
    fn from(value: OrderNumber) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_number_display() {
        let number = OrderNumber::new("ECO-ABC123XYZ");
        assert_eq!(number.to_string(), "ECO-ABC123XYZ");
        assert_eq!(number.as_str(), "ECO-ABC123XYZ");
    }
}
