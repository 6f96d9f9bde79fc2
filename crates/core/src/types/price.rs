//! Type-safe price representation using decimal arithmetic.
//!
//! All EcoBid prices are rupee amounts. Display output follows the Indian
//! digit-grouping convention (the last three digits, then groups of two):
//! `₹25,000`, `₹1,00,000`. Paise are shown only when non-zero.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A price with currency information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    /// Amount in the currency's standard unit (rupees, not paise).
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency_code: CurrencyCode,
}

impl Price {
    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal, currency_code: CurrencyCode) -> Self {
        Self {
            amount,
            currency_code,
        }
    }

    /// Create a whole-rupee price.
    #[must_use]
    pub fn rupees(amount: i64) -> Self {
        Self::new(Decimal::from(amount), CurrencyCode::INR)
    }

    /// Multiply by a line quantity.
    #[must_use]
    pub fn times(self, quantity: u32) -> Self {
        Self::new(self.amount * Decimal::from(quantity), self.currency_code)
    }

    /// Whether the amount is exactly zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }
}

impl std::ops::Add for Price {
    type Output = Self;

    // All prices in a cart share one currency; the left operand's code wins.
    fn add(self, rhs: Self) -> Self {
        Self::new(self.amount + rhs.amount, self.currency_code)
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sign = if self.amount.is_sign_negative() {
            "-"
        } else {
            ""
        };
        let rendered = format!("{:.2}", self.amount.abs());
        let (whole, paise) = rendered
            .split_once('.')
            .unwrap_or((rendered.as_str(), "00"));
        let grouped = group_indian(whole);
        if paise == "00" {
            write!(f, "{sign}{}{grouped}", self.currency_code.symbol())
        } else {
            write!(f, "{sign}{}{grouped}.{paise}", self.currency_code.symbol())
        }
    }
}

/// ISO 4217 currency codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    INR,
}

impl CurrencyCode {
    /// The display symbol for this currency.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::INR => "\u{20b9}",
        }
    }
}

/// Group a run of ASCII digits Indian-style: `1234567` becomes `12,34,567`.
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_owned();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut rest = head;
    while rest.len() > 2 {
        let (lead, group) = rest.split_at(rest.len() - 2);
        groups.push(group);
        rest = lead;
    }
    groups.push(rest);
    groups.reverse();
    let mut out = groups.join(",");
    out.push(',');
    out.push_str(tail);
    out
}
