//! Session key constants.

/// Session keys for visitor data.
pub mod keys {
    /// Key for the shop cart.
    pub const CART: &str = "cart";

    /// Key for the most recent order confirmation.
    pub const ORDER_CONFIRMATION: &str = "order_confirmation";

    /// Key for the quote wizard state machine.
    pub const QUOTE_WIZARD: &str = "quote_wizard";
}
