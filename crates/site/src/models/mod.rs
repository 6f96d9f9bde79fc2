//! Domain models for the site.
//!
//! Everything the site remembers about a visitor lives in the session:
//! the shop cart, the last order confirmation, and the quote wizard state.
//! Uploaded photo bytes are the exception; they live in the in-memory
//! photo store and the session keeps only their ids.

pub mod cart;
pub mod checkout;
pub mod quote;
pub mod session;

pub use session::keys as session_keys;
