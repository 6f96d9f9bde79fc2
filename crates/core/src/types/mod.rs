//! Core types for EcoBid.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod order;
pub mod price;
pub mod project;

pub use id::*;
pub use order::OrderNumber;
pub use price::{CurrencyCode, Price};
pub use project::*;
