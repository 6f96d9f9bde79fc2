//! EcoBid Core - Shared types library.
//!
//! This crate provides common types used across all EcoBid components:
//! - `site` - Public marketing, shop, and quote-wizard site
//! - `integration-tests` - End-to-end tests against the running site
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP, no storage. This
//! keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, order numbers,
//!   and the renovation-project vocabulary

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
