//! EcoBid site library.
//!
//! This crate provides the site functionality as a library, allowing it
//! to be tested and reused. The binary in `main.rs` wires it to Sentry,
//! tracing, and a TCP listener.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod bids;
pub mod catalog;
pub mod config;
pub mod error;
pub mod filters;
pub mod forms;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
