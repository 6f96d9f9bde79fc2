//! Business logic services for the site.
//!
//! # Services
//!
//! - `matcher` - Designer matchmaking for submitted projects
//! - `photos` - In-memory storage for uploaded room photos

pub mod matcher;
pub mod photos;
