//! Newtype IDs for type-safe entity references.
//!
//! Catalog and vendor data carry string IDs (`define_string_id!`), while
//! server-generated handles such as uploaded photos and match jobs use
//! random UUIDs (`define_uuid_id!`). Both macros prevent accidentally
//! mixing IDs from different entity types.

use serde::{Deserialize, Serialize};

/// Macro to define a type-safe string ID wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`
/// - Conversion methods: `new()`, `as_str()`
/// - `From<String>`, `From<&str>`, and `Into<String>` implementations
///
/// # Example
///
/// ```rust
/// # use ecobid_core::define_string_id;
/// define_string_id!(ProductId);
/// define_string_id!(VendorId);
///
/// let product_id = ProductId::new("1");
/// let vendor_id = VendorId::new("1");
///
/// // These are different types, so this won't compile:
/// // let _: ProductId = vendor_id;
/// ```
#[macro_export]
macro_rules! define_string_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from a string value.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the underlying string value.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

/// Macro to define a type-safe UUID wrapper.
///
/// Creates a newtype wrapper around [`uuid::Uuid`] with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`
/// - `new()` generating a random v4 UUID, plus `as_uuid()`
/// - `From<Uuid>` and `Into<Uuid>` implementations
#[macro_export]
macro_rules! define_uuid_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(::uuid::Uuid);

        impl $name {
            /// Create a new random ID.
            #[must_use]
            pub fn new() -> Self {
                Self(::uuid::Uuid::new_v4())
            }

            /// Get the underlying UUID value.
            #[must_use]
            pub const fn as_uuid(&self) -> ::uuid::Uuid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<::uuid::Uuid> for $name {
            fn from(id: ::uuid::Uuid) -> Self {
                Self(id)
            }
        }

        impl From<$name> for ::uuid::Uuid {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

// Catalog and vendor entity IDs (fixed mock data, string-keyed)
define_string_id!(ProductId);
define_string_id!(VendorId);
define_string_id!(QuotationId);
define_string_id!(PortfolioItemId);

// Server-generated handles
define_uuid_id!(PhotoId);
define_uuid_id!(MatchJobId);

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_string_id_round_trip() {
        let id = ProductId::new("7");
        assert_eq!(id.as_str(), "7");
        assert_eq!(id.to_string(), "7");
        assert_eq!(ProductId::from("7"), id);
        assert_eq!(String::from(id), "7");
    }

    #[test]
    fn test_string_id_serde_transparent() {
        let id = QuotationId::new("2");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"2\"");
        let back: QuotationId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_uuid_ids_are_unique() {
        assert_ne!(PhotoId::new(), PhotoId::new());
        assert_ne!(MatchJobId::new(), MatchJobId::new());
    }

    #[test]
    fn test_uuid_id_serde_transparent() {
        let id = PhotoId::new();
        let json = serde_json::to_string(&id).unwrap();
        let back: PhotoId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
