//! Strongly-typed identifiers used across the domain.
//!
//! Product ids and category names are caller-supplied opaque strings. The
//! newtypes validate non-emptiness once, at the boundary, so the catalog
//! internals never have to re-check.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// Identifier of a product (primary key within a catalog).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

/// Name of a category (groups products for category queries).
///
/// Ordered so that category indexes iterate in name order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryName(String);

macro_rules! impl_string_newtype {
    ($t:ty, $err:path, $what:literal) => {
        impl $t {
            /// Create a validated identifier. Rejects empty/blank input.
            pub fn new(value: impl Into<String>) -> Result<Self, CatalogError> {
                let value = value.into();
                if value.trim().is_empty() {
                    return Err($err(concat!($what, " cannot be empty")));
                }
                Ok(Self(value))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl AsRef<str> for $t {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        // Lets map lookups take `&str` without allocating. Sound because the
        // derived Hash/Ord of the newtype delegate to the inner String.
        impl core::borrow::Borrow<str> for $t {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl FromStr for $t {
            type Err = CatalogError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }
    };
}

impl_string_newtype!(ProductId, CatalogError::invalid_id, "product id");
impl_string_newtype!(CategoryName, CatalogError::invalid_category, "category name");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_id_accepts_plain_strings() {
        let id = ProductId::new("1").unwrap();
        assert_eq!(id.as_str(), "1");
        assert_eq!(id.to_string(), "1");
    }

    #[test]
    fn product_id_rejects_empty_and_blank() {
        match ProductId::new("") {
            Err(CatalogError::InvalidId(_)) => {}
            other => panic!("expected InvalidId, got {other:?}"),
        }
        match ProductId::new("   ") {
            Err(CatalogError::InvalidId(_)) => {}
            other => panic!("expected InvalidId, got {other:?}"),
        }
    }

    #[test]
    fn category_name_rejects_empty() {
        match "".parse::<CategoryName>() {
            Err(CatalogError::InvalidCategory(_)) => {}
            other => panic!("expected InvalidCategory, got {other:?}"),
        }
    }

    #[test]
    fn category_names_order_lexicographically() {
        let a = CategoryName::new("Electronics").unwrap();
        let b = CategoryName::new("Furniture").unwrap();
        assert!(a < b);
    }
}
