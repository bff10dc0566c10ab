//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Domain-level error.
///
/// Keep this focused on deterministic input-validation failures. A missing
/// product or category is a normal empty-result outcome, not an error, and
/// is therefore modeled in the operation return types instead of here.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// An empty or blank product identifier was supplied.
    #[error("invalid product id: {0}")]
    InvalidId(String),

    /// An empty or blank product name was supplied.
    #[error("invalid product name: {0}")]
    InvalidName(String),

    /// An empty or blank category name was supplied.
    #[error("invalid category name: {0}")]
    InvalidCategory(String),

    /// A negative stock quantity was supplied.
    #[error("invalid stock quantity: {0}")]
    InvalidStock(i64),

    /// A query parameter was out of range (e.g. non-positive k).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl CatalogError {
    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn invalid_name(msg: impl Into<String>) -> Self {
        Self::InvalidName(msg.into())
    }

    pub fn invalid_category(msg: impl Into<String>) -> Self {
        Self::InvalidCategory(msg.into())
    }

    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}
