//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog-consistency error.
///
/// Keep this focused on deterministic, business/domain failures. The engine
/// assumes shape-valid input (schema validation happens at the import/form
/// boundary), so these cover catalog-consistency violations only.
/// Infrastructure concerns (persistence) belong to the store layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The target SKU of an edit or lookup is absent from the catalog.
    #[error("sku not found: {sku}")]
    NotFound { sku: String },

    /// An Add candidate's SKU already exists, or a batch price update
    /// contains the same SKU more than once.
    #[error("duplicate sku: {sku}")]
    DuplicateKey { sku: String },

    /// A batch update referenced a SKU absent from the catalog.
    #[error("invalid reference to sku: {sku}")]
    InvalidReference { sku: String },

    /// A value failed validation (e.g. malformed cost or date).
    #[error("validation failed: {0}")]
    Validation(String),
}

impl CatalogError {
    pub fn not_found(sku: impl Into<String>) -> Self {
        Self::NotFound { sku: sku.into() }
    }

    pub fn duplicate_key(sku: impl Into<String>) -> Self {
        Self::DuplicateKey { sku: sku.into() }
    }

    pub fn invalid_reference(sku: impl Into<String>) -> Self {
        Self::InvalidReference { sku: sku.into() }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
