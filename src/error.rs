//! Error types for the BudgetLens core
//!
//! The aggregation paths never fail: empty collections, unrecognized
//! transaction types, and zero denominators all resolve to well-typed
//! results. Errors here cover validation of user-supplied records and
//! batch rejection during CSV import.

use thiserror::Error;

use crate::models::money::MoneyParseError;

/// The main error type for BudgetLens operations
#[derive(Error, Debug)]
pub enum BudgetError {
    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// A CSV batch was rejected because a row failed to parse
    #[error("Import error at row {row}: {message}")]
    Import { row: usize, message: String },

    /// Money parsing errors
    #[error(transparent)]
    Money(#[from] MoneyParseError),
}

impl BudgetError {
    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is an import error
    pub fn is_import(&self) -> bool {
        matches!(self, Self::Import { .. })
    }
}

/// Result type alias for BudgetLens operations
pub type BudgetResult<T> = Result<T, BudgetError>;
