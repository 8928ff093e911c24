//! Transaction model
//!
//! A transaction is an immutable value once parsed: a calendar date, a
//! free-text vendor, a non-negative amount, a category label, and a
//! free-text transaction type. Direction (money in vs. money out) is never
//! encoded in the amount's sign; it is derived from the type label by the
//! [`crate::classify`] module.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::classify::{self, Direction};
use crate::error::{BudgetError, BudgetResult};

use super::money::Money;

/// Sentinel category label used wherever aggregation needs a grouping key
/// and the record's category is empty or missing.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// A financial transaction record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Transaction date
    pub date: NaiveDate,

    /// Vendor or payee name; may be empty in poorly-formed input
    #[serde(default)]
    pub vendor: String,

    /// Magnitude of the transaction; always non-negative in valid records
    pub amount: Money,

    /// Category label; empty values are normalized via [`Transaction::category_key`]
    #[serde(default)]
    pub category: String,

    /// Free-text direction label ("Credit", "Debit", "Refund", ...)
    #[serde(default)]
    pub transaction_type: String,
}

impl Transaction {
    /// Create a new transaction
    pub fn new(
        date: NaiveDate,
        vendor: impl Into<String>,
        amount: Money,
        category: impl Into<String>,
        transaction_type: impl Into<String>,
    ) -> Self {
        Self {
            date,
            vendor: vendor.into(),
            amount,
            category: category.into(),
            transaction_type: transaction_type.into(),
        }
    }

    /// The grouping key for category aggregation
    ///
    /// Empty or whitespace-only categories map to [`UNCATEGORIZED`].
    pub fn category_key(&self) -> &str {
        if self.category.trim().is_empty() {
            UNCATEGORIZED
        } else {
            &self.category
        }
    }

    /// Classified direction of this transaction
    pub fn direction(&self) -> Direction {
        classify::classify(&self.transaction_type)
    }

    /// True only if the type label is a recognized credit label
    ///
    /// Unrecognized labels are treated as not-credit; they land in the
    /// expense bucket during aggregation.
    pub fn is_credit(&self) -> bool {
        classify::is_credit(&self.transaction_type)
    }

    /// True only if the type label is a recognized debit label
    pub fn is_debit(&self) -> bool {
        classify::is_debit(&self.transaction_type)
    }

    /// Validate the record
    pub fn validate(&self) -> BudgetResult<()> {
        if self.amount.is_negative() {
            return Err(BudgetError::Validation(format!(
                "transaction amount must not be negative: {}",
                self.amount
            )));
        }
        Ok(())
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.date.format("%Y-%m-%d"),
            self.vendor,
            self.amount
        )
    }
}
