//! Transaction direction classifier
//!
//! Transaction type labels arrive from heterogeneous sources (CSV dialects,
//! manual entry, upstream imports) with an open-ended vocabulary. This module
//! is the single authority on whether a label means money in or money out;
//! every aggregation in the crate goes through it so that no call site can
//! re-derive its own, subtly different credit/debit rule.
//!
//! Matching is case-insensitive exact match against two fixed label sets. A
//! label in neither set classifies as [`Direction::Unknown`]; callers needing
//! a binary decision treat unknown as not-credit, so unrecognized money is
//! always counted as an expense, never silently as income.

use serde::{Deserialize, Serialize};

use crate::models::Transaction;

/// Recognized labels for incoming money
pub const CREDIT_LABELS: [&str; 5] = ["income", "credit", "credits", "job", "refund"];

/// Recognized labels for outgoing money
pub const DEBIT_LABELS: [&str; 5] = ["expense", "debit", "debits", "purchase", "payment"];

/// Classified direction of a transaction type label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Incoming money (income, refund, salary, ...)
    Credit,
    /// Outgoing money (expense, purchase, payment, ...)
    Debit,
    /// Label not in either set; treated as not-credit by binary callers
    Unknown,
}

/// Classify a free-text transaction type label
pub fn classify(transaction_type: &str) -> Direction {
    let label = transaction_type.trim();
    if CREDIT_LABELS.iter().any(|l| label.eq_ignore_ascii_case(l)) {
        Direction::Credit
    } else if DEBIT_LABELS.iter().any(|l| label.eq_ignore_ascii_case(l)) {
        Direction::Debit
    } else {
        Direction::Unknown
    }
}

/// True only for recognized credit labels; never defaults to credit
pub fn is_credit(transaction_type: &str) -> bool {
    classify(transaction_type) == Direction::Credit
}

/// True only for recognized debit labels
pub fn is_debit(transaction_type: &str) -> bool {
    classify(transaction_type) == Direction::Debit
}

/// Classification tally over a transaction collection
///
/// Unrecognized labels resolve deterministically to the expense bucket, but
/// silent misclassification of money direction is a correctness risk, so the
/// ambiguous labels are surfaced here for the caller to warn about.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ClassificationSummary {
    /// Transactions with a recognized credit label
    pub credits: usize,
    /// Transactions with a recognized debit label
    pub debits: usize,
    /// Transactions whose label matched neither set
    pub unknown: usize,
    /// Distinct unrecognized labels, in order of first appearance
    pub unrecognized_labels: Vec<String>,
}

impl ClassificationSummary {
    /// True if any transaction could not be classified
    pub fn has_ambiguities(&self) -> bool {
        self.unknown > 0
    }
}

/// Tally classification results across a collection
pub fn summarize(transactions: &[Transaction]) -> ClassificationSummary {
    let mut summary = ClassificationSummary::default();
    for txn in transactions {
        match classify(&txn.transaction_type) {
            Direction::Credit => summary.credits += 1,
            Direction::Debit => summary.debits += 1,
            Direction::Unknown => {
                summary.unknown += 1;
                let label = txn.transaction_type.trim();
                if !summary
                    .unrecognized_labels
                    .iter()
                    .any(|known| known.eq_ignore_ascii_case(label))
                {
                    summary.unrecognized_labels.push(label.to_string());
                }
            }
        }
    }
    summary
}
