//! Whole-collection total metrics
//!
//! The same credit/debit split as the monthly series, collapsed to a single
//! aggregate row across the entire input set.

use serde::{Deserialize, Serialize};

use crate::models::{MetricType, Money, Transaction};

/// Aggregate income, expenses, and savings over a transaction collection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TotalMetrics {
    pub income: Money,
    pub expenses: Money,
    /// income − expenses; may be negative
    pub savings: Money,
}

impl TotalMetrics {
    /// Value of one metric
    pub fn metric(&self, metric: MetricType) -> Money {
        match metric {
            MetricType::Expenses => self.expenses,
            MetricType::Income => self.income,
            MetricType::Savings => self.savings,
        }
    }
}

/// Compute total metrics for a collection
///
/// Recognized credits accrue to income; everything else accrues to expenses.
pub fn total_metrics(transactions: &[Transaction]) -> TotalMetrics {
    let mut totals = TotalMetrics::default();
    for txn in transactions {
        if txn.is_credit() {
            totals.income += txn.amount;
        } else {
            totals.expenses += txn.amount;
        }
    }
    totals.savings = totals.income - totals.expenses;
    totals
}
