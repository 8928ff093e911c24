//! Monthly time-series aggregation
//!
//! Months are keyed by (year, month), never by formatted label, so the
//! series orders chronologically across year boundaries. The display label
//! is derived on demand.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::{Money, Transaction};

/// A calendar month key with chronological ordering
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct MonthKey {
    pub year: i32,
    /// 1-based calendar month
    pub month: u32,
}

impl MonthKey {
    /// The month a date falls in
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Display label in "MMM yyyy" form, e.g. "Jan 2024"
    pub fn label(&self) -> String {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .map(|d| d.format("%b %Y").to_string())
            .unwrap_or_else(|| format!("{:04}-{:02}", self.year, self.month))
    }
}

/// Income, expenses, and derived savings for one calendar month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyMetrics {
    pub month: MonthKey,
    pub income: Money,
    pub expenses: Money,
    /// income − expenses; may be negative
    pub savings: Money,
}

/// Aggregate transactions into a chronologically ordered monthly series
///
/// Recognized credits accrue to income; everything else accrues to expenses.
/// Only months present in the input appear; gaps are not zero-filled.
pub fn monthly_series(transactions: &[Transaction]) -> Vec<MonthlyMetrics> {
    let mut by_month: BTreeMap<MonthKey, (Money, Money)> = BTreeMap::new();

    for txn in transactions {
        let entry = by_month
            .entry(MonthKey::from_date(txn.date))
            .or_insert((Money::zero(), Money::zero()));
        if txn.is_credit() {
            entry.0 += txn.amount;
        } else {
            entry.1 += txn.amount;
        }
    }

    by_month
        .into_iter()
        .map(|(month, (income, expenses))| MonthlyMetrics {
            month,
            income,
            expenses,
            savings: income - expenses,
        })
        .collect()
}
