//! Dashboard summary statistics
//!
//! The headline figures shown on the dashboard's metric cards: total spent,
//! averages, the highest-spending category, the most recent transaction, and
//! distinct-value counts. All figures are zero-safe on empty input.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::models::{Money, Transaction};

use super::category::{category_totals, CategoryTotal};

/// Window used for the daily-average figure
pub const DAILY_AVERAGE_WINDOW_DAYS: i64 = 30;

/// The most recent transaction, as shown on its metric card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LastTransaction {
    pub vendor: String,
    pub amount: Money,
}

/// Headline figures for a transaction collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    /// Sum of all transaction amounts
    pub total_spent: Money,
    /// Mean transaction amount; zero when there are no transactions
    pub average_transaction: Money,
    /// Total spread over a fixed 30-day window
    pub daily_average: Money,
    /// Category with the largest total, if any
    pub highest_category: Option<CategoryTotal>,
    /// Final transaction in the collection, if any
    pub last_transaction: Option<LastTransaction>,
    pub transaction_count: usize,
    pub category_count: usize,
    pub vendor_count: usize,
}

/// Compute the dashboard summary for a collection
pub fn summarize(transactions: &[Transaction]) -> DashboardSummary {
    let total_spent: Money = transactions.iter().map(|t| t.amount).sum();

    let average_transaction = if transactions.is_empty() {
        Money::zero()
    } else {
        Money::from_cents(total_spent.cents() / transactions.len() as i64)
    };

    let daily_average = Money::from_cents(total_spent.cents() / DAILY_AVERAGE_WINDOW_DAYS);

    let totals = category_totals(transactions);
    let highest_category = totals
        .iter()
        .max_by_key(|c| c.total)
        .cloned();

    let last_transaction = transactions.last().map(|t| LastTransaction {
        vendor: t.vendor.clone(),
        amount: t.amount,
    });

    let vendor_count = transactions
        .iter()
        .map(|t| t.vendor.as_str())
        .collect::<HashSet<_>>()
        .len();

    DashboardSummary {
        total_spent,
        average_transaction,
        daily_average,
        highest_category,
        last_transaction,
        transaction_count: transactions.len(),
        category_count: totals.len(),
        vendor_count,
    }
}
