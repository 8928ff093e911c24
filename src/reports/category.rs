//! Category aggregation
//!
//! Category totals with percentage shares, per-category metric splits, and
//! the top-N-plus-"Other" bucketing used by distribution charts.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::models::{MetricSelection, MetricType, Money, Transaction};

/// Default number of categories kept verbatim before long-tail bucketing
pub const TOP_CATEGORY_LIMIT: usize = 7;

/// Label for the synthetic long-tail bucket
pub const OTHER_LABEL: &str = "Other";

/// Aggregate sum and percentage share for one category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub category: String,
    pub total: Money,
    /// Share of the grand total, in [0, 100]; 0 when the grand total is 0
    pub percentage: f64,
}

/// Group transactions by category and compute totals with percentage shares
///
/// Categories appear in order of first appearance in the input. Empty
/// categories group under the Uncategorized sentinel. All percentages are 0
/// when the grand total is 0 so no NaN ever escapes.
pub fn category_totals(transactions: &[Transaction]) -> Vec<CategoryTotal> {
    let mut order: Vec<String> = Vec::new();
    let mut sums: HashMap<String, Money> = HashMap::new();

    for txn in transactions {
        let key = txn.category_key();
        if !sums.contains_key(key) {
            order.push(key.to_string());
        }
        *sums.entry(key.to_string()).or_insert_with(Money::zero) += txn.amount;
    }

    let grand_total: Money = sums.values().copied().sum();

    order
        .into_iter()
        .map(|category| {
            let total = sums[&category];
            let percentage = if grand_total.is_zero() {
                0.0
            } else {
                total.to_major_units() / grand_total.to_major_units() * 100.0
            };
            CategoryTotal {
                category,
                total,
                percentage,
            }
        })
        .collect()
}

/// Per-category expense/income/savings split
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryMetrics {
    pub category: String,
    pub expenses: Money,
    pub income: Money,
    pub savings: Money,
}

impl CategoryMetrics {
    fn empty(category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            expenses: Money::zero(),
            income: Money::zero(),
            savings: Money::zero(),
        }
    }

    /// Value of one metric
    pub fn metric(&self, metric: MetricType) -> Money {
        match metric {
            MetricType::Expenses => self.expenses,
            MetricType::Income => self.income,
            MetricType::Savings => self.savings,
        }
    }

    /// Sum of the currently selected metrics, the ranking key for bucketing
    pub fn selected_value(&self, selection: &MetricSelection) -> Money {
        selection.iter().map(|metric| self.metric(metric)).sum()
    }
}

/// Group transactions by category with a credit/debit split per group
///
/// Recognized credits accrue to income; everything else, including
/// unrecognized type labels, accrues to expenses. Categories appear in order
/// of first appearance.
pub fn category_metrics(transactions: &[Transaction]) -> Vec<CategoryMetrics> {
    let mut rows: Vec<CategoryMetrics> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for txn in transactions {
        let key = txn.category_key();
        let i = *index.entry(key.to_string()).or_insert_with(|| {
            rows.push(CategoryMetrics::empty(key));
            rows.len() - 1
        });

        if txn.is_credit() {
            rows[i].income += txn.amount;
        } else {
            rows[i].expenses += txn.amount;
        }
        rows[i].savings = rows[i].income - rows[i].expenses;
    }

    rows
}

/// Keep the top `limit` categories by selected-metric value, merging the
/// remainder into a single synthetic "Other" row
///
/// Ranking is descending; the sort is stable, so a tie at the boundary keeps
/// the row that appeared first in the input. With `limit` or fewer rows the
/// input is returned unchanged and no Other row is synthesized.
pub fn top_categories_with_other(
    rows: Vec<CategoryMetrics>,
    selection: &MetricSelection,
    limit: usize,
) -> Vec<CategoryMetrics> {
    if rows.len() <= limit {
        return rows;
    }

    let mut ranked = rows;
    ranked.sort_by(|a, b| b.selected_value(selection).cmp(&a.selected_value(selection)));

    let tail = ranked.split_off(limit);
    let mut other = CategoryMetrics::empty(OTHER_LABEL);
    for row in tail {
        other.expenses += row.expenses;
        other.income += row.income;
        other.savings += row.savings;
    }
    ranked.push(other);
    ranked
}
