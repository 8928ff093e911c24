//! Transaction filter engine
//!
//! Each filterable dimension (category, vendor, transaction type) carries a
//! tri-state selection per distinct value: neutral, included, or excluded.
//! Within a dimension the included set combines with OR; the excluded set
//! always drops matches. Dimensions and the optional date range combine with
//! AND. No active filter means nothing is dropped.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::models::Transaction;

/// Tri-state selection for a single dimension value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Selection {
    /// Value neither restricts nor is dropped
    #[default]
    Neutral,
    /// Value is part of the keep-only set
    Included,
    /// Transactions with this value are dropped
    Excluded,
}

/// Include/exclude sets for one dimension
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionFilter {
    includes: HashSet<String>,
    excludes: HashSet<String>,
}

impl DimensionFilter {
    /// Create an empty (pass-everything) filter
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a value as included
    pub fn include(&mut self, value: impl Into<String>) {
        let value = value.into();
        self.excludes.remove(&value);
        self.includes.insert(value);
    }

    /// Mark a value as excluded
    pub fn exclude(&mut self, value: impl Into<String>) {
        let value = value.into();
        self.includes.remove(&value);
        self.excludes.insert(value);
    }

    /// Reset a value to neutral
    pub fn reset(&mut self, value: &str) {
        self.includes.remove(value);
        self.excludes.remove(value);
    }

    /// Set the tri-state selection for a value
    pub fn set_selection(&mut self, value: &str, selection: Selection) {
        match selection {
            Selection::Neutral => self.reset(value),
            Selection::Included => self.include(value),
            Selection::Excluded => self.exclude(value),
        }
    }

    /// Read back the tri-state selection for a value
    pub fn selection_for(&self, value: &str) -> Selection {
        if self.includes.contains(value) {
            Selection::Included
        } else if self.excludes.contains(value) {
            Selection::Excluded
        } else {
            Selection::Neutral
        }
    }

    /// True when this dimension restricts anything
    pub fn is_active(&self) -> bool {
        !self.includes.is_empty() || !self.excludes.is_empty()
    }

    /// Whether a dimension value passes this filter
    ///
    /// Passes when the include set is empty or contains the value, and the
    /// exclude set does not contain it.
    pub fn matches(&self, value: &str) -> bool {
        (self.includes.is_empty() || self.includes.contains(value))
            && !self.excludes.contains(value)
    }

    /// "Select All" toggle over the dimension's known values
    ///
    /// If every listed value is already included, all of them revert to
    /// neutral; otherwise every listed value becomes included. A toggle, not
    /// an idempotent set.
    pub fn toggle_select_all<I, S>(&mut self, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values: Vec<String> = values.into_iter().map(Into::into).collect();
        let all_included = !values.is_empty() && values.iter().all(|v| self.includes.contains(v));

        for value in values {
            if all_included {
                self.reset(&value);
            } else {
                self.include(value);
            }
        }
    }
}

/// Inclusive date range; either bound may be open
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    /// Create a range with both bounds
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    /// True when at least one bound is set
    pub fn is_active(&self) -> bool {
        self.start.is_some() || self.end.is_some()
    }

    /// Whether a date falls within the range (bounds inclusive)
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start.map_or(true, |start| date >= start)
            && self.end.map_or(true, |end| date <= end)
    }
}

/// Combined multi-dimension transaction filter
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionFilter {
    pub category: DimensionFilter,
    pub vendor: DimensionFilter,
    pub transaction_type: DimensionFilter,
    pub date_range: DateRange,
}

impl TransactionFilter {
    /// Create an empty filter that passes every transaction
    pub fn new() -> Self {
        Self::default()
    }

    /// True when any dimension or the date range restricts anything
    pub fn is_active(&self) -> bool {
        self.category.is_active()
            || self.vendor.is_active()
            || self.transaction_type.is_active()
            || self.date_range.is_active()
    }

    /// Whether a transaction passes every active dimension (AND semantics)
    ///
    /// Dimension values are matched literally, as they appear in the record;
    /// category normalization applies only to aggregation keys.
    pub fn matches(&self, txn: &Transaction) -> bool {
        self.category.matches(&txn.category)
            && self.vendor.matches(&txn.vendor)
            && self.transaction_type.matches(&txn.transaction_type)
            && self.date_range.contains(txn.date)
    }

    /// Apply the filter, producing the passing subset in input order
    pub fn apply(&self, transactions: &[Transaction]) -> Vec<Transaction> {
        transactions
            .iter()
            .filter(|txn| self.matches(txn))
            .cloned()
            .collect()
    }
}

/// Distinct values of one dimension, sorted, for building filter choices
pub fn distinct_values<'a, F>(transactions: &'a [Transaction], dimension: F) -> Vec<String>
where
    F: Fn(&'a Transaction) -> &'a str,
{
    let mut values: Vec<String> = transactions
        .iter()
        .map(|txn| dimension(txn).to_string())
        .collect::<HashSet<_>>()
        .into_iter()
        .collect();
    values.sort();
    values
}
