//! Metric types and the selected-metrics parameter
//!
//! The dashboard lets a user toggle which of expenses / income / savings a
//! chart displays. The aggregation engine takes that choice as an explicit
//! [`MetricSelection`] argument rather than reading ambient state.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the three derived metrics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricType {
    Expenses,
    Income,
    Savings,
}

impl MetricType {
    /// All metric types in canonical display order
    pub const ALL: [MetricType; 3] = [Self::Expenses, Self::Income, Self::Savings];
}

impl fmt::Display for MetricType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Expenses => write!(f, "Expenses"),
            Self::Income => write!(f, "Income"),
            Self::Savings => write!(f, "Savings"),
        }
    }
}

/// The set of metrics currently selected for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricSelection {
    pub expenses: bool,
    pub income: bool,
    pub savings: bool,
}

impl MetricSelection {
    /// Select all three metrics (the dashboard default)
    pub const fn all() -> Self {
        Self {
            expenses: true,
            income: true,
            savings: true,
        }
    }

    /// Select a single metric
    pub const fn only(metric: MetricType) -> Self {
        let mut selection = Self {
            expenses: false,
            income: false,
            savings: false,
        };
        match metric {
            MetricType::Expenses => selection.expenses = true,
            MetricType::Income => selection.income = true,
            MetricType::Savings => selection.savings = true,
        }
        selection
    }

    /// Check whether a metric is selected
    pub const fn is_selected(&self, metric: MetricType) -> bool {
        match metric {
            MetricType::Expenses => self.expenses,
            MetricType::Income => self.income,
            MetricType::Savings => self.savings,
        }
    }

    /// Toggle one metric on or off (the dashboard checkbox behavior)
    pub fn toggle(&mut self, metric: MetricType) {
        match metric {
            MetricType::Expenses => self.expenses = !self.expenses,
            MetricType::Income => self.income = !self.income,
            MetricType::Savings => self.savings = !self.savings,
        }
    }

    /// True when no metric is selected
    pub const fn is_empty(&self) -> bool {
        !self.expenses && !self.income && !self.savings
    }

    /// Iterate over the selected metrics in canonical order
    pub fn iter(&self) -> impl Iterator<Item = MetricType> + '_ {
        MetricType::ALL
            .into_iter()
            .filter(|metric| self.is_selected(*metric))
    }
}

impl Default for MetricSelection {
    fn default() -> Self {
        Self::all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_selects_all() {
        let selection = MetricSelection::default();
        assert!(selection.is_selected(MetricType::Expenses));
        assert!(selection.is_selected(MetricType::Income));
        assert!(selection.is_selected(MetricType::Savings));
        assert_eq!(selection.iter().count(), 3);
    }

    #[test]
    fn test_only() {
        let selection = MetricSelection::only(MetricType::Income);
        assert!(selection.is_selected(MetricType::Income));
        assert!(!selection.is_selected(MetricType::Expenses));
        assert_eq!(selection.iter().collect::<Vec<_>>(), [MetricType::Income]);
    }

    #[test]
    fn test_toggle() {
        let mut selection = MetricSelection::all();
        selection.toggle(MetricType::Savings);
        assert!(!selection.is_selected(MetricType::Savings));
        selection.toggle(MetricType::Savings);
        assert!(selection.is_selected(MetricType::Savings));
    }

    #[test]
    fn test_empty() {
        let mut selection = MetricSelection::only(MetricType::Expenses);
        selection.toggle(MetricType::Expenses);
        assert!(selection.is_empty());
        assert_eq!(selection.iter().count(), 0);
    }

    #[test]
    fn test_serde_lowercase_names() {
        let json = serde_json::to_string(&MetricType::Expenses).unwrap();
        assert_eq!(json, "\"expenses\"");
    }
}
