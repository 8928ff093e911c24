//! Budget goal model
//!
//! A goal is a user-defined monthly target spending amount for a category.
//! Goals are created and edited upstream; this core consumes them read-only
//! when computing budget progress.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{BudgetError, BudgetResult};

use super::money::Money;

/// A monthly target spending amount for one category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetGoal {
    /// Category this goal applies to, matched against category totals by label
    pub category_id: String,

    /// Monthly baseline amount; yearly display scales this up by 12
    pub amount: Money,
}

impl BudgetGoal {
    /// Create a new goal
    pub fn new(category_id: impl Into<String>, amount: Money) -> Self {
        Self {
            category_id: category_id.into(),
            amount,
        }
    }

    /// Validate the goal
    pub fn validate(&self) -> BudgetResult<()> {
        if self.amount.is_negative() {
            return Err(BudgetError::Validation(format!(
                "budget goal for '{}' must not be negative: {}",
                self.category_id, self.amount
            )));
        }
        Ok(())
    }
}

impl fmt::Display for BudgetGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}/month", self.category_id, self.amount)
    }
}

/// Display settings for budget progress, passed explicitly by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetGoalSettings {
    /// Scale goals to a yearly view (multiplies the monthly baseline by 12)
    pub yearly_view: bool,

    /// Whether the caller should render over-budget warnings
    pub show_over_budget_warnings: bool,

    /// Whether the caller should render progress bars
    pub show_progress_bars: bool,
}

impl Default for BudgetGoalSettings {
    fn default() -> Self {
        Self {
            yearly_view: false,
            show_over_budget_warnings: true,
            show_progress_bars: true,
        }
    }
}
