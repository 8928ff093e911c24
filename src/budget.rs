//! Budget progress calculation
//!
//! Compares aggregated category totals against user-defined goals. A goal is
//! a monthly baseline; the yearly view multiplies it by 12 (it never divides
//! an annual total down). A category with no goal, or a zero goal amount,
//! has no computable progress: `progress_percent` is `None` rather than an
//! infinite or NaN percentage.

use serde::{Deserialize, Serialize};

use crate::models::{BudgetGoal, BudgetGoalSettings, Money};
use crate::reports::CategoryTotal;

/// Budget progress for one category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetProgress {
    pub category: String,

    /// Aggregated spending for the category
    pub spent: Money,

    /// Goal scaled for the current view; `None` when no goal applies
    pub display_goal: Option<Money>,

    /// spent / display_goal × 100; `None` when no goal applies
    pub progress_percent: Option<f64>,

    /// Amount over the goal; zero when under budget or no goal applies
    pub over_amount: Money,
}

impl BudgetProgress {
    /// True when spending exceeds the applicable goal
    pub fn is_over_budget(&self) -> bool {
        self.progress_percent.map_or(false, |pct| pct > 100.0)
    }
}

/// Compute progress for one category total against an optional goal
pub fn budget_progress(
    total: &CategoryTotal,
    goal: Option<&BudgetGoal>,
    settings: &BudgetGoalSettings,
) -> BudgetProgress {
    let display_goal = goal
        .map(|g| {
            if settings.yearly_view {
                g.amount * 12
            } else {
                g.amount
            }
        })
        .filter(|amount| amount.is_positive());

    let progress_percent = display_goal
        .map(|goal_amount| total.total.to_major_units() / goal_amount.to_major_units() * 100.0);

    let over_amount = display_goal.map_or(Money::zero(), |goal_amount| {
        if total.total > goal_amount {
            total.total - goal_amount
        } else {
            Money::zero()
        }
    });

    BudgetProgress {
        category: total.category.clone(),
        spent: total.total,
        display_goal,
        progress_percent,
        over_amount,
    }
}

/// Compute progress for every category total, pairing each with its goal
///
/// Goals match category totals by label; the first matching goal wins.
pub fn budget_overview(
    totals: &[CategoryTotal],
    goals: &[BudgetGoal],
    settings: &BudgetGoalSettings,
) -> Vec<BudgetProgress> {
    totals
        .iter()
        .map(|total| {
            let goal = goals.iter().find(|g| g.category_id == total.category);
            budget_progress(total, goal, settings)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn total(category: &str, cents: i64) -> CategoryTotal {
        CategoryTotal {
            category: category.to_string(),
            total: Money::from_cents(cents),
            percentage: 0.0,
        }
    }

    #[test]
    fn test_over_budget_monthly() {
        let goal = BudgetGoal::new("Food", Money::from_cents(60_000));
        let progress = budget_progress(
            &total("Food", 70_000),
            Some(&goal),
            &BudgetGoalSettings::default(),
        );

        assert_eq!(progress.display_goal, Some(Money::from_cents(60_000)));
        let pct = progress.progress_percent.unwrap();
        assert!(((pct * 100.0).round() / 100.0 - 116.67).abs() < 1e-9);
        assert!(progress.is_over_budget());
        assert_eq!(progress.over_amount, Money::from_cents(10_000));
    }

    #[test]
    fn test_yearly_view_scales_goal_up() {
        let goal = BudgetGoal::new("Food", Money::from_cents(60_000));
        let settings = BudgetGoalSettings {
            yearly_view: true,
            ..BudgetGoalSettings::default()
        };

        let progress = budget_progress(&total("Food", 70_000), Some(&goal), &settings);
        assert_eq!(progress.display_goal, Some(Money::from_cents(720_000)));
        assert!(!progress.is_over_budget());
        assert_eq!(progress.over_amount, Money::zero());
    }

    #[test]
    fn test_under_budget() {
        let goal = BudgetGoal::new("Gas", Money::from_cents(20_000));
        let progress = budget_progress(
            &total("Gas", 5_000),
            Some(&goal),
            &BudgetGoalSettings::default(),
        );

        assert!((progress.progress_percent.unwrap() - 25.0).abs() < 1e-9);
        assert!(!progress.is_over_budget());
        assert_eq!(progress.over_amount, Money::zero());
    }

    #[test]
    fn test_no_goal_means_no_progress() {
        let progress = budget_progress(
            &total("Fun", 5_000),
            None,
            &BudgetGoalSettings::default(),
        );

        assert_eq!(progress.display_goal, None);
        assert_eq!(progress.progress_percent, None);
        assert!(!progress.is_over_budget());
        assert_eq!(progress.over_amount, Money::zero());
    }

    #[test]
    fn test_zero_goal_treated_as_no_goal() {
        // A zero goal must never yield an infinite or NaN percentage.
        let goal = BudgetGoal::new("Fun", Money::zero());
        let progress = budget_progress(
            &total("Fun", 5_000),
            Some(&goal),
            &BudgetGoalSettings::default(),
        );

        assert_eq!(progress.progress_percent, None);
        assert!(!progress.is_over_budget());
    }

    #[test]
    fn test_overview_pairs_goals_by_category() {
        let totals = vec![total("Food", 70_000), total("Gas", 5_000), total("Fun", 1_000)];
        let goals = vec![
            BudgetGoal::new("Food", Money::from_cents(60_000)),
            BudgetGoal::new("Gas", Money::from_cents(20_000)),
        ];

        let overview = budget_overview(&totals, &goals, &BudgetGoalSettings::default());
        assert_eq!(overview.len(), 3);
        assert!(overview[0].is_over_budget());
        assert!(!overview[1].is_over_budget());
        assert_eq!(overview[2].progress_percent, None);
    }
}
