//! Core data models for BudgetLens
//!
//! Value types shared by the classifier, filter engine, aggregation engine,
//! and budget calculator: money, transactions, budget goals, and the
//! selected-metrics parameter.

pub mod goal;
pub mod metric;
pub mod money;
pub mod transaction;

pub use goal::{BudgetGoal, BudgetGoalSettings};
pub use metric::{MetricSelection, MetricType};
pub use money::Money;
pub use transaction::{Transaction, UNCATEGORIZED};
