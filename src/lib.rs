//! BudgetLens core - transaction aggregation and derived-metrics engine
//!
//! This library is the data-transformation layer behind a personal-finance
//! dashboard: it turns a raw list of transaction records into the category
//! totals, monthly time series, budget-progress figures, and filtered
//! subsets that the (out-of-scope) rendering layer visualizes. Storage, the
//! CRUD API, chart rendering, and the chat panel are external collaborators;
//! everything here is deterministic, synchronous, and free of I/O.
//!
//! # Architecture
//!
//! - `models`: core value types (money, transactions, goals, metric selection)
//! - `classify`: the single credit/debit authority for free-text type labels
//! - `import`: CSV ingestion with per-row error collection
//! - `filter`: tri-state include/exclude filters plus date ranges
//! - `reports`: category, monthly, total, and summary aggregation
//! - `budget`: goal-vs-actual progress calculation
//! - `display`: currency/percentage formatting policy
//! - `error`: crate error types
//!
//! # Example
//!
//! ```rust
//! use budgetlens::import::parse_csv;
//! use budgetlens::reports::total_metrics;
//!
//! let csv = "date,vendor,amount,category,transactionType\n\
//!            2024-01-01,Job,2000.00,Job,Credit\n\
//!            2024-01-05,Grocery,150.00,Food,Debit";
//!
//! let report = parse_csv(csv);
//! assert!(report.is_clean());
//!
//! let totals = total_metrics(&report.transactions);
//! assert_eq!(totals.savings.cents(), 185_000);
//! ```

pub mod budget;
pub mod classify;
pub mod display;
pub mod error;
pub mod filter;
pub mod import;
pub mod models;
pub mod reports;

pub use error::{BudgetError, BudgetResult};
pub use models::{BudgetGoal, BudgetGoalSettings, MetricSelection, MetricType, Money, Transaction};

#[cfg(test)]
mod tests {
    use crate::budget::budget_overview;
    use crate::filter::TransactionFilter;
    use crate::import::parse_csv;
    use crate::models::{BudgetGoal, BudgetGoalSettings, Money};
    use crate::reports::{category_totals, monthly_series, total_metrics};

    const SAMPLE_CSV: &str = "\
date,vendor,amount,category,transactionType
2024-01-01,Job,2000.00,Job,Credit
2024-01-05,Grocery Store,150.00,Food & Dining,Debit
2024-01-10,Gas Station,60.00,Transportation,Debit
2024-01-22,Refund,50.00,Refund,Credit
2024-02-02,Coffee Shop,5.00,Food & Dining,Debit
2024-02-18,Freelance Work,500.00,Job,Credit";

    #[test]
    fn test_csv_to_total_metrics_scenario() {
        let csv = "date,vendor,amount,category,transactionType\n\
                   2024-01-01,Job,2000.00,Job,Credit\n\
                   2024-01-05,Grocery,150.00,Food,Debit";
        let report = parse_csv(csv);
        assert_eq!(report.transactions.len(), 2);

        let totals = total_metrics(&report.transactions);
        assert_eq!(totals.income, Money::from_cents(200_000));
        assert_eq!(totals.expenses, Money::from_cents(15_000));
        assert_eq!(totals.savings, Money::from_cents(185_000));
    }

    #[test]
    fn test_empty_csv_end_to_end() {
        let report = parse_csv("date,vendor,amount,category,transactionType");
        assert!(report.transactions.is_empty());
        assert!(category_totals(&report.transactions).is_empty());
        assert!(monthly_series(&report.transactions).is_empty());
    }

    #[test]
    fn test_filter_then_aggregate_pipeline() {
        let report = parse_csv(SAMPLE_CSV);
        assert!(report.is_clean());

        let mut filter = TransactionFilter::new();
        filter.category.include("Food & Dining");

        let filtered = filter.apply(&report.transactions);
        let totals = category_totals(&filtered);
        assert_eq!(totals.len(), 1);
        assert_eq!(totals[0].total, Money::from_cents(15_500));
        assert!((totals[0].percentage - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_aggregate_then_budget_pipeline() {
        let report = parse_csv(SAMPLE_CSV);
        let totals = category_totals(&report.transactions);
        let goals = vec![BudgetGoal::new("Food & Dining", Money::from_cents(10_000))];

        let overview = budget_overview(&totals, &goals, &BudgetGoalSettings::default());
        let food = overview
            .iter()
            .find(|p| p.category == "Food & Dining")
            .unwrap();
        assert!(food.is_over_budget());
        assert_eq!(food.over_amount, Money::from_cents(5_500));

        let job = overview.iter().find(|p| p.category == "Job").unwrap();
        assert_eq!(job.progress_percent, None);
    }

    #[test]
    fn test_monthly_series_over_sample() {
        let report = parse_csv(SAMPLE_CSV);
        let series = monthly_series(&report.transactions);
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].month.label(), "Jan 2024");
        assert_eq!(series[0].income, Money::from_cents(205_000));
        assert_eq!(series[1].expenses, Money::from_cents(500));
    }
}
