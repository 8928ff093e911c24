//! Aggregation engine
//!
//! Pure functions that turn a transaction collection into the derived views
//! consumed by the rendering layer: category totals and per-category metric
//! splits, the chronological monthly series, whole-collection totals, and
//! dashboard summary figures. Every function recomputes its full result from
//! its inputs on each call; there is no cached or incremental state.

pub mod category;
pub mod monthly;
pub mod summary;
pub mod totals;

pub use category::{
    category_metrics, category_totals, top_categories_with_other, CategoryMetrics, CategoryTotal,
    OTHER_LABEL, TOP_CATEGORY_LIMIT,
};
pub use monthly::{monthly_series, MonthKey, MonthlyMetrics};
pub use summary::{summarize, DashboardSummary, LastTransaction, DAILY_AVERAGE_WINDOW_DAYS};
pub use totals::{total_metrics, TotalMetrics};
