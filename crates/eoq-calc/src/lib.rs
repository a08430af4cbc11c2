//! # EOQ Calculation Engine
//!
//! 經濟訂購量成本模型：EOQ、成本明細、再訂購點與成本權衡曲線

pub mod calculator;
pub mod cost;
pub mod eoq;
pub mod reorder_point;
pub mod report;
pub mod tradeoff;

// Re-export 主要類型
pub use calculator::EoqCalculator;
pub use cost::compute_cost_breakdown;
pub use eoq::compute_eoq;
pub use reorder_point::compute_reorder_point;
pub use report::{round_for_display, ChartSeries, ChartSpec, EoqReport};
pub use tradeoff::{sample_tradeoff_curve, sample_tradeoff_curve_with_bound};
