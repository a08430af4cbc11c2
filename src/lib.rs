//! # EOQ
//!
//! 經濟訂購量（Economic Order Quantity）庫存成本模型
//!
//! ```
//! use eoq::{EoqCalculator, InventoryParameters};
//!
//! let params = InventoryParameters::new(1000.0, 50.0, 2.0, 5.0, 10.0).unwrap();
//! let report = EoqCalculator::default().calculate(&params).unwrap();
//! assert!((report.eoq - 223.61).abs() < 0.005);
//! ```

pub use eoq_calc::{
    compute_cost_breakdown, compute_eoq, compute_reorder_point, round_for_display,
    sample_tradeoff_curve, sample_tradeoff_curve_with_bound, ChartSeries, ChartSpec,
    EoqCalculator, EoqReport,
};
pub use eoq_core::{
    CostBreakdown, EoqConfig, EoqError, InventoryParameters, Result, TradeoffCurve,
    TradeoffPoint, DAYS_PER_YEAR,
};
