//! 訂購成本與持有成本

use eoq_core::{ensure_non_negative, ensure_positive, CostBreakdown, Result};

/// 計算指定訂購量下的年度成本明細
///
/// - 年訂購成本 = (需求量 / 訂購量) × 訂購成本
/// - 年持有成本 = (訂購量 / 2) × 持有成本
pub fn compute_cost_breakdown(
    demand: f64,
    ordering_cost: f64,
    holding_cost: f64,
    order_quantity: f64,
) -> Result<CostBreakdown> {
    ensure_positive("order_quantity", order_quantity)?;
    ensure_non_negative("demand", demand)?;
    ensure_non_negative("ordering_cost", ordering_cost)?;
    ensure_non_negative("holding_cost", holding_cost)?;

    let (ordering, holding) = cost_at(demand, ordering_cost, holding_cost, order_quantity);
    Ok(CostBreakdown::new(order_quantity, ordering, holding))
}

/// 不做驗證的成本公式，呼叫端需保證訂購量 > 0
pub(crate) fn cost_at(
    demand: f64,
    ordering_cost: f64,
    holding_cost: f64,
    order_quantity: f64,
) -> (f64, f64) {
    let ordering = (demand / order_quantity) * ordering_cost;
    let holding = (order_quantity / 2.0) * holding_cost;
    (ordering, holding)
}
