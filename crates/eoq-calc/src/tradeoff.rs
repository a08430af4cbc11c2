//! 成本權衡曲線取樣
//!
//! 在 [下界, 2 × EOQ] 之間等距取樣，計算每個訂購量的訂購、持有與總成本。
//! 結果依訂購量遞增排列，供折線圖使用。

use eoq_core::config::DEFAULT_LOWER_BOUND;
use eoq_core::{
    ensure_non_negative, ensure_positive, EoqError, Result, TradeoffCurve, TradeoffPoint,
};

use crate::cost::cost_at;

/// 以預設下界（1 單位）取樣成本曲線
pub fn sample_tradeoff_curve(
    demand: f64,
    ordering_cost: f64,
    holding_cost: f64,
    eoq: f64,
    sample_count: usize,
) -> Result<TradeoffCurve> {
    sample_tradeoff_curve_with_bound(
        demand,
        ordering_cost,
        holding_cost,
        eoq,
        sample_count,
        DEFAULT_LOWER_BOUND,
    )
}

/// 以指定下界取樣成本曲線
///
/// 第一個點落在下界，最後一個點恰為 2 × EOQ。
pub fn sample_tradeoff_curve_with_bound(
    demand: f64,
    ordering_cost: f64,
    holding_cost: f64,
    eoq: f64,
    sample_count: usize,
    lower_bound: f64,
) -> Result<TradeoffCurve> {
    ensure_positive("eoq", eoq)?;
    ensure_positive("lower_bound", lower_bound)?;
    ensure_non_negative("demand", demand)?;
    ensure_non_negative("ordering_cost", ordering_cost)?;
    ensure_non_negative("holding_cost", holding_cost)?;

    if sample_count < 2 {
        return Err(EoqError::invalid(
            "sample_count",
            sample_count as f64,
            "取樣點數至少為 2",
        ));
    }

    let upper_bound = 2.0 * eoq;
    if lower_bound >= upper_bound {
        return Err(EoqError::invalid(
            "lower_bound",
            lower_bound,
            "取樣下界必須小於 2 × EOQ",
        ));
    }

    let step = (upper_bound - lower_bound) / (sample_count - 1) as f64;
    if lower_bound + step == lower_bound {
        return Err(EoqError::invalid(
            "sample_count",
            sample_count as f64,
            "取樣間距小於浮點數精度",
        ));
    }

    let points = (0..sample_count)
        .map(|i| {
            let q = if i == sample_count - 1 {
                upper_bound
            } else {
                lower_bound + step * i as f64
            };
            let (ordering, holding) = cost_at(demand, ordering_cost, holding_cost, q);
            TradeoffPoint {
                order_quantity: q,
                ordering_cost: ordering,
                holding_cost: holding,
                total_cost: ordering + holding,
            }
        })
        .collect();

    let curve = TradeoffCurve::from_points(points);
    if !curve.is_strictly_ascending() {
        return Err(EoqError::invalid(
            "sample_count",
            sample_count as f64,
            "取樣點訂購量重複",
        ));
    }

    Ok(curve)
}
