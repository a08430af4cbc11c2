//! 成本權衡曲線模型（僅供繪圖使用）

use serde::{Deserialize, Serialize};

/// 曲線上的單一取樣點
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TradeoffPoint {
    pub order_quantity: f64,
    pub ordering_cost: f64,
    pub holding_cost: f64,
    pub total_cost: f64,
}

/// 依訂購量遞增排序的取樣點序列
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TradeoffCurve {
    points: Vec<TradeoffPoint>,
}

impl TradeoffCurve {
    /// 由已排序的取樣點建立曲線
    pub fn from_points(points: Vec<TradeoffPoint>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[TradeoffPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// X 軸：訂購量
    pub fn order_quantities(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.order_quantity).collect()
    }

    /// 訂購成本序列
    pub fn ordering_costs(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.ordering_cost).collect()
    }

    /// 持有成本序列
    pub fn holding_costs(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.holding_cost).collect()
    }

    /// 總成本序列
    pub fn total_costs(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.total_cost).collect()
    }

    /// 總成本最低的取樣點
    pub fn min_total_cost_point(&self) -> Option<&TradeoffPoint> {
        self.points
            .iter()
            .min_by(|a, b| a.total_cost.total_cmp(&b.total_cost))
    }

    /// 訂購量是否嚴格遞增（折線圖依此順序繪製）
    pub fn is_strictly_ascending(&self) -> bool {
        self.points
            .windows(2)
            .all(|w| w[0].order_quantity < w[1].order_quantity)
    }
}
