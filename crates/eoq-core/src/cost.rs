//! 成本明細模型

use serde::{Deserialize, Serialize};

/// 指定訂購量下的年度成本明細
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    /// 訂購量
    pub order_quantity: f64,

    /// 年訂購成本
    pub total_ordering_cost: f64,

    /// 年持有成本
    pub total_holding_cost: f64,

    /// 年總成本（訂購 + 持有）
    pub total_cost: f64,
}

impl CostBreakdown {
    /// 由兩項成本組成明細，總成本恆為兩者之和
    pub fn new(order_quantity: f64, total_ordering_cost: f64, total_holding_cost: f64) -> Self {
        Self {
            order_quantity,
            total_ordering_cost,
            total_holding_cost,
            total_cost: total_ordering_cost + total_holding_cost,
        }
    }

    /// 訂購成本與持有成本的差額（EOQ 下應接近零）
    pub fn cost_imbalance(&self) -> f64 {
        self.total_ordering_cost - self.total_holding_cost
    }
}
