//! 計算報告與顯示格式

use std::fmt;

use eoq_core::{CostBreakdown, EoqError, InventoryParameters, Result, TradeoffCurve};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

/// 將數值轉為指定小數位數的十進位數
///
/// 以 f64 的精確二進位值取整，中點採銀行家捨入。
///
/// # 範例
/// ```
/// let value = eoq_calc::round_for_display(13.698630136986301, 2).unwrap();
/// assert_eq!(value.to_string(), "13.70");
/// ```
pub fn round_for_display(value: f64, decimal_places: u32) -> Result<Decimal> {
    let decimal = Decimal::from_f64_retain(value)
        .ok_or_else(|| EoqError::invalid("value", value, "無法轉換為十進位數"))?;
    Ok(decimal.round_dp_with_strategy(decimal_places, RoundingStrategy::MidpointNearestEven))
}

/// 固定小數位數的顯示字串
fn display_value(value: f64, decimal_places: u32) -> String {
    let places = decimal_places as usize;
    match round_for_display(value, decimal_places) {
        Ok(decimal) => format!("{:.*}", places, decimal),
        Err(_) => format!("{:.*}", places, value),
    }
}

/// EOQ 計算報告
#[derive(Debug, Clone, Serialize)]
pub struct EoqReport {
    /// 輸入參數
    pub parameters: InventoryParameters,

    /// 經濟訂購量
    pub eoq: f64,

    /// EOQ 下的成本明細
    pub breakdown: CostBreakdown,

    /// 再訂購點
    pub reorder_point: f64,

    /// 每年訂購次數
    pub orders_per_year: f64,

    /// 訂購週期（天）
    pub order_cycle_days: f64,

    /// 年採購金額
    pub annual_purchase_cost: f64,

    /// 含採購金額的年總成本
    pub annual_cost_with_purchase: f64,

    /// 成本權衡曲線
    pub curve: TradeoffCurve,

    pub display_precision: u32,

    pub currency_label: String,

    /// 計算耗時（微秒）
    pub calculation_time_us: Option<u64>,
}

impl EoqReport {
    /// 輸出為 JSON，供圖表前端使用
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// 成本權衡圖的描述
    pub fn chart_spec(&self) -> ChartSpec {
        ChartSpec {
            title: "Tradeoffs Between Ordering, Holding, and Total Costs".to_string(),
            x_label: "Order Quantity (units)".to_string(),
            y_label: format!("Cost ({})", self.currency_label),
            x: self.curve.order_quantities(),
            series: vec![
                ChartSeries::new("Ordering Cost", self.curve.ordering_costs()),
                ChartSeries::new("Holding Cost", self.curve.holding_costs()),
                ChartSeries::new("Total Cost", self.curve.total_costs()),
            ],
            eoq_marker: self.eoq,
        }
    }
}

impl fmt::Display for EoqReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dp = self.display_precision;
        let cur = &self.currency_label;

        writeln!(
            f,
            "Economic Order Quantity (EOQ): {} units",
            display_value(self.eoq, dp)
        )?;
        writeln!(
            f,
            "Total Ordering Cost: {} {}",
            cur,
            display_value(self.breakdown.total_ordering_cost, dp)
        )?;
        writeln!(
            f,
            "Total Holding Cost: {} {}",
            cur,
            display_value(self.breakdown.total_holding_cost, dp)
        )?;
        writeln!(
            f,
            "Total Cost: {} {}",
            cur,
            display_value(self.breakdown.total_cost, dp)
        )?;
        writeln!(
            f,
            "Reorder Point: {} units",
            display_value(self.reorder_point, dp)
        )?;
        writeln!(f, "Orders per Year: {}", display_value(self.orders_per_year, dp))?;
        writeln!(
            f,
            "Order Cycle: {} days",
            display_value(self.order_cycle_days, dp)
        )?;
        write!(
            f,
            "Annual Purchase Cost: {} {}",
            cur,
            display_value(self.annual_purchase_cost, dp)
        )
    }
}

/// 圖表資料序列
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub label: String,
    pub values: Vec<f64>,
}

impl ChartSeries {
    pub fn new(label: &str, values: Vec<f64>) -> Self {
        Self {
            label: label.to_string(),
            values,
        }
    }
}

/// 成本權衡圖：三條成本曲線與 EOQ 垂直標線
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub x: Vec<f64>,
    pub series: Vec<ChartSeries>,
    pub eoq_marker: f64,
}
