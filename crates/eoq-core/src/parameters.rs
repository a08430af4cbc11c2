//! 庫存參數模型

use serde::{Deserialize, Serialize};

use crate::{ensure_positive, Result};

/// 單一物料的 EOQ 輸入參數
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InventoryParameters {
    /// 年需求量（單位）
    pub annual_demand: f64,

    /// 每次訂購成本
    pub ordering_cost_per_order: f64,

    /// 每單位每年持有成本
    pub holding_cost_per_unit_per_year: f64,

    /// 提前期（天）
    pub lead_time_days: f64,

    /// 單位成本
    pub unit_cost: f64,
}

impl InventoryParameters {
    /// 創建並驗證參數，所有欄位必須大於零
    pub fn new(
        annual_demand: f64,
        ordering_cost_per_order: f64,
        holding_cost_per_unit_per_year: f64,
        lead_time_days: f64,
        unit_cost: f64,
    ) -> Result<Self> {
        let params = Self {
            annual_demand,
            ordering_cost_per_order,
            holding_cost_per_unit_per_year,
            lead_time_days,
            unit_cost,
        };
        params.validate()?;
        Ok(params)
    }

    /// 驗證參數，回報第一個不合法的欄位
    pub fn validate(&self) -> Result<()> {
        ensure_positive("annual_demand", self.annual_demand)?;
        ensure_positive("ordering_cost_per_order", self.ordering_cost_per_order)?;
        ensure_positive(
            "holding_cost_per_unit_per_year",
            self.holding_cost_per_unit_per_year,
        )?;
        ensure_positive("lead_time_days", self.lead_time_days)?;
        ensure_positive("unit_cost", self.unit_cost)?;
        Ok(())
    }

    /// 建構器模式：設置年需求量
    pub fn with_annual_demand(mut self, demand: f64) -> Self {
        self.annual_demand = demand;
        self
    }

    /// 建構器模式：設置提前期
    pub fn with_lead_time_days(mut self, days: f64) -> Self {
        self.lead_time_days = days;
        self
    }

    /// 年採購金額（需求量 × 單位成本）
    pub fn annual_purchase_cost(&self) -> f64 {
        self.annual_demand * self.unit_cost
    }
}

impl Default for InventoryParameters {
    /// 表單預設值
    fn default() -> Self {
        Self {
            annual_demand: 1000.0,
            ordering_cost_per_order: 50.0,
            holding_cost_per_unit_per_year: 2.0,
            lead_time_days: 5.0,
            unit_cost: 10.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EoqError;

    #[test]
    fn test_create_parameters() {
        let params = InventoryParameters::new(1000.0, 50.0, 2.0, 5.0, 10.0).unwrap();

        assert_eq!(params, InventoryParameters::default());
        assert_eq!(params.annual_purchase_cost(), 10000.0);
    }

    #[test]
    fn test_reject_zero_holding_cost() {
        let err = InventoryParameters::new(1000.0, 50.0, 0.0, 5.0, 10.0).unwrap_err();

        match err {
            EoqError::InvalidParameter { name, value, .. } => {
                assert_eq!(name, "holding_cost_per_unit_per_year");
                assert_eq!(value, 0.0);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_first_invalid_field_reported() {
        // 需求量與單位成本同時不合法，回報需求量
        let err = InventoryParameters::new(-1.0, 50.0, 2.0, 5.0, 0.0).unwrap_err();
        assert!(matches!(
            err,
            EoqError::InvalidParameter { name: "annual_demand", .. }
        ));
    }

    #[test]
    fn test_builder_then_validate() {
        let params = InventoryParameters::default().with_lead_time_days(0.0);
        assert!(params.validate().is_err());

        let params = InventoryParameters::default().with_annual_demand(2500.0);
        assert!(params.validate().is_ok());
        assert_eq!(params.annual_demand, 2500.0);
    }

    #[test]
    fn test_deserialize_parameters() {
        let json = r#"{
            "annual_demand": 1200.0,
            "ordering_cost_per_order": 40.0,
            "holding_cost_per_unit_per_year": 3.0,
            "lead_time_days": 7.0,
            "unit_cost": 12.5
        }"#;
        let params: InventoryParameters = serde_json::from_str(json).unwrap();

        assert_eq!(params.annual_demand, 1200.0);
        assert_eq!(params.unit_cost, 12.5);
        assert!(params.validate().is_ok());
    }
}
