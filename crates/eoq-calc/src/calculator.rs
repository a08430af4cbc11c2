//! EOQ 主計算器

use eoq_core::{EoqConfig, InventoryParameters, DAYS_PER_YEAR};

use crate::report::EoqReport;
use crate::{compute_cost_breakdown, compute_eoq, compute_reorder_point};

/// EOQ 計算器
#[derive(Debug, Clone, Default)]
pub struct EoqCalculator {
    config: EoqConfig,
}

impl EoqCalculator {
    /// 創建新的 EOQ 計算器
    pub fn new(config: EoqConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EoqConfig {
        &self.config
    }

    /// 主計算入口：EOQ → 成本明細 → 成本曲線 → 再訂購點
    pub fn calculate(&self, params: &InventoryParameters) -> eoq_core::Result<EoqReport> {
        tracing::info!(
            "開始 EOQ 計算：年需求 {}，訂購成本 {}，持有成本 {}",
            params.annual_demand,
            params.ordering_cost_per_order,
            params.holding_cost_per_unit_per_year
        );

        let start_time = std::time::Instant::now();

        self.config.validate()?;
        params.validate()?;

        let demand = params.annual_demand;
        let ordering_cost = params.ordering_cost_per_order;
        let holding_cost = params.holding_cost_per_unit_per_year;

        // Step 1: 經濟訂購量
        let eoq = compute_eoq(demand, ordering_cost, holding_cost)?;
        tracing::debug!("Step 1: EOQ = {}", eoq);

        // Step 2: EOQ 下的成本明細
        let breakdown = compute_cost_breakdown(demand, ordering_cost, holding_cost, eoq)?;
        tracing::debug!(
            "Step 2: 訂購成本 {}，持有成本 {}，總成本 {}",
            breakdown.total_ordering_cost,
            breakdown.total_holding_cost,
            breakdown.total_cost
        );

        // Step 3: 成本權衡曲線
        let curve = crate::tradeoff::sample_tradeoff_curve_with_bound(
            demand,
            ordering_cost,
            holding_cost,
            eoq,
            self.config.sample_count,
            self.config.lower_bound,
        )?;
        tracing::debug!("Step 3: 曲線取樣點數 {}", curve.len());

        // Step 4: 再訂購點
        let reorder_point = compute_reorder_point(demand, params.lead_time_days)?;
        tracing::debug!("Step 4: 再訂購點 {}", reorder_point);

        let annual_purchase_cost = params.annual_purchase_cost();
        let elapsed = start_time.elapsed();

        let report = EoqReport {
            parameters: *params,
            eoq,
            breakdown,
            reorder_point,
            orders_per_year: demand / eoq,
            order_cycle_days: DAYS_PER_YEAR * eoq / demand,
            annual_purchase_cost,
            annual_cost_with_purchase: breakdown.total_cost + annual_purchase_cost,
            curve,
            display_precision: self.config.display_precision,
            currency_label: self.config.currency_label.clone(),
            calculation_time_us: u64::try_from(elapsed.as_micros()).ok(),
        };

        tracing::info!("EOQ 計算完成，耗時 {:?}", elapsed);

        Ok(report)
    }
}
