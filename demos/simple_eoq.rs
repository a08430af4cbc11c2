//! 簡單 EOQ 計算示例
//!
//! 以表單預設值計算 EOQ，印出結果與成本曲線摘要

use eoq::{EoqCalculator, EoqConfig, InventoryParameters};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    println!("===== Inventory Management Simulation =====\n");

    // 步驟 1: 輸入參數
    let params = InventoryParameters::new(1000.0, 50.0, 2.0, 5.0, 10.0)?;
    println!("[1] Input Parameters");
    println!("    Annual Demand: {} units", params.annual_demand);
    println!("    Ordering Cost per Order: Rs {}", params.ordering_cost_per_order);
    println!(
        "    Holding Cost per Unit per Year: Rs {}",
        params.holding_cost_per_unit_per_year
    );
    println!("    Lead Time: {} days", params.lead_time_days);
    println!("    Unit Cost: Rs {}\n", params.unit_cost);

    // 步驟 2: 計算
    let calculator = EoqCalculator::new(EoqConfig::default());
    let report = calculator.calculate(&params)?;

    println!("[2] Results");
    println!("{report}\n");

    // 步驟 3: 成本曲線
    let chart = report.chart_spec();
    println!("[3] {}", chart.title);
    for series in &chart.series {
        let min = series.values.iter().copied().fold(f64::INFINITY, f64::min);
        println!("    {}: {} points, min {:.2}", series.label, series.values.len(), min);
    }
    if let Some(best) = report.curve.min_total_cost_point() {
        println!(
            "    Lowest sampled total cost at Q = {:.2} (EOQ marker at {:.2})",
            best.order_quantity, chart.eoq_marker
        );
    }

    Ok(())
}
