//! 再訂購點

use eoq_core::{ensure_non_negative, Result, DAYS_PER_YEAR};

/// 計算再訂購點（提前期內的需求量）
///
/// 以一年 365 天、固定日需求率計算，不含安全庫存。
pub fn compute_reorder_point(demand: f64, lead_time_days: f64) -> Result<f64> {
    ensure_non_negative("demand", demand)?;
    ensure_non_negative("lead_time_days", lead_time_days)?;

    Ok((demand / DAYS_PER_YEAR) * lead_time_days)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_reference_case() {
        let rop = compute_reorder_point(1000.0, 5.0).unwrap();

        assert_eq!(rop, 1000.0 / 365.0 * 5.0);
        assert!((rop - 13.70).abs() < 0.005);
    }

    #[rstest]
    #[case(365.0, 1.0, 1.0)]
    #[case(3650.0, 7.0, 70.0)]
    #[case(0.0, 10.0, 0.0)]
    #[case(1000.0, 0.0, 0.0)]
    fn test_daily_rate(#[case] demand: f64, #[case] lead_time: f64, #[case] expected: f64) {
        let rop = compute_reorder_point(demand, lead_time).unwrap();
        assert!((rop - expected).abs() < 1e-9);
    }

    #[test]
    fn test_negative_inputs() {
        assert!(compute_reorder_point(-1.0, 5.0).is_err());
        assert!(compute_reorder_point(1000.0, -5.0).is_err());
        assert!(compute_reorder_point(1000.0, f64::INFINITY).is_err());
    }
}
