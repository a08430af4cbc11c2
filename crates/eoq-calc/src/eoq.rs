//! 經濟訂購量（EOQ）
//!
//! EOQ = sqrt(2 * 年需求量 * 訂購成本 / 持有成本)

use eoq_core::{ensure_positive, EoqError, Result};

/// 計算經濟訂購量
///
/// 三個輸入都必須大於零；持有成本 ≤ 0 會使 EOQ 無定義。
///
/// # 範例
/// ```
/// let eoq = eoq_calc::compute_eoq(1000.0, 50.0, 2.0).unwrap();
/// assert!((eoq - 223.607).abs() < 1e-3);
/// ```
pub fn compute_eoq(demand: f64, ordering_cost: f64, holding_cost: f64) -> Result<f64> {
    ensure_positive("holding_cost", holding_cost)?;
    ensure_positive("demand", demand)?;
    ensure_positive("ordering_cost", ordering_cost)?;

    // 分開開根號，避免 2 × D × K 在 EOQ 仍有限時先溢位
    let eoq = (2.0 * demand).sqrt() * (ordering_cost / holding_cost).sqrt();

    if !eoq.is_finite() || eoq <= 0.0 {
        return Err(EoqError::invalid("eoq", eoq, "EOQ 計算結果超出數值範圍"));
    }

    Ok(eoq)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[test]
    fn test_reference_case() {
        let eoq = compute_eoq(1000.0, 50.0, 2.0).unwrap();

        assert!((eoq - 50000.0_f64.sqrt()).abs() < 1e-9);
        assert!((eoq - 223.61).abs() < 0.005);
    }

    #[rstest]
    #[case(0.0)]
    #[case(-2.0)]
    fn test_non_positive_holding_cost(#[case] holding_cost: f64) {
        let err = compute_eoq(1000.0, 50.0, holding_cost).unwrap_err();
        assert!(matches!(
            err,
            EoqError::InvalidParameter { name: "holding_cost", .. }
        ));
    }

    #[rstest]
    #[case(-1000.0, 50.0, "demand")]
    #[case(0.0, 50.0, "demand")]
    #[case(1000.0, -50.0, "ordering_cost")]
    #[case(1000.0, 0.0, "ordering_cost")]
    fn test_non_positive_demand_or_ordering_cost(
        #[case] demand: f64,
        #[case] ordering_cost: f64,
        #[case] field: &str,
    ) {
        match compute_eoq(demand, ordering_cost, 2.0) {
            Err(EoqError::InvalidParameter { name, .. }) => assert_eq!(name, field),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_nan_rejected() {
        assert!(compute_eoq(f64::NAN, 50.0, 2.0).is_err());
        assert!(compute_eoq(1000.0, 50.0, f64::NAN).is_err());
    }

    #[test]
    fn test_large_inputs_with_finite_eoq() {
        // 2 × D × K 會溢位，但 EOQ ≈ 1.414e50
        let eoq = compute_eoq(1e200, 1e200, 1e300).unwrap();

        let expected = 2.0_f64.sqrt() * 1e50;
        assert!((eoq - expected).abs() <= expected * 1e-12);
    }

    #[test]
    fn test_out_of_range_result() {
        let err = compute_eoq(f64::MAX, f64::MAX, 1e-300).unwrap_err();
        assert!(matches!(err, EoqError::InvalidParameter { name: "eoq", .. }));

        let err = compute_eoq(1e-300, 1e-300, 1e300).unwrap_err();
        assert!(matches!(err, EoqError::InvalidParameter { name: "eoq", .. }));
    }

    proptest! {
        #[test]
        fn prop_matches_formula(
            d in 1.0f64..1e6,
            k in 0.01f64..1e4,
            h in 0.01f64..1e3,
        ) {
            let eoq = compute_eoq(d, k, h).unwrap();
            let expected = (2.0 * d * k / h).sqrt();
            prop_assert!((eoq - expected).abs() <= expected * 1e-12);
        }

        #[test]
        fn prop_increasing_in_demand_and_ordering_cost(
            d in 1.0f64..1e6,
            k in 0.01f64..1e4,
            h in 0.01f64..1e3,
            factor in 1.01f64..10.0,
        ) {
            let base = compute_eoq(d, k, h).unwrap();
            prop_assert!(compute_eoq(d * factor, k, h).unwrap() > base);
            prop_assert!(compute_eoq(d, k * factor, h).unwrap() > base);
        }

        #[test]
        fn prop_decreasing_in_holding_cost(
            d in 1.0f64..1e6,
            k in 0.01f64..1e4,
            h in 0.01f64..1e3,
            factor in 1.01f64..10.0,
        ) {
            let base = compute_eoq(d, k, h).unwrap();
            prop_assert!(compute_eoq(d, k, h * factor).unwrap() < base);
        }
    }
}
