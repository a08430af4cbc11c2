//! # EOQ Core
//!
//! 經濟訂購量模型的核心資料模型與類型定義

pub mod config;
pub mod cost;
pub mod curve;
pub mod parameters;

// Re-export 主要類型
pub use config::EoqConfig;
pub use cost::CostBreakdown;
pub use curve::{TradeoffCurve, TradeoffPoint};
pub use parameters::InventoryParameters;

/// 一年的天數（再訂購點以固定日需求率計算）
pub const DAYS_PER_YEAR: f64 = 365.0;

/// EOQ 錯誤類型
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EoqError {
    #[error("無效的參數 {name} = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("配置解析錯誤: {0}")]
    ConfigParse(String),
}

impl EoqError {
    /// 建立參數錯誤
    pub fn invalid(name: &'static str, value: f64, reason: &'static str) -> Self {
        Self::InvalidParameter {
            name,
            value,
            reason,
        }
    }
}

pub type Result<T> = std::result::Result<T, EoqError>;

/// 檢查數值為有限且大於零
pub fn ensure_positive(name: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(EoqError::invalid(name, value, "必須為大於零的有限數值"))
    }
}

/// 檢查數值為有限且不小於零
pub fn ensure_non_negative(name: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(EoqError::invalid(name, value, "不可為負數或非有限數值"))
    }
}
