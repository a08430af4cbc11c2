//! EOQ 計算配置

use serde::{Deserialize, Serialize};

use crate::{ensure_positive, EoqError, Result};

/// 成本曲線預設取樣點數
pub const DEFAULT_SAMPLE_COUNT: usize = 100;

/// 成本曲線預設取樣下界（單位），避免訂購量為零時除以零
pub const DEFAULT_LOWER_BOUND: f64 = 1.0;

/// 預設顯示小數位數
pub const DEFAULT_DISPLAY_PRECISION: u32 = 2;

const MAX_DISPLAY_PRECISION: u32 = 10;

/// EOQ 計算器配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EoqConfig {
    /// 成本曲線取樣點數
    pub sample_count: usize,

    /// 成本曲線取樣下界
    pub lower_bound: f64,

    /// 顯示小數位數
    pub display_precision: u32,

    /// 貨幣標示
    pub currency_label: String,
}

impl EoqConfig {
    /// 創建預設配置
    pub fn new() -> Self {
        Self {
            sample_count: DEFAULT_SAMPLE_COUNT,
            lower_bound: DEFAULT_LOWER_BOUND,
            display_precision: DEFAULT_DISPLAY_PRECISION,
            currency_label: "Rs".to_string(),
        }
    }

    /// 從 JSON 載入配置，缺少的欄位使用預設值
    ///
    /// # 範例
    /// ```
    /// # use eoq_core::EoqConfig;
    /// let config = EoqConfig::from_json(r#"{ "sample_count": 50 }"#).unwrap();
    /// assert_eq!(config.sample_count, 50);
    /// assert_eq!(config.currency_label, "Rs");
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| EoqError::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// 建構器模式：設置取樣點數
    pub fn with_sample_count(mut self, count: usize) -> Self {
        self.sample_count = count;
        self
    }

    /// 建構器模式：設置取樣下界
    pub fn with_lower_bound(mut self, bound: f64) -> Self {
        self.lower_bound = bound;
        self
    }

    /// 建構器模式：設置顯示小數位數
    pub fn with_display_precision(mut self, precision: u32) -> Self {
        self.display_precision = precision;
        self
    }

    /// 建構器模式：設置貨幣標示
    pub fn with_currency_label(mut self, label: impl Into<String>) -> Self {
        self.currency_label = label.into();
        self
    }

    /// 驗證配置
    pub fn validate(&self) -> Result<()> {
        if self.sample_count < 2 {
            return Err(EoqError::invalid(
                "sample_count",
                self.sample_count as f64,
                "取樣點數至少為 2",
            ));
        }

        ensure_positive("lower_bound", self.lower_bound)?;

        if self.display_precision > MAX_DISPLAY_PRECISION {
            return Err(EoqError::invalid(
                "display_precision",
                f64::from(self.display_precision),
                "小數位數不可超過 10",
            ));
        }

        Ok(())
    }
}

impl Default for EoqConfig {
    fn default() -> Self {
        Self::new()
    }
}
