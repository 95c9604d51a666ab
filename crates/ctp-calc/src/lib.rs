//! # CTP Calculation Engine
//!
//! 生產可行性計算引擎（單層 capable-to-promise）

pub mod aggregator;
pub mod calculator;

// Re-export 主要類型
pub use aggregator::SuggestionAggregator;
pub use calculator::{FeasibilityCalculator, FeasibilityEstimate, FeasibilityOutcome};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 生產建議計算結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionResult {
    /// 各產品的生產建議（僅含可生產數量 > 0 者）
    pub suggestions: Vec<ProductionSuggestion>,

    /// 建議總價值（各項 total_value 的精確總和）
    pub grand_total_value: Decimal,

    /// 警告信息（例如配方引用了已消失的原料）
    pub warnings: Vec<SuggestionWarning>,
}

impl SuggestionResult {
    /// 創建空的計算結果
    pub fn empty() -> Self {
        Self {
            suggestions: Vec::new(),
            grand_total_value: Decimal::ZERO,
            warnings: Vec::new(),
        }
    }

    /// 添加警告
    pub fn add_warning(&mut self, warning: SuggestionWarning) {
        self.warnings.push(warning);
    }
}

/// 單一產品的生產建議
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductionSuggestion {
    /// 產品ID
    pub product_id: Uuid,

    /// 產品名稱
    pub product_name: String,

    /// 單位價值
    pub unit_value: Decimal,

    /// 可生產數量
    pub quantity: u64,

    /// 總價值（quantity × unit_value，無額外捨入）
    pub total_value: Decimal,
}

/// 計算警告
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionWarning {
    pub product_id: Uuid,
    pub message: String,
    pub severity: WarningSeverity,
}

impl SuggestionWarning {
    pub fn new(product_id: Uuid, message: String, severity: WarningSeverity) -> Self {
        Self {
            product_id,
            message,
            severity,
        }
    }

    pub fn info(product_id: Uuid, message: String) -> Self {
        Self::new(product_id, message, WarningSeverity::Info)
    }

    pub fn warning(product_id: Uuid, message: String) -> Self {
        Self::new(product_id, message, WarningSeverity::Warning)
    }

    pub fn error(product_id: Uuid, message: String) -> Self {
        Self::new(product_id, message, WarningSeverity::Error)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WarningSeverity {
    Info,
    Warning,
    Error,
}
