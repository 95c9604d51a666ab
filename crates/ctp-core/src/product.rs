//! 產品模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 可生產的產品
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// 產品ID
    pub id: Uuid,

    /// 產品名稱（非空）
    pub name: String,

    /// 單位價值（非負，貨幣金額）
    pub unit_value: Decimal,
}

impl Product {
    /// 創建新的產品
    pub fn new(name: impl Into<String>, unit_value: Decimal) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            unit_value,
        }
    }

    /// 建構器模式：指定ID（測試或外部目錄同步用）
    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }
}
