//! 原料模型

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 原料（庫存由外部庫存管理操作維護，本引擎只讀取）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawMaterial {
    /// 原料ID
    pub id: Uuid,

    /// 原料名稱（非空）
    pub name: String,

    /// 現有庫存（非負整數）
    pub stock_quantity: u64,
}

impl RawMaterial {
    /// 創建新的原料
    pub fn new(name: impl Into<String>, stock_quantity: u64) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            stock_quantity,
        }
    }

    /// 建構器模式：指定ID（測試或外部目錄同步用）
    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    /// 以目前庫存可支撐的生產單位數
    ///
    /// 整數向下取整；庫存不足一單位需求量時為 0。
    pub fn buildable_units(&self, required_per_unit: u64) -> u64 {
        if required_per_unit == 0 {
            return 0;
        }
        self.stock_quantity / required_per_unit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_create_material() {
        let material = RawMaterial::new("Steel", 500);

        assert_eq!(material.name, "Steel");
        assert_eq!(material.stock_quantity, 500);
    }

    #[rstest]
    #[case(50, 5, 10)]
    #[case(12, 2, 6)]
    #[case(4, 5, 0)]
    #[case(0, 1, 0)]
    #[case(7, 3, 2)]
    fn test_buildable_units(#[case] stock: u64, #[case] required: u64, #[case] expected: u64) {
        let material = RawMaterial::new("Wood", stock);
        assert_eq!(material.buildable_units(required), expected);
    }

    #[test]
    fn test_buildable_units_zero_requirement() {
        // 需求量 0 不是合法配方（由協調器擋下），防禦性回傳 0 而非除零
        let material = RawMaterial::new("Glue", 100);
        assert_eq!(material.buildable_units(0), 0);
    }
}
