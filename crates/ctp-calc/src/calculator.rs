//! 可行性計算器
//!
//! 純函數：一個產品的配方 + 原料庫存 → 最大可生產數量與預估價值。
//! 同一快照上重複呼叫必得相同結果；不讀寫任何外部狀態。

use rust_decimal::Decimal;
use std::collections::HashMap;
use uuid::Uuid;

use ctp_core::{Product, RawMaterial, RecipeEntry};

/// 單一產品的可行性估算
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeasibilityEstimate {
    /// 產品ID
    pub product_id: Uuid,

    /// 最大可生產數量（瓶頸原料決定的上限）
    pub max_units: u64,

    /// 預估價值（max_units × 單位價值，無額外捨入）
    pub estimated_value: Decimal,

    /// 瓶頸原料（庫存/需求比最低者；並列時取配方中先出現者）
    pub bottleneck_material_id: Uuid,
}

/// 可行性計算結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeasibilityOutcome {
    /// 產品沒有配方：不參與可行性輸出（未定義，而非 0）
    NoRecipe,

    /// 配方引用了原料表中不存在的原料（級聯刪除規則失效時的防禦路徑）
    MissingMaterial { raw_material_id: Uuid },

    /// 估算結果
    Estimate(FeasibilityEstimate),
}

/// 可行性計算器
pub struct FeasibilityCalculator;

impl FeasibilityCalculator {
    /// 估算單一產品的最大可生產數量與價值
    ///
    /// 每個配方項的貢獻為 `stock_quantity / required_quantity`（整數向下
    /// 取整），`max_units` 取所有貢獻的最小值。每個產品獨立假設全部現有
    /// 庫存可用，不跨產品預留。
    pub fn estimate(
        product: &Product,
        entries: &[RecipeEntry],
        materials: &HashMap<Uuid, RawMaterial>,
    ) -> FeasibilityOutcome {
        if entries.is_empty() {
            return FeasibilityOutcome::NoRecipe;
        }

        let mut max_units = u64::MAX;
        let mut bottleneck = entries[0].raw_material_id;

        for entry in entries {
            let material = match materials.get(&entry.raw_material_id) {
                Some(material) => material,
                None => {
                    return FeasibilityOutcome::MissingMaterial {
                        raw_material_id: entry.raw_material_id,
                    };
                }
            };

            let contribution = material.buildable_units(entry.required_quantity);
            if contribution < max_units {
                max_units = contribution;
                bottleneck = entry.raw_material_id;
            }
        }

        let estimated_value = Decimal::from(max_units) * product.unit_value;

        FeasibilityOutcome::Estimate(FeasibilityEstimate {
            product_id: product.id,
            max_units,
            estimated_value,
            bottleneck_material_id: bottleneck,
        })
    }
}
