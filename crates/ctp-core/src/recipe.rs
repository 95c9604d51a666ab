//! 配方模型（產品物料清單的單層邊）

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 配方項唯一鍵：每對 (產品, 原料) 至多一筆
pub type RecipeKey = (Uuid, Uuid);

/// 配方項：生產一單位產品所需的某種原料用量
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeEntry {
    /// 產品ID
    pub product_id: Uuid,

    /// 原料ID
    pub raw_material_id: Uuid,

    /// 每單位產品需求量（≥ 1，於變更協調器邊界驗證）
    pub required_quantity: u64,
}

impl RecipeEntry {
    /// 創建新的配方項
    pub fn new(product_id: Uuid, raw_material_id: Uuid, required_quantity: u64) -> Self {
        Self {
            product_id,
            raw_material_id,
            required_quantity,
        }
    }

    /// 唯一鍵
    pub fn key(&self) -> RecipeKey {
        (self.product_id, self.raw_material_id)
    }
}
