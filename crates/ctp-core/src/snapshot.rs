//! 計算快照模型
//!
//! 計算器與彙總器只讀取一份不可變快照，不直接讀取任何共享狀態。
//! 快照由存儲層在單一一致讀取下產生（快照隔離），計算途中發生的
//! 配方變更不會半途反映進來。

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

use crate::{Product, RawMaterial, RecipeEntry};

/// 目錄與配方的單一時間點一致讀取
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanningSnapshot {
    /// 產品（目錄順序）
    pub products: Vec<Product>,

    /// 原料表
    pub materials: HashMap<Uuid, RawMaterial>,

    /// 各產品的配方項
    pub recipes: HashMap<Uuid, Vec<RecipeEntry>>,

    /// 快照擷取時間
    pub taken_at: DateTime<Utc>,
}

impl PlanningSnapshot {
    /// 創建空快照
    pub fn new() -> Self {
        Self {
            products: Vec::new(),
            materials: HashMap::new(),
            recipes: HashMap::new(),
            taken_at: Utc::now(),
        }
    }

    /// 建構器模式：加入產品
    pub fn with_product(mut self, product: Product) -> Self {
        self.products.push(product);
        self
    }

    /// 建構器模式：加入原料
    pub fn with_material(mut self, material: RawMaterial) -> Self {
        self.materials.insert(material.id, material);
        self
    }

    /// 建構器模式：加入配方項
    pub fn with_entry(mut self, entry: RecipeEntry) -> Self {
        self.recipes
            .entry(entry.product_id)
            .or_default()
            .push(entry);
        self
    }

    /// 獲取某產品的配方項
    pub fn entries_for(&self, product_id: Uuid) -> &[RecipeEntry] {
        self.recipes
            .get(&product_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// 獲取某原料的現有庫存；原料不存在時為 None
    pub fn stock_of(&self, raw_material_id: Uuid) -> Option<u64> {
        self.materials
            .get(&raw_material_id)
            .map(|m| m.stock_quantity)
    }
}

impl Default for PlanningSnapshot {
    fn default() -> Self {
        Self::new()
    }
}
