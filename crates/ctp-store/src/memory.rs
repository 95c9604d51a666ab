//! 記憶體參考存儲
//!
//! 三張表共用一把 RwLock：一次讀鎖即為快照隔離，一次寫鎖即為
//! 逐鍵序列化的寫入，(產品, 原料) 唯一鍵的 CAS 因此天然成立。

use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, RwLock};

use chrono::Utc;
use uuid::Uuid;

use ctp_core::{
    CtpError, PlanningSnapshot, Product, RawMaterial, RecipeEntry, RecipeKey, Result,
};

use crate::contracts::{CatalogStore, RecipeRegistry, SnapshotSource};

#[derive(Debug, Default)]
struct CatalogState {
    products: BTreeMap<Uuid, Product>,
    materials: BTreeMap<Uuid, RawMaterial>,
    recipes: BTreeMap<RecipeKey, RecipeEntry>,
}

/// 記憶體存儲；Clone 共享同一份底層狀態
#[derive(Debug, Clone, Default)]
pub struct InMemoryPlanningStore {
    state: Arc<RwLock<CatalogState>>,
}

impl InMemoryPlanningStore {
    /// 創建空存儲
    pub fn new() -> Self {
        Self::default()
    }

    /// 寫入產品（外部目錄CRUD的代理面；名稱不可為空）
    pub fn insert_product(&self, product: Product) -> Result<Product> {
        if product.name.trim().is_empty() {
            return Err(CtpError::EmptyName);
        }
        let mut state = self.state.write().expect("store lock poisoned");
        state.products.insert(product.id, product.clone());
        Ok(product)
    }

    /// 刪除產品，並級聯刪除其所有配方項
    pub fn remove_product(&self, id: Uuid) -> Result<()> {
        let mut state = self.state.write().expect("store lock poisoned");
        if state.products.remove(&id).is_none() {
            return Err(CtpError::ProductNotFound(id));
        }
        let before = state.recipes.len();
        state.recipes.retain(|key, _| key.0 != id);
        tracing::debug!(
            "刪除產品 {}，級聯刪除 {} 筆配方項",
            id,
            before - state.recipes.len()
        );
        Ok(())
    }

    /// 寫入原料（名稱不可為空）
    pub fn insert_raw_material(&self, material: RawMaterial) -> Result<RawMaterial> {
        if material.name.trim().is_empty() {
            return Err(CtpError::EmptyName);
        }
        let mut state = self.state.write().expect("store lock poisoned");
        state.materials.insert(material.id, material.clone());
        Ok(material)
    }

    /// 刪除原料，並級聯刪除引用它的配方項
    pub fn remove_raw_material(&self, id: Uuid) -> Result<()> {
        let mut state = self.state.write().expect("store lock poisoned");
        if state.materials.remove(&id).is_none() {
            return Err(CtpError::MaterialNotFound(id));
        }
        let before = state.recipes.len();
        state.recipes.retain(|key, _| key.1 != id);
        tracing::debug!(
            "刪除原料 {}，級聯刪除 {} 筆配方項",
            id,
            before - state.recipes.len()
        );
        Ok(())
    }

    /// 庫存調整（唯一允許變動庫存的操作；本引擎的估算從不觸碰它）
    pub fn set_stock_quantity(&self, id: Uuid, stock_quantity: u64) -> Result<RawMaterial> {
        let mut state = self.state.write().expect("store lock poisoned");
        let material = state
            .materials
            .get_mut(&id)
            .ok_or(CtpError::MaterialNotFound(id))?;
        material.stock_quantity = stock_quantity;
        Ok(material.clone())
    }
}

impl CatalogStore for InMemoryPlanningStore {
    fn product(&self, id: Uuid) -> Result<Product> {
        let state = self.state.read().expect("store lock poisoned");
        state
            .products
            .get(&id)
            .cloned()
            .ok_or(CtpError::ProductNotFound(id))
    }

    fn products(&self) -> Vec<Product> {
        let state = self.state.read().expect("store lock poisoned");
        state.products.values().cloned().collect()
    }

    fn raw_material(&self, id: Uuid) -> Result<RawMaterial> {
        let state = self.state.read().expect("store lock poisoned");
        state
            .materials
            .get(&id)
            .cloned()
            .ok_or(CtpError::MaterialNotFound(id))
    }

    fn raw_materials(&self) -> Vec<RawMaterial> {
        let state = self.state.read().expect("store lock poisoned");
        state.materials.values().cloned().collect()
    }
}

impl RecipeRegistry for InMemoryPlanningStore {
    fn entries_for_product(&self, product_id: Uuid) -> Vec<RecipeEntry> {
        let state = self.state.read().expect("store lock poisoned");
        state
            .recipes
            .values()
            .filter(|entry| entry.product_id == product_id)
            .cloned()
            .collect()
    }

    fn create_entry(&self, entry: RecipeEntry) -> Result<RecipeEntry> {
        // 存在性與唯一性檢查都在同一把寫鎖下完成
        let mut state = self.state.write().expect("store lock poisoned");
        if !state.products.contains_key(&entry.product_id) {
            return Err(CtpError::ProductNotFound(entry.product_id));
        }
        if !state.materials.contains_key(&entry.raw_material_id) {
            return Err(CtpError::MaterialNotFound(entry.raw_material_id));
        }
        if state.recipes.contains_key(&entry.key()) {
            return Err(CtpError::DuplicateEntry {
                product_id: entry.product_id,
                raw_material_id: entry.raw_material_id,
            });
        }
        state.recipes.insert(entry.key(), entry.clone());
        Ok(entry)
    }

    fn delete_entry(&self, product_id: Uuid, raw_material_id: Uuid) -> Result<()> {
        let mut state = self.state.write().expect("store lock poisoned");
        state
            .recipes
            .remove(&(product_id, raw_material_id))
            .map(|_| ())
            .ok_or(CtpError::EntryNotFound {
                product_id,
                raw_material_id,
            })
    }
}

impl SnapshotSource for InMemoryPlanningStore {
    fn snapshot(&self) -> PlanningSnapshot {
        let state = self.state.read().expect("store lock poisoned");

        let mut recipes: HashMap<Uuid, Vec<RecipeEntry>> = HashMap::new();
        for entry in state.recipes.values() {
            recipes
                .entry(entry.product_id)
                .or_default()
                .push(entry.clone());
        }

        PlanningSnapshot {
            products: state.products.values().cloned().collect(),
            materials: state
                .materials
                .iter()
                .map(|(id, material)| (*id, material.clone()))
                .collect(),
            recipes,
            taken_at: Utc::now(),
        }
    }
}
