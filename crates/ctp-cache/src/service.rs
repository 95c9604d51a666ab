//! 規劃服務門面
//!
//! 對展示層暴露的讀寫介面：建議查詢（帶緩存）、配方查詢、配方
//! 變更。每次成功變更都會標髒緩存，下一次 `get_suggestions` 必定
//! 重新計算——不存在陳舊讀取。

use std::sync::Mutex;

use uuid::Uuid;

use ctp_calc::{SuggestionAggregator, SuggestionResult};
use ctp_core::Result;
use ctp_store::{
    CatalogStore, RecipeCoordinator, RecipeEntryRequest, RecipeEntryView, RecipeRegistry,
    SnapshotSource,
};

use crate::dirty_tracking::DirtyTracker;

#[derive(Debug)]
struct CacheState {
    result: Option<SuggestionResult>,
    dirty: DirtyTracker,
}

/// 規劃服務：協調器 + 彙總器 + 結果緩存
pub struct PlanningService<S> {
    coordinator: RecipeCoordinator<S>,
    cache: Mutex<CacheState>,
}

impl<S> PlanningService<S>
where
    S: CatalogStore + RecipeRegistry + SnapshotSource,
{
    /// 創建新的規劃服務
    pub fn new(store: S) -> Self {
        Self {
            coordinator: RecipeCoordinator::new(store),
            cache: Mutex::new(CacheState {
                result: None,
                dirty: DirtyTracker::new(),
            }),
        }
    }

    /// 獲取底層存儲引用
    pub fn store(&self) -> &S {
        self.coordinator.store()
    }

    /// 計算（或回放）生產建議
    ///
    /// 沒有任何髒標記時直接回放上次結果；否則擷取新快照重新計算。
    /// 冪等、無副作用：兩次呼叫之間沒有變更則結果完全相同。
    pub fn get_suggestions(&self) -> SuggestionResult {
        let mut cache = self.cache.lock().expect("cache lock poisoned");

        if let Some(result) = cache.result.as_ref() {
            if cache.dirty.is_empty() {
                tracing::debug!("建議緩存命中，回放 {} 項建議", result.suggestions.len());
                return result.clone();
            }
            tracing::debug!(
                "建議緩存失效：{} 個產品的配方已變更",
                cache.dirty.dirty_products().len()
            );
        }

        let snapshot = self.coordinator.store().snapshot();
        let result = SuggestionAggregator::suggest(&snapshot);

        cache.result = Some(result.clone());
        cache.dirty.clear();
        result
    }

    /// 列出某產品的配方（含顯示名稱）
    pub fn get_recipe(&self, product_id: Uuid) -> Result<Vec<RecipeEntryView>> {
        self.coordinator.recipe(product_id)
    }

    /// 為產品掛上一種原料；成功即標髒緩存
    pub fn add_recipe_entry(
        &self,
        product_id: Uuid,
        request: RecipeEntryRequest,
    ) -> Result<RecipeEntryView> {
        let view = self.coordinator.add_entry(product_id, request)?;
        self.mark_dirty(product_id);
        Ok(view)
    }

    /// 移除產品與某原料的關聯；成功即標髒緩存
    pub fn remove_recipe_entry(&self, product_id: Uuid, raw_material_id: Uuid) -> Result<()> {
        self.coordinator.remove_entry(product_id, raw_material_id)?;
        self.mark_dirty(product_id);
        Ok(())
    }

    /// 整份緩存失效
    ///
    /// 不經過本服務的目錄／庫存變更（產品CRUD、庫存調整、級聯刪除）
    /// 完成後必須呼叫，否則下一次讀取可能回放陳舊結果。
    pub fn invalidate_all(&self) {
        let mut cache = self.cache.lock().expect("cache lock poisoned");
        cache.result = None;
        cache.dirty.clear();
        tracing::debug!("建議緩存已整份失效");
    }

    fn mark_dirty(&self, product_id: Uuid) {
        let mut cache = self.cache.lock().expect("cache lock poisoned");
        cache.dirty.mark_dirty(product_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ctp_core::{Product, RawMaterial};
    use ctp_store::InMemoryPlanningStore;
    use rust_decimal::Decimal;

    fn service_with_feasible_product() -> (PlanningService<InMemoryPlanningStore>, Uuid, Uuid) {
        let store = InMemoryPlanningStore::new();
        let product = store
            .insert_product(Product::new("Chair", Decimal::from(100)))
            .unwrap();
        let material = store
            .insert_raw_material(RawMaterial::new("Wood", 50))
            .unwrap();

        let service = PlanningService::new(store);
        service
            .add_recipe_entry(
                product.id,
                RecipeEntryRequest {
                    raw_material_id: material.id,
                    required_quantity: 5,
                },
            )
            .unwrap();
        (service, product.id, material.id)
    }

    #[test]
    fn test_suggestions_flow_through_service() {
        let (service, product_id, _) = service_with_feasible_product();

        let result = service.get_suggestions();

        assert_eq!(result.suggestions.len(), 1);
        assert_eq!(result.suggestions[0].product_id, product_id);
        assert_eq!(result.suggestions[0].quantity, 10);
        assert_eq!(result.grand_total_value, Decimal::from(1000));
    }

    #[test]
    fn test_repeated_reads_replay_identical_result() {
        let (service, _, _) = service_with_feasible_product();

        let first = service.get_suggestions();
        let second = service.get_suggestions();

        assert_eq!(first, second);
    }

    #[test]
    fn test_removing_last_entry_hides_product_on_next_read() {
        let (service, product_id, material_id) = service_with_feasible_product();
        assert_eq!(service.get_suggestions().suggestions.len(), 1);

        service.remove_recipe_entry(product_id, material_id).unwrap();

        // 變更後的下一次讀取立即反映，沒有陳舊緩存
        assert!(service.get_suggestions().suggestions.is_empty());
        assert_eq!(service.get_suggestions().grand_total_value, Decimal::ZERO);
    }

    #[test]
    fn test_adding_entry_invalidates_cache() {
        let (service, _, _) = service_with_feasible_product();
        assert_eq!(service.get_suggestions().suggestions.len(), 1);

        let desk = service
            .store()
            .insert_product(Product::new("Desk", Decimal::from(300)))
            .unwrap();
        let steel = service
            .store()
            .insert_raw_material(RawMaterial::new("Steel", 8))
            .unwrap();
        service
            .add_recipe_entry(
                desk.id,
                RecipeEntryRequest {
                    raw_material_id: steel.id,
                    required_quantity: 2,
                },
            )
            .unwrap();

        let result = service.get_suggestions();
        assert_eq!(result.suggestions.len(), 2);
    }

    #[test]
    fn test_external_stock_change_requires_invalidate_all() {
        let (service, _, material_id) = service_with_feasible_product();
        assert_eq!(service.get_suggestions().suggestions[0].quantity, 10);

        // 庫存調整不經過本服務
        service.store().set_stock_quantity(material_id, 25).unwrap();

        service.invalidate_all();
        assert_eq!(service.get_suggestions().suggestions[0].quantity, 5);
    }

    #[test]
    fn test_failed_mutation_keeps_cache_fresh() {
        let (service, product_id, material_id) = service_with_feasible_product();
        let first = service.get_suggestions();

        // 重複創建失敗，不應打擾緩存
        let err = service
            .add_recipe_entry(
                product_id,
                RecipeEntryRequest {
                    raw_material_id: material_id,
                    required_quantity: 9,
                },
            )
            .unwrap_err();
        assert_eq!(err.kind(), ctp_core::ErrorKind::Conflict);

        assert_eq!(service.get_suggestions(), first);
    }
}
