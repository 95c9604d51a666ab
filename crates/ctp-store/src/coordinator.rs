//! 配方變更協調器
//!
//! 所有配方寫入的驗證邊界。成功的變更立即反映於下一次快照讀取
//! （read-your-writes，無延遲傳播）。

use uuid::Uuid;

use ctp_core::{CtpError, RecipeEntry, Result};

use crate::contracts::{CatalogStore, RecipeRegistry};

/// 創建配方項的請求
#[derive(Debug, Clone)]
pub struct RecipeEntryRequest {
    pub raw_material_id: Uuid,
    pub required_quantity: u64,
}

/// 配方項回應：名稱為讀取時由目錄即時連接的顯示欄位，從不落盤
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeEntryView {
    pub product_id: Uuid,
    pub product_name: String,
    pub raw_material_id: Uuid,
    pub raw_material_name: String,
    pub required_quantity: u64,
}

/// 配方變更協調器
pub struct RecipeCoordinator<S> {
    store: S,
}

impl<S> RecipeCoordinator<S>
where
    S: CatalogStore + RecipeRegistry,
{
    /// 創建新的協調器
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// 獲取底層存儲引用
    pub fn store(&self) -> &S {
        &self.store
    }

    /// 為產品掛上一種原料
    ///
    /// 驗證順序：需求量 ≥ 1、產品存在、原料存在、(產品, 原料) 未重複。
    /// 全部通過才寫入。
    pub fn add_entry(
        &self,
        product_id: Uuid,
        request: RecipeEntryRequest,
    ) -> Result<RecipeEntryView> {
        if request.required_quantity < 1 {
            return Err(CtpError::InvalidQuantity(request.required_quantity));
        }

        let entry = self.store.create_entry(RecipeEntry::new(
            product_id,
            request.raw_material_id,
            request.required_quantity,
        ))?;

        tracing::info!(
            "新增配方項：產品 {} / 原料 {}，需求量 {}",
            entry.product_id,
            entry.raw_material_id,
            entry.required_quantity
        );

        self.view_of(&entry)
    }

    /// 移除產品與某原料的關聯；關聯不存在時回 EntryNotFound
    pub fn remove_entry(&self, product_id: Uuid, raw_material_id: Uuid) -> Result<()> {
        self.store.delete_entry(product_id, raw_material_id)?;
        tracing::info!("移除配方項：產品 {} / 原料 {}", product_id, raw_material_id);
        Ok(())
    }

    /// 列出某產品的配方（含顯示名稱）；產品不存在時回 ProductNotFound
    pub fn recipe(&self, product_id: Uuid) -> Result<Vec<RecipeEntryView>> {
        let product = self.store.product(product_id)?;

        let mut views = Vec::new();
        for entry in self.store.entries_for_product(product.id) {
            match self.store.raw_material(entry.raw_material_id) {
                Ok(material) => views.push(RecipeEntryView {
                    product_id: product.id,
                    product_name: product.name.clone(),
                    raw_material_id: material.id,
                    raw_material_name: material.name,
                    required_quantity: entry.required_quantity,
                }),
                // 原料在列舉與連接之間消失：略過該項而非讓整份配方失敗
                Err(_) => tracing::warn!(
                    "配方項引用了不存在的原料 {}，自回應中略過",
                    entry.raw_material_id
                ),
            }
        }
        Ok(views)
    }

    fn view_of(&self, entry: &RecipeEntry) -> Result<RecipeEntryView> {
        let product = self.store.product(entry.product_id)?;
        let material = self.store.raw_material(entry.raw_material_id)?;
        Ok(RecipeEntryView {
            product_id: product.id,
            product_name: product.name,
            raw_material_id: material.id,
            raw_material_name: material.name,
            required_quantity: entry.required_quantity,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::InMemoryPlanningStore;
    use ctp_core::{ErrorKind, Product, RawMaterial};
    use rust_decimal::Decimal;

    fn coordinator_with_pair() -> (RecipeCoordinator<InMemoryPlanningStore>, Uuid, Uuid) {
        let store = InMemoryPlanningStore::new();
        let product = store
            .insert_product(Product::new("Chair", Decimal::from(100)))
            .unwrap();
        let material = store
            .insert_raw_material(RawMaterial::new("Wood", 50))
            .unwrap();
        (RecipeCoordinator::new(store), product.id, material.id)
    }

    #[test]
    fn test_quantity_below_one_is_invalid_argument() {
        let (coordinator, product_id, material_id) = coordinator_with_pair();

        let err = coordinator
            .add_entry(
                product_id,
                RecipeEntryRequest {
                    raw_material_id: material_id,
                    required_quantity: 0,
                },
            )
            .unwrap_err();

        assert_eq!(err, CtpError::InvalidQuantity(0));
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        // 無效請求不產生任何寫入
        assert!(coordinator.recipe(product_id).unwrap().is_empty());
    }

    #[test]
    fn test_missing_product_is_not_found() {
        let (coordinator, _, material_id) = coordinator_with_pair();
        let unknown = Uuid::new_v4();

        let err = coordinator
            .add_entry(
                unknown,
                RecipeEntryRequest {
                    raw_material_id: material_id,
                    required_quantity: 2,
                },
            )
            .unwrap_err();

        assert_eq!(err, CtpError::ProductNotFound(unknown));
    }

    #[test]
    fn test_missing_material_is_not_found() {
        let (coordinator, product_id, _) = coordinator_with_pair();
        let unknown = Uuid::new_v4();

        let err = coordinator
            .add_entry(
                product_id,
                RecipeEntryRequest {
                    raw_material_id: unknown,
                    required_quantity: 2,
                },
            )
            .unwrap_err();

        assert_eq!(err, CtpError::MaterialNotFound(unknown));
    }

    #[test]
    fn test_add_entry_returns_denormalized_names() {
        let (coordinator, product_id, material_id) = coordinator_with_pair();

        let view = coordinator
            .add_entry(
                product_id,
                RecipeEntryRequest {
                    raw_material_id: material_id,
                    required_quantity: 5,
                },
            )
            .unwrap();

        assert_eq!(view.product_name, "Chair");
        assert_eq!(view.raw_material_name, "Wood");
        assert_eq!(view.required_quantity, 5);
    }

    #[test]
    fn test_duplicate_add_is_conflict_and_quantity_unchanged() {
        let (coordinator, product_id, material_id) = coordinator_with_pair();

        coordinator
            .add_entry(
                product_id,
                RecipeEntryRequest {
                    raw_material_id: material_id,
                    required_quantity: 5,
                },
            )
            .unwrap();

        let err = coordinator
            .add_entry(
                product_id,
                RecipeEntryRequest {
                    raw_material_id: material_id,
                    required_quantity: 9,
                },
            )
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Conflict);
        let recipe = coordinator.recipe(product_id).unwrap();
        assert_eq!(recipe.len(), 1);
        assert_eq!(recipe[0].required_quantity, 5);
    }

    #[test]
    fn test_remove_absent_entry_is_not_found() {
        let (coordinator, product_id, material_id) = coordinator_with_pair();

        let err = coordinator.remove_entry(product_id, material_id).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn test_remove_then_list_reflects_deletion() {
        let (coordinator, product_id, material_id) = coordinator_with_pair();
        coordinator
            .add_entry(
                product_id,
                RecipeEntryRequest {
                    raw_material_id: material_id,
                    required_quantity: 5,
                },
            )
            .unwrap();

        coordinator.remove_entry(product_id, material_id).unwrap();

        assert!(coordinator.recipe(product_id).unwrap().is_empty());
    }

    #[test]
    fn test_recipe_for_missing_product_is_not_found() {
        let (coordinator, _, _) = coordinator_with_pair();
        let unknown = Uuid::new_v4();

        let err = coordinator.recipe(unknown).unwrap_err();

        assert_eq!(err, CtpError::ProductNotFound(unknown));
    }
}
