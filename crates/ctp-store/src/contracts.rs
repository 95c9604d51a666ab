//! 存儲契約
//!
//! 目錄與配方的持久層由外部應用擁有；本引擎只透過這組同步契約
//! 讀寫。讀取路徑一律經由 [`SnapshotSource`] 取得單一一致快照。

use uuid::Uuid;

use ctp_core::{PlanningSnapshot, Product, RawMaterial, RecipeEntry, Result};

/// 目錄存儲：產品與原料的讀取面
pub trait CatalogStore {
    /// 依ID取得產品
    fn product(&self, id: Uuid) -> Result<Product>;

    /// 列出所有產品（目錄順序，對相同內容確定）
    fn products(&self) -> Vec<Product>;

    /// 依ID取得原料
    fn raw_material(&self, id: Uuid) -> Result<RawMaterial>;

    /// 列出所有原料
    fn raw_materials(&self) -> Vec<RawMaterial>;
}

/// 配方登記處：物料清單邊的讀寫面
pub trait RecipeRegistry {
    /// 列出某產品的所有配方項
    fn entries_for_product(&self, product_id: Uuid) -> Vec<RecipeEntry>;

    /// 創建配方項
    ///
    /// 對 (產品, 原料) 唯一鍵做 compare-and-set：兩個並發創建恰好
    /// 一個成功、一個得到 DuplicateEntry，不會產生兩筆或互相覆蓋。
    /// 引用不存在的產品/原料時以 NotFound 拒絕。
    fn create_entry(&self, entry: RecipeEntry) -> Result<RecipeEntry>;

    /// 刪除配方項；不存在時回 EntryNotFound
    fn delete_entry(&self, product_id: Uuid, raw_material_id: Uuid) -> Result<()>;
}

/// 快照來源：單一一致讀取
pub trait SnapshotSource {
    /// 擷取目錄與配方的一致快照
    ///
    /// 計算途中被刪除的配方項要嘛完整計入、要嘛完整排除，不得部分
    /// 反映。
    fn snapshot(&self) -> PlanningSnapshot;
}
