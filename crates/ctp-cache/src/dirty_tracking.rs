//! 髒標記追蹤

use std::collections::HashSet;
use uuid::Uuid;

/// 髒標記追蹤器
///
/// 記錄自上次計算以來配方被變更過的產品。目前任何髒標記都會使整份
/// 緩存結果失效；逐產品的增量重算可在此基礎上演進。
#[derive(Debug)]
pub struct DirtyTracker {
    dirty_products: HashSet<Uuid>,
}

impl DirtyTracker {
    /// 創建新的追蹤器
    pub fn new() -> Self {
        Self {
            dirty_products: HashSet::new(),
        }
    }

    /// 標記產品為髒
    pub fn mark_dirty(&mut self, product_id: Uuid) {
        self.dirty_products.insert(product_id);
    }

    /// 檢查產品是否為髒
    pub fn is_dirty(&self, product_id: Uuid) -> bool {
        self.dirty_products.contains(&product_id)
    }

    /// 檢查是否沒有任何髒標記
    pub fn is_empty(&self) -> bool {
        self.dirty_products.is_empty()
    }

    /// 清除所有髒標記
    pub fn clear(&mut self) {
        self.dirty_products.clear();
    }

    /// 獲取所有髒產品
    pub fn dirty_products(&self) -> Vec<Uuid> {
        self.dirty_products.iter().copied().collect()
    }
}

impl Default for DirtyTracker {
    fn default() -> Self {
        Self::new()
    }
}
