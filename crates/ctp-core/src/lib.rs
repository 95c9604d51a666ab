//! # CTP Core
//!
//! 核心資料模型與類型定義

pub mod material;
pub mod product;
pub mod recipe;
pub mod snapshot;

// Re-export 主要類型
pub use material::RawMaterial;
pub use product::Product;
pub use recipe::{RecipeEntry, RecipeKey};
pub use snapshot::PlanningSnapshot;

use uuid::Uuid;

/// CTP 錯誤類型
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CtpError {
    #[error("找不到產品: {0}")]
    ProductNotFound(Uuid),

    #[error("找不到原料: {0}")]
    MaterialNotFound(Uuid),

    #[error("找不到配方項: 產品 {product_id} / 原料 {raw_material_id}")]
    EntryNotFound {
        product_id: Uuid,
        raw_material_id: Uuid,
    },

    #[error("配方項已存在: 產品 {product_id} / 原料 {raw_material_id}")]
    DuplicateEntry {
        product_id: Uuid,
        raw_material_id: Uuid,
    },

    #[error("無效的單位需求量: {0}（必須 ≥ 1）")]
    InvalidQuantity(u64),

    #[error("名稱不可為空")]
    EmptyName,

    #[error("存儲錯誤: {0}")]
    Internal(String),
}

/// 錯誤分類（供呼叫端映射為 404 / 400 / 409 / 500）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    InvalidArgument,
    Conflict,
    Internal,
}

impl CtpError {
    /// 獲取錯誤分類
    pub fn kind(&self) -> ErrorKind {
        match self {
            CtpError::ProductNotFound(_)
            | CtpError::MaterialNotFound(_)
            | CtpError::EntryNotFound { .. } => ErrorKind::NotFound,
            CtpError::DuplicateEntry { .. } => ErrorKind::Conflict,
            CtpError::InvalidQuantity(_) | CtpError::EmptyName => ErrorKind::InvalidArgument,
            CtpError::Internal(_) => ErrorKind::Internal,
        }
    }
}

pub type Result<T> = std::result::Result<T, CtpError>;
