//! # CTP — 生產可行性引擎
//!
//! 單層 capable-to-promise：給定產品目錄、各產品的物料清單與目前
//! 原料庫存，估算各產品的最大可生產數量與對應價值。
//!
//! - [`ctp_core`] — 資料模型、快照、錯誤類型
//! - [`ctp_calc`] — 可行性計算器與建議彙總器（純讀取路徑）
//! - [`ctp_store`] — 存儲契約、記憶體參考存儲、配方變更協調器
//! - [`ctp_cache`] — 建議緩存與對外服務門面

pub use ctp_cache::{DirtyTracker, PlanningService};
pub use ctp_calc::{
    FeasibilityCalculator, FeasibilityEstimate, FeasibilityOutcome, ProductionSuggestion,
    SuggestionAggregator, SuggestionResult, SuggestionWarning, WarningSeverity,
};
pub use ctp_core::{
    CtpError, ErrorKind, PlanningSnapshot, Product, RawMaterial, RecipeEntry, RecipeKey, Result,
};
pub use ctp_store::{
    CatalogStore, InMemoryPlanningStore, RecipeCoordinator, RecipeEntryRequest, RecipeEntryView,
    RecipeRegistry, SnapshotSource,
};
