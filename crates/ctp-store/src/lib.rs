//! # CTP Store
//!
//! 存儲契約、參考實現與配方變更協調器

pub mod contracts;
pub mod coordinator;
pub mod memory;

// Re-export 主要類型
pub use contracts::{CatalogStore, RecipeRegistry, SnapshotSource};
pub use coordinator::{RecipeCoordinator, RecipeEntryRequest, RecipeEntryView};
pub use memory::InMemoryPlanningStore;
