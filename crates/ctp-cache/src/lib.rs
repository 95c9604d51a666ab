//! # CTP Cache
//!
//! 建議結果緩存與對外服務門面

pub mod dirty_tracking;
pub mod service;

// Re-export 主要類型
pub use dirty_tracking::DirtyTracker;
pub use service::PlanningService;
