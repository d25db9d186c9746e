//! 类型定义模块

mod fetch;
mod selection;
mod settings;

pub use fetch::{FetchCompletion, FetchPlan, FetchRequest, SkipReason};
pub use selection::{FormSelection, SelectedRegion, SelectionState, StoredRegionIds};
pub use settings::SelectorSettings;

// Re-export provider 库的公共类型
pub use region_picker_provider::{
    HierarchyLevel, LevelSpec, OptionQuery, PaginatedResponse, RegionOption,
};
