//!
//! src/view/mod.rs
//! View 层：UI 渲染
//!
//! 只读取 Model，不修改任何状态。
//!
//!     ┌ 标题栏 ─────────────────────────────────────────────┐
//!     │ ┌ 表单 ──────────────┐ ┌ 结果面板 ────────────────┐ │
//!     │ │ 省 / 县市 / 区 / 村 │ │ 焦点层级的查询结果        │ │
//!     │ │ [提交]             │ │                          │ │
//!     │ │ 已选地址            │ │                          │ │
//!     │ └────────────────────┘ └──────────────────────────┘ │
//!     └ 状态栏 ─────────────────────────────────────────────┘
//!

mod components;
mod layout;
pub mod theme;

pub use layout::render;
