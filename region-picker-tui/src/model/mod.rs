//!
//! src/model/mod.rs
//! Model 层：应用状态定义
//!
//! Model 层是应用状态的 “唯一真相来源”。
//! 这一层只包含数据结构；联动表单的状态机在 region-picker-core 的 `CascadeForm` 中。
//! 所有状态变更都通过 Update 层来触发。
//!
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;            // 主应用状态
//!         mod focus;          // 焦点状态（四个层级 + 提交按钮）
//!
//!         pub mod state;      // 弹窗状态
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、主应用状态（App）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!         pub struct App {
//!             pub should_quit: bool,                  // 退出标志
//!             pub focus: Focus,                       // 当前焦点
//!             pub form: CascadeForm,                  // 四级联动表单
//!             pub status_message: Option<String>,     // 状态栏消息
//!             pub modal: ModalState,                  // 弹窗状态
//!             pub submitted: Option<StoredRegionIds>, // 确认提交的结果
//!         }
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、焦点管理（Focus）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     Tab / Shift+Tab 在 省 → 县市 → 区 → 村 → 提交 之间循环。
//!     离开某一层级时调用 `CascadeForm::blur`，是否关闭结果面板由
//!     `close_on_blur` 配置决定。
//!

mod app;
mod focus;
pub mod state;

pub use app::App;
pub use focus::Focus;
pub use state::{Modal, ModalState};
