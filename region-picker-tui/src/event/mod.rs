//!
//! src/event/mod.rs
//! Event 层：事件处理
//!
//! 负责将键盘输入事件转换为 Message。
//!
//!
//! 有模块结构：
//!     src/event/mod.rs
//!         mod handler;        // 事件处理器
//!         mod keymap;         // 快捷键映射
//!
//!
//!     · poll_event      事件轮询，受 ~/app.rs 调用，最长等待 timeout
//!
//!     · handle_event    事件分发
//!
//!         判断顺序：
//!             - Ctrl+C 任何时候都退出
//!             - 有弹窗打开时，只接受 Esc / Enter
//!             - 全局快捷键（F1、Alt+S、Alt+L、Tab、Alt+X）
//!             - 焦点位于搜索框：字符输入、↑↓、Enter、Esc、Ctrl+U
//!             - 焦点位于提交按钮：Enter
//!
//!         搜索框接收所有可打印字符，因此全局快捷键都不是单个字母。
//!

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
