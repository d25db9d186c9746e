//!
//! src/message/mod.rs
//! Message 层：事件消息定义
//!
//! 作为 Event → Update 之间的桥梁，
//! 相当于将形形色色的 Events 翻译成 Update 能够看懂的 Messages。
//!
//!
//! 有模块结构：
//!     src/message/mod.rs
//!         mod app;            // AppMessage：主消息
//!         mod form;           // FormMessage：作用于焦点层级的表单消息
//!         mod modal;          // ModalMessage：弹窗消息
//!
//!     除键盘事件外，后台查询的完成结果也以 `AppMessage::FetchCompleted`
//!     的形式进入 Update 层，与按键走同一条路径。
//!

mod app;
mod form;
mod modal;

pub use app::AppMessage;
pub use form::FormMessage;
pub use modal::ModalMessage;
