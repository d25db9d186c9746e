//! 应用主消息枚举

use region_picker_core::types::FetchCompletion;

use super::{FormMessage, ModalMessage};

/// 应用主消息
#[derive(Debug)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 焦点移到下一个字段
    FocusNext,

    /// 焦点移到上一个字段
    FocusPrev,

    /// 表单相关消息
    Form(FormMessage),

    /// 弹窗相关消息
    Modal(ModalMessage),

    /// 后台查询完成
    FetchCompleted(FetchCompletion),

    /// 校验并显示提交摘要
    Submit,

    /// 切换界面语言
    CycleLanguage,

    /// 显示帮助
    ShowHelp,

    /// 清除状态消息
    ClearStatus,

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
