//! 弹窗消息

/// 弹窗消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalMessage {
    /// 关闭弹窗
    Close,
    /// 确认（摘要弹窗中为提交）
    Confirm,
}
