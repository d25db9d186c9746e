//! 表单字段消息（作用于当前焦点层级）

/// 表单消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMessage {
    /// 输入字符
    Input(char),
    /// 删除最后一个字符
    Backspace,
    /// 关闭结果面板
    Close,
    /// 高亮下一项（面板关闭时打开面板）
    HighlightNext,
    /// 高亮上一项
    HighlightPrev,
    /// 选中高亮项（面板关闭时打开面板）
    Confirm,
    /// 清空当前层级及其下级
    Clear,
    /// 清空整个表单
    ClearAll,
}
