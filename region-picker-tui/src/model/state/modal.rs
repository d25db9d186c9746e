//! 弹窗状态

use region_picker_core::types::StoredRegionIds;

/// 弹窗类型，每个变体携带该弹窗的全部数据
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    /// 快捷键帮助
    Help,
    /// 提交前的地址确认
    Summary {
        /// 叶子在前的地址路径
        path: String,
        /// 将要提交的 ID
        ids: StoredRegionIds,
    },
    /// 错误提示
    Error { message: String },
}

/// 弹窗容器：`None` 表示无弹窗
#[derive(Debug, Default)]
pub struct ModalState {
    pub active: Option<Modal>,
}

impl ModalState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    pub fn show_help(&mut self) {
        self.active = Some(Modal::Help);
    }

    pub fn show_summary(&mut self, path: String, ids: StoredRegionIds) {
        self.active = Some(Modal::Summary { path, ids });
    }

    pub fn show_error(&mut self, message: impl Into<String>) {
        self.active = Some(Modal::Error {
            message: message.into(),
        });
    }

    pub fn close(&mut self) {
        self.active = None;
    }
}
