//! 应用主状态结构

use region_picker_core::CascadeForm;
use region_picker_core::types::{HierarchyLevel, LevelSpec, SelectorSettings, StoredRegionIds};

use super::{Focus, ModalState};

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 当前焦点字段
    pub focus: Focus,

    /// 四级联动表单
    pub form: CascadeForm,

    /// 状态栏消息
    pub status_message: Option<String>,

    /// 弹窗状态
    pub modal: ModalState,

    /// 确认提交的 ID，退出后输出
    pub submitted: Option<StoredRegionIds>,

    /// 在途查询已作废的层级，由主循环交给调度器中止
    cancellations: Vec<HierarchyLevel>,
}

impl App {
    /// 创建新的应用实例
    pub fn new(levels: Vec<LevelSpec>, settings: SelectorSettings) -> Self {
        Self {
            should_quit: false,
            focus: Focus::default(),
            form: CascadeForm::new(levels, settings),
            status_message: None,
            modal: ModalState::new(),
            submitted: None,
            cancellations: Vec::new(),
        }
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// 标记 `levels` 的在途查询为作废
    pub fn cancel_fetches(&mut self, levels: &[HierarchyLevel]) {
        self.cancellations.extend_from_slice(levels);
    }

    /// 取出待中止的层级
    pub fn take_cancellations(&mut self) -> Vec<HierarchyLevel> {
        std::mem::take(&mut self.cancellations)
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(LevelSpec::default_chain(), SelectorSettings::default())
    }
}
