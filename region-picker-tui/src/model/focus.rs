//! 焦点状态定义

use region_picker_core::types::HierarchyLevel;

/// 当前获得焦点的表单字段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// 某一层级的搜索框
    Level(HierarchyLevel),
    /// 提交按钮
    Submit,
}

impl Default for Focus {
    fn default() -> Self {
        Focus::Level(HierarchyLevel::Province)
    }
}

impl Focus {
    /// 按 Tab 顺序的下一个字段（循环）
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Focus::Level(level) => level.child().map_or(Focus::Submit, Focus::Level),
            Focus::Submit => Focus::default(),
        }
    }

    /// 按 Tab 顺序的上一个字段（循环）
    #[must_use]
    pub fn prev(self) -> Self {
        match self {
            Focus::Level(level) => level.parent().map_or(Focus::Submit, Focus::Level),
            Focus::Submit => Focus::Level(HierarchyLevel::Village),
        }
    }

    /// 焦点所在的层级
    pub fn level(self) -> Option<HierarchyLevel> {
        match self {
            Focus::Level(level) => Some(level),
            Focus::Submit => None,
        }
    }
}
