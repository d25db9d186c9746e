//! 翻译键定义
//!
//! 定义所有翻译文本的结构体，提供编译期类型检查。
//!
//! ## 分类标准
//!
//! 1. **按 UI 组件位置分类**：文本归属于它出现的 UI 组件
//! 2. **弹窗内容归 `modal.*`**：帮助、摘要与错误弹窗
//! 3. **跨组件复用归 `common.*`**：多处使用的通用词汇
//! 4. **键盘提示归 `hints.*`**：按键名称和操作提示
//!
//! 含 `{min}`、`{level}` 等占位符的文本由调用方替换。

use region_picker_core::types::HierarchyLevel;

/// 所有翻译文本的根结构
pub struct Translations {
    /// 通用文本（跨多处复用）
    pub common: CommonTexts,
    /// 键盘提示（按键名称 + 动作词）
    pub hints: HintTexts,
    /// 层级名称
    pub levels: LevelTexts,
    /// 表单文本
    pub form: FormTexts,
    /// 结果面板文本
    pub panel: PanelTexts,
    /// 弹窗文本
    pub modal: ModalTexts,
    /// 状态栏消息
    pub status: StatusTexts,
}

impl Translations {
    /// 层级的显示名称
    pub fn level_name(&self, level: HierarchyLevel) -> &'static str {
        match level {
            HierarchyLevel::Province => self.levels.province,
            HierarchyLevel::Regency => self.levels.regency,
            HierarchyLevel::District => self.levels.district,
            HierarchyLevel::Village => self.levels.village,
        }
    }
}

// ============================================================================
// 通用文本
// ============================================================================

/// 通用文本（跨多处复用的词汇）
pub struct CommonTexts {
    pub app_name: &'static str,
    pub confirm: &'static str,
    pub close: &'static str,
    pub quit: &'static str,
}

// ============================================================================
// 键盘提示
// ============================================================================

/// 键盘提示文本
pub struct HintTexts {
    /// 按键名称
    pub keys: KeyNames,
    /// 动作描述
    pub actions: ActionTexts,
}

/// 按键名称
pub struct KeyNames {
    pub enter: &'static str,
    pub esc: &'static str,
    pub tab: &'static str,
    pub arrows_ud: &'static str, // "↑↓"
    pub clear: &'static str,     // "Ctrl+U"
    pub help: &'static str,      // "F1"
    pub quit: &'static str,      // "Ctrl+C"
}

/// 动作描述（用于组合提示）
pub struct ActionTexts {
    pub next_field: &'static str,
    pub move_up_down: &'static str,
    pub select: &'static str,
    pub open: &'static str,
    pub close_panel: &'static str,
    pub clear: &'static str,
    pub submit: &'static str,
    pub help: &'static str,
}

// ============================================================================
// 层级
// ============================================================================

pub struct LevelTexts {
    pub province: &'static str,
    pub regency: &'static str,
    pub district: &'static str,
    pub village: &'static str,
}

// ============================================================================
// 表单
// ============================================================================

pub struct FormTexts {
    pub title: &'static str,
    /// 输入框为空时的占位文本，`{level}` 为层级名称
    pub placeholder: &'static str,
    /// 上级未选择时的占位文本，`{level}` 为上级名称
    pub waiting_for_parent: &'static str,
    pub submit: &'static str,
    pub location: &'static str,
    pub nothing_selected: &'static str,
}

// ============================================================================
// 结果面板
// ============================================================================

pub struct PanelTexts {
    /// 面板标题，`{level}` 为层级名称
    pub title: &'static str,
    pub closed: &'static str,
    /// `{min}` 为最小字符数
    pub query_too_short: &'static str,
    /// `{level}` 为上级名称
    pub missing_parent: &'static str,
    pub loading: &'static str,
    pub empty: &'static str,
    /// 错误前缀，后接数据源返回的消息
    pub error: &'static str,
}

// ============================================================================
// 弹窗
// ============================================================================

pub struct ModalTexts {
    pub help_title: &'static str,
    pub help_lines: &'static [(&'static str, &'static str)],
    pub summary_title: &'static str,
    pub summary_hint: &'static str,
    pub error_title: &'static str,
}

// ============================================================================
// 状态栏
// ============================================================================

pub struct StatusTexts {
    /// `{level}` 为层级名称
    pub selected: &'static str,
    /// `{level}` 为被重置的最上层下级
    pub descendants_reset: &'static str,
    /// `{level}` 为第一个未选择的层级
    pub incomplete: &'static str,
    pub cleared: &'static str,
    pub seeded: &'static str,
    pub seed_failed: &'static str,
    pub language_changed: &'static str,
}
