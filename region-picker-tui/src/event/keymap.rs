//! 快捷键配置

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// 快捷键绑定
#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub modifiers: KeyModifiers,
    pub code: KeyCode,
}

impl KeyBinding {
    pub const fn new(modifiers: KeyModifiers, code: KeyCode) -> Self {
        Self { modifiers, code }
    }

    pub const fn key(code: KeyCode) -> Self {
        Self::new(KeyModifiers::NONE, code)
    }

    pub const fn alt(code: KeyCode) -> Self {
        Self::new(KeyModifiers::ALT, code)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(KeyModifiers::CONTROL, code)
    }

    /// 检查按键事件是否匹配此快捷键绑定
    pub fn matches(&self, key: &KeyEvent) -> bool {
        key.modifiers == self.modifiers && key.code == self.code
    }
}

/// 默认快捷键配置
///
/// 搜索框接收所有可打印字符，全局快捷键只能使用功能键或组合键。
pub struct DefaultKeymap;

impl DefaultKeymap {
    // 全局
    pub const FORCE_QUIT: KeyBinding = KeyBinding::ctrl(KeyCode::Char('c'));
    pub const HELP: KeyBinding = KeyBinding::key(KeyCode::F(1));
    pub const BACK: KeyBinding = KeyBinding::key(KeyCode::Esc);
    pub const SUBMIT: KeyBinding = KeyBinding::alt(KeyCode::Char('s'));
    pub const LANGUAGE: KeyBinding = KeyBinding::alt(KeyCode::Char('l'));

    // 字段切换
    pub const FOCUS_NEXT: KeyBinding = KeyBinding::key(KeyCode::Tab);
    pub const FOCUS_PREV: KeyBinding = KeyBinding::new(KeyModifiers::SHIFT, KeyCode::BackTab);

    // 结果面板
    pub const NAV_UP: KeyBinding = KeyBinding::key(KeyCode::Up);
    pub const NAV_DOWN: KeyBinding = KeyBinding::key(KeyCode::Down);
    pub const NAV_CONFIRM: KeyBinding = KeyBinding::key(KeyCode::Enter);

    // 清空
    pub const CLEAR_FIELD: KeyBinding = KeyBinding::ctrl(KeyCode::Char('u'));
    pub const CLEAR_ALL: KeyBinding = KeyBinding::alt(KeyCode::Char('x'));
}
