//! 事件处理器：把终端事件翻译成 [`AppMessage`]

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, FormMessage, ModalMessage};
use crate::model::{App, Focus};

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app), // 键盘事件
        _ => AppMessage::Noop, // 窗口大小改变时下一帧自动重绘
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 只处理 Press 事件，避免 Windows 终端上的重复按键
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    if DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    // 如果有弹窗打开，优先处理弹窗输入
    if app.modal.is_open() {
        return handle_modal_keys(key);
    }

    if DefaultKeymap::HELP.matches(&key) {
        return AppMessage::ShowHelp;
    }
    if DefaultKeymap::SUBMIT.matches(&key) {
        return AppMessage::Submit;
    }
    if DefaultKeymap::LANGUAGE.matches(&key) {
        return AppMessage::CycleLanguage;
    }
    if DefaultKeymap::FOCUS_NEXT.matches(&key) {
        return AppMessage::FocusNext;
    }
    // 部分终端发送 BackTab 时不带 SHIFT
    if DefaultKeymap::FOCUS_PREV.matches(&key) || key.code == KeyCode::BackTab {
        return AppMessage::FocusPrev;
    }
    if DefaultKeymap::CLEAR_ALL.matches(&key) {
        return AppMessage::Form(FormMessage::ClearAll);
    }

    match app.focus {
        Focus::Level(level) => handle_field_keys(key, app.form.selector(level).panel().is_open()),
        Focus::Submit => handle_submit_keys(key),
    }
}

/// 处理搜索框的按键
fn handle_field_keys(key: KeyEvent, panel_open: bool) -> AppMessage {
    if DefaultKeymap::CLEAR_FIELD.matches(&key) {
        return AppMessage::Form(FormMessage::Clear);
    }
    if DefaultKeymap::BACK.matches(&key) {
        return if panel_open {
            AppMessage::Form(FormMessage::Close)
        } else {
            AppMessage::ClearStatus
        };
    }
    if DefaultKeymap::NAV_DOWN.matches(&key) {
        return AppMessage::Form(FormMessage::HighlightNext);
    }
    if DefaultKeymap::NAV_UP.matches(&key) {
        return AppMessage::Form(FormMessage::HighlightPrev);
    }
    if DefaultKeymap::NAV_CONFIRM.matches(&key) {
        return AppMessage::Form(FormMessage::Confirm);
    }

    match key.code {
        KeyCode::Backspace => AppMessage::Form(FormMessage::Backspace),
        KeyCode::Char(c) if is_text_input(key.modifiers) => AppMessage::Form(FormMessage::Input(c)),
        _ => AppMessage::Noop,
    }
}

/// 处理提交按钮的按键
fn handle_submit_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::NAV_CONFIRM.matches(&key) {
        AppMessage::Submit
    } else if DefaultKeymap::BACK.matches(&key) {
        AppMessage::ClearStatus
    } else {
        AppMessage::Noop
    }
}

/// 处理弹窗的按键
fn handle_modal_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Esc => AppMessage::Modal(ModalMessage::Close),
        KeyCode::Enter => AppMessage::Modal(ModalMessage::Confirm),
        _ => AppMessage::Noop,
    }
}

/// 无修饰键或仅 Shift 时视为文本输入
fn is_text_input(modifiers: KeyModifiers) -> bool {
    modifiers.is_empty() || modifiers == KeyModifiers::SHIFT
}
