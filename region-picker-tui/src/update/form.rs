//! 表单消息处理

use std::time::Instant;

use region_picker_core::types::HierarchyLevel;

use crate::i18n::t;
use crate::message::FormMessage;
use crate::model::{App, Focus};

/// 处理作用于焦点层级的表单消息
pub fn update(app: &mut App, msg: FormMessage, now: Instant) {
    if let FormMessage::ClearAll = msg {
        app.form.clear_all();
        app.cancel_fetches(&HierarchyLevel::ALL);
        app.focus = Focus::default();
        app.set_status(t().status.cleared);
        return;
    }

    let Focus::Level(level) = app.focus else {
        return;
    };

    match msg {
        FormMessage::Input(c) => app.form.push_char(level, c, now),
        FormMessage::Backspace => app.form.backspace(level, now),
        FormMessage::Close => app.form.close(level),
        FormMessage::HighlightNext => {
            if app.form.selector(level).panel().is_open() {
                app.form.highlight_next(level);
            } else {
                app.form.open(level, now);
            }
        }
        FormMessage::HighlightPrev => app.form.highlight_prev(level),
        FormMessage::Confirm => confirm(app, level, now),
        FormMessage::Clear => {
            app.form.clear(level);
            app.cancel_fetches(&[level]);
            app.cancel_fetches(level.descendants());
        }
        FormMessage::ClearAll => {}
    }
}

/// Enter：面板打开时选中高亮项，否则打开面板
fn confirm(app: &mut App, level: HierarchyLevel, now: Instant) {
    if !app.form.selector(level).panel().is_open() {
        app.form.open(level, now);
        return;
    }

    let Some(reset) = app.form.confirm(level) else {
        return;
    };
    let texts = t();
    if reset && let Some(child) = level.child() {
        app.cancel_fetches(level.descendants());
        app.set_status(
            texts
                .status
                .descendants_reset
                .replace("{level}", texts.level_name(child)),
        );
    } else {
        app.set_status(
            texts
                .status
                .selected
                .replace("{level}", texts.level_name(level)),
        );
    }

    // 选中后进入下一个字段
    app.focus = Focus::Level(level).next();
}
