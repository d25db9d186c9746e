//! 底部状态栏组件

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::i18n::t;
use crate::model::{App, Focus};
use crate::view::theme::Styles;

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    // 根据当前焦点生成快捷键提示
    let hints = get_hints(app);

    let mut spans = Vec::new();
    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    // 如果有状态消息，显示在右侧
    if let Some(ref msg) = app.status_message {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(msg.clone(), Style::default().fg(Color::Yellow)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Styles::statusbar());
    frame.render_widget(paragraph, area);
}

/// 根据当前状态生成快捷键提示
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let texts = t();
    let keys = &texts.hints.keys;
    let actions = &texts.hints.actions;

    if app.modal.is_open() {
        return vec![
            (keys.enter, texts.common.confirm),
            (keys.esc, texts.common.close),
        ];
    }

    let mut hints = vec![(keys.tab, actions.next_field)];

    match app.focus {
        Focus::Level(level) => {
            if app.form.selector(level).panel().is_open() {
                hints.push((keys.arrows_ud, actions.move_up_down));
                hints.push((keys.enter, actions.select));
                hints.push((keys.esc, actions.close_panel));
            } else {
                hints.push((keys.enter, actions.open));
            }
            hints.push((keys.clear, actions.clear));
        }
        Focus::Submit => {
            hints.push((keys.enter, actions.submit));
        }
    }

    hints.push((keys.help, actions.help));
    hints.push((keys.quit, texts.common.quit));

    hints
}
