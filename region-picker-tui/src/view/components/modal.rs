//! 弹窗组件

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::i18n::t;
use crate::model::{App, Modal};
use crate::view::theme::{Styles, colors};

/// 渲染弹窗（如果有）
pub fn render(app: &App, frame: &mut Frame) {
    let Some(modal) = &app.modal.active else {
        return;
    };
    let texts = t();
    let c = colors();

    let (title, lines, border) = match modal {
        Modal::Help => {
            let lines = texts
                .modal
                .help_lines
                .iter()
                .map(|(key, desc)| {
                    Line::from(vec![
                        Span::styled(format!("{key:<18}"), Styles::hint_key()),
                        Span::styled(*desc, Style::default().fg(c.fg)),
                    ])
                })
                .collect::<Vec<_>>();
            (texts.modal.help_title, lines, c.border_focused)
        }
        Modal::Summary { path, ids } => {
            let mut lines = vec![
                Line::from(Span::styled(path.clone(), Styles::title())),
                Line::from(""),
            ];
            for (level, id) in ids.chain() {
                lines.push(Line::from(vec![
                    Span::styled(format!("{:<18}", texts.level_name(level)), Styles::muted()),
                    Span::styled(id, Style::default().fg(c.fg)),
                ]));
            }
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(texts.modal.summary_hint, Styles::muted())));
            (texts.modal.summary_title, lines, c.success)
        }
        Modal::Error { message } => (
            texts.modal.error_title,
            vec![Line::from(Span::styled(message.clone(), Style::default().fg(c.error)))],
            c.error,
        ),
    };

    let height = u16::try_from(lines.len()).unwrap_or(u16::MAX).saturating_add(2);
    let area = centered_rect(60, height, frame.area());

    let block = Block::default()
        .title(format!(" {title} "))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));

    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        area,
    );
}

/// 计算居中区域：宽度按百分比，高度按行数
fn centered_rect(percent_x: u16, height: u16, r: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(height.min(r.height)),
            Constraint::Fill(1),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
