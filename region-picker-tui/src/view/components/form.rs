//! 表单：四个层级的搜索框、提交按钮和已选地址

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use unicode_width::UnicodeWidthStr;

use region_picker_core::SearchSelector;
use region_picker_core::types::HierarchyLevel;

use crate::i18n::t;
use crate::model::{App, Focus};
use crate::view::theme::{Styles, colors};

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let block = Block::default()
        .title(format!(" {} ", texts.form.title))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border(false));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // 省
            Constraint::Length(3), // 县市
            Constraint::Length(3), // 区
            Constraint::Length(3), // 村
            Constraint::Length(3), // 提交
            Constraint::Min(0),    // 已选地址
        ])
        .split(inner);

    for (row, selector) in rows.iter().zip(app.form.selectors()) {
        render_field(app, selector, frame, *row);
    }
    render_submit(app, frame, rows[4]);
    render_location(app, frame, rows[5]);
}

/// 单个层级的搜索框
fn render_field(app: &App, selector: &SearchSelector, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();
    let level = selector.level();
    let focused = app.focus == Focus::Level(level);

    let block = Block::default()
        .title(format!(" {} ", texts.level_name(level)))
        .borders(Borders::ALL)
        .border_style(Styles::border(focused));
    let inner = block.inner(area);

    let query = &selector.state().query;
    let line = if query.is_empty() {
        Line::from(Span::styled(placeholder(app, level), Styles::muted()))
    } else if selector.selected().is_some() {
        Line::from(vec![
            Span::styled("✓ ", Style::default().fg(c.success)),
            Span::styled(query.clone(), Style::default().fg(c.fg)),
        ])
    } else {
        Line::from(Span::styled(query.clone(), Style::default().fg(c.fg)))
    };
    frame.render_widget(Paragraph::new(line).block(block), area);

    // 光标停在输入末尾
    if focused && !app.modal.is_open() && inner.width > 0 {
        let offset = if selector.selected().is_some() {
            query.width() + 2
        } else {
            query.width()
        };
        let x = inner.x + u16::try_from(offset).unwrap_or(u16::MAX).min(inner.width - 1);
        frame.set_cursor_position(Position::new(x, inner.y));
    }
}

/// 空输入框的提示：上级未选时提示先选上级
fn placeholder(app: &App, level: HierarchyLevel) -> String {
    let texts = t();
    match level.parent() {
        Some(parent) if app.form.selector(parent).state().selected_id.is_none() => texts
            .form
            .waiting_for_parent
            .replace("{level}", texts.level_name(parent)),
        _ => texts
            .form
            .placeholder
            .replace("{level}", texts.level_name(level)),
    }
}

fn render_submit(app: &App, frame: &mut Frame, area: Rect) {
    let focused = app.focus == Focus::Submit;
    let complete = app.form.selection().is_complete();
    let c = colors();

    let style = if focused {
        Styles::selected()
    } else if complete {
        Style::default().fg(c.success).add_modifier(Modifier::BOLD)
    } else {
        Styles::muted()
    };

    let button = Paragraph::new(format!("[ {} ]", t().form.submit))
        .style(style)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Styles::border(focused)),
        );
    frame.render_widget(button, area);
}

fn render_location(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let selection = app.form.selection();
    let path = if selection.regions.is_empty() {
        Span::styled(texts.form.nothing_selected, Styles::muted())
    } else {
        Span::styled(selection.display_path(), Style::default().fg(colors().fg))
    };

    let paragraph = Paragraph::new(vec![
        Line::from(Span::styled(texts.form.location, Styles::title())),
        Line::from(path),
    ])
    .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}
