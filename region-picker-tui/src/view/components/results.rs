//! 结果面板：焦点层级的查询结果

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};

use region_picker_core::types::{HierarchyLevel, RegionOption, SkipReason};
use region_picker_core::{PanelState, SearchSelector};

use crate::i18n::t;
use crate::model::App;
use crate::view::theme::{Styles, colors};

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();

    // 焦点在提交按钮时展示村级面板（通常已关闭）
    let level = app.focus.level().unwrap_or(HierarchyLevel::Village);
    let selector = app.form.selector(level);

    let block = Block::default()
        .title(format!(
            " {} ",
            texts
                .panel
                .title
                .replace("{level}", texts.level_name(level))
        ))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border(selector.panel().is_open()));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if let PanelState::Results(options) = selector.panel().state() {
        render_options(selector, options, frame, inner);
        return;
    }

    let message = panel_message(app, selector);
    frame.render_widget(Paragraph::new(message).wrap(Wrap { trim: true }), inner);
}

/// 非列表状态下的提示文本
fn panel_message(app: &App, selector: &SearchSelector) -> Line<'static> {
    let texts = t();
    let c = colors();
    match selector.panel().state() {
        PanelState::Closed | PanelState::Results(_) => {
            Line::from(Span::styled(texts.panel.closed, Styles::muted()))
        }
        PanelState::Prompt(SkipReason::QueryTooShort) => Line::from(Span::styled(
            texts
                .panel
                .query_too_short
                .replace("{min}", &app.form.settings().min_query_len.to_string()),
            Styles::muted(),
        )),
        PanelState::Prompt(SkipReason::MissingParent) => {
            let parent = selector.level().parent().unwrap_or(HierarchyLevel::Province);
            Line::from(Span::styled(
                texts
                    .panel
                    .missing_parent
                    .replace("{level}", texts.level_name(parent)),
                Style::default().fg(c.warning),
            ))
        }
        PanelState::Loading => {
            Line::from(Span::styled(texts.panel.loading, Style::default().fg(c.warning)))
        }
        PanelState::Empty => Line::from(Span::styled(texts.panel.empty, Styles::muted())),
        PanelState::Error(message) => Line::from(vec![
            Span::styled(format!("{}: ", texts.panel.error), Style::default().fg(c.error)),
            Span::styled(message.clone(), Style::default().fg(c.fg)),
        ]),
    }
}

fn render_options(
    selector: &SearchSelector,
    options: &[RegionOption],
    frame: &mut Frame,
    area: Rect,
) {
    let c = colors();
    let committed = selector.selected().map(|o| o.id.as_str());

    let items: Vec<ListItem> = options
        .iter()
        .map(|option| {
            let marker = if committed == Some(option.id.as_str()) {
                "✓ "
            } else {
                "  "
            };
            ListItem::new(Line::from(vec![
                Span::styled(marker, Style::default().fg(c.success)),
                Span::styled(option.name.clone(), Style::default().fg(c.fg)),
                Span::styled(format!("  {}", option.id), Styles::muted()),
            ]))
        })
        .collect();

    let list = List::new(items).highlight_style(Styles::selected());
    let mut state = ListState::default().with_selected(Some(selector.panel().highlighted()));
    frame.render_stateful_widget(list, area, &mut state);
}
