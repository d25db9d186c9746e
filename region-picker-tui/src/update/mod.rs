//!
//! src/update/mod.rs
//! Update 层：状态更新
//!
//! 接收 Message，修改 Model。所有依赖时间的操作都使用调用方传入的 `now`，
//! 防抖计时与键盘事件、查询完成共用同一时钟。
//!
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod form;           // 表单消息 → CascadeForm
//!         mod modal;          // 弹窗消息
//!
//!
//!     数据流：
//!         用户在区县框输入 "ja"
//!             ↓
//!         FormMessage::Input → CascadeForm::push_char（防抖开始计时）
//!             ↓
//!         主循环 tick：防抖到期 → FetchRequest → FetchDispatcher
//!             ↓
//!         AppMessage::FetchCompleted → CascadeForm::apply（过期票据被丢弃）
//!             ↓
//!         View 层渲染结果面板
//!

mod form;
mod modal;

use std::time::Instant;

use region_picker_core::types::HierarchyLevel;

use crate::i18n::{current_language, set_language, t};
use crate::message::AppMessage;
use crate::model::{App, Focus};

/// 处理应用消息，更新状态
pub fn update(app: &mut App, msg: AppMessage, now: Instant) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::FocusNext => {
            let target = app.focus.next();
            move_focus(app, target);
        }

        AppMessage::FocusPrev => {
            let target = app.focus.prev();
            move_focus(app, target);
        }

        AppMessage::Form(form_msg) => {
            form::update(app, form_msg, now);
        }

        AppMessage::Modal(modal_msg) => {
            modal::update(app, modal_msg);
        }

        AppMessage::FetchCompleted(completion) => {
            app.form.apply(completion);
        }

        AppMessage::Submit => submit(app),

        AppMessage::CycleLanguage => {
            set_language(current_language().next());
            app.set_status(t().status.language_changed);
        }

        AppMessage::ShowHelp => {
            app.modal.show_help();
        }

        AppMessage::ClearStatus => {
            app.clear_status();
        }

        AppMessage::Noop => {}
    }
}

/// 切换焦点，离开的层级按 `close_on_blur` 关闭面板
fn move_focus(app: &mut App, target: Focus) {
    if let Some(level) = app.focus.level()
        && app.form.blur(level)
    {
        app.cancel_fetches(&[level]);
    }
    app.focus = target;
}

/// 校验四级是否全部选中，通过则显示摘要弹窗
fn submit(app: &mut App) {
    let selection = app.form.selection();
    match selection.validate() {
        Ok(ids) => {
            app.clear_status();
            app.modal.show_summary(selection.display_path(), ids);
        }
        Err(e) => {
            log::warn!("submit rejected: {e}");
            let level = selection.first_missing().unwrap_or(HierarchyLevel::Province);
            let texts = t();
            app.set_status(
                texts
                    .status
                    .incomplete
                    .replace("{level}", texts.level_name(level)),
            );
            move_focus(app, Focus::Level(level));
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use region_picker_core::types::{FetchCompletion, RegionOption};

    use super::*;
    use crate::message::{FormMessage, ModalMessage};
    use crate::model::Modal;
    use region_picker_core::PanelState;

    fn type_text(app: &mut App, text: &str, now: Instant) {
        for c in text.chars() {
            update(app, AppMessage::Form(FormMessage::Input(c)), now);
        }
    }

    /// 输入、等待防抖、完成查询并选中第一项
    fn pick(app: &mut App, query: &str, option: RegionOption, now: Instant) -> Instant {
        type_text(app, query, now);
        let later = now + Duration::from_millis(600);
        let requests = app.form.tick(later);
        assert_eq!(requests.len(), 1, "expected one fetch for {query:?}");
        let Some(request) = requests.into_iter().next() else {
            return later;
        };
        update(
            app,
            AppMessage::FetchCompleted(FetchCompletion {
                level: request.level,
                ticket: request.ticket,
                result: Ok(vec![option]),
            }),
            later,
        );
        update(app, AppMessage::Form(FormMessage::Confirm), later);
        later
    }

    #[test]
    fn typing_then_confirm_commits_and_advances_focus() {
        let mut app = App::default();
        let now = Instant::now();
        pick(&mut app, "jawa", RegionOption::new("32", "Jawa Barat"), now);

        assert_eq!(
            app.form.selection().id(HierarchyLevel::Province),
            Some("32")
        );
        assert_eq!(app.focus, Focus::Level(HierarchyLevel::Regency));
        assert!(!app.form.selector(HierarchyLevel::Province).panel().is_open());
    }

    #[test]
    fn changing_parent_resets_children_and_cancels_their_fetches() {
        let mut app = App::default();
        let mut now = Instant::now();
        now = pick(&mut app, "jawa", RegionOption::new("32", "Jawa Barat"), now);
        now = pick(&mut app, "kota", RegionOption::new("3273", "Kota Bandung"), now);
        assert!(app.form.selection().id(HierarchyLevel::Regency).is_some());
        let _ = app.take_cancellations();

        // 重新搜索省份时下级保持不变，选中不同省份后才重置
        app.focus = Focus::Level(HierarchyLevel::Province);
        app.form.set_query(HierarchyLevel::Province, "", now);
        assert!(app.form.selection().regions.is_empty());
        assert!(app.form.selector(HierarchyLevel::Regency).selected().is_some());
        pick(&mut app, "bali", RegionOption::new("51", "Bali"), now);

        assert!(app.form.selection().id(HierarchyLevel::Regency).is_none());
        assert!(app.take_cancellations().contains(&HierarchyLevel::Regency));
    }

    #[test]
    fn down_arrow_opens_closed_panel() {
        let mut app = App::default();
        update(
            &mut app,
            AppMessage::Form(FormMessage::HighlightNext),
            Instant::now(),
        );
        assert!(app.form.selector(HierarchyLevel::Province).panel().is_open());
    }

    #[test]
    fn focus_change_closes_panel() {
        let mut app = App::default();
        let now = Instant::now();
        type_text(&mut app, "ja", now);
        assert!(app.form.selector(HierarchyLevel::Province).panel().is_open());

        update(&mut app, AppMessage::FocusNext, now);
        assert!(matches!(
            app.form.selector(HierarchyLevel::Province).panel().state(),
            PanelState::Closed
        ));
        assert_eq!(app.take_cancellations(), vec![HierarchyLevel::Province]);
    }

    #[test]
    fn incomplete_submit_focuses_missing_level() {
        let mut app = App::default();
        let now = Instant::now();
        pick(&mut app, "bali", RegionOption::new("51", "Bali"), now);

        update(&mut app, AppMessage::Submit, now);
        assert!(!app.modal.is_open());
        assert_eq!(app.focus, Focus::Level(HierarchyLevel::Regency));
        assert!(app.status_message.is_some());
    }

    #[test]
    fn complete_submit_confirms_and_quits() {
        let mut app = App::default();
        let mut now = Instant::now();
        now = pick(&mut app, "bali", RegionOption::new("51", "Bali"), now);
        now = pick(&mut app, "denpasar", RegionOption::new("5171", "Kota Denpasar"), now);
        now = pick(&mut app, "selatan", RegionOption::new("517101", "Denpasar Selatan"), now);
        now = pick(&mut app, "sesetan", RegionOption::new("5171011001", "Sesetan"), now);
        assert_eq!(app.focus, Focus::Submit);

        update(&mut app, AppMessage::Submit, now);
        assert!(
            matches!(&app.modal.active, Some(Modal::Summary { path, .. })
                if path == "Sesetan, Denpasar Selatan, Kota Denpasar, Bali"),
            "unexpected modal: {:?}",
            app.modal.active
        );

        update(&mut app, AppMessage::Modal(ModalMessage::Confirm), now);
        assert!(app.should_quit);
        assert!(
            matches!(&app.submitted, Some(ids) if ids.village_id.as_deref() == Some("5171011001")),
            "unexpected: {:?}",
            app.submitted
        );
    }

    #[test]
    fn stale_completion_is_ignored() {
        let mut app = App::default();
        let now = Instant::now();
        type_text(&mut app, "ja", now);
        let later = now + Duration::from_millis(600);
        let requests = app.form.tick(later);
        assert_eq!(requests.len(), 1);

        update(
            &mut app,
            AppMessage::FetchCompleted(FetchCompletion {
                level: HierarchyLevel::Province,
                ticket: 999,
                result: Ok(vec![RegionOption::new("31", "DKI Jakarta")]),
            }),
            later,
        );
        assert!(app.form.selector(HierarchyLevel::Province).panel().is_loading());
    }
}
