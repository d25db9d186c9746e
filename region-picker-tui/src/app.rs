//!
//! app.rs
//! 应用主循环
//!
//! 主循环在键盘事件、防抖到期和查询完成之间交替：
//!
//! loop {
//!
//!     terminal.draw(|f| view::render(&app, f))       // 渲染 UI
//!     if app.should_quit { break }                    // 检查是否应该退出
//!     poll_event(timeout)                             // 等待输入，最长到下一个防抖截止时间
//!     update::update(&mut app, msg, now)              // 更新状态
//!     dispatcher.cancel(...)                          // 中止已作废层级的在途查询
//!     dispatcher.dispatch_all(form.tick(now))         // 派发防抖落定的查询
//!     completions.try_recv() → FetchCompleted         // 收取完成的查询
//! }

use std::time::{Duration, Instant};

use anyhow::Result;
use tokio::sync::mpsc::UnboundedReceiver;

use region_picker_core::FetchDispatcher;
use region_picker_core::types::FetchCompletion;

use crate::event;
use crate::message::AppMessage;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// 无事件时的最长等待
const IDLE_POLL: Duration = Duration::from_millis(100);

/// 运行应用主循环
pub fn run(
    terminal: &mut Term,
    app: &mut App,
    dispatcher: &mut FetchDispatcher,
    completions: &mut UnboundedReceiver<FetchCompletion>,
) -> Result<()> {
    loop {
        // 1. 渲染 UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 2. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 3. 轮询事件，最长等到下一个防抖截止时间
        if let Some(event) = event::poll_event(poll_timeout(app, Instant::now()))? {
            let msg = event::handle_event(event, app);
            update::update(app, msg, Instant::now());
        }

        // 4. 中止已作废的查询
        for level in app.take_cancellations() {
            dispatcher.cancel(level);
        }

        // 5. 派发防抖落定的查询
        dispatcher.dispatch_all(app.form.tick(Instant::now()));

        // 6. 收取完成的查询
        while let Ok(completion) = completions.try_recv() {
            update::update(app, AppMessage::FetchCompleted(completion), Instant::now());
        }
    }

    dispatcher.cancel_all();
    Ok(())
}

/// 距下一个防抖截止时间的等待时长，不超过 [`IDLE_POLL`]
fn poll_timeout(app: &App, now: Instant) -> Duration {
    app.form
        .next_deadline()
        .map_or(IDLE_POLL, |deadline| {
            deadline.saturating_duration_since(now).min(IDLE_POLL)
        })
}
