//! Cascading searchable selector
//!
//! [`SearchSelector`] is one level of the picker: search input, debouncer,
//! result panel and the selection it commits. [`CascadeForm`] chains one
//! selector per [`HierarchyLevel`] and owns the dependent reset.
//!
//! Everything here is synchronous and takes the current [`Instant`] as an
//! argument; fetches leave as [`FetchRequest`]s and come back as
//! [`FetchCompletion`](crate::types::FetchCompletion)s.

mod cascade;
mod debounce;
mod panel;

pub use cascade::CascadeForm;
pub use debounce::Debouncer;
pub use panel::{PanelState, ResultPanel};

use std::time::Instant;

use region_picker_provider::{HierarchyLevel, LevelSpec, RegionOption};

use crate::error::CoreResult;
use crate::types::{SelectionState, SelectorSettings, SkipReason};

/// One level of the cascading picker.
#[derive(Debug, Clone)]
pub struct SearchSelector {
    spec: LevelSpec,
    state: SelectionState,
    panel: ResultPanel,
    debouncer: Debouncer<String>,
    min_query_len: usize,
    close_on_blur: bool,
    /// 下一张票据，单调递增
    next_ticket: u64,
    /// 仅接受这张票据的结果
    in_flight: Option<u64>,
    /// 最近一次提交的选项；输入不会清除它，用于判断重新提交的是否为同一 ID
    committed: Option<RegionOption>,
}

impl SearchSelector {
    pub fn new(spec: LevelSpec, settings: &SelectorSettings) -> Self {
        Self {
            spec,
            state: SelectionState::default(),
            panel: ResultPanel::default(),
            debouncer: Debouncer::new(settings.debounce()),
            min_query_len: settings.min_query_len,
            close_on_blur: settings.close_on_blur,
            next_ticket: 1,
            in_flight: None,
            committed: None,
        }
    }

    pub fn level(&self) -> HierarchyLevel {
        self.spec.level
    }

    pub fn spec(&self) -> &LevelSpec {
        &self.spec
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn panel(&self) -> &ResultPanel {
        &self.panel
    }

    /// The committed option, only while `selected_id` is set.
    pub fn selected(&self) -> Option<&RegionOption> {
        self.state.selected_id.as_ref()?;
        self.committed.as_ref()
    }

    /// Ticket whose completion will be accepted, if a fetch is in flight.
    pub fn in_flight_ticket(&self) -> Option<u64> {
        self.in_flight
    }

    /// Next debounce deadline.
    pub fn deadline(&self) -> Option<Instant> {
        self.debouncer.deadline()
    }

    fn is_long_enough(&self, query: &str) -> bool {
        query.chars().count() >= self.min_query_len
    }

    // ===== 输入 =====

    /// Replace the query text (user typing).
    ///
    /// Clears this level's `selected_id` and opens the panel. Descendant levels
    /// are left alone; they only reset when a different option is committed.
    ///
    /// A long enough query that differs from `committed_query` puts the panel
    /// into `Loading` right away and drops the in-flight ticket, so rows of an
    /// earlier query are never shown (or committed) for the new text.
    pub fn set_query(&mut self, query: impl Into<String>, now: Instant) {
        let query = query.into();
        self.state.selected_id = None;
        self.state.is_open = true;

        if self.is_long_enough(&query) {
            if query != self.state.committed_query {
                self.in_flight = None;
                self.panel.start_loading();
            } else if self.in_flight.is_none()
                && matches!(
                    self.panel.state(),
                    PanelState::Loading | PanelState::Prompt(_) | PanelState::Closed
                )
            {
                // 回到已落定的查询但结果已丢弃：允许再次发出同一查询
                self.debouncer.forget();
                self.panel.start_loading();
            }
            self.debouncer.push(query.clone(), now);
        } else {
            self.debouncer.reset();
            self.in_flight = None;
            self.panel.prompt(SkipReason::QueryTooShort);
        }
        self.state.query = query;
    }

    pub fn push_char(&mut self, ch: char, now: Instant) {
        let mut query = self.state.query.clone();
        query.push(ch);
        self.set_query(query, now);
    }

    pub fn backspace(&mut self, now: Instant) {
        let mut query = self.state.query.clone();
        query.pop();
        self.set_query(query, now);
    }

    /// Open the panel (focus / explicit open). A long enough query is fetched
    /// on the next poll without waiting for the debounce delay.
    pub fn open(&mut self, now: Instant) {
        if self.panel.is_open() {
            return;
        }
        self.state.is_open = true;
        if self.is_long_enough(&self.state.query) {
            self.debouncer.forget();
            self.debouncer.push_now(self.state.query.clone(), now);
            self.panel.start_loading();
        } else {
            self.panel.prompt(SkipReason::QueryTooShort);
        }
    }

    /// Close the panel without committing anything.
    pub fn close(&mut self) {
        self.state.is_open = false;
        self.panel.close();
        self.debouncer.reset();
        self.in_flight = None;
    }

    /// Focus left this level. Returns whether the panel was closed.
    pub fn blur(&mut self) -> bool {
        if self.close_on_blur && self.panel.is_open() {
            self.close();
            true
        } else {
            false
        }
    }

    // ===== 查询生命周期 =====

    /// Settled query, if the debounce deadline has passed.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        let query = self.debouncer.poll(now)?;
        self.state.committed_query.clone_from(&query);
        Some(query)
    }

    /// Issue a ticket for a fetch about to be dispatched.
    pub fn begin_fetch(&mut self) -> u64 {
        let ticket = self.next_ticket;
        self.next_ticket += 1;
        self.in_flight = Some(ticket);
        self.panel.start_loading();
        ticket
    }

    /// The settled query was refused by the skip rules.
    pub fn skip(&mut self, reason: SkipReason) {
        self.in_flight = None;
        self.debouncer.forget();
        if self.panel.is_open() {
            self.panel.prompt(reason);
        }
    }

    /// Apply a fetch result. Returns `false` for stale tickets.
    pub fn apply(&mut self, ticket: u64, result: CoreResult<Vec<RegionOption>>) -> bool {
        if self.in_flight != Some(ticket) {
            return false;
        }
        self.in_flight = None;
        let result = result.map_err(|e| {
            // 失败后允许同一查询再次触发
            self.debouncer.forget();
            e.to_string()
        });
        self.panel.finish(result)
    }

    // ===== 选择 =====

    /// Commit `option`. Returns whether the committed id changed.
    pub fn select(&mut self, option: RegionOption) -> bool {
        let changed = self.committed.as_ref().map(|c| c.id.as_str()) != Some(option.id.as_str());
        self.state.selected_id = Some(option.id.clone());
        self.state.query.clone_from(&option.name);
        self.state.committed_query.clone_from(&option.name);
        self.close();
        self.committed = Some(option);
        changed
    }

    /// Reset to an empty, closed selector. Returns whether anything was committed.
    pub fn clear(&mut self) -> bool {
        let had_commit = self.committed.is_some();
        self.state = SelectionState::default();
        self.committed = None;
        self.close();
        had_commit
    }

    pub fn highlight_next(&mut self) {
        self.panel.highlight_next();
    }

    pub fn highlight_prev(&mut self) {
        self.panel.highlight_prev();
    }

    pub fn highlighted(&self) -> Option<&RegionOption> {
        self.panel.highlighted_option()
    }
}
