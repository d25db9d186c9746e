//! 级联表单：省 → 县市 → 区 → 村，负责依赖重置

use std::time::Instant;

use region_picker_provider::{HierarchyLevel, LevelSpec, RegionOption};

use crate::types::{
    FetchCompletion, FetchPlan, FetchRequest, FormSelection, SelectedRegion, SelectorSettings,
};

use super::SearchSelector;

/// Four [`SearchSelector`]s chained root first.
///
/// Committing a different option at a level, or clearing it, resets every
/// descendant before any descendant fetch can be issued. Typing at a level only
/// clears that level's own `selected_id`, which in turn blocks descendant
/// fetches through the missing-parent skip rule.
#[derive(Debug, Clone)]
pub struct CascadeForm {
    /// 按层级深度排列，长度恒为 4
    selectors: Vec<SearchSelector>,
    settings: SelectorSettings,
}

impl CascadeForm {
    /// Build a form for `levels`; levels missing from the list use
    /// [`LevelSpec::default_for`].
    pub fn new(levels: Vec<LevelSpec>, settings: SelectorSettings) -> Self {
        let mut specs: Vec<LevelSpec> = HierarchyLevel::ALL
            .iter()
            .map(|level| LevelSpec::default_for(*level))
            .collect();
        for spec in levels {
            let depth = spec.level.depth();
            specs[depth] = spec;
        }
        let selectors = specs
            .into_iter()
            .map(|spec| SearchSelector::new(spec, &settings))
            .collect();
        Self {
            selectors,
            settings,
        }
    }

    pub fn settings(&self) -> &SelectorSettings {
        &self.settings
    }

    pub fn selector(&self, level: HierarchyLevel) -> &SearchSelector {
        &self.selectors[level.depth()]
    }

    pub fn selectors(&self) -> &[SearchSelector] {
        &self.selectors
    }

    fn selector_mut(&mut self, level: HierarchyLevel) -> &mut SearchSelector {
        &mut self.selectors[level.depth()]
    }

    // ===== 输入 =====

    pub fn push_char(&mut self, level: HierarchyLevel, ch: char, now: Instant) {
        self.selector_mut(level).push_char(ch, now);
    }

    pub fn backspace(&mut self, level: HierarchyLevel, now: Instant) {
        self.selector_mut(level).backspace(now);
    }

    pub fn set_query(&mut self, level: HierarchyLevel, query: impl Into<String>, now: Instant) {
        self.selector_mut(level).set_query(query, now);
    }

    pub fn open(&mut self, level: HierarchyLevel, now: Instant) {
        self.selector_mut(level).open(now);
    }

    pub fn close(&mut self, level: HierarchyLevel) {
        self.selector_mut(level).close();
    }

    pub fn blur(&mut self, level: HierarchyLevel) -> bool {
        self.selector_mut(level).blur()
    }

    pub fn highlight_next(&mut self, level: HierarchyLevel) {
        self.selector_mut(level).highlight_next();
    }

    pub fn highlight_prev(&mut self, level: HierarchyLevel) {
        self.selector_mut(level).highlight_prev();
    }

    // ===== 选择与重置 =====

    /// Commit `option` at `level`. Returns whether descendants were reset.
    pub fn select(&mut self, level: HierarchyLevel, option: RegionOption) -> bool {
        log::debug!("[form] select {level} {} ({})", option.id, option.name);
        let changed = self.selector_mut(level).select(option);
        if changed {
            self.reset_descendants(level);
        }
        changed
    }

    /// Commit the highlighted row. `None` when nothing is highlighted,
    /// otherwise whether descendants were reset.
    pub fn confirm(&mut self, level: HierarchyLevel) -> Option<bool> {
        let option = self.selector(level).highlighted()?.clone();
        Some(self.select(level, option))
    }

    /// Clear `level` and reset every descendant.
    pub fn clear(&mut self, level: HierarchyLevel) {
        log::debug!("[form] clear {level}");
        self.selector_mut(level).clear();
        self.reset_descendants(level);
    }

    /// Clear every level.
    pub fn clear_all(&mut self) {
        self.clear(HierarchyLevel::Province);
    }

    fn reset_descendants(&mut self, level: HierarchyLevel) {
        for descendant in level.descendants() {
            if self.selector_mut(*descendant).clear() {
                log::debug!("[form] {descendant} reset by {level}");
            }
        }
    }

    /// Replace the whole form with `regions` (root first, contiguous).
    ///
    /// Regions out of order stop the seeding; the levels before them are kept.
    pub fn seed(&mut self, regions: Vec<SelectedRegion>) {
        self.clear_all();
        for (expected, region) in HierarchyLevel::ALL.iter().zip(regions) {
            if region.level != *expected {
                log::warn!(
                    "[form] seed stopped: expected {expected}, got {}",
                    region.level
                );
                break;
            }
            self.select(region.level, region.option);
        }
    }

    // ===== 查询 =====

    /// Advance debouncers to `now` and return the fetches to dispatch.
    ///
    /// Settled queries refused by the skip rules never leave the form; their
    /// panels show the reason instead.
    pub fn tick(&mut self, now: Instant) -> Vec<FetchRequest> {
        let mut requests = Vec::new();
        for level in HierarchyLevel::ALL {
            let Some(query) = self.selector_mut(level).poll(now) else {
                continue;
            };
            let parent_id = level
                .parent()
                .and_then(|parent| self.selector(parent).state().selected_id.clone());

            let mut request = FetchRequest {
                level,
                ticket: 0,
                query,
                parent_id,
                page: 1,
                page_size: self.settings.page_size,
            };
            match request.plan(self.settings.min_query_len) {
                FetchPlan::Skip(reason) => {
                    log::debug!("[form] {level} fetch skipped: {reason}");
                    self.selector_mut(level).skip(reason);
                }
                FetchPlan::Fetch => {
                    request.ticket = self.selector_mut(level).begin_fetch();
                    requests.push(request);
                }
            }
        }
        requests
    }

    /// Route a completion to its selector. Returns `false` for stale tickets.
    pub fn apply(&mut self, completion: FetchCompletion) -> bool {
        let FetchCompletion {
            level,
            ticket,
            result,
        } = completion;
        let applied = self.selector_mut(level).apply(ticket, result);
        if !applied {
            log::debug!("[form] stale {level} completion #{ticket} dropped");
        }
        applied
    }

    /// Earliest pending debounce deadline across all levels.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.selectors.iter().filter_map(SearchSelector::deadline).min()
    }

    // ===== 结果 =====

    /// Committed selections from the root down to the first uncommitted level.
    pub fn selection(&self) -> FormSelection {
        let regions = self
            .selectors
            .iter()
            .map_while(|selector| {
                selector.selected().map(|option| SelectedRegion {
                    level: selector.level(),
                    option: option.clone(),
                })
            })
            .collect();
        FormSelection { regions }
    }
}

impl Default for CascadeForm {
    fn default() -> Self {
        Self::new(LevelSpec::default_chain(), SelectorSettings::default())
    }
}
