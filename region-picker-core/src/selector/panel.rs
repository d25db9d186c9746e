//! 结果面板状态机

use region_picker_provider::RegionOption;

use crate::types::SkipReason;

/// What the result panel currently shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PanelState {
    /// Panel hidden.
    #[default]
    Closed,
    /// Open, waiting for more input (or for the parent level to be selected).
    Prompt(SkipReason),
    /// Open, a fetch is in flight.
    Loading,
    /// Open, the fetch returned no options.
    Empty,
    /// Open, the fetch failed.
    Error(String),
    /// Open, options in the order the source returned them.
    Results(Vec<RegionOption>),
}

impl PanelState {
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }
}

/// Result panel with keyboard highlight.
#[derive(Debug, Clone, Default)]
pub struct ResultPanel {
    state: PanelState,
    highlighted: usize,
}

impl ResultPanel {
    pub fn state(&self) -> &PanelState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, PanelState::Loading)
    }

    /// 高亮行索引（仅 Results 状态有意义）
    pub fn highlighted(&self) -> usize {
        self.highlighted
    }

    pub(crate) fn prompt(&mut self, reason: SkipReason) {
        self.state = PanelState::Prompt(reason);
        self.highlighted = 0;
    }

    pub(crate) fn start_loading(&mut self) {
        self.state = PanelState::Loading;
        self.highlighted = 0;
    }

    /// Loading → Empty / Results / Error。非 Loading 状态下忽略。
    pub(crate) fn finish(&mut self, result: Result<Vec<RegionOption>, String>) -> bool {
        if !self.is_loading() {
            return false;
        }
        self.state = match result {
            Ok(options) if options.is_empty() => PanelState::Empty,
            Ok(options) => PanelState::Results(options),
            Err(message) => PanelState::Error(message),
        };
        self.highlighted = 0;
        true
    }

    pub(crate) fn close(&mut self) {
        self.state = PanelState::Closed;
        self.highlighted = 0;
    }

    /// 高亮下一行（到末尾后回到第一行）
    pub fn highlight_next(&mut self) {
        if let PanelState::Results(options) = &self.state
            && !options.is_empty()
        {
            self.highlighted = (self.highlighted + 1) % options.len();
        }
    }

    /// 高亮上一行（到顶部后跳到最后一行）
    pub fn highlight_prev(&mut self) {
        if let PanelState::Results(options) = &self.state
            && !options.is_empty()
        {
            self.highlighted = self
                .highlighted
                .checked_sub(1)
                .unwrap_or(options.len() - 1);
        }
    }

    /// 当前高亮的选项
    pub fn highlighted_option(&self) -> Option<&RegionOption> {
        match &self.state {
            PanelState::Results(options) => options.get(self.highlighted),
            _ => None,
        }
    }
}
