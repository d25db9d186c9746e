//! 选择器配置

use std::time::Duration;

use serde::{Deserialize, Serialize};

use region_picker_provider::DEFAULT_PAGE_SIZE;

fn default_debounce_ms() -> u64 {
    500
}

fn default_min_query_len() -> usize {
    2
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

fn default_cache_capacity() -> usize {
    256
}

fn default_true() -> bool {
    true
}

/// 选择器行为配置（四个层级共用）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectorSettings {
    /// 输入防抖时长（毫秒）
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    /// 触发远程查询的最小字符数（按 Unicode 字符计）
    #[serde(default = "default_min_query_len")]
    pub min_query_len: usize,
    /// 每次查询的页大小
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    /// 失去焦点时关闭结果面板
    #[serde(default = "default_true")]
    pub close_on_blur: bool,
    /// 对服务端结果再做一次名称过滤
    #[serde(default = "default_true")]
    pub client_side_filter: bool,
    /// 内存缓存最多保留的选项列表数，超出时淘汰最久未使用的
    #[serde(default = "default_cache_capacity")]
    pub cache_capacity: usize,
}

impl Default for SelectorSettings {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            min_query_len: default_min_query_len(),
            page_size: default_page_size(),
            close_on_blur: true,
            client_side_filter: true,
            cache_capacity: default_cache_capacity(),
        }
    }
}

impl SelectorSettings {
    /// 防抖时长
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    /// `query` 是否达到查询长度阈值
    pub fn is_long_enough(&self, query: &str) -> bool {
        query.chars().count() >= self.min_query_len
    }
}
