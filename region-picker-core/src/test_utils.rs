//! 测试辅助模块
//!
//! 提供 mock 数据源和便捷的测试工厂方法。

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use region_picker_provider::{
    HierarchyLevel, OptionQuery, PaginatedResponse, ProviderError, RegionOption, RegionSource,
    Result,
};
use tokio::sync::RwLock;

use crate::services::ServiceContext;
use crate::types::{FetchRequest, SelectorSettings};

// ===== MockRegionSource =====

struct MockEntry {
    level: HierarchyLevel,
    parent_id: Option<String>,
    option: RegionOption,
}

pub struct MockRegionSource {
    entries: Vec<MockEntry>,
    /// 为 true 时忽略 search 参数（模拟不做过滤的后端）
    ignore_search: bool,
    delay: Option<Duration>,
    /// 如果 Some，所有调用返回此错误
    failure: RwLock<Option<ProviderError>>,
    queries: RwLock<Vec<(HierarchyLevel, OptionQuery)>>,
    lookups: RwLock<Vec<(HierarchyLevel, String)>>,
}

impl MockRegionSource {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            ignore_search: false,
            delay: None,
            failure: RwLock::new(None),
            queries: RwLock::new(Vec::new()),
            lookups: RwLock::new(Vec::new()),
        }
    }

    /// 添加 `level` 下父级为 `parent_id` 的选项 `(id, name)`
    #[must_use]
    pub fn with_options(
        mut self,
        level: HierarchyLevel,
        parent_id: Option<&str>,
        options: &[(&str, &str)],
    ) -> Self {
        self.entries
            .extend(options.iter().map(|(id, name)| MockEntry {
                level,
                parent_id: parent_id.map(str::to_string),
                option: RegionOption::new(*id, *name),
            }));
        self
    }

    #[must_use]
    pub fn ignoring_search(mut self) -> Self {
        self.ignore_search = true;
        self
    }

    /// 每次调用前等待 `delay`（配合 `start_paused` 使用）
    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub async fn set_failure(&self, failure: Option<ProviderError>) {
        *self.failure.write().await = failure;
    }

    /// 所有 `list_options` 调用，按调用顺序
    pub async fn recorded_queries(&self) -> Vec<(HierarchyLevel, OptionQuery)> {
        self.queries.read().await.clone()
    }

    pub async fn lookup_count(&self) -> usize {
        self.lookups.read().await.len()
    }

    async fn simulate(&self) -> Result<()> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        match self.failure.read().await.clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl RegionSource for MockRegionSource {
    fn id(&self) -> &'static str {
        "mock"
    }

    fn endpoint(&self, level: HierarchyLevel) -> String {
        format!("mock/{level}")
    }

    async fn list_options(
        &self,
        level: HierarchyLevel,
        query: &OptionQuery,
    ) -> Result<PaginatedResponse<RegionOption>> {
        self.queries.write().await.push((level, query.clone()));
        self.simulate().await?;

        let items: Vec<RegionOption> = self
            .entries
            .iter()
            .filter(|e| e.level == level)
            .filter(|e| query.parent_id.is_none() || e.parent_id == query.parent_id)
            .filter(|e| self.ignore_search || e.option.matches(&query.search))
            .map(|e| e.option.clone())
            .collect();
        let total = u32::try_from(items.len()).unwrap_or(u32::MAX);
        Ok(PaginatedResponse::new(
            items,
            query.page,
            query.page_size,
            total,
        ))
    }

    async fn get_option(&self, level: HierarchyLevel, id: &str) -> Result<RegionOption> {
        self.lookups.write().await.push((level, id.to_string()));
        self.simulate().await?;

        self.entries
            .iter()
            .find(|e| e.level == level && e.option.id == id)
            .map(|e| e.option.clone())
            .ok_or_else(|| ProviderError::NotFound {
                provider: "mock".to_string(),
                resource: format!("{level} {id}"),
                raw_message: None,
            })
    }
}

// ===== 工厂方法 =====

/// 使用内存缓存和给定数据源创建 ServiceContext
pub fn create_test_context(
    source: Arc<MockRegionSource>,
    settings: SelectorSettings,
) -> Arc<ServiceContext> {
    Arc::new(ServiceContext::with_memory_cache(source, settings))
}

/// 第一页、默认页大小的查询请求
pub fn request(level: HierarchyLevel, query: &str, parent_id: Option<&str>) -> FetchRequest {
    FetchRequest {
        level,
        ticket: 1,
        query: query.to_string(),
        parent_id: parent_id.map(str::to_string),
        page: 1,
        page_size: SelectorSettings::default().page_size,
    }
}
