//! 业务逻辑服务层

mod dispatch_service;
mod fetch_service;
mod lookup_service;

pub use dispatch_service::FetchDispatcher;
pub use fetch_service::OptionFetcher;
pub use lookup_service::LookupService;

use std::sync::Arc;

use region_picker_provider::RegionSource;

use crate::error::CoreError;
use crate::traits::{InMemoryOptionCache, OptionCache};
use crate::types::SelectorSettings;

/// 服务上下文 - 持有所有依赖
///
/// 前端需要创建此上下文，并注入数据源与缓存实现。
pub struct ServiceContext {
    /// 地区数据源
    pub source: Arc<dyn RegionSource>,
    /// 选项缓存
    pub cache: Arc<dyn OptionCache>,
    /// 选择器配置
    pub settings: SelectorSettings,
}

impl ServiceContext {
    /// 创建服务上下文
    #[must_use]
    pub fn new(
        source: Arc<dyn RegionSource>,
        cache: Arc<dyn OptionCache>,
        settings: SelectorSettings,
    ) -> Self {
        Self {
            source,
            cache,
            settings,
        }
    }

    /// 使用内存缓存创建服务上下文
    #[must_use]
    pub fn with_memory_cache(source: Arc<dyn RegionSource>, settings: SelectorSettings) -> Self {
        let cache = InMemoryOptionCache::with_capacity(settings.cache_capacity);
        Self::new(source, Arc::new(cache), settings)
    }

    /// 按错误类型分级记录日志
    pub(crate) fn log_error(&self, action: &str, err: &CoreError) {
        if err.is_expected() {
            log::warn!("[{}] {action} failed: {err}", self.source.id());
        } else {
            log::error!("[{}] {action} failed: {err}", self.source.id());
        }
    }
}
