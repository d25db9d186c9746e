//! 核心服务
//!
//! 封装 region-picker-core 的各种服务，
//! 提供给 TUI 层使用的统一接口

use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::sync::mpsc::UnboundedReceiver;

use region_picker_core::CoreResult;
use region_picker_core::services::{FetchDispatcher, LookupService, OptionFetcher, ServiceContext};
use region_picker_core::types::{FetchCompletion, LevelSpec};
use region_picker_provider::create_source;

use super::config_service::AppConfig;

/// TUI 核心服务
///
/// 持有服务上下文，按需创建查询调度器和预填服务
pub struct CoreService {
    /// 服务上下文（数据源 + 缓存 + 选择器配置）
    ctx: Arc<ServiceContext>,
    /// 四个层级的接口描述
    levels: Vec<LevelSpec>,
}

impl CoreService {
    /// 根据配置创建数据源和服务上下文
    pub fn new(config: &AppConfig) -> CoreResult<Self> {
        let source = create_source(config.source.clone())?;
        log::info!("region source: {}", source.id());

        let ctx = Arc::new(ServiceContext::with_memory_cache(
            source,
            config.selector.clone(),
        ));

        Ok(Self {
            ctx,
            levels: config.level_specs(),
        })
    }

    pub fn level_specs(&self) -> Vec<LevelSpec> {
        self.levels.clone()
    }

    /// 创建在 `runtime` 上执行查询的调度器及其完成通道
    pub fn dispatcher(
        &self,
        runtime: Handle,
    ) -> (FetchDispatcher, UnboundedReceiver<FetchCompletion>) {
        let fetcher = Arc::new(OptionFetcher::new(Arc::clone(&self.ctx)));
        FetchDispatcher::new(fetcher, runtime)
    }

    /// 获取预填服务
    pub fn lookup(&self) -> LookupService {
        LookupService::new(Arc::clone(&self.ctx))
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use region_picker_core::types::{FetchRequest, HierarchyLevel, StoredRegionIds};

    use super::*;

    fn service() -> Option<CoreService> {
        CoreService::new(&AppConfig::default()).ok()
    }

    #[tokio::test]
    async fn dispatcher_delivers_bundled_options() {
        let service = service();
        assert!(service.is_some(), "bundled source failed to load");
        let Some(service) = service else { return };

        let (mut dispatcher, mut completions) = service.dispatcher(Handle::current());
        dispatcher.dispatch(FetchRequest {
            level: HierarchyLevel::Province,
            ticket: 1,
            query: "jawa".to_string(),
            parent_id: None,
            page: 1,
            page_size: 100,
        });

        let completion = tokio::time::timeout(Duration::from_secs(5), completions.recv()).await;
        assert!(
            matches!(&completion, Ok(Some(c)) if c.ticket == 1
                && matches!(&c.result, Ok(options) if options.len() == 3)),
            "unexpected: {completion:?}"
        );
    }

    #[test]
    fn lookup_resolves_bundled_ids() {
        let Some(service) = service() else { return };
        let stored = StoredRegionIds {
            province_id: Some("32".to_string()),
            regency_id: Some("3273".to_string()),
            district_id: Some("327302".to_string()),
            village_id: Some("3273021001".to_string()),
        };
        let regions = tokio_test::block_on(service.lookup().resolve(&stored));
        assert!(
            matches!(&regions, Ok(r) if r.len() == 4 && r[3].option.name == "Dago"),
            "unexpected: {regions:?}"
        );
    }
}
