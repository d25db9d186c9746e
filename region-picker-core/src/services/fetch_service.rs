//! 远程选项查询服务

use std::sync::Arc;

use region_picker_provider::RegionOption;

use crate::error::{CoreError, CoreResult};
use crate::services::ServiceContext;
use crate::traits::OptionCacheKey;
use crate::types::{FetchPlan, FetchRequest};

/// 远程选项查询：跳过规则 + 缓存 + 客户端二次过滤
pub struct OptionFetcher {
    ctx: Arc<ServiceContext>,
}

impl OptionFetcher {
    /// 创建查询服务实例
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    pub fn context(&self) -> &Arc<ServiceContext> {
        &self.ctx
    }

    /// 跳过规则（在任何 I/O 之前）
    pub fn plan(&self, request: &FetchRequest) -> FetchPlan {
        request.plan(self.ctx.settings.min_query_len)
    }

    /// 查询一页选项
    ///
    /// 相同 `(endpoint, query, parent_id, page, page_size)` 的请求直接命中缓存；
    /// 失败结果不缓存。
    pub async fn fetch(&self, request: &FetchRequest) -> CoreResult<Vec<RegionOption>> {
        if let FetchPlan::Skip(reason) = self.plan(request) {
            return Err(CoreError::FetchSkipped {
                level: request.level,
                reason,
            });
        }

        let key = OptionCacheKey::for_request(self.ctx.source.endpoint(request.level), request);
        if let Some(options) = self.ctx.cache.get(&key).await {
            log::debug!(
                "[fetch] cache hit: {} {:?} parent={:?}",
                request.level,
                request.query,
                request.parent_id
            );
            return Ok(options);
        }

        let response = self
            .ctx
            .source
            .list_options(request.level, &request.to_query())
            .await
            .map_err(|e| {
                let err = CoreError::Provider(e);
                self.ctx.log_error(&format!("list {}", request.level), &err);
                err
            })?;

        let page_size = usize::try_from(request.page_size).unwrap_or(usize::MAX);
        let options: Vec<RegionOption> = if self.ctx.settings.client_side_filter {
            response
                .items
                .into_iter()
                .filter(|option| option.matches(&request.query))
                .take(page_size)
                .collect()
        } else {
            response.items.into_iter().take(page_size).collect()
        };

        log::debug!(
            "[fetch] {} {:?}: {} options",
            request.level,
            request.query,
            options.len()
        );
        self.ctx.cache.put(key, options.clone()).await;
        Ok(options)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::test_utils::{MockRegionSource, create_test_context, request};
    use crate::types::{HierarchyLevel, SelectorSettings, SkipReason};
    use region_picker_provider::ProviderError;

    fn fetcher(source: Arc<MockRegionSource>) -> OptionFetcher {
        OptionFetcher::new(create_test_context(source, SelectorSettings::default()))
    }

    #[tokio::test]
    async fn ja_returns_rows_in_source_order() {
        let source = Arc::new(MockRegionSource::new().with_options(
            HierarchyLevel::Province,
            None,
            &[("1", "DKI Jakarta"), ("4", "Jawa Timur")],
        ));
        let result = fetcher(source.clone())
            .fetch(&request(HierarchyLevel::Province, "ja", None))
            .await;

        assert!(
            matches!(&result, Ok(options) if options == &vec![
                RegionOption::new("1", "DKI Jakarta"),
                RegionOption::new("4", "Jawa Timur"),
            ]),
            "unexpected: {result:?}"
        );
        let queries = source.recorded_queries().await;
        assert_eq!(queries.len(), 1);
        assert_eq!(queries[0].1.search, "ja");
    }

    #[tokio::test]
    async fn regency_fetch_sends_parent_id() {
        let source = Arc::new(MockRegionSource::new().with_options(
            HierarchyLevel::Regency,
            Some("1"),
            &[("101", "Kota Jakarta Selatan")],
        ));
        let result = fetcher(source.clone())
            .fetch(&request(HierarchyLevel::Regency, "ja", Some("1")))
            .await;
        assert!(result.is_ok(), "unexpected: {result:?}");

        let queries = source.recorded_queries().await;
        assert_eq!(queries[0].0, HierarchyLevel::Regency);
        assert_eq!(queries[0].1.parent_id.as_deref(), Some("1"));
    }

    #[tokio::test]
    async fn skip_rules_perform_no_io() {
        let source = Arc::new(MockRegionSource::new());
        let fetcher = fetcher(source.clone());

        let short = fetcher
            .fetch(&request(HierarchyLevel::Province, "j", None))
            .await;
        assert!(
            matches!(
                short,
                Err(CoreError::FetchSkipped {
                    reason: SkipReason::QueryTooShort,
                    ..
                })
            ),
            "unexpected: {short:?}"
        );

        let orphan = fetcher
            .fetch(&request(HierarchyLevel::District, "coblong", None))
            .await;
        assert!(
            matches!(
                orphan,
                Err(CoreError::FetchSkipped {
                    reason: SkipReason::MissingParent,
                    ..
                })
            ),
            "unexpected: {orphan:?}"
        );
        assert!(source.recorded_queries().await.is_empty());
    }

    #[tokio::test]
    async fn identical_request_is_served_from_cache() {
        let source = Arc::new(MockRegionSource::new().with_options(
            HierarchyLevel::Province,
            None,
            &[("51", "Bali")],
        ));
        let fetcher = fetcher(source.clone());
        let req = request(HierarchyLevel::Province, "ba", None);

        let first = fetcher.fetch(&req).await;
        let second = fetcher.fetch(&req).await;
        assert!(matches!((&first, &second), (Ok(a), Ok(b)) if a == b));
        assert_eq!(source.recorded_queries().await.len(), 1);

        // 不同查询是不同的键
        let other = fetcher
            .fetch(&request(HierarchyLevel::Province, "bal", None))
            .await;
        assert!(other.is_ok());
        assert_eq!(source.recorded_queries().await.len(), 2);
    }

    #[tokio::test]
    async fn failures_are_not_cached() {
        let source = Arc::new(MockRegionSource::new().with_options(
            HierarchyLevel::Province,
            None,
            &[("51", "Bali")],
        ));
        source
            .set_failure(Some(ProviderError::NetworkError {
                provider: "mock".to_string(),
                detail: "connection reset".to_string(),
            }))
            .await;
        let fetcher = fetcher(source.clone());
        let req = request(HierarchyLevel::Province, "ba", None);

        let failed = fetcher.fetch(&req).await;
        assert!(
            matches!(&failed, Err(CoreError::Provider(ProviderError::NetworkError { .. }))),
            "unexpected: {failed:?}"
        );

        source.set_failure(None).await;
        let retried = fetcher.fetch(&req).await;
        assert!(matches!(&retried, Ok(v) if v.len() == 1), "unexpected: {retried:?}");
        assert_eq!(source.recorded_queries().await.len(), 2);
    }

    #[tokio::test]
    async fn client_side_filter_drops_non_matching_rows() {
        // 服务端忽略 search 参数
        let source = Arc::new(
            MockRegionSource::new()
                .ignoring_search()
                .with_options(
                    HierarchyLevel::Province,
                    None,
                    &[("1", "DKI Jakarta"), ("51", "Bali"), ("4", "Jawa Timur")],
                ),
        );
        let result = fetcher(source)
            .fetch(&request(HierarchyLevel::Province, "ja", None))
            .await;
        assert!(
            matches!(&result, Ok(v) if v.iter().map(|o| o.id.as_str()).collect::<Vec<_>>() == ["1", "4"]),
            "unexpected: {result:?}"
        );
    }

    #[tokio::test]
    async fn client_side_filter_can_be_disabled() {
        let source = Arc::new(
            MockRegionSource::new()
                .ignoring_search()
                .with_options(
                    HierarchyLevel::Province,
                    None,
                    &[("1", "DKI Jakarta"), ("51", "Bali")],
                ),
        );
        let settings = SelectorSettings {
            client_side_filter: false,
            ..SelectorSettings::default()
        };
        let fetcher = OptionFetcher::new(create_test_context(source, settings));
        let result = fetcher
            .fetch(&request(HierarchyLevel::Province, "ja", None))
            .await;
        assert!(matches!(&result, Ok(v) if v.len() == 2), "unexpected: {result:?}");
    }

    #[tokio::test]
    async fn results_are_capped_at_page_size() {
        let rows: Vec<(String, String)> = (0..5)
            .map(|i| (i.to_string(), format!("Kota {i}")))
            .collect();
        let borrowed: Vec<(&str, &str)> =
            rows.iter().map(|(a, b)| (a.as_str(), b.as_str())).collect();
        let source = Arc::new(
            MockRegionSource::new()
                .ignoring_search()
                .with_options(HierarchyLevel::Province, None, &borrowed),
        );
        let mut req = request(HierarchyLevel::Province, "kota", None);
        req.page_size = 3;
        let result = fetcher(source).fetch(&req).await;
        assert!(matches!(&result, Ok(v) if v.len() == 3), "unexpected: {result:?}");
    }
}
