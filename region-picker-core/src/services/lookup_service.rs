//! 预填服务：把已保存记录中的地区 ID 解析为可提交的选项

use std::sync::Arc;

use futures::future::join_all;

use region_picker_provider::{HierarchyLevel, OptionQuery, ProviderError};

use crate::error::{CoreError, CoreResult};
use crate::services::ServiceContext;
use crate::types::{SelectedRegion, StoredRegionIds};

/// 预填服务
pub struct LookupService {
    ctx: Arc<ServiceContext>,
}

impl LookupService {
    /// 创建预填服务实例
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// 解析 `stored` 中从根开始连续的 ID
    ///
    /// 各层级并行查询。某一层级的 ID 已不存在，或不属于已保存的上级时，
    /// 只保留它之前的层级；其他错误直接返回。
    ///
    /// 上下级关系通过在上级范围内按名称搜索下级来确认。
    pub async fn resolve(&self, stored: &StoredRegionIds) -> CoreResult<Vec<SelectedRegion>> {
        let chain = stored.chain();
        let present = HierarchyLevel::ALL
            .iter()
            .filter(|level| stored.get(**level).is_some_and(|id| !id.is_empty()))
            .count();
        if present > chain.len() {
            let err = CoreError::ValidationError(format!(
                "stored ids skip {}",
                HierarchyLevel::ALL[chain.len()]
            ));
            self.ctx.log_error("lookup", &err);
            return Err(err);
        }
        if chain.is_empty() {
            return Ok(Vec::new());
        }

        let lookups = chain.iter().map(|(level, id)| {
            let source = Arc::clone(&self.ctx.source);
            async move { source.get_option(*level, id).await }
        });
        let results = join_all(lookups).await;

        let mut resolved = Vec::with_capacity(results.len());
        for ((level, id), result) in chain.into_iter().zip(results) {
            match result {
                Ok(option) => resolved.push(SelectedRegion { level, option }),
                Err(ProviderError::NotFound { .. }) => {
                    log::warn!("[lookup] stored {level} {id} no longer exists, seeding stops here");
                    break;
                }
                Err(e) => {
                    let err = CoreError::Provider(e);
                    self.ctx.log_error(&format!("lookup {level} {id}"), &err);
                    return Err(err);
                }
            }
        }

        self.verify_parents(resolved).await
    }

    /// 截断到第一个不在上级范围内的层级
    async fn verify_parents(
        &self,
        mut resolved: Vec<SelectedRegion>,
    ) -> CoreResult<Vec<SelectedRegion>> {
        let checks = resolved.windows(2).map(|pair| {
            let source = Arc::clone(&self.ctx.source);
            let (parent, child) = (&pair[0], &pair[1]);
            let query = OptionQuery::search(child.option.name.clone())
                .with_parent(Some(parent.option.id.clone()));
            async move {
                source
                    .list_options(child.level, &query)
                    .await
                    .map(|page| page.items.iter().any(|o| o.id == child.option.id))
            }
        });
        let results = join_all(checks).await;

        for (index, result) in results.into_iter().enumerate() {
            let child = &resolved[index + 1];
            match result {
                Ok(true) => {}
                Ok(false) => {
                    log::warn!(
                        "[lookup] stored {} {} is not under {} {}, seeding stops here",
                        child.level,
                        child.option.id,
                        resolved[index].level,
                        resolved[index].option.id
                    );
                    resolved.truncate(index + 1);
                    break;
                }
                Err(e) => {
                    let err = CoreError::Provider(e);
                    self.ctx
                        .log_error(&format!("verify {} {}", child.level, child.option.id), &err);
                    return Err(err);
                }
            }
        }

        Ok(resolved)
    }
}
