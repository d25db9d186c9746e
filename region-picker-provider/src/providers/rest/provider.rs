//! REST RegionSource trait 实现

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;
use crate::providers::common::item_to_option;
use crate::traits::{ErrorContext, ProviderErrorMapper, RegionSource};
use crate::types::{HierarchyLevel, OptionQuery, PaginatedResponse, RegionOption};

use super::{MAX_PAGE_SIZE, PageData, RestRegionSource};

#[async_trait]
impl RegionSource for RestRegionSource {
    fn id(&self) -> &'static str {
        "rest"
    }

    fn endpoint(&self, level: HierarchyLevel) -> String {
        self.level_spec(level).endpoint.clone()
    }

    async fn list_options(
        &self,
        level: HierarchyLevel,
        query: &OptionQuery,
    ) -> Result<PaginatedResponse<RegionOption>> {
        let query = query.validated(MAX_PAGE_SIZE);
        let spec = self.level_spec(level);
        let url = self.build_list_url(spec, &query);

        let page: PageData = self
            .get_envelope(&url, ErrorContext::for_level(level))
            .await?;

        let total_raw = page.data.len();
        let items: Vec<RegionOption> = page
            .data
            .iter()
            .filter_map(|item| item_to_option(item, &spec.label_field))
            .collect();
        if items.len() < total_raw {
            log::warn!(
                "[rest] {} of {total_raw} {level} items lack `id` or `{}`, skipped",
                total_raw - items.len(),
                spec.label_field
            );
        }

        Ok(page.paginate(items, query.page, query.page_size))
    }

    async fn get_option(&self, level: HierarchyLevel, id: &str) -> Result<RegionOption> {
        let spec = self.level_spec(level);
        let url = self.build_item_url(spec, id);

        let item: Value = self
            .get_envelope(&url, ErrorContext::for_item(level, id))
            .await?;

        item_to_option(&item, &spec.label_field).ok_or_else(|| {
            self.parse_error(format!(
                "{level} {id}: 缺少 `id` 或 `{}` 字段",
                spec.label_field
            ))
        })
    }
}
