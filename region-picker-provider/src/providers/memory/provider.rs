//! Memory RegionSource trait 实现

use async_trait::async_trait;

use crate::error::{ProviderError, Result};
use crate::providers::common::search_and_paginate;
use crate::traits::RegionSource;
use crate::types::{HierarchyLevel, OptionQuery, PaginatedResponse, RegionOption};

use super::MemoryRegionSource;

#[async_trait]
impl RegionSource for MemoryRegionSource {
    fn id(&self) -> &'static str {
        "memory"
    }

    fn endpoint(&self, level: HierarchyLevel) -> String {
        format!("memory/{level}")
    }

    async fn list_options(
        &self,
        level: HierarchyLevel,
        query: &OptionQuery,
    ) -> Result<PaginatedResponse<RegionOption>> {
        let query = query.validated(u32::MAX);
        let candidates = self
            .table(level)
            .children_of(query.parent_id.as_deref());
        Ok(search_and_paginate(
            candidates,
            &query.search,
            query.page,
            query.page_size,
        ))
    }

    async fn get_option(&self, level: HierarchyLevel, id: &str) -> Result<RegionOption> {
        let table = self.table(level);
        table
            .by_id
            .get(id)
            .and_then(|index| table.options.get(*index))
            .cloned()
            .ok_or_else(|| ProviderError::NotFound {
                provider: "memory".to_string(),
                resource: format!("{level} {id}"),
                raw_message: None,
            })
    }
}
