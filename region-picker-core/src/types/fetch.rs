//! 查询请求相关类型定义

use std::fmt;

use serde::{Deserialize, Serialize};

use region_picker_provider::{HierarchyLevel, OptionQuery, RegionOption};

use crate::error::CoreResult;

/// 跳过远程查询的原因
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SkipReason {
    /// 查询文本短于阈值
    QueryTooShort,
    /// 非根层级的父级尚未选中
    MissingParent,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::QueryTooShort => f.write_str("query too short"),
            Self::MissingParent => f.write_str("parent not selected"),
        }
    }
}

/// 查询计划：发起请求或跳过
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchPlan {
    Fetch,
    Skip(SkipReason),
}

/// 一次选项查询
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchRequest {
    pub level: HierarchyLevel,
    /// 所属选择器签发的票据，单调递增
    pub ticket: u64,
    pub query: String,
    pub parent_id: Option<String>,
    pub page: u32,
    pub page_size: u32,
}

impl FetchRequest {
    /// 跳过规则：在任何 I/O 之前检查
    pub fn plan(&self, min_query_len: usize) -> FetchPlan {
        if self.query.chars().count() < min_query_len {
            FetchPlan::Skip(SkipReason::QueryTooShort)
        } else if !self.level.is_root() && self.parent_id.is_none() {
            FetchPlan::Skip(SkipReason::MissingParent)
        } else {
            FetchPlan::Fetch
        }
    }

    /// 转换为数据源查询参数
    pub fn to_query(&self) -> OptionQuery {
        OptionQuery::search(self.query.clone())
            .with_parent(self.parent_id.clone())
            .with_page(self.page, self.page_size)
    }
}

/// 查询完成通知，经 channel 回到 UI 事件循环
#[derive(Debug)]
pub struct FetchCompletion {
    pub level: HierarchyLevel,
    pub ticket: u64,
    pub result: CoreResult<Vec<RegionOption>>,
}
