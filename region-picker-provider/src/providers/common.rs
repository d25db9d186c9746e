//! 数据源公共工具函数

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::{ProviderError, Result};
use crate::types::{PaginatedResponse, RegionOption};

// ============ HTTP Client ============

/// 创建带超时配置的 HTTP Client
pub fn create_http_client(
    provider: &str,
    connect_timeout_secs: u64,
    timeout_secs: u64,
) -> Result<Client> {
    Client::builder()
        .connect_timeout(Duration::from_secs(connect_timeout_secs))
        .timeout(Duration::from_secs(timeout_secs))
        .build()
        .map_err(|e| ProviderError::InvalidParameter {
            provider: provider.to_string(),
            param: "http_client".to_string(),
            detail: e.to_string(),
        })
}

// ============ JSON 宽松解析 ============

/// 将 JSON 中的 id 转为字符串（后端有时返回数字，有时返回字符串）
pub fn value_to_id(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// 从原始 JSON 对象中提取 `id` 与 `label_field`，生成 `RegionOption`
pub fn item_to_option(item: &Value, label_field: &str) -> Option<RegionOption> {
    let id = item.get("id").and_then(value_to_id)?;
    let name = item.get(label_field)?.as_str()?.trim();
    if name.is_empty() {
        return None;
    }
    Some(RegionOption::new(id, name))
}

/// 宽松的 u32 反序列化：接受数字、数字字符串或 null（Laravel 分页器的 `per_page` 可能是字符串）
pub fn lenient_u32<'de, D>(deserializer: D) -> std::result::Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberLike {
        Number(u64),
        Text(String),
        Null(()),
    }

    match NumberLike::deserialize(deserializer)? {
        NumberLike::Number(n) => u32::try_from(n).map_err(Error::custom),
        NumberLike::Text(s) => s.trim().parse::<u32>().map_err(Error::custom),
        NumberLike::Null(()) => Ok(0),
    }
}

// ============ 搜索与分页 ============

/// 在内存中按名称过滤并分页（内存数据源与测试共用）
pub fn search_and_paginate<'a, I>(
    candidates: I,
    search: &str,
    page: u32,
    page_size: u32,
) -> PaginatedResponse<RegionOption>
where
    I: IntoIterator<Item = &'a RegionOption>,
{
    let matched: Vec<&RegionOption> = candidates
        .into_iter()
        .filter(|opt| opt.matches(search))
        .collect();
    let total = u32::try_from(matched.len()).unwrap_or(u32::MAX);
    let skip = (page.saturating_sub(1) as usize).saturating_mul(page_size as usize);
    let items = matched
        .into_iter()
        .skip(skip)
        .take(page_size as usize)
        .cloned()
        .collect();
    PaginatedResponse::new(items, page, page_size, total)
}
