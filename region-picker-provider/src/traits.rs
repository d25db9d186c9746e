use async_trait::async_trait;

use crate::error::{ProviderError, Result};
use crate::types::{HierarchyLevel, OptionQuery, PaginatedResponse, RegionOption};

/// 原始 API 错误（内部使用）
#[derive(Debug, Clone)]
pub(crate) struct RawApiError {
    /// HTTP 状态码
    pub status: Option<u16>,
    /// 信封中的 `code` 字段（可能是数字或字符串）
    pub code: Option<String>,
    /// 原始错误消息
    pub message: String,
}

impl RawApiError {
    pub fn with_status(status: u16, code: Option<String>, message: impl Into<String>) -> Self {
        Self {
            status: Some(status),
            code,
            message: message.into(),
        }
    }
}

/// 错误上下文信息（内部使用）
/// 用于在映射错误时描述被查询的资源
#[derive(Debug, Clone, Default)]
pub(crate) struct ErrorContext {
    /// 查询的层级
    pub level: Option<HierarchyLevel>,
    /// 查询的 ID（单项查询时）
    pub id: Option<String>,
}

impl ErrorContext {
    pub fn for_level(level: HierarchyLevel) -> Self {
        Self {
            level: Some(level),
            id: None,
        }
    }

    pub fn for_item(level: HierarchyLevel, id: &str) -> Self {
        Self {
            level: Some(level),
            id: Some(id.to_string()),
        }
    }

    /// 资源描述，如 "regency 3273"
    pub fn resource(&self) -> String {
        match (&self.level, &self.id) {
            (Some(level), Some(id)) => format!("{level} {id}"),
            (Some(level), None) => format!("{level} list"),
            (None, Some(id)) => id.clone(),
            (None, None) => "<unknown>".to_string(),
        }
    }
}

/// 错误映射 Trait（内部使用）
/// 各数据源实现此 trait 以将原始 API 错误映射到统一错误类型
pub(crate) trait ProviderErrorMapper {
    /// 返回数据源标识符
    fn provider_name(&self) -> &'static str;

    /// 将原始 API 错误映射到统一错误类型
    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError;

    /// 快捷方法：解析错误
    fn parse_error(&self, detail: impl ToString) -> ProviderError {
        ProviderError::ParseError {
            provider: self.provider_name().to_string(),
            detail: detail.to_string(),
        }
    }

    /// 快捷方法：未知错误（fallback）
    fn unknown_error(&self, raw: RawApiError) -> ProviderError {
        ProviderError::Unknown {
            provider: self.provider_name().to_string(),
            raw_code: raw.code.or_else(|| raw.status.map(|s| s.to_string())),
            raw_message: raw.message,
        }
    }
}

/// A source of region options, one list per hierarchy level.
///
/// Implementations must be cheap to share (`Arc<dyn RegionSource>`) and must not
/// keep per-request state: the selector engine layers caching and supersession on top.
#[async_trait]
pub trait RegionSource: Send + Sync {
    /// Source identifier (`"rest"`, `"memory"`).
    fn id(&self) -> &'static str;

    /// Stable name of the resource backing `level`, used as part of cache keys.
    fn endpoint(&self, level: HierarchyLevel) -> String;

    /// List options of `level` matching `query.search`, scoped by `query.parent_id`.
    async fn list_options(
        &self,
        level: HierarchyLevel,
        query: &OptionQuery,
    ) -> Result<PaginatedResponse<RegionOption>>;

    /// Resolve a single option by id (used to pre-seed forms from stored ids).
    async fn get_option(&self, level: HierarchyLevel, id: &str) -> Result<RegionOption>;
}
