//! REST error mapping

use crate::error::ProviderError;
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};

use super::RestRegionSource;

/// 错误映射：优先使用信封中的数字 `code`，否则使用 HTTP 状态码
impl ProviderErrorMapper for RestRegionSource {
    fn provider_name(&self) -> &'static str {
        "rest"
    }

    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError {
        let effective = raw
            .code
            .as_deref()
            .and_then(|c| c.parse::<u16>().ok())
            .or(raw.status);

        match effective {
            // 401: Unauthenticated / token 过期
            Some(401) => ProviderError::InvalidCredentials {
                provider: self.provider_name().to_string(),
                raw_message: Some(raw.message),
            },

            // 403: 当前租户无权访问该资源
            Some(403) => ProviderError::PermissionDenied {
                provider: self.provider_name().to_string(),
                raw_message: Some(raw.message),
            },

            // 404: 单项查询 id 不存在，或 endpoint 配置错误
            Some(404) => ProviderError::NotFound {
                provider: self.provider_name().to_string(),
                resource: context.resource(),
                raw_message: Some(raw.message),
            },

            // 400 / 422: 参数校验失败（Laravel validation）
            Some(400 | 422) => ProviderError::InvalidParameter {
                provider: self.provider_name().to_string(),
                param: context
                    .level
                    .and_then(|level| self.level_spec(level).parent_field.clone())
                    .unwrap_or_else(|| "search".to_string()),
                detail: raw.message,
            },

            _ => self.unknown_error(raw),
        }
    }
}
