//! REST HTTP 请求方法

use serde::de::DeserializeOwned;

use crate::error::Result;
use crate::http_client::HttpUtils;
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};
use crate::types::{LevelSpec, OptionQuery};

use super::{ApiEnvelope, RestRegionSource};

impl RestRegionSource {
    /// 执行 GET 请求并解开 `{ code, message, data }` 信封
    pub(crate) async fn get_envelope<T: DeserializeOwned>(
        &self,
        url: &str,
        context: ErrorContext,
    ) -> Result<T> {
        let mut request = self.client.get(url).header("Accept", "application/json");
        if let Some(token) = &self.context.auth_token {
            request = request.bearer_auth(token);
        }
        if let Some(tenant) = &self.context.tenant {
            request = request.header("X-Tenant", tenant);
        }

        let response = HttpUtils::execute_request_with_retry(
            request,
            self.provider_name(),
            "GET",
            url,
            self.context.max_retries,
        )
        .await?;

        // 非 2xx 时响应体可能不是 JSON（如 nginx 错误页）
        let parsed: Result<ApiEnvelope<T>> =
            HttpUtils::parse_json(&response.body, self.provider_name());
        let envelope = match parsed {
            Ok(envelope) => envelope,
            Err(e) if response.is_success() => return Err(e),
            Err(_) => {
                let message = format!("HTTP {}", response.status);
                log::error!("[rest] {message} from {url}");
                return Err(self.map_error(
                    RawApiError::with_status(response.status, None, message),
                    context,
                ));
            }
        };

        if !response.is_success() || !envelope.is_success() {
            let message = envelope
                .message
                .clone()
                .unwrap_or_else(|| format!("HTTP {}", response.status));
            log::error!("[rest] API 错误: {message}");
            return Err(self.map_error(
                RawApiError::with_status(response.status, envelope.code_string(), message),
                context,
            ));
        }

        envelope
            .data
            .ok_or_else(|| self.parse_error("响应中缺少 data 字段"))
    }

    /// 构建列表 URL：`{base}/{endpoint}?page=&paginate=&search=[&{parent_field}=]`
    pub(crate) fn build_list_url(&self, spec: &LevelSpec, query: &OptionQuery) -> String {
        let mut url = format!(
            "{}?page={}&paginate={}&search={}",
            self.context.endpoint_url(&spec.endpoint),
            query.page,
            query.page_size,
            urlencoding::encode(&query.search)
        );

        if let (Some(field), Some(parent_id)) = (&spec.parent_field, &query.parent_id) {
            url.push_str(&format!(
                "&{}={}",
                urlencoding::encode(field),
                urlencoding::encode(parent_id)
            ));
        }

        url
    }

    /// 构建单项 URL：`{base}/{endpoint}/{id}`
    pub(crate) fn build_item_url(&self, spec: &LevelSpec, id: &str) -> String {
        format!(
            "{}/{}",
            self.context.endpoint_url(&spec.endpoint),
            urlencoding::encode(id)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{HierarchyLevel, RequestContext};

    fn source() -> Option<RestRegionSource> {
        RestRegionSource::new(
            RequestContext::new("https://api.example.org/api/"),
            LevelSpec::default_chain(),
        )
        .ok()
    }

    #[test]
    fn root_list_url_has_no_parent() {
        let Some(s) = source() else { return };
        let spec = s.level_spec(HierarchyLevel::Province).clone();
        let url = s.build_list_url(&spec, &OptionQuery::search("ja"));
        assert_eq!(
            url,
            "https://api.example.org/api/provinces?page=1&paginate=100&search=ja"
        );
    }

    #[test]
    fn child_list_url_carries_parent_field() {
        let Some(s) = source() else { return };
        let spec = s.level_spec(HierarchyLevel::Regency).clone();
        let query = OptionQuery::search("kota b").with_parent(Some("32".to_string()));
        let url = s.build_list_url(&spec, &query);
        assert_eq!(
            url,
            "https://api.example.org/api/regencies?page=1&paginate=100&search=kota%20b&province_id=32"
        );
    }

    #[test]
    fn empty_search_is_sent_verbatim() {
        let Some(s) = source() else { return };
        let spec = s.level_spec(HierarchyLevel::Province).clone();
        let url = s.build_list_url(&spec, &OptionQuery::default());
        assert!(url.ends_with("&search="), "unexpected: {url}");
    }

    #[test]
    fn item_url_encodes_id() {
        let Some(s) = source() else { return };
        let spec = s.level_spec(HierarchyLevel::Village).clone();
        assert_eq!(
            s.build_item_url(&spec, "3171/01"),
            "https://api.example.org/api/villages/3171%2F01"
        );
    }
}
