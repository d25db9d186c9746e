//! REST API 响应类型

use serde::Deserialize;
use serde_json::Value;

use crate::providers::common::{lenient_u32, value_to_id};
use crate::types::PaginatedResponse;

/// 统一响应信封：`{ code, message, data }`
#[derive(Debug, Deserialize)]
pub struct ApiEnvelope<T> {
    /// 业务码，可能是数字（200）也可能是字符串（"200" / "E_AUTH"）
    #[serde(default)]
    pub code: Option<Value>,
    #[serde(default)]
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> ApiEnvelope<T> {
    /// 信封 `code` 的字符串形式
    pub fn code_string(&self) -> Option<String> {
        self.code.as_ref().and_then(value_to_id)
    }

    /// 信封层面是否表示成功
    ///
    /// 数字码在 2xx 范围内视为成功；缺失或非数字码交由 HTTP 状态判断。
    pub fn is_success(&self) -> bool {
        match self.code_string().map(|c| c.parse::<u16>()) {
            Some(Ok(code)) => (200..300).contains(&code),
            _ => true,
        }
    }
}

/// Laravel 风格分页数据：`{ data: [...], current_page, last_page, total, per_page }`
#[derive(Debug, Deserialize)]
pub struct PageData {
    #[serde(default)]
    pub data: Vec<Value>,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub current_page: u32,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub last_page: u32,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub total: u32,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub per_page: u32,
}

impl PageData {
    /// 组装分页响应
    ///
    /// 后端缺失的字段以请求参数和本页条数补齐；`last_page` 存在时以它判断是否还有下一页。
    pub fn paginate<T>(
        &self,
        items: Vec<T>,
        requested_page: u32,
        requested_page_size: u32,
    ) -> PaginatedResponse<T> {
        let page = if self.current_page == 0 {
            requested_page
        } else {
            self.current_page
        };
        let page_size = if self.per_page == 0 {
            requested_page_size
        } else {
            self.per_page
        };
        let total = if self.total == 0 {
            u32::try_from(items.len()).unwrap_or(u32::MAX)
        } else {
            self.total
        };

        let mut response = PaginatedResponse::new(items, page, page_size, total);
        if self.last_page > 0 {
            response.has_more = page < self.last_page;
        }
        response
    }
}
