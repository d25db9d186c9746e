//! 共享测试工具和辅助函数

#![allow(dead_code)]

use std::env;
use std::sync::{Arc, Mutex};

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use region_picker_provider::{
    LevelSpec, RegionSource, RequestContext, SourceConfig, create_source,
};

/// 跳过测试的宏（当环境变量缺失时）
#[macro_export]
macro_rules! skip_if_no_credentials {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("跳过测试: 缺少环境变量 {}", $var);
                return;
            }
        )+
    };
}

/// 断言 `Option` 为 `Some`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_some {
    ($expr:expr $(,)?) => {{
        let opt = $expr;
        assert!(opt.is_some(), "expected Some(..), got None");
        let Some(val) = opt else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let opt = $expr;
        assert!(opt.is_some(), "{}", format_args!($($msg)+));
        let Some(val) = opt else {
            return;
        };
        val
    }};
}

/// 断言 `Result` 为 `Ok`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(
            res.is_ok(),
            "{}: {res:?}",
            format_args!($($msg)+)
        );
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// 预置响应：HTTP 状态码 + JSON 响应体
#[derive(Debug, Clone)]
pub struct CannedResponse {
    pub status: u16,
    pub body: String,
}

impl CannedResponse {
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }

    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// 本地回环 HTTP 服务：按顺序返回预置响应，并记录收到的请求行
#[derive(Debug)]
pub struct LoopbackServer {
    pub base_url: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl LoopbackServer {
    /// 启动服务，每个连接消费一个预置响应
    pub async fn start(responses: Vec<CannedResponse>) -> std::io::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let requests = Arc::new(Mutex::new(Vec::new()));
        let recorded = Arc::clone(&requests);

        tokio::spawn(async move {
            for canned in responses {
                let Ok((mut stream, _)) = listener.accept().await else {
                    return;
                };

                let mut buf = Vec::new();
                let mut chunk = [0_u8; 1024];
                while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
                    match stream.read(&mut chunk).await {
                        Ok(0) | Err(_) => break,
                        Ok(n) => buf.extend_from_slice(&chunk[..n]),
                    }
                }
                let head = String::from_utf8_lossy(&buf).to_string();
                if let Ok(mut log) = recorded.lock() {
                    log.push(head);
                }

                let response = format!(
                    "HTTP/1.1 {} Canned\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    canned.status,
                    canned.body.len(),
                    canned.body
                );
                let _ = stream.write_all(response.as_bytes()).await;
                let _ = stream.shutdown().await;
            }
        });

        Ok(Self {
            base_url: format!("http://{addr}/api"),
            requests,
        })
    }

    /// 已收到的请求头（含请求行）
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().map(|r| r.clone()).unwrap_or_default()
    }

    /// 第 `index` 个请求的请求行，如 `GET /api/provinces?... HTTP/1.1`
    pub fn request_line(&self, index: usize) -> Option<String> {
        self.requests()
            .get(index)
            .and_then(|r| r.lines().next().map(str::to_string))
    }

    /// REST 数据源，指向本服务
    pub fn source(
        &self,
        context: impl FnOnce(RequestContext) -> RequestContext,
    ) -> Option<Arc<dyn RegionSource>> {
        create_source(SourceConfig::Rest {
            api: context(RequestContext::new(&self.base_url)),
            levels: LevelSpec::default_chain(),
        })
        .ok()
    }
}

/// 列表信封 JSON
pub fn list_body(items: &[(&str, &str)]) -> String {
    let data: Vec<serde_json::Value> = items
        .iter()
        .map(|(id, name)| serde_json::json!({ "id": id, "name": name }))
        .collect();
    serde_json::json!({
        "code": 200,
        "message": "OK",
        "data": {
            "data": data,
            "current_page": 1,
            "last_page": 1,
            "total": items.len(),
            "per_page": 100
        }
    })
    .to_string()
}

/// 真实 API 测试上下文（需要环境变量）
pub fn live_source() -> Option<Arc<dyn RegionSource>> {
    let base_url = env::var("REGION_PICKER_API_URL").ok()?;
    let mut api = RequestContext::new(base_url);
    if let Ok(token) = env::var("REGION_PICKER_TOKEN") {
        api = api.with_auth_token(token);
    }
    create_source(SourceConfig::Rest {
        api,
        levels: LevelSpec::default_chain(),
    })
    .ok()
}
