//! 配置服务
//!
//! 配置文件位于 `{config_dir}/region-picker/config.json`：
//!
//! ```json
//! {
//!   "source": "rest",
//!   "api": { "baseUrl": "https://api.example.org/api", "authToken": "..." },
//!   "selector": { "debounceMs": 500, "minQueryLen": 2 },
//!   "language": "id-ID",
//!   "theme": "dark"
//! }
//! ```
//!
//! 文件不存在时使用默认配置（内置离线数据集）。

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use region_picker_core::types::{LevelSpec, SelectorSettings, StoredRegionIds};
use region_picker_provider::{RequestContext, SourceConfig};

use crate::view::theme::Theme;

/// 覆盖 API 地址的环境变量
pub const ENV_API_URL: &str = "REGION_PICKER_API_URL";
/// 覆盖访问令牌的环境变量
pub const ENV_TOKEN: &str = "REGION_PICKER_TOKEN";

fn default_language() -> String {
    "en-US".to_string()
}

/// 应用配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    /// 数据源（`"source"` 字段为标签）
    #[serde(flatten)]
    pub source: SourceConfig,
    #[serde(default)]
    pub selector: SelectorSettings,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default)]
    pub theme: Theme,
    /// 启动时预填的已保存 ID（编辑已有记录）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<StoredRegionIds>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            source: SourceConfig::Memory { dataset_path: None },
            selector: SelectorSettings::default(),
            language: default_language(),
            theme: Theme::default(),
            seed: None,
        }
    }
}

impl AppConfig {
    /// 四个层级的接口描述；内存数据源使用默认布局
    pub fn level_specs(&self) -> Vec<LevelSpec> {
        match &self.source {
            SourceConfig::Rest { levels, .. } => levels.clone(),
            SourceConfig::Memory { .. } => LevelSpec::default_chain(),
        }
    }

    /// 应用环境变量覆盖
    ///
    /// 设置了 API 地址时切换到 REST 数据源；令牌只作用于 REST 数据源。
    pub fn apply_env(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(url) = var(ENV_API_URL).filter(|v| !v.trim().is_empty()) {
            match &mut self.source {
                SourceConfig::Rest { api, .. } => api.base_url = url,
                SourceConfig::Memory { .. } => {
                    self.source = SourceConfig::Rest {
                        api: RequestContext::new(url),
                        levels: LevelSpec::default_chain(),
                    };
                }
            }
        }

        if let Some(token) = var(ENV_TOKEN).filter(|v| !v.trim().is_empty()) {
            match &mut self.source {
                SourceConfig::Rest { api, .. } => api.auth_token = Some(token),
                SourceConfig::Memory { .. } => {
                    log::warn!("{ENV_TOKEN} ignored: memory source needs no token");
                }
            }
        }
    }
}

/// 配置服务 trait
pub trait ConfigService: Send + Sync {
    /// 加载配置
    fn load(&self) -> Result<AppConfig>;

    /// 保存配置
    fn save(&self, config: &AppConfig) -> Result<()>;
}

/// 本地 JSON 文件配置服务
pub struct LocalConfigService {
    path: PathBuf,
}

impl LocalConfigService {
    /// 使用系统配置目录下的默认路径
    pub fn new() -> Self {
        let dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        Self::with_path(dir.join("region-picker").join("config.json"))
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for LocalConfigService {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigService for LocalConfigService {
    fn load(&self) -> Result<AppConfig> {
        if !self.path.exists() {
            log::info!("no config at {}, using defaults", self.path.display());
            return Ok(AppConfig::default());
        }
        let json = std::fs::read_to_string(&self.path)
            .with_context(|| format!("reading {}", self.path.display()))?;
        let config = serde_json::from_str(&json)
            .with_context(|| format!("parsing {}", self.path.display()))?;
        log::info!("config loaded from {}", self.path.display());
        Ok(config)
    }

    fn save(&self, config: &AppConfig) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("creating {}", dir.display()))?;
        }
        let json = serde_json::to_string_pretty(config)?;
        std::fs::write(&self.path, json)
            .with_context(|| format!("writing {}", self.path.display()))?;
        Ok(())
    }
}
