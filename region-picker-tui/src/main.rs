//! Region Picker TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 配置与核心服务 (`backend/`)
//!
//!
//! main.rs 的执行顺序：
//!
//!     load config             // 配置文件 + 环境变量覆盖
//!     init_logging()          // 日志写入文件
//!     tokio runtime           // 查询在运行时上执行，UI 循环保持同步
//!     CoreService::new()      // 创建数据源
//!     seed                    // 有已保存 ID 时预填表单
//!     init_terminal()
//!     app::run()              // 主循环
//!     restore_terminal()      // 无论成功与否，都恢复终端
//!     输出提交的 ID（JSON）

mod app;
mod backend;
mod event;
mod i18n;
mod message;
mod model;
mod update;
mod util;
mod view;

use anyhow::{Context, Result};
use tokio::runtime::Runtime;

use backend::{AppConfig, ConfigService, CoreService, LocalConfigService};
use i18n::{Language, set_language, t};
use model::App;
use util::{init_logging, init_terminal, restore_terminal};

fn main() -> Result<()> {
    // 1. 日志
    let log_path = init_logging()?;
    tracing::info!("region-picker {} starting", env!("CARGO_PKG_VERSION"));
    tracing::debug!("logging to {}", log_path.display());

    // 2. 配置
    let config_service = LocalConfigService::new();
    if !config_service.path().exists() {
        // 首次运行写出默认配置，方便用户修改
        if let Err(e) = config_service.save(&AppConfig::default()) {
            tracing::warn!("could not write default config: {e:#}");
        }
    }
    let mut config = config_service.load()?;
    config.apply_env(|key| std::env::var(key).ok());
    apply_preferences(&config);

    // 3. 运行时与核心服务
    let runtime = Runtime::new().context("starting tokio runtime")?;
    let core = CoreService::new(&config).context("creating region source")?;

    // 4. 创建应用实例，按需预填
    let mut app = App::new(core.level_specs(), config.selector.clone());
    if let Some(stored) = &config.seed {
        match runtime.block_on(core.lookup().resolve(stored)) {
            Ok(regions) => {
                app.form.seed(regions);
                app.set_status(t().status.seeded);
            }
            Err(e) => {
                tracing::warn!("seeding failed: {e}");
                app.set_status(t().status.seed_failed);
                app.modal.show_error(e.to_string());
            }
        }
    }

    let (mut dispatcher, mut completions) = core.dispatcher(runtime.handle().clone());

    // 5. 主循环
    let mut terminal = init_terminal()?;
    let result = app::run(&mut terminal, &mut app, &mut dispatcher, &mut completions);

    // 6. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;
    result?;

    // 7. 输出提交结果，供调用方读取
    if let Some(ids) = &app.submitted {
        println!("{}", serde_json::to_string_pretty(ids)?);
    } else {
        tracing::info!("exited without submitting");
    }

    Ok(())
}

/// 应用语言和主题
fn apply_preferences(config: &AppConfig) {
    match Language::from_code(&config.language) {
        Some(lang) => {
            set_language(lang);
            tracing::debug!("language: {}", lang.code());
        }
        None => tracing::warn!("unknown language {:?}, using en-US", config.language),
    }
    view::theme::set_theme(config.theme);
}
