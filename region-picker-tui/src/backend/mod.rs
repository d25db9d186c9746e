//!
//! src/backend/mod.rs
//! Backend 层：业务服务
//!
//! Backend 层与 UI 完全解耦，负责配置和数据源。
//! 通过 region-picker-core 库实现查询、缓存与预填。
//!
//!
//! 有模块结构：
//!     src/backend/mod.rs
//!         mod config_service;     // 配置文件（JSON）+ 环境变量覆盖
//!         mod core_service;       // 核心服务入口
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、核心服务（CoreService）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!         创建流程：
//!             1. 由 AppConfig 中的 SourceConfig 创建数据源（REST 或内存）
//!             2. 组装 ServiceContext（数据源 + 内存缓存 + 选择器配置）
//!             3. 基于 ServiceContext 创建查询调度器与预填服务
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、数据流
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     防抖到期，CascadeForm::tick 产生 FetchRequest
//!         ↓
//!     FetchDispatcher 在 tokio 运行时上执行查询（同层级旧任务被中止）
//!         ↓
//!     OptionFetcher 先查缓存，未命中时调用数据源
//!         ↓
//!     FetchCompletion 经 channel 回到主循环
//!         ↓
//!     Update 层按票据决定是否采用
//!

mod config_service;
mod core_service;

pub use config_service::{AppConfig, ConfigService, LocalConfigService};
pub use core_service::CoreService;
