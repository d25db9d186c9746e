//! 日志初始化
//!
//! 终端处于 raw 模式时不能写 stderr，日志写入数据目录下的文件。
//! `log` 宏产生的记录（core / provider 库）经 tracing-log 桥接到同一订阅者。

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// 日志文件路径：`{data_local_dir}/region-picker/region-picker.log`
pub fn log_file_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("region-picker")
        .join("region-picker.log")
}

/// 安装 tracing 订阅者，默认级别 `info`，可由 `RUST_LOG` 覆盖
pub fn init_logging() -> Result<PathBuf> {
    let path = log_file_path();
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("opening {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false),
        )
        .with(filter)
        .try_init()
        .context("installing tracing subscriber")?;

    Ok(path)
}
