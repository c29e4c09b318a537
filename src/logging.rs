use std::sync::Mutex;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// 日志输出文件的环境变量
pub const LOG_ENV: &str = "BMI_CARD_LOG";

/// 初始化 tracing
///
/// 默认不输出日志，避免破坏 TUI 画面。
/// 设置 `BMI_CARD_LOG` 为文件路径后写入该文件，级别由 `RUST_LOG` 控制（默认 info）。
pub fn init_tracing() {
    let Ok(log_path) = std::env::var(LOG_ENV) else {
        return;
    };

    let Ok(file) = std::fs::File::create(&log_path) else {
        eprintln!("Warning: failed to create log file: {}", log_path);
        return;
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();
}
