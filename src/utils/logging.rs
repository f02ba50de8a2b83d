//! 日志工具模块
//!
//! 提供日志初始化和格式化辅助函数

use tracing_subscriber::EnvFilter;

/// 初始化日志
///
/// 默认级别 info，`verbose` 时为 debug；`RUST_LOG` 优先
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

/// 记录程序启动信息
pub fn log_startup(action: &str) {
    tracing::info!("{}", "=".repeat(60));
    tracing::info!("🚀 程序启动 - 动作: {}", action);
    tracing::info!(
        "启动时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    tracing::info!("{}", "=".repeat(60));
}

/// 截断长文本用于日志显示
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
