//! 程序配置
//!
//! 默认值 → 可选 TOML 文件 → 环境变量，后者覆盖前者

use crate::error::{AppResult, ConfigError};
use serde::Deserialize;
use std::path::Path;

/// 默认配置文件路径
pub const DEFAULT_CONFIG_FILE: &str = "gemini_manager.toml";

/// 程序配置
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 浏览器调试端口
    pub browser_debug_port: u16,
    /// 对话页面 URL（用于定位目标标签页）
    pub chat_url: String,
    /// 本地后端根地址
    pub backend_base_url: String,
    /// 存活探测路径
    pub health_path: String,
    /// 批量保存路径
    pub save_path: String,
    /// 分析面板地址
    pub dashboard_url: String,
    /// 分析面板弹窗宽度（像素，贴屏幕右侧）
    pub dashboard_width: u32,
    /// 唤醒后端的自定义协议 URI
    pub wake_up_uri: String,
    /// 提问节点选择器
    pub query_selector: String,
    /// 回答节点选择器
    pub response_selector: String,
    /// 保存按钮（状态指示）选择器
    pub save_indicator_selector: String,
    /// 面板按钮（状态指示）选择器
    pub dashboard_indicator_selector: String,
    /// 唤醒轮询间隔（秒）
    pub poll_interval_secs: u64,
    /// 唤醒轮询最大次数
    pub max_poll_attempts: usize,
    /// 状态文案恢复延迟（秒）
    pub status_revert_secs: u64,
    /// 单次 HTTP 请求超时（秒）
    pub request_timeout_secs: u64,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            browser_debug_port: 9222,
            chat_url: "https://gemini.google.com".to_string(),
            backend_base_url: "http://127.0.0.1:8000".to_string(),
            health_path: "/docs".to_string(),
            save_path: "/save_all".to_string(),
            dashboard_url: "http://127.0.0.1:8501".to_string(),
            dashboard_width: 500,
            wake_up_uri: "aisys://run".to_string(),
            query_selector: "user-query".to_string(),
            response_selector: "model-response".to_string(),
            save_indicator_selector: "#gm-save-btn".to_string(),
            dashboard_indicator_selector: "#gm-dash-btn".to_string(),
            poll_interval_secs: 3,
            max_poll_attempts: 10,
            status_revert_secs: 2,
            request_timeout_secs: 5,
            verbose_logging: false,
        }
    }
}

impl Config {
    /// 加载配置：默认配置文件（若存在）+ 环境变量覆盖
    pub fn load() -> AppResult<Self> {
        let base = if Path::new(DEFAULT_CONFIG_FILE).exists() {
            Self::from_file(DEFAULT_CONFIG_FILE)?
        } else {
            Self::default()
        };
        Ok(base.with_env_overrides())
    }

    /// 从 TOML 文件加载配置
    pub fn from_file(path: &str) -> AppResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFailed {
            path: path.to_string(),
            source,
        })?;
        let config = toml::from_str(&content).map_err(|source| ConfigError::ParseFailed {
            path: path.to_string(),
            source,
        })?;
        Ok(config)
    }

    /// 应用环境变量覆盖
    pub fn with_env_overrides(self) -> Self {
        Self {
            browser_debug_port: env_parsed("BROWSER_DEBUG_PORT").unwrap_or(self.browser_debug_port),
            chat_url: env_string("CHAT_URL").unwrap_or(self.chat_url),
            backend_base_url: env_string("BACKEND_BASE_URL").unwrap_or(self.backend_base_url),
            health_path: env_string("HEALTH_PATH").unwrap_or(self.health_path),
            save_path: env_string("SAVE_PATH").unwrap_or(self.save_path),
            dashboard_url: env_string("DASHBOARD_URL").unwrap_or(self.dashboard_url),
            dashboard_width: env_parsed("DASHBOARD_WIDTH").unwrap_or(self.dashboard_width),
            wake_up_uri: env_string("WAKE_UP_URI").unwrap_or(self.wake_up_uri),
            query_selector: env_string("QUERY_SELECTOR").unwrap_or(self.query_selector),
            response_selector: env_string("RESPONSE_SELECTOR").unwrap_or(self.response_selector),
            save_indicator_selector: env_string("SAVE_INDICATOR_SELECTOR")
                .unwrap_or(self.save_indicator_selector),
            dashboard_indicator_selector: env_string("DASHBOARD_INDICATOR_SELECTOR")
                .unwrap_or(self.dashboard_indicator_selector),
            poll_interval_secs: env_parsed("POLL_INTERVAL_SECS").unwrap_or(self.poll_interval_secs),
            max_poll_attempts: env_parsed("MAX_POLL_ATTEMPTS").unwrap_or(self.max_poll_attempts),
            status_revert_secs: env_parsed("STATUS_REVERT_SECS").unwrap_or(self.status_revert_secs),
            request_timeout_secs: env_parsed("REQUEST_TIMEOUT_SECS")
                .unwrap_or(self.request_timeout_secs),
            verbose_logging: env_parsed("VERBOSE_LOGGING").unwrap_or(self.verbose_logging),
        }
    }

    /// 存活探测完整 URL
    pub fn health_url(&self) -> String {
        format!("{}{}", self.backend_base_url, self.health_path)
    }

    /// 批量保存完整 URL
    pub fn save_url(&self) -> String {
        format!("{}{}", self.backend_base_url, self.save_path)
    }
}

fn env_string(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

fn env_parsed<T: std::str::FromStr>(name: &str) -> Option<T> {
    std::env::var(name).ok().and_then(|v| v.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_urls() {
        let config = Config::default();
        assert_eq!(config.health_url(), "http://127.0.0.1:8000/docs");
        assert_eq!(config.save_url(), "http://127.0.0.1:8000/save_all");
    }

    #[test]
    fn test_partial_toml_falls_back_to_defaults() {
        let config: Config = toml::from_str(
            r#"
            backend_base_url = "http://127.0.0.1:9000"
            max_poll_attempts = 5
            "#,
        )
        .unwrap();

        assert_eq!(config.backend_base_url, "http://127.0.0.1:9000");
        assert_eq!(config.max_poll_attempts, 5);
        // 未给出的键保持默认值
        assert_eq!(config.poll_interval_secs, 3);
        assert_eq!(config.query_selector, "user-query");
    }
}
