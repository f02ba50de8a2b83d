//! 分析面板窗口服务 - 业务能力层
//!
//! 只负责"聚焦或打开面板弹窗"能力，不关心后端是否存活

use crate::error::AppResult;
use crate::infrastructure::JsExecutor;
use std::sync::Arc;
use tracing::{debug, info};

/// 弹窗句柄在页面里的全局变量名
const WINDOW_HANDLE: &str = "__gm_dashboard";

/// 面板弹窗名称（同名弹窗会被浏览器复用）
const WINDOW_NAME: &str = "GeminiDashboard";

/// 分析面板窗口句柄
///
/// 弹窗对象只存在于页面上下文中，这里通过固定的全局变量
/// 显式持有它，提供 is_open / focus / open 三个操作
pub struct DashboardWindow {
    executor: Arc<JsExecutor>,
    url: String,
    width: u32,
}

impl DashboardWindow {
    /// 创建新的面板窗口句柄
    pub fn new(executor: Arc<JsExecutor>, url: impl Into<String>, width: u32) -> Self {
        Self {
            executor,
            url: url.into(),
            width,
        }
    }

    /// 弹窗当前是否仍然打开
    pub async fn is_open(&self) -> AppResult<bool> {
        let js_code = format!(
            "!!(window.{h} && !window.{h}.closed)",
            h = WINDOW_HANDLE
        );
        self.executor.eval_as(js_code).await
    }

    /// 聚焦已打开的弹窗
    pub async fn focus(&self) -> AppResult<()> {
        debug!("聚焦已打开的面板窗口");
        let js_code = format!("window.{h} && window.{h}.focus(); true", h = WINDOW_HANDLE);
        self.executor.eval(js_code).await?;
        Ok(())
    }

    /// 打开新弹窗
    ///
    /// 高度取满屏幕，固定宽度，贴屏幕右侧
    pub async fn open(&self) -> AppResult<()> {
        info!("📊 打开分析面板: {}", self.url);
        let url = serde_json::to_string(&self.url).unwrap_or_default();
        let js_code = format!(
            r#"
            (() => {{
                const width = {width};
                const height = window.screen.height;
                const left = window.screen.width - width;
                window.{h} = window.open(
                    {url},
                    "{name}",
                    `width=${{width}},height=${{height}},left=${{left}},top=0,menubar=no,toolbar=no,location=no,status=no,resizable=yes,scrollbars=yes`
                );
                return true;
            }})()
            "#,
            width = self.width,
            h = WINDOW_HANDLE,
            url = url,
            name = WINDOW_NAME,
        );
        self.executor.eval(js_code).await?;
        Ok(())
    }

    /// 已打开则聚焦，否则打开
    pub async fn show(&self) -> AppResult<()> {
        if self.is_open().await? {
            self.focus().await
        } else {
            self.open().await
        }
    }
}
