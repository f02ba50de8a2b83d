//! 状态指示服务 - 业务能力层
//!
//! 只负责"读写一段用户可见状态文案"能力，不关心文案内容

use crate::error::AppResult;
use crate::infrastructure::JsExecutor;
use std::sync::Arc;
use tracing::debug;

/// 状态指示句柄
///
/// 唤醒流程和提交流程通过它向用户反馈进度，
/// 调用方只读写文本，不解释其含义
pub trait Indicator {
    /// 读取当前文案
    fn text(&self) -> impl std::future::Future<Output = AppResult<String>>;

    /// 设置文案
    fn set_text(&self, text: &str) -> impl std::future::Future<Output = AppResult<()>>;
}

/// 页面元素指示器
///
/// 把状态写入页面上某个元素的 innerText（通常是触发动作的按钮）
pub struct PageIndicator {
    executor: Arc<JsExecutor>,
    selector: String,
}

impl PageIndicator {
    pub fn new(executor: Arc<JsExecutor>, selector: impl Into<String>) -> Self {
        Self {
            executor,
            selector: selector.into(),
        }
    }
}

impl Indicator for PageIndicator {
    async fn text(&self) -> AppResult<String> {
        let selector = serde_json::to_string(&self.selector).unwrap_or_default();
        let js_code = format!(
            "(() => {{ const el = document.querySelector({}); return el ? el.innerText : ''; }})()",
            selector
        );
        self.executor.eval_as(js_code).await
    }

    async fn set_text(&self, text: &str) -> AppResult<()> {
        debug!("更新状态指示 [{}]: {}", self.selector, text);
        let selector = serde_json::to_string(&self.selector).unwrap_or_default();
        let content = serde_json::to_string(text).unwrap_or_default();
        let js_code = format!(
            "(() => {{ const el = document.querySelector({}); if (el) el.innerText = {}; return true; }})()",
            selector, content
        );
        self.executor.eval(js_code).await?;
        Ok(())
    }
}
