//! JS 执行器 - 基础设施层
//!
//! 持有唯一的 page 资源，只暴露"执行 JS"的能力

use crate::error::{AppResult, BrowserError};
use chromiumoxide::Page;
use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;

/// JS 执行器
///
/// 职责：
/// - 持有唯一的 Page 资源
/// - 暴露 eval() 能力
/// - 不认识 ChatBatch / Indicator
/// - 不处理业务流程
pub struct JsExecutor {
    page: Page,
}

impl JsExecutor {
    /// 创建新的 JS 执行器
    pub fn new(page: Page) -> Self {
        Self { page }
    }

    /// 执行 JS 代码并返回 JSON 结果
    pub async fn eval(&self, js_code: impl Into<String>) -> AppResult<JsonValue> {
        let result = self.page.evaluate(js_code.into()).await?;
        let json_value = result
            .into_value()
            .map_err(|e| BrowserError::ScriptResultInvalid {
                source: Box::new(e),
            })?;
        Ok(json_value)
    }

    /// 执行 JS 代码并反序列化为指定类型
    pub async fn eval_as<T: DeserializeOwned>(&self, js_code: impl Into<String>) -> AppResult<T> {
        let json_value = self.eval(js_code).await?;
        let typed_value =
            serde_json::from_value(json_value).map_err(|e| BrowserError::ScriptResultInvalid {
                source: Box::new(e),
            })?;
        Ok(typed_value)
    }

    /// 在页面上下文中弹出阻塞式提醒
    ///
    /// 通过 setTimeout 延迟触发，避免 CDP 调用被 alert 本身挂起
    pub async fn alert(&self, message: &str) -> AppResult<()> {
        let text = serde_json::to_string(message).unwrap_or_default();
        self.eval(format!("setTimeout(() => alert({}), 0); true", text))
            .await?;
        Ok(())
    }
}
