//! 唤醒信号服务 - 业务能力层
//!
//! 只负责"发出一次唤醒信号"能力，信号是单向的，没有任何回执

use crate::error::AppResult;
use crate::infrastructure::JsExecutor;
use std::sync::Arc;
use tracing::info;

/// 唤醒信号触发器
///
/// 触发后唯一能观察到的"成功"证据，是稍后的一次存活探测变为 Alive
pub trait ActivationTrigger {
    /// 发出一次唤醒信号（fire-and-forget）
    fn fire(&self) -> impl std::future::Future<Output = AppResult<()>>;
}

/// 自定义协议触发器
///
/// 把页面导航到 `aisys://run` 之类的自定义协议地址，
/// 由操作系统拦截该协议并拉起后端进程
pub struct SchemeTrigger {
    executor: Arc<JsExecutor>,
    uri: String,
}

impl SchemeTrigger {
    pub fn new(executor: Arc<JsExecutor>, uri: impl Into<String>) -> Self {
        Self {
            executor,
            uri: uri.into(),
        }
    }
}

impl ActivationTrigger for SchemeTrigger {
    async fn fire(&self) -> AppResult<()> {
        info!("🔄 发出唤醒信号: {}", self.uri);
        let uri = serde_json::to_string(&self.uri).unwrap_or_default();
        // 自定义协议导航不会真正离开页面，赋值后立即返回
        self.executor
            .eval(format!("window.location.href = {}; true", uri))
            .await?;
        Ok(())
    }
}
