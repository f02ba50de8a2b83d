//! 可用性门控 - 流程层
//!
//! 把任意调用方动作包在"后端已就绪"这个前置条件后面

use crate::error::{AppResult, WakeUpError};
use crate::services::activation::ActivationTrigger;
use crate::services::indicator::Indicator;
use crate::workflow::wake_up::{WakeOutcome, WakeUpController};
use std::future::Future;
use tokio::sync::Mutex;
use tracing::warn;

/// 可用性门控
///
/// 职责：
/// - 先跑唤醒流程，确认就绪后才执行被包裹的动作
/// - 后端处于未就绪或唤醒中时，动作绝不执行
/// - 对同一个门控的并发触发做去抖：已有流程在跑时直接丢弃新触发
/// - 状态指示对门控是不透明句柄，内容全部由唤醒流程决定
pub struct Gate<T: ActivationTrigger> {
    controller: WakeUpController<T>,
    in_flight: Mutex<()>,
}

impl<T: ActivationTrigger> Gate<T> {
    /// 创建新的门控
    pub fn new(controller: WakeUpController<T>) -> Self {
        Self {
            controller,
            in_flight: Mutex::new(()),
        }
    }

    /// 后端就绪后执行动作
    ///
    /// 唤醒超时返回 `WakeUpError::Timeout`，动作不会被执行；
    /// 被去抖丢弃或被新调用取代时静默返回
    pub async fn run_when_available<I, F, Fut>(&self, indicator: &I, action: F) -> AppResult<()>
    where
        I: Indicator,
        F: FnOnce() -> Fut,
        Fut: Future<Output = AppResult<()>>,
    {
        let Ok(_guard) = self.in_flight.try_lock() else {
            warn!("⚠️ 已有唤醒流程进行中，忽略本次触发");
            return Ok(());
        };

        match self.controller.ensure_running(indicator).await? {
            WakeOutcome::Ready => action().await,
            WakeOutcome::TimedOut { attempts } => Err(WakeUpError::Timeout { attempts }.into()),
            WakeOutcome::Superseded => Ok(()),
        }
    }
}
