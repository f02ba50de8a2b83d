//! 后端唤醒流程 - 流程层
//!
//! 核心职责：在调用方动作执行前，把"后端可能没开"这件事处理掉
//!
//! 流程顺序：
//! 1. 立即探测一次，存活则直接放行
//! 2. 未存活则发出唤醒信号，进入固定间隔轮询
//! 3. 轮询命中则恢复状态文案并放行；预算耗尽则报告超时

use crate::error::AppResult;
use crate::models::AvailabilityState;
use crate::services::activation::ActivationTrigger;
use crate::services::indicator::Indicator;
use crate::services::prober::HttpProber;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::sleep;
use tracing::{debug, info, warn};

/// 唤醒流程状态
///
/// `Succeeded` / `Failed` 对单次调用是终态，新调用总是从 `Idle` 重新开始
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WakeState {
    /// 未开始
    Idle,
    /// 首次探测中
    Probing,
    /// 正在发出唤醒信号
    Activating,
    /// 固定间隔轮询中
    Polling,
    /// 后端已就绪
    Succeeded,
    /// 轮询预算耗尽
    Failed,
}

/// 单次唤醒流程的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WakeOutcome {
    /// 后端已就绪，可以执行后续动作
    Ready,
    /// 预算耗尽，后端始终未就绪
    TimedOut { attempts: usize },
    /// 本轮已被更新的调用取代，结果作废
    Superseded,
}

/// 唤醒控制器
///
/// 职责：
/// - 驱动 Idle → Probing → (Activating → Polling) → Succeeded / Failed
/// - 轮询期间把状态指示改为启动中文案，结束时恢复原文案
/// - 每轮携带一个代次号，迟到的探测结果发现代次不符时直接作废，
///   不会复活一个已经结束的轮询
/// - 等待前的原始文案由控制器统一保管：被取代的轮次不碰指示，
///   恢复永远由最新轮次在终态完成，启动中文案不会被误存为原始文案
pub struct WakeUpController<T: ActivationTrigger> {
    prober: HttpProber,
    trigger: T,
    poll_interval: Duration,
    max_attempts: usize,
    failure_display: Duration,
    generation: AtomicU64,
    saved_text: Mutex<Option<String>>,
}

impl<T: ActivationTrigger> WakeUpController<T> {
    /// 创建新的唤醒控制器
    pub fn new(
        prober: HttpProber,
        trigger: T,
        poll_interval: Duration,
        max_attempts: usize,
        failure_display: Duration,
    ) -> Self {
        Self {
            prober,
            trigger,
            poll_interval,
            max_attempts,
            failure_display,
            generation: AtomicU64::new(0),
            saved_text: Mutex::new(None),
        }
    }

    /// 确保后端已就绪
    ///
    /// 存活时立即返回 `Ready`，零次轮询；
    /// 否则发一次唤醒信号并轮询，最多 `max_attempts` 次
    pub async fn ensure_running<I: Indicator>(&self, indicator: &I) -> AppResult<WakeOutcome> {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let mut state = WakeState::Idle;

        transition(&mut state, WakeState::Probing);
        let availability = self.prober.probe().await;
        if self.superseded(generation) {
            return Ok(WakeOutcome::Superseded);
        }
        if availability == AvailabilityState::Alive {
            transition(&mut state, WakeState::Succeeded);
            debug!("后端已在运行，无需唤醒");
            // 上一轮可能留下了启动中文案，由本轮收尾
            self.restore_indicator(indicator).await?;
            return Ok(WakeOutcome::Ready);
        }

        // 探测未命中：发唤醒信号，指示切到启动中文案。
        // 原始文案只在保管处为空时采集，避免把上一轮留下的
        // 启动中文案当成原始文案存起来
        transition(&mut state, WakeState::Activating);
        let current_text = indicator.text().await?;
        self.saved_text.lock().await.get_or_insert(current_text);
        indicator.set_text("🔄 系统启动中...").await?;
        if let Err(e) = self.trigger.fire().await {
            self.restore_indicator(indicator).await?;
            return Err(e);
        }

        transition(&mut state, WakeState::Polling);
        let mut availability = AvailabilityState::Waking;
        for attempt in 1..=self.max_attempts {
            sleep(self.poll_interval).await;
            if self.superseded(generation) {
                return Ok(WakeOutcome::Superseded);
            }

            availability = self.prober.probe().await;
            if self.superseded(generation) {
                return Ok(WakeOutcome::Superseded);
            }

            if availability == AvailabilityState::Alive {
                transition(&mut state, WakeState::Succeeded);
                self.restore_indicator(indicator).await?;
                info!("✅ 后端已就绪 (第 {}/{} 次轮询)", attempt, self.max_attempts);
                return Ok(WakeOutcome::Ready);
            }
            debug!("后端尚未就绪 ({}/{})", attempt, self.max_attempts);
        }

        transition(&mut state, WakeState::Failed);
        warn!(
            "⚠️ 唤醒超时: 轮询 {} 次后仍为 {:?}",
            self.max_attempts, availability
        );
        indicator.set_text("❌ 启动失败").await?;
        sleep(self.failure_display).await;
        self.restore_indicator(indicator).await?;

        Ok(WakeOutcome::TimedOut {
            attempts: self.max_attempts,
        })
    }

    /// 恢复等待前的原始文案
    ///
    /// 取走保管的文案；保管处为空时不动指示
    async fn restore_indicator<I: Indicator>(&self, indicator: &I) -> AppResult<()> {
        let saved = self.saved_text.lock().await.take();
        if let Some(text) = saved {
            indicator.set_text(&text).await?;
        }
        Ok(())
    }

    /// 本轮是否已被更新的调用取代
    fn superseded(&self, generation: u64) -> bool {
        let current = self.generation.load(Ordering::SeqCst);
        if current != generation {
            warn!("⚠️ 唤醒轮次 {} 已被轮次 {} 取代，结果作废", generation, current);
            return true;
        }
        false
    }
}

fn transition(state: &mut WakeState, next: WakeState) {
    debug!("唤醒状态: {:?} -> {:?}", state, next);
    *state = next;
}
