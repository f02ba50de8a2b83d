//! 会话编排 - 编排层
//!
//! 持有浏览器连接和全部业务能力，对外暴露两个用户动作：
//! 全量保存对话、打开分析面板。两个动作都经过可用性门控。

use crate::browser::connect_to_browser_and_page;
use crate::config::Config;
use crate::error::{AppError, AppResult, BusinessError, WakeUpError};
use crate::infrastructure::JsExecutor;
use crate::services::activation::SchemeTrigger;
use crate::services::{
    self, ChatExtractor, DashboardWindow, HttpProber, PageIndicator, Submitter,
};
use crate::workflow::{Gate, WakeUpController};
use chromiumoxide::Browser;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

/// 会话
///
/// 职责：
/// - 持有稀缺资源（Browser、JsExecutor）
/// - 组装 services / workflow，向下注入显式句柄
/// - 面板弹窗句柄是会话的显式字段，不是模块级单例
pub struct Session {
    _browser: Browser,
    executor: Arc<JsExecutor>,
    gate: Gate<SchemeTrigger>,
    extractor: ChatExtractor,
    submitter: Submitter,
    dashboard: DashboardWindow,
    save_indicator: PageIndicator,
    dashboard_indicator: PageIndicator,
}

impl Session {
    /// 初始化会话：连接浏览器、定位对话页面、组装全部能力
    pub async fn initialize(config: Config) -> AppResult<Self> {
        let (browser, page) =
            connect_to_browser_and_page(config.browser_debug_port, &config.chat_url).await?;
        let executor = Arc::new(JsExecutor::new(page));

        let client = services::http_client(Duration::from_secs(config.request_timeout_secs))?;
        let revert_delay = Duration::from_secs(config.status_revert_secs);

        let prober = HttpProber::new(client.clone(), config.health_url());
        let trigger = SchemeTrigger::new(executor.clone(), &config.wake_up_uri);
        let controller = WakeUpController::new(
            prober,
            trigger,
            Duration::from_secs(config.poll_interval_secs),
            config.max_poll_attempts,
            revert_delay,
        );

        Ok(Self {
            gate: Gate::new(controller),
            extractor: ChatExtractor::new(&config.query_selector, &config.response_selector),
            submitter: Submitter::new(client, config.save_url(), revert_delay),
            dashboard: DashboardWindow::new(
                executor.clone(),
                &config.dashboard_url,
                config.dashboard_width,
            ),
            save_indicator: PageIndicator::new(executor.clone(), &config.save_indicator_selector),
            dashboard_indicator: PageIndicator::new(
                executor.clone(),
                &config.dashboard_indicator_selector,
            ),
            executor,
            _browser: browser,
        })
    }

    /// 全量保存当前页面上的对话
    ///
    /// 提取 → 门控（必要时唤醒后端）→ 提交。
    /// 页面上没有对话时只弹提示，不发起任何网络请求
    pub async fn save_all(&self) -> AppResult<()> {
        info!("📚 开始全量保存");

        let batch = match self.extractor.extract(&self.executor).await {
            Ok(batch) => batch,
            Err(AppError::Business(BusinessError::EmptyConversation)) => {
                warn!("⚠️ 页面上没有可保存的对话内容");
                self.executor.alert("没有可保存的对话内容。").await?;
                return Ok(());
            }
            Err(e) => return Err(e),
        };

        let result = self
            .gate
            .run_when_available(&self.save_indicator, || async {
                self.submitter
                    .submit(&batch, &self.save_indicator)
                    .await
                    .map(|_| ())
            })
            .await;

        self.alert_on_wake_up_timeout(result).await
    }

    /// 打开（或聚焦）分析面板
    pub async fn open_dashboard(&self) -> AppResult<()> {
        info!("📊 打开分析面板");

        let result = self
            .gate
            .run_when_available(&self.dashboard_indicator, || async {
                self.dashboard.show().await
            })
            .await;

        self.alert_on_wake_up_timeout(result).await
    }

    /// 唤醒超时是唯一需要阻塞式提醒的失败路径
    async fn alert_on_wake_up_timeout(&self, result: AppResult<()>) -> AppResult<()> {
        if let Err(AppError::WakeUp(WakeUpError::Timeout { .. })) = &result {
            self.executor
                .alert("无法启动本地服务。（请检查 aisys:// 协议是否已注册）")
                .await?;
        }
        result
    }
}
