//! 批量提交服务 - 业务能力层
//!
//! 只负责"把一个批次 POST 给后端"能力，不关心后端是否已被唤醒

use crate::error::{AppResult, SubmissionError};
use crate::models::{ChatBatch, SaveResponse};
use crate::services::indicator::Indicator;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{info, warn};

/// 批量提交器
///
/// 职责：
/// - 将批次序列化为 JSON 数组提交到保存接口
/// - 解析 `saved_count` 响应
/// - 通过状态指示反馈三个阶段：进行中 / 成功 / 失败
/// - 任何失败都终止本次操作，不做自动重试；
///   失败文案在固定展示时长后恢复，指示不会卡死
pub struct Submitter {
    client: reqwest::Client,
    save_url: String,
    revert_delay: Duration,
}

impl Submitter {
    /// 创建新的提交器
    pub fn new(
        client: reqwest::Client,
        save_url: impl Into<String>,
        revert_delay: Duration,
    ) -> Self {
        Self {
            client,
            save_url: save_url.into(),
            revert_delay,
        }
    }

    /// 提交一个批次
    ///
    /// 成功返回后端确认的保存条数；
    /// 服务端拒绝和网络失败只在指示文案上区分
    pub async fn submit<I: Indicator>(
        &self,
        batch: &ChatBatch,
        indicator: &I,
    ) -> AppResult<SaveResponse> {
        let original_text = indicator.text().await?;
        indicator
            .set_text(&format!("⏳ 保存 {} 条...", batch.len()))
            .await?;

        info!("📤 正在提交 {} 组对话到 {}", batch.len(), self.save_url);

        let result = self.post_batch(batch).await;

        match &result {
            Ok(response) => {
                info!("✅ 保存成功: +{}", response.saved_count);
                indicator
                    .set_text(&format!("✅ +{}", response.saved_count))
                    .await?;
            }
            Err(SubmissionError::ServerRejected { status }) => {
                warn!("⚠️ 服务端拒绝保存: 状态码 {}", status);
                indicator.set_text("❌ 服务器错误").await?;
            }
            Err(e) => {
                warn!("⚠️ 保存请求失败: {}", e);
                indicator.set_text("❌ 保存失败").await?;
            }
        }

        // 无论成败，展示片刻后恢复原文案
        sleep(self.revert_delay).await;
        indicator.set_text(&original_text).await?;

        Ok(result?)
    }

    async fn post_batch(&self, batch: &ChatBatch) -> Result<SaveResponse, SubmissionError> {
        let response = self
            .client
            .post(&self.save_url)
            .json(batch.records())
            .send()
            .await
            .map_err(|source| SubmissionError::Transport { source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(SubmissionError::ServerRejected {
                status: status.as_u16(),
            });
        }

        response
            .json::<SaveResponse>()
            .await
            .map_err(|source| SubmissionError::MalformedBody { source })
    }
}
