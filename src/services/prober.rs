//! 存活探测服务 - 业务能力层
//!
//! 只负责"探测后端是否存活"能力，不关心唤醒流程

use crate::models::AvailabilityState;
use tracing::debug;

/// 存活探测器
///
/// 职责：
/// - 对健康检查地址发送 HEAD 请求
/// - 2xx 视为存活，其余一律视为未存活
/// - 永不向上抛错：非成功状态、网络错误、超时都折叠为 Dead
pub struct HttpProber {
    client: reqwest::Client,
    health_url: String,
}

impl HttpProber {
    /// 创建新的探测器
    ///
    /// `client` 需带统一的请求超时（见 `services::http_client`），
    /// 否则挂起的探测会拖住整个门控流程
    pub fn new(client: reqwest::Client, health_url: impl Into<String>) -> Self {
        Self {
            client,
            health_url: health_url.into(),
        }
    }

    /// 探测一次后端存活状态
    pub async fn probe(&self) -> AvailabilityState {
        match self.client.head(&self.health_url).send().await {
            Ok(response) if response.status().is_success() => {
                debug!("探测成功: {} -> {}", self.health_url, response.status());
                AvailabilityState::Alive
            }
            Ok(response) => {
                debug!("探测返回非成功状态: {}", response.status());
                AvailabilityState::Dead
            }
            Err(e) => {
                debug!("探测请求失败: {}", e);
                AvailabilityState::Dead
            }
        }
    }
}
