pub mod activation;
pub mod dashboard;
pub mod extractor;
pub mod indicator;
pub mod prober;
pub mod submitter;

pub use activation::{ActivationTrigger, SchemeTrigger};
pub use dashboard::DashboardWindow;
pub use extractor::ChatExtractor;
pub use indicator::{Indicator, PageIndicator};
pub use prober::HttpProber;
pub use submitter::Submitter;

use crate::error::{AppError, AppResult};
use std::time::Duration;

/// 构建带统一请求超时的 HTTP 客户端
///
/// 探测和提交共用一个客户端；超时必须显式给定，
/// 否则挂起的请求会拖住门控流程
pub fn http_client(timeout: Duration) -> AppResult<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(AppError::HttpClientInit)
}
