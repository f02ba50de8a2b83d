//! 应用程序错误类型
//!
//! 按关注点分组：浏览器 / 提交 / 唤醒 / 业务 / 配置

use thiserror::Error;

/// 应用程序顶层错误
#[derive(Debug, Error)]
pub enum AppError {
    /// 浏览器相关错误
    #[error("浏览器错误: {0}")]
    Browser(#[from] BrowserError),
    /// 提交相关错误
    #[error("提交错误: {0}")]
    Submission(#[from] SubmissionError),
    /// 唤醒相关错误
    #[error("唤醒错误: {0}")]
    WakeUp(#[from] WakeUpError),
    /// 业务逻辑错误
    #[error("业务错误: {0}")]
    Business(#[from] BusinessError),
    /// 配置错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
    /// HTTP 客户端初始化失败
    #[error("HTTP 客户端初始化失败: {0}")]
    HttpClientInit(#[source] reqwest::Error),
}

/// 浏览器相关错误
#[derive(Debug, Error)]
pub enum BrowserError {
    /// 连接浏览器失败
    #[error("无法连接到浏览器 (端口: {port}): {source}")]
    ConnectionFailed {
        port: u16,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 创建页面失败
    #[error("创建页面失败: {source}")]
    PageCreationFailed {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 执行脚本失败
    #[error("执行脚本失败: {source}")]
    ScriptExecutionFailed {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 脚本返回值无法反序列化
    #[error("脚本返回值解析失败: {source}")]
    ScriptResultInvalid {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// 提交相关错误
///
/// 三种失败只在状态指示文案上区分，对上层流程一律终止当前操作
#[derive(Debug, Error)]
pub enum SubmissionError {
    /// 服务端返回非 2xx 状态
    #[error("服务端拒绝保存 (状态码: {status})")]
    ServerRejected { status: u16 },
    /// 网络传输失败
    #[error("保存请求发送失败: {source}")]
    Transport {
        #[source]
        source: reqwest::Error,
    },
    /// 响应体不是预期的结构
    #[error("保存响应解析失败: {source}")]
    MalformedBody {
        #[source]
        source: reqwest::Error,
    },
}

/// 唤醒相关错误
#[derive(Debug, Error)]
pub enum WakeUpError {
    /// 轮询预算耗尽，后端始终未就绪
    #[error("后端唤醒超时 (已轮询 {attempts} 次)")]
    Timeout { attempts: usize },
}

/// 业务逻辑错误
#[derive(Debug, Error)]
pub enum BusinessError {
    /// 页面上没有可提取的对话内容
    #[error("页面上没有可保存的对话内容")]
    EmptyConversation,
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 读取配置文件失败
    #[error("读取配置文件失败 ({path}): {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// TOML 解析失败
    #[error("配置文件解析失败 ({path}): {source}")]
    ParseFailed {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

impl From<chromiumoxide::error::CdpError> for AppError {
    fn from(err: chromiumoxide::error::CdpError) -> Self {
        AppError::Browser(BrowserError::ScriptExecutionFailed {
            source: Box::new(err),
        })
    }
}

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
