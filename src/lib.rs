//! # Gemini Manager
//!
//! 把对话页面上的问答保存到本地后端、按需打开分析面板的 Rust 工具，
//! 核心是把"本地后端可能没开"处理成一个有界的唤醒-轮询流程。
//!
//! ## 架构设计
//!
//! 本系统采用严格的四层架构：
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/` - 持有稀缺资源（Page），只暴露能力
//! - `JsExecutor` - 唯一的 page owner，提供 eval() / alert() 能力
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，不关心流程顺序
//! - `HttpProber` - 存活探测能力（永不抛错，失败折叠为 Dead）
//! - `ChatExtractor` - 从页面提取问答对能力
//! - `Submitter` - 批量提交能力（含三阶段状态反馈）
//! - `PageIndicator` / `DashboardWindow` / `SchemeTrigger` - 显式句柄能力
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 定义"一次用户动作"的前置条件
//! - `WakeUpController` - 唤醒状态机（探测 → 信号 → 有界轮询）
//! - `Gate` - 后端就绪后才放行被包裹的动作
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/Session` - 持有 Browser 和全部句柄，
//!   暴露 save_all / open_dashboard 两个用户动作

pub mod browser;
pub mod config;
pub mod error;
pub mod infrastructure;

pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use browser::connect_to_browser_and_page;
pub use config::Config;
pub use error::{AppError, AppResult};
pub use infrastructure::JsExecutor;
pub use models::{AvailabilityState, ChatBatch, ChatRecord, SaveResponse};
pub use orchestrator::Session;
pub use services::{ChatExtractor, DashboardWindow, HttpProber, Submitter};
pub use workflow::{Gate, WakeOutcome, WakeUpController};
