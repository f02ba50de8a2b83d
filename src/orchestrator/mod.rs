//! 编排层（Orchestration Layer）
//!
//! ## 职责
//!
//! 持有 Browser / JsExecutor 等稀缺资源，把业务能力组装成用户动作。
//!
//! ## 层次关系
//!
//! ```text
//! orchestrator::Session (用户动作: save_all / open_dashboard)
//!     ↓
//! workflow::Gate / WakeUpController (前置条件: 后端已就绪)
//!     ↓
//! services (能力层: probe / extract / submit / indicator / dashboard)
//!     ↓
//! infrastructure (基础设施: JsExecutor)
//! ```
//!
//! ## 设计原则
//!
//! 1. **资源隔离**：只有编排层持有 Browser
//! 2. **显式句柄**：状态指示、面板弹窗都作为参数/字段传递，无全局可变状态
//! 3. **向下依赖**：orchestrator → workflow → services → infrastructure

pub mod session;

pub use session::Session;
