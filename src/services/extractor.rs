//! 对话提取服务 - 业务能力层
//!
//! 只负责"从当前页面读出问答对"能力，不发起任何网络请求

use crate::error::{AppResult, BusinessError};
use crate::infrastructure::JsExecutor;
use crate::models::ChatBatch;
use crate::utils::logging::truncate_text;
use serde::Deserialize;
use tracing::{debug, info};

/// 一次 DOM 遍历收集到的原始节点文本
#[derive(Debug, Deserialize)]
struct ExtractedNodes {
    questions: Vec<String>,
    answers: Vec<String>,
}

/// 对话提取器
///
/// 职责：
/// - 按文档顺序收集提问节点和回答节点的可见文本（innerText，非原始标记）
/// - 按位置索引配对成 ChatBatch
/// - 只读遍历，不修改 DOM
pub struct ChatExtractor {
    query_selector: String,
    response_selector: String,
}

impl ChatExtractor {
    /// 创建新的提取器
    pub fn new(query_selector: impl Into<String>, response_selector: impl Into<String>) -> Self {
        Self {
            query_selector: query_selector.into(),
            response_selector: response_selector.into(),
        }
    }

    /// 提取当前页面上的全部问答对
    ///
    /// 页面上没有任何提问节点时返回 `EmptyConversation`，
    /// 由调用方向用户提示，不再尝试提交
    pub async fn extract(&self, executor: &JsExecutor) -> AppResult<ChatBatch> {
        let query_sel = serde_json::to_string(&self.query_selector).unwrap_or_default();
        let response_sel = serde_json::to_string(&self.response_selector).unwrap_or_default();
        let js_code = format!(
            r#"
            (() => {{
                const questions = Array.from(document.querySelectorAll({})).map(n => n.innerText);
                const answers = Array.from(document.querySelectorAll({})).map(n => n.innerText);
                return {{ questions, answers }};
            }})()
            "#,
            query_sel, response_sel
        );

        let nodes: ExtractedNodes = executor.eval_as(js_code).await?;
        Self::batch_from_nodes(nodes)
    }

    /// 把原始节点文本整理成批次
    fn batch_from_nodes(nodes: ExtractedNodes) -> AppResult<ChatBatch> {
        debug!(
            "提取到 {} 个提问节点 / {} 个回答节点",
            nodes.questions.len(),
            nodes.answers.len()
        );

        if nodes.questions.is_empty() {
            return Err(BusinessError::EmptyConversation.into());
        }

        if let Some(first) = nodes.questions.first() {
            debug!("首条提问预览: {}", truncate_text(first, 80));
        }

        let batch = ChatBatch::pair(nodes.questions, nodes.answers);
        info!("✓ 提取完成，共 {} 组对话", batch.len());
        Ok(batch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    fn nodes(questions: &[&str], answers: &[&str]) -> ExtractedNodes {
        ExtractedNodes {
            questions: questions.iter().map(|s| s.to_string()).collect(),
            answers: answers.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_no_questions_is_empty_conversation() {
        // 没有提问节点时直接报业务错误，后续提交不应被触发
        let result = ChatExtractor::batch_from_nodes(nodes(&[], &["a1", "a2"]));

        assert!(matches!(
            result,
            Err(AppError::Business(BusinessError::EmptyConversation))
        ));
    }

    #[test]
    fn test_pairs_by_position() {
        let batch = ChatExtractor::batch_from_nodes(nodes(&["q1", "q2"], &["a1", "a2"])).unwrap();

        assert_eq!(batch.len(), 2);
        assert_eq!(batch.records()[1].question, "q2");
        assert_eq!(batch.records()[1].answer, "a2");
    }

    #[test]
    fn test_unanswered_trailing_question_dropped() {
        // 最后一问还没有回答时，该问被截断丢弃
        let batch = ChatExtractor::batch_from_nodes(nodes(&["q1", "q2"], &["a1"])).unwrap();

        assert_eq!(batch.len(), 1);
        assert_eq!(batch.records()[0].question, "q1");
    }
}
