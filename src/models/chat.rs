//! 对话数据模型
//!
//! 定义从页面提取的问答记录及其批次结构

use serde::{Deserialize, Serialize};

/// 单条问答记录
///
/// 由页面上第 i 个提问节点与第 i 个回答节点配对而成
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatRecord {
    /// 用户提问的可见文本
    pub question: String,
    /// 模型回答的可见文本
    pub answer: String,
}

/// 问答批次
///
/// 职责：
/// - 按位置索引配对提问和回答，长度取两侧的较小值
/// - 多出的未配对节点按策略直接丢弃（不是 bug，见 `pair` 文档）
/// - 构建后不可变，仅在一次提交中使用
///
/// 序列化为 JSON 数组（透明包装）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ChatBatch(Vec<ChatRecord>);

impl ChatBatch {
    /// 按位置索引配对提问与回答
    ///
    /// 配对长度为 `min(questions.len(), answers.len())`，
    /// 任意一侧多出的元素被静默截断。顺序保持文档顺序。
    pub fn pair(questions: Vec<String>, answers: Vec<String>) -> Self {
        let records = questions
            .into_iter()
            .zip(answers)
            .map(|(question, answer)| ChatRecord { question, answer })
            .collect();
        Self(records)
    }

    /// 批次中的记录数量
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// 批次是否为空
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// 只读访问全部记录
    pub fn records(&self) -> &[ChatRecord] {
        &self.0
    }
}

/// 后端批量保存接口的响应体
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct SaveResponse {
    /// 本次实际保存的记录数
    pub saved_count: u64,
}

/// 后端可用性状态
///
/// 仅在一次门控调用期间存在，不做任何持久化
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AvailabilityState {
    /// 尚未探测
    Unknown,
    /// 探测成功（HTTP 2xx）
    Alive,
    /// 探测失败（非 2xx / 网络错误 / 超时）
    Dead,
    /// 已发出唤醒信号，正在轮询等待
    Waking,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_pair_equal_counts() {
        let batch = ChatBatch::pair(texts(&["q1", "q2"]), texts(&["a1", "a2"]));

        assert_eq!(batch.len(), 2);
        assert_eq!(batch.records()[0].question, "q1");
        assert_eq!(batch.records()[0].answer, "a1");
        assert_eq!(batch.records()[1].question, "q2");
        assert_eq!(batch.records()[1].answer, "a2");
    }

    #[test]
    fn test_pair_truncates_extra_questions() {
        // 提问多于回答时，多出的提问被丢弃
        let batch = ChatBatch::pair(texts(&["q1", "q2", "q3"]), texts(&["a1"]));

        assert_eq!(batch.len(), 1);
        assert_eq!(batch.records()[0].question, "q1");
        assert_eq!(batch.records()[0].answer, "a1");
    }

    #[test]
    fn test_pair_truncates_extra_answers() {
        // 回答多于提问时同理
        let batch = ChatBatch::pair(texts(&["q1"]), texts(&["a1", "a2", "a3"]));

        assert_eq!(batch.len(), 1);
        assert_eq!(batch.records()[0].answer, "a1");
    }

    #[test]
    fn test_pair_preserves_document_order() {
        let questions: Vec<String> = (0..5).map(|i| format!("q{}", i)).collect();
        let answers: Vec<String> = (0..5).map(|i| format!("a{}", i)).collect();

        let batch = ChatBatch::pair(questions, answers);

        for (i, record) in batch.records().iter().enumerate() {
            assert_eq!(record.question, format!("q{}", i));
            assert_eq!(record.answer, format!("a{}", i));
        }
    }

    #[test]
    fn test_batch_serializes_as_array() {
        let batch = ChatBatch::pair(texts(&["你好"]), texts(&["回复"]));

        let json = serde_json::to_value(&batch).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{"question": "你好", "answer": "回复"}])
        );
    }

    #[test]
    fn test_save_response_parsing() {
        let response: SaveResponse = serde_json::from_str(r#"{"saved_count": 5}"#).unwrap();
        assert_eq!(response.saved_count, 5);
    }
}
