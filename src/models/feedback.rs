use serde::Deserialize;

/// 反馈消息
#[derive(Debug, Clone, Deserialize)]
pub struct FeedbackMessage {
    #[serde(rename = "type")]
    pub kind: String,
    pub content: String,
}
