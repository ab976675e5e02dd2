//! 通知渠道 trait 定义

use crate::error::Result;

/// 通知消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationMessage {
    /// 消息内容（已格式化）
    pub content: String,
}

impl NotificationMessage {
    /// 创建简单消息
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

/// 发送成功后的回执
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendReceipt {
    /// 渠道名称
    pub channel: String,
    /// 渠道返回的消息 ID（Twilio 为 SID）
    pub message_id: String,
}

/// 通知渠道 trait
pub trait NotificationChannel {
    /// 渠道名称（用于日志）
    fn name(&self) -> &str;

    /// 同步发送消息，失败不重试
    fn send(&self, message: &NotificationMessage) -> Result<SendReceipt>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_message_new() {
        let msg = NotificationMessage::new(String::from("olá"));
        assert_eq!(msg, NotificationMessage::new("olá"));
        assert_eq!(msg.content, "olá");
    }
}
