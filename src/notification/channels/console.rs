//! 控制台渠道 - dry-run 模式下把消息打印到 stdout 而不调用消息 API

use chrono::Local;
use tracing::info;

use crate::error::Result;
use crate::notification::channel::{NotificationChannel, NotificationMessage, SendReceipt};

pub struct ConsoleChannel;

impl ConsoleChannel {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsoleChannel {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationChannel for ConsoleChannel {
    fn name(&self) -> &str {
        "console"
    }

    fn send(&self, message: &NotificationMessage) -> Result<SendReceipt> {
        println!("{}", message.content);
        info!(channel = "console", "Dry run, message printed instead of sent");

        Ok(SendReceipt {
            channel: self.name().to_string(),
            message_id: format!("dry-run-{}", Local::now().format("%Y%m%d%H%M%S")),
        })
    }
}
