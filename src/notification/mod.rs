//! 通知层 - 消息格式化与发送渠道
//!
//! 所有渠道实现 `NotificationChannel` trait；`formatter` 负责把匹配结果组装成消息文本。
//!
//! # 使用示例
//! ```ignore
//! use page_monitor::notification::{compose, NotificationChannel, TwilioChannel, TwilioConfig};
//!
//! let message = compose("CAP-UFRJ", &outcome, &chrono::Local::now(), &config.site_url);
//! let channel = TwilioChannel::new(TwilioConfig::from_monitor_config(&config))?;
//! let receipt = channel.send(&message)?;
//! ```

pub mod channel;
pub mod channels;
pub mod formatter;

pub use channel::{NotificationChannel, NotificationMessage, SendReceipt};
pub use channels::{ConsoleChannel, TwilioChannel, TwilioConfig};
pub use formatter::{compose, format_timestamp, msg};
