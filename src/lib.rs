//! Page Monitor - 监控网页中的关键词并通过 WhatsApp (Twilio) 发送提醒
//!
//! 每次运行执行一轮：获取页面 → 提取正文 → 匹配关键词 → 组装消息 → 发送。
//! 周期性执行交给外部调度（cron 等）。

pub mod config;
pub mod error;
pub mod extractor;
pub mod fetcher;
pub mod matcher;
pub mod monitor;
pub mod notification;

pub use config::{MonitorConfig, TwilioCredentials};
pub use error::{DeliveryError, FetchError, MonitorError};
pub use extractor::{extract, ExtractedText, ExtractionSource, ExtractionStrategy, STRATEGIES};
pub use fetcher::{FetchResult, HttpPageSource, PageSource};
pub use matcher::{find_keywords, MatchOutcome};
pub use monitor::{invoke, CycleReport, InvocationState, PageMonitor};
pub use notification::{
    compose, ConsoleChannel, NotificationChannel, NotificationMessage, SendReceipt, TwilioChannel,
    TwilioConfig,
};

/// 使用进程环境变量执行一次监控
///
/// `dry_run` 为 true 时消息只打印到 stdout，不调用 Twilio。
pub fn run(dry_run: bool) -> InvocationState {
    let loaded = MonitorConfig::from_env();

    if dry_run {
        invoke(loaded, |config| {
            Ok((HttpPageSource::from_config(config)?, ConsoleChannel::new()))
        })
    } else {
        invoke(loaded, |config| {
            let channel = TwilioChannel::new(TwilioConfig::from_monitor_config(config))?;
            Ok((HttpPageSource::from_config(config)?, channel))
        })
    }
}
