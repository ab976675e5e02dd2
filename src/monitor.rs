//! 监控编排 - 配置 → 获取 → 提取 → 匹配 → 格式化 → 发送，每次调用只跑一轮
//!
//! 任一阶段失败都会在此处以 ERROR 级别记录并转换为 `InvocationState::Failed`，
//! 不会继续向上抛出。没有重试，也没有部分完成状态。

use chrono::{DateTime, Local};
use tracing::{error, info};

use crate::config::MonitorConfig;
use crate::error::Result;
use crate::extractor::{self, ExtractionSource};
use crate::fetcher::PageSource;
use crate::matcher::{self, MatchOutcome};
use crate::notification::{self, NotificationChannel, NotificationMessage, SendReceipt};

/// 单次调用的终止状态（`invoke` 执行期间即为 running）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvocationState {
    Succeeded,
    Failed,
}

impl InvocationState {
    pub fn succeeded(self) -> bool {
        self == Self::Succeeded
    }
}

/// 一轮监控的结果
#[derive(Debug, Clone)]
pub struct CycleReport {
    pub source: ExtractionSource,
    pub outcome: MatchOutcome,
    pub message: NotificationMessage,
    pub receipt: SendReceipt,
}

/// 页面监控器
pub struct PageMonitor<S, N> {
    config: MonitorConfig,
    source: S,
    channel: N,
}

impl<S: PageSource, N: NotificationChannel> PageMonitor<S, N> {
    pub fn new(config: MonitorConfig, source: S, channel: N) -> Self {
        Self { config, source, channel }
    }

    pub fn config(&self) -> &MonitorConfig {
        &self.config
    }

    /// 以当前本地时间执行一轮
    pub fn run_cycle(&self) -> Result<CycleReport> {
        self.run_cycle_at(Local::now())
    }

    /// 以指定时间执行一轮
    pub fn run_cycle_at(&self, now: DateTime<Local>) -> Result<CycleReport> {
        let config = &self.config;
        info!(url = %config.site_url, keywords = ?config.keywords, "Starting page monitoring");

        let page = self.source.fetch(&config.site_url)?;
        let extracted = extractor::extract(&page.body);
        let outcome = matcher::find_keywords(&extracted.text, &config.keywords);

        let message = notification::compose(&config.monitor_name, &outcome, &now, &config.site_url);
        let receipt = self.channel.send(&message)?;

        info!(
            channel = %receipt.channel,
            message_id = %receipt.message_id,
            matched = outcome.matched,
            "Notification delivered"
        );

        Ok(CycleReport {
            source: extracted.source,
            outcome,
            message,
            receipt,
        })
    }
}

/// 执行一次完整调用
///
/// `connect` 只会在配置加载成功后被调用，因此配置错误时不会创建任何网络组件。
pub fn invoke<S, N, F>(loaded: Result<MonitorConfig>, connect: F) -> InvocationState
where
    S: PageSource,
    N: NotificationChannel,
    F: FnOnce(&MonitorConfig) -> Result<(S, N)>,
{
    let result = loaded.and_then(|config| {
        let (source, channel) = connect(&config)?;
        PageMonitor::new(config, source, channel).run_cycle()
    });

    match result {
        Ok(report) => {
            info!(matched = report.outcome.matched, "Monitoring finished");
            InvocationState::Succeeded
        }
        Err(e) => {
            error!(kind = e.kind(), error = %e, "❌ Monitoring failed");
            InvocationState::Failed
        }
    }
}
