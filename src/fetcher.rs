//! 页面获取 - 带浏览器 User-Agent 的单次 GET，不重试

use std::time::{Duration, Instant};

use reqwest::header::USER_AGENT;
use tracing::debug;

use crate::config::{self, MonitorConfig};
use crate::error::{FetchError, Result};

/// 一次 GET 的结果，提取文本后即丢弃
#[derive(Debug, Clone)]
pub struct FetchResult {
    pub status: u16,
    pub body: String,
}

/// 页面来源（HTTP 实现 + 测试中的 fake）
pub trait PageSource {
    fn fetch(&self, url: &str) -> Result<FetchResult>;
}

/// 基于 reqwest blocking client 的页面来源
pub struct HttpPageSource {
    client: reqwest::blocking::Client,
}

impl HttpPageSource {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(FetchError::Client)?;

        Ok(Self { client })
    }

    pub fn from_config(config: &MonitorConfig) -> Result<Self> {
        Self::new(config.fetch_timeout)
    }
}

impl PageSource for HttpPageSource {
    fn fetch(&self, url: &str) -> Result<FetchResult> {
        let start = Instant::now();
        let transport = |source: reqwest::Error| FetchError::Transport {
            url: url.to_string(),
            source,
        };

        let response = self
            .client
            .get(url)
            .header(USER_AGENT, config::USER_AGENT)
            .send()
            .map_err(transport)?;

        let status = response.status();
        debug!(
            url = %url,
            status = status.as_u16(),
            elapsed_ms = start.elapsed().as_millis(),
            "Page request completed"
        );

        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            }
            .into());
        }

        let body = response.text().map_err(transport)?;

        Ok(FetchResult {
            status: status.as_u16(),
            body,
        })
    }
}
