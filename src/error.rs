//! 错误类型 - 每个阶段返回带标签的错误，由 orchestrator 统一记录

use thiserror::Error;

/// 一次监控调用中可能出现的失败
#[derive(Debug, Error)]
pub enum MonitorError {
    /// 必需的环境变量缺失或取值非法
    #[error("configuration error: {0}")]
    Configuration(String),

    /// 页面获取失败（非 2xx 或网络错误）
    #[error("fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// 消息渠道拒绝发送
    #[error("delivery error: {0}")]
    Delivery(#[from] DeliveryError),
}

impl MonitorError {
    /// 缺失的必需变量
    pub fn missing_variables(names: &[&str]) -> Self {
        Self::Configuration(format!(
            "missing required environment variables: {}",
            names.join(", ")
        ))
    }

    /// 用于日志的错误类别
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Configuration(_) => "ConfigurationError",
            Self::Fetch(_) => "FetchError",
            Self::Delivery(_) => "DeliveryError",
        }
    }
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("{url} responded with HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("cannot create HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

#[derive(Debug, Error)]
pub enum DeliveryError {
    /// 凭证被拒绝（HTTP 401）
    #[error("authentication failed: {message}")]
    Authentication { message: String },

    /// API 拒绝了请求，例如收件人无效
    #[error("message rejected (HTTP {status}, code {code:?}): {message}")]
    Rejected {
        status: u16,
        code: Option<i64>,
        message: String,
    },

    #[error("messaging API request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("unexpected messaging API response: {0}")]
    InvalidResponse(String),
}

pub type Result<T> = std::result::Result<T, MonitorError>;
