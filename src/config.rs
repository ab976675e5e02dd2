//! 监控配置 - 进程启动时从环境变量构建一次，之后只读
//!
//! 读取环境变量的逻辑只存在于此模块；其余阶段通过参数接收 `MonitorConfig`。

use std::time::Duration;

use crate::error::{MonitorError, Result};

/// 默认监控页面
pub const DEFAULT_SITE_URL: &str = "https://www.cap.ufrj.br/index.php/ingresso-no-cap";

/// 默认关键词（逗号分隔）
pub const DEFAULT_KEYWORDS: &str = "Edital 2026,Admissão de Estudantes 2026";

/// 默认发送方（Twilio WhatsApp sandbox）
pub const DEFAULT_TWILIO_FROM: &str = "whatsapp:+14155238886";

/// 默认消息标题中的站点名称
pub const DEFAULT_MONITOR_NAME: &str = "CAP-UFRJ";

/// Twilio REST API 基础 URL
pub const DEFAULT_TWILIO_API_BASE: &str = "https://api.twilio.com";

/// 页面获取超时（秒），固定值
pub const FETCH_TIMEOUT_SECS: u64 = 30;

/// 消息发送默认超时（秒）
pub const DEFAULT_NOTIFY_TIMEOUT_SECS: u64 = 30;

/// 模拟浏览器的 User-Agent
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Twilio 凭证与地址
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TwilioCredentials {
    pub account_sid: String,
    pub auth_token: String,
    /// 发送方，带渠道前缀，如 `whatsapp:+14155238886`
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone)]
pub struct MonitorConfig {
    pub site_url: String,
    /// 按配置顺序保存，匹配结果沿用此顺序
    pub keywords: Vec<String>,
    pub monitor_name: String,
    pub twilio: TwilioCredentials,
    pub twilio_api_base: String,
    pub fetch_timeout: Duration,
    pub notify_timeout: Duration,
}

impl MonitorConfig {
    /// 从进程环境变量加载
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// 通过任意查找函数加载（测试中用 HashMap 代替环境变量）
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        // 空白值视为未设置
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let sid = get("TWILIO_SID");
        let token = get("TWILIO_TOKEN");
        let to = get("TWILIO_TO");

        let missing: Vec<&str> = [
            ("TWILIO_SID", sid.is_none()),
            ("TWILIO_TOKEN", token.is_none()),
            ("TWILIO_TO", to.is_none()),
        ]
        .iter()
        .filter(|(_, absent)| *absent)
        .map(|(name, _)| *name)
        .collect();

        let (Some(account_sid), Some(auth_token), Some(to)) = (sid, token, to) else {
            return Err(MonitorError::missing_variables(&missing));
        };

        let notify_timeout_secs = match get("TWILIO_TIMEOUT_SECS") {
            Some(raw) => raw.trim().parse::<u64>().map_err(|_| {
                MonitorError::Configuration(format!(
                    "TWILIO_TIMEOUT_SECS must be a whole number of seconds, got '{}'",
                    raw
                ))
            })?,
            None => DEFAULT_NOTIFY_TIMEOUT_SECS,
        };

        let keywords = parse_keywords(
            &get("PALAVRAS_CHAVE").unwrap_or_else(|| DEFAULT_KEYWORDS.to_string()),
        );

        Ok(Self {
            site_url: get("SITE_URL").unwrap_or_else(|| DEFAULT_SITE_URL.to_string()),
            keywords,
            monitor_name: get("MONITOR_NAME").unwrap_or_else(|| DEFAULT_MONITOR_NAME.to_string()),
            twilio: TwilioCredentials {
                account_sid,
                auth_token,
                from: get("TWILIO_FROM").unwrap_or_else(|| DEFAULT_TWILIO_FROM.to_string()),
                to,
            },
            twilio_api_base: get("TWILIO_API_BASE")
                .map(|u| u.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_TWILIO_API_BASE.to_string()),
            fetch_timeout: Duration::from_secs(FETCH_TIMEOUT_SECS),
            notify_timeout: Duration::from_secs(notify_timeout_secs),
        })
    }
}

/// 拆分逗号分隔的关键词，去掉首尾空白并丢弃空项
pub fn parse_keywords(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(str::to_string)
        .collect()
}
