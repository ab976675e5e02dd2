//! Twilio 渠道 - 通过 Messages REST API 发送 WhatsApp 消息

use std::time::{Duration, Instant};

use serde::Deserialize;
use tracing::{debug, info};

use crate::config::{
    MonitorConfig, TwilioCredentials, DEFAULT_NOTIFY_TIMEOUT_SECS, DEFAULT_TWILIO_API_BASE,
};
use crate::error::{DeliveryError, Result};
use crate::notification::channel::{NotificationChannel, NotificationMessage, SendReceipt};

/// Twilio 渠道配置
#[derive(Debug, Clone)]
pub struct TwilioConfig {
    pub credentials: TwilioCredentials,
    /// API 基础 URL（测试时指向 mock server）
    pub api_base: String,
    pub timeout: Duration,
}

impl TwilioConfig {
    pub fn new(credentials: TwilioCredentials) -> Self {
        Self {
            credentials,
            api_base: DEFAULT_TWILIO_API_BASE.to_string(),
            timeout: Duration::from_secs(DEFAULT_NOTIFY_TIMEOUT_SECS),
        }
    }

    pub fn from_monitor_config(config: &MonitorConfig) -> Self {
        Self {
            credentials: config.twilio.clone(),
            api_base: config.twilio_api_base.clone(),
            timeout: config.notify_timeout,
        }
    }

    /// Messages 资源地址
    pub fn messages_url(&self) -> String {
        format!(
            "{}/2010-04-01/Accounts/{}/Messages.json",
            self.api_base.trim_end_matches('/'),
            self.credentials.account_sid
        )
    }
}

/// 创建成功的响应（只关心 sid）
#[derive(Debug, Deserialize)]
struct MessageResource {
    sid: String,
}

/// 错误响应
#[derive(Debug, Deserialize)]
struct TwilioErrorResponse {
    #[serde(default)]
    code: Option<i64>,
    message: String,
}

pub struct TwilioChannel {
    client: reqwest::blocking::Client,
    config: TwilioConfig,
}

impl TwilioChannel {
    pub fn new(config: TwilioConfig) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(DeliveryError::Transport)?;

        Ok(Self { client, config })
    }
}

impl NotificationChannel for TwilioChannel {
    fn name(&self) -> &str {
        "twilio"
    }

    fn send(&self, message: &NotificationMessage) -> Result<SendReceipt> {
        let creds = &self.config.credentials;
        let start = Instant::now();

        debug!(
            from = %creds.from,
            to = %creds.to,
            body_len = message.content.len(),
            "Sending message through Twilio"
        );

        let response = self
            .client
            .post(self.config.messages_url())
            .basic_auth(&creds.account_sid, Some(&creds.auth_token))
            .form(&[
                ("From", creds.from.as_str()),
                ("To", creds.to.as_str()),
                ("Body", message.content.as_str()),
            ])
            .send()
            .map_err(DeliveryError::Transport)?;

        let status = response.status();
        let body = response.text().map_err(DeliveryError::Transport)?;
        debug!(
            status = status.as_u16(),
            elapsed_ms = start.elapsed().as_millis(),
            "Twilio request completed"
        );

        if !status.is_success() {
            return Err(rejection(status.as_u16(), &body).into());
        }

        let resource: MessageResource = serde_json::from_str(&body)
            .map_err(|e| DeliveryError::InvalidResponse(format!("{} - body: {}", e, body)))?;

        info!(sid = %resource.sid, "Message sent");
        Ok(SendReceipt {
            channel: self.name().to_string(),
            message_id: resource.sid,
        })
    }
}

/// 将非 2xx 响应映射为 DeliveryError
fn rejection(status: u16, body: &str) -> DeliveryError {
    let (code, message) = match serde_json::from_str::<TwilioErrorResponse>(body) {
        Ok(err) => (err.code, err.message),
        Err(_) => (None, body.to_string()),
    };

    if status == 401 {
        DeliveryError::Authentication { message }
    } else {
        DeliveryError::Rejected { status, code, message }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credentials() -> TwilioCredentials {
        TwilioCredentials {
            account_sid: "AC123".to_string(),
            auth_token: "secret".to_string(),
            from: "whatsapp:+14155238886".to_string(),
            to: "whatsapp:+5521999999999".to_string(),
        }
    }

    #[test]
    fn test_messages_url() {
        let mut config = TwilioConfig::new(credentials());
        assert_eq!(
            config.messages_url(),
            "https://api.twilio.com/2010-04-01/Accounts/AC123/Messages.json"
        );

        config.api_base = "http://127.0.0.1:8080/".to_string();
        assert_eq!(
            config.messages_url(),
            "http://127.0.0.1:8080/2010-04-01/Accounts/AC123/Messages.json"
        );
    }

    #[test]
    fn test_rejection_authentication() {
        let body = r#"{
            "code": 20003,
            "message": "Authenticate",
            "more_info": "https://www.twilio.com/docs/errors/20003",
            "status": 401
        }"#;
        match rejection(401, body) {
            DeliveryError::Authentication { message } => assert_eq!(message, "Authenticate"),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_rejection_invalid_recipient() {
        let body = r#"{
            "code": 21211,
            "message": "The 'To' number is not a valid phone number.",
            "status": 400
        }"#;
        match rejection(400, body) {
            DeliveryError::Rejected { status, code, message } => {
                assert_eq!(status, 400);
                assert_eq!(code, Some(21211));
                assert!(message.contains("'To'"));
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_rejection_non_json_body() {
        match rejection(503, "Service Unavailable") {
            DeliveryError::Rejected { code, message, .. } => {
                assert_eq!(code, None);
                assert_eq!(message, "Service Unavailable");
            }
            other => panic!("unexpected: {:?}", other),
        }
    }
}
