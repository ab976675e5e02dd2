//! 消息格式化 - 将匹配结果转换为 WhatsApp 通知文本
//!
//! 纯函数：输入匹配结果、时间戳与 URL，不读取时钟也不发送任何东西。

use std::fmt::Display;

use chrono::{DateTime, TimeZone};

use super::channel::NotificationMessage;
use crate::matcher::MatchOutcome;

/// Notification message constants (Portuguese)
pub mod msg {
    pub const HEADER: &str = "📋 Monitoramento";
    pub const ALERT: &str = "🚨 **ALERTA!** Foram encontrados os termos:";
    pub const TERMS_PREFIX: &str = "📌";
    pub const LINK_PREFIX: &str = "🔗 Acesse:";
    pub const NO_CHANGES: &str = "✅ Nenhuma novidade encontrada.";
    pub const NO_TERMS: &str = "Não foram localizados os termos monitorados.";
}

/// 日/月/年 时:分
pub fn format_timestamp<Tz>(timestamp: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    timestamp.format("%d/%m/%Y às %H:%M").to_string()
}

/// 组装通知消息
pub fn compose<Tz>(
    monitor_name: &str,
    outcome: &MatchOutcome,
    timestamp: &DateTime<Tz>,
    source_url: &str,
) -> NotificationMessage
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let when = format_timestamp(timestamp);
    let mut content = format!("{} {} - {}\n\n", msg::HEADER, monitor_name, when);

    if outcome.matched {
        content.push_str(msg::ALERT);
        content.push('\n');
        content.push_str(&format!("{} {}\n\n", msg::TERMS_PREFIX, outcome.keywords.join(", ")));
        content.push_str(&format!("{} {}", msg::LINK_PREFIX, source_url));
    } else {
        content.push_str(msg::NO_CHANGES);
        content.push('\n');
        content.push_str(msg::NO_TERMS);
    }

    NotificationMessage::new(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, TimeZone};

    fn at(day: u32, hour: u32, minute: u32) -> DateTime<FixedOffset> {
        FixedOffset::west_opt(3 * 3600)
            .unwrap()
            .with_ymd_and_hms(2026, 3, day, hour, minute, 0)
            .unwrap()
    }

    const URL: &str = "https://www.cap.ufrj.br/index.php/ingresso-no-cap";

    #[test]
    fn test_timestamp_day_month_year() {
        assert_eq!(format_timestamp(&at(7, 9, 5)), "07/03/2026 às 09:05");
    }

    #[test]
    fn test_alert_message() {
        let outcome = MatchOutcome {
            matched: true,
            keywords: vec!["Edital 2026".to_string(), "Admissão de Estudantes 2026".to_string()],
        };
        let message = compose("CAP-UFRJ", &outcome, &at(15, 14, 30), URL);

        assert_eq!(
            message.content,
            format!(
                "📋 Monitoramento CAP-UFRJ - 15/03/2026 às 14:30\n\n\
                 🚨 **ALERTA!** Foram encontrados os termos:\n\
                 📌 Edital 2026, Admissão de Estudantes 2026\n\n\
                 🔗 Acesse: {}",
                URL
            )
        );
    }

    #[test]
    fn test_no_changes_message() {
        let message = compose("CAP-UFRJ", &MatchOutcome::default(), &at(1, 0, 0), URL);

        assert!(message
            .content
            .starts_with("📋 Monitoramento CAP-UFRJ - 01/03/2026 às 00:00\n\n"));
        assert!(message.content.contains("Nenhuma novidade encontrada"));
        assert!(message.content.contains(msg::NO_TERMS));
        assert!(!message.content.contains(URL));
    }
}
