//! Reminder email service
//!
//! Sends inactivity reminder emails over SMTP. Delivery is best-effort: a
//! failed send is logged and swallowed so it can never abort a batch run.

use async_trait::async_trait;
use lettre::{
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
    message::header::ContentType,
    transport::smtp::authentication::Credentials,
};

use crate::{
    config::SmtpConfig,
    constants::REMINDER_EMAIL_SUBJECT,
    error::{AppError, AppResult},
};

/// Notifier abstraction so the batch job can be tested without SMTP
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReminderNotifier: Send + Sync {
    /// Send an inactivity reminder; returns whether delivery succeeded
    async fn send_reminder(&self, email: &str, name: &str) -> bool;
}

/// SMTP-backed reminder notifier
pub struct EmailNotifier {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from_address: String,
}

impl EmailNotifier {
    /// Create a notifier from SMTP configuration
    pub fn new(config: &SmtpConfig) -> AppResult<Self> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)
            .map_err(|e| AppError::Configuration(format!("SMTP relay: {e}")))?
            .port(config.port)
            .credentials(Credentials::new(
                config.username.clone(),
                config.password.clone(),
            ))
            .build();

        Ok(Self {
            transport,
            from_address: config.from_address.clone(),
        })
    }

    fn reminder_body(name: &str) -> String {
        format!(
            "Hello {name},\n\n\
             We noticed you haven't made any Codeforces submissions in the last 7 days. \
             It's a great time to solve a few problems and keep improving!\n\n\
             Happy coding!"
        )
    }
}

#[async_trait]
impl ReminderNotifier for EmailNotifier {
    async fn send_reminder(&self, email: &str, name: &str) -> bool {
        let message = Message::builder()
            .from(match self.from_address.parse() {
                Ok(from) => from,
                Err(e) => {
                    tracing::error!("Invalid sender address {}: {}", self.from_address, e);
                    return false;
                }
            })
            .to(match email.parse() {
                Ok(to) => to,
                Err(e) => {
                    tracing::warn!("Invalid recipient address {}: {}", email, e);
                    return false;
                }
            })
            .subject(REMINDER_EMAIL_SUBJECT)
            .header(ContentType::TEXT_PLAIN)
            .body(Self::reminder_body(name));

        let message = match message {
            Ok(m) => m,
            Err(e) => {
                tracing::error!("Failed to build reminder email for {}: {}", email, e);
                return false;
            }
        };

        match self.transport.send(message).await {
            Ok(_) => {
                tracing::info!("Reminder email sent to {}", email);
                true
            }
            Err(e) => {
                tracing::error!("Failed to send email to {}: {}", email, e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reminder_body_mentions_recipient() {
        let body = EmailNotifier::reminder_body("Alice");
        assert!(body.starts_with("Hello Alice,"));
        assert!(body.contains("last 7 days"));
    }
}
