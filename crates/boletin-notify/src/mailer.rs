//! SMTP delivery of the composed digest

use crate::Digest;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};
use thiserror::Error;
use tracing::info;

/// Default SMTP submission port.
pub const DEFAULT_SMTP_PORT: u16 = 587;

/// Errors that can occur while delivering a digest.
#[derive(Error, Debug)]
pub enum NotifyError {
    /// A configured address could not be parsed
    #[error("Invalid address: {0}")]
    Address(#[from] lettre::address::AddressError),

    /// The message could not be assembled
    #[error("Message error: {0}")]
    Message(#[from] lettre::error::Error),

    /// SMTP transport failure
    #[error("SMTP error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),
}

/// Raw, possibly incomplete transport configuration.
///
/// Every field except the port is optional at the configuration surface;
/// [`MailerConfig::complete`] decides whether delivery is possible at all.
#[derive(Debug, Clone, Default)]
pub struct MailerConfig {
    /// SMTP host
    pub host: Option<String>,
    /// SMTP port; defaults to 587 when unset
    pub port: Option<u16>,
    /// Login user
    pub username: Option<String>,
    /// Login password
    pub password: Option<String>,
    /// Sender address
    pub from: Option<String>,
    /// Comma-separated recipient addresses
    pub to: Option<String>,
}

impl MailerConfig {
    /// Validate into usable settings, or `None` when any required piece is
    /// missing. Missing transport configuration is a choice, not a fault:
    /// the caller skips delivery with a logged notice.
    pub fn complete(&self) -> Option<SmtpSettings> {
        let host = self.host.clone()?;
        let username = self.username.clone()?;
        let password = self.password.clone()?;
        let from = self.from.clone()?;

        let recipients: Vec<String> = self
            .to
            .as_deref()?
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();
        if recipients.is_empty() {
            return None;
        }

        Some(SmtpSettings {
            host,
            port: self.port.unwrap_or(DEFAULT_SMTP_PORT),
            username,
            password,
            from,
            recipients,
        })
    }
}

/// Fully validated transport settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmtpSettings {
    /// SMTP host
    pub host: String,
    /// SMTP port
    pub port: u16,
    /// Login user
    pub username: String,
    /// Login password
    pub password: String,
    /// Sender address
    pub from: String,
    /// Recipient addresses
    pub recipients: Vec<String>,
}

/// Seam for digest delivery, so the pipeline can be tested without a
/// transport.
pub trait Mailer {
    /// Deliver one digest.
    fn send(&self, digest: &Digest) -> Result<(), NotifyError>;
}

/// Digest delivery over authenticated SMTP with STARTTLS.
pub struct SmtpMailer {
    settings: SmtpSettings,
}

impl SmtpMailer {
    /// Create a mailer from validated settings.
    pub fn new(settings: SmtpSettings) -> Self {
        Self { settings }
    }
}

impl Mailer for SmtpMailer {
    fn send(&self, digest: &Digest) -> Result<(), NotifyError> {
        let mut builder = Message::builder()
            .from(self.settings.from.parse::<Mailbox>()?)
            .subject(digest.subject.clone());
        for recipient in &self.settings.recipients {
            builder = builder.to(recipient.parse::<Mailbox>()?);
        }
        let message = builder.body(digest.body.clone())?;

        let transport = SmtpTransport::starttls_relay(&self.settings.host)?
            .port(self.settings.port)
            .credentials(Credentials::new(
                self.settings.username.clone(),
                self.settings.password.clone(),
            ))
            .build();

        transport.send(&message)?;
        info!(
            "digest sent to {} recipient(s)",
            self.settings.recipients.len()
        );
        Ok(())
    }
}
